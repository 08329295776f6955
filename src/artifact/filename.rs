use crate::error::Error;
use crate::variant::IOS_NET;
use std::fmt;
use std::str::FromStr;

use super::ARTIFACT_PREFIX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edition {
    Community,
    Enterprise,
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edition::Community => write!(f, "community"),
            Edition::Enterprise => write!(f, "enterprise"),
        }
    }
}

/// A `version-buildnumber[-EE]` string such as `3.1.0-97-EE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildDescriptor {
    pub version: String,
    pub build_number: String,
    pub edition: Edition,
}

impl FromStr for BuildDescriptor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() < 2 {
            return Err(Error::MalformedBuildDescriptor(s.to_string()));
        }

        let edition = if parts.len() > 2 && parts[2] == "EE" {
            Edition::Enterprise
        } else {
            Edition::Community
        };

        Ok(Self {
            version: parts[0].to_string(),
            build_number: parts[1].to_string(),
            edition,
        })
    }
}

/// Archive container used for a variant on the build server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    TarGz,
    Zip,
}

impl ArchiveKind {
    pub fn for_variant(variant: &str) -> Self {
        match variant {
            "linux" | "centos6" => ArchiveKind::TarGz,
            _ => ArchiveKind::Zip,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ArchiveKind::TarGz => "tar.gz",
            ArchiveKind::Zip => "zip",
        }
    }
}

/// Computes the archive filename for a variant.
///
/// Without a build descriptor the unversioned name is produced
/// (`couchbase-lite-core-<variant>[-debug].<ext>`); with one, the edition,
/// version and build number are spliced in after the prefix.
pub fn resolve_filename(variant: &str, debug: bool, build: Option<&str>) -> Result<String, Error> {
    let variant = if variant == IOS_NET { "ios" } else { variant };
    let debug_suffix = if debug { "-debug" } else { "" };
    let ext = ArchiveKind::for_variant(variant).extension();

    match build {
        None => Ok(format!(
            "{}-{}{}.{}",
            ARTIFACT_PREFIX, variant, debug_suffix, ext
        )),
        Some(build) => {
            let build: BuildDescriptor = build.parse()?;
            Ok(format!(
                "{}-{}-{}-{}-{}{}.{}",
                ARTIFACT_PREFIX,
                build.edition,
                build.version,
                build.build_number,
                variant,
                debug_suffix,
                ext
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_without_build() {
        assert_eq!(
            resolve_filename("windows-win64", false, None).unwrap(),
            "couchbase-lite-core-windows-win64.zip"
        );
        assert_eq!(
            resolve_filename("centos6", true, None).unwrap(),
            "couchbase-lite-core-centos6-debug.tar.gz"
        );
    }

    #[test]
    fn test_filename_enterprise_build() {
        assert_eq!(
            resolve_filename("linux", true, Some("3.1.0-97-EE")).unwrap(),
            "couchbase-lite-core-enterprise-3.1.0-97-linux-debug.tar.gz"
        );
    }

    #[test]
    fn test_filename_community_build() {
        assert_eq!(
            resolve_filename("macosx", false, Some("3.1.0-97")).unwrap(),
            "couchbase-lite-core-community-3.1.0-97-macosx.zip"
        );
        // Anything other than EE in the third slot is community.
        assert_eq!(
            resolve_filename("macosx", false, Some("3.1.0-97-CE")).unwrap(),
            "couchbase-lite-core-community-3.1.0-97-macosx.zip"
        );
    }

    #[test]
    fn test_filename_ios_net_named_as_ios() {
        assert_eq!(
            resolve_filename("ios/net", false, None).unwrap(),
            "couchbase-lite-core-ios.zip"
        );
        assert_eq!(
            resolve_filename("ios/net", true, Some("3.2.0-5-EE")).unwrap(),
            "couchbase-lite-core-enterprise-3.2.0-5-ios-debug.zip"
        );
    }

    #[test]
    fn test_filename_malformed_build() {
        let err = resolve_filename("linux", false, Some("3.1.0")).unwrap_err();
        assert!(matches!(err, Error::MalformedBuildDescriptor(ref b) if b == "3.1.0"));
    }

    #[test]
    fn test_build_descriptor_parse() {
        let build: BuildDescriptor = "3.1.0-97-EE".parse().unwrap();
        assert_eq!(build.version, "3.1.0");
        assert_eq!(build.build_number, "97");
        assert_eq!(build.edition, Edition::Enterprise);

        let build: BuildDescriptor = "3.1.0-97".parse().unwrap();
        assert_eq!(build.edition, Edition::Community);

        assert!("".parse::<BuildDescriptor>().is_err());
    }

    #[test]
    fn test_archive_kind() {
        assert_eq!(ArchiveKind::for_variant("linux"), ArchiveKind::TarGz);
        assert_eq!(ArchiveKind::for_variant("centos6"), ArchiveKind::TarGz);
        assert_eq!(ArchiveKind::for_variant("android-x86"), ArchiveKind::Zip);
        assert_eq!(ArchiveKind::TarGz.extension(), "tar.gz");
        assert_eq!(ArchiveKind::Zip.extension(), "zip");
    }
}
