use crate::error::Error;
use std::fmt;

/// Operating system and ABI a variant targets. `abi` is empty when the
/// platform has no ABI distinction (macOS, iOS).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsAbi {
    pub os: String,
    pub abi: String,
}

impl OsAbi {
    pub fn new(os: impl Into<String>, abi: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            abi: abi.into(),
        }
    }
}

impl fmt::Display for OsAbi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.abi)
    }
}

/// One entry of the splitting table: the first rule whose `matches`
/// accepts the variant decides the pair.
struct SplitRule {
    name: &'static str,
    matches: fn(&str) -> bool,
    split: fn(&str) -> OsAbi,
}

/// Evaluated top to bottom.
const SPLIT_RULES: &[SplitRule] = &[
    SplitRule {
        name: "x86_64 linux",
        matches: |v| v == "linux" || v == "centos6",
        split: |v| OsAbi::new(v, "x86_64"),
    },
    SplitRule {
        name: "macos",
        matches: |v| v == "macosx",
        split: |_| OsAbi::new("macos", ""),
    },
    SplitRule {
        name: "ios",
        matches: |v| v.starts_with("ios"),
        split: |_| OsAbi::new("ios", ""),
    },
    SplitRule {
        name: "android",
        matches: |v| matches!(split_at_dash(v), Some(("android", _))),
        split: split_plain,
    },
    SplitRule {
        name: "win64",
        matches: |v| matches!(split_at_dash(v), Some((_, abi)) if abi.contains("win64")),
        split: |v| {
            let (_, abi) = split_at_dash(v).unwrap_or_default();
            OsAbi::new("windows", abi.replace("win64", "x86_64"))
        },
    },
    SplitRule {
        name: "os-abi",
        matches: |v| split_at_dash(v).is_some(),
        split: split_plain,
    },
];

fn split_at_dash(variant: &str) -> Option<(&str, &str)> {
    variant.split_once('-')
}

fn split_plain(variant: &str) -> OsAbi {
    let (os, abi) = split_at_dash(variant).unwrap_or((variant, ""));
    OsAbi::new(os, abi)
}

/// Splits a concrete variant into its OS/ABI pair.
///
/// Meta-variants must be expanded before calling this; a token without a
/// dash that matches no fixed name is rejected.
pub fn split_variant(variant: &str) -> Result<OsAbi, Error> {
    SPLIT_RULES
        .iter()
        .find(|rule| (rule.matches)(variant))
        .map(|rule| {
            log::trace!("Variant {} matched split rule '{}'", variant, rule.name);
            (rule.split)(variant)
        })
        .ok_or_else(|| Error::InvalidVariant(variant.to_string()))
}
