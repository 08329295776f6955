//! Error taxonomy for variant resolution and artifact fetching.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The build descriptor lacks the `<version>-<build>` segments.
    #[error("Malformed build descriptor '{0}': expected <version>-<build>[-EE]")]
    MalformedBuildDescriptor(String),

    /// The variant token matches none of the splitting rules.
    #[error("Invalid variant '{0}': cannot determine OS/ABI pair")]
    InvalidVariant(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status} fetching {url}")]
    HttpStatus { url: String, status: u16 },

    /// The request never produced a response.
    #[error("Failed to reach {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A path that must exist does not.
    #[error("{} does not exist", .0.display())]
    PathResolution(PathBuf),
}

impl Error {
    /// HTTP status code carried by the error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Extracts the HTTP status from an `anyhow::Error` chain, if one was recorded.
pub fn status_code_of(error: &anyhow::Error) -> Option<u16> {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<Error>())
        .and_then(Error::status_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MalformedBuildDescriptor("3.1.0".to_string());
        assert!(err.to_string().contains("'3.1.0'"));

        let err = Error::InvalidVariant("bogus".to_string());
        assert!(err.to_string().contains("bogus"));

        let err = Error::HttpStatus {
            url: "http://host/file.zip".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "HTTP 404 fetching http://host/file.zip");

        let err = Error::PathResolution(PathBuf::from("/missing/ext"));
        assert_eq!(err.to_string(), "/missing/ext does not exist");
    }

    #[test]
    fn test_status_code() {
        let err = Error::HttpStatus {
            url: "u".to_string(),
            status: 500,
        };
        assert_eq!(err.status_code(), Some(500));
        assert_eq!(Error::InvalidVariant("x".into()).status_code(), None);
    }

    #[test]
    fn test_status_code_of_through_context() {
        use anyhow::Context;

        let result: Result<(), Error> = Err(Error::HttpStatus {
            url: "u".to_string(),
            status: 403,
        });
        let err = result.context("Failed to download variant").unwrap_err();
        assert_eq!(status_code_of(&err), Some(403));

        let plain = anyhow::anyhow!("something else");
        assert_eq!(status_code_of(&plain), None);
    }
}
