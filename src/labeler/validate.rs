//! Validation of user-supplied identifiers and export destinations.

use regex::Regex;
use std::fmt;
use std::path::PathBuf;
use std::sync::LazyLock;

use crate::errors::LabelerError;

static RE_SUBSCRIPTION_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]{8}-([0-9a-fA-F]{4}-){3}[0-9a-fA-F]{12}$").unwrap());

// Storage account names are 3-24 lowercase alphanumerics; container names are
// 3-63 characters of lowercase alphanumerics and hyphens, starting and ending
// alphanumeric. A trailing slash after the container is accepted.
static RE_BLOB_CONTAINER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://([a-z0-9]{3,24})\.blob\.core\.windows\.net/([a-z0-9](?:[a-z0-9-]{1,61}[a-z0-9])?)/?$")
        .unwrap()
});

/// Whether `candidate` is a well-formed Azure subscription id (a UUID).
pub fn is_valid_subscription_id(candidate: &str) -> bool {
    RE_SUBSCRIPTION_ID.is_match(candidate)
}

/// A validated export destination: either a local directory or an Azure
/// Storage blob container URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestinationPath {
    Local(PathBuf),
    BlobContainer {
        account: String,
        container: String,
        url: String,
    },
}

impl DestinationPath {
    /// Parses and validates a raw `--export-path` value.
    ///
    /// Anything that looks like a URL must match the blob container shape;
    /// everything else is taken as a local directory path. Local directories
    /// do not need to exist yet, they are created at export time.
    pub fn parse(raw: &str) -> Result<Self, LabelerError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LabelerError::InvalidExportPath(raw.to_string()));
        }
        if trimmed.contains("://") {
            let caps = RE_BLOB_CONTAINER
                .captures(trimmed)
                .ok_or_else(|| LabelerError::InvalidExportPath(raw.to_string()))?;
            return Ok(DestinationPath::BlobContainer {
                account: caps[1].to_string(),
                container: caps[2].to_string(),
                url: trimmed.to_string(),
            });
        }
        Ok(DestinationPath::Local(PathBuf::from(trimmed)))
    }
}

impl fmt::Display for DestinationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DestinationPath::Local(path) => write!(f, "{}", path.display()),
            DestinationPath::BlobContainer { url, .. } => write!(f, "{url}"),
        }
    }
}
