//! Shared domain enums

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ---------------------------------------------------------------------------
// BookStatus
// ---------------------------------------------------------------------------

/// Circulation status of a book.
///
/// Serialized as its label. The Russian labels written by older catalog
/// files are accepted when reading but never written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BookStatus {
    #[default]
    #[serde(rename = "available", alias = "в наличии")]
    Available,
    #[serde(rename = "checked out", alias = "выдана")]
    CheckedOut,
}

impl BookStatus {
    /// Return the canonical label for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "available",
            BookStatus::CheckedOut => "checked out",
        }
    }
}

/// Returned when a label names neither status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid status {0:?}: expected \"available\" or \"checked out\"")]
pub struct InvalidStatus(pub String);

impl FromStr for BookStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" | "в наличии" => Ok(BookStatus::Available),
            "checked out" | "выдана" => Ok(BookStatus::CheckedOut),
            other => Err(InvalidStatus(other.to_string())),
        }
    }
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
