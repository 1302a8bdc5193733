use std::path::PathBuf;

use crate::models::FormField;

pub(crate) type LedgerResult<T> = std::result::Result<T, LedgerError>;

#[derive(Debug, thiserror::Error)]
pub(crate) enum LedgerError {
    /// A form field did not parse as a non-negative amount.
    #[error("{field}: '{input}' is not a valid amount")]
    Validation { field: FormField, input: String },

    /// Amounts that parse on their own but add up past `Decimal::MAX`.
    #[error("Amounts are too large to add up")]
    Overflow,

    #[error("No entry with id '{0}'")]
    NotFound(String),

    #[error("Failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to {action} {}: {source}", path.display())]
    Serde {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write CSV export: {0}")]
    Csv(#[from] csv::Error),
}

impl LedgerError {
    pub(crate) fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::Overflow)
    }

    /// I/O and (de)serialization failures of the backing file.
    pub(crate) fn is_storage(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::Serde { .. } | Self::Csv(_))
    }
}
