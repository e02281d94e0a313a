//! Error types for loading, classification, and search configuration.
//!
//! Every error is fatal for a run. There is no partial-result mode, so
//! nothing here is retryable.

use thiserror::Error;

/// Errors that can occur while preparing or running a search.
///
/// # Examples
///
/// ```rust
/// use armorcalc::ArmorError;
///
/// let err = ArmorError::OutOfRange { setting: "mods", value: 7, max: 5 };
/// assert_eq!(err.to_string(), "value 7 exceeded maximum 5 for mods");
/// ```
#[derive(Debug, Error)]
pub enum ArmorError {
    /// An item's category is neither a wearable slot nor a known
    /// non-wearable slot.
    ///
    /// Skipping it would silently shrink the search space, so
    /// classification stops here instead.
    #[error("corrupted category {category:?} on item {item:?}")]
    UnknownCategory { item: String, category: String },

    /// A numeric setting exceeded its documented bound.
    #[error("value {value} exceeded maximum {max} for {setting}")]
    OutOfRange {
        setting: &'static str,
        value: u32,
        max: u32,
    },

    /// A required input was not supplied.
    #[error("missing required input: {0}")]
    MissingInput(&'static str),

    /// The owner-class selector is not one of the known classes.
    #[error("invalid guardian class {0:?}, expected titan, hunter or warlock")]
    InvalidClass(String),

    /// The traction boost was switched on. It stays disabled.
    #[error(
        "the traction boost (+{} mobility) is disabled and cannot be enabled",
        crate::bonus::TRACTION_MOBILITY_BONUS
    )]
    TractionDisabled,

    /// The input table has no column for a required field.
    #[error("missing column {column:?} in input table")]
    MissingColumn { column: &'static str },

    /// A cell could not be parsed as the field's type.
    #[error("invalid value {value:?} in column {column:?} on row {row}")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },

    /// The header row matches none of the known naming schemes.
    #[error("unrecognised header row, cannot determine column naming")]
    UnknownDialect,

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
