//! Error types for scene construction and settings loading.

use thiserror::Error;

/// Result type for scene operations.
pub type Result<T> = std::result::Result<T, SceneError>;

/// Errors raised while mounting a scene or loading showcase settings.
///
/// Every variant except the settings I/O and parse errors is a configuration
/// error: it is raised before any object handle exists, so a scene either
/// mounts completely or not at all. Per-frame problems never surface here.
#[derive(Error, Debug)]
pub enum SceneError {
    /// A count-driven scene was asked for a negative number of objects.
    #[error("object count must not be negative (got {0})")]
    NegativeCount(i64),

    /// An item record arrived without an accent color.
    #[error("record {id} ({label:?}) has no accent color")]
    MissingAccentColor { id: u64, label: String },

    /// An item record carries an accent color that is not a hex color.
    #[error("record {id} has invalid accent color {value:?}: {reason}")]
    InvalidAccentColor {
        id: u64,
        value: String,
        reason: String,
    },

    /// A skill magnitude fell outside `0..=100`.
    #[error("record {id} magnitude {value} is outside 0..=100")]
    MagnitudeOutOfRange { id: u64, value: f32 },

    /// Two records in one list share an id.
    #[error("duplicate record id {0}")]
    DuplicateRecordId(u64),

    /// A generator layout parameter cannot be sampled from.
    #[error("layout parameter {name} is invalid: {reason}")]
    InvalidLayout { name: &'static str, reason: String },

    /// A per-project scene was requested for a project that does not exist.
    #[error("no project at index {index} ({available} configured)")]
    UnknownProject { index: usize, available: usize },

    /// A color literal could not be parsed.
    #[error("invalid color {value:?}: {reason}")]
    InvalidColor { value: String, reason: String },

    /// Settings file could not be read.
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid JSON for the settings schema.
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SceneError {
    /// True for errors caused by an invalid scene configuration.
    pub fn is_configuration_error(&self) -> bool {
        !matches!(self, SceneError::Io(_) | SceneError::Parse(_))
    }
}
