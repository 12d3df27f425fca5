use crate::color::Color;
use crate::error::{Result, SceneError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Project or skill entry supplied by the page layer. Read-only to the scenes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub id: u64,
    pub label: String,
    pub category: String,
    #[serde(default)]
    pub accent_color: Option<String>,
    #[serde(default)]
    pub magnitude: Option<f32>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl ItemRecord {
    pub fn new(id: u64, label: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            category: category.into(),
            accent_color: None,
            magnitude: None,
            technologies: Vec::new(),
        }
    }

    pub fn with_accent(mut self, color: impl Into<String>) -> Self {
        self.accent_color = Some(color.into());
        self
    }

    pub fn with_magnitude(mut self, magnitude: f32) -> Self {
        self.magnitude = Some(magnitude);
        self
    }

    pub fn with_technologies<I, S>(mut self, technologies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.technologies = technologies.into_iter().map(Into::into).collect();
        self
    }

    /// The accent color, or the configuration error that prevents rendering.
    pub fn accent(&self) -> Result<Color> {
        let value = self
            .accent_color
            .as_deref()
            .ok_or_else(|| SceneError::MissingAccentColor {
                id: self.id,
                label: self.label.clone(),
            })?;

        Color::from_hex(value).map_err(|err| SceneError::InvalidAccentColor {
            id: self.id,
            value: value.to_string(),
            reason: match err {
                SceneError::InvalidColor { reason, .. } => reason,
                other => other.to_string(),
            },
        })
    }

    fn validate_magnitude(&self) -> Result<()> {
        match self.magnitude {
            Some(value) if !(0.0..=100.0).contains(&value) => {
                Err(SceneError::MagnitudeOutOfRange { id: self.id, value })
            }
            _ => Ok(()),
        }
    }
}

/// Input to the scene generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneConfig {
    Count(i64),
    Records(Vec<ItemRecord>),
}

impl SceneConfig {
    /// Number of objects the config declares, after validation.
    pub fn object_count(&self) -> Result<usize> {
        match self {
            SceneConfig::Count(count) if *count < 0 => Err(SceneError::NegativeCount(*count)),
            SceneConfig::Count(count) => Ok(*count as usize),
            SceneConfig::Records(records) => Ok(records.len()),
        }
    }

    /// Checks everything a scene needs before any object is created.
    pub fn validate(&self) -> Result<()> {
        match self {
            SceneConfig::Count(_) => self.object_count().map(|_| ()),
            SceneConfig::Records(records) => validate_records(records).map(|_| ()),
        }
    }
}

/// Validates every record and returns their accent colors in order.
pub fn validate_records(records: &[ItemRecord]) -> Result<Vec<Color>> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .iter()
        .map(|record| {
            if !seen.insert(record.id) {
                return Err(SceneError::DuplicateRecordId(record.id));
            }
            record.validate_magnitude()?;
            record.accent()
        })
        .collect()
}
