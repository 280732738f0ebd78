use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Questions requested per attempt when nothing is configured.
pub const DEFAULT_REQUESTED_QUESTIONS: usize = 10;
/// Upper bound on configured question counts.
pub const MAX_REQUESTED_QUESTIONS: usize = 100;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("requested questions must be between 1 and 100, got {0}")]
    InvalidRequestedQuestions(usize),
    #[error("settings are not valid JSON: {0}")]
    Json(String),
}

/// Validated placement settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacementSettings {
    requested_questions: usize,
    catalog_path: Option<PathBuf>,
    allow_manual_downgrade: bool,
}

/// Unvalidated settings as they come from a config file or a caller.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementSettingsDraft {
    pub requested_questions: Option<usize>,
    pub catalog_path: Option<String>,
    pub allow_manual_downgrade: Option<bool>,
}

impl PlacementSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a draft from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Json` if the document does not match the draft shape.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(json).map_err(|e| SettingsError::Json(e.to_string()))
    }

    /// Validate and normalize the draft.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidRequestedQuestions` if the count is 0 or too large.
    pub fn validate(self) -> Result<PlacementSettings, SettingsError> {
        let requested_questions = self
            .requested_questions
            .unwrap_or(DEFAULT_REQUESTED_QUESTIONS);
        if requested_questions == 0 || requested_questions > MAX_REQUESTED_QUESTIONS {
            return Err(SettingsError::InvalidRequestedQuestions(requested_questions));
        }

        let catalog_path = self
            .catalog_path
            .map(|path| path.trim().to_string())
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Ok(PlacementSettings {
            requested_questions,
            catalog_path,
            allow_manual_downgrade: self.allow_manual_downgrade.unwrap_or(true),
        })
    }
}

impl PlacementSettings {
    #[must_use]
    pub fn requested_questions(&self) -> usize {
        self.requested_questions
    }

    /// JSON pool catalog to load instead of the built-in one.
    #[must_use]
    pub fn catalog_path(&self) -> Option<&PathBuf> {
        self.catalog_path.as_ref()
    }

    #[must_use]
    pub fn allow_manual_downgrade(&self) -> bool {
        self.allow_manual_downgrade
    }
}

impl Default for PlacementSettings {
    fn default() -> Self {
        Self {
            requested_questions: DEFAULT_REQUESTED_QUESTIONS,
            catalog_path: None,
            allow_manual_downgrade: true,
        }
    }
}
