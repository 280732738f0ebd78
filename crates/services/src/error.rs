//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use placement_core::AssembleError;
use placement_core::model::{LevelId, TemplateError};

use crate::repository::StorageError;
use crate::settings::SettingsError;

/// Errors emitted while loading a question pool catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error("catalog has no questions at all")]
    Empty,
}

/// Errors emitted by the placement loop.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PlacementError {
    #[error("placement attempt is not finished yet")]
    NotCompleted,
    #[error("{level} has no easier level to fall back to")]
    NoFallback { level: LevelId },
    #[error("manual downgrade is disabled")]
    DowngradeDisabled,
    #[error(transparent)]
    Assemble(#[from] AssembleError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping placement services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Content(#[from] ContentError),
}
