use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use placement_core::model::AttemptId;

use crate::placement::PlacementOutcome;

/// Errors surfaced by result stores.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),
}

/// A finished placement as handed to the result store.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementRecord {
    pub learner: String,
    pub outcome: PlacementOutcome,
    pub completed_at: DateTime<Utc>,
}

impl PlacementRecord {
    #[must_use]
    pub fn attempt_id(&self) -> &AttemptId {
        &self.outcome.attempt_id
    }
}

/// Store for finished placements. Persistence format is up to the implementor.
#[async_trait]
pub trait PlacementResultRepository: Send + Sync {
    /// Persist a finished placement.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if the attempt was already stored, or
    /// other storage errors.
    async fn save_result(&self, record: &PlacementRecord) -> Result<(), StorageError>;

    /// Most recent placement for a learner, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn latest_result(&self, learner: &str) -> Result<Option<PlacementRecord>, StorageError>;

    /// All placements for a learner, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn list_results(&self, learner: &str) -> Result<Vec<PlacementRecord>, StorageError>;
}

/// Simple in-memory result store for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryResultRepository {
    records: Arc<Mutex<HashMap<String, Vec<PlacementRecord>>>>,
}

impl InMemoryResultRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlacementResultRepository for InMemoryResultRepository {
    async fn save_result(&self, record: &PlacementRecord) -> Result<(), StorageError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let history = guard.entry(record.learner.clone()).or_default();
        if history
            .iter()
            .any(|existing| existing.attempt_id() == record.attempt_id())
        {
            return Err(StorageError::Conflict);
        }
        history.push(record.clone());
        Ok(())
    }

    async fn latest_result(&self, learner: &str) -> Result<Option<PlacementRecord>, StorageError> {
        let guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(learner).and_then(|history| history.last().cloned()))
    }

    async fn list_results(&self, learner: &str) -> Result<Vec<PlacementRecord>, StorageError> {
        let guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(learner).cloned().unwrap_or_default())
    }
}
