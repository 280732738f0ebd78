use chrono::{DateTime, Utc};
use std::fmt;

use placement_core::model::{AttemptId, LevelId, QuestionTemplate};
use placement_core::{SessionProgress, SessionState, TestSession};

/// A learner's in-flight placement attempt.
///
/// Thin owner of a [`TestSession`] that remembers who is taking it and when
/// it started. Not meant to be shared between callers.
pub struct PlacementSession {
    learner: String,
    session: TestSession,
    started_at: DateTime<Utc>,
}

impl PlacementSession {
    pub(crate) fn new(learner: &str, session: TestSession, started_at: DateTime<Utc>) -> Self {
        Self {
            learner: learner.to_owned(),
            session,
            started_at,
        }
    }

    #[must_use]
    pub fn learner(&self) -> &str {
        &self.learner
    }

    #[must_use]
    pub fn attempt_id(&self) -> &AttemptId {
        self.session.attempt().id()
    }

    #[must_use]
    pub fn tested_level(&self) -> LevelId {
        self.session.attempt().level()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn test_session(&self) -> &TestSession {
        &self.session
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuestionTemplate> {
        self.session.current_question()
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    pub fn select_option(&mut self, option: usize) -> SessionState {
        self.session.select_option(option)
    }

    pub fn advance(&mut self) -> SessionState {
        self.session.advance()
    }

    /// Start the same questions over. A new shuffle needs a new attempt.
    pub fn reset(&mut self) -> SessionState {
        tracing::debug!(attempt = %self.attempt_id(), "placement attempt reset");
        self.session.reset()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        self.session.progress_summary()
    }

    #[must_use]
    pub fn score(&self) -> f64 {
        self.session.score()
    }
}

impl fmt::Debug for PlacementSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlacementSession")
            .field("learner", &self.learner)
            .field("attempt_id", self.attempt_id())
            .field("level", &self.tested_level())
            .field("state", &self.state())
            .field("current", &self.session.current_index())
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}
