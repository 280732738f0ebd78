use std::sync::Arc;

use placement_core::model::{AttemptId, LevelId};
use placement_core::{AttemptAssembler, PoolCatalog, TestSession, resolve};

use super::outcome::PlacementOutcome;
use super::session::PlacementSession;
use crate::Clock;
use crate::error::PlacementError;
use crate::repository::{PlacementRecord, PlacementResultRepository};
use crate::settings::PlacementSettings;

/// Orchestrates placement attempts: assembly, scoring, resolution and
/// persistence of the final result.
#[derive(Clone)]
pub struct PlacementLoopService {
    clock: Clock,
    catalog: Arc<PoolCatalog>,
    results: Arc<dyn PlacementResultRepository>,
    settings: PlacementSettings,
}

impl PlacementLoopService {
    #[must_use]
    pub fn new(
        clock: Clock,
        catalog: Arc<PoolCatalog>,
        results: Arc<dyn PlacementResultRepository>,
        settings: PlacementSettings,
    ) -> Self {
        Self {
            clock,
            catalog,
            results,
            settings,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &PlacementSettings {
        &self.settings
    }

    /// Start a fresh attempt at `level` under a newly generated attempt id.
    ///
    /// # Errors
    ///
    /// Returns `PlacementError::Assemble` if no questions are available.
    pub fn start_attempt(
        &self,
        learner: &str,
        level: LevelId,
    ) -> Result<PlacementSession, PlacementError> {
        self.start_attempt_with_id(learner, level, AttemptId::generate())
    }

    /// Start (or re-create) the attempt identified by `attempt_id`.
    ///
    /// The same id and level always produce the same questions.
    ///
    /// # Errors
    ///
    /// Returns `PlacementError::Assemble` if no questions are available.
    pub fn start_attempt_with_id(
        &self,
        learner: &str,
        level: LevelId,
        attempt_id: AttemptId,
    ) -> Result<PlacementSession, PlacementError> {
        let requested = self.settings.requested_questions();
        let catalog: &PoolCatalog = &self.catalog;
        let attempt = AttemptAssembler::new(catalog).assemble(level, &attempt_id, requested)?;
        tracing::debug!(
            %level,
            attempt = %attempt_id,
            requested,
            questions = attempt.len(),
            "assembled placement attempt"
        );
        Ok(PlacementSession::new(
            learner,
            TestSession::new(attempt),
            self.clock.now(),
        ))
    }

    /// Score and resolve a completed attempt without persisting it.
    ///
    /// # Errors
    ///
    /// Returns `PlacementError::NotCompleted` if questions remain.
    pub fn outcome(&self, session: &PlacementSession) -> Result<PlacementOutcome, PlacementError> {
        if !session.is_complete() {
            return Err(PlacementError::NotCompleted);
        }
        let test = session.test_session();
        let resolution = resolve(session.tested_level(), test.score());
        tracing::debug!(
            tested = %resolution.tested,
            recommended = %resolution.recommended,
            score = resolution.score,
            "resolved placement level"
        );
        Ok(PlacementOutcome::new(
            session.attempt_id().clone(),
            resolution,
            test.correct_count(),
            test.total_questions(),
            self.settings.allow_manual_downgrade(),
        ))
    }

    /// Resolve a completed attempt and hand the result to the result store.
    ///
    /// # Errors
    ///
    /// Returns `PlacementError::NotCompleted` if questions remain, or
    /// `PlacementError::Storage` if the result cannot be saved.
    pub async fn finish(
        &self,
        session: &PlacementSession,
    ) -> Result<PlacementOutcome, PlacementError> {
        let outcome = self.outcome(session)?;
        let record = PlacementRecord {
            learner: session.learner().to_owned(),
            outcome: outcome.clone(),
            completed_at: self.clock.now(),
        };
        self.results.save_result(&record).await?;
        tracing::info!(
            learner = session.learner(),
            attempt = %outcome.attempt_id,
            tested = %outcome.tested_level,
            recommended = %outcome.recommended_level,
            correct = outcome.correct,
            total = outcome.total,
            "placement finished"
        );
        Ok(outcome)
    }

    /// Start a fresh attempt one step below the level that was tested in
    /// `outcome`, whatever the score was.
    ///
    /// # Errors
    ///
    /// Returns `PlacementError::DowngradeDisabled` when switched off in
    /// settings, `PlacementError::NoFallback` at a floor level, or
    /// `PlacementError::Assemble` if no questions are available.
    pub fn manual_downgrade(
        &self,
        learner: &str,
        outcome: &PlacementOutcome,
    ) -> Result<PlacementSession, PlacementError> {
        if !self.settings.allow_manual_downgrade() {
            return Err(PlacementError::DowngradeDisabled);
        }
        let Some(target) = placement_core::manual_downgrade_target(outcome.tested_level) else {
            tracing::warn!(level = %outcome.tested_level, "manual downgrade requested at floor level");
            return Err(PlacementError::NoFallback {
                level: outcome.tested_level,
            });
        };
        tracing::debug!(from = %outcome.tested_level, to = %target, "manual downgrade");
        self.start_attempt(learner, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryResultRepository;
    use crate::settings::PlacementSettingsDraft;
    use placement_core::time::fixed_now;

    fn service(settings: PlacementSettings) -> PlacementLoopService {
        PlacementLoopService::new(
            Clock::fixed(fixed_now()),
            Arc::new(PoolCatalog::builtin().clone()),
            Arc::new(InMemoryResultRepository::new()),
            settings,
        )
    }

    fn answer_all(session: &mut PlacementSession, correct_answers: usize) {
        let mut answered = 0;
        while let Some(question) = session.current_question() {
            let right = question.correct_index();
            let pick = if answered < correct_answers {
                right
            } else {
                (right + 1) % question.options().len()
            };
            session.select_option(pick);
            session.advance();
            answered += 1;
        }
    }

    #[test]
    fn same_attempt_id_rebuilds_same_questions() {
        let svc = service(PlacementSettings::default());
        let a = svc
            .start_attempt_with_id("ana", LevelId::Senior2, AttemptId::new("fixed").unwrap())
            .unwrap();
        let b = svc
            .start_attempt_with_id("ana", LevelId::Senior2, AttemptId::new("fixed").unwrap())
            .unwrap();
        assert_eq!(a.test_session().attempt(), b.test_session().attempt());
        assert_eq!(a.started_at(), fixed_now());
    }

    #[test]
    fn outcome_requires_completion() {
        let svc = service(PlacementSettings::default());
        let session = svc.start_attempt("ana", LevelId::Junior1).unwrap();
        assert!(matches!(svc.outcome(&session), Err(PlacementError::NotCompleted)));
    }

    #[test]
    fn passing_learner_is_still_offered_a_downgrade() {
        let svc = service(PlacementSettings::default());
        let mut session = svc.start_attempt("ana", LevelId::Fce).unwrap();
        answer_all(&mut session, 5);

        let outcome = svc.outcome(&session).unwrap();
        assert!(outcome.passed);
        assert!(!outcome.was_downgraded());
        assert_eq!(outcome.recommended_level, LevelId::Fce);
        assert_eq!(outcome.manual_downgrade, Some(LevelId::Pet));

        let retry = svc.manual_downgrade("ana", &outcome).unwrap();
        assert_eq!(retry.tested_level(), LevelId::Pet);
        assert_ne!(retry.attempt_id(), session.attempt_id());
    }

    #[test]
    fn downgrade_at_floor_level_fails() {
        let svc = service(PlacementSettings::default());
        let mut session = svc.start_attempt("ana", LevelId::CefrA1).unwrap();
        answer_all(&mut session, 0);

        let outcome = svc.outcome(&session).unwrap();
        assert_eq!(outcome.recommended_level, LevelId::CefrA1);
        assert_eq!(outcome.manual_downgrade, None);
        assert!(matches!(
            svc.manual_downgrade("ana", &outcome),
            Err(PlacementError::NoFallback {
                level: LevelId::CefrA1
            })
        ));
    }

    #[test]
    fn downgrade_can_be_disabled() {
        let settings = PlacementSettingsDraft {
            allow_manual_downgrade: Some(false),
            ..PlacementSettingsDraft::default()
        }
        .validate()
        .unwrap();
        let svc = service(settings);
        let mut session = svc.start_attempt("ana", LevelId::Cet6).unwrap();
        answer_all(&mut session, 1);

        let outcome = svc.outcome(&session).unwrap();
        assert_eq!(outcome.recommended_level, LevelId::Cet4);
        assert_eq!(outcome.manual_downgrade, None);
        assert!(matches!(
            svc.manual_downgrade("ana", &outcome),
            Err(PlacementError::DowngradeDisabled)
        ));
    }
}
