use placement_core::model::{AttemptId, LevelId};
use placement_core::{Resolution, manual_downgrade_target};

/// Final result of one placement attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementOutcome {
    pub attempt_id: AttemptId,
    pub tested_level: LevelId,
    pub recommended_level: LevelId,
    pub score: f64,
    pub correct: usize,
    pub total: usize,
    pub passed: bool,
    /// Easier level the learner may retry at, derived from the tested level
    /// regardless of the recommendation. `None` at a floor level or when
    /// manual downgrade is disabled.
    pub manual_downgrade: Option<LevelId>,
}

impl PlacementOutcome {
    pub(crate) fn new(
        attempt_id: AttemptId,
        resolution: Resolution,
        correct: usize,
        total: usize,
        allow_manual_downgrade: bool,
    ) -> Self {
        let manual_downgrade = if allow_manual_downgrade {
            manual_downgrade_target(resolution.tested)
        } else {
            None
        };
        Self {
            attempt_id,
            tested_level: resolution.tested,
            recommended_level: resolution.recommended,
            score: resolution.score,
            correct,
            total,
            passed: resolution.passed,
            manual_downgrade,
        }
    }

    /// True when the recommendation is lower than the tested level.
    #[must_use]
    pub fn was_downgraded(&self) -> bool {
        self.recommended_level != self.tested_level
    }
}
