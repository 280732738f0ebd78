use crate::model::LevelId;

/// Result of resolving a finished attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub tested: LevelId,
    pub recommended: LevelId,
    pub score: f64,
    pub passed: bool,
}

/// Recommended level for `score` on `level`.
///
/// Scores at or above the pass threshold keep the level. Lower scores drop to
/// the level's fallback; a floor level stays where it is.
#[must_use]
pub fn resolve(level: LevelId, score: f64) -> Resolution {
    let record = level.level();
    let passed = score >= record.pass_threshold();
    let recommended = if passed {
        level
    } else {
        record.fallback().unwrap_or(level)
    };
    Resolution {
        tested: level,
        recommended,
        score,
        passed,
    }
}

/// Level offered when the learner asks for an easier test.
///
/// Always one step below the level that was *tested*, whatever the score or
/// the automatic recommendation was.
#[must_use]
pub fn manual_downgrade_target(tested: LevelId) -> Option<LevelId> {
    tested.level().fallback()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive() {
        let res = resolve(LevelId::Junior1, 0.6);
        assert!(res.passed);
        assert_eq!(res.recommended, LevelId::Junior1);

        let res = resolve(LevelId::Junior1, 3.0 / 5.0);
        assert_eq!(res.recommended, LevelId::Junior1);
    }

    #[test]
    fn below_threshold_falls_back_one_step() {
        let res = resolve(LevelId::Junior1, 0.599_999);
        assert!(!res.passed);
        assert_eq!(res.recommended, LevelId::Primary6);

        let res = resolve(LevelId::Junior1, 0.4);
        assert_eq!(res.recommended, LevelId::Primary6);
    }

    #[test]
    fn floor_level_is_never_downgraded() {
        let res = resolve(LevelId::Primary1, 0.0);
        assert!(!res.passed);
        assert_eq!(res.recommended, LevelId::Primary1);
        assert_eq!(manual_downgrade_target(LevelId::Ket), None);
    }

    #[test]
    fn manual_downgrade_ignores_the_score() {
        let res = resolve(LevelId::Cae, 1.0);
        assert_eq!(res.recommended, LevelId::Cae);
        assert_eq!(manual_downgrade_target(res.tested), Some(LevelId::Fce));

        // A failed learner is offered the tested level's fallback, not the
        // fallback of the already lowered recommendation.
        let res = resolve(LevelId::Cae, 0.2);
        assert_eq!(res.recommended, LevelId::Fce);
        assert_eq!(manual_downgrade_target(res.tested), Some(LevelId::Fce));
    }
}
