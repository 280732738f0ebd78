use std::thread;

use placement_core::model::{AttemptId, LEVELS, LevelId};
use placement_core::{AttemptAssembler, PoolCatalog, SessionState, TestSession, resolve};

#[test]
fn junior1_two_of_five_recommends_primary6() {
    let attempt_id = AttemptId::new("T1").unwrap();
    let attempt = AttemptAssembler::new(PoolCatalog::builtin())
        .assemble(LevelId::Junior1, &attempt_id, 10)
        .unwrap();
    assert_eq!(attempt.len(), 5);

    let mut session = TestSession::new(attempt);
    let mut answered = 0;
    while let Some(question) = session.current_question() {
        let correct = question.correct_index();
        let pick = if answered < 2 {
            correct
        } else {
            (correct + 1) % question.options().len()
        };
        session.select_option(pick);
        session.advance();
        answered += 1;
    }

    assert_eq!(session.state(), SessionState::Completed);
    assert_eq!(session.correct_count(), 2);
    assert!((session.score() - 0.4).abs() < 1e-9);

    let resolution = resolve(LevelId::Junior1, session.score());
    assert!(!resolution.passed);
    assert_eq!(resolution.recommended, LevelId::Primary6);
}

#[test]
fn concurrent_assemblies_agree() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                AttemptAssembler::new(PoolCatalog::builtin())
                    .assemble(LevelId::Fce, &AttemptId::new("shared").unwrap(), 10)
                    .unwrap()
            })
        })
        .collect();
    let attempts: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(attempts.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn every_level_can_be_assembled() {
    let assembler = AttemptAssembler::new(PoolCatalog::builtin());
    for level in &LEVELS {
        let attempt = assembler
            .assemble(level.id(), &AttemptId::new(level.key()).unwrap(), 10)
            .unwrap();
        assert_eq!(attempt.len(), 5, "{}", level.key());
    }
}
