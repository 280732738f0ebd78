use super::ids::AttemptId;
use super::level::LevelId;
use super::question::QuestionTemplate;

/// One assembled placement test: ordered questions with shuffled options.
///
/// Produced by `AttemptAssembler` and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    id: AttemptId,
    level: LevelId,
    requested: usize,
    questions: Vec<QuestionTemplate>,
}

impl Attempt {
    pub(crate) fn new(
        id: AttemptId,
        level: LevelId,
        requested: usize,
        questions: Vec<QuestionTemplate>,
    ) -> Self {
        Self {
            id,
            level,
            requested,
            questions,
        }
    }

    #[must_use]
    pub fn id(&self) -> &AttemptId {
        &self.id
    }

    #[must_use]
    pub fn level(&self) -> LevelId {
        self.level
    }

    /// Question count the caller asked for, before pool bounds were applied.
    #[must_use]
    pub fn requested(&self) -> usize {
        self.requested
    }

    #[must_use]
    pub fn questions(&self) -> &[QuestionTemplate] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&QuestionTemplate> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
