use crate::model::{Attempt, QuestionTemplate};

/// Where a session stands on its current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for an option to be picked.
    InProgress,
    /// An option is locked in; waiting for `advance`.
    AwaitingAdvance { selected: usize },
    Completed,
}

impl SessionState {
    /// State after picking `option`. Only `InProgress` reacts.
    #[must_use]
    pub fn on_select(self, option: usize) -> Self {
        match self {
            SessionState::InProgress => SessionState::AwaitingAdvance { selected: option },
            other => other,
        }
    }

    /// State after moving past question `current` of `total`. Only
    /// `AwaitingAdvance` reacts.
    #[must_use]
    pub fn on_advance(self, current: usize, total: usize) -> Self {
        match self {
            SessionState::AwaitingAdvance { .. } if current + 1 >= total => SessionState::Completed,
            SessionState::AwaitingAdvance { .. } => SessionState::InProgress,
            other => other,
        }
    }

    #[must_use]
    pub fn selected(self) -> Option<usize> {
        match self {
            SessionState::AwaitingAdvance { selected } => Some(selected),
            _ => None,
        }
    }
}

/// One confirmed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_index: usize,
    pub selected: usize,
    pub correct: bool,
}

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

/// Learner progress through one assembled attempt.
///
/// Transitions that do not apply to the current state are ignored and leave
/// the session untouched.
#[derive(Debug, Clone)]
pub struct TestSession {
    attempt: Attempt,
    state: SessionState,
    current: usize,
    correct: usize,
    answers: Vec<AnswerRecord>,
}

impl TestSession {
    #[must_use]
    pub fn new(attempt: Attempt) -> Self {
        Self {
            attempt,
            state: SessionState::InProgress,
            current: 0,
            correct: 0,
            answers: Vec::new(),
        }
    }

    #[must_use]
    pub fn attempt(&self) -> &Attempt {
        &self.attempt
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.attempt.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == SessionState::Completed
    }

    /// Answers confirmed so far, in question order.
    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuestionTemplate> {
        if self.is_complete() {
            return None;
        }
        self.attempt.question(self.current)
    }

    /// Locks in `option` for the current question.
    ///
    /// No-op unless the session is `InProgress` on an existing question.
    pub fn select_option(&mut self, option: usize) -> SessionState {
        if self.state != SessionState::InProgress {
            return self.state;
        }
        let Some(question) = self.attempt.question(self.current) else {
            return self.state;
        };

        let correct = question.is_correct(option);
        if correct {
            self.correct += 1;
        }
        self.answers.push(AnswerRecord {
            question_index: self.current,
            selected: option,
            correct,
        });
        self.state = self.state.on_select(option);
        self.state
    }

    /// Moves to the next question, completing the session after the last one.
    ///
    /// No-op unless an option is locked in.
    pub fn advance(&mut self) -> SessionState {
        let next = self.state.on_advance(self.current, self.total_questions());
        if matches!(self.state, SessionState::AwaitingAdvance { .. }) {
            self.current += 1;
        }
        self.state = next;
        self.state
    }

    /// Restarts the same attempt from the first question.
    pub fn reset(&mut self) -> SessionState {
        self.state = SessionState::InProgress;
        self.current = 0;
        self.correct = 0;
        self.answers.clear();
        self.state
    }

    /// Fraction of questions moved past; 0 for an empty attempt.
    #[must_use]
    pub fn progress(&self) -> f64 {
        ratio(self.current, self.total_questions())
    }

    /// Fraction of questions answered correctly; 0 for an empty attempt.
    #[must_use]
    pub fn score(&self) -> f64 {
        ratio(self.correct, self.total_questions())
    }

    #[must_use]
    pub fn progress_summary(&self) -> SessionProgress {
        let total = self.total_questions();
        SessionProgress {
            total,
            answered: self.answers.len(),
            remaining: total.saturating_sub(self.current),
            is_complete: self.is_complete(),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn ratio(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}
