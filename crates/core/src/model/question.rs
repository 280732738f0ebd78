use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::level::LevelId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TemplateError {
    #[error("question stem cannot be empty")]
    EmptyStem,

    #[error("question needs at least 2 options, got {len}")]
    TooFewOptions { len: usize },

    #[error("correct option {index} is out of range for {len} options")]
    CorrectIndexOutOfRange { index: usize, len: usize },
}

/// A multiple-choice question as stored in a pool.
///
/// Assembled attempts hold the same type with options reordered and
/// `correct_index` remapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionTemplate {
    stem: String,
    options: Vec<String>,
    correct_index: usize,
    level: LevelId,
}

impl QuestionTemplate {
    /// # Errors
    ///
    /// Returns `TemplateError` if the stem is blank, fewer than two options are
    /// given, or `correct_index` does not point at an option.
    pub fn new(
        stem: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
        level: LevelId,
    ) -> Result<Self, TemplateError> {
        let template = Self {
            stem: stem.into(),
            options,
            correct_index,
            level,
        };
        template.validate()?;
        Ok(template)
    }

    /// Unchecked constructor for built-in content, which is covered by tests.
    pub(crate) fn from_parts(
        stem: &str,
        options: &[&str],
        correct_index: usize,
        level: LevelId,
    ) -> Self {
        Self {
            stem: stem.to_owned(),
            options: options.iter().map(|&o| o.to_owned()).collect(),
            correct_index,
            level,
        }
    }

    /// Checks a template that did not come through [`QuestionTemplate::new`],
    /// e.g. one deserialized from a content file.
    ///
    /// # Errors
    ///
    /// See [`QuestionTemplate::new`].
    pub fn validate(&self) -> Result<(), TemplateError> {
        if self.stem.trim().is_empty() {
            return Err(TemplateError::EmptyStem);
        }
        if self.options.len() < 2 {
            return Err(TemplateError::TooFewOptions {
                len: self.options.len(),
            });
        }
        if self.correct_index >= self.options.len() {
            return Err(TemplateError::CorrectIndexOutOfRange {
                index: self.correct_index,
                len: self.options.len(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn stem(&self) -> &str {
        &self.stem
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// Text of the correct option, if the index is in range.
    #[must_use]
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_index).map(String::as_str)
    }

    /// Level tag of the template owner.
    #[must_use]
    pub fn level(&self) -> LevelId {
        self.level
    }

    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_index
    }

    /// Returns a copy whose option `k` is the original option `order[k]`.
    ///
    /// The correct index follows its option. If the original correct index is
    /// absent from `order`, it is kept as is.
    #[must_use]
    pub fn reordered(&self, order: &[usize]) -> Self {
        let options = order
            .iter()
            .filter_map(|&i| self.options.get(i).cloned())
            .collect();
        let correct_index = order
            .iter()
            .position(|&i| i == self.correct_index)
            .unwrap_or(self.correct_index);
        Self {
            stem: self.stem.clone(),
            options,
            correct_index,
            level: self.level,
        }
    }
}
