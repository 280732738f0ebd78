mod attempt;
mod ids;
mod level;
mod question;

pub use attempt::Attempt;
pub use ids::{AttemptId, ParseIdError};
pub use level::{
    CatalogError, FallbackChain, LEVELS, LevelId, PASS_THRESHOLD, ProficiencyGroup,
    ProficiencyLevel, validate_fallback_graph,
};
pub use question::{QuestionTemplate, TemplateError};
