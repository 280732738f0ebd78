#![forbid(unsafe_code)]

pub mod assembler;
pub mod model;
pub mod pool;
pub mod resolution;
pub mod rng;
pub mod session;
pub mod time;

pub use assembler::{AssembleError, AttemptAssembler, MIN_QUESTIONS};
pub use model::{Attempt, AttemptId, LevelId, ProficiencyGroup, ProficiencyLevel, QuestionTemplate};
pub use pool::{PoolCatalog, QuestionPoolProvider};
pub use resolution::{Resolution, manual_downgrade_target, resolve};
pub use rng::SplitMix64;
pub use session::{AnswerRecord, SessionProgress, SessionState, TestSession};
pub use time::Clock;
