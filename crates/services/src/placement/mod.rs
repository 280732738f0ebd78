mod outcome;
mod session;
mod workflow;

// Public API of the placement subsystem.
pub use crate::error::PlacementError;
pub use outcome::PlacementOutcome;
pub use session::PlacementSession;
pub use workflow::PlacementLoopService;
