#![forbid(unsafe_code)]

pub mod app_services;
pub mod content;
pub mod error;
pub mod placement;
pub mod repository;
pub mod settings;
pub mod telemetry;

pub use placement_core::Clock;

pub use app_services::PlacementServices;
pub use error::{ContentError, PlacementError};
pub use placement::{PlacementLoopService, PlacementOutcome, PlacementSession};
pub use repository::{
    InMemoryResultRepository, PlacementRecord, PlacementResultRepository, StorageError,
};
pub use settings::{PlacementSettings, PlacementSettingsDraft, SettingsError};
