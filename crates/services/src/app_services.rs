use std::sync::Arc;

use placement_core::PoolCatalog;

use crate::Clock;
use crate::content::load_catalog;
use crate::error::AppServicesError;
use crate::placement::PlacementLoopService;
use crate::repository::{InMemoryResultRepository, PlacementResultRepository};
use crate::settings::{PlacementSettings, PlacementSettingsDraft};

/// Assembles caller-facing placement services from settings.
#[derive(Clone)]
pub struct PlacementServices {
    catalog: Arc<PoolCatalog>,
    results: Arc<dyn PlacementResultRepository>,
    placement_loop: Arc<PlacementLoopService>,
}

impl PlacementServices {
    /// Build services from a settings draft, storing results with `results`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the settings are invalid or the configured
    /// catalog cannot be loaded.
    pub fn new(
        draft: PlacementSettingsDraft,
        clock: Clock,
        results: Arc<dyn PlacementResultRepository>,
    ) -> Result<Self, AppServicesError> {
        let settings = draft.validate()?;
        Self::with_settings(settings, clock, results)
    }

    /// Build services backed by an in-memory result store.
    ///
    /// # Errors
    ///
    /// See [`PlacementServices::new`].
    pub fn in_memory(draft: PlacementSettingsDraft, clock: Clock) -> Result<Self, AppServicesError> {
        Self::new(draft, clock, Arc::new(InMemoryResultRepository::new()))
    }

    fn with_settings(
        settings: PlacementSettings,
        clock: Clock,
        results: Arc<dyn PlacementResultRepository>,
    ) -> Result<Self, AppServicesError> {
        let catalog = load_catalog(&settings)?;
        let placement_loop = Arc::new(PlacementLoopService::new(
            clock,
            Arc::clone(&catalog),
            Arc::clone(&results),
            settings,
        ));
        Ok(Self {
            catalog,
            results,
            placement_loop,
        })
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<PoolCatalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn results(&self) -> Arc<dyn PlacementResultRepository> {
        Arc::clone(&self.results)
    }

    #[must_use]
    pub fn placement_loop(&self) -> Arc<PlacementLoopService> {
        Arc::clone(&self.placement_loop)
    }
}
