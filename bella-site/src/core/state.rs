use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::content::Catalog;
use crate::core::{Config, Result};
use crate::reservation::{FormRegistry, ReservationSubmitter, SimulatedSubmitter};

/// Shared application state
///
/// Cloned into every handler; all fields are cheap `Arc` clones.
///
/// | Field | Type | Meaning |
/// |-------|------|---------|
/// | config | Config | immutable settings |
/// | catalog | Arc<Catalog> | menu, contact and about content |
/// | forms | Arc<FormRegistry> | reservation form sessions |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub catalog: Arc<Catalog>,
    pub forms: Arc<FormRegistry>,
}

impl ServerState {
    pub fn new(
        config: Config,
        catalog: Catalog,
        submitter: Arc<dyn ReservationSubmitter>,
    ) -> Self {
        let forms = Arc::new(
            FormRegistry::new(submitter, config.form_ttl()).with_capacity(config.max_open_forms),
        );
        Self {
            config,
            catalog: Arc::new(catalog),
            forms,
        }
    }

    /// Load content and wire the simulated submitter
    ///
    /// Fails when a content document is missing or malformed.
    pub fn initialize(config: &Config) -> Result<Self> {
        let catalog = Catalog::load(config.content_dir.as_deref())?;
        let submitter = Arc::new(SimulatedSubmitter::new(config.submit_delay()));
        Ok(Self::new(config.clone(), catalog, submitter))
    }

    /// Form sweeper, runs at a quarter of the TTL (at least once a minute)
    pub fn start_background_tasks(&self) -> JoinHandle<()> {
        let period =
            (self.config.form_ttl() / 4).clamp(Duration::from_secs(1), Duration::from_secs(60));
        tracing::debug!(
            period_secs = period.as_secs(),
            "Starting reservation form sweeper"
        );
        self.forms.spawn_sweeper(period)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn submitter(&self) -> Arc<dyn ReservationSubmitter> {
        self.forms.submitter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_with_bundled_content() {
        let state = ServerState::initialize(&Config::for_tests()).unwrap();
        assert_eq!(state.catalog().restaurant().name, "Bella Vista Cafe");
        assert!(state.forms.is_empty());
    }

    #[test]
    fn test_initialize_with_missing_content_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::for_tests();
        config.content_dir = Some(dir.path().join("nope"));
        assert!(ServerState::initialize(&config).is_err());
    }
}
