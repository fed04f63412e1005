use crate::catalog::Catalog;
use crate::config::ServerConfig;
use crate::matching::MatchEngine;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Record table loaded at startup. Read-only for the process lifetime,
    /// so handlers share it without locking.
    pub catalog: Arc<Catalog>,

    /// Match engine (shared across requests)
    pub engine: Arc<MatchEngine>,
}

impl ServerState {
    /// Create new server state around an already-loaded catalog.
    pub fn new(config: ServerConfig, catalog: Catalog) -> Self {
        let engine = MatchEngine::new(config.teacher_field.clone(), config.course_field.clone());

        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            engine: Arc::new(engine),
        }
    }
}
