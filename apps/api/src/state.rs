use crate::analysis::engine::AnalysisEngine;
use crate::datastore::Datastore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub datastore: Datastore,
    /// Analysis orchestrator. Holds the optional remote analyzer behind
    /// its trait seam; local-only when no LLM key is configured.
    pub engine: AnalysisEngine,
}
