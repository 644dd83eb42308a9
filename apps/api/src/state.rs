use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::matching::index::JobIndex;
use crate::matching::scorer::MatchScorer;

/// Shared application state injected into all route handlers via Axum
/// extractors. Everything here is read-only after startup; handlers share no
/// mutable state.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Client for the feed and search proxies, with its own shorter timeout.
    pub http: reqwest::Client,
    pub catalog: Arc<Catalog>,
    pub jobs: Arc<JobIndex>,
    /// Pluggable match scorer. Default: KeywordMatchScorer. Swap via
    /// ENABLE_LLM_MATCHING env.
    pub match_scorer: Arc<dyn MatchScorer>,
    pub config: Config,
}
