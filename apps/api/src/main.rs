mod catalog;
mod config;
mod errors;
mod ingest;
mod jobs;
mod llm_client;
mod matching;
mod recommend;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::matching::index::JobIndex;
use crate::matching::scorer::{KeywordMatchScorer, LlmMatchScorer, MatchScorer};
use crate::routes::build_router;
use crate::state::AppState;

/// Resume payloads may be whole PDFs; match the transport's 10 MB body cap.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;
/// Feed and search proxy calls are bounded at 30s, one attempt each.
const PROXY_TIMEOUT_SECS: u64 = 30;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillBridge API v{}", env!("CARGO_PKG_VERSION"));

    // Load the learning-resource catalog
    let catalog = Arc::new(Catalog::load(Path::new(&config.catalog_path))?);
    info!("Catalog loaded: {} entries", catalog.len());
    if catalog.is_empty() {
        warn!("Catalog is empty; recommendation prompts will carry no catalog context");
    }

    // Load the preprocessed job index
    let jobs = Arc::new(JobIndex::load(Path::new(&config.jobs_index_path))?);
    info!("Job index loaded: {} jobs", jobs.len());
    if jobs.is_empty() {
        warn!("Job index is empty; match-jobs will return no results");
    }

    // Initialize LLM client
    let llm = LlmClient::new(config.groq_api_key.clone(), config.llm_api_url.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize proxy HTTP client
    let http = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(PROXY_TIMEOUT_SECS))
        .build()?;

    // Initialize match scorer (KeywordMatchScorer by default — swap via ENABLE_LLM_MATCHING)
    let match_scorer: Arc<dyn MatchScorer> = if config.enable_llm_matching {
        info!("Match scorer: LLM-backed");
        Arc::new(LlmMatchScorer(llm.clone()))
    } else {
        info!("Match scorer: keyword");
        Arc::new(KeywordMatchScorer)
    };

    // Build app state
    let state = AppState {
        llm,
        http,
        catalog,
        jobs,
        match_scorer,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
