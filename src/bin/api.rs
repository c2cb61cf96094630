use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use travel_planner::{
    api::{start_server, ApiState},
    config::{ApiMode, PlannerConfig},
    recommendations::RecommendationService,
    sources::{CandidateSource, MockCandidateSource},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = PlannerConfig::from_env()?;

    info!("🚀 Travel Planner - API Server");
    info!("📍 Port: {}", config.port);
    info!("🗂️  Data source: {}", config.api_mode.as_str());

    let rng = match config.seed {
        Some(seed) => {
            info!("🎲 Using fixed seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let source: Arc<dyn CandidateSource> = match config.api_mode {
        ApiMode::Mock => match config.seed {
            Some(seed) => Arc::new(MockCandidateSource::with_seed(seed)),
            None => Arc::new(MockCandidateSource::new()),
        },
    };

    let state = ApiState::new(RecommendationService::new(source), rng);

    info!("✅ Planner initialized");
    info!("📡 Starting API server...");

    start_server(state, config.port).await?;

    Ok(())
}
