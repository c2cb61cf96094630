use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use travel_planner::{
    models::PlanRequest,
    recommendations::{RecommendationService, SearchQuery},
    sources::MockCandidateSource,
    TravelPlanner,
};

const DEMO_SEED: u64 = 42;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    info!("Travel Planner demo starting");

    let service = RecommendationService::new(Arc::new(MockCandidateSource::with_seed(DEMO_SEED)));
    let query = SearchQuery {
        origin: "New York".to_string(),
        destination: "Lisbon".to_string(),
        check_in: "2026-05-10".to_string(),
        check_out: "2026-05-14".to_string(),
        people: 2,
        rooms: 1,
        budget: Some(2500),
    };

    let recommendations = service.get_recommendations(&query).await?;
    info!(
        hotels = recommendations.hotels.len(),
        transports = recommendations.transports.len(),
        total_min = recommendations.summary.price_breakdown.total_min,
        "Fetched candidates"
    );

    let request = PlanRequest {
        origin: query.origin.clone(),
        destination: query.destination.clone(),
        travel_type: "culture, food".to_string(),
        hotel_preference: Some("boutique".to_string()),
        budget: 2500,
        num_days: 4,
        num_people: 2,
        hotels: recommendations.hotels,
        transports: recommendations.transports,
        attractions: recommendations.attractions,
        user_set_budget: true,
    };

    let mut rng = StdRng::seed_from_u64(DEMO_SEED);
    let response = TravelPlanner::new().generate_travel_plan(&request, &mut rng);
    let plan = &response.plan;

    println!("\n=== TRAVEL PLAN {} ===", plan.plan_id);
    println!("{}", plan.itinerary_text);
    println!("Estimated total: ${:.2}", plan.cost_breakdown.estimated_total);
    if let Some(warning) = &response.budget_warning {
        println!("⚠️  {}", warning.message);
        println!("   {}", warning.suggestion);
    }
    println!("\nTips:");
    for (i, tip) in plan.tips.iter().enumerate() {
        println!("  {}: {}", i + 1, tip);
    }

    Ok(())
}
