//! Travel Planner
//!
//! Recommendation and itinerary-planning engine:
//! - Ranks candidate hotels against a lodging preference
//! - Merges one or more travel themes into activity pools
//! - Synthesizes a day-by-day itinerary from attractions and theme pools
//! - Reconciles estimated costs against the traveller's budget
//! - Assembles the final plan with tips and a readable transcript
//!
//! FLOW:
//! SEARCH → RANK → MERGE THEMES → BUILD DAYS → RECONCILE → ASSEMBLE

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod planner;
pub mod profiles;
pub mod recommendations;
pub mod sources;

pub use error::Result;

// Re-export common types
pub use models::*;
pub use planner::TravelPlanner;
pub use profiles::{HotelPreference, TravelTheme};
pub use recommendations::{RecommendationService, SearchQuery};
