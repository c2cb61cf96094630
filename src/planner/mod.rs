//! Template-based travel planner
//!
//! Ranks hotels against a preference profile, fills a three-slot-per-day
//! itinerary from merged theme pools and ranked attractions, reconciles
//! costs against the budget and assembles the final plan.
//!
//! Planning never fails: missing data degrades to defaults. Every random
//! choice goes through the caller's `Rng`, so a seeded generator gives a
//! reproducible plan.

use crate::models::{Accommodation, PlanRequest, PlanResponse, TravelPlan};
use crate::profiles::{HotelPreference, TravelTheme, DEFAULT_THEME_KEY};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

pub mod budget;
pub mod hotels;
pub mod itinerary;
pub mod render;
pub mod themes;
pub mod tips;

pub use budget::{reconcile, BudgetInputs, BudgetReconciliation};
pub use hotels::{rank_hotels, score_hotel};
pub use itinerary::{build_itinerary, ItineraryContext};
pub use themes::{merge_themes, parse_theme_keys, MergedTheme};

const TOP_ATTRACTION_COUNT: usize = 5;

/// Plan assembler
#[derive(Debug, Clone, Copy, Default)]
pub struct TravelPlanner;

impl TravelPlanner {
    pub fn new() -> Self {
        Self
    }

    /// Generate a complete plan. Always succeeds.
    pub fn generate_travel_plan<R: Rng + ?Sized>(
        &self,
        request: &PlanRequest,
        rng: &mut R,
    ) -> PlanResponse {
        let theme_keys = parse_theme_keys(&request.travel_type);
        let merged_theme = merge_themes(&theme_keys, rng);

        let preference = HotelPreference::resolve(request.hotel_preference.as_deref());
        let ranked_hotels = rank_hotels(&request.hotels, preference);

        let daily_budget = if request.num_days > 0 {
            request.budget.div_euclid(i64::from(request.num_days))
        } else {
            request.budget
        };
        let per_person_budget = if request.num_people > 0 {
            request.budget.div_euclid(i64::from(request.num_people))
        } else {
            request.budget
        };

        let itinerary = build_itinerary(
            &ItineraryContext {
                destination: &request.destination,
                travel_type: &request.travel_type,
                theme: &merged_theme,
                num_days: request.num_days,
                daily_budget,
                hotels: &ranked_hotels,
                transports: &request.transports,
                attractions: &request.attractions,
            },
            rng,
        );

        let recommended_hotel = ranked_hotels.first().cloned();
        let recommended_transport = request.transports.first().cloned();

        let reconciliation = reconcile(&BudgetInputs {
            hotel: recommended_hotel.as_ref(),
            transport: recommended_transport.as_ref(),
            itinerary: &itinerary,
            budget: request.budget,
            num_days: request.num_days,
            num_people: request.num_people,
            user_set_budget: request.user_set_budget,
        });

        let primary_theme = theme_keys
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_THEME_KEY);
        let tips = tips::build_tips(&request.destination, primary_theme, preference.key());

        let accommodation = recommended_hotel.as_ref().map(|hotel| Accommodation {
            hotel_name: if hotel.name.is_empty() {
                "Recommended Hotel".to_string()
            } else {
                hotel.name.clone()
            },
            hotel_type: preference.key().to_string(),
            price_per_night: hotel.price_per_night,
            total_nights: request.num_days,
            total_cost: reconciliation.breakdown.hotel,
            check_in_time: itinerary::CHECK_IN_TIME.to_string(),
            check_out_time: itinerary::CHECK_OUT_TIME.to_string(),
            amenities: hotel.amenities.clone().unwrap_or_else(|| {
                preference.amenities().iter().map(|a| a.to_string()).collect()
            }),
            rating: hotel.rating,
            stars: hotel.star_class(),
            address: hotel
                .address
                .clone()
                .unwrap_or_else(|| format!("{} City Center", request.destination)),
            image: hotel
                .image
                .clone()
                .or_else(|| hotel.image_url.clone())
                .unwrap_or_default(),
        });

        let itinerary_text = render::render_itinerary(
            &render::TranscriptHeader {
                destination: &request.destination,
                travel_type: &request.travel_type,
                budget: request.budget,
                num_people: request.num_people,
                num_days: request.num_days,
            },
            &itinerary,
        );

        let budget_exceeded = reconciliation.exceeded();

        info!(
            destination = %request.destination,
            themes = ?theme_keys,
            hotel_preference = preference.key(),
            num_days = request.num_days,
            estimated_total = reconciliation.breakdown.estimated_total,
            budget_exceeded,
            "Travel plan generated"
        );

        let plan = TravelPlan {
            plan_id: uuid::Builder::from_random_bytes(rng.gen()).into_uuid(),
            origin: request.origin.clone(),
            destination: request.destination.clone(),
            travel_type: request.travel_type.clone(),
            travel_type_description: themes::combined_description(&theme_keys),
            travel_types: theme_keys,
            hotel_preference: preference.key().to_string(),
            hotel_preference_description: preference.description().to_string(),
            budget: request.budget,
            budget_exceeded,
            budget_warning: reconciliation.warning.clone(),
            num_days: request.num_days,
            num_people: request.num_people,
            daily_budget,
            per_person_budget,
            itinerary,
            itinerary_text,
            recommended_hotel,
            accommodation,
            recommended_transport,
            top_attractions: request
                .attractions
                .iter()
                .take(TOP_ATTRACTION_COUNT)
                .cloned()
                .collect(),
            cost_breakdown: reconciliation.breakdown,
            tips,
        };

        PlanResponse {
            success: true,
            budget_exceeded,
            budget_warning: reconciliation.warning,
            plan,
        }
    }

    /// Catalogue of supported travel themes
    pub fn available_travel_types(&self) -> Vec<TravelTypeInfo> {
        TravelTheme::ALL
            .iter()
            .map(|theme| TravelTypeInfo {
                id: theme.key().to_string(),
                name: theme.display_name().to_string(),
                description: theme.description().to_string(),
            })
            .collect()
    }

    /// Guided-search questions shown by clients before planning
    pub fn conversation_questions(&self) -> Vec<ConversationQuestion> {
        vec![
            ConversationQuestion::text(
                "origin",
                "Where are you traveling from?",
                "e.g., New York, London, Tokyo",
            ),
            ConversationQuestion::text(
                "destination",
                "Where would you like to go?",
                "e.g., Paris, Bali, Rome",
            ),
            ConversationQuestion {
                id: "travel_type".to_string(),
                question: "What type of experience are you looking for?".to_string(),
                kind: "select".to_string(),
                placeholder: None,
                options: Some(TravelTheme::ALL.iter().map(|t| t.key().to_string()).collect()),
                min: None,
                max: None,
            },
            ConversationQuestion::number("num_days", "How many days is your trip?", 1, Some(30)),
            ConversationQuestion::number(
                "num_people",
                "How many people are traveling?",
                1,
                Some(20),
            ),
            ConversationQuestion::number("budget", "What's your total budget (in USD)?", 100, None),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TravelTypeInfo {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversationQuestion {
    pub id: String,
    pub question: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

impl ConversationQuestion {
    fn text(id: &str, question: &str, placeholder: &str) -> Self {
        Self {
            id: id.to_string(),
            question: question.to_string(),
            kind: "text".to_string(),
            placeholder: Some(placeholder.to_string()),
            options: None,
            min: None,
            max: None,
        }
    }

    fn number(id: &str, question: &str, min: u32, max: Option<u32>) -> Self {
        Self {
            id: id.to_string(),
            question: question.to_string(),
            kind: "number".to_string(),
            placeholder: None,
            options: None,
            min: Some(min),
            max,
        }
    }
}
