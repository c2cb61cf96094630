//! Core data models for the travel planner
//!
//! Candidate records are read-only inputs supplied by a data source. Every
//! field is optional on the wire; missing or `null` numbers read as zero and
//! missing collections as empty.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Deserialize a value, treating `null` the same as an absent field.
fn or_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

//
// ================= Candidates =================
//

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Hotel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(default, deserialize_with = "or_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub star_rating: Option<u8>,
    #[serde(default, deserialize_with = "or_default")]
    pub price_per_night: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Provider-specific fields carried through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Hotel {
    /// Star class used for preference alignment: `stars`, then
    /// `star_rating`, then 3. Zero counts as missing.
    pub fn star_class(&self) -> u8 {
        self.stars
            .filter(|s| *s > 0)
            .or(self.star_rating.filter(|s| *s > 0))
            .unwrap_or(3)
    }

    pub fn amenity_list(&self) -> &[String] {
        self.amenities.as_deref().unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Transport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// `intercity` or `local`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub price_per_person: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_day: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Attraction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub price_per_person: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

//
// ================= Itinerary =================
//

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub time: String,
    pub activity: String,
    pub description: String,
    pub estimated_cost: f64,
}

/// One day of the itinerary: morning, afternoon and evening, in that order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayPlan {
    pub day: u32,
    pub title: String,
    pub activities: Vec<Activity>,
    pub day_total: f64,
}

//
// ================= Costs =================
//

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostBreakdown {
    pub hotel: f64,
    pub transport: f64,
    pub activities_budget: f64,
    pub activities_actual: f64,
    pub activities_per_person: f64,
    pub estimated_total: f64,
    pub remaining_budget: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetWarning {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub suggestion: String,
    pub over_amount: f64,
    pub required_budget: f64,
}

//
// ================= Plan =================
//

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Accommodation {
    pub hotel_name: String,
    pub hotel_type: String,
    pub price_per_night: f64,
    pub total_nights: u32,
    pub total_cost: f64,
    pub check_in_time: String,
    pub check_out_time: String,
    pub amenities: Vec<String>,
    pub rating: f64,
    pub stars: u8,
    pub address: String,
    pub image: String,
}

/// Everything the planner needs for one plan. Candidate lists are expected
/// in the data source's ranking order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    pub origin: String,
    pub destination: String,
    /// Comma-separated theme keys, e.g. `"culture, food"`
    pub travel_type: String,
    #[serde(default)]
    pub hotel_preference: Option<String>,
    pub budget: i64,
    pub num_days: u32,
    pub num_people: u32,
    #[serde(default)]
    pub hotels: Vec<Hotel>,
    #[serde(default)]
    pub transports: Vec<Transport>,
    #[serde(default)]
    pub attractions: Vec<Attraction>,
    #[serde(default)]
    pub user_set_budget: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelPlan {
    pub plan_id: Uuid,
    pub origin: String,
    pub destination: String,
    pub travel_type: String,
    pub travel_types: Vec<String>,
    pub hotel_preference: String,
    pub hotel_preference_description: String,
    pub travel_type_description: String,
    pub budget: i64,
    pub budget_exceeded: bool,
    pub budget_warning: Option<BudgetWarning>,
    pub num_days: u32,
    pub num_people: u32,
    pub daily_budget: i64,
    pub per_person_budget: i64,
    pub itinerary: Vec<DayPlan>,
    pub itinerary_text: String,
    pub recommended_hotel: Option<Hotel>,
    pub accommodation: Option<Accommodation>,
    pub recommended_transport: Option<Transport>,
    pub top_attractions: Vec<Attraction>,
    pub cost_breakdown: CostBreakdown,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    pub success: bool,
    pub budget_exceeded: bool,
    pub budget_warning: Option<BudgetWarning>,
    pub plan: TravelPlan,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_null_fields_default() {
        let hotel: Hotel = serde_json::from_value(serde_json::json!({
            "name": "H1",
            "rating": null,
        }))
        .unwrap();
        assert_eq!(hotel.price_per_night, 0.0);
        assert_eq!(hotel.rating, 0.0);
        assert!(hotel.amenity_list().is_empty());

        let attraction: Attraction = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(attraction.name, "");
        assert_eq!(attraction.price_per_person, 0.0);
    }

    #[test]
    fn test_star_class_fallbacks() {
        let mut hotel = Hotel::default();
        assert_eq!(hotel.star_class(), 3);

        hotel.star_rating = Some(5);
        assert_eq!(hotel.star_class(), 5);

        hotel.stars = Some(0);
        assert_eq!(hotel.star_class(), 5);

        hotel.stars = Some(2);
        assert_eq!(hotel.star_class(), 2);
    }

    #[test]
    fn test_unknown_fields_pass_through() {
        let transport: Transport = serde_json::from_value(serde_json::json!({
            "name": "T1",
            "type": "flight",
            "price_per_person": 300,
            "carrier_code": "AF",
        }))
        .unwrap();
        assert_eq!(transport.kind.as_deref(), Some("flight"));
        assert_eq!(transport.extra.get("carrier_code"), Some(&serde_json::json!("AF")));

        let value = serde_json::to_value(&transport).unwrap();
        assert_eq!(value["carrier_code"], "AF");
        assert_eq!(value["type"], "flight");
    }
}
