//! Travel recommendation search
//!
//! Pulls candidates from a `CandidateSource`, applies the optional budget
//! split (60% lodging, 30% inter-city transport, 10% local transport) and
//! summarizes the cheapest combination.

use crate::error::PlannerError;
use crate::models::{Attraction, Hotel, Transport};
use crate::sources::{CandidateSource, Coordinates, SourceQuery};
use crate::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

const HOTEL_BUDGET_SHARE: f64 = 0.6;
const TRANSPORT_BUDGET_SHARE: f64 = 0.3;
const LOCAL_TRANSPORT_BUDGET_SHARE: f64 = 0.1;
const ESTIMATED_ATTRACTION_COUNT: usize = 5;

const MAX_PEOPLE: u32 = 20;
const MAX_ROOMS: u32 = 10;
const MAX_NAME_LEN: usize = 200;

fn default_count() -> u32 {
    1
}

/// Search input as accepted by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub origin: String,
    pub destination: String,
    /// ISO date, `YYYY-MM-DD`
    pub check_in: String,
    /// ISO date, must be after `check_in`
    pub check_out: String,
    #[serde(default = "default_count")]
    pub people: u32,
    #[serde(default = "default_count")]
    pub rooms: u32,
    #[serde(default)]
    pub budget: Option<i64>,
}

impl SearchQuery {
    /// Validate and convert into a source query
    pub fn validate(&self) -> Result<SourceQuery> {
        let destination = self.destination.trim();
        if destination.is_empty() {
            return Err(PlannerError::InvalidRequest(
                "destination must not be empty".to_string(),
            ));
        }
        if destination.len() > MAX_NAME_LEN || self.origin.len() > MAX_NAME_LEN {
            return Err(PlannerError::InvalidRequest(format!(
                "origin and destination are limited to {} characters",
                MAX_NAME_LEN
            )));
        }
        if !(1..=MAX_PEOPLE).contains(&self.people) {
            return Err(PlannerError::InvalidRequest(format!(
                "people must be between 1 and {}",
                MAX_PEOPLE
            )));
        }
        if !(1..=MAX_ROOMS).contains(&self.rooms) {
            return Err(PlannerError::InvalidRequest(format!(
                "rooms must be between 1 and {}",
                MAX_ROOMS
            )));
        }
        if matches!(self.budget, Some(b) if b < 0) {
            return Err(PlannerError::InvalidRequest(
                "budget must not be negative".to_string(),
            ));
        }

        let check_in = NaiveDate::parse_from_str(self.check_in.trim(), "%Y-%m-%d")?;
        let check_out = NaiveDate::parse_from_str(self.check_out.trim(), "%Y-%m-%d")?;
        if check_out <= check_in {
            return Err(PlannerError::InvalidRequest(
                "Check-out date must be after check-in date".to_string(),
            ));
        }

        Ok(SourceQuery {
            origin: self.origin.trim().to_string(),
            destination: destination.to_string(),
            check_in,
            check_out,
            people: self.people,
            rooms: self.rooms,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendations {
    pub summary: RecommendationSummary,
    pub hotels: Vec<Hotel>,
    pub transports: Vec<Transport>,
    pub local_transports: Vec<Transport>,
    pub attractions: Vec<Attraction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationSummary {
    pub origin: PlaceSummary,
    pub destination: PlaceSummary,
    pub trip_details: TripDetails,
    pub price_breakdown: PriceBreakdown,
    pub options_count: OptionsCount,
    pub data_source: String,
    pub budget_applied: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceSummary {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripDetails {
    pub origin: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: u32,
    pub people: u32,
    pub rooms: u32,
    pub budget: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceBreakdown {
    pub hotel_min: f64,
    pub transport_min: f64,
    pub local_transport_min: f64,
    pub attractions_estimated: f64,
    pub total_min: f64,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptionsCount {
    pub hotels: usize,
    pub transports: usize,
    pub local_transports: usize,
    pub attractions: usize,
}

/// Combines a candidate source with budget filtering and price summaries
#[derive(Clone)]
pub struct RecommendationService {
    source: Arc<dyn CandidateSource>,
}

impl RecommendationService {
    pub fn new(source: Arc<dyn CandidateSource>) -> Self {
        Self { source }
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    pub async fn get_recommendations(&self, query: &SearchQuery) -> Result<Recommendations> {
        let source_query = query.validate()?;
        let nights = source_query.nights();

        info!(
            destination = %source_query.destination,
            nights,
            people = source_query.people,
            budget = ?query.budget,
            data_source = self.source.name(),
            "Fetching travel recommendations"
        );

        let coordinates = self.source.coordinates(&source_query.destination).await?;
        let mut hotels = self.source.hotels(&source_query).await?;
        let mut transports = self.source.transports(&source_query).await?;
        let mut local_transports = self.source.local_transports(&source_query).await?;
        let attractions = self.source.attractions(&source_query.destination).await?;

        let budget = query.budget.filter(|b| *b > 0);
        if let Some(budget) = budget {
            let budget = budget as f64;
            let stay_factor = f64::from(nights) * f64::from(source_query.rooms);

            hotels = keep_within(hotels, |h| {
                h.price_per_night * stay_factor <= budget * HOTEL_BUDGET_SHARE
            });
            hotels.sort_by(|a, b| a.price_per_night.total_cmp(&b.price_per_night));

            let people = f64::from(source_query.people);
            transports = keep_within(transports, |t| {
                t.price_per_person * people <= budget * TRANSPORT_BUDGET_SHARE
            });

            local_transports = keep_within(local_transports, |t| {
                t.total_price.unwrap_or(0.0) <= budget * LOCAL_TRANSPORT_BUDGET_SHARE
            });
        }

        let price_breakdown = price_breakdown(
            &hotels,
            &transports,
            &local_transports,
            &attractions,
            nights,
            &source_query,
        );

        let origin_name = if source_query.origin.is_empty() {
            "Not specified".to_string()
        } else {
            source_query.origin.clone()
        };

        let summary = RecommendationSummary {
            origin: PlaceSummary {
                name: origin_name.clone(),
                coordinates: None,
            },
            destination: PlaceSummary {
                name: source_query.destination.clone(),
                coordinates: Some(coordinates),
            },
            trip_details: TripDetails {
                origin: origin_name,
                check_in: source_query.check_in,
                check_out: source_query.check_out,
                nights,
                people: source_query.people,
                rooms: source_query.rooms,
                budget: query.budget,
            },
            price_breakdown,
            options_count: OptionsCount {
                hotels: hotels.len(),
                transports: transports.len(),
                local_transports: local_transports.len(),
                attractions: attractions.len(),
            },
            data_source: self.source.name().to_string(),
            budget_applied: budget.is_some(),
        };

        Ok(Recommendations {
            summary,
            hotels,
            transports,
            local_transports,
            attractions,
        })
    }
}

/// Keep items passing the filter, or all of them if none pass.
fn keep_within<T, F>(items: Vec<T>, fits: F) -> Vec<T>
where
    F: Fn(&T) -> bool,
{
    if items.iter().any(&fits) {
        items.into_iter().filter(|item| fits(item)).collect()
    } else {
        debug!(count = items.len(), "No option fits the budget share, keeping all");
        items
    }
}

fn price_breakdown(
    hotels: &[Hotel],
    transports: &[Transport],
    local_transports: &[Transport],
    attractions: &[Attraction],
    nights: u32,
    query: &SourceQuery,
) -> PriceBreakdown {
    let hotel_min = hotels
        .first()
        .map(|h| h.price_per_night * f64::from(nights) * f64::from(query.rooms))
        .unwrap_or(0.0);
    let transport_min = transports
        .first()
        .map(|t| t.price_per_person * f64::from(query.people))
        .unwrap_or(0.0);
    let local_transport_min = local_transports
        .first()
        .and_then(|t| t.total_price)
        .unwrap_or(0.0);
    let attractions_estimated = attractions
        .iter()
        .take(ESTIMATED_ATTRACTION_COUNT)
        .map(|a| a.price_per_person)
        .sum::<f64>()
        * f64::from(query.people);

    let total = hotel_min + transport_min + local_transport_min + attractions_estimated;

    PriceBreakdown {
        hotel_min,
        transport_min,
        local_transport_min,
        attractions_estimated,
        total_min: (total * 100.0).round() / 100.0,
        currency: "USD".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::MockCandidateSource;

    fn search(budget: Option<i64>) -> SearchQuery {
        SearchQuery {
            origin: "NYC".to_string(),
            destination: "Paris".to_string(),
            check_in: "2026-06-01".to_string(),
            check_out: "2026-06-04".to_string(),
            people: 2,
            rooms: 1,
            budget,
        }
    }

    fn service(seed: u64) -> RecommendationService {
        RecommendationService::new(Arc::new(MockCandidateSource::with_seed(seed)))
    }

    #[test]
    fn test_validation() {
        assert_eq!(search(None).validate().unwrap().nights(), 3);

        let mut q = search(None);
        q.check_out = "2026-06-01".to_string();
        assert!(matches!(q.validate(), Err(PlannerError::InvalidRequest(_))));

        let mut q = search(None);
        q.check_in = "June 1st".to_string();
        assert!(matches!(q.validate(), Err(PlannerError::DateError(_))));

        let mut q = search(None);
        q.people = 0;
        assert!(q.validate().is_err());

        let mut q = search(None);
        q.destination = "  ".to_string();
        assert!(q.validate().is_err());

        assert!(search(Some(-5)).validate().is_err());
    }

    #[test]
    fn test_keep_within_falls_back_to_all() {
        let kept = keep_within(vec![1, 5, 10], |n| *n < 6);
        assert_eq!(kept, vec![1, 5]);

        let kept = keep_within(vec![10, 20], |n| *n < 6);
        assert_eq!(kept, vec![10, 20]);
    }

    #[tokio::test]
    async fn test_recommendations_without_budget() {
        let result = service(5).get_recommendations(&search(None)).await.unwrap();

        assert_eq!(result.hotels.len(), 10);
        assert_eq!(result.transports.len(), 5);
        assert_eq!(result.local_transports.len(), 6);
        assert_eq!(result.attractions.len(), 10);
        assert!(!result.summary.budget_applied);
        assert_eq!(result.summary.data_source, "mock");
        assert_eq!(result.summary.trip_details.nights, 3);

        let prices = &result.summary.price_breakdown;
        assert_eq!(prices.hotel_min, result.hotels[0].price_per_night * 3.0);
        // First five mock attractions: 15 + 0 + 20 + 0 + 10, for two people
        assert_eq!(prices.attractions_estimated, 90.0);
    }

    #[tokio::test]
    async fn test_budget_filters_hotels() {
        let result = service(6).get_recommendations(&search(Some(1000))).await.unwrap();

        assert!(result.summary.budget_applied);
        // 60% of 1000 over three nights leaves 200 per night
        assert!(result
            .hotels
            .iter()
            .all(|h| h.price_per_night * 3.0 <= 600.0));
        assert!(result
            .transports
            .iter()
            .all(|t| t.price_per_person * 2.0 <= 300.0)
            || result.transports.len() == 5);
    }
}
