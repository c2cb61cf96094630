//! Day-by-day itinerary synthesis
//!
//! Every day has three slots. Day 1 opens with arrival, the last day closes
//! with departure, afternoons consume ranked attractions (each at most once)
//! and everything else is drawn from the merged theme pools.

use crate::models::{Activity, Attraction, DayPlan, Hotel, Transport};
use crate::planner::themes::MergedTheme;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

pub const MORNING_SLOT: &str = "Morning (9:00 AM)";
pub const AFTERNOON_SLOT: &str = "Afternoon (2:00 PM)";
pub const EVENING_SLOT: &str = "Evening (7:00 PM)";

pub const CHECK_IN_TIME: &str = "3:00 PM";
pub const CHECK_OUT_TIME: &str = "11:00 AM";

pub const DEPARTURE_ACTIVITY: &str = "Prepare for departure";

/// Inputs for one itinerary. Candidate slices are already ranked.
#[derive(Debug, Clone, Copy)]
pub struct ItineraryContext<'a> {
    pub destination: &'a str,
    /// Raw travel type, used in generated descriptions
    pub travel_type: &'a str,
    pub theme: &'a MergedTheme,
    pub num_days: u32,
    /// Budget per day; informational, the template does not spend against it
    pub daily_budget: i64,
    pub hotels: &'a [Hotel],
    pub transports: &'a [Transport],
    pub attractions: &'a [Attraction],
}

/// Build the itinerary, one `DayPlan` per day from 1 to `num_days`.
pub fn build_itinerary<R: Rng + ?Sized>(ctx: &ItineraryContext<'_>, rng: &mut R) -> Vec<DayPlan> {
    debug!(
        destination = %ctx.destination,
        num_days = ctx.num_days,
        daily_budget = ctx.daily_budget,
        attractions = ctx.attractions.len(),
        "Synthesizing itinerary"
    );

    let hotel = ctx.hotels.first();
    let mut used_attractions: HashSet<&str> = HashSet::new();

    (1..=ctx.num_days)
        .map(|day| {
            let morning = if day == 1 {
                arrival(ctx, hotel)
            } else {
                Activity {
                    time: MORNING_SLOT.to_string(),
                    activity: pick(&ctx.theme.morning_activities, rng, ctx.destination),
                    description: format!("Start your day with this {} experience", ctx.travel_type),
                    estimated_cost: 0.0,
                }
            };

            let afternoon = afternoon(ctx, &mut used_attractions, rng);

            let evening = if day == ctx.num_days {
                departure(hotel)
            } else {
                Activity {
                    time: EVENING_SLOT.to_string(),
                    activity: pick(&ctx.theme.evening_activities, rng, ctx.destination),
                    description: format!(
                        "End your day with a memorable {} experience",
                        ctx.travel_type
                    ),
                    estimated_cost: 0.0,
                }
            };

            let activities = vec![morning, afternoon, evening];
            let day_total = activities.iter().map(|a| a.estimated_cost).sum();

            DayPlan {
                day,
                title: format!("Day {} in {}", day, ctx.destination),
                activities,
                day_total,
            }
        })
        .collect()
}

/// Day 1 morning. Transport is costed in the breakdown, never here.
fn arrival(ctx: &ItineraryContext<'_>, hotel: Option<&Hotel>) -> Activity {
    let hotel_name = hotel.map(|h| name_or(&h.name, "your hotel"));

    let (activity, description) = match (ctx.transports.first(), hotel_name) {
        (Some(transport), Some(name)) => (
            format!("Arrive via {}", name_or(&transport.name, "transport")),
            format!(
                "Travel to {}. Check into {} (Check-in: {})",
                ctx.destination, name, CHECK_IN_TIME
            ),
        ),
        (Some(transport), None) => (
            format!("Arrive via {}", name_or(&transport.name, "transport")),
            format!(
                "Travel to {}. Check into your hotel and freshen up.",
                ctx.destination
            ),
        ),
        (None, Some(name)) => (
            format!("Arrive in {}", ctx.destination),
            format!("Check into {} (Check-in: {}) and settle in", name, CHECK_IN_TIME),
        ),
        (None, None) => (
            format!("Arrive in {}", ctx.destination),
            "Check into your hotel and settle in".to_string(),
        ),
    };

    Activity {
        time: MORNING_SLOT.to_string(),
        activity,
        description,
        estimated_cost: 0.0,
    }
}

/// Highest-ranked attraction not used yet, else a free theme activity.
fn afternoon<'a, R: Rng + ?Sized>(
    ctx: &ItineraryContext<'a>,
    used: &mut HashSet<&'a str>,
    rng: &mut R,
) -> Activity {
    let next = ctx
        .attractions
        .iter()
        .find(|a| !used.contains(a.name.as_str()));

    match next {
        Some(attraction) => {
            used.insert(attraction.name.as_str());
            let name = name_or(&attraction.name, "local attraction");
            Activity {
                time: AFTERNOON_SLOT.to_string(),
                activity: format!("Visit {}", name),
                description: attraction.description.clone().unwrap_or_else(|| {
                    format!("Visit the famous {} in {}", attraction.name, ctx.destination)
                }),
                estimated_cost: attraction.price_per_person,
            }
        }
        None => Activity {
            time: AFTERNOON_SLOT.to_string(),
            activity: pick(&ctx.theme.afternoon_activities, rng, ctx.destination),
            description: format!("Enjoy {} activities in {}", ctx.travel_type, ctx.destination),
            estimated_cost: 0.0,
        },
    }
}

/// Last-day evening
fn departure(hotel: Option<&Hotel>) -> Activity {
    let description = match hotel {
        Some(h) => format!(
            "Check out from {} (Check-out: {}), enjoy a final dinner, and prepare for your journey home",
            name_or(&h.name, "hotel"),
            CHECK_OUT_TIME
        ),
        None => "Check out, enjoy a final dinner, and prepare for your journey home".to_string(),
    };

    Activity {
        time: EVENING_SLOT.to_string(),
        activity: DEPARTURE_ACTIVITY.to_string(),
        description,
        estimated_cost: 0.0,
    }
}

fn pick<R: Rng + ?Sized>(pool: &[&'static str], rng: &mut R, destination: &str) -> String {
    pool.choose(rng)
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("Explore {}", destination))
}

fn name_or<'a>(name: &'a str, fallback: &'a str) -> &'a str {
    if name.is_empty() {
        fallback
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::themes::merge_themes;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn attraction(name: &str, price: f64) -> Attraction {
        Attraction {
            name: name.to_string(),
            price_per_person: price,
            ..Attraction::default()
        }
    }

    fn hotel(name: &str) -> Hotel {
        Hotel {
            name: name.to_string(),
            price_per_night: 150.0,
            ..Hotel::default()
        }
    }

    fn transport(name: &str) -> Transport {
        Transport {
            name: name.to_string(),
            price_per_person: 300.0,
            ..Transport::default()
        }
    }

    fn run(
        num_days: u32,
        hotels: &[Hotel],
        transports: &[Transport],
        attractions: &[Attraction],
        seed: u64,
    ) -> Vec<DayPlan> {
        let mut rng = StdRng::seed_from_u64(seed);
        let theme = merge_themes(&["culture".to_string(), "food".to_string()], &mut rng);
        let ctx = ItineraryContext {
            destination: "Paris",
            travel_type: "culture,food",
            theme: &theme,
            num_days,
            daily_budget: 500,
            hotels,
            transports,
            attractions,
        };
        build_itinerary(&ctx, &mut rng)
    }

    #[test]
    fn test_day_count_and_slot_shape() {
        for days in 1..=7 {
            let itinerary = run(days, &[hotel("H1")], &[transport("T1")], &[], u64::from(days));
            assert_eq!(itinerary.len(), days as usize);
            for (i, day) in itinerary.iter().enumerate() {
                assert_eq!(day.day, i as u32 + 1);
                assert_eq!(day.activities.len(), 3);
                assert_eq!(day.activities[0].time, MORNING_SLOT);
                assert_eq!(day.activities[1].time, AFTERNOON_SLOT);
                assert_eq!(day.activities[2].time, EVENING_SLOT);
            }
        }
    }

    #[test]
    fn test_arrival_and_departure_templates() {
        let itinerary = run(4, &[hotel("Grand")], &[transport("Economy Flight")], &[], 3);

        let first = &itinerary[0].activities[0];
        assert_eq!(first.activity, "Arrive via Economy Flight");
        assert!(first.description.contains("Check into Grand"));
        assert_eq!(first.estimated_cost, 0.0);

        let last = itinerary.last().unwrap().activities.last().unwrap();
        assert_eq!(last.activity, DEPARTURE_ACTIVITY);
        assert!(last.description.starts_with("Check out from Grand"));

        // Middle days use theme pools, not the fixed templates
        assert_ne!(itinerary[1].activities[2].activity, DEPARTURE_ACTIVITY);
        assert!(!itinerary[1].activities[0].activity.starts_with("Arrive"));
    }

    #[test]
    fn test_single_day_is_arrival_and_departure() {
        let itinerary = run(1, &[], &[], &[attraction("Louvre", 17.0)], 5);
        assert_eq!(itinerary.len(), 1);
        let day = &itinerary[0];
        assert_eq!(day.activities[0].activity, "Arrive in Paris");
        assert_eq!(day.activities[0].description, "Check into your hotel and settle in");
        assert_eq!(day.activities[1].activity, "Visit Louvre");
        assert_eq!(day.activities[2].activity, DEPARTURE_ACTIVITY);
        assert_eq!(day.day_total, 17.0);
    }

    #[test]
    fn test_attractions_used_once_in_rank_order() {
        let attractions = vec![
            attraction("A1", 20.0),
            attraction("A2", 0.0),
            attraction("A1", 99.0),
            attraction("A3", 12.0),
        ];
        let itinerary = run(5, &[hotel("H")], &[], &attractions, 11);

        let afternoons: Vec<&str> = itinerary
            .iter()
            .map(|d| d.activities[1].activity.as_str())
            .collect();
        assert_eq!(&afternoons[..3], &["Visit A1", "Visit A2", "Visit A3"]);
        assert!(!afternoons[3].starts_with("Visit A"));
        assert!(!afternoons[4].starts_with("Visit A"));

        let totals: Vec<f64> = itinerary.iter().map(|d| d.day_total).collect();
        assert_eq!(totals, vec![20.0, 0.0, 12.0, 0.0, 0.0]);
    }

    #[test]
    fn test_attraction_description_defaults() {
        let mut described = attraction("Museum", 10.0);
        described.description = Some("World-class art".to_string());
        let itinerary = run(2, &[], &[], &[described, attraction("Park", 0.0)], 8);

        assert_eq!(itinerary[0].activities[1].description, "World-class art");
        assert_eq!(
            itinerary[1].activities[1].description,
            "Visit the famous Park in Paris"
        );
    }

    #[test]
    fn test_zero_days_yields_empty_itinerary() {
        assert!(run(0, &[], &[], &[], 1).is_empty());
    }
}
