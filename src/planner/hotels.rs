//! Hotel ranking against a preference profile
//!
//! Scoring only reorders; every candidate is kept.

use crate::models::Hotel;
use crate::profiles::HotelPreference;
use tracing::debug;

const IN_BAND_SCORE: f64 = 50.0;
const UNDER_BAND_SCORE: f64 = 30.0;
const OVER_BAND_BASE: f64 = 20.0;
/// Score lost per dollar above the band's ceiling
const OVER_BAND_DECAY: f64 = 50.0;
const RATING_WEIGHT: f64 = 5.0;
const AMENITY_WEIGHT: f64 = 5.0;

/// Match score of one hotel for a preference (higher is better)
pub fn score_hotel(hotel: &Hotel, preference: HotelPreference) -> f64 {
    let (price_min, price_max) = preference.price_range();
    let price = hotel.price_per_night;

    let price_score = if price >= price_min && price <= price_max {
        IN_BAND_SCORE
    } else if price < price_min {
        UNDER_BAND_SCORE
    } else {
        (OVER_BAND_BASE - (price - price_max) / OVER_BAND_DECAY).max(0.0)
    };

    let rating_score = hotel.rating * RATING_WEIGHT;

    let wanted = preference.amenities();
    let mut matched: Vec<&str> = hotel
        .amenity_list()
        .iter()
        .map(String::as_str)
        .filter(|a| wanted.contains(a))
        .collect();
    matched.sort_unstable();
    matched.dedup();
    let amenity_score = matched.len() as f64 * AMENITY_WEIGHT;

    price_score + rating_score + amenity_score + preference.star_bonus(hotel.star_class())
}

/// Reorder hotels by descending match score. Ties keep input order.
pub fn rank_hotels(hotels: &[Hotel], preference: HotelPreference) -> Vec<Hotel> {
    let mut scored: Vec<(f64, &Hotel)> = hotels
        .iter()
        .map(|hotel| (score_hotel(hotel, preference), hotel))
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    if let Some((top_score, top)) = scored.first() {
        debug!(
            preference = preference.key(),
            candidates = scored.len(),
            top_hotel = %top.name,
            top_score = *top_score,
            "Ranked hotels"
        );
    }

    scored.into_iter().map(|(_, hotel)| hotel.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel(name: &str, price: f64, rating: f64, stars: u8, amenities: &[&str]) -> Hotel {
        Hotel {
            name: name.to_string(),
            price_per_night: price,
            rating,
            stars: Some(stars),
            amenities: Some(amenities.iter().map(|a| a.to_string()).collect()),
            ..Hotel::default()
        }
    }

    #[test]
    fn test_price_band_scoring() {
        let pref = HotelPreference::MidRange;
        // 3 stars earns the mid-range star bonus in every case below
        assert_eq!(score_hotel(&hotel("in", 100.0, 0.0, 3, &[]), pref), 65.0);
        assert_eq!(score_hotel(&hotel("under", 50.0, 0.0, 3, &[]), pref), 45.0);
        assert_eq!(score_hotel(&hotel("over", 280.0, 0.0, 3, &[]), pref), 33.0);
        assert_eq!(score_hotel(&hotel("way-over", 5000.0, 0.0, 3, &[]), pref), 15.0);
    }

    #[test]
    fn test_rating_amenity_and_star_bonus() {
        let h = hotel("lux", 400.0, 9.0, 5, &["Spa", "Pool", "Parking", "Spa"]);
        // 50 band + 45 rating + 10 for two distinct amenities + 20 stars
        assert_eq!(score_hotel(&h, HotelPreference::Luxury), 125.0);
    }

    #[test]
    fn test_rank_orders_by_score_and_keeps_all() {
        let hotels = vec![
            hotel("Pricey", 900.0, 6.0, 5, &[]),
            hotel("Fit", 120.0, 8.0, 4, &["Free WiFi", "Breakfast"]),
            hotel("Cheap", 40.0, 7.0, 2, &[]),
        ];

        let ranked = rank_hotels(&hotels, HotelPreference::MidRange);
        assert_eq!(ranked.len(), hotels.len());
        assert_eq!(ranked[0].name, "Fit");
        assert_eq!(ranked[1].name, "Cheap");
        assert_eq!(ranked[2].name, "Pricey");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let hotels = vec![
            hotel("First", 100.0, 8.0, 3, &[]),
            hotel("Second", 100.0, 8.0, 3, &[]),
            hotel("Third", 100.0, 8.0, 3, &[]),
        ];
        let ranked = rank_hotels(&hotels, HotelPreference::Budget);
        let names: Vec<&str> = ranked.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_hotels(&[], HotelPreference::Luxury).is_empty());
    }
}
