//! Static travel-theme and hotel-preference profiles
//!
//! Both tables are closed sets keyed by a string id. Lookups never fail:
//! an unknown hotel preference resolves to mid-range, an unknown theme key
//! simply contributes nothing.

use serde::{Deserialize, Serialize};

//
// ================= Travel Themes =================
//

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TravelTheme {
    Nature,
    Culture,
    Food,
    Adventure,
    Relaxation,
}

/// Theme used when a request names no usable theme
pub const DEFAULT_THEME_KEY: &str = "culture";

impl TravelTheme {
    pub const ALL: [TravelTheme; 5] = [
        TravelTheme::Nature,
        TravelTheme::Culture,
        TravelTheme::Food,
        TravelTheme::Adventure,
        TravelTheme::Relaxation,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "nature" => Some(TravelTheme::Nature),
            "culture" => Some(TravelTheme::Culture),
            "food" => Some(TravelTheme::Food),
            "adventure" => Some(TravelTheme::Adventure),
            "relaxation" => Some(TravelTheme::Relaxation),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            TravelTheme::Nature => "nature",
            TravelTheme::Culture => "culture",
            TravelTheme::Food => "food",
            TravelTheme::Adventure => "adventure",
            TravelTheme::Relaxation => "relaxation",
        }
    }

    /// Display name, e.g. `Nature`
    pub fn display_name(&self) -> &'static str {
        match self {
            TravelTheme::Nature => "Nature",
            TravelTheme::Culture => "Culture",
            TravelTheme::Food => "Food",
            TravelTheme::Adventure => "Adventure",
            TravelTheme::Relaxation => "Relaxation",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TravelTheme::Nature => "outdoor activities, hiking, beaches, national parks, wildlife",
            TravelTheme::Culture => "museums, historical sites, architecture, local traditions",
            TravelTheme::Food => "local cuisine, food tours, cooking classes, markets",
            TravelTheme::Adventure => "extreme sports, water activities, mountain climbing",
            TravelTheme::Relaxation => "spa, resorts, quiet beaches, wellness retreats",
        }
    }

    pub fn morning_activities(&self) -> &'static [&'static str] {
        match self {
            TravelTheme::Nature => &[
                "Start the day with a scenic nature walk",
                "Early morning hike to catch the sunrise",
                "Visit a local botanical garden",
                "Explore a nearby nature reserve",
                "Morning bird watching tour",
            ],
            TravelTheme::Culture => &[
                "Visit the city's main museum",
                "Walking tour of historical district",
                "Explore ancient architecture",
                "Morning at an art gallery",
                "Visit a UNESCO World Heritage site",
            ],
            TravelTheme::Food => &[
                "Visit a local breakfast market",
                "Morning cooking class with locals",
                "Coffee tasting tour",
                "Fresh produce market exploration",
                "Bakery and pastry tour",
            ],
            TravelTheme::Adventure => &[
                "Early morning mountain trek",
                "Scuba diving or snorkeling",
                "Rock climbing adventure",
                "Zip-lining through forest",
                "White water rafting",
            ],
            TravelTheme::Relaxation => &[
                "Sunrise yoga session",
                "Morning meditation class",
                "Leisurely breakfast by the pool",
                "Gentle beach walk",
                "Morning spa treatment",
            ],
        }
    }

    pub fn afternoon_activities(&self) -> &'static [&'static str] {
        match self {
            TravelTheme::Nature => &[
                "Picnic lunch at a scenic viewpoint",
                "Kayaking or paddleboarding adventure",
                "Wildlife safari or nature tour",
                "Beach relaxation and swimming",
                "Visit a national park trail",
            ],
            TravelTheme::Culture => &[
                "Guided tour of local landmarks",
                "Traditional craft workshop",
                "Explore local markets and bazaars",
                "Visit historical monuments",
                "Architecture photography walk",
            ],
            TravelTheme::Food => &[
                "Street food walking tour",
                "Wine or beer tasting experience",
                "Visit local food producers",
                "Cooking workshop with chef",
                "Food photography tour",
            ],
            TravelTheme::Adventure => &[
                "Paragliding experience",
                "Mountain biking tour",
                "Canyoning adventure",
                "Surfing lessons",
                "ATV or quad biking",
            ],
            TravelTheme::Relaxation => &[
                "Full body massage and spa",
                "Pool or beach relaxation",
                "Wellness workshop",
                "Aromatherapy session",
                "Reading by the ocean",
            ],
        }
    }

    pub fn evening_activities(&self) -> &'static [&'static str] {
        match self {
            TravelTheme::Nature => &[
                "Sunset watching at a scenic spot",
                "Stargazing experience",
                "Campfire dinner experience",
                "Evening nature documentary at visitor center",
                "Relaxing spa treatment",
            ],
            TravelTheme::Culture => &[
                "Traditional cultural performance",
                "Dinner at a heritage restaurant",
                "Night tour of illuminated monuments",
                "Local music and dance show",
                "Evening stroll through old town",
            ],
            TravelTheme::Food => &[
                "Fine dining at top-rated restaurant",
                "Food and wine pairing dinner",
                "Night market food exploration",
                "Rooftop dining with views",
                "Traditional dinner with local family",
            ],
            TravelTheme::Adventure => &[
                "Night diving experience",
                "Camping under the stars",
                "Adventure stories at local bar",
                "Planning next day's adventure",
                "Recovery massage and dinner",
            ],
            TravelTheme::Relaxation => &[
                "Sunset cocktails",
                "Fine dining experience",
                "Evening meditation",
                "Starlit hot tub soak",
                "Live music at resort",
            ],
        }
    }

    /// Theme-specific travel tips, most important first
    pub fn tips(&self) -> &'static [&'static str] {
        match self {
            TravelTheme::Nature => &[
                "Pack layers for changing weather",
                "Bring a reusable water bottle",
                "Wear comfortable hiking shoes",
                "Carry sunscreen and insect repellent",
            ],
            TravelTheme::Culture => &[
                "Research local customs before visiting",
                "Dress modestly when visiting religious sites",
                "Consider hiring a local guide",
                "Visit museums on weekday mornings to avoid crowds",
            ],
            TravelTheme::Food => &[
                "Ask locals for restaurant recommendations",
                "Try street food for authentic flavors",
                "Book popular restaurants in advance",
                "Take a cooking class to learn local recipes",
            ],
            TravelTheme::Adventure => &[
                "Check equipment safety before activities",
                "Get travel insurance that covers adventure sports",
                "Stay hydrated during physical activities",
                "Know your limits and listen to guides",
            ],
            TravelTheme::Relaxation => &[
                "Book spa treatments in advance",
                "Bring a good book or download podcasts",
                "Disconnect from work emails",
                "Try local wellness practices",
            ],
        }
    }
}

//
// ================= Hotel Preferences =================
//

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum HotelPreference {
    Luxury,
    Boutique,
    Resort,
    MidRange,
    Budget,
    Hostel,
    Apartment,
    Unique,
}

/// Tips used when no preference-specific list exists
const GENERIC_HOTEL_TIPS: &[&str] = &[
    "Book early for better rates",
    "Check cancellation policies before booking",
];

impl Default for HotelPreference {
    fn default() -> Self {
        HotelPreference::MidRange
    }
}

impl HotelPreference {
    pub const ALL: [HotelPreference; 8] = [
        HotelPreference::Luxury,
        HotelPreference::Boutique,
        HotelPreference::Resort,
        HotelPreference::MidRange,
        HotelPreference::Budget,
        HotelPreference::Hostel,
        HotelPreference::Apartment,
        HotelPreference::Unique,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "luxury" => Some(HotelPreference::Luxury),
            "boutique" => Some(HotelPreference::Boutique),
            "resort" => Some(HotelPreference::Resort),
            "mid-range" => Some(HotelPreference::MidRange),
            "budget" => Some(HotelPreference::Budget),
            "hostel" => Some(HotelPreference::Hostel),
            "apartment" => Some(HotelPreference::Apartment),
            "unique" => Some(HotelPreference::Unique),
            _ => None,
        }
    }

    /// Resolve an optional caller-supplied key; missing, empty or unknown
    /// keys become mid-range.
    pub fn resolve(key: Option<&str>) -> Self {
        key.and_then(Self::from_key).unwrap_or_default()
    }

    pub fn key(&self) -> &'static str {
        match self {
            HotelPreference::Luxury => "luxury",
            HotelPreference::Boutique => "boutique",
            HotelPreference::Resort => "resort",
            HotelPreference::MidRange => "mid-range",
            HotelPreference::Budget => "budget",
            HotelPreference::Hostel => "hostel",
            HotelPreference::Apartment => "apartment",
            HotelPreference::Unique => "unique",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            HotelPreference::Luxury => "5-star luxury hotels with premium amenities",
            HotelPreference::Boutique => "Unique boutique hotels with personalized service",
            HotelPreference::Resort => "All-inclusive resorts with activities",
            HotelPreference::MidRange => "Comfortable mid-range hotels",
            HotelPreference::Budget => "Affordable budget-friendly accommodations",
            HotelPreference::Hostel => "Social hostels for backpackers",
            HotelPreference::Apartment => "Self-catering apartments",
            HotelPreference::Unique => "Unique stays like treehouses, igloos, caves",
        }
    }

    /// Nightly price band `(min, max)` in USD
    pub fn price_range(&self) -> (f64, f64) {
        match self {
            HotelPreference::Luxury => (300.0, 800.0),
            HotelPreference::Boutique => (150.0, 350.0),
            HotelPreference::Resort => (200.0, 500.0),
            HotelPreference::MidRange => (80.0, 180.0),
            HotelPreference::Budget => (30.0, 80.0),
            HotelPreference::Hostel => (15.0, 50.0),
            HotelPreference::Apartment => (70.0, 200.0),
            HotelPreference::Unique => (100.0, 400.0),
        }
    }

    pub fn amenities(&self) -> &'static [&'static str] {
        match self {
            HotelPreference::Luxury => &["Spa", "Fine Dining", "Concierge", "Pool", "Gym"],
            HotelPreference::Boutique => {
                &["Unique Decor", "Personalized Service", "Local Experience"]
            }
            HotelPreference::Resort => &["Pool", "Beach Access", "Entertainment", "All-Inclusive"],
            HotelPreference::MidRange => &["Free WiFi", "Breakfast", "Comfortable Rooms"],
            HotelPreference::Budget => &["Free WiFi", "Clean Rooms", "Central Location"],
            HotelPreference::Hostel => &["Social Areas", "Shared Facilities", "Tours"],
            HotelPreference::Apartment => &["Kitchen", "Living Space", "Home-like Experience"],
            HotelPreference::Unique => &["Unique Experience", "Instagram-worthy", "Adventure"],
        }
    }

    /// Bonus for a hotel whose star class suits this preference
    pub fn star_bonus(&self, stars: u8) -> f64 {
        match self {
            HotelPreference::Luxury if stars >= 5 => 20.0,
            HotelPreference::Boutique | HotelPreference::MidRange if (3..=4).contains(&stars) => {
                15.0
            }
            HotelPreference::Budget if stars <= 3 => 15.0,
            HotelPreference::Hostel if stars <= 2 => 15.0,
            _ => 0.0,
        }
    }

    pub fn tips(&self) -> &'static [&'static str] {
        Self::tips_for_key(self.key())
    }

    /// Booking tips for a preference key, with a generic pair for unknown keys
    pub fn tips_for_key(key: &str) -> &'static [&'static str] {
        match Self::from_key(key) {
            Some(HotelPreference::Luxury) => &[
                "Book directly with the hotel for potential upgrades",
                "Ask about spa packages and fine dining reservations",
            ],
            Some(HotelPreference::Boutique) => &[
                "These hotels often have unique local experiences",
                "Ask the concierge for insider local recommendations",
            ],
            Some(HotelPreference::Resort) => &[
                "Check what's included in your all-inclusive package",
                "Book activities early as they fill up fast",
            ],
            Some(HotelPreference::MidRange) => &[
                "Check for loyalty programs for future discounts",
                "Ask about included breakfast options",
            ],
            Some(HotelPreference::Budget) => &[
                "Read recent reviews for cleanliness feedback",
                "Location is key - ensure good public transport access",
            ],
            Some(HotelPreference::Hostel) => &[
                "Bring a lock for your belongings",
                "Join hostel activities to meet fellow travelers",
            ],
            Some(HotelPreference::Apartment) => &[
                "Stock up on groceries to save on dining",
                "Ask the host for local tips and recommendations",
            ],
            Some(HotelPreference::Unique) => &[
                "Read carefully what amenities are available",
                "Book early as unique stays sell out quickly",
            ],
            None => GENERIC_HOTEL_TIPS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_keys_round_trip() {
        for theme in TravelTheme::ALL {
            assert_eq!(TravelTheme::from_key(theme.key()), Some(theme));
            assert_eq!(theme.morning_activities().len(), 5);
            assert_eq!(theme.afternoon_activities().len(), 5);
            assert_eq!(theme.evening_activities().len(), 5);
        }
        assert_eq!(TravelTheme::from_key("shopping"), None);
    }

    #[test]
    fn test_preference_resolution_defaults_to_mid_range() {
        assert_eq!(HotelPreference::resolve(Some("luxury")), HotelPreference::Luxury);
        assert_eq!(HotelPreference::resolve(Some("unknown-profile")), HotelPreference::MidRange);
        assert_eq!(HotelPreference::resolve(Some("")), HotelPreference::MidRange);
        assert_eq!(HotelPreference::resolve(None), HotelPreference::MidRange);
    }

    #[test]
    fn test_star_bonus_bands() {
        assert_eq!(HotelPreference::Luxury.star_bonus(5), 20.0);
        assert_eq!(HotelPreference::Luxury.star_bonus(4), 0.0);
        assert_eq!(HotelPreference::Boutique.star_bonus(3), 15.0);
        assert_eq!(HotelPreference::MidRange.star_bonus(4), 15.0);
        assert_eq!(HotelPreference::MidRange.star_bonus(5), 0.0);
        assert_eq!(HotelPreference::Budget.star_bonus(3), 15.0);
        assert_eq!(HotelPreference::Hostel.star_bonus(3), 0.0);
        assert_eq!(HotelPreference::Resort.star_bonus(5), 0.0);
    }

    #[test]
    fn test_hotel_tips_fallback() {
        assert_eq!(HotelPreference::tips_for_key("treehouse"), GENERIC_HOTEL_TIPS);
        for pref in HotelPreference::ALL {
            assert_eq!(pref.tips().len(), 2);
            assert_ne!(pref.tips(), GENERIC_HOTEL_TIPS);
        }
    }

    #[test]
    fn test_preference_serializes_as_key() {
        let json = serde_json::to_value(HotelPreference::MidRange).unwrap();
        assert_eq!(json, "mid-range");
    }
}
