//! Mock candidate source
//!
//! Generates plausible hotels, flights, local transport and attractions
//! from fixed templates with randomized prices and ratings. Coordinates
//! are derived from a hash of the city name, so they are stable.

use super::{CandidateSource, Coordinates, SourceQuery};
use crate::error::PlannerError;
use crate::models::{Attraction, Hotel, Transport};
use crate::Result;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};
use tokio::sync::Mutex;
use tracing::debug;

struct HotelTemplate {
    name: &'static str,
    stars: u8,
    base_price: f64,
}

const fn hotel(name: &'static str, stars: u8, base_price: f64) -> HotelTemplate {
    HotelTemplate {
        name,
        stars,
        base_price,
    }
}

const HOTEL_TEMPLATES: &[HotelTemplate] = &[
    hotel("Grand Plaza Hotel", 5, 250.0),
    hotel("City Center Inn", 4, 150.0),
    hotel("Budget Stay Express", 3, 80.0),
    hotel("Luxury Resort & Spa", 5, 350.0),
    hotel("Comfort Suites", 4, 120.0),
    hotel("Backpacker's Haven", 2, 40.0),
    hotel("Business Hotel Premier", 4, 180.0),
    hotel("Family Resort Paradise", 4, 200.0),
    hotel("Boutique Hotel Artisan", 4, 160.0),
    hotel("Economy Lodge", 2, 50.0),
];

const HOTEL_AMENITIES: &[&str] = &[
    "Free WiFi",
    "Pool",
    "Gym",
    "Spa",
    "Restaurant",
    "Bar",
    "Room Service",
    "Parking",
    "Airport Shuttle",
    "Pet Friendly",
    "Business Center",
    "Laundry",
    "Concierge",
    "Beach Access",
];

struct FlightTemplate {
    name: &'static str,
    base_price: f64,
}

const fn flight(name: &'static str, base_price: f64) -> FlightTemplate {
    FlightTemplate { name, base_price }
}

const FLIGHT_DURATION_MINUTES: (u32, u32) = (60, 180);

const FLIGHT_TEMPLATES: &[FlightTemplate] = &[
    flight("Economy Flight", 200.0),
    flight("Economy Plus Flight", 280.0),
    flight("Premium Economy Flight", 350.0),
    flight("Business Class Flight", 500.0),
    flight("First Class Flight", 800.0),
];

const INTERCITY_PROVIDERS: &[&str] = &[
    "SkyWings",
    "AirConnect",
    "GlobalAir",
    "JetBlue",
    "AirExpress",
    "FlyDirect",
];

struct LocalTemplate {
    kind: &'static str,
    name: &'static str,
    base_price: f64,
    per_day: bool,
}

const fn local(
    kind: &'static str,
    name: &'static str,
    base_price: f64,
    per_day: bool,
) -> LocalTemplate {
    LocalTemplate {
        kind,
        name,
        base_price,
        per_day,
    }
}

const LOCAL_TEMPLATES: &[LocalTemplate] = &[
    local("car_rental", "Economy Car Rental", 35.0, true),
    local("car_rental", "SUV Rental", 70.0, true),
    local("car_rental", "Luxury Car Rental", 120.0, true),
    local("taxi", "Airport Transfer", 45.0, false),
    local("taxi", "Private Driver (Full Day)", 150.0, true),
    local("metro", "Metro Day Pass", 10.0, true),
    local("metro", "Weekly Transit Pass", 35.0, false),
    local("shuttle", "Hotel Shuttle Service", 0.0, false),
    local("bike", "Bike Rental", 15.0, true),
    local("scooter", "Scooter Rental", 25.0, true),
];

const LOCAL_PROVIDERS: &[&str] = &[
    "CityRentals",
    "LocalMove",
    "EasyRide",
    "QuickTransit",
    "UrbanGo",
    "MetroPass",
];

const LOCAL_RESULT_COUNT: usize = 6;
const LOCAL_ID_OFFSET: u32 = 100;

/// (name, category, price per person)
const ATTRACTION_TEMPLATES: &[(&str, &str, f64)] = &[
    ("City Museum", "museum", 15.0),
    ("Central Park", "nature", 0.0),
    ("Historic Castle", "landmark", 20.0),
    ("Local Market", "shopping", 0.0),
    ("Beach Resort", "beach", 10.0),
    ("Adventure Park", "adventure", 45.0),
    ("Cultural Center", "cultural", 12.0),
    ("Botanical Garden", "nature", 8.0),
    ("Art Gallery", "museum", 18.0),
    ("Food Street", "food", 0.0),
];

const CURRENCY: &str = "USD";

/// Mock provider with its own random generator
pub struct MockCandidateSource {
    rng: Mutex<StdRng>,
}

impl MockCandidateSource {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl Default for MockCandidateSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CandidateSource for MockCandidateSource {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn coordinates(&self, city: &str) -> Result<Coordinates> {
        if city.trim().is_empty() {
            return Err(PlannerError::DataSource(
                "cannot resolve coordinates without a city name".to_string(),
            ));
        }
        Ok(mock_coordinates(city))
    }

    async fn hotels(&self, query: &SourceQuery) -> Result<Vec<Hotel>> {
        let mut rng = self.rng.lock().await;
        let city = &query.destination;

        let mut hotels: Vec<Hotel> = HOTEL_TEMPLATES
            .iter()
            .enumerate()
            .map(|(i, template)| {
                let price = round_to(template.base_price * rng.gen_range(0.8..1.3), 2);
                let amenity_count = usize::from(template.stars * 2).min(HOTEL_AMENITIES.len());
                let amenities = HOTEL_AMENITIES
                    .choose_multiple(&mut *rng, amenity_count)
                    .map(|a| a.to_string())
                    .collect();

                Hotel {
                    id: Some(i as u32 + 1),
                    name: format!("{} {}", template.name, city),
                    star_rating: Some(template.stars),
                    price_per_night: price,
                    currency: Some(CURRENCY.to_string()),
                    rating: round_to(rng.gen_range(6.0..9.8), 1),
                    reviews_count: Some(rng.gen_range(50..=2000)),
                    amenities: Some(amenities),
                    address: Some(format!("{} Main Street, {}", rng.gen_range(1..=999u32), city)),
                    description: Some(format!(
                        "Experience comfort and hospitality at {} located in the heart of {}.",
                        template.name, city
                    )),
                    image_url: Some(format!(
                        "https://picsum.photos/seed/{}{}/400/300",
                        city.to_lowercase(),
                        i
                    )),
                    ..Hotel::default()
                }
            })
            .collect();

        hotels.sort_by(|a, b| a.price_per_night.total_cmp(&b.price_per_night));
        debug!(city = %city, count = hotels.len(), "Generated mock hotels");
        Ok(hotels)
    }

    async fn transports(&self, query: &SourceQuery) -> Result<Vec<Transport>> {
        let mut rng = self.rng.lock().await;
        let origin = if query.origin.trim().is_empty() {
            "Your City"
        } else {
            query.origin.as_str()
        };

        let mut templates: Vec<&FlightTemplate> = FLIGHT_TEMPLATES.iter().collect();
        templates.shuffle(&mut *rng);

        let mut options: Vec<Transport> = templates
            .into_iter()
            .enumerate()
            .map(|(i, template)| {
                let price = round_to(template.base_price * rng.gen_range(0.7..1.4), 2);
                let (min_duration, max_duration) = FLIGHT_DURATION_MINUTES;
                let hour: u32 = rng.gen_range(6..=20);
                let minute: u32 = [0, 15, 30, 45].choose(&mut *rng).copied().unwrap_or(0);

                Transport {
                    id: Some(i as u32 + 1),
                    kind: Some("flight".to_string()),
                    category: Some("intercity".to_string()),
                    name: template.name.to_string(),
                    provider: INTERCITY_PROVIDERS.choose(&mut *rng).map(|p| p.to_string()),
                    price_per_person: price,
                    currency: Some(CURRENCY.to_string()),
                    duration_minutes: Some(rng.gen_range(min_duration..=max_duration)),
                    origin: Some(origin.to_string()),
                    destination: Some(query.destination.clone()),
                    departure_time: Some(format!("{:02}:{:02}", hour, minute)),
                    description: Some(format!(
                        "{} from {} to {}",
                        template.name, origin, query.destination
                    )),
                    ..Transport::default()
                }
            })
            .collect();

        options.sort_by(|a, b| a.price_per_person.total_cmp(&b.price_per_person));
        Ok(options)
    }

    async fn local_transports(&self, query: &SourceQuery) -> Result<Vec<Transport>> {
        let mut rng = self.rng.lock().await;
        let nights = query.nights();
        let count = LOCAL_RESULT_COUNT.min(LOCAL_TEMPLATES.len());

        let picked: Vec<&LocalTemplate> =
            LOCAL_TEMPLATES.choose_multiple(&mut *rng, count).collect();

        let mut options: Vec<Transport> = picked
            .into_iter()
            .enumerate()
            .map(|(i, template)| {
                let price = round_to(template.base_price * rng.gen_range(0.8..1.2), 2);
                let (total, note) = if template.per_day {
                    (
                        price * f64::from(nights),
                        format!("${}/day × {} days", price, nights),
                    )
                } else {
                    (price, "One-time fee".to_string())
                };

                Transport {
                    id: Some(LOCAL_ID_OFFSET + i as u32),
                    kind: Some(template.kind.to_string()),
                    category: Some("local".to_string()),
                    name: template.name.to_string(),
                    provider: LOCAL_PROVIDERS.choose(&mut *rng).map(|p| p.to_string()),
                    price_per_person: price,
                    total_price: Some(total),
                    price_note: Some(note),
                    per_day: Some(template.per_day),
                    currency: Some(CURRENCY.to_string()),
                    origin: Some(query.destination.clone()),
                    destination: Some(query.destination.clone()),
                    description: Some(format!("{} in {}", template.name, query.destination)),
                    ..Transport::default()
                }
            })
            .collect();

        options.sort_by(|a, b| {
            a.total_price
                .unwrap_or(0.0)
                .total_cmp(&b.total_price.unwrap_or(0.0))
        });
        Ok(options)
    }

    async fn attractions(&self, destination: &str) -> Result<Vec<Attraction>> {
        let mut rng = self.rng.lock().await;

        Ok(ATTRACTION_TEMPLATES
            .iter()
            .enumerate()
            .map(|(i, (name, category, price))| Attraction {
                id: Some(format!("mock_{}", i)),
                name: format!("{} {}", destination, name),
                category: Some(category.to_string()),
                price_per_person: *price,
                currency: Some(CURRENCY.to_string()),
                rating: round_to(rng.gen_range(7.0..9.5), 1),
                description: Some(format!("Visit the famous {} in {}", name, destination)),
                ..Attraction::default()
            })
            .collect())
    }
}

/// Stable pseudo-coordinates for a city name
pub fn mock_coordinates(city: &str) -> Coordinates {
    let digest = Sha256::digest(city.as_bytes());
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    let hash = u128::from_be_bytes(bytes);

    let lat = (hash % 18000) as f64 / 100.0 - 90.0;
    let lon = (hash % 36000) as f64 / 100.0 - 180.0;

    Coordinates {
        lat: round_to(lat, 4),
        lon: round_to(lon, 4),
        name: city.to_string(),
        country: "Unknown".to_string(),
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn query(nights: i64) -> SourceQuery {
        let check_in = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        SourceQuery {
            origin: String::new(),
            destination: "Paris".to_string(),
            check_in,
            check_out: check_in + chrono::Duration::days(nights),
            people: 2,
            rooms: 1,
        }
    }

    #[tokio::test]
    async fn test_mock_hotels() {
        let source = MockCandidateSource::with_seed(1);
        let hotels = source.hotels(&query(3)).await.unwrap();

        assert_eq!(hotels.len(), HOTEL_TEMPLATES.len());
        assert!(hotels
            .windows(2)
            .all(|w| w[0].price_per_night <= w[1].price_per_night));
        for hotel in &hotels {
            assert!(hotel.name.ends_with(" Paris"));
            assert!(hotel.rating >= 6.0 && hotel.rating <= 9.8);
            let stars = hotel.star_class();
            assert_eq!(hotel.amenity_list().len(), usize::from(stars * 2));
        }
    }

    #[tokio::test]
    async fn test_mock_flights() {
        let source = MockCandidateSource::with_seed(2);
        let flights = source.transports(&query(3)).await.unwrap();

        assert_eq!(flights.len(), FLIGHT_TEMPLATES.len());
        assert!(flights
            .windows(2)
            .all(|w| w[0].price_per_person <= w[1].price_per_person));
        assert!(flights
            .iter()
            .all(|f| f.origin.as_deref() == Some("Your City")));
        let departure = flights[0].departure_time.clone().unwrap();
        assert_eq!(departure.len(), 5);
    }

    #[tokio::test]
    async fn test_mock_local_transport_totals() {
        let source = MockCandidateSource::with_seed(3);
        let local = source.local_transports(&query(4)).await.unwrap();

        assert_eq!(local.len(), LOCAL_RESULT_COUNT);
        for option in &local {
            let total = option.total_price.unwrap();
            if option.per_day == Some(true) {
                assert!((total - option.price_per_person * 4.0).abs() < 1e-9);
            } else {
                assert_eq!(total, option.price_per_person);
                assert_eq!(option.price_note.as_deref(), Some("One-time fee"));
            }
            assert!(option.id.unwrap() >= LOCAL_ID_OFFSET);
        }
    }

    #[tokio::test]
    async fn test_mock_attractions() {
        let source = MockCandidateSource::with_seed(4);
        let attractions = source.attractions("Rome").await.unwrap();

        assert_eq!(attractions.len(), 10);
        assert_eq!(attractions[0].name, "Rome City Museum");
        assert_eq!(attractions[0].id.as_deref(), Some("mock_0"));
        assert_eq!(attractions[0].price_per_person, 15.0);
    }

    #[tokio::test]
    async fn test_coordinates_need_a_city() {
        let source = MockCandidateSource::with_seed(5);
        assert!(matches!(
            source.coordinates("  ").await,
            Err(PlannerError::DataSource(_))
        ));
        assert_eq!(source.coordinates("Oslo").await.unwrap(), mock_coordinates("Oslo"));
    }

    #[test]
    fn test_coordinates_are_stable_and_in_range() {
        let a = mock_coordinates("Paris");
        let b = mock_coordinates("Paris");
        assert_eq!(a, b);
        assert!((-90.0..=90.0).contains(&a.lat));
        assert!((-180.0..=180.0).contains(&a.lon));
        assert_ne!(mock_coordinates("Paris"), mock_coordinates("Tokyo"));
    }
}
