//! Candidate data sources
//!
//! A source supplies hotels, transports and attractions for a destination.
//! The planner does not care where they come from; the built-in source
//! generates realistic mock data.

use crate::models::{Attraction, Hotel, Transport};
use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod mock;
pub use mock::MockCandidateSource;

/// What a source is asked for
#[derive(Debug, Clone)]
pub struct SourceQuery {
    pub origin: String,
    pub destination: String,
    pub check_in: chrono::NaiveDate,
    pub check_out: chrono::NaiveDate,
    pub people: u32,
    pub rooms: u32,
}

impl SourceQuery {
    pub fn nights(&self) -> u32 {
        u32::try_from((self.check_out - self.check_in).num_days()).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
    pub name: String,
    pub country: String,
}

/// Trait for a provider of candidate records
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// Short identifier reported as `data_source`
    fn name(&self) -> &'static str;

    async fn coordinates(&self, city: &str) -> Result<Coordinates>;

    /// Hotels, cheapest first
    async fn hotels(&self, query: &SourceQuery) -> Result<Vec<Hotel>>;

    /// Inter-city options from origin to destination, cheapest first
    async fn transports(&self, query: &SourceQuery) -> Result<Vec<Transport>>;

    /// Getting around at the destination, cheapest total first
    async fn local_transports(&self, query: &SourceQuery) -> Result<Vec<Transport>>;

    async fn attractions(&self, destination: &str) -> Result<Vec<Attraction>>;
}
