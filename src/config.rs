//! Service configuration loaded from the environment (and `.env`)

use crate::error::PlannerError;
use crate::Result;
use std::env;
use tracing::warn;

const DEFAULT_PORT: u16 = 8080;

/// Where candidate hotels/transports/attractions come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMode {
    Mock,
}

impl ApiMode {
    /// Resolve a mode name; unsupported providers fall back to mock data.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "" | "mock" => ApiMode::Mock,
            other => {
                warn!(api_mode = %other, "Unsupported API_MODE, falling back to mock data");
                ApiMode::Mock
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApiMode::Mock => "mock",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlannerConfig {
    pub port: u16,
    pub api_mode: ApiMode,
    /// Fixed seed for plan/mock randomness; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_mode: ApiMode::Mock,
            seed: None,
        }
    }
}

impl PlannerConfig {
    /// Read `PORT`/`API_PORT`, `API_MODE` and `PLANNER_SEED`.
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT").or_else(|_| env::var("API_PORT")) {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };

        let api_mode = env::var("API_MODE")
            .map(|m| ApiMode::from_name(&m))
            .unwrap_or(ApiMode::Mock);

        let seed = match env::var("PLANNER_SEED") {
            Ok(raw) if !raw.trim().is_empty() => Some(parse_seed(&raw)?),
            _ => None,
        };

        Ok(Self {
            port,
            api_mode,
            seed,
        })
    }
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.trim()
        .parse()
        .map_err(|e| PlannerError::Config(format!("invalid port '{}': {}", raw, e)))
}

fn parse_seed(raw: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .map_err(|e| PlannerError::Config(format!("invalid PLANNER_SEED '{}': {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("3000").unwrap(), 3000);
        assert_eq!(parse_port(" 8081 ").unwrap(), 8081);
        assert!(matches!(parse_port("eighty"), Err(PlannerError::Config(_))));
        assert!(parse_port("70000").is_err());
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed("42").unwrap(), 42);
        assert!(parse_seed("-1").is_err());
    }

    #[test]
    fn test_api_mode_fallback() {
        assert_eq!(ApiMode::from_name("mock"), ApiMode::Mock);
        assert_eq!(ApiMode::from_name("amadeus"), ApiMode::Mock);
        assert_eq!(ApiMode::from_name(""), ApiMode::Mock);
    }
}
