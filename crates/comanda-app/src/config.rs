//! Environment configuration.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use tracing::{info, warn};

/// Runtime settings for the app.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the ordering backend.
    pub api_base_url: String,
}

impl Config {
    /// Loads settings from the environment, falling back to defaults.
    pub fn load() -> Self {
        Self {
            api_base_url: try_load("COMANDA_API_URL", "http://localhost:5000".to_string()),
        }
    }
}

fn try_load<T: FromStr + Display>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                warn!("Invalid {key} value, using default: {default}");
                default
            }
        },
        Err(_) => {
            info!("{key} not set, using default: {default}");
            default
        }
    }
}
