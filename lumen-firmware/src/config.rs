//! Configuration loading

use defmt::*;
use lumen_core::config::{parse_config, DriverConfig};

/// Parse the embedded configuration, falling back to defaults
pub fn load(source: &str) -> DriverConfig {
    match parse_config(source) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Err(e) => {
            warn!("Failed to parse embedded configuration: {}, using defaults", e);
            DriverConfig::default()
        }
    }
}
