//! Driver configuration
//!
//! Configuration is compiled into the firmware as a small TOML file and
//! parsed at boot; every value has a default matching the ST7789V
//! datasheet timings and a 240x320 panel.

pub mod toml;
pub mod types;

pub use toml::parse_config;
pub use types::*;
