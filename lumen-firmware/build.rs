//! Build script for lumen-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates display.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Keys accepted in each section, with their inclusive range
const SCHEMA: &[(&str, &[(&str, i64, i64)])] = &[
    (
        "bus",
        &[
            ("frequency_hz", 1, u32::MAX as i64),
            ("ready_spin_limit", 0, u32::MAX as i64),
        ],
    ),
    (
        "timing",
        &[
            ("reset_pulse_ms", 0, u32::MAX as i64),
            ("reset_settle_ms", 0, u32::MAX as i64),
            ("wake_settle_ms", 0, u32::MAX as i64),
            ("display_on_settle_ms", 0, u32::MAX as i64),
        ],
    ),
    (
        "panel",
        &[("width", 1, u16::MAX as i64), ("height", 1, u16::MAX as i64)],
    ),
    (
        "pattern",
        &[
            ("band_rows", 1, u16::MAX as i64),
            ("frame_delay_ms", 0, u32::MAX as i64),
        ],
    ),
];

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate display.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=display.toml");

    let config_path = Path::new("display.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: display.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds display.toml at build time.                 ║\n\
            ║  Please create one in the lumen-firmware directory.              ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read display.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in display.toml                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_sections(&config, &mut errors);
    validate_band(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid display configuration                            ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=display.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Every section and key must be known, every value an integer in range
fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let table = match config.as_table() {
        Some(t) => t,
        None => return,
    };

    for (section, body) in table {
        let keys = match SCHEMA.iter().find(|(name, _)| *name == section.as_str()) {
            Some((_, keys)) => keys,
            None => {
                errors.push(format!("unknown section [{}]", section));
                continue;
            }
        };

        let body = match body.as_table() {
            Some(t) => t,
            None => {
                errors.push(format!("[{}] must be a table", section));
                continue;
            }
        };

        for (key, value) in body {
            let (_, min, max) = match keys.iter().find(|(name, _, _)| *name == key.as_str()) {
                Some(entry) => entry,
                None => {
                    errors.push(format!("[{}] unknown key '{}'", section, key));
                    continue;
                }
            };

            match value.as_integer() {
                Some(v) if v < *min || v > *max => {
                    errors.push(format!("[{}] {} must be {}-{}", section, key, min, max));
                }
                Some(_) => {}
                None => errors.push(format!("[{}] {} must be an integer", section, key)),
            }
        }
    }
}

/// The stripe band must fit on the panel
fn validate_band(config: &toml::Value, errors: &mut Vec<String>) {
    let get = |section: &str, key: &str| {
        config
            .get(section)
            .and_then(|s| s.get(key))
            .and_then(|v| v.as_integer())
    };

    let height = get("panel", "height").unwrap_or(320);
    let band_rows = get("pattern", "band_rows").unwrap_or(4);

    if band_rows > height {
        errors.push(format!(
            "[pattern] band_rows ({}) exceeds panel height ({})",
            band_rows, height
        ));
    }
}
