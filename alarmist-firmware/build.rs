//! Build script for alarmist-firmware
//!
//! - Deserializes clock.toml into `ClockConfig` and validates it at
//!   compile time
//! - Generates the `CLOCK_CONFIG` constant into OUT_DIR
//!
//! memory.x comes from embassy-stm32's `memory-x` feature.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use alarmist_core::config::ClockConfig;

fn main() {
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    println!("cargo:rerun-if-changed=build.rs");

    let config = validate_config();
    generate_config(&config);
}

/// Validate clock.toml configuration at compile time
fn validate_config() -> ClockConfig {
    println!("cargo:rerun-if-changed=clock.toml");

    let config_path = Path::new("clock.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: clock.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a clock.toml board configuration file.    ║\n\
            ║  Please create one in the alarmist-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read clock.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: ClockConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid clock.toml                                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid values in clock.toml                             ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&format!("• {}", e))
        );
    }

    println!("cargo:warning=clock.toml validated successfully");
    config
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write `clock_config.rs` for `include!` from main.rs
fn generate_config(config: &ClockConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let source = format!(
        "/// Board configuration generated from clock.toml\n\
         pub const CLOCK_CONFIG: ClockConfig = ClockConfig {{\n    \
             rtc_address: {:#04x},\n    \
             display_address: {:#04x},\n    \
             i2c_speed: I2cSpeed::{:?},\n    \
             buzzer: BuzzerConfig {{\n        \
                 half_period_us: {},\n        \
                 pulses: {},\n    \
             }},\n\
         }};\n",
        config.rtc_address,
        config.display_address,
        config.i2c_speed,
        config.buzzer.half_period_us,
        config.buzzer.pulses,
    );
    if let Err(e) = fs::write(out_dir.join("clock_config.rs"), source) {
        panic!("failed to write clock_config.rs: {}", e);
    }
}
