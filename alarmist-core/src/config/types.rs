//! Clock configuration types
//!
//! Board settings are fixed at build time: the firmware's `build.rs`
//! deserializes `clock.toml` into a [`ClockConfig`], runs
//! [`ClockConfig::validate`] and bakes the result into the binary.

use alarmist_hal::I2cSpeed;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// DS3231 fixed bus address
pub const DEFAULT_RTC_ADDRESS: u8 = 0x68;

/// SSD1306 bus address with SA0 tied low
pub const DEFAULT_DISPLAY_ADDRESS: u8 = 0x3C;

/// Buzzer square-wave half period (200 us gives 2.5 kHz)
pub const DEFAULT_BUZZER_HALF_PERIOD_US: u32 = 200;

/// Buzzer periods emitted per alarm cycle
pub const DEFAULT_BUZZER_PULSES: u32 = 500;

/// Usable 7-bit addresses; the rest are reserved for I2C special addressing
pub const I2C_ADDRESS_RANGE: core::ops::RangeInclusive<u8> = 0x08..=0x77;

/// Longest accepted buzzer half period (50 Hz)
pub const MAX_BUZZER_HALF_PERIOD_US: u32 = 10_000;

/// Most buzzer periods per alarm cycle
pub const MAX_BUZZER_PULSES: u32 = 10_000;

/// Configuration rejected by [`ClockConfig::validate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// RTC address outside 0x08-0x77
    RtcAddress(u8),
    /// Display address outside 0x08-0x77
    DisplayAddress(u8),
    /// RTC and display on the same address
    AddressConflict(u8),
    /// Half period of 0 or above the maximum
    BuzzerHalfPeriod(u32),
    /// Pulse count above the maximum
    BuzzerPulses(u32),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::RtcAddress(addr) => write!(f, "rtc_address {:#04x} not in 0x08-0x77", addr),
            ConfigError::DisplayAddress(addr) => {
                write!(f, "display_address {:#04x} not in 0x08-0x77", addr)
            }
            ConfigError::AddressConflict(addr) => {
                write!(f, "rtc and display share address {:#04x}", addr)
            }
            ConfigError::BuzzerHalfPeriod(us) => write!(
                f,
                "buzzer half_period_us {} not in 1-{}",
                us, MAX_BUZZER_HALF_PERIOD_US
            ),
            ConfigError::BuzzerPulses(n) => {
                write!(f, "buzzer pulses {} above {}", n, MAX_BUZZER_PULSES)
            }
        }
    }
}

/// Buzzer tone settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct BuzzerConfig {
    /// Half period of the square wave in microseconds
    pub half_period_us: u32,
    /// Full periods per alarm cycle
    pub pulses: u32,
}

impl Default for BuzzerConfig {
    fn default() -> Self {
        Self {
            half_period_us: DEFAULT_BUZZER_HALF_PERIOD_US,
            pulses: DEFAULT_BUZZER_PULSES,
        }
    }
}

impl BuzzerConfig {
    /// Tone frequency in Hz, 0 when the half period is 0
    pub fn frequency_hz(&self) -> u32 {
        if self.half_period_us == 0 {
            return 0;
        }
        1_000_000 / (2 * self.half_period_us)
    }
}

/// Board configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct ClockConfig {
    /// 7-bit RTC address
    pub rtc_address: u8,
    /// 7-bit OLED address
    pub display_address: u8,
    /// Shared I2C bus speed
    pub i2c_speed: I2cSpeed,
    /// Alarm tone
    pub buzzer: BuzzerConfig,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            rtc_address: DEFAULT_RTC_ADDRESS,
            display_address: DEFAULT_DISPLAY_ADDRESS,
            i2c_speed: I2cSpeed::default(),
            buzzer: BuzzerConfig::default(),
        }
    }
}

impl ClockConfig {
    /// Check addresses and tone limits; reports the first problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !I2C_ADDRESS_RANGE.contains(&self.rtc_address) {
            return Err(ConfigError::RtcAddress(self.rtc_address));
        }
        if !I2C_ADDRESS_RANGE.contains(&self.display_address) {
            return Err(ConfigError::DisplayAddress(self.display_address));
        }
        if self.rtc_address == self.display_address {
            return Err(ConfigError::AddressConflict(self.rtc_address));
        }
        let half_period = self.buzzer.half_period_us;
        if half_period == 0 || half_period > MAX_BUZZER_HALF_PERIOD_US {
            return Err(ConfigError::BuzzerHalfPeriod(half_period));
        }
        if self.buzzer.pulses > MAX_BUZZER_PULSES {
            return Err(ConfigError::BuzzerPulses(self.buzzer.pulses));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_board() {
        let config = ClockConfig::default();
        assert_eq!(config.rtc_address, 0x68);
        assert_eq!(config.display_address, 0x3C);
        assert_eq!(config.i2c_speed, I2cSpeed::Khz400);
        assert_eq!(config.buzzer.half_period_us, 200);
        assert_eq!(config.buzzer.pulses, 500);
    }

    #[test]
    fn test_buzzer_frequency() {
        assert_eq!(BuzzerConfig::default().frequency_hz(), 2500);
        let silent = BuzzerConfig {
            half_period_us: 0,
            pulses: 10,
        };
        assert_eq!(silent.frequency_hz(), 0);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(ClockConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_validate_addresses() {
        let mut config = ClockConfig::default();
        config.rtc_address = 0x78;
        assert_eq!(config.validate(), Err(ConfigError::RtcAddress(0x78)));

        config.rtc_address = 0x68;
        config.display_address = 0x07;
        assert_eq!(config.validate(), Err(ConfigError::DisplayAddress(0x07)));

        config.display_address = 0x68;
        assert_eq!(config.validate(), Err(ConfigError::AddressConflict(0x68)));
    }

    #[test]
    fn test_validate_buzzer() {
        let mut config = ClockConfig::default();
        config.buzzer.half_period_us = 0;
        assert_eq!(config.validate(), Err(ConfigError::BuzzerHalfPeriod(0)));

        config.buzzer.half_period_us = MAX_BUZZER_HALF_PERIOD_US;
        config.buzzer.pulses = MAX_BUZZER_PULSES + 1;
        assert_eq!(config.validate(), Err(ConfigError::BuzzerPulses(10_001)));

        // Silent alarm is allowed
        config.buzzer.pulses = 0;
        assert_eq!(config.validate(), Ok(()));
    }
}
