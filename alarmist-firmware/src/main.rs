//! Alarmist - Alarm Clock Firmware
//!
//! Main firmware binary for STM32F0-based alarm clocks: DS3231 RTC and
//! SSD1306 OLED on a shared I2C bus, four 7-segment digits behind
//! 74HC595 shift registers, a piezo buzzer and three buttons.

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_stm32::i2c::I2c;
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

use alarmist_core::controller::Controller;
use alarmist_core::time::AlarmWord;
use alarmist_core::traits::RealTimeClock;
use alarmist_display::DisplayBackend;
use alarmist_drivers::{ActiveLowButtons, Ds3231, PinBuzzer, ShiftRegisterSegments, Ssd1306};
use alarmist_hal_stm32f0::{i2c, Stm32Input, Stm32Output};

use crate::config::CLOCK_CONFIG;

/// Board configuration validated and generated by build.rs from clock.toml
mod config {
    use alarmist_core::config::{BuzzerConfig, ClockConfig};
    use alarmist_hal::I2cSpeed;

    include!(concat!(env!("OUT_DIR"), "/clock_config.rs"));
}

/// Delay between attempts to read the stored alarm at boot
const ALARM_RETRY_MS: u64 = 100;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Alarmist firmware starting...");

    let p = embassy_stm32::init(Default::default());

    info!(
        "Config: rtc={=u8:#x} display={=u8:#x} tone={}Hz x{}",
        CLOCK_CONFIG.rtc_address,
        CLOCK_CONFIG.display_address,
        CLOCK_CONFIG.buzzer.frequency_hz(),
        CLOCK_CONFIG.buzzer.pulses
    );

    // RTC and OLED share I2C1
    let bus = RefCell::new(I2c::new_blocking(
        p.I2C1,
        p.PA9,
        p.PA10,
        i2c::config(CLOCK_CONFIG.i2c_speed),
    ));

    let mut display = Ssd1306::with_address(i2c::shared(&bus), CLOCK_CONFIG.display_address);
    match display.init() {
        Ok(()) => info!("OLED initialized"),
        // Retried by the first flush that reaches the panel
        Err(e) => warn!("OLED init failed: {:?}", e),
    }

    let mut rtc = Ds3231::with_address(i2c::shared(&bus), CLOCK_CONFIG.rtc_address);
    let alarm = loop {
        match rtc.read_alarm() {
            Ok(raw) => break AlarmWord::from_register(raw),
            Err(e) => {
                warn!("RTC alarm read failed: {:?}, retrying", e);
                Timer::after_millis(ALARM_RETRY_MS).await;
            }
        }
    };
    let (hours, minutes) = alarm.hours_minutes();
    info!("Stored alarm {}:{}", hours, minutes);

    let segments = ShiftRegisterSegments::new(
        Stm32Output(Output::new(p.PA0, Level::Low, Speed::VeryHigh)),
        Stm32Output(Output::new(p.PA1, Level::Low, Speed::VeryHigh)),
        Stm32Output(Output::new(p.PA2, Level::Low, Speed::VeryHigh)),
    );

    let buzzer = PinBuzzer::new(Stm32Output(Output::new(p.PA3, Level::Low, Speed::Low)), Delay);

    let mut buttons = ActiveLowButtons::new(
        Stm32Input(Input::new(p.PA5, Pull::Up)),
        Stm32Input(Input::new(p.PA6, Pull::Up)),
        Stm32Input(Input::new(p.PA7, Pull::Up)),
    );

    let mut controller = Controller::with_alarm(rtc, segments, buzzer, &CLOCK_CONFIG, alarm);

    info!("Entering main loop");

    // One cycle per iteration; a failed cycle is retried from scratch
    loop {
        if let Err(e) = controller.cycle(&mut display, &mut buttons) {
            warn!("Cycle failed: {:?}", e);
        }
    }
}
