//! Clock controller
//!
//! Owns the UI context, the framebuffer and the clock peripherals, and runs
//! one polling cycle per call:
//!
//! 1. clear the frame and draw the border
//! 2. read the time from the RTC
//! 3. check the alarm (may force `InAlarm`)
//! 4. run the active state's handler
//! 5. remember this cycle's buttons
//! 6. flush the frame to the display

pub mod context;
pub mod handlers;
pub mod screens;

pub use context::{ClockContext, EditBuffer, EditField};
pub use handlers::Io;

use alarmist_display::{DisplayBackend, DisplayError, Framebuffer};

use crate::config::{BuzzerConfig, ClockConfig};
use crate::input::Buttons;
use crate::state::UiState;
use crate::time::AlarmWord;
use crate::traits::{ButtonSource, Buzzer, RealTimeClock, RtcError, SegmentDisplay};

/// Errors surfaced by a clock cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerError {
    /// RTC read or write failed
    Rtc(RtcError),
    /// Display flush failed
    Display(DisplayError),
}

impl From<RtcError> for ControllerError {
    fn from(e: RtcError) -> Self {
        ControllerError::Rtc(e)
    }
}

impl From<DisplayError> for ControllerError {
    fn from(e: DisplayError) -> Self {
        ControllerError::Display(e)
    }
}

/// Alarm clock controller
pub struct Controller<R, S, Z> {
    rtc: R,
    segments: S,
    buzzer: Z,
    tone: BuzzerConfig,
    ctx: ClockContext,
    frame: Framebuffer,
}

impl<R, S, Z> Controller<R, S, Z>
where
    R: RealTimeClock,
    S: SegmentDisplay,
    Z: Buzzer,
{
    /// Create a controller in `ShowTime`, loading the stored alarm
    pub fn new(mut rtc: R, segments: S, buzzer: Z, config: &ClockConfig) -> Result<Self, RtcError> {
        let alarm = AlarmWord::from_register(rtc.read_alarm()?);
        Ok(Self::with_alarm(rtc, segments, buzzer, config, alarm))
    }

    /// Create a controller with an alarm the caller already read
    pub fn with_alarm(rtc: R, segments: S, buzzer: Z, config: &ClockConfig, alarm: AlarmWord) -> Self {
        Self {
            rtc,
            segments,
            buzzer,
            tone: config.buzzer,
            ctx: ClockContext::new(alarm),
            frame: Framebuffer::new(),
        }
    }

    /// Run one full cycle
    ///
    /// On error the cycle stops where it failed; nothing is rolled back and
    /// the next call starts a fresh cycle.
    pub fn cycle<D, B>(&mut self, display: &mut D, buttons: &mut B) -> Result<(), ControllerError>
    where
        D: DisplayBackend,
        B: ButtonSource,
    {
        let raw = buttons.read_raw();
        self.step(raw)?;
        display.flush(&self.frame)?;
        Ok(())
    }

    /// Cycle minus the display flush, with buttons already sampled
    pub fn step(&mut self, raw: Buttons) -> Result<(), RtcError> {
        self.frame.clear(0x00);
        screens::draw_chrome(&mut self.frame);

        self.ctx.time = self.rtc.read_time()?;
        self.check_alarm();

        let before = self.ctx.state;
        let pressed = raw.just_pressed(self.ctx.previous);
        let mut io = Io {
            rtc: &mut self.rtc,
            segments: &mut self.segments,
            buzzer: &mut self.buzzer,
            tone: self.tone,
        };
        let result = handlers::dispatch(&mut self.ctx, &mut self.frame, &mut io, pressed);
        // Snapshot even on failure so a held button does not fire twice
        self.ctx.previous = raw;

        if self.ctx.state != before {
            #[cfg(feature = "defmt")]
            defmt::debug!("ui: {} -> {}", before, self.ctx.state);
        }
        result
    }

    fn check_alarm(&mut self) {
        if self.ctx.alarm.matches(self.ctx.time) {
            if !self.ctx.snoozed && self.ctx.state != UiState::InAlarm {
                #[cfg(feature = "defmt")]
                defmt::info!("alarm triggered");
                self.ctx.enter(UiState::InAlarm);
            }
        } else {
            self.ctx.snoozed = false;
        }
    }

    pub fn state(&self) -> UiState {
        self.ctx.state
    }

    pub fn cursor(&self) -> u8 {
        self.ctx.cursor
    }

    pub fn edit_buffer(&self) -> EditBuffer {
        self.ctx.edit
    }

    pub fn context(&self) -> &ClockContext {
        &self.ctx
    }

    /// Frame drawn by the last cycle
    pub fn frame(&self) -> &Framebuffer {
        &self.frame
    }

    /// Give the peripherals back
    pub fn release(self) -> (R, S, Z) {
        (self.rtc, self.segments, self.buzzer)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::time::{encode_word, to_bcd, TimeWord, ALARM_OFFSETS};
    use crate::traits::SegmentDigit;
    use std::vec::Vec;

    #[derive(Default)]
    struct FakeRtc {
        time: TimeWord,
        alarm_raw: u32,
        time_writes: Vec<(u8, u8)>,
        alarm_writes: Vec<(u8, u8)>,
        alarm_reads: u32,
        fail_time: bool,
    }

    impl FakeRtc {
        fn at(hours: u8, minutes: u8, seconds: u8) -> Self {
            let mut rtc = Self::default();
            rtc.set(hours, minutes, seconds);
            rtc
        }

        fn set(&mut self, hours: u8, minutes: u8, seconds: u8) {
            self.time = TimeWord::from_registers(to_bcd(seconds), to_bcd(minutes), to_bcd(hours));
        }
    }

    impl RealTimeClock for FakeRtc {
        fn read_time(&mut self) -> Result<TimeWord, RtcError> {
            if self.fail_time {
                return Err(RtcError::Bus);
            }
            Ok(self.time)
        }

        fn write_time(&mut self, hours_bcd: u8, minutes_bcd: u8) -> Result<(), RtcError> {
            self.time_writes.push((hours_bcd, minutes_bcd));
            self.time = TimeWord::from_registers(0, minutes_bcd, hours_bcd);
            Ok(())
        }

        fn read_alarm(&mut self) -> Result<u32, RtcError> {
            self.alarm_reads += 1;
            Ok(self.alarm_raw)
        }

        fn write_alarm(&mut self, hours_bcd: u8, minutes_bcd: u8) -> Result<(), RtcError> {
            self.alarm_writes.push((hours_bcd, minutes_bcd));
            self.alarm_raw = (hours_bcd as u32) << 8 | minutes_bcd as u32;
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingSegments {
        frames: Vec<[SegmentDigit; 4]>,
        pending: Vec<SegmentDigit>,
        latched_low: bool,
    }

    impl SegmentDisplay for RecordingSegments {
        fn latch_low(&mut self) {
            self.latched_low = true;
            self.pending.clear();
        }

        fn digit_out(&mut self, digit: SegmentDigit) {
            assert!(self.latched_low, "digit shifted outside a frame");
            self.pending.push(digit);
        }

        fn latch_high(&mut self) {
            self.latched_low = false;
            let frame: [SegmentDigit; 4] = self.pending.as_slice().try_into().unwrap();
            self.frames.push(frame);
        }
    }

    #[derive(Default)]
    struct RecordingBuzzer {
        pulses: Vec<(u32, u32)>,
    }

    impl Buzzer for RecordingBuzzer {
        fn pulse(&mut self, half_period_us: u32, count: u32) {
            self.pulses.push((half_period_us, count));
        }
    }

    #[derive(Default)]
    struct FakeDisplay {
        flushes: u32,
        last: Option<Framebuffer>,
        fail: bool,
    }

    impl DisplayBackend for FakeDisplay {
        fn init(&mut self) -> Result<(), DisplayError> {
            Ok(())
        }

        fn flush(&mut self, frame: &Framebuffer) -> Result<(), DisplayError> {
            if self.fail {
                return Err(DisplayError::Communication);
            }
            self.flushes += 1;
            self.last = Some(frame.clone());
            Ok(())
        }
    }

    struct Scripted(Buttons);

    impl ButtonSource for Scripted {
        fn read_raw(&mut self) -> Buttons {
            self.0
        }
    }

    type TestController = Controller<FakeRtc, RecordingSegments, RecordingBuzzer>;

    fn controller(rtc: FakeRtc) -> TestController {
        Controller::new(
            rtc,
            RecordingSegments::default(),
            RecordingBuzzer::default(),
            &ClockConfig::default(),
        )
        .unwrap()
    }

    fn alarm_raw(hours: u8, minutes: u8) -> u32 {
        encode_word(hours, minutes, &ALARM_OFFSETS)
    }

    /// Press then release, two cycles
    fn press(c: &mut TestController, button: Buttons) {
        c.step(button).unwrap();
        c.step(Buttons::NONE).unwrap();
    }

    fn last_frame(c: &TestController) -> [SegmentDigit; 4] {
        *c.segments.frames.last().unwrap()
    }

    #[test]
    fn test_starts_in_show_time_with_stored_alarm() {
        let mut rtc = FakeRtc::at(10, 0, 0);
        rtc.alarm_raw = alarm_raw(6, 45);
        let c = controller(rtc);
        assert_eq!(c.state(), UiState::ShowTime);
        assert_eq!(c.cursor(), 0);
        assert_eq!(c.context().alarm, AlarmWord(0x0006_4500));
    }

    #[test]
    fn test_show_time_outputs_live_digits() {
        let mut c = controller(FakeRtc::at(21, 47, 2));
        c.step(Buttons::NONE).unwrap();
        assert_eq!(
            last_frame(&c),
            [
                SegmentDigit::Digit(7),
                SegmentDigit::Digit(4),
                SegmentDigit::Digit(1),
                SegmentDigit::Digit(2),
            ]
        );
    }

    #[test]
    fn test_cycle_draws_border_and_flushes() {
        let mut c = controller(FakeRtc::at(10, 0, 0));
        let mut display = FakeDisplay::default();
        c.cycle(&mut display, &mut Scripted(Buttons::NONE)).unwrap();
        assert_eq!(display.flushes, 1);
        let frame = display.last.unwrap();
        assert!(frame.pixel(0, 0));
        assert!(frame.pixel(126, 62));
        assert_eq!(&frame, c.frame());
    }

    #[test]
    fn test_frame_is_rebuilt_each_cycle() {
        let mut c = controller(FakeRtc::at(10, 0, 0));
        press(&mut c, Buttons::SELECT);
        assert_eq!(c.state(), UiState::MenuPage1);
        let menu = c.frame().lit_pixels();
        press(&mut c, Buttons::DOWN);
        press(&mut c, Buttons::DOWN);
        press(&mut c, Buttons::DOWN);
        assert_eq!(c.state(), UiState::MenuPage2);
        press(&mut c, Buttons::DOWN);
        press(&mut c, Buttons::DOWN);
        press(&mut c, Buttons::SELECT);
        assert_eq!(c.state(), UiState::ShowTime);
        c.step(Buttons::NONE).unwrap();
        assert!(c.frame().lit_pixels() < menu);
    }

    #[test]
    fn test_held_select_fires_once() {
        let mut c = controller(FakeRtc::at(10, 0, 0));
        c.step(Buttons::SELECT).unwrap();
        assert_eq!(c.state(), UiState::MenuPage1);
        c.step(Buttons::SELECT).unwrap();
        c.step(Buttons::SELECT).unwrap();
        assert_eq!(c.state(), UiState::MenuPage1);
        assert_eq!(c.cursor(), 0);
    }

    #[test]
    fn test_menu1_cursor_floor_and_wrap_to_page_2() {
        let mut c = controller(FakeRtc::at(10, 0, 0));
        press(&mut c, Buttons::SELECT);
        press(&mut c, Buttons::UP);
        assert_eq!(c.cursor(), 0);
        press(&mut c, Buttons::DOWN);
        press(&mut c, Buttons::DOWN);
        assert_eq!((c.state(), c.cursor()), (UiState::MenuPage1, 2));
        press(&mut c, Buttons::DOWN);
        assert_eq!((c.state(), c.cursor()), (UiState::MenuPage2, 0));
    }

    #[test]
    fn test_menu2_ceiling_and_back_to_page_1() {
        let mut c = controller(FakeRtc::at(10, 0, 0));
        press(&mut c, Buttons::SELECT);
        for _ in 0..3 {
            press(&mut c, Buttons::DOWN);
        }
        assert_eq!(c.state(), UiState::MenuPage2);
        for _ in 0..4 {
            press(&mut c, Buttons::DOWN);
        }
        assert_eq!(c.cursor(), 2);
        press(&mut c, Buttons::UP);
        press(&mut c, Buttons::UP);
        assert_eq!((c.state(), c.cursor()), (UiState::MenuPage2, 0));
        press(&mut c, Buttons::UP);
        assert_eq!((c.state(), c.cursor()), (UiState::MenuPage1, 0));
    }

    #[test]
    fn test_up_wins_over_down() {
        let mut c = controller(FakeRtc::at(10, 0, 0));
        press(&mut c, Buttons::SELECT);
        press(&mut c, Buttons::DOWN);
        press(&mut c, Buttons::UP | Buttons::DOWN);
        assert_eq!(c.cursor(), 0);
    }

    #[test]
    fn test_select_sees_cursor_moved_same_cycle() {
        let mut c = controller(FakeRtc::at(10, 0, 0));
        press(&mut c, Buttons::SELECT);
        press(&mut c, Buttons::DOWN | Buttons::SELECT);
        assert_eq!((c.state(), c.cursor()), (UiState::SetAlarm, 0));
    }

    #[test]
    fn test_down_and_select_on_last_menu1_row() {
        let mut c = controller(FakeRtc::at(10, 0, 0));
        press(&mut c, Buttons::SELECT);
        press(&mut c, Buttons::DOWN);
        press(&mut c, Buttons::DOWN);
        assert_eq!((c.state(), c.cursor()), (UiState::MenuPage1, 2));

        // Down turns the page and zeroes the cursor, so Select picks row 0
        press(&mut c, Buttons::DOWN | Buttons::SELECT);
        assert_eq!((c.state(), c.cursor()), (UiState::SetTime, 0));
        assert_eq!(c.edit_buffer(), EditBuffer::new(10, 0));
    }

    #[test]
    fn test_up_and_select_on_first_menu2_row() {
        let mut c = controller(FakeRtc::at(10, 0, 0));
        press(&mut c, Buttons::SELECT);
        for _ in 0..3 {
            press(&mut c, Buttons::DOWN);
        }
        assert_eq!((c.state(), c.cursor()), (UiState::MenuPage2, 0));

        press(&mut c, Buttons::UP | Buttons::SELECT);
        assert_eq!((c.state(), c.cursor()), (UiState::SetAlarmState, 0));
    }

    #[test]
    fn test_menu_selects_load_alarm() {
        let mut rtc = FakeRtc::at(10, 0, 0);
        rtc.alarm_raw = alarm_raw(6, 45);
        let mut c = controller(rtc);
        press(&mut c, Buttons::SELECT);
        press(&mut c, Buttons::DOWN);
        let reads = c.rtc.alarm_reads;
        press(&mut c, Buttons::SELECT);
        assert_eq!((c.state(), c.cursor()), (UiState::SetAlarm, 0));
        assert_eq!(c.edit_buffer(), EditBuffer::new(6, 45));
        assert_eq!(c.rtc.alarm_reads, reads + 1);
    }

    #[test]
    fn test_menu1_set_alarm_days() {
        let mut c = controller(FakeRtc::at(10, 0, 0));
        press(&mut c, Buttons::SELECT);
        press(&mut c, Buttons::DOWN);
        press(&mut c, Buttons::DOWN);
        press(&mut c, Buttons::SELECT);
        assert_eq!(c.state(), UiState::SetAlarmDays);
        press(&mut c, Buttons::UP);
        assert_eq!(c.state(), UiState::SetAlarmDays);
        press(&mut c, Buttons::SELECT);
        assert_eq!(c.state(), UiState::ShowTime);
    }

    #[test]
    fn test_menu2_entries() {
        let expected = [
            UiState::SetAlarmState,
            UiState::SetAlarmTone,
            UiState::ShowTime,
        ];
        for (row, state) in expected.into_iter().enumerate() {
            let mut c = controller(FakeRtc::at(10, 0, 0));
            press(&mut c, Buttons::SELECT);
            for _ in 0..3 {
                press(&mut c, Buttons::DOWN);
            }
            for _ in 0..row {
                press(&mut c, Buttons::DOWN);
            }
            press(&mut c, Buttons::SELECT);
            assert_eq!((c.state(), c.cursor()), (state, 0));
            if state != UiState::ShowTime {
                press(&mut c, Buttons::SELECT);
                assert_eq!(c.state(), UiState::ShowTime);
            }
        }
    }

    #[test]
    fn test_set_time_end_to_end() {
        let mut c = controller(FakeRtc::at(22, 15, 0));
        press(&mut c, Buttons::SELECT);
        assert_eq!((c.state(), c.cursor()), (UiState::MenuPage1, 0));
        press(&mut c, Buttons::SELECT);
        assert_eq!(c.state(), UiState::SetTime);
        assert_eq!(c.edit_buffer(), EditBuffer::new(22, 15));

        press(&mut c, Buttons::UP);
        press(&mut c, Buttons::UP);
        assert_eq!(c.edit_buffer().hours, 0);

        press(&mut c, Buttons::SELECT);
        assert_eq!(c.cursor(), 1);
        assert!(c.rtc.time_writes.is_empty());
        press(&mut c, Buttons::SELECT);

        assert_eq!(c.rtc.time_writes, [(0x00, 0x15)]);
        assert_eq!((c.state(), c.cursor()), (UiState::ShowTime, 0));
    }

    #[test]
    fn test_set_time_wraps() {
        let mut c = controller(FakeRtc::at(23, 0, 0));
        press(&mut c, Buttons::SELECT);
        press(&mut c, Buttons::SELECT);
        press(&mut c, Buttons::UP);
        assert_eq!(c.edit_buffer().hours, 0);
        press(&mut c, Buttons::SELECT);
        press(&mut c, Buttons::DOWN);
        assert_eq!(c.edit_buffer().minutes, 59);
    }

    #[test]
    fn test_set_time_blinks_field_under_edit() {
        // Odd seconds: blink bit set
        let mut c = controller(FakeRtc::at(9, 35, 1));
        press(&mut c, Buttons::SELECT);
        press(&mut c, Buttons::SELECT);
        assert_eq!(
            last_frame(&c),
            [
                SegmentDigit::Digit(5),
                SegmentDigit::Digit(3),
                SegmentDigit::Blank,
                SegmentDigit::Blank,
            ]
        );
        press(&mut c, Buttons::SELECT);
        let frame = last_frame(&c);
        assert_eq!(frame[0], SegmentDigit::Blank);
        assert_eq!(frame[3], SegmentDigit::Digit(0));

        c.rtc.set(9, 35, 2);
        c.step(Buttons::NONE).unwrap();
        assert!(!last_frame(&c).contains(&SegmentDigit::Blank));
    }

    #[test]
    fn test_set_alarm_commit_rereads_alarm() {
        let mut rtc = FakeRtc::at(10, 0, 0);
        rtc.alarm_raw = alarm_raw(6, 45);
        let mut c = controller(rtc);
        press(&mut c, Buttons::SELECT);
        press(&mut c, Buttons::DOWN);
        press(&mut c, Buttons::SELECT);
        press(&mut c, Buttons::UP);
        press(&mut c, Buttons::SELECT);
        press(&mut c, Buttons::DOWN);
        let reads = c.rtc.alarm_reads;
        press(&mut c, Buttons::SELECT);

        assert_eq!(c.rtc.alarm_writes, [(0x07, 0x44)]);
        assert_eq!(c.rtc.alarm_reads, reads + 1);
        assert_eq!(c.context().alarm, AlarmWord::from_register(alarm_raw(7, 44)));
        assert_eq!((c.state(), c.cursor()), (UiState::ShowTime, 0));
    }

    #[test]
    fn test_alarm_fires_from_any_state() {
        let mut rtc = FakeRtc::at(7, 29, 0);
        rtc.alarm_raw = alarm_raw(7, 30);
        let mut c = controller(rtc);
        press(&mut c, Buttons::SELECT);
        press(&mut c, Buttons::DOWN);
        assert_eq!((c.state(), c.cursor()), (UiState::MenuPage1, 1));

        c.rtc.set(7, 30, 0);
        c.step(Buttons::NONE).unwrap();
        assert_eq!((c.state(), c.cursor()), (UiState::InAlarm, 0));
    }

    #[test]
    fn test_alarm_blinks_and_buzzes() {
        let mut rtc = FakeRtc::at(7, 30, 0);
        rtc.alarm_raw = alarm_raw(7, 30);
        let mut c = controller(rtc);
        c.step(Buttons::NONE).unwrap();
        assert_eq!(c.state(), UiState::InAlarm);
        assert_eq!(c.buzzer.pulses, [(200, 500)]);
        assert_eq!(last_frame(&c)[2], SegmentDigit::Digit(7));

        c.rtc.set(7, 30, 1);
        c.step(Buttons::NONE).unwrap();
        assert_eq!(last_frame(&c), [SegmentDigit::Blank; 4]);
        assert_eq!(c.buzzer.pulses.len(), 1);
    }

    #[test]
    fn test_dismissed_alarm_does_not_refire_same_minute() {
        let mut rtc = FakeRtc::at(7, 30, 0);
        rtc.alarm_raw = alarm_raw(7, 30);
        let mut c = controller(rtc);
        c.step(Buttons::NONE).unwrap();
        press(&mut c, Buttons::SELECT);
        assert_eq!(c.state(), UiState::ShowTime);
        assert!(c.context().snoozed);

        c.rtc.set(7, 30, 40);
        c.step(Buttons::NONE).unwrap();
        assert_eq!(c.state(), UiState::ShowTime);

        c.rtc.set(7, 31, 0);
        c.step(Buttons::NONE).unwrap();
        assert!(!c.context().snoozed);

        c.rtc.set(7, 30, 0);
        c.step(Buttons::NONE).unwrap();
        assert_eq!(c.state(), UiState::InAlarm);
    }

    #[test]
    fn test_rtc_failure_propagates() {
        let mut c = controller(FakeRtc::at(10, 0, 0));
        let mut display = FakeDisplay::default();
        c.rtc.fail_time = true;
        let result = c.cycle(&mut display, &mut Scripted(Buttons::SELECT));
        assert_eq!(result, Err(ControllerError::Rtc(RtcError::Bus)));
        assert_eq!(display.flushes, 0);
        assert_eq!(c.state(), UiState::ShowTime);

        c.rtc.fail_time = false;
        c.cycle(&mut display, &mut Scripted(Buttons::NONE)).unwrap();
        assert_eq!(display.flushes, 1);
    }

    #[test]
    fn test_display_failure_propagates() {
        let mut c = controller(FakeRtc::at(10, 0, 0));
        let mut display = FakeDisplay {
            fail: true,
            ..FakeDisplay::default()
        };
        let result = c.cycle(&mut display, &mut Scripted(Buttons::SELECT));
        assert_eq!(
            result,
            Err(ControllerError::Display(DisplayError::Communication))
        );
        // The handler still ran
        assert_eq!(c.state(), UiState::MenuPage1);
    }

    #[test]
    fn test_with_alarm_uses_config_tone() {
        let config = ClockConfig {
            buzzer: BuzzerConfig {
                half_period_us: 100,
                pulses: 20,
            },
            ..ClockConfig::default()
        };
        let alarm = AlarmWord::from_register(alarm_raw(6, 0));
        let mut c = Controller::with_alarm(
            FakeRtc::at(6, 0, 0),
            RecordingSegments::default(),
            RecordingBuzzer::default(),
            &config,
            alarm,
        );
        c.step(Buttons::NONE).unwrap();
        assert_eq!(c.state(), UiState::InAlarm);
        assert_eq!(c.buzzer.pulses, [(100, 20)]);
        assert_eq!(c.rtc.alarm_reads, 0);
    }

    #[test]
    fn test_release_returns_peripherals() {
        let c = controller(FakeRtc::at(10, 0, 0));
        let (rtc, segments, buzzer) = c.release();
        assert_eq!(rtc.alarm_reads, 1);
        assert!(segments.frames.is_empty());
        assert!(buzzer.pulses.is_empty());
    }
}
