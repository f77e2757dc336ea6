//! Per-state handlers
//!
//! Every handler has the same shape: draw the state's screen, drive the
//! segment display, then act on this cycle's pressed edges. Up and Down
//! are exclusive (Up wins). Select is looked at last, against whatever
//! Up/Down just changed.

use alarmist_display::Framebuffer;

use super::context::{ClockContext, EditBuffer, EditField};
use super::screens;
use crate::config::BuzzerConfig;
use crate::input::Buttons;
use crate::state::UiState;
use crate::time::AlarmWord;
use crate::traits::{Buzzer, RealTimeClock, RtcError, SegmentDigit, SegmentDisplay};

/// Peripherals a handler may touch during one cycle
pub struct Io<'a, R, S, Z> {
    pub rtc: &'a mut R,
    pub segments: &'a mut S,
    pub buzzer: &'a mut Z,
    pub tone: BuzzerConfig,
}

/// Run the handler for `ctx.state`
pub fn dispatch<R, S, Z>(
    ctx: &mut ClockContext,
    fb: &mut Framebuffer,
    io: &mut Io<'_, R, S, Z>,
    pressed: Buttons,
) -> Result<(), RtcError>
where
    R: RealTimeClock,
    S: SegmentDisplay,
    Z: Buzzer,
{
    match ctx.state {
        UiState::ShowTime => show_time(ctx, fb, io, pressed),
        UiState::InAlarm => in_alarm(ctx, fb, io, pressed),
        UiState::MenuPage1 => menu_page_1(ctx, fb, io, pressed),
        UiState::MenuPage2 => menu_page_2(ctx, fb, io, pressed),
        UiState::SetTime => set_time(ctx, fb, io, pressed),
        UiState::SetAlarm => set_alarm(ctx, fb, io, pressed),
        UiState::SetAlarmDays | UiState::SetAlarmTone | UiState::SetAlarmState => {
            placeholder(ctx, fb, io, pressed)
        }
    }
}

pub fn show_time<R, S, Z>(
    ctx: &mut ClockContext,
    fb: &mut Framebuffer,
    io: &mut Io<'_, R, S, Z>,
    pressed: Buttons,
) -> Result<(), RtcError>
where
    R: RealTimeClock,
    S: SegmentDisplay,
    Z: Buzzer,
{
    screens::draw_title(fb, UiState::ShowTime);
    io.segments.show(screens::digits(ctx.time.segment_digits()));

    if pressed.contains(Buttons::SELECT) {
        ctx.enter(UiState::MenuPage1);
    }
    Ok(())
}

/// Blinks the live time in step with the seconds bit and sounds the buzzer
/// on the lit half
pub fn in_alarm<R, S, Z>(
    ctx: &mut ClockContext,
    fb: &mut Framebuffer,
    io: &mut Io<'_, R, S, Z>,
    pressed: Buttons,
) -> Result<(), RtcError>
where
    R: RealTimeClock,
    S: SegmentDisplay,
    Z: Buzzer,
{
    screens::draw_title(fb, UiState::InAlarm);
    if ctx.time.blink_phase() {
        io.segments.show([SegmentDigit::Blank; 4]);
    } else {
        io.segments.show(screens::digits(ctx.time.segment_digits()));
        io.buzzer.pulse(io.tone.half_period_us, io.tone.pulses);
    }

    if pressed.contains(Buttons::SELECT) {
        ctx.enter(UiState::ShowTime);
        ctx.snoozed = true;
        #[cfg(feature = "defmt")]
        defmt::info!("alarm dismissed");
    }
    Ok(())
}

pub fn menu_page_1<R, S, Z>(
    ctx: &mut ClockContext,
    fb: &mut Framebuffer,
    io: &mut Io<'_, R, S, Z>,
    pressed: Buttons,
) -> Result<(), RtcError>
where
    R: RealTimeClock,
    S: SegmentDisplay,
    Z: Buzzer,
{
    screens::draw_menu(fb, UiState::MenuPage1, ctx.cursor);

    if pressed.contains(Buttons::UP) {
        ctx.cursor = ctx.cursor.saturating_sub(1);
    } else if pressed.contains(Buttons::DOWN) {
        if ctx.cursor < UiState::MenuPage1.cursor_limit() {
            ctx.cursor += 1;
        } else {
            ctx.enter(UiState::MenuPage2);
        }
    }

    if pressed.contains(Buttons::SELECT) {
        match ctx.cursor {
            0 => {
                ctx.edit = EditBuffer::from_time(ctx.time);
                ctx.enter(UiState::SetTime);
            }
            1 => {
                ctx.edit = load_alarm(io.rtc)?;
                ctx.enter(UiState::SetAlarm);
            }
            _ => {
                ctx.edit = load_alarm(io.rtc)?;
                ctx.enter(UiState::SetAlarmDays);
            }
        }
    }
    Ok(())
}

pub fn menu_page_2<R, S, Z>(
    ctx: &mut ClockContext,
    fb: &mut Framebuffer,
    io: &mut Io<'_, R, S, Z>,
    pressed: Buttons,
) -> Result<(), RtcError>
where
    R: RealTimeClock,
    S: SegmentDisplay,
    Z: Buzzer,
{
    screens::draw_menu(fb, UiState::MenuPage2, ctx.cursor);

    if pressed.contains(Buttons::UP) {
        if ctx.cursor > 0 {
            ctx.cursor -= 1;
        } else {
            ctx.enter(UiState::MenuPage1);
        }
    } else if pressed.contains(Buttons::DOWN) && ctx.cursor < UiState::MenuPage2.cursor_limit() {
        ctx.cursor += 1;
    }

    if pressed.contains(Buttons::SELECT) {
        match ctx.cursor {
            0 => {
                ctx.edit = load_alarm(io.rtc)?;
                ctx.enter(UiState::SetAlarmState);
            }
            1 => {
                ctx.edit = load_alarm(io.rtc)?;
                ctx.enter(UiState::SetAlarmTone);
            }
            _ => ctx.enter(UiState::ShowTime),
        }
    }
    Ok(())
}

pub fn set_time<R, S, Z>(
    ctx: &mut ClockContext,
    fb: &mut Framebuffer,
    io: &mut Io<'_, R, S, Z>,
    pressed: Buttons,
) -> Result<(), RtcError>
where
    R: RealTimeClock,
    S: SegmentDisplay,
    Z: Buzzer,
{
    screens::draw_title(fb, UiState::SetTime);
    if edit_fields(ctx, io, pressed) {
        let (hours, minutes) = ctx.edit.to_bcd();
        io.rtc.write_time(hours, minutes)?;
        #[cfg(feature = "defmt")]
        defmt::info!("time set to {}:{}", ctx.edit.hours, ctx.edit.minutes);
        ctx.enter(UiState::ShowTime);
    }
    Ok(())
}

pub fn set_alarm<R, S, Z>(
    ctx: &mut ClockContext,
    fb: &mut Framebuffer,
    io: &mut Io<'_, R, S, Z>,
    pressed: Buttons,
) -> Result<(), RtcError>
where
    R: RealTimeClock,
    S: SegmentDisplay,
    Z: Buzzer,
{
    screens::draw_title(fb, UiState::SetAlarm);
    if edit_fields(ctx, io, pressed) {
        let (hours, minutes) = ctx.edit.to_bcd();
        io.rtc.write_alarm(hours, minutes)?;
        // Match against what the chip stored, not what was sent
        ctx.alarm = AlarmWord::from_register(io.rtc.read_alarm()?);
        #[cfg(feature = "defmt")]
        defmt::info!("alarm set to {}:{}", ctx.edit.hours, ctx.edit.minutes);
        ctx.enter(UiState::ShowTime);
    }
    Ok(())
}

/// SetAlarmDays, SetAlarmTone and SetAlarmState: heading only, Select
/// returns to the clock
pub fn placeholder<R, S, Z>(
    ctx: &mut ClockContext,
    fb: &mut Framebuffer,
    _io: &mut Io<'_, R, S, Z>,
    pressed: Buttons,
) -> Result<(), RtcError>
where
    R: RealTimeClock,
    S: SegmentDisplay,
    Z: Buzzer,
{
    screens::draw_title(fb, ctx.state);
    if pressed.contains(Buttons::SELECT) {
        ctx.enter(UiState::ShowTime);
    }
    Ok(())
}

/// Shared SetTime/SetAlarm input and segment handling
///
/// Returns true when Select is pressed on the minutes field, i.e. the
/// caller should commit the buffer.
fn edit_fields<R, S, Z>(ctx: &mut ClockContext, io: &mut Io<'_, R, S, Z>, pressed: Buttons) -> bool
where
    S: SegmentDisplay,
{
    io.segments.show(screens::edit_digits(
        ctx.edit.segment_digits(),
        ctx.cursor,
        ctx.time.blink_phase(),
    ));

    let field = EditField::from_cursor(ctx.cursor);
    if pressed.contains(Buttons::UP) {
        ctx.edit.increment(field);
    } else if pressed.contains(Buttons::DOWN) {
        ctx.edit.decrement(field);
    }

    if pressed.contains(Buttons::SELECT) {
        if ctx.cursor == 0 {
            ctx.cursor = 1;
        } else {
            return true;
        }
    }
    false
}

fn load_alarm<R: RealTimeClock>(rtc: &mut R) -> Result<EditBuffer, RtcError> {
    let alarm = AlarmWord::from_register(rtc.read_alarm()?);
    Ok(EditBuffer::from_alarm(alarm))
}
