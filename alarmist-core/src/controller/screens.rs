//! Screen layouts
//!
//! Pure drawing: each function paints onto a framebuffer that the cycle
//! has already cleared. Nothing here touches the peripherals.

use alarmist_display::{draw_char, draw_text, FontSize, Framebuffer};

use crate::state::UiState;
use crate::traits::SegmentDigit;

/// Rows separating the three menu entries
const MENU_RULES: [u16; 4] = [18, 30, 42, 54];
const MENU_RULE_WIDTH: u16 = 127;
const MENU_TITLE_POS: (u16, u16) = (42, 4);
const CHEVRON_X: u16 = 12;
const CHEVRON_Y: u16 = 21;
const MENU_ROW_PITCH: u16 = 12;

/// Menu entries as `(x, y, label)`; x right-aligns the labels
const MENU_PAGE_1: [(u16, u16, &str); 3] = [
    (72, 20, "Set Time"),
    (68, 32, "Set Alarm"),
    (40, 44, "Set Alarm Days"),
];

const MENU_PAGE_2: [(u16, u16, &str); 3] = [
    (28, 20, "Set Alarm On/Off"),
    (38, 32, "Set Alarm Tone"),
    (66, 44, "Exit Menu"),
];

/// 2 px border drawn every cycle
pub fn draw_chrome(fb: &mut Framebuffer) {
    fb.draw_rect(0, 0, 127, 63, 2, true);
}

/// Where a state's big-font heading goes
pub fn title_position(state: UiState) -> (u16, u16) {
    match state {
        UiState::ShowTime => (37, 26),
        UiState::InAlarm => (18, 26),
        UiState::MenuPage1 | UiState::MenuPage2 => MENU_TITLE_POS,
        UiState::SetTime => (18, 26),
        UiState::SetAlarm => (11, 26),
        UiState::SetAlarmDays => (5, 26),
        UiState::SetAlarmTone => (5, 16),
        UiState::SetAlarmState => (18, 16),
    }
}

/// Big heading for `state`
pub fn draw_title(fb: &mut Framebuffer, state: UiState) {
    let (x, y) = title_position(state);
    draw_text(fb, x, y, state.title(), FontSize::Big, true);
}

/// Full menu page: heading, rules, entries and the cursor chevron
///
/// States other than the two menu pages draw nothing.
pub fn draw_menu(fb: &mut Framebuffer, state: UiState, cursor: u8) {
    let entries = match state {
        UiState::MenuPage1 => &MENU_PAGE_1,
        UiState::MenuPage2 => &MENU_PAGE_2,
        _ => return,
    };

    draw_title(fb, state);
    for y in MENU_RULES {
        fb.draw_h_line(0, y, MENU_RULE_WIDTH, true);
    }
    for &(x, y, label) in entries {
        draw_text(fb, x, y, label, FontSize::Small, true);
    }
    draw_char(
        fb,
        CHEVRON_X,
        chevron_y(cursor),
        '>',
        FontSize::Small,
        true,
    );
}

/// Row of the chevron for a menu cursor
pub fn chevron_y(cursor: u8) -> u16 {
    CHEVRON_Y + cursor as u16 * MENU_ROW_PITCH
}

/// Four digits in segment shift order
pub fn digits(values: [u8; 4]) -> [SegmentDigit; 4] {
    values.map(SegmentDigit::Digit)
}

/// Segment frame for an editing state
///
/// While `blink` is set the pair under edit is blanked: minutes for
/// cursor 1, hours for cursor 0.
pub fn edit_digits(values: [u8; 4], cursor: u8, blink: bool) -> [SegmentDigit; 4] {
    let mut frame = digits(values);
    if blink {
        let pair = if cursor == 1 { 0..2 } else { 2..4 };
        for slot in &mut frame[pair] {
            *slot = SegmentDigit::Blank;
        }
    }
    frame
}
