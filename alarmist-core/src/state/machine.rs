//! UI state definition
//!
//! Exactly one state is active. The controller dispatches on it once per
//! cycle; the alarm check may override it before dispatch.

/// UI states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiState {
    /// Live time on screen and segments
    #[default]
    ShowTime,
    /// Alarm firing, buzzer active
    InAlarm,
    /// Set Time / Set Alarm / Set Alarm Days
    MenuPage1,
    /// Alarm On/Off / Alarm Tone / Exit
    MenuPage2,
    /// Editing the clock time
    SetTime,
    /// Editing the alarm time
    SetAlarm,
    /// Placeholder screen
    SetAlarmDays,
    /// Placeholder screen
    SetAlarmTone,
    /// Placeholder screen
    SetAlarmState,
}

impl UiState {
    /// Highest legal cursor value in this state
    pub fn cursor_limit(&self) -> u8 {
        match self {
            UiState::MenuPage1 | UiState::MenuPage2 => 2,
            UiState::SetTime | UiState::SetAlarm => 1,
            _ => 0,
        }
    }

    /// Big-font heading drawn by the state's screen
    pub fn title(&self) -> &'static str {
        match self {
            UiState::ShowTime => "TIME:",
            UiState::InAlarm => "ALARM!!!!",
            UiState::MenuPage1 | UiState::MenuPage2 => "MENU",
            UiState::SetTime => "SET TIME:",
            UiState::SetAlarm => "SET ALARM:",
            UiState::SetAlarmDays => "ALARM DAYS:",
            UiState::SetAlarmTone => "ALARM TONE:",
            UiState::SetAlarmState => "ALARM ON?",
        }
    }
}
