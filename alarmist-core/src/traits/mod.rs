//! Hardware abstraction traits
//!
//! The controller only talks to the clock's peripherals through these
//! traits. The display side lives in `alarmist_display::DisplayBackend`.

pub mod buttons;
pub mod buzzer;
pub mod rtc;
pub mod segment;

pub use buttons::ButtonSource;
pub use buzzer::Buzzer;
pub use rtc::{RealTimeClock, RtcError};
pub use segment::{SegmentDigit, SegmentDisplay};
