//! Display backend trait
//!
//! A backend is whatever physically shows the framebuffer: the SSD1306 on
//! the clock, or a recording fake in tests.

use crate::framebuffer::Framebuffer;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transaction with the display failed
    Communication,
}

/// Display backend trait
///
/// The backend owns no drawing state. It receives a complete frame once per
/// clock cycle and transfers it in one blocking call.
pub trait DisplayBackend {
    /// Run the controller's power-up sequence
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Push the full framebuffer to the panel
    ///
    /// A backend whose `init` failed retries it here.
    fn flush(&mut self, frame: &Framebuffer) -> Result<(), DisplayError>;
}

impl<T: DisplayBackend + ?Sized> DisplayBackend for &mut T {
    fn init(&mut self) -> Result<(), DisplayError> {
        (**self).init()
    }

    fn flush(&mut self, frame: &Framebuffer) -> Result<(), DisplayError> {
        (**self).flush(frame)
    }
}
