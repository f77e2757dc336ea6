//! UI state machine states
//!
//! Transitions live in the controller's handlers, one per state.

pub mod machine;

pub use machine::UiState;
