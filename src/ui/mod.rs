//! UI module for handling user interactions and UI updates.
//!
//! Threading model:
//! - Slint callbacks and `slint::Timer`: slider state changes, all on the UI thread
//! - `rayon::spawn`: image decoding, off the UI thread
//! - `slint::invoke_from_event_loop`: returns decoded images from rayon to the UI thread

pub mod handlers;
pub mod image_display;
mod state_helpers;

pub use handlers::setup_handlers;
pub use state_helpers::*;
