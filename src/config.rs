//! Application configuration constants.

use std::time::Duration;

/// Supported image file extensions for the before/after inputs.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Widget height when the caller does not provide one.
pub const DEFAULT_HEIGHT: f32 = 300.0;

/// Length of one full autoplay cycle unit, in milliseconds.
pub const DEFAULT_AUTO_PLAY_DURATION_MS: u64 = 5000;

pub const DEFAULT_LABEL_BEFORE: &str = "Before";
pub const DEFAULT_LABEL_AFTER: &str = "After";

/// Width of the vertical divider line.
pub const DIVIDER_LINE_WIDTH: f32 = 2.0;

/// The handle is a square control of this side length.
pub const HANDLE_SIZE: f32 = 30.0;

/// Horizontal distance of each label from its edge of the container.
pub const LABEL_INSET: f32 = 20.0;

/// Interval between autoplay animation frames.
pub const ANIMATION_FRAME_INTERVAL: Duration = Duration::from_millis(16);
