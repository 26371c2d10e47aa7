//! Caller-supplied configuration for a slider instance.
//!
//! Style overrides are partial: every `None` field keeps the default, every
//! `Some` field replaces it.

use crate::config::{
    DEFAULT_AUTO_PLAY_DURATION_MS, DEFAULT_HEIGHT, DEFAULT_LABEL_AFTER, DEFAULT_LABEL_BEFORE,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::time::Duration;

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#([0-9a-fA-F]{6})([0-9a-fA-F]{2})?$").expect("valid color regex"));

/// RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(text: &str) -> Option<Self> {
        let caps = HEX_COLOR.captures(text.trim())?;
        let rgb = u32::from_str_radix(&caps[1], 16).ok()?;
        let a = match caps.get(2) {
            Some(alpha) => u8::from_str_radix(alpha.as_str(), 16).ok()?,
            None => 0xFF,
        };
        Some(Self::rgba((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, a))
    }
}

/// Fully resolved styling of a label container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelBox {
    pub top: f32,
    pub background: Color,
    pub padding_horizontal: f32,
    pub padding_vertical: f32,
    pub border_radius: f32,
}

impl Default for LabelBox {
    fn default() -> Self {
        Self {
            top: 20.0,
            background: Color::rgba(0, 0, 0, 0x80),
            padding_horizontal: 10.0,
            padding_vertical: 4.0,
            border_radius: 5.0,
        }
    }
}

/// Partial override of [`LabelBox`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LabelStyle {
    pub top: Option<f32>,
    pub background: Option<Color>,
    pub padding_horizontal: Option<f32>,
    pub padding_vertical: Option<f32>,
    pub border_radius: Option<f32>,
}

impl LabelStyle {
    pub fn apply(&self, base: LabelBox) -> LabelBox {
        LabelBox {
            top: self.top.unwrap_or(base.top),
            background: self.background.unwrap_or(base.background),
            padding_horizontal: self.padding_horizontal.unwrap_or(base.padding_horizontal),
            padding_vertical: self.padding_vertical.unwrap_or(base.padding_vertical),
            border_radius: self.border_radius.unwrap_or(base.border_radius),
        }
    }
}

/// Fully resolved styling of label text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelText {
    pub color: Color,
    pub font_weight: u16,
    pub font_size: f32,
}

impl Default for LabelText {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            font_weight: 700,
            font_size: 14.0,
        }
    }
}

/// Partial override of [`LabelText`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LabelTextStyle {
    pub color: Option<Color>,
    pub font_weight: Option<u16>,
    pub font_size: Option<f32>,
}

impl LabelTextStyle {
    pub fn apply(&self, base: LabelText) -> LabelText {
        LabelText {
            color: self.color.unwrap_or(base.color),
            font_weight: self.font_weight.unwrap_or(base.font_weight),
            font_size: self.font_size.unwrap_or(base.font_size),
        }
    }
}

/// Content drawn inside the handle.
#[derive(Debug, Clone, PartialEq)]
pub enum Handle<I> {
    /// Left/right chevron pair.
    Chevrons,
    Custom(I),
}

/// Configuration of one slider instance. `I` is the host's opaque image type.
#[derive(Debug, Clone)]
pub struct SliderOptions<I> {
    pub before_image: I,
    pub after_image: I,
    pub height: f32,
    pub auto_play: bool,
    pub auto_play_duration: Duration,
    pub hide_label: bool,
    pub handle: Handle<I>,
    pub slider_line_color: Color,
    pub label_style: LabelStyle,
    pub label_text_style: LabelTextStyle,
    pub label_text_before: String,
    pub label_text_after: String,
}

impl<I> SliderOptions<I> {
    /// Options with every optional setting at its default.
    pub fn new(before_image: I, after_image: I) -> Self {
        Self {
            before_image,
            after_image,
            height: DEFAULT_HEIGHT,
            auto_play: false,
            auto_play_duration: Duration::from_millis(DEFAULT_AUTO_PLAY_DURATION_MS),
            hide_label: false,
            handle: Handle::Chevrons,
            slider_line_color: Color::WHITE,
            label_style: LabelStyle::default(),
            label_text_style: LabelTextStyle::default(),
            label_text_before: DEFAULT_LABEL_BEFORE.to_string(),
            label_text_after: DEFAULT_LABEL_AFTER.to_string(),
        }
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = if height.is_finite() { height.max(0.0) } else { DEFAULT_HEIGHT };
        self
    }

    pub fn with_auto_play(mut self, auto_play: bool) -> Self {
        self.auto_play = auto_play;
        self
    }

    pub fn with_auto_play_duration(mut self, duration: Duration) -> Self {
        self.auto_play_duration = duration;
        self
    }

    pub fn with_hide_label(mut self, hide_label: bool) -> Self {
        self.hide_label = hide_label;
        self
    }

    pub fn with_custom_handle(mut self, handle: I) -> Self {
        self.handle = Handle::Custom(handle);
        self
    }

    pub fn with_slider_line_color(mut self, color: Color) -> Self {
        self.slider_line_color = color;
        self
    }

    pub fn with_label_style(mut self, style: LabelStyle) -> Self {
        self.label_style = style;
        self
    }

    pub fn with_label_text_style(mut self, style: LabelTextStyle) -> Self {
        self.label_text_style = style;
        self
    }

    pub fn with_label_text_before(mut self, text: impl Into<String>) -> Self {
        self.label_text_before = text.into();
        self
    }

    pub fn with_label_text_after(mut self, text: impl Into<String>) -> Self {
        self.label_text_after = text.into();
        self
    }

    /// Label container style after merging the caller's overrides.
    pub fn resolved_label_box(&self) -> LabelBox {
        self.label_style.apply(LabelBox::default())
    }

    /// Label text style after merging the caller's overrides.
    pub fn resolved_label_text(&self) -> LabelText {
        self.label_text_style.apply(LabelText::default())
    }
}
