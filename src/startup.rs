//! Command-line parsing into slider options.
//!
//! The before/after images are passed as paths; the widget treats them as
//! opaque references and the UI layer decodes them.

use crate::error::{AppError, Result};
use crate::file_utils::is_supported_image;
use crate::slider::options::{LabelStyle, LabelTextStyle};
use crate::slider::{Color, SliderOptions};
use log::info;
use std::path::PathBuf;
use std::time::Duration;

pub const USAGE: &str = "\
Usage: slint-image-compare [OPTIONS] <BEFORE> <AFTER>

Options:
  --autoplay                 Animate the divider instead of dragging it
  --duration=<ms>            Autoplay cycle duration (default 5000)
  --height=<px>              Slider height (default 300)
  --hide-labels              Do not draw the Before/After labels
  --line-color=<#RRGGBB>     Divider line color (default #FFFFFF)
  --before-label=<text>      Left label text (default Before)
  --after-label=<text>       Right label text (default After)
  --label-background=<#RRGGBBAA>
  --label-color=<#RRGGBB>
  --handle=<image>           Image drawn inside the handle";

fn parse_number<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| AppError::InvalidArgument(format!("{flag} expects a number, got {value:?}")))
}

fn parse_color(flag: &str, value: &str) -> Result<Color> {
    Color::from_hex(value).ok_or_else(|| {
        AppError::InvalidArgument(format!("{flag} expects #RRGGBB or #RRGGBBAA, got {value:?}"))
    })
}

fn image_path(value: &str) -> Result<PathBuf> {
    let path = PathBuf::from(value);
    if is_supported_image(&path) {
        Ok(path)
    } else {
        Err(AppError::InvalidArgument(format!(
            "unsupported image file: {}",
            path.display()
        )))
    }
}

/// Builds slider options from command-line arguments (program name excluded).
pub fn parse_args<I>(args: I) -> Result<SliderOptions<PathBuf>>
where
    I: IntoIterator<Item = String>,
{
    let mut images = Vec::new();
    let mut auto_play = false;
    let mut hide_label = false;
    let mut duration = None;
    let mut height = None;
    let mut line_color = None;
    let mut before_label = None;
    let mut after_label = None;
    let mut handle = None;
    let mut label_style = LabelStyle::default();
    let mut label_text_style = LabelTextStyle::default();

    for arg in args {
        if !arg.starts_with("--") {
            images.push(image_path(&arg)?);
            continue;
        }

        let (flag, value) = match arg.split_once('=') {
            Some((flag, value)) => (flag, Some(value)),
            None => (arg.as_str(), None),
        };

        match (flag, value) {
            ("--autoplay", None) => auto_play = true,
            ("--hide-labels", None) => hide_label = true,
            ("--duration", Some(v)) => duration = Some(Duration::from_millis(parse_number(flag, v)?)),
            ("--height", Some(v)) => height = Some(parse_number::<f32>(flag, v)?),
            ("--line-color", Some(v)) => line_color = Some(parse_color(flag, v)?),
            ("--before-label", Some(v)) => before_label = Some(v.to_string()),
            ("--after-label", Some(v)) => after_label = Some(v.to_string()),
            ("--handle", Some(v)) => handle = Some(image_path(v)?),
            ("--label-background", Some(v)) => label_style.background = Some(parse_color(flag, v)?),
            ("--label-color", Some(v)) => label_text_style.color = Some(parse_color(flag, v)?),
            _ => {
                return Err(AppError::InvalidArgument(format!("unknown option {arg:?}")));
            }
        }
    }

    let [before, after]: [PathBuf; 2] = images.try_into().map_err(|images: Vec<PathBuf>| {
        AppError::InvalidArgument(format!(
            "expected a before and an after image, got {} path(s)",
            images.len()
        ))
    })?;

    let mut options = SliderOptions::new(before, after)
        .with_auto_play(auto_play)
        .with_hide_label(hide_label)
        .with_label_style(label_style)
        .with_label_text_style(label_text_style);

    if let Some(duration) = duration {
        options = options.with_auto_play_duration(duration);
    }
    if let Some(height) = height {
        options = options.with_height(height);
    }
    if let Some(color) = line_color {
        options = options.with_slider_line_color(color);
    }
    if let Some(text) = before_label {
        options = options.with_label_text_before(text);
    }
    if let Some(text) = after_label {
        options = options.with_label_text_after(text);
    }
    if let Some(path) = handle {
        options = options.with_custom_handle(path);
    }

    Ok(options)
}

/// Reads slider options from the process arguments.
pub fn options_from_env() -> Result<SliderOptions<PathBuf>> {
    let options = parse_args(std::env::args().skip(1))?;
    info!(
        "Comparing {} with {}",
        options.before_image.display(),
        options.after_image.display()
    );
    Ok(options)
}
