//! Geometry of every visual layer, derived from the divider position.
//!
//! These are pure functions; the UI calls [`compute`] after each position
//! change and copies the result into the view without another layout pass.

use crate::config::{DIVIDER_LINE_WIDTH, HANDLE_SIZE, LABEL_INSET};
use crate::slider::options::{LabelBox, LabelText, SliderOptions};

/// Geometry of the layers that only exist once the container has a width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerLayers {
    /// Width of the clip region that reveals the before image.
    pub overlay_width: f32,
    /// Left edge of the divider line.
    pub line_x: f32,
    pub handle_x: f32,
    pub handle_y: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub anchor: LabelAnchor,
    pub container: LabelBox,
    pub text_style: LabelText,
}

/// Which container edge a label is pinned to, and at what inset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelAnchor {
    Left(f32),
    Right(f32),
}

/// Everything the view needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderLayers {
    /// Full-size image sizes; the after image is always drawn.
    pub image_width: f32,
    pub image_height: f32,
    /// `None` until the container has been measured with a positive width.
    pub divider: Option<DividerLayers>,
    /// Empty when labels are hidden.
    pub labels: Vec<Label>,
}

pub fn overlay_width(position: f32) -> f32 {
    position
}

pub fn line_x(position: f32) -> f32 {
    position - DIVIDER_LINE_WIDTH / 2.0
}

pub fn handle_x(position: f32) -> f32 {
    position - HANDLE_SIZE / 2.0
}

/// Top of the handle so it sits centered vertically.
pub fn handle_y(height: f32) -> f32 {
    height / 2.0 - HANDLE_SIZE / 2.0
}

pub fn divider_layers(position: f32, height: f32) -> DividerLayers {
    DividerLayers {
        overlay_width: overlay_width(position),
        line_x: line_x(position),
        handle_x: handle_x(position),
        handle_y: handle_y(height),
    }
}

pub fn labels<I>(options: &SliderOptions<I>) -> Vec<Label> {
    if options.hide_label {
        return Vec::new();
    }

    let container = options.resolved_label_box();
    let text_style = options.resolved_label_text();
    vec![
        Label {
            text: options.label_text_before.clone(),
            anchor: LabelAnchor::Left(LABEL_INSET),
            container,
            text_style,
        },
        Label {
            text: options.label_text_after.clone(),
            anchor: LabelAnchor::Right(LABEL_INSET),
            container,
            text_style,
        },
    ]
}

/// Derives all layers for the given container width and divider position.
pub fn compute<I>(options: &SliderOptions<I>, container_width: f32, position: f32) -> SliderLayers {
    let divider = (container_width > 0.0).then(|| divider_layers(position, options.height));

    SliderLayers {
        image_width: container_width,
        image_height: options.height,
        divider,
        labels: labels(options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layers_at_midpoint_of_300() {
        let options = SliderOptions::new((), ());
        let layers = compute(&options, 300.0, 150.0);

        let divider = layers.divider.expect("divider should render");
        assert_eq!(divider.overlay_width, 150.0);
        assert_eq!(divider.line_x, 149.0);
        assert_eq!(divider.handle_x, 135.0);
        assert_eq!(divider.handle_y, 135.0);
        assert_eq!(layers.image_width, 300.0);
        assert_eq!(layers.image_height, 300.0);
    }

    #[test]
    fn test_no_divider_before_measurement() {
        let options = SliderOptions::new((), ());
        let layers = compute(&options, 0.0, 0.0);

        assert!(layers.divider.is_none());
        // labels do not depend on measurement
        assert_eq!(layers.labels.len(), 2);
    }

    #[test]
    fn test_hidden_labels_render_nothing() {
        let options = SliderOptions::new((), ())
            .with_hide_label(true)
            .with_label_text_before("Original");
        assert!(compute(&options, 300.0, 10.0).labels.is_empty());
    }

    #[test]
    fn test_labels_are_anchored_to_opposite_edges() {
        let options = SliderOptions::new((), ())
            .with_label_text_before("Raw")
            .with_label_text_after("Graded");
        let labels = labels(&options);

        assert_eq!(labels[0].text, "Raw");
        assert_eq!(labels[0].anchor, LabelAnchor::Left(20.0));
        assert_eq!(labels[1].text, "Graded");
        assert_eq!(labels[1].anchor, LabelAnchor::Right(20.0));
    }

    #[test]
    fn test_handle_centering_follows_height() {
        assert_eq!(handle_y(400.0), 185.0);
        assert_eq!(divider_layers(0.0, 300.0).handle_x, -15.0);
        assert_eq!(divider_layers(0.0, 300.0).line_x, -1.0);
    }
}
