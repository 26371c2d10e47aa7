//! Helper functions to set groups of SliderView properties at once.
//!
//! Options are pushed once at startup; layers are pushed after every
//! divider position change.

use crate::slider::layers::{LabelAnchor, SliderLayers};
use crate::slider::{Color, Handle, SliderOptions};
use log::error;
use slint::ComponentHandle;

fn to_slint_color(color: Color) -> slint::Color {
    slint::Color::from_argb_u8(color.a, color.r, color.g, color.b)
}

/// Sets the properties that only change when the options do.
///
/// Groups: slider-height, line-color, custom-handle, auto-playing
pub fn set_static_options<I>(ui: &crate::AppWindow, options: &SliderOptions<I>) {
    let view = ui.global::<crate::SliderView>();
    view.set_slider_height(options.height);
    view.set_line_color(to_slint_color(options.slider_line_color));
    view.set_custom_handle(matches!(options.handle, Handle::Custom(_)));
    view.set_auto_playing(options.auto_play);
}

/// Sets every layer derived from the divider position, plus the labels.
///
/// Groups: measured, image-width, overlay-width, line-x, handle-x, handle-y,
/// show-labels, label-*
pub fn set_layers(ui: &crate::AppWindow, layers: &SliderLayers) {
    let view = ui.global::<crate::SliderView>();
    view.set_image_width(layers.image_width);

    match layers.divider {
        Some(divider) => {
            view.set_overlay_width(divider.overlay_width);
            view.set_line_x(divider.line_x);
            view.set_handle_x(divider.handle_x);
            view.set_handle_y(divider.handle_y);
            view.set_measured(true);
        }
        None => view.set_measured(false),
    }

    let [before, after] = layers.labels.as_slice() else {
        view.set_show_labels(false);
        return;
    };

    // both labels share one container and text style
    view.set_label_before(before.text.as_str().into());
    view.set_label_after(after.text.as_str().into());
    let (LabelAnchor::Left(inset) | LabelAnchor::Right(inset)) = before.anchor;
    view.set_label_inset(inset);
    view.set_label_top(before.container.top);
    view.set_label_background(to_slint_color(before.container.background));
    view.set_label_padding_horizontal(before.container.padding_horizontal);
    view.set_label_padding_vertical(before.container.padding_vertical);
    view.set_label_radius(before.container.border_radius);
    view.set_label_text_color(to_slint_color(before.text_style.color));
    view.set_label_font_weight(before.text_style.font_weight as i32);
    view.set_label_font_size(before.text_style.font_size);
    view.set_show_labels(true);
}

/// Sets an error message in the UI with a prefix.
///
/// Logs the error and updates the SliderView error-message property.
pub fn set_error_with_prefix(ui: &crate::AppWindow, prefix: &str, error: String) {
    let error_message = format!("{}: {}", prefix, error);
    error!("{}", error_message);
    ui.global::<crate::SliderView>()
        .set_error_message(error_message.into());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_conversion_keeps_alpha() {
        let color = to_slint_color(Color::rgba(1, 2, 3, 4));
        assert_eq!(
            (color.red(), color.green(), color.blue(), color.alpha()),
            (1, 2, 3, 4)
        );
    }
}
