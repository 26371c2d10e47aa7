//! Image loading and display logic.
//!
//! Uses `rayon::spawn` for CPU-intensive image decoding operations,
//! then `slint::invoke_from_event_loop` to update UI from the background thread.

use crate::file_utils::PathExt;
use crate::image_loader::{self, DecodedImage};
use crate::slider::{Handle, SliderOptions};
use log::{debug, warn};
use slint::ComponentHandle;
use std::path::PathBuf;

/// Which SliderView image property a decoded file goes into.
#[derive(Debug, Clone, Copy)]
enum ImageSlot {
    Before,
    After,
    Handle,
}

impl ImageSlot {
    fn error_prefix(self) -> &'static str {
        match self {
            ImageSlot::Before => "Failed to load before image",
            ImageSlot::After => "Failed to load after image",
            ImageSlot::Handle => "Failed to load handle image",
        }
    }
}

/// Updates the UI with a decoded image.
fn update_ui_with_image(ui: &crate::AppWindow, slot: ImageSlot, decoded: &DecodedImage) {
    let image = image_loader::create_slint_image(decoded);
    let view = ui.global::<crate::SliderView>();
    match slot {
        ImageSlot::Before => view.set_before_image(image),
        ImageSlot::After => view.set_after_image(image),
        ImageSlot::Handle => view.set_handle_image(image),
    }
}

/// Decodes one image in a background thread and hands it to the UI.
fn load_into_slot(ui: slint::Weak<crate::AppWindow>, path: PathBuf, slot: ImageSlot) {
    rayon::spawn(move || {
        let result = image_loader::load_image_blocking(&path);
        match &result {
            Ok(decoded) => debug!(
                "Decoded {:?} image {} ({}x{})",
                slot,
                path.format_for_log(),
                decoded.width,
                decoded.height
            ),
            Err(e) => warn!("Decoding {} failed: {}", path.format_for_log(), e),
        }

        let _ = slint::invoke_from_event_loop(move || {
            if let Some(ui) = ui.upgrade() {
                match result {
                    Ok(decoded) => update_ui_with_image(&ui, slot, &decoded),
                    Err(error) => {
                        if let ImageSlot::Handle = slot {
                            // keep the default chevrons rather than an empty handle
                            ui.global::<crate::SliderView>().set_custom_handle(false);
                        }
                        crate::ui::set_error_with_prefix(
                            &ui,
                            slot.error_prefix(),
                            error.to_string(),
                        );
                    }
                }
            }
        });
    });
}

/// Loads every image referenced by the options.
pub fn load_and_display_images(
    ui: slint::Weak<crate::AppWindow>,
    options: &SliderOptions<PathBuf>,
) {
    load_into_slot(ui.clone(), options.before_image.clone(), ImageSlot::Before);
    load_into_slot(ui.clone(), options.after_image.clone(), ImageSlot::After);

    if let Handle::Custom(path) = &options.handle {
        load_into_slot(ui, path.clone(), ImageSlot::Handle);
    }
}
