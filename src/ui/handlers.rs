//! Event handlers for UI callbacks.
//!
//! Sets up all Logic callbacks (layout_measured, drag_moved, toggle_autoplay)
//! and the frame timer that drives autoplay.

use crate::config::ANIMATION_FRAME_INTERVAL;
use crate::slider::SliderWidget;
use crate::state::AppState;
use crate::ui::image_display::load_and_display_images;
use crate::ui::{set_layers, set_static_options};
use log::debug;
use slint::{ComponentHandle, Timer, TimerMode};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;

type SharedSlider = Rc<RefCell<SliderWidget<PathBuf>>>;

/// Pushes the slider's current layers into the view.
fn refresh_layers(ui: &slint::Weak<crate::AppWindow>, slider: &SharedSlider) {
    // the borrow is released before any property is set
    let layers = slider.borrow().layers();
    if let Some(ui) = ui.upgrade() {
        set_layers(&ui, &layers);
    }
}

/// Starts the frame timer while an animation runs and stops it otherwise.
fn sync_frame_timer(timer: &Timer, ui: &slint::Weak<crate::AppWindow>, slider: &SharedSlider) {
    let animating = slider.borrow().is_animating();

    if !animating {
        if timer.running() {
            debug!("Stopping frame timer");
            timer.stop();
        }
        return;
    }

    if timer.running() {
        return;
    }

    debug!("Starting frame timer");
    let ui = ui.clone();
    let slider = slider.clone();
    timer.start(TimerMode::Repeated, ANIMATION_FRAME_INTERVAL, move || {
        let moved = slider.borrow_mut().tick(Instant::now());
        if moved.is_some() {
            refresh_layers(&ui, &slider);
        }
    });
}

/// Sets up all UI event handlers for the application.
///
/// Pushes the initial options to the view, starts decoding the images and
/// registers callbacks for layout, drag and autoplay toggling.
pub fn setup_handlers(ui: &crate::AppWindow, state: &AppState) {
    {
        let slider = state.slider.borrow();
        set_static_options(ui, slider.options());
        set_layers(ui, &slider.layers());
        load_and_display_images(ui.as_weak(), slider.options());
    }

    // Layout handler
    // Every layout pass re-centers the divider and restarts autoplay.
    ui.global::<crate::Logic>().on_layout_measured({
        let ui_handle = ui.as_weak();
        let slider = state.slider.clone();
        let timer = state.frame_timer.clone();
        move |offset_x, width| {
            slider.borrow_mut().measure(offset_x, width, Instant::now());
            refresh_layers(&ui_handle, &slider);
            sync_frame_timer(&timer, &ui_handle, &slider);
        }
    });

    // Drag handler
    ui.global::<crate::Logic>().on_drag_moved({
        let ui_handle = ui.as_weak();
        let slider = state.slider.clone();
        move |absolute_x| {
            let moved = slider.borrow_mut().drag_to(absolute_x);
            if moved.is_some() {
                refresh_layers(&ui_handle, &slider);
            }
        }
    });

    // Autoplay toggle handler
    ui.global::<crate::Logic>().on_toggle_autoplay({
        let ui_handle = ui.as_weak();
        let slider = state.slider.clone();
        let timer = state.frame_timer.clone();
        move || {
            let enabled = {
                let mut slider = slider.borrow_mut();
                let enabled = !slider.is_auto_playing();
                slider.set_auto_play(enabled, Instant::now());
                enabled
            };

            if let Some(ui) = ui_handle.upgrade() {
                ui.global::<crate::SliderView>().set_auto_playing(enabled);
            }
            sync_frame_timer(&timer, &ui_handle, &slider);
            refresh_layers(&ui_handle, &slider);
        }
    });

    // the component's own init-time report ran before any handler existed
    ui.invoke_report_layout();
}
