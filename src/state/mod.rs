//! State shared between the UI callbacks.

use crate::slider::{SliderOptions, SliderWidget};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

/// Application-wide state container. Lives on the UI thread only.
pub struct AppState {
    pub slider: Rc<RefCell<SliderWidget<PathBuf>>>,
    /// Delivers autoplay animation frames; stopped whenever no animation runs.
    pub frame_timer: Rc<slint::Timer>,
}

impl AppState {
    pub fn new(options: SliderOptions<PathBuf>) -> Self {
        Self {
            slider: Rc::new(RefCell::new(SliderWidget::new(options))),
            frame_timer: Rc::new(slint::Timer::default()),
        }
    }
}
