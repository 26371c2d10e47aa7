//! Before/after comparison slider state.
//!
//! [`SliderWidget`] owns the measured container bounds and the divider
//! position, and decides which of the two drivers (pointer drag or autoplay
//! animation) may move the divider. It knows nothing about the UI toolkit:
//! the host feeds it layout, drag and frame events and renders the
//! [`SliderLayers`] it derives.

pub mod animation;
pub mod layers;
pub mod options;

use animation::{RunningAnimation, autoplay_cycle};
use log::debug;
use std::time::Instant;

pub use layers::SliderLayers;
pub use options::{Color, Handle, SliderOptions};

/// Measured bounding box of the widget, in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerBounds {
    pub offset_x: f32,
    pub width: f32,
}

impl ContainerBounds {
    /// Bounds with non-finite values treated as zero and negative widths clamped.
    pub fn sanitized(offset_x: f32, width: f32) -> Self {
        let finite_or_zero = |v: f32| if v.is_finite() { v } else { 0.0 };
        Self {
            offset_x: finite_or_zero(offset_x),
            width: finite_or_zero(width).max(0.0),
        }
    }

    pub fn is_measured(&self) -> bool {
        self.width > 0.0
    }

    /// Maps a window x coordinate into the container and clamps it to its width.
    pub fn clamp_local(&self, absolute_x: f32) -> f32 {
        (absolute_x - self.offset_x).clamp(0.0, self.width)
    }
}

/// Which source currently drives the divider. Only one exists at a time.
#[derive(Debug)]
pub enum DriveMode {
    /// Pointer drags move the divider.
    Manual,
    /// The divider follows the autoplay animation; drags are ignored.
    /// `animation` is `None` until the container has a width.
    Autoplay { animation: Option<RunningAnimation> },
}

pub struct SliderWidget<I> {
    options: SliderOptions<I>,
    bounds: ContainerBounds,
    position: f32,
    mode: DriveMode,
}

impl<I> SliderWidget<I> {
    pub fn new(options: SliderOptions<I>) -> Self {
        let mode = if options.auto_play {
            DriveMode::Autoplay { animation: None }
        } else {
            DriveMode::Manual
        };

        Self {
            options,
            bounds: ContainerBounds::default(),
            position: 0.0,
            mode,
        }
    }

    pub fn options(&self) -> &SliderOptions<I> {
        &self.options
    }

    /// Current divider offset from the container's left edge.
    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn mode(&self) -> &DriveMode {
        &self.mode
    }

    pub fn is_auto_playing(&self) -> bool {
        matches!(self.mode, DriveMode::Autoplay { .. })
    }

    /// True while an animation is running and frames should be delivered.
    pub fn is_animating(&self) -> bool {
        matches!(self.mode, DriveMode::Autoplay { animation: Some(_) })
    }

    /// Records a layout pass result.
    ///
    /// The divider always returns to the middle of the new bounds. Any running
    /// animation is dropped first; autoplay then restarts from the middle.
    pub fn measure(&mut self, offset_x: f32, width: f32, now: Instant) {
        self.cancel_animation();

        self.bounds = ContainerBounds::sanitized(offset_x, width);
        self.position = self.bounds.width / 2.0;
        debug!(
            "Slider measured: offset_x={} width={} position={}",
            self.bounds.offset_x, self.bounds.width, self.position
        );

        if self.is_auto_playing() {
            self.start_animation(now);
        }
    }

    /// Applies one drag update at window coordinate `absolute_x`.
    ///
    /// Returns the new position, or `None` when the update was ignored.
    pub fn drag_to(&mut self, absolute_x: f32) -> Option<f32> {
        if self.is_auto_playing() || !self.bounds.is_measured() || !absolute_x.is_finite() {
            return None;
        }

        self.position = self.bounds.clamp_local(absolute_x);
        Some(self.position)
    }

    /// Switches between manual and autoplay driving.
    pub fn set_auto_play(&mut self, enabled: bool, now: Instant) {
        if enabled == self.is_auto_playing() {
            return;
        }

        self.options.auto_play = enabled;
        if enabled {
            debug!("Autoplay enabled");
            self.mode = DriveMode::Autoplay { animation: None };
            self.start_animation(now);
        } else {
            debug!("Autoplay disabled at position {}", self.position);
            self.mode = DriveMode::Manual;
        }
    }

    /// Advances the running animation to `now`.
    ///
    /// Returns the new position, or `None` when no animation is running.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        let DriveMode::Autoplay {
            animation: Some(animation),
        } = &self.mode
        else {
            return None;
        };

        self.position = animation.sample(now).clamp(0.0, self.bounds.width);
        Some(self.position)
    }

    /// Derived geometry for the current position.
    pub fn layers(&self) -> SliderLayers {
        layers::compute(&self.options, self.bounds.width, self.position)
    }

    fn start_animation(&mut self, now: Instant) {
        if !self.bounds.is_measured() {
            return;
        }

        let DriveMode::Autoplay { animation } = &mut self.mode else {
            return;
        };

        let sequence = autoplay_cycle(self.bounds.width, self.options.auto_play_duration);
        debug!(
            "Autoplay started: width={} cycle={:?}",
            self.bounds.width,
            sequence.total_duration()
        );
        *animation = Some(sequence.repeat_forever(self.position, now));
    }

    fn cancel_animation(&mut self) {
        if let DriveMode::Autoplay { animation } = &mut self.mode {
            if animation.take().is_some() {
                debug!("Autoplay animation cancelled");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn manual_widget() -> SliderWidget<&'static str> {
        SliderWidget::new(SliderOptions::new("before", "after"))
    }

    fn autoplay_widget(duration_ms: u64) -> SliderWidget<&'static str> {
        SliderWidget::new(
            SliderOptions::new("before", "after")
                .with_auto_play(true)
                .with_auto_play_duration(Duration::from_millis(duration_ms)),
        )
    }

    #[test]
    fn test_measure_centers_divider() {
        let mut widget = manual_widget();
        widget.measure(0.0, 300.0, Instant::now());

        assert_eq!(widget.position(), 150.0);
        let divider = widget.layers().divider.expect("measured");
        assert_eq!(divider.overlay_width, 150.0);
        assert_eq!(divider.line_x, 149.0);
        assert_eq!(divider.handle_x, 135.0);
    }

    #[test]
    fn test_unmeasured_widget_renders_only_after_image() {
        let widget = manual_widget();
        let layers = widget.layers();

        assert!(layers.divider.is_none());
        assert_eq!(layers.image_width, 0.0);
    }

    #[test]
    fn test_drag_maps_and_clamps() {
        let mut widget = manual_widget();
        widget.measure(50.0, 300.0, Instant::now());

        assert_eq!(widget.drag_to(150.0), Some(100.0));
        assert_eq!(widget.drag_to(450.0), Some(300.0));
        assert_eq!(widget.drag_to(10.0), Some(0.0));
        assert_eq!(widget.position(), 0.0);
    }

    #[test]
    fn test_drag_ignored_before_measurement() {
        let mut widget = manual_widget();
        assert_eq!(widget.drag_to(100.0), None);
        assert_eq!(widget.position(), 0.0);
    }

    #[test]
    fn test_drag_ignores_non_finite_input() {
        let mut widget = manual_widget();
        widget.measure(0.0, 300.0, Instant::now());
        assert_eq!(widget.drag_to(f32::NAN), None);
        assert_eq!(widget.position(), 150.0);
    }

    #[test]
    fn test_drag_ignored_while_auto_playing() {
        let start = Instant::now();
        let mut widget = autoplay_widget(4000);
        widget.measure(0.0, 200.0, start);

        assert_eq!(widget.drag_to(20.0), None);
        assert_eq!(widget.position(), 100.0);
    }

    #[test]
    fn test_remeasure_resets_to_new_midpoint() {
        let mut widget = manual_widget();
        widget.measure(0.0, 300.0, Instant::now());
        widget.drag_to(280.0);

        widget.measure(0.0, 500.0, Instant::now());
        assert_eq!(widget.position(), 250.0);
    }

    #[test]
    fn test_autoplay_waits_for_width() {
        let start = Instant::now();
        let mut widget = autoplay_widget(4000);

        assert!(widget.is_auto_playing());
        assert!(!widget.is_animating());
        assert_eq!(widget.tick(start + Duration::from_millis(100)), None);

        widget.measure(0.0, 0.0, start);
        assert!(!widget.is_animating());

        widget.measure(0.0, 200.0, start);
        assert!(widget.is_animating());
    }

    #[test]
    fn test_autoplay_follows_cycle() {
        let start = Instant::now();
        let mut widget = autoplay_widget(4000);
        widget.measure(0.0, 200.0, start);

        let at = |ms: u64| start + Duration::from_millis(ms);
        assert_eq!(widget.tick(at(1000)), Some(150.0));
        assert_eq!(widget.tick(at(2000)), Some(200.0));
        assert_eq!(widget.tick(at(6000)), Some(0.0));
        assert_eq!(widget.tick(at(8000)), Some(100.0));
        assert_eq!(widget.tick(at(10000)), Some(200.0));
    }

    #[test]
    fn test_disabling_autoplay_stops_animation() {
        let start = Instant::now();
        let mut widget = autoplay_widget(4000);
        widget.measure(0.0, 200.0, start);
        widget.tick(start + Duration::from_millis(1000));

        widget.set_auto_play(false, start + Duration::from_millis(1000));
        assert!(matches!(widget.mode(), DriveMode::Manual));
        assert_eq!(widget.tick(start + Duration::from_millis(3000)), None);
        assert_eq!(widget.position(), 150.0);

        // manual driving takes over
        assert_eq!(widget.drag_to(20.0), Some(20.0));
    }

    #[test]
    fn test_enabling_autoplay_starts_from_current_position() {
        let start = Instant::now();
        let mut widget = manual_widget();
        widget.measure(0.0, 200.0, start);
        widget.drag_to(0.0);

        widget.set_auto_play(true, start);
        assert!(widget.is_animating());
        // leg 1 runs from 0 to 200 over 2500ms
        assert_eq!(widget.tick(start + Duration::from_millis(1250)), Some(100.0));
    }

    #[test]
    fn test_remeasure_replaces_running_animation() {
        let start = Instant::now();
        let mut widget = autoplay_widget(4000);
        widget.measure(0.0, 200.0, start);
        widget.tick(start + Duration::from_millis(1000));

        let remeasured = start + Duration::from_millis(1000);
        widget.measure(0.0, 400.0, remeasured);
        assert_eq!(widget.position(), 200.0);
        // new animation heads for the new right edge
        assert_eq!(widget.tick(remeasured + Duration::from_millis(2000)), Some(400.0));
    }

    #[test]
    fn test_sanitized_bounds() {
        let bounds = ContainerBounds::sanitized(f32::NAN, -10.0);
        assert_eq!(bounds, ContainerBounds::default());
        assert!(!bounds.is_measured());
    }
}
