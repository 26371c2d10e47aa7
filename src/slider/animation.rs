//! Timed interpolation primitives and the autoplay cycle built from them.
//!
//! Animations are pure functions of elapsed time: a [`RunningAnimation`] is
//! sampled against an [`Instant`] on every frame, and cancelling it is simply
//! dropping it.

use std::time::{Duration, Instant};

/// Easing curve applied to normalized progress `t` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t.clamp(0.0, 1.0),
        }
    }
}

/// Interpolates from wherever the previous step ended toward `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub target: f32,
    pub duration: Duration,
    pub easing: Easing,
}

impl Timing {
    pub fn linear(target: f32, duration: Duration) -> Self {
        Self {
            target,
            duration,
            easing: Easing::Linear,
        }
    }

    fn interpolate(&self, from: f32, progress: f32) -> f32 {
        from + (self.target - from) * self.easing.apply(progress)
    }
}

/// Steps played one after another.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    steps: Vec<Timing>,
}

impl Sequence {
    pub fn new(steps: Vec<Timing>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Timing] {
        &self.steps
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|step| step.duration).sum()
    }

    /// Value the sequence settles on once every step has finished.
    fn end_value(&self, origin: f32) -> f32 {
        self.steps.last().map(|step| step.target).unwrap_or(origin)
    }

    /// Starts playing the sequence in a loop forever, without reversing.
    ///
    /// The first pass starts from `origin`; every later pass starts from the
    /// value the previous pass ended on.
    pub fn repeat_forever(self, origin: f32, started_at: Instant) -> RunningAnimation {
        RunningAnimation {
            sequence: self,
            origin,
            started_at,
        }
    }
}

/// An infinitely repeating sequence anchored at a start instant.
#[derive(Debug, Clone)]
pub struct RunningAnimation {
    sequence: Sequence,
    origin: f32,
    started_at: Instant,
}

impl RunningAnimation {
    /// Animated value at `now`. Instants before the start sample as the start.
    pub fn sample(&self, now: Instant) -> f32 {
        let cycle = self.sequence.total_duration().as_nanos();
        let loop_start = self.sequence.end_value(self.origin);
        if cycle == 0 {
            return loop_start;
        }

        let elapsed = now.saturating_duration_since(self.started_at).as_nanos();
        let mut offset = elapsed % cycle;
        let mut from = if elapsed < cycle {
            self.origin
        } else {
            loop_start
        };

        for step in self.sequence.steps() {
            let step_len = step.duration.as_nanos();
            if offset < step_len {
                let progress = (offset as f64 / step_len as f64) as f32;
                return step.interpolate(from, progress);
            }
            offset -= step_len;
            from = step.target;
        }

        from
    }
}

/// The autoplay cycle for a container of `width`:
/// sweep to the right edge, across to the left edge, then back to the middle.
pub fn autoplay_cycle(width: f32, duration: Duration) -> Sequence {
    let half = duration / 2;
    Sequence::new(vec![
        Timing::linear(width, half),
        Timing::linear(0.0, duration),
        Timing::linear(width / 2.0, half),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_autoplay_leg_timings() {
        let cycle = autoplay_cycle(200.0, ms(4000));
        let steps = cycle.steps();

        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0], Timing::linear(200.0, ms(2000)));
        assert_eq!(steps[1], Timing::linear(0.0, ms(4000)));
        assert_eq!(steps[2], Timing::linear(100.0, ms(2000)));
        assert_eq!(cycle.total_duration(), ms(8000));
    }

    #[test]
    fn test_sample_first_pass() {
        let start = Instant::now();
        let anim = autoplay_cycle(200.0, ms(4000)).repeat_forever(100.0, start);

        assert_close(anim.sample(start), 100.0);
        assert_close(anim.sample(start + ms(1000)), 150.0);
        assert_close(anim.sample(start + ms(2000)), 200.0);
        assert_close(anim.sample(start + ms(4000)), 100.0);
        assert_close(anim.sample(start + ms(6000)), 0.0);
        assert_close(anim.sample(start + ms(7000)), 50.0);
    }

    #[test]
    fn test_sample_repeats_without_reversing() {
        let start = Instant::now();
        // start away from the loop point so the first pass is distinguishable
        let anim = autoplay_cycle(200.0, ms(4000)).repeat_forever(0.0, start);

        assert_close(anim.sample(start + ms(1000)), 100.0);
        // second pass begins at the end of leg 3 (100) and heads right again
        assert_close(anim.sample(start + ms(8000)), 100.0);
        assert_close(anim.sample(start + ms(9000)), 150.0);
        assert_close(anim.sample(start + ms(10000)), 200.0);
        // many cycles later the shape is identical
        assert_close(anim.sample(start + ms(80_000 + 9000)), 150.0);
    }

    #[test]
    fn test_sample_before_start_is_origin() {
        let start = Instant::now() + ms(500);
        let anim = autoplay_cycle(200.0, ms(4000)).repeat_forever(42.0, start);
        assert_close(anim.sample(start - ms(100)), 42.0);
    }

    #[test]
    fn test_zero_duration_settles_at_sequence_end() {
        let start = Instant::now();
        let anim = autoplay_cycle(300.0, Duration::ZERO).repeat_forever(10.0, start);
        assert_close(anim.sample(start + ms(5)), 150.0);
    }

    #[test]
    fn test_linear_easing_clamps() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::Linear.apply(0.25), 0.25);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
    }
}
