//! Scroll progress: the raw fraction and the spring that smooths it.
//!
//! Scroll events arrive as discrete samples, so the bar chases the raw
//! fraction with a damped spring advanced once per animation frame:
//!
//!   a = -stiffness × (position - target) - damping × velocity
//!
//! integrated with semi-implicit Euler. Large frame gaps (a backgrounded tab)
//! are split into small steps so the spring cannot blow up.

use std::time::Duration;

/// Largest single integration step.
const MAX_STEP_SECS: f64 = 0.004;

/// Frame gaps longer than this are treated as this long.
const MAX_FRAME_SECS: f64 = 0.1;

pub const DEFAULT_STIFFNESS: f64 = 100.0;
pub const DEFAULT_DAMPING: f64 = 30.0;
pub const DEFAULT_REST_DELTA: f64 = 0.001;
const DEFAULT_REST_SPEED: f64 = 0.01;

/// Fraction of the scrollable range already travelled, in `[0, 1]`.
///
/// Zero when the content does not overflow the container.
pub fn scroll_fraction(offset: f64, viewport_extent: f64, content_extent: f64) -> f64 {
    let range = content_extent - viewport_extent;
    if !range.is_finite() || range <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    (offset / range).clamp(0.0, 1.0)
}

/// Spring that eases the progress bar toward the latest scroll fraction.
#[derive(Debug, Clone)]
pub struct ProgressSpring {
    position: f64,
    velocity: f64,
    target: f64,
    stiffness: f64,
    damping: f64,
    rest_delta: f64,
    at_rest: bool,
}

impl Default for ProgressSpring {
    fn default() -> Self {
        Self::new(DEFAULT_STIFFNESS, DEFAULT_DAMPING, DEFAULT_REST_DELTA)
    }
}

impl ProgressSpring {
    pub fn new(stiffness: f64, damping: f64, rest_delta: f64) -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            target: 0.0,
            stiffness: stiffness.max(0.1),
            damping: damping.max(0.0),
            rest_delta: rest_delta.abs(),
            at_rest: true,
        }
    }

    /// Current smoothed value, clamped for use as a `scaleX` factor.
    pub fn value(&self) -> f64 {
        self.position.clamp(0.0, 1.0)
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Point the spring at a new fraction. Wakes it if the move is visible.
    pub fn set_target(&mut self, target: f64) {
        let target = if target.is_finite() { target.clamp(0.0, 1.0) } else { 0.0 };
        if (self.target - target).abs() > f64::EPSILON {
            self.target = target;
            self.at_rest = (self.position - target).abs() < self.rest_delta && self.velocity == 0.0;
        }
    }

    /// Advance by one frame. Returns `true` while the spring is still moving.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.at_rest {
            return false;
        }
        let mut remaining = dt.as_secs_f64().min(MAX_FRAME_SECS);
        while remaining > 0.0 {
            let step = remaining.min(MAX_STEP_SECS);
            let displacement = self.position - self.target;
            let acceleration = -self.stiffness * displacement - self.damping * self.velocity;
            self.velocity += acceleration * step;
            self.position += self.velocity * step;
            remaining -= step;
        }
        if (self.position - self.target).abs() < self.rest_delta && self.velocity.abs() < DEFAULT_REST_SPEED {
            self.position = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }
        !self.at_rest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_is_clamped() {
        assert_eq!(scroll_fraction(0.0, 1000.0, 9000.0), 0.0);
        assert_eq!(scroll_fraction(4000.0, 1000.0, 9000.0), 0.5);
        assert_eq!(scroll_fraction(8000.0, 1000.0, 9000.0), 1.0);
        assert_eq!(scroll_fraction(12_000.0, 1000.0, 9000.0), 1.0);
        assert_eq!(scroll_fraction(-10.0, 1000.0, 9000.0), 0.0);
    }

    #[test]
    fn fraction_is_zero_without_overflow() {
        assert_eq!(scroll_fraction(100.0, 1000.0, 1000.0), 0.0);
        assert_eq!(scroll_fraction(100.0, 1000.0, 0.0), 0.0);
    }

    #[test]
    fn fraction_ignores_panel_rounding() {
        // 2600 / 8000 is not a panel boundary; the bar does not snap.
        let f = scroll_fraction(2600.0, 1000.0, 9000.0);
        assert!((f - 0.325).abs() < 1e-12);
    }

    #[test]
    fn spring_settles_on_target() {
        let mut spring = ProgressSpring::default();
        spring.set_target(0.75);
        assert!(!spring.is_at_rest());

        let frame = Duration::from_millis(16);
        let mut frames = 0;
        while spring.advance(frame) {
            frames += 1;
            assert!(frames < 600, "spring failed to settle");
        }
        assert_eq!(spring.value(), 0.75);
    }

    #[test]
    fn spring_moves_continuously() {
        let mut spring = ProgressSpring::default();
        spring.set_target(1.0);
        spring.advance(Duration::from_millis(16));
        let first = spring.value();
        spring.advance(Duration::from_millis(16));
        let second = spring.value();
        assert!(first > 0.0 && first < 1.0);
        assert!(second > first);
    }

    #[test]
    fn idle_spring_stays_put() {
        let mut spring = ProgressSpring::default();
        assert!(!spring.advance(Duration::from_millis(16)));
        assert_eq!(spring.value(), 0.0);
    }

    #[test]
    fn huge_frame_gap_does_not_explode() {
        let mut spring = ProgressSpring::default();
        spring.set_target(1.0);
        spring.advance(Duration::from_secs(30));
        assert!(spring.value().is_finite());
        assert!((0.0..=1.0).contains(&spring.value()));
    }
}
