//! Entry animations keyed on the active section.
//!
//! Every section body exposes the [`Reveal`] capability. A [`RevealBoard`]
//! holds one binding per section, in section order, and on every change of the
//! active index reveals exactly the binding at that index. Leaving a section
//! hides it again, so coming back replays the animation.
//!
//! The visual side is plain CSS: [`RevealMotion::style`] produces the inline
//! `opacity` / `transform` / `transition` declarations for either state.

/// Hidden/visible contract shared by all section bodies.
pub trait Reveal {
    fn set_revealed(&mut self, revealed: bool);
    fn is_revealed(&self) -> bool;
}

/// Seconds between consecutive items of a staggered group.
pub const STAGGER_STEP_SECS: f64 = 0.12;

const FADE_UP_OFFSET_PX: f64 = 40.0;
const FADE_UP_SECS: f64 = 0.6;
const STAGGER_OFFSET_PX: f64 = 30.0;
const STAGGER_SECS: f64 = 0.5;

/// How one element enters the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealMotion {
    /// Rise 40px and fade in over 0.6s after `delay` seconds.
    FadeUp { delay: f64 },
    /// Rise 30px and fade in over 0.5s, delayed by `index × 0.12s`.
    StaggerItem { index: usize },
}

impl RevealMotion {
    pub fn fade_up(delay: f64) -> Self {
        Self::FadeUp { delay }
    }

    pub fn stagger(index: usize) -> Self {
        Self::StaggerItem { index }
    }

    /// Delay before the visible transition starts.
    pub fn delay_secs(&self) -> f64 {
        match *self {
            Self::FadeUp { delay } => delay.max(0.0),
            Self::StaggerItem { index } => index as f64 * STAGGER_STEP_SECS,
        }
    }

    fn offset_px(&self) -> f64 {
        match self {
            Self::FadeUp { .. } => FADE_UP_OFFSET_PX,
            Self::StaggerItem { .. } => STAGGER_OFFSET_PX,
        }
    }

    fn duration_secs(&self) -> f64 {
        match self {
            Self::FadeUp { .. } => FADE_UP_SECS,
            Self::StaggerItem { .. } => STAGGER_SECS,
        }
    }

    /// Inline style for the element in the given state.
    ///
    /// Hiding is immediate; only the reveal is delayed.
    pub fn style(&self, revealed: bool) -> String {
        if revealed {
            format!(
                "opacity: 1; transform: translateY(0px); transition: opacity {d}s ease-out {delay}s, transform {d}s ease-out {delay}s;",
                d = self.duration_secs(),
                delay = round_millis(self.delay_secs()),
            )
        } else {
            format!(
                "opacity: 0; transform: translateY({}px); transition: opacity {d}s ease-out 0s, transform {d}s ease-out 0s;",
                self.offset_px(),
                d = self.duration_secs(),
            )
        }
    }
}

// 3 × 0.12 is 0.36000000000000004 in f64.
fn round_millis(secs: f64) -> f64 {
    (secs * 1000.0).round() / 1000.0
}

/// Per-section bindings, indexed by section position.
#[derive(Default)]
pub struct RevealBoard {
    bindings: Vec<Box<dyn Reveal>>,
    active: Option<usize>,
}

impl RevealBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the binding for the next section and return its index.
    pub fn register(&mut self, binding: Box<dyn Reveal>) -> usize {
        self.bindings.push(binding);
        self.bindings.len() - 1
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Last index passed to [`sync`](Self::sync).
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Reveal the binding at `active` and hide every other one.
    ///
    /// Only bindings whose state actually flips are touched, so repeating the
    /// same index has no effect.
    pub fn sync(&mut self, active: usize) {
        for (index, binding) in self.bindings.iter_mut().enumerate() {
            let revealed = index == active;
            if binding.is_revealed() != revealed {
                binding.set_revealed(revealed);
            }
        }
        self.active = Some(active);
    }
}
