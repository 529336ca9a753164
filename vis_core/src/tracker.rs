//! Scroll-section tracker: the single source of truth for "which panel is in view".
//!
//! The active index is derived, never assigned. Every scroll event carries a
//! [`ScrollSample`] (offset plus the live panel height), the tracker rounds
//! `offset / extent` to the nearest panel and clamps it into range. Navigation
//! goes the other way: [`SectionTracker::request_navigate`] only asks the
//! container to move; the index follows once the resulting scroll events
//! arrive.
//!
//! # Listener lifecycle
//!
//! The DOM side calls [`SectionTracker::attach`] when the container element
//! exists and gets a [`ListenerToken`] back. Each scroll callback presents its
//! token; after [`SectionTracker::detach`] (or a newer `attach` for a
//! replacement container) the old token is dead and its events are dropped
//! without touching state.

use tracing::{debug, trace, warn};

use crate::error::NavigationError;
use crate::navigation::{NavigationRequest, ScrollBehavior, ScrollTarget};
use crate::progress::scroll_fraction;

/// Nearest panel for a scroll offset, clamped to `[0, count - 1]`.
///
/// Degenerate input (no sections, NaN, non-positive extent) maps to 0.
pub fn active_index_for(offset: f64, viewport_extent: f64, count: usize) -> usize {
    if count == 0 || !offset.is_finite() || !viewport_extent.is_finite() || viewport_extent <= 0.0 {
        return 0;
    }
    let nearest = (offset.max(0.0) / viewport_extent).round();
    let last = count - 1;
    if nearest >= last as f64 {
        last
    } else {
        nearest as usize
    }
}

/// Geometry read from the container during one scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSample {
    pub offset: f64,
    pub viewport_extent: f64,
    /// Total scrollable height of the container's content.
    pub content_extent: f64,
}

impl ScrollSample {
    pub fn new(offset: f64, viewport_extent: f64) -> Self {
        Self {
            offset,
            viewport_extent,
            content_extent: 0.0,
        }
    }

    pub fn with_content_extent(mut self, content_extent: f64) -> Self {
        self.content_extent = content_extent;
        self
    }
}

/// Last observed scroll position and the panel it resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    pub scroll_offset: f64,
    pub viewport_extent: f64,
    pub content_extent: f64,
    pub active_index: usize,
}

impl ScrollState {
    /// Raw, un-rounded scroll progress in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        scroll_fraction(self.scroll_offset, self.viewport_extent, self.content_extent)
    }
}

/// Handle tying scroll callbacks to one attachment of the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerToken(u64);

#[derive(Debug, Clone)]
pub struct SectionTracker {
    section_count: usize,
    state: ScrollState,
    generation: u64,
    live: Option<ListenerToken>,
}

impl SectionTracker {
    pub fn new(section_count: usize) -> Self {
        Self {
            section_count,
            state: ScrollState::default(),
            generation: 0,
            live: None,
        }
    }

    pub fn section_count(&self) -> usize {
        self.section_count
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn active_index(&self) -> usize {
        self.state.active_index
    }

    pub fn is_attached(&self) -> bool {
        self.live.is_some()
    }

    /// Start accepting scroll events. Any token handed out earlier is revoked.
    pub fn attach(&mut self) -> ListenerToken {
        self.generation += 1;
        let token = ListenerToken(self.generation);
        if self.live.replace(token).is_some() {
            debug!(generation = self.generation, "scroll listener re-attached to a new container");
        }
        token
    }

    /// Stop accepting events for `token`. Releasing a stale token is a no-op.
    pub fn detach(&mut self, token: ListenerToken) {
        if self.live == Some(token) {
            self.live = None;
            debug!(generation = token.0, "scroll listener detached");
        }
    }

    /// Recompute the active panel from a scroll event.
    ///
    /// Returns `None` when the token is no longer live; the state is left
    /// untouched in that case.
    pub fn on_scroll(&mut self, token: ListenerToken, sample: ScrollSample) -> Option<usize> {
        if self.live != Some(token) {
            return None;
        }
        let active_index = active_index_for(sample.offset, sample.viewport_extent, self.section_count);
        if active_index != self.state.active_index {
            trace!(from = self.state.active_index, to = active_index, "active section changed");
        }
        self.state = ScrollState {
            scroll_offset: sample.offset.max(0.0),
            viewport_extent: sample.viewport_extent,
            content_extent: sample.content_extent,
            active_index,
        };
        Some(active_index)
    }

    /// Ask `target` to scroll to panel `target_index`.
    ///
    /// The active index is not changed here; it follows from the scroll
    /// events the container emits while it moves.
    pub fn request_navigate<T: ScrollTarget + ?Sized>(
        &self,
        target_index: usize,
        target: &T,
        behavior: ScrollBehavior,
    ) -> Result<NavigationRequest, NavigationError> {
        let request = NavigationRequest::new(target_index, self.section_count).inspect_err(|err| {
            warn!(%err, "navigation request rejected");
        })?;
        let offset = request.dispatch(target, behavior);
        debug!(target_index, offset, ?behavior, "navigating to section");
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::SECTION_COUNT;
    use pretty_assertions::assert_eq;

    #[test]
    fn rounds_to_nearest_panel() {
        assert_eq!(active_index_for(2600.0, 1000.0, SECTION_COUNT), 3);
        assert_eq!(active_index_for(450.0, 1000.0, SECTION_COUNT), 0);
        assert_eq!(active_index_for(500.0, 1000.0, SECTION_COUNT), 1);
        assert_eq!(active_index_for(1499.0, 1000.0, SECTION_COUNT), 1);
    }

    #[test]
    fn clamps_to_last_panel() {
        assert_eq!(active_index_for(8000.0, 1000.0, SECTION_COUNT), 8);
        assert_eq!(active_index_for(8600.0, 1000.0, SECTION_COUNT), 8);
        assert_eq!(active_index_for(1.0e12, 1000.0, SECTION_COUNT), 8);
    }

    #[test]
    fn degenerate_geometry_maps_to_first_panel() {
        assert_eq!(active_index_for(0.0, 1000.0, SECTION_COUNT), 0);
        assert_eq!(active_index_for(-300.0, 1000.0, SECTION_COUNT), 0);
        assert_eq!(active_index_for(2600.0, 0.0, SECTION_COUNT), 0);
        assert_eq!(active_index_for(f64::NAN, 1000.0, SECTION_COUNT), 0);
        assert_eq!(active_index_for(2600.0, f64::INFINITY, SECTION_COUNT), 0);
        assert_eq!(active_index_for(2600.0, 1000.0, 0), 0);
    }

    #[test]
    fn detached_tracker_ignores_events() {
        let mut tracker = SectionTracker::new(SECTION_COUNT);
        let token = tracker.attach();
        tracker.detach(token);

        assert_eq!(tracker.on_scroll(token, ScrollSample::new(5000.0, 1000.0)), None);
        assert_eq!(tracker.active_index(), 0);
        assert_eq!(tracker.state(), ScrollState::default());
    }

    #[test]
    fn reattach_revokes_previous_token() {
        let mut tracker = SectionTracker::new(SECTION_COUNT);
        let old = tracker.attach();
        let new = tracker.attach();

        assert_eq!(tracker.on_scroll(old, ScrollSample::new(3000.0, 1000.0)), None);
        assert_eq!(tracker.on_scroll(new, ScrollSample::new(3000.0, 1000.0)), Some(3));

        // Releasing the stale token must not detach the live one.
        tracker.detach(old);
        assert!(tracker.is_attached());
    }

    #[test]
    fn resize_uses_live_extent() {
        let mut tracker = SectionTracker::new(SECTION_COUNT);
        let token = tracker.attach();
        assert_eq!(tracker.on_scroll(token, ScrollSample::new(2400.0, 800.0)), Some(3));
        // Same offset after the window grew.
        assert_eq!(tracker.on_scroll(token, ScrollSample::new(2400.0, 1200.0)), Some(2));
    }
}
