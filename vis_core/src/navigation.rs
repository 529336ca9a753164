//! Jumping to a section: the one-shot request and the scroll container seam.
//!
//! The tracker never moves the page itself. It validates a
//! [`NavigationRequest`] and hands the resulting offset to whatever implements
//! [`ScrollTarget`]; in the browser that is the snapping container element,
//! in tests a recorder.

use crate::error::NavigationError;

/// How the container should travel to a new offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// Something that can be scrolled vertically to an absolute offset.
pub trait ScrollTarget {
    /// Height of one section panel, read live on every call.
    fn viewport_extent(&self) -> f64;

    /// Move the scroll position to `offset`. Animation is the implementor's
    /// business.
    fn scroll_to(&self, offset: f64, behavior: ScrollBehavior);
}

impl<T: ScrollTarget + ?Sized> ScrollTarget for &T {
    fn viewport_extent(&self) -> f64 {
        (**self).viewport_extent()
    }

    fn scroll_to(&self, offset: f64, behavior: ScrollBehavior) {
        (**self).scroll_to(offset, behavior)
    }
}

/// A validated request to bring `target_index` into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationRequest {
    target_index: usize,
}

impl NavigationRequest {
    /// Reject indices outside `[0, section_count)`.
    pub fn new(target_index: usize, section_count: usize) -> Result<Self, NavigationError> {
        if target_index >= section_count {
            return Err(NavigationError::OutOfRange {
                target: target_index,
                count: section_count,
            });
        }
        Ok(Self { target_index })
    }

    pub fn target_index(&self) -> usize {
        self.target_index
    }

    /// Offset at which the target panel is snapped to the top.
    pub fn offset(&self, viewport_extent: f64) -> f64 {
        self.target_index as f64 * viewport_extent.max(0.0)
    }

    /// Issue the scroll command. Returns the offset that was requested.
    pub fn dispatch<T: ScrollTarget + ?Sized>(self, target: &T, behavior: ScrollBehavior) -> f64 {
        let offset = self.offset(target.viewport_extent());
        target.scroll_to(offset, behavior);
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    struct Recorder {
        extent: f64,
        calls: RefCell<Vec<(f64, ScrollBehavior)>>,
    }

    impl ScrollTarget for Recorder {
        fn viewport_extent(&self) -> f64 {
            self.extent
        }

        fn scroll_to(&self, offset: f64, behavior: ScrollBehavior) {
            self.calls.borrow_mut().push((offset, behavior));
        }
    }

    #[test]
    fn rejects_index_past_last_section() {
        assert_eq!(
            NavigationRequest::new(9, 9),
            Err(NavigationError::OutOfRange { target: 9, count: 9 })
        );
        assert!(NavigationRequest::new(8, 9).is_ok());
    }

    #[test]
    fn dispatch_scrolls_to_panel_multiple() {
        let recorder = Recorder {
            extent: 1000.0,
            calls: RefCell::new(Vec::new()),
        };
        let request = NavigationRequest::new(7, 9).unwrap();
        let offset = request.dispatch(&recorder, ScrollBehavior::Smooth);

        assert_eq!(offset, 7000.0);
        assert_eq!(*recorder.calls.borrow(), vec![(7000.0, ScrollBehavior::Smooth)]);
    }

    #[test]
    fn negative_extent_never_yields_negative_offset() {
        let request = NavigationRequest::new(3, 9).unwrap();
        assert_eq!(request.offset(-50.0), 0.0);
    }
}
