//! DOM side of the section tracker.
//!
//! [`use_page_scroll`] owns everything with a lifetime: the tracker, the
//! `scroll` listener on the snapping container and the animation-frame loop
//! that eases the progress bar. Components only see the [`PageScroll`]
//! handle.

use std::time::Duration;

use leptos::html::Div;
use leptos::prelude::*;
use vis_core::config::ExtentSource;
use vis_core::progress::{ProgressSpring, scroll_fraction};
use vis_core::{ListenerToken, ScrollBehavior, ScrollSample, ScrollTarget, SectionTracker, SiteConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, ScrollToOptions};

use crate::console;

/// The snapping container seen through [`ScrollTarget`].
#[derive(Clone)]
pub struct ContainerScroller {
    element: HtmlElement,
    source: ExtentSource,
}

impl ContainerScroller {
    pub fn new(element: HtmlElement, source: ExtentSource) -> Self {
        Self { element, source }
    }

    fn sample(&self) -> ScrollSample {
        ScrollSample::new(f64::from(self.element.scroll_top()), self.viewport_extent())
            .with_content_extent(f64::from(self.element.scroll_height()))
    }

    /// Raw progress against the container's own height, whatever the panel
    /// extent source.
    fn fraction(&self) -> f64 {
        scroll_fraction(
            f64::from(self.element.scroll_top()),
            f64::from(self.element.client_height()),
            f64::from(self.element.scroll_height()),
        )
    }
}

fn window_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

impl ScrollTarget for ContainerScroller {
    fn viewport_extent(&self) -> f64 {
        let container = f64::from(self.element.client_height());
        match self.source {
            ExtentSource::Container if container > 0.0 => container,
            _ => window_height(),
        }
    }

    fn scroll_to(&self, offset: f64, behavior: ScrollBehavior) {
        let options = ScrollToOptions::new();
        options.set_top(offset);
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        self.element.scroll_to_with_scroll_to_options(&options);
    }
}

/// An attached `scroll` listener. Dropping it removes the DOM listener and
/// releases the tracker token.
struct ScrollListener {
    element: HtmlElement,
    callback: Closure<dyn FnMut()>,
    token: ListenerToken,
    tracker: StoredValue<SectionTracker, LocalStorage>,
}

impl ScrollListener {
    fn attach<F>(
        scroller: ContainerScroller,
        tracker: StoredValue<SectionTracker, LocalStorage>,
        on_change: F,
    ) -> Option<Self>
    where
        F: Fn(usize, f64) + Clone + 'static,
    {
        let token = tracker.try_update_value(|t| t.attach())?;
        let element = scroller.element.clone();

        let handle = move || {
            let sample = scroller.sample();
            // None once this token has been revoked or the tracker disposed.
            let Some(active) = tracker.try_update_value(|t| t.on_scroll(token, sample)).flatten() else {
                return;
            };
            on_change(active, scroller.fraction());
        };

        let callback = Closure::<dyn FnMut()>::new(handle.clone());
        if let Err(err) = element.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
            console::warn("scroll", &listener_failure("attach", &err));
            tracker.try_update_value(|t| t.detach(token));
            return None;
        }

        // Pick up a position restored by the browser before the first event.
        handle();

        Some(Self {
            element,
            callback,
            token,
            tracker,
        })
    }
}

fn listener_failure(action: &str, err: &impl std::fmt::Debug) -> String {
    format!("could not {action} listener: {err:?}")
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .element
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            console::warn("scroll", &listener_failure("remove", &err));
        }
        self.tracker.try_update_value(|t| t.detach(self.token));
    }
}

/// Spring plus the bookkeeping for its animation-frame loop.
struct ProgressDriver {
    spring: ProgressSpring,
    running: bool,
    last_frame: f64,
}

impl ProgressDriver {
    fn new(spring: ProgressSpring) -> Self {
        Self {
            spring,
            running: false,
            last_frame: 0.0,
        }
    }

    fn retarget(driver: StoredValue<Self, LocalStorage>, fraction: f64, set_progress: WriteSignal<f64>) {
        let start = driver
            .try_update_value(|d| {
                d.spring.set_target(fraction);
                if d.running || d.spring.is_at_rest() {
                    return false;
                }
                d.running = true;
                d.last_frame = js_sys::Date::now();
                true
            })
            .unwrap_or(false);
        if start {
            request_animation_frame(move || Self::frame(driver, set_progress));
        }
    }

    fn frame(driver: StoredValue<Self, LocalStorage>, set_progress: WriteSignal<f64>) {
        let now = js_sys::Date::now();
        let Some((value, moving)) = driver.try_update_value(|d| {
            let dt = Duration::from_secs_f64(((now - d.last_frame) / 1000.0).max(0.0));
            d.last_frame = now;
            let moving = d.spring.advance(dt);
            d.running = moving;
            (d.spring.value(), moving)
        }) else {
            return;
        };
        set_progress.try_set(value);
        if moving {
            request_animation_frame(move || Self::frame(driver, set_progress));
        }
    }
}

/// Handle shared by the page components.
#[derive(Clone, Copy)]
pub struct PageScroll {
    /// Bind to the snapping container with `node_ref`.
    pub container: NodeRef<Div>,
    pub active: ReadSignal<usize>,
    /// Smoothed scroll progress in `[0, 1]`.
    pub progress: ReadSignal<f64>,
    tracker: StoredValue<SectionTracker, LocalStorage>,
    behavior: ScrollBehavior,
    source: ExtentSource,
}

impl PageScroll {
    /// Scroll the container to section `index`. The active index follows from
    /// the scroll events this produces.
    pub fn navigate(&self, index: usize) {
        let Some(element) = self.container.get_untracked() else {
            console::warn("nav", "scroll container is not mounted yet");
            return;
        };
        let scroller = ContainerScroller::new(element.into(), self.source);
        if let Some(Err(err)) = self
            .tracker
            .try_with_value(|t| t.request_navigate(index, &scroller, self.behavior))
        {
            console::warn("nav", &err.to_string());
        }
    }
}

/// Create the tracker and wire it to the container once it is mounted.
pub fn use_page_scroll(config: &SiteConfig) -> PageScroll {
    let container = NodeRef::<Div>::new();
    let (active, set_active) = signal(0usize);
    let (progress, set_progress) = signal(0.0f64);
    let tracker = StoredValue::new_local(SectionTracker::new(config.registry().len()));
    let driver = StoredValue::new_local(ProgressDriver::new(config.spring()));
    let listener = StoredValue::new_local(None::<ScrollListener>);
    let source = config.tracker.extent_source;

    // Runs when the node ref is filled and again if it is swapped for another
    // element; the previous listener is dropped before the new one attaches.
    Effect::new(move || {
        let Some(element) = container.get() else {
            return;
        };
        listener.try_update_value(|l| {
            l.take();
        });
        let attached = ScrollListener::attach(
            ContainerScroller::new(element.into(), source),
            tracker,
            move |index, fraction| {
                if active.get_untracked() != index {
                    set_active.set(index);
                }
                ProgressDriver::retarget(driver, fraction, set_progress);
            },
        );
        listener.try_update_value(|l| *l = attached);
    });

    on_cleanup(move || {
        listener.try_update_value(|l| {
            l.take();
        });
    });

    PageScroll {
        container,
        active,
        progress,
        tracker,
        behavior: config.scroll_behavior(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn listener_failures_name_the_action() {
        assert_eq!(listener_failure("remove", &"NotFoundError"), "could not remove listener: \"NotFoundError\"");
        assert!(listener_failure("attach", &42).starts_with("could not attach"));
    }
}
