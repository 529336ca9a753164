//! End-to-end behaviour of the tracker against a simulated scroll container.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use pretty_assertions::assert_eq;
use vis_core::{
    NavigationError, RevealBoard, ScrollBehavior, ScrollSample, ScrollTarget, SectionTracker, SiteConfig,
    reveal::Reveal, sections::SECTION_COUNT,
};

/// Container of nine 1000px panels that records every scroll command.
struct FakeContainer {
    extent: Cell<f64>,
    offset: Cell<f64>,
    commands: RefCell<Vec<(f64, ScrollBehavior)>>,
}

impl FakeContainer {
    fn new(extent: f64) -> Self {
        Self {
            extent: Cell::new(extent),
            offset: Cell::new(0.0),
            commands: RefCell::new(Vec::new()),
        }
    }

    fn sample(&self) -> ScrollSample {
        ScrollSample::new(self.offset.get(), self.extent.get())
            .with_content_extent(self.extent.get() * SECTION_COUNT as f64)
    }

    /// Play the last smooth scroll as a series of intermediate scroll events.
    fn settle(&self, tracker: &mut SectionTracker, token: vis_core::ListenerToken) -> Vec<usize> {
        let Some((goal, _)) = self.commands.borrow().last().copied() else {
            return Vec::new();
        };
        let start = self.offset.get();
        let mut seen = Vec::new();
        for step in 1..=10 {
            self.offset.set(start + (goal - start) * f64::from(step) / 10.0);
            if let Some(index) = tracker.on_scroll(token, self.sample()) {
                seen.push(index);
            }
        }
        seen
    }
}

impl ScrollTarget for FakeContainer {
    fn viewport_extent(&self) -> f64 {
        self.extent.get()
    }

    fn scroll_to(&self, offset: f64, behavior: ScrollBehavior) {
        self.commands.borrow_mut().push((offset, behavior));
    }
}

#[test]
fn scenario_offsets_from_overview() {
    let mut tracker = SectionTracker::new(SECTION_COUNT);
    let token = tracker.attach();

    assert_eq!(tracker.on_scroll(token, ScrollSample::new(2600.0, 1000.0)), Some(3));
    assert_eq!(tracker.on_scroll(token, ScrollSample::new(450.0, 1000.0)), Some(0));
    assert_eq!(tracker.on_scroll(token, ScrollSample::new(0.0, 1000.0)), Some(0));
    assert_eq!(tracker.on_scroll(token, ScrollSample::new(8000.0, 1000.0)), Some(8));
    assert_eq!(tracker.on_scroll(token, ScrollSample::new(9999.0, 1000.0)), Some(8));
}

#[test]
fn scroll_handler_is_idempotent() {
    let mut tracker = SectionTracker::new(SECTION_COUNT);
    let token = tracker.attach();
    let sample = ScrollSample::new(3400.0, 1000.0).with_content_extent(9000.0);

    let first = tracker.on_scroll(token, sample);
    let state = tracker.state();
    let second = tracker.on_scroll(token, sample);

    assert_eq!(first, second);
    assert_eq!(tracker.state(), state);
}

#[test]
fn navigate_does_not_move_index_until_scroll_settles() {
    let container = FakeContainer::new(1000.0);
    let mut tracker = SectionTracker::new(SECTION_COUNT);
    let token = tracker.attach();

    let request = tracker
        .request_navigate(7, &container, ScrollBehavior::Smooth)
        .unwrap();
    assert_eq!(request.target_index(), 7);
    assert_eq!(*container.commands.borrow(), vec![(7000.0, ScrollBehavior::Smooth)]);
    assert_eq!(tracker.active_index(), 0);

    let seen = container.settle(&mut tracker, token);
    assert_eq!(seen.last(), Some(&7));
    assert!(seen.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(tracker.active_index(), 7);
}

#[test]
fn round_trip_holds_for_every_section() {
    for k in 0..SECTION_COUNT {
        let container = FakeContainer::new(768.0);
        let mut tracker = SectionTracker::new(SECTION_COUNT);
        let token = tracker.attach();
        tracker
            .request_navigate(k, &container, ScrollBehavior::Instant)
            .unwrap();
        container.settle(&mut tracker, token);
        assert_eq!(tracker.active_index(), k);
    }
}

#[test]
fn out_of_range_navigation_is_rejected_without_scrolling() {
    let container = FakeContainer::new(1000.0);
    let tracker = SectionTracker::new(SECTION_COUNT);

    let err = tracker
        .request_navigate(SECTION_COUNT, &container, ScrollBehavior::Smooth)
        .unwrap_err();
    assert_eq!(err, NavigationError::OutOfRange { target: 9, count: 9 });
    assert!(container.commands.borrow().is_empty());
}

#[test]
fn events_after_teardown_are_dropped() {
    let container = FakeContainer::new(1000.0);
    let mut tracker = SectionTracker::new(SECTION_COUNT);
    let token = tracker.attach();
    container.offset.set(2000.0);
    tracker.on_scroll(token, container.sample());
    let before = tracker.state();

    tracker.detach(token);
    container.offset.set(6000.0);
    assert_eq!(tracker.on_scroll(token, container.sample()), None);
    assert_eq!(tracker.state(), before);
    assert!(!tracker.is_attached());
}

#[test]
fn progress_follows_raw_fraction_not_index() {
    let mut tracker = SectionTracker::new(SECTION_COUNT);
    let token = tracker.attach();
    tracker.on_scroll(token, ScrollSample::new(2600.0, 1000.0).with_content_extent(9000.0));

    let state = tracker.state();
    assert_eq!(state.active_index, 3);
    assert!((state.fraction() - 2600.0 / 8000.0).abs() < 1e-12);
}

/// Reveal binding whose state the test can read after handing it to the board.
struct SharedFlag(Rc<Cell<bool>>);

impl Reveal for SharedFlag {
    fn set_revealed(&mut self, revealed: bool) {
        self.0.set(revealed);
    }

    fn is_revealed(&self) -> bool {
        self.0.get()
    }
}

fn revealed(flags: &[Rc<Cell<bool>>]) -> Vec<usize> {
    flags.iter().enumerate().filter(|(_, f)| f.get()).map(|(i, _)| i).collect()
}

#[test]
fn reveal_board_tracks_active_section() {
    let mut tracker = SectionTracker::new(SECTION_COUNT);
    let token = tracker.attach();
    let mut board = RevealBoard::new();
    let flags: Vec<Rc<Cell<bool>>> = (0..SECTION_COUNT).map(|_| Rc::new(Cell::new(false))).collect();
    for flag in &flags {
        board.register(Box::new(SharedFlag(Rc::clone(flag))));
    }

    let mut seen = Vec::new();
    for offset in [0.0, 1200.0, 4700.0, 1200.0] {
        if let Some(active) = tracker.on_scroll(token, ScrollSample::new(offset, 1000.0)) {
            board.sync(active);
        }
        seen.push(revealed(&flags));
    }

    assert_eq!(seen, vec![vec![0], vec![1], vec![5], vec![1]]);
    assert_eq!(board.active(), Some(1));
    assert!(!flags[5].get(), "section left behind hides again");
}

#[test]
fn embedded_site_config_is_valid() {
    let config = SiteConfig::from_toml_str(include_str!("../../landing/site.toml")).unwrap();
    let registry = config.registry();
    assert_eq!(registry.len(), SECTION_COUNT);
    assert_eq!(registry.label(7), "Расчёт");
}
