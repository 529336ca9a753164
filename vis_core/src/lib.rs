//! # vis-core
//!
//! Target-independent logic behind the VIS landing page: a nine-panel,
//! scroll-snapping page whose navigation dots, progress bar and entry
//! animations all follow one derived value, the active section index.
//!
//! ## Modules
//!
//! - [`sections`] - the fixed section registry
//! - [`tracker`] - scroll position to active index, listener lifecycle
//! - [`navigation`] - validated jump requests and the [`ScrollTarget`] seam
//! - [`progress`] - raw scroll fraction and the smoothing spring
//! - [`reveal`] - the reveal capability and per-section board
//! - [`contact`] - quote request form model
//! - [`config`] - `site.toml`
//!
//! Nothing here touches the DOM; the `landing` crate adapts these types to
//! the browser.
//!
//! ```rust
//! use vis_core::tracker::{ScrollSample, SectionTracker};
//!
//! let mut tracker = SectionTracker::new(9);
//! let token = tracker.attach();
//! assert_eq!(tracker.on_scroll(token, ScrollSample::new(2600.0, 1000.0)), Some(3));
//! ```

pub mod config;
pub mod contact;
pub mod error;
pub mod navigation;
pub mod progress;
pub mod reveal;
pub mod sections;
pub mod tracker;

pub use config::SiteConfig;
pub use error::{ConfigError, NavigationError};
pub use navigation::{NavigationRequest, ScrollBehavior, ScrollTarget};
pub use reveal::{Reveal, RevealBoard, RevealMotion};
pub use sections::{SECTION_COUNT, Section, SectionRegistry};
pub use tracker::{ListenerToken, ScrollSample, ScrollState, SectionTracker};
