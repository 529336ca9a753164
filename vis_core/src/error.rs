//! Error types shared by the tracker and the configuration loader.

use thiserror::Error;

/// A navigation request that cannot be honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The requested section does not exist.
    #[error("section {target} is out of range (page has {count} sections)")]
    OutOfRange { target: usize, count: usize },
}

/// Failure while reading `site.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("site config declares no sections")]
    EmptySections,
    /// The page renders a fixed set of panels; the list must match it.
    #[error("site config lists {found} sections, the page has {expected}")]
    SectionCount { found: usize, expected: usize },

    /// Spring stiffness and damping must be finite and strictly positive.
    #[error("progress spring needs positive stiffness and damping (got {stiffness}, {damping})")]
    NonPositiveSpring { stiffness: f64, damping: f64 },
}
