//! Site configuration (`site.toml`).
//!
//! The landing binary embeds the file at compile time and parses it on start.
//! Every table is optional; missing keys take the defaults below. A file that
//! fails to parse or validate is reported and replaced by the defaults.

use serde::Deserialize;
use tracing::warn;

use crate::error::ConfigError;
use crate::navigation::ScrollBehavior;
use crate::progress::{DEFAULT_DAMPING, DEFAULT_REST_DELTA, DEFAULT_STIFFNESS, ProgressSpring};
use crate::sections::{DEFAULT_SECTIONS, SECTION_COUNT, SectionEntry, SectionRegistry};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub tracker: TrackerConfig,
    pub progress: SpringConfig,
    pub sections: Vec<SectionEntry>,
}

/// Which height one panel is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtentSource {
    /// The scroll container's own client height.
    #[default]
    Container,
    /// `window.innerHeight`.
    Window,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Animate navigation jumps instead of jumping instantly.
    pub smooth_scroll: bool,
    pub extent_source: ExtentSource,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            smooth_scroll: true,
            extent_source: ExtentSource::Container,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub rest_delta: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: DEFAULT_STIFFNESS,
            damping: DEFAULT_DAMPING,
            rest_delta: DEFAULT_REST_DELTA,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            tracker: TrackerConfig::default(),
            progress: SpringConfig::default(),
            sections: DEFAULT_SECTIONS
                .iter()
                .map(|(id, label)| SectionEntry {
                    id: (*id).to_string(),
                    label: (*label).to_string(),
                })
                .collect(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`from_toml_str`](Self::from_toml_str) but never fails.
    pub fn load_or_default(content: &str) -> Self {
        match Self::from_toml_str(content) {
            Ok(config) => config,
            Err(err) => {
                warn!(%err, "invalid site config, using defaults");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.sections.is_empty() {
            return Err(ConfigError::EmptySections);
        }
        if self.sections.len() != SECTION_COUNT {
            return Err(ConfigError::SectionCount {
                found: self.sections.len(),
                expected: SECTION_COUNT,
            });
        }
        let SpringConfig { stiffness, damping, .. } = self.progress;
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(stiffness) || !positive(damping) {
            return Err(ConfigError::NonPositiveSpring { stiffness, damping });
        }
        Ok(())
    }

    pub fn registry(&self) -> SectionRegistry {
        SectionRegistry::from_entries(self.sections.iter().cloned())
    }

    pub fn spring(&self) -> ProgressSpring {
        ProgressSpring::new(self.progress.stiffness, self.progress.damping, self.progress.rest_delta)
    }

    pub fn scroll_behavior(&self) -> ScrollBehavior {
        if self.tracker.smooth_scroll {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Instant
        }
    }
}
