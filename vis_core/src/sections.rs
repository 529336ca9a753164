//! The fixed, ordered list of page sections.

use serde::Deserialize;

/// Number of panels on the landing page.
pub const SECTION_COUNT: usize = 9;

/// Anchor ids and labels used when `site.toml` does not override them.
pub const DEFAULT_SECTIONS: [(&str, &str); SECTION_COUNT] = [
    ("hero", "Главная"),
    ("stats", "Цифры"),
    ("catalog", "Каталог"),
    ("about", "О нас"),
    ("services", "Услуги"),
    ("projects", "Объекты"),
    ("testimonials", "Отзывы"),
    ("quote", "Расчёт"),
    ("contacts", "Контакты"),
];

/// Index of the quote (contact form) panel, target of the primary CTA.
pub const QUOTE_SECTION: usize = 7;

/// Index of the catalog panel, target of the secondary CTA.
pub const CATALOG_SECTION: usize = 2;

/// One full-viewport panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub index: usize,
    pub id: String,
    pub label: String,
}

/// `[[sections]]` entry in `site.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SectionEntry {
    pub id: String,
    pub label: String,
}

/// Immutable registry built once at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    /// Build a registry, numbering entries in declaration order.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = SectionEntry>,
    {
        let sections = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| Section {
                index,
                id: entry.id,
                label: entry.label,
            })
            .collect();
        Self { sections }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Label for a section, or an empty string for unknown indices.
    pub fn label(&self, index: usize) -> &str {
        self.get(index).map(|s| s.label.as_str()).unwrap_or_default()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::from_entries(DEFAULT_SECTIONS.iter().map(|(id, label)| SectionEntry {
            id: (*id).to_string(),
            label: (*label).to_string(),
        }))
    }
}
