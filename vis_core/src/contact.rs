//! Quote request form model.
//!
//! The form only captures input. Submitting is a placeholder that records the
//! request and returns [`SubmitOutcome::NotSent`]; there is no validation and
//! no transport.

use serde::Serialize;
use tracing::info;

/// What the customer needs a quote for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestCategory {
    PressurePipe,
    NonPressurePipe,
    FlatSheet,
    CorrugatedSheet,
    ColoredCorrugatedSheet,
}

impl RequestCategory {
    pub const ALL: [RequestCategory; 5] = [
        Self::PressurePipe,
        Self::NonPressurePipe,
        Self::FlatSheet,
        Self::CorrugatedSheet,
        Self::ColoredCorrugatedSheet,
    ];

    /// `<option value=..>` used by the select element.
    pub fn value(self) -> &'static str {
        match self {
            Self::PressurePipe => "napornye",
            Self::NonPressurePipe => "beznapornye",
            Self::FlatSheet => "ploskiy",
            Self::CorrugatedSheet => "volnovoy",
            Self::ColoredCorrugatedSheet => "volnakolor",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::PressurePipe => "Трубы напорные",
            Self::NonPressurePipe => "Трубы безнапорные",
            Self::FlatSheet => "Шифер плоский",
            Self::CorrugatedSheet => "Шифер волновой",
            Self::ColoredCorrugatedSheet => "Волнаколор",
        }
    }

    /// Inverse of [`value`](Self::value). The empty placeholder maps to `None`.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.value() == value)
    }
}

/// Placeholder text of the disabled first option.
pub const CATEGORY_PLACEHOLDER: &str = "Что нужно";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub contact: String,
    pub category: Option<RequestCategory>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Captured locally; nothing left the page.
    NotSent,
}

impl ContactRequest {
    pub fn set_category_value(&mut self, value: &str) {
        self.category = RequestCategory::from_value(value);
    }

    /// JSON form of the request, for the console log.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn submit(&self) -> SubmitOutcome {
        info!(
            category = self.category.map(RequestCategory::value).unwrap_or(""),
            "quote request captured (submission not wired)"
        );
        SubmitOutcome::NotSent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn values_map_both_ways() {
        for category in RequestCategory::ALL {
            assert_eq!(RequestCategory::from_value(category.value()), Some(category));
        }
        assert_eq!(RequestCategory::from_value(""), None);
        assert_eq!(RequestCategory::from_value("kirpich"), None);
    }

    #[test]
    fn submit_is_placeholder() {
        let mut request = ContactRequest {
            name: "Иван".into(),
            contact: "+7 914 000-00-00".into(),
            category: None,
        };
        request.set_category_value("volnakolor");
        assert_eq!(request.category, Some(RequestCategory::ColoredCorrugatedSheet));
        assert_eq!(request.submit(), SubmitOutcome::NotSent);
    }

    #[test]
    fn serializes_category_in_snake_case() {
        let request = ContactRequest {
            name: "ООО СтройГрупп".into(),
            contact: "max".into(),
            category: Some(RequestCategory::NonPressurePipe),
        };
        let json = request.to_json();
        assert!(json.contains("\"category\":\"non_pressure_pipe\""));
        assert!(json.contains("ООО СтройГрупп"));
    }
}
