use serde::{Deserialize, Serialize};

/// Rollout stage of a feature on one IDE
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Ga,
    Preview,
    PrivatePreview,
}

impl Stage {
    /// All stages in display order (tooltip lines follow this order)
    pub const ALL: [Stage; 3] = [Stage::Ga, Stage::Preview, Stage::PrivatePreview];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Ga => "ga",
            Stage::Preview => "preview",
            Stage::PrivatePreview => "private_preview",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ga" => Some(Stage::Ga),
            "preview" => Some(Stage::Preview),
            "private_preview" => Some(Stage::PrivatePreview),
            _ => None,
        }
    }

    /// Higher wins when several stages are present
    pub fn precedence(&self) -> u8 {
        match self {
            Stage::Ga => 3,
            Stage::Preview => 2,
            Stage::PrivatePreview => 1,
        }
    }

    /// Tooltip label: underscores become spaces, upper-cased ("PRIVATE PREVIEW")
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ").to_uppercase()
    }

    pub fn display_class(&self) -> DisplayClass {
        match self {
            Stage::Ga => DisplayClass::Supported,
            Stage::Preview => DisplayClass::Preview,
            Stage::PrivatePreview => DisplayClass::PrivatePreview,
        }
    }
}

/// How a resolved cell is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayClass {
    Supported,
    Preview,
    PrivatePreview,
    Na,
}

impl DisplayClass {
    /// CSS class name used by the HTML renderer
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayClass::Supported => "supported",
            DisplayClass::Preview => "preview",
            DisplayClass::PrivatePreview => "private_preview",
            DisplayClass::Na => "na",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_is_distinct_and_ordered() {
        assert!(Stage::Ga.precedence() > Stage::Preview.precedence());
        assert!(Stage::Preview.precedence() > Stage::PrivatePreview.precedence());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Stage::Ga.label(), "GA");
        assert_eq!(Stage::Preview.label(), "PREVIEW");
        assert_eq!(Stage::PrivatePreview.label(), "PRIVATE PREVIEW");
    }

    #[test]
    fn test_round_trip_keys() {
        for stage in Stage::ALL {
            assert_eq!(Stage::from_str(stage.as_str()), Some(stage));
        }
        assert_eq!(Stage::from_str("beta"), None);
    }

    #[test]
    fn test_display_class_mapping() {
        assert_eq!(Stage::Ga.display_class(), DisplayClass::Supported);
        assert_eq!(Stage::Preview.display_class(), DisplayClass::Preview);
        assert_eq!(Stage::PrivatePreview.display_class(), DisplayClass::PrivatePreview);
        assert_eq!(DisplayClass::PrivatePreview.as_str(), "private_preview");
    }
}
