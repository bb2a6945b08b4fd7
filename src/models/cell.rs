use serde::Serialize;

use super::{DisplayClass, Stage};

/// One tooltip line: a present stage with its version and formatted date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipLine {
    pub stage: Stage,
    pub label: String,
    pub version: String,
    pub formatted_date: String,
}

/// Display record for one feature/IDE cell.
///
/// Computed on every render pass; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedCell {
    pub display_class: DisplayClass,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Empty when no stage is present
    pub tooltip: Vec<TooltipLine>,
}

impl ResolvedCell {
    /// The "not supported" cell
    pub fn na() -> Self {
        ResolvedCell {
            display_class: DisplayClass::Na,
            version: String::new(),
            url: None,
            tooltip: Vec::new(),
        }
    }

    pub fn is_supported_at_all(&self) -> bool {
        self.display_class != DisplayClass::Na
    }

    /// Link to open for this cell; `na` cells never link
    pub fn link(&self) -> Option<&str> {
        if self.is_supported_at_all() {
            self.url.as_deref()
        } else {
            None
        }
    }
}
