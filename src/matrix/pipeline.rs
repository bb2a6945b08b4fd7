// Resolve-and-sort pipeline
// Dataset in, ordered rows of resolved cells out. No rendering happens here.

use serde::Serialize;
use serde_json::Value;

use super::{resolve_opt, sort_features};
use crate::models::{Dataset, Feature, ResolvedCell};

/// IDE columns shown when nothing else is configured
pub const DEFAULT_IDE_ORDER: [&str; 6] = [
    "VSCode",
    "Visual Studio",
    "JetBrains",
    "Xcode",
    "Vim/Neovim",
    "Eclipse",
];

/// Ordered list of IDE identifiers, one matrix column each
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdeOrder(Vec<String>);

impl IdeOrder {
    pub fn new<I, S>(ides: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        IdeOrder(ides.into_iter().map(Into::into).collect())
    }

    /// Parse a comma-separated list; blank items are dropped.
    /// Returns `None` when nothing remains.
    pub fn parse(list: &str) -> Option<Self> {
        let ides: Vec<String> = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if ides.is_empty() {
            None
        } else {
            Some(IdeOrder(ides))
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for IdeOrder {
    fn default() -> Self {
        IdeOrder::new(DEFAULT_IDE_ORDER)
    }
}

/// One matrix row: a feature and its cells in column order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixRow {
    pub feature_name: String,
    pub cells: Vec<ResolvedCell>,
}

/// Sorted, resolved matrix. Keeps the sorted raw features for re-export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Matrix {
    pub columns: IdeOrder,
    pub rows: Vec<MatrixRow>,
    #[serde(skip)]
    pub features: Vec<Feature>,
}

impl Matrix {
    /// Raw records in matrix order, in the source JSON shape
    pub fn raw_records(&self) -> Vec<Value> {
        self.features.iter().map(Feature::to_value).collect()
    }
}

/// Resolve the cells of one feature for the given columns
pub fn resolve_row(feature: &Feature, columns: &IdeOrder) -> MatrixRow {
    MatrixRow {
        feature_name: feature.name.clone(),
        cells: columns
            .iter()
            .map(|ide| resolve_opt(feature.stages_for(ide)))
            .collect(),
    }
}

/// Sort the dataset and resolve one cell per feature per column
pub fn build_matrix(dataset: &Dataset, columns: &IdeOrder) -> Matrix {
    let features = sort_features(&dataset.features);
    let rows = features.iter().map(|f| resolve_row(f, columns)).collect();
    log::debug!(
        "built matrix: {} features x {} IDEs",
        features.len(),
        columns.len()
    );
    Matrix {
        columns: columns.clone(),
        rows,
        features,
    }
}
