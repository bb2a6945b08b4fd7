//! featmatrix (Feature Support Matrix) - resolve and render per-IDE feature rollout stages
//!
//! This library provides the core functionality for featmatrix, including:
//! - Data models for features, stage sets and resolved cells
//! - Stage resolution (which rollout stage a cell shows) and feature ordering
//! - Data sources for loading the dataset
//! - Configuration file handling
//! - CLI command parsing, execution and output rendering
//!
//! # Example
//!
//! ```
//! use featmatrix::matrix::{build_matrix, IdeOrder};
//! use featmatrix::models::Dataset;
//!
//! let json = r#"[{"feature": "Chat", "ides": {"VSCode": {"ga": {"version": "1.2", "date": "2023-03-01"}}}}]"#;
//! let dataset = Dataset::from_json_str(json).unwrap();
//! let matrix = build_matrix(&dataset, &IdeOrder::default());
//! assert_eq!(matrix.rows[0].cells[0].version, "1.2");
//! ```

pub mod models;
pub mod matrix;
pub mod source;
pub mod config;
pub mod cli;
pub mod utils;
