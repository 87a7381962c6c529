//! ksort Core - Kind-based ordering engine for Kubernetes manifests
//!
//! This crate turns raw manifest text into documents ordered for a safe
//! install:
//! - `manifest`: splits text on `---` separators and classifies each document by kind
//! - `kind`: the install precedence table and kind ranking
//! - `sort`: stable ordering of documents by kind rank
//!
//! ```
//! use ksort_core::{extract, sort_by_kind};
//!
//! let records = extract("app.yaml", "kind: Deployment\n---\nkind: Namespace\n");
//! let sorted = sort_by_kind(records);
//! assert_eq!(sorted[0].kind.as_str(), "Namespace");
//! ```

pub mod kind;
pub mod manifest;
pub mod sort;

pub use kind::{INSTALL_ORDER, INSTALL_ORDER_REVISION, Kind, KindOrder};
pub use manifest::{ManifestRecord, extract, extract_all};
pub use sort::sort_by_kind;
