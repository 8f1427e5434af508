//! Slug normalization and collision resolution for service area datasets.
//!
//! Raw rows for states, districts and sub-districts go through the
//! [`HierarchyBuilder`], which filters to the recognized states and assigns
//! every accepted record a slug unique within its scope. The builder never
//! reads files or the network: row tables and reserved slugs are passed in.
//!
//! # Example
//!
//! ```
//! use areas_core::{HierarchyBuilder, RawTable, ReservedSlugs};
//!
//! fn rows(rows: &[&[&str]]) -> RawTable {
//!     let rows = rows
//!         .iter()
//!         .map(|row| row.iter().map(|cell| cell.to_string()).collect())
//!         .collect();
//!     RawTable::new(Vec::new(), rows)
//! }
//!
//! let reserved = ReservedSlugs::new(["chennai"]);
//! let mut builder = HierarchyBuilder::new(&reserved);
//! builder.add_states(&rows(&[&["1", "33", "TN", "TAMIL NADU"]]))?;
//! builder.add_districts(&rows(&[&["33", "1", "603", "CHENNAI"]]))?;
//! let (dataset, _report) = builder.finish();
//! assert_eq!(dataset.districts[0].slug, "chennai-tamil-nadu");
//! # Ok::<(), areas_core::BuildError>(())
//! ```

pub mod assemble;
pub mod audit;
pub mod builder;
pub mod error;
pub mod normalize;
pub mod report;
pub mod schema;
pub mod scopes;

pub use areas_model::{RawTable, ReservedSlugs, SourceTables, Tier};
pub use assemble::assemble;
pub use audit::{IssueSeverity, SlugIssue, SlugIssueKind, audit_dataset};
pub use builder::{HierarchyBuilder, build_dataset};
pub use error::{BuildError, Result};
pub use normalize::{canonicalize_name, name_slug, slugify};
pub use report::{BuildReport, SlugCollision, TierStats};
pub use schema::{DistrictColumns, RowSchema, StateColumns, SubdistrictColumns};
pub use scopes::{ScopeKey, SlugClaim, SlugScopes};
