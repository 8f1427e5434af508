//! Data model for the service area dataset.
//!
//! The dataset is a three-tier hierarchy of states, districts and
//! sub-districts. Every record carries a URL-safe slug; district slugs share
//! one flat namespace while sub-district slugs are scoped to their district.

pub mod entities;
pub mod lookup;
pub mod recognized;
pub mod reserved;
pub mod table;

pub use entities::{Dataset, DatasetCounts, District, State, Subdistrict};
pub use lookup::ServiceAreaIndex;
pub use recognized::{RECOGNIZED_STATES, recognize_state};
pub use reserved::ReservedSlugs;
pub use table::{RawTable, SourceTables, Tier};
