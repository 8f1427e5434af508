use serde::{Deserialize, Serialize};

/// A recognized top-level region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub code: String,
    pub name: String,
    pub slug: String,
}

/// A district, carrying a denormalized copy of its parent state.
///
/// `slug` is unique across every district in a dataset and never collides
/// with a reserved slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct District {
    pub code: String,
    pub state_code: String,
    pub state_name: String,
    pub state_slug: String,
    pub name: String,
    pub slug: String,
}

/// A sub-district, carrying denormalized copies of its district and state.
///
/// `slug` is only unique among sub-districts sharing the same `district_code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subdistrict {
    pub code: String,
    pub district_code: String,
    pub district_name: String,
    pub district_slug: String,
    pub state_code: String,
    pub state_name: String,
    pub state_slug: String,
    pub name: String,
    pub slug: String,
}

/// The generated service area artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub states: Vec<State>,
    pub districts: Vec<District>,
    pub subdistricts: Vec<Subdistrict>,
}

/// Record counts for a dataset, one per tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetCounts {
    pub states: usize,
    pub districts: usize,
    pub subdistricts: usize,
}

impl Dataset {
    pub fn counts(&self) -> DatasetCounts {
        DatasetCounts {
            states: self.states.len(),
            districts: self.districts.len(),
            subdistricts: self.subdistricts.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty() && self.districts.is_empty() && self.subdistricts.is_empty()
    }
}
