use std::collections::HashMap;

use crate::entities::{Dataset, District, State, Subdistrict};

/// Read-side lookups over a generated dataset.
///
/// District and sub-district listings are sorted by display name; lookups by
/// slug follow the scoping rules of the dataset (districts are flat,
/// sub-districts are keyed by their district's slug).
#[derive(Debug, Clone)]
pub struct ServiceAreaIndex<'a> {
    state_by_slug: HashMap<&'a str, &'a State>,
    district_by_slug: HashMap<&'a str, &'a District>,
    subdistrict_by_key: HashMap<String, &'a Subdistrict>,
    districts_by_state: HashMap<&'a str, Vec<&'a District>>,
    subdistricts_by_district: HashMap<&'a str, Vec<&'a Subdistrict>>,
}

impl<'a> ServiceAreaIndex<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        let state_by_slug = dataset
            .states
            .iter()
            .map(|state| (state.slug.as_str(), state))
            .collect();
        let district_by_slug = dataset
            .districts
            .iter()
            .map(|district| (district.slug.as_str(), district))
            .collect();
        let subdistrict_by_key = dataset
            .subdistricts
            .iter()
            .map(|sub| (subdistrict_key(&sub.district_slug, &sub.slug), sub))
            .collect();

        let mut districts_by_state: HashMap<&str, Vec<&District>> = HashMap::new();
        for district in &dataset.districts {
            districts_by_state
                .entry(district.state_slug.as_str())
                .or_default()
                .push(district);
        }
        for list in districts_by_state.values_mut() {
            list.sort_by_cached_key(|district| name_sort_key(&district.name));
        }

        let mut subdistricts_by_district: HashMap<&str, Vec<&Subdistrict>> = HashMap::new();
        for sub in &dataset.subdistricts {
            subdistricts_by_district
                .entry(sub.district_slug.as_str())
                .or_default()
                .push(sub);
        }
        for list in subdistricts_by_district.values_mut() {
            list.sort_by_cached_key(|sub| name_sort_key(&sub.name));
        }

        Self {
            state_by_slug,
            district_by_slug,
            subdistrict_by_key,
            districts_by_state,
            subdistricts_by_district,
        }
    }

    pub fn state_by_slug(&self, slug: &str) -> Option<&'a State> {
        self.state_by_slug.get(slug).copied()
    }

    pub fn district_by_slug(&self, slug: &str) -> Option<&'a District> {
        self.district_by_slug.get(slug).copied()
    }

    pub fn districts_by_state_slug(&self, state_slug: &str) -> &[&'a District] {
        self.districts_by_state
            .get(state_slug)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn subdistricts_by_district_slug(&self, district_slug: &str) -> &[&'a Subdistrict] {
        self.subdistricts_by_district
            .get(district_slug)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn subdistrict_by_slugs(
        &self,
        district_slug: &str,
        subdistrict_slug: &str,
    ) -> Option<&'a Subdistrict> {
        self.subdistrict_by_key
            .get(&subdistrict_key(district_slug, subdistrict_slug))
            .copied()
    }
}

fn subdistrict_key(district_slug: &str, subdistrict_slug: &str) -> String {
    format!("{district_slug}::{subdistrict_slug}")
}

// Case-insensitive first, exact spelling as tie-break.
fn name_sort_key(name: &str) -> (String, String) {
    (name.to_lowercase(), name.to_string())
}
