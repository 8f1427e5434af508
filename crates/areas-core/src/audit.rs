//! Post-build checks of the slug invariants on an assembled dataset.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use areas_model::{Dataset, ReservedSlugs, Tier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IssueSeverity {
    Error,
    Warning,
}

impl IssueSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueSeverity::Error => "error",
            IssueSeverity::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugIssueKind {
    EmptySlug,
    DuplicateDistrictSlug,
    ReservedDistrictSlug,
    DuplicateSubdistrictSlug,
    OrphanDistrict,
    OrphanSubdistrict,
}

impl SlugIssueKind {
    pub fn severity(self) -> IssueSeverity {
        match self {
            SlugIssueKind::EmptySlug => IssueSeverity::Warning,
            _ => IssueSeverity::Error,
        }
    }
}

/// A single invariant violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugIssue {
    pub kind: SlugIssueKind,
    pub tier: Tier,
    /// Source code of the offending record.
    pub code: String,
    pub slug: String,
    pub message: String,
}

impl SlugIssue {
    fn new(kind: SlugIssueKind, tier: Tier, code: &str, slug: &str, message: String) -> Self {
        Self {
            kind,
            tier,
            code: code.to_string(),
            slug: slug.to_string(),
            message,
        }
    }

    pub fn severity(&self) -> IssueSeverity {
        self.kind.severity()
    }
}

/// Check district and sub-district slugs against their scoping rules.
///
/// A dataset produced by the hierarchy builder only fails these checks when
/// a suffixed slug was itself already taken, or when a name slugifies to the
/// empty string.
pub fn audit_dataset(dataset: &Dataset, reserved: &ReservedSlugs) -> Vec<SlugIssue> {
    let mut issues = Vec::new();

    let state_codes: HashSet<&str> = dataset.states.iter().map(|s| s.code.as_str()).collect();
    let mut district_slugs: BTreeSet<&str> = BTreeSet::new();
    for district in &dataset.districts {
        if !state_codes.contains(district.state_code.as_str()) {
            issues.push(SlugIssue::new(
                SlugIssueKind::OrphanDistrict,
                Tier::District,
                &district.code,
                &district.slug,
                format!("state {} is not in the dataset", district.state_code),
            ));
        }
        if district.slug.is_empty() {
            issues.push(SlugIssue::new(
                SlugIssueKind::EmptySlug,
                Tier::District,
                &district.code,
                &district.slug,
                format!("district '{}' has an empty slug", district.name),
            ));
        }
        if reserved.contains(&district.slug) {
            issues.push(SlugIssue::new(
                SlugIssueKind::ReservedDistrictSlug,
                Tier::District,
                &district.code,
                &district.slug,
                format!("slug '{}' is reserved", district.slug),
            ));
        }
        if !district_slugs.insert(district.slug.as_str()) {
            issues.push(SlugIssue::new(
                SlugIssueKind::DuplicateDistrictSlug,
                Tier::District,
                &district.code,
                &district.slug,
                format!("slug '{}' is used by another district", district.slug),
            ));
        }
    }

    let district_codes: HashSet<&str> =
        dataset.districts.iter().map(|d| d.code.as_str()).collect();
    let mut per_district: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for sub in &dataset.subdistricts {
        if !district_codes.contains(sub.district_code.as_str()) {
            issues.push(SlugIssue::new(
                SlugIssueKind::OrphanSubdistrict,
                Tier::Subdistrict,
                &sub.code,
                &sub.slug,
                format!("district {} is not in the dataset", sub.district_code),
            ));
        }
        if sub.slug.is_empty() {
            issues.push(SlugIssue::new(
                SlugIssueKind::EmptySlug,
                Tier::Subdistrict,
                &sub.code,
                &sub.slug,
                format!("subdistrict '{}' has an empty slug", sub.name),
            ));
        }
        let used = per_district.entry(sub.district_code.as_str()).or_default();
        if !used.insert(sub.slug.as_str()) {
            issues.push(SlugIssue::new(
                SlugIssueKind::DuplicateSubdistrictSlug,
                Tier::Subdistrict,
                &sub.code,
                &sub.slug,
                format!(
                    "slug '{}' is used by another subdistrict of district {}",
                    sub.slug, sub.district_code
                ),
            ));
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use areas_model::{District, State};

    fn district(code: &str, slug: &str) -> District {
        District {
            code: code.to_string(),
            state_code: "32".to_string(),
            state_name: "Kerala".to_string(),
            state_slug: "kerala".to_string(),
            name: "X".to_string(),
            slug: slug.to_string(),
        }
    }

    fn kerala() -> State {
        State {
            code: "32".to_string(),
            name: "Kerala".to_string(),
            slug: "kerala".to_string(),
        }
    }

    #[test]
    fn test_clean_dataset_has_no_issues() {
        let dataset = Dataset {
            states: vec![kerala()],
            districts: vec![district("1", "north"), district("2", "north-kerala")],
            subdistricts: Vec::new(),
        };
        assert!(audit_dataset(&dataset, &ReservedSlugs::new(["south"])).is_empty());
    }

    #[test]
    fn test_detects_duplicate_and_reserved() {
        let dataset = Dataset {
            states: vec![kerala()],
            districts: vec![district("1", "north-kerala"), district("2", "north-kerala")],
            subdistricts: Vec::new(),
        };
        let issues = audit_dataset(&dataset, &ReservedSlugs::new(["north-kerala"]));
        let kinds: Vec<SlugIssueKind> = issues.iter().map(|issue| issue.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SlugIssueKind::ReservedDistrictSlug,
                SlugIssueKind::ReservedDistrictSlug,
                SlugIssueKind::DuplicateDistrictSlug,
            ]
        );
        assert_eq!(issues[2].code, "2");
    }

    #[test]
    fn test_empty_slug_is_a_warning() {
        let dataset = Dataset {
            states: vec![kerala()],
            districts: vec![district("1", "")],
            subdistricts: Vec::new(),
        };
        let issues = audit_dataset(&dataset, &ReservedSlugs::default());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity(), IssueSeverity::Warning);
    }
}
