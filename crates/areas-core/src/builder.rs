//! Builds the state → district → sub-district hierarchy from raw rows.
//!
//! Tiers must be added in order. Each record is resolved against the records
//! already accepted one tier up: a district whose state was not accepted is
//! dropped, and so is every sub-district under it. Dropping is silent; it is
//! counted in the [`BuildReport`] and logged at debug level.
//!
//! Slugs are assigned in source row order, which is the only tie-break:
//! - districts share one flat scope pre-seeded with the reserved slugs; a
//!   taken slug gets the state slug appended
//! - sub-districts are unique per district; a taken slug gets the district
//!   slug appended

use std::collections::HashMap;

use tracing::{debug, info, info_span, warn};

use areas_model::{
    Dataset, District, RawTable, ReservedSlugs, SourceTables, State, Subdistrict, Tier,
    recognize_state,
};

use crate::assemble::assemble;
use crate::error::Result;
use crate::normalize::{canonicalize_name, name_slug, slugify};
use crate::report::{BuildReport, SlugCollision};
use crate::schema::{RowRef, RowSchema};
use crate::scopes::{ScopeKey, SlugClaim, SlugScopes};

pub struct HierarchyBuilder {
    schema: RowSchema,
    scopes: SlugScopes,
    report: BuildReport,
    states: Vec<State>,
    state_by_code: HashMap<String, usize>,
    districts: Vec<District>,
    district_by_code: HashMap<String, usize>,
    subdistricts: Vec<Subdistrict>,
}

impl HierarchyBuilder {
    /// Create a builder whose district scope starts with `reserved`.
    pub fn new(reserved: &ReservedSlugs) -> Self {
        Self::with_schema(reserved, RowSchema::default())
    }

    pub fn with_schema(reserved: &ReservedSlugs, schema: RowSchema) -> Self {
        let mut scopes = SlugScopes::new();
        scopes.seed(ScopeKey::Districts, reserved.iter());
        let report = BuildReport {
            reserved: reserved.len(),
            ..BuildReport::default()
        };
        Self {
            schema,
            scopes,
            report,
            states: Vec::new(),
            state_by_code: HashMap::new(),
            districts: Vec::new(),
            district_by_code: HashMap::new(),
            subdistricts: Vec::new(),
        }
    }

    /// Accept the rows whose state name is in the recognized table.
    pub fn add_states(&mut self, table: &RawTable) -> Result<()> {
        let _span = info_span!("states", rows = table.len()).entered();
        let columns = self.schema.state;
        for (index, cells) in table.rows.iter().enumerate() {
            let row = RowRef::new(Tier::State, table.line(index), cells);
            self.report.states.seen += 1;
            let label = row.field(columns.name, "name")?;
            let Some(name) = recognize_state(label) else {
                debug!(line = row.line, state = label, "skipping unrecognized state");
                self.report.states.filtered += 1;
                continue;
            };
            let code = row.field(columns.code, "code")?.to_string();
            let state = State {
                code: code.clone(),
                name: name.to_string(),
                slug: slugify(name),
            };
            self.state_by_code.insert(code, self.states.len());
            self.states.push(state);
            self.report.states.accepted += 1;
        }
        info!(accepted = self.report.states.accepted, "states resolved");
        Ok(())
    }

    /// Accept districts of accepted states and give each a slug that is
    /// unique across all districts and the reserved set.
    pub fn add_districts(&mut self, table: &RawTable) -> Result<()> {
        let _span = info_span!("districts", rows = table.len()).entered();
        let columns = self.schema.district;
        for (index, cells) in table.rows.iter().enumerate() {
            let row = RowRef::new(Tier::District, table.line(index), cells);
            self.report.districts.seen += 1;
            let state_code = row.field(columns.state_code, "stateCode")?;
            let Some(&state_idx) = self.state_by_code.get(state_code) else {
                debug!(line = row.line, state_code, "skipping district of unknown state");
                self.report.districts.filtered += 1;
                continue;
            };
            let code = row.field(columns.code, "code")?.to_string();
            let raw_name = row.field(columns.name, "name")?;
            let state = &self.states[state_idx];

            let claim = self.scopes.claim(
                ScopeKey::Districts,
                name_slug(raw_name),
                &state.slug,
            );
            record_claim(&mut self.report, Tier::District, &code, &claim);

            let district = District {
                code: code.clone(),
                state_code: state.code.clone(),
                state_name: state.name.clone(),
                state_slug: state.slug.clone(),
                name: canonicalize_name(raw_name),
                slug: claim.into_slug(),
            };
            self.district_by_code.insert(code, self.districts.len());
            self.districts.push(district);
            self.report.districts.accepted += 1;
        }
        info!(accepted = self.report.districts.accepted, "districts resolved");
        Ok(())
    }

    /// Accept sub-districts of accepted districts and give each a slug that
    /// is unique within its district.
    pub fn add_subdistricts(&mut self, table: &RawTable) -> Result<()> {
        let _span = info_span!("subdistricts", rows = table.len()).entered();
        let columns = self.schema.subdistrict;
        for (index, cells) in table.rows.iter().enumerate() {
            let row = RowRef::new(Tier::Subdistrict, table.line(index), cells);
            self.report.subdistricts.seen += 1;
            let state_code = row.field(columns.state_code, "stateCode")?;
            if !self.state_by_code.contains_key(state_code) {
                self.report.subdistricts.filtered += 1;
                continue;
            }
            let district_code = row.field(columns.district_code, "districtCode")?;
            let Some(&district_idx) = self.district_by_code.get(district_code) else {
                debug!(
                    line = row.line,
                    district_code, "skipping subdistrict of unknown district"
                );
                self.report.subdistricts.filtered += 1;
                continue;
            };
            let code = row.field(columns.code, "code")?.to_string();
            let raw_name = row.field(columns.name, "name")?;
            let district = &self.districts[district_idx];

            let claim = self.scopes.claim(
                ScopeKey::District(district.code.clone()),
                name_slug(raw_name),
                &district.slug,
            );
            record_claim(&mut self.report, Tier::Subdistrict, &code, &claim);

            self.subdistricts.push(Subdistrict {
                code,
                district_code: district.code.clone(),
                district_name: district.name.clone(),
                district_slug: district.slug.clone(),
                state_code: district.state_code.clone(),
                state_name: district.state_name.clone(),
                state_slug: district.state_slug.clone(),
                name: canonicalize_name(raw_name),
                slug: claim.into_slug(),
            });
            self.report.subdistricts.accepted += 1;
        }
        info!(
            accepted = self.report.subdistricts.accepted,
            "subdistricts resolved"
        );
        Ok(())
    }

    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    /// Assemble everything accepted so far.
    pub fn finish(self) -> (Dataset, BuildReport) {
        let dataset = assemble(self.states, self.districts, self.subdistricts);
        (dataset, self.report)
    }
}

fn record_claim(report: &mut BuildReport, tier: Tier, code: &str, claim: &SlugClaim) {
    match claim {
        SlugClaim::Fresh(_) => {}
        SlugClaim::Disambiguated { base, slug } => {
            debug!(%tier, code, base = %base, slug = %slug, "slug disambiguated");
            report.disambiguated.push(SlugCollision {
                tier,
                code: code.to_string(),
                base: base.clone(),
                slug: slug.clone(),
            });
        }
        SlugClaim::Collided { base, slug } => {
            warn!(
                %tier,
                code,
                base = %base,
                slug = %slug,
                "suffixed slug is already taken; keeping duplicate"
            );
            report.unresolved.push(SlugCollision {
                tier,
                code: code.to_string(),
                base: base.clone(),
                slug: slug.clone(),
            });
        }
    }
}

/// Run all three tiers in order and assemble the dataset.
pub fn build_dataset(
    tables: &SourceTables,
    reserved: &ReservedSlugs,
    schema: RowSchema,
) -> Result<(Dataset, BuildReport)> {
    let mut builder = HierarchyBuilder::with_schema(reserved, schema);
    builder.add_states(&tables.states)?;
    builder.add_districts(&tables.districts)?;
    builder.add_subdistricts(&tables.subdistricts)?;
    Ok(builder.finish())
}
