//! End-to-end tests for hierarchy building over in-memory row tables.

use std::collections::{BTreeMap, BTreeSet};

use areas_core::{
    BuildError, RawTable, ReservedSlugs, RowSchema, SourceTables, Tier, audit_dataset,
    build_dataset,
};

fn table(rows: &[&[&str]]) -> RawTable {
    RawTable::new(
        vec!["header".to_string()],
        rows.iter()
            .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
            .collect(),
    )
}

// state rows: [_, code, _, name]
fn state_row<'a>(code: &'a str, name: &'a str) -> [&'a str; 4] {
    ["1", code, "x", name]
}

// district rows: [stateCode, _, code, name]
fn district_row<'a>(state_code: &'a str, code: &'a str, name: &'a str) -> [&'a str; 4] {
    [state_code, "x", code, name]
}

// subdistrict rows: [_, stateCode, _, districtCode, _, code, _, name]
fn subdistrict_row<'a>(
    state_code: &'a str,
    district_code: &'a str,
    code: &'a str,
    name: &'a str,
) -> [&'a str; 8] {
    ["1", state_code, "x", district_code, "x", code, "x", name]
}

fn southern_states() -> RawTable {
    table(&[
        &state_row("28", "ANDHRA PRADESH"),
        &state_row("29", "KARNATAKA"),
        &state_row("32", "KERALA"),
        &state_row("33", "TAMIL NADU"),
        &state_row("34", "PUDUCHERRY"),
        &state_row("36", "TELANGANA"),
    ])
}

#[test]
fn reserved_slug_forces_state_suffix() {
    let tables = SourceTables {
        states: southern_states(),
        districts: table(&[&district_row("33", "603", "CHENNAI")]),
        subdistricts: RawTable::default(),
    };
    let reserved = ReservedSlugs::new(["chennai"]);
    let (dataset, _) = build_dataset(&tables, &reserved, RowSchema::default()).unwrap();

    assert_eq!(dataset.districts.len(), 1);
    let chennai = &dataset.districts[0];
    assert_eq!(chennai.name, "Chennai");
    assert_eq!(chennai.slug, "chennai-tamil-nadu");
    assert_eq!(chennai.state_name, "Tamil Nadu");
    assert_eq!(chennai.state_slug, "tamil-nadu");
}

#[test]
fn first_district_in_row_order_keeps_base_slug() {
    let tables = SourceTables {
        states: southern_states(),
        districts: table(&[
            &district_row("28", "502", "Anantapur"),
            &district_row("36", "745", "Anantapur"),
        ]),
        subdistricts: RawTable::default(),
    };
    let (dataset, report) =
        build_dataset(&tables, &ReservedSlugs::default(), RowSchema::default()).unwrap();

    let slugs: Vec<&str> = dataset.districts.iter().map(|d| d.slug.as_str()).collect();
    assert_eq!(slugs, vec!["anantapur", "anantapur-telangana"]);
    assert_eq!(report.disambiguated.len(), 1);
    assert_eq!(report.disambiguated[0].code, "745");
}

#[test]
fn row_order_decides_which_district_is_suffixed() {
    let tables = SourceTables {
        states: southern_states(),
        districts: table(&[
            &district_row("36", "745", "Anantapur"),
            &district_row("28", "502", "Anantapur"),
        ]),
        subdistricts: RawTable::default(),
    };
    let (dataset, _) =
        build_dataset(&tables, &ReservedSlugs::default(), RowSchema::default()).unwrap();

    let slugs: Vec<&str> = dataset.districts.iter().map(|d| d.slug.as_str()).collect();
    assert_eq!(slugs, vec!["anantapur", "anantapur-andhra-pradesh"]);
}

#[test]
fn subdistrict_slug_strips_punctuation() {
    let tables = SourceTables {
        states: southern_states(),
        districts: table(&[&district_row("33", "603", "CHENNAI")]),
        subdistricts: table(&[&subdistrict_row("33", "603", "5791", "T. Nagar")]),
    };
    let (dataset, _) =
        build_dataset(&tables, &ReservedSlugs::default(), RowSchema::default()).unwrap();

    let sub = &dataset.subdistricts[0];
    assert_eq!(sub.name, "T. Nagar");
    assert_eq!(sub.slug, "t-nagar");
    assert_eq!(sub.district_slug, "chennai");
    assert_eq!(sub.district_name, "Chennai");
    assert_eq!(sub.state_slug, "tamil-nadu");
}

#[test]
fn unrecognized_state_drops_its_descendants() {
    let tables = SourceTables {
        states: southern_states(),
        districts: table(&[
            &district_row("34", "635", "KARAIKAL"),
            &district_row("32", "595", "ERNAKULAM"),
        ]),
        subdistricts: table(&[
            &subdistrict_row("34", "635", "5900", "Karaikal"),
            &subdistrict_row("32", "595", "5650", "Kochi"),
            // recognized state but the district itself never appeared
            &subdistrict_row("32", "999", "5651", "Aluva"),
        ]),
    };
    let (dataset, report) =
        build_dataset(&tables, &ReservedSlugs::default(), RowSchema::default()).unwrap();

    assert!(dataset.states.iter().all(|s| s.code != "34"));
    assert_eq!(dataset.states.len(), 5);
    assert_eq!(dataset.districts.len(), 1);
    assert_eq!(dataset.districts[0].code, "595");
    assert_eq!(dataset.subdistricts.len(), 1);
    assert_eq!(dataset.subdistricts[0].code, "5650");
    assert_eq!(report.tier(Tier::State).filtered, 1);
    assert_eq!(report.tier(Tier::District).filtered, 1);
    assert_eq!(report.tier(Tier::Subdistrict).filtered, 2);
}

#[test]
fn subdistrict_slugs_are_scoped_per_district() {
    let tables = SourceTables {
        states: southern_states(),
        districts: table(&[
            &district_row("32", "595", "ERNAKULAM"),
            &district_row("32", "596", "IDUKKI"),
        ]),
        subdistricts: table(&[
            &subdistrict_row("32", "595", "1", "Central"),
            &subdistrict_row("32", "596", "2", "Central"),
            &subdistrict_row("32", "595", "3", "CENTRAL"),
        ]),
    };
    let reserved = ReservedSlugs::new(["central"]);
    let (dataset, _) = build_dataset(&tables, &reserved, RowSchema::default()).unwrap();

    let slugs: Vec<(&str, &str)> = dataset
        .subdistricts
        .iter()
        .map(|s| (s.district_code.as_str(), s.slug.as_str()))
        .collect();
    assert_eq!(
        slugs,
        vec![
            ("595", "central"),
            ("596", "central"),
            ("595", "central-ernakulam"),
        ]
    );
}

#[test]
fn third_same_name_district_in_one_state_keeps_duplicate() {
    let tables = SourceTables {
        states: southern_states(),
        districts: table(&[
            &district_row("29", "1", "Rural"),
            &district_row("29", "2", "Rural"),
            &district_row("29", "3", "Rural"),
        ]),
        subdistricts: RawTable::default(),
    };
    let (dataset, report) =
        build_dataset(&tables, &ReservedSlugs::default(), RowSchema::default()).unwrap();

    let slugs: Vec<&str> = dataset.districts.iter().map(|d| d.slug.as_str()).collect();
    assert_eq!(slugs, vec!["rural", "rural-karnataka", "rural-karnataka"]);
    assert!(report.has_unresolved());
    assert_eq!(report.unresolved[0].code, "3");

    let issues = audit_dataset(&dataset, &ReservedSlugs::default());
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].code, "3");
}

#[test]
fn district_slugs_are_unique_and_avoid_reserved() {
    let names = [
        "Chennai", "Madurai", "Chennai", "Salem", "Madurai", "Vellore", "Kochi",
    ];
    let state_codes = ["33", "33", "32", "33", "28", "33", "32"];
    let rows: Vec<[String; 4]> = names
        .iter()
        .zip(state_codes)
        .enumerate()
        .map(|(idx, (name, state))| {
            [
                state.to_string(),
                "x".to_string(),
                format!("{}", 600 + idx),
                (*name).to_string(),
            ]
        })
        .collect();
    let districts = RawTable::new(Vec::new(), rows.iter().map(|row| row.to_vec()).collect());
    let tables = SourceTables {
        states: southern_states(),
        districts,
        subdistricts: RawTable::default(),
    };
    let reserved = ReservedSlugs::new(["salem", "vellore", "kochi-kerala"]);
    let (dataset, _) = build_dataset(&tables, &reserved, RowSchema::default()).unwrap();

    let mut seen = BTreeSet::new();
    for district in &dataset.districts {
        assert!(seen.insert(district.slug.clone()), "duplicate {}", district.slug);
        assert!(!reserved.contains(&district.slug), "reserved {}", district.slug);
    }
    assert!(audit_dataset(&dataset, &reserved).is_empty());
}

#[test]
fn subdistrict_slugs_unique_within_each_district() {
    let tables = SourceTables {
        states: southern_states(),
        districts: table(&[
            &district_row("33", "603", "CHENNAI"),
            &district_row("33", "604", "VELLORE"),
        ]),
        subdistricts: table(&[
            &subdistrict_row("33", "603", "1", "Egmore"),
            &subdistrict_row("33", "603", "2", "Egmore"),
            &subdistrict_row("33", "604", "3", "Egmore"),
            &subdistrict_row("33", "604", "4", "Katpadi"),
            &subdistrict_row("33", "603", "5", "Mylapore"),
        ]),
    };
    let (dataset, _) =
        build_dataset(&tables, &ReservedSlugs::default(), RowSchema::default()).unwrap();

    let mut by_district: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for sub in &dataset.subdistricts {
        assert!(
            by_district
                .entry(sub.district_code.as_str())
                .or_default()
                .insert(sub.slug.as_str())
        );
    }
    assert!(by_district["603"].contains("egmore-chennai"));
    assert!(by_district["604"].contains("egmore"));
}

#[test]
fn short_row_aborts_the_build() {
    let tables = SourceTables {
        states: southern_states(),
        districts: table(&[&district_row("33", "603", "CHENNAI"), &["33", "x"]]),
        subdistricts: RawTable::default(),
    };
    let err = build_dataset(&tables, &ReservedSlugs::default(), RowSchema::default())
        .unwrap_err();
    match err {
        BuildError::ShortRow {
            tier, line, len, ..
        } => {
            assert_eq!(tier, Tier::District);
            assert_eq!(line, 3);
            assert_eq!(len, 2);
        }
    }
}

#[test]
fn state_row_without_name_column_fails() {
    let tables = SourceTables {
        states: table(&[&["1", "33"]]),
        districts: RawTable::default(),
        subdistricts: RawTable::default(),
    };
    assert!(build_dataset(&tables, &ReservedSlugs::default(), RowSchema::default()).is_err());
}

#[test]
fn custom_schema_reads_other_columns() {
    let schema = RowSchema {
        state: areas_core::StateColumns { code: 0, name: 1 },
        ..RowSchema::default()
    };
    let tables = SourceTables {
        states: table(&[&["32", "Kerala"]]),
        districts: RawTable::default(),
        subdistricts: RawTable::default(),
    };
    let (dataset, _) = build_dataset(&tables, &ReservedSlugs::default(), schema).unwrap();
    assert_eq!(dataset.states[0].code, "32");
    assert_eq!(dataset.states[0].slug, "kerala");
}

#[test]
fn short_row_reports_recorded_source_line() {
    let districts = table(&[&district_row("33", "603", "CHENNAI"), &[]]).with_lines(vec![2, 7]);
    let tables = SourceTables {
        states: southern_states(),
        districts,
        subdistricts: RawTable::default(),
    };
    let err = build_dataset(&tables, &ReservedSlugs::default(), RowSchema::default())
        .unwrap_err();
    assert!(matches!(
        err,
        BuildError::ShortRow {
            tier: Tier::District,
            line: 7,
            len: 0,
            ..
        }
    ));
}

#[test]
fn empty_district_slug_collides_like_any_other() {
    let tables = SourceTables {
        states: southern_states(),
        districts: table(&[
            &district_row("29", "1", "()"),
            &district_row("29", "2", "()"),
        ]),
        subdistricts: RawTable::default(),
    };
    let (dataset, report) =
        build_dataset(&tables, &ReservedSlugs::default(), RowSchema::default()).unwrap();

    let slugs: Vec<&str> = dataset.districts.iter().map(|d| d.slug.as_str()).collect();
    assert_eq!(slugs, vec!["", "-karnataka"]);
    assert_eq!(report.disambiguated.len(), 1);
    assert_eq!(report.disambiguated[0].code, "2");
    assert_eq!(report.disambiguated[0].base, "");
    assert!(!report.has_unresolved());
}

#[test]
fn empty_subdistrict_slug_takes_district_suffix() {
    let tables = SourceTables {
        states: southern_states(),
        districts: table(&[&district_row("29", "560", "BENGALURU URBAN")]),
        subdistricts: table(&[
            &subdistrict_row("29", "560", "5001", "()"),
            &subdistrict_row("29", "560", "5002", "()"),
        ]),
    };
    let (dataset, report) =
        build_dataset(&tables, &ReservedSlugs::default(), RowSchema::default()).unwrap();

    let slugs: Vec<&str> = dataset.subdistricts.iter().map(|s| s.slug.as_str()).collect();
    assert_eq!(slugs, vec!["", "-bengaluru-urban"]);
    assert_eq!(report.disambiguated.len(), 1);
    assert_eq!(report.disambiguated[0].tier, Tier::Subdistrict);
}
