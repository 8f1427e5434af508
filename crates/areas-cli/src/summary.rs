use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use areas_core::{IssueSeverity, SlugIssue};
use areas_model::{Dataset, District, ServiceAreaIndex, State};

use areas_cli::pipeline::{PipelineOutcome, summary_line};

pub fn print_summary(outcome: &PipelineOutcome) {
    println!(
        "{}",
        summary_line(outcome.dataset.counts(), outcome.written.as_deref())
    );
    let report = &outcome.report;
    if !report.disambiguated.is_empty() {
        println!(
            "Disambiguated {} slug(s) with a parent suffix.",
            report.disambiguated.len()
        );
    }
    if report.has_unresolved() {
        println!(
            "{} slug collision(s) could not be resolved.",
            report.unresolved.len()
        );
    }
    print_issue_table(&outcome.issues);
}

fn print_issue_table(issues: &[SlugIssue]) {
    if issues.is_empty() {
        return;
    }
    let mut sorted: Vec<&SlugIssue> = issues.iter().collect();
    sorted.sort_by_key(|issue| (issue.severity(), issue.tier, issue.code.clone()));

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Tier"),
        header_cell("Code"),
        header_cell("Slug"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    for issue in sorted {
        table.add_row(vec![
            severity_cell(issue.severity()),
            Cell::new(issue.tier.as_str()),
            Cell::new(&issue.code),
            slug_cell(&issue.slug),
            Cell::new(&issue.message),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

/// Per-state record counts of a dataset.
pub fn print_overview(dataset: &Dataset, index: &ServiceAreaIndex<'_>) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("State"),
        header_cell("Slug"),
        header_cell("Code"),
        header_cell("Districts"),
        header_cell("Subdistricts"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    for state in &dataset.states {
        let districts = index.districts_by_state_slug(&state.slug);
        let subdistricts: usize = districts
            .iter()
            .map(|district| index.subdistricts_by_district_slug(&district.slug).len())
            .sum();
        table.add_row(vec![
            Cell::new(&state.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&state.slug),
            dim_cell(&state.code),
            count_cell(districts.len()),
            count_cell(subdistricts),
        ]);
    }
    let counts = dataset.counts();
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(counts.districts).add_attribute(Attribute::Bold),
        Cell::new(counts.subdistricts).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

/// Districts of one state, sorted by name.
pub fn print_state_districts(state: &State, index: &ServiceAreaIndex<'_>) {
    println!("State: {} ({})", state.name, state.slug);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("District"),
        header_cell("Slug"),
        header_cell("Code"),
        header_cell("Subdistricts"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for district in index.districts_by_state_slug(&state.slug) {
        table.add_row(vec![
            Cell::new(&district.name),
            district_slug_cell(district),
            dim_cell(&district.code),
            count_cell(index.subdistricts_by_district_slug(&district.slug).len()),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: IssueSeverity) -> Cell {
    match severity {
        IssueSeverity::Error => Cell::new("ERROR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        IssueSeverity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

// Slugs that carry a parent suffix are highlighted.
fn district_slug_cell(district: &District) -> Cell {
    if district.slug.ends_with(&format!("-{}", district.state_slug)) {
        Cell::new(&district.slug).fg(Color::Yellow)
    } else {
        Cell::new(&district.slug)
    }
}

fn slug_cell(slug: &str) -> Cell {
    if slug.is_empty() {
        dim_cell("(empty)")
    } else {
        Cell::new(slug)
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
