//! The build pipeline: reserved slugs → row tables → hierarchy → audit →
//! artifact.
//!
//! Every stage either succeeds or aborts the run; the artifact is only written
//! once the whole dataset has been built.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use areas_core::{
    BuildReport, IssueSeverity, RowSchema, SlugIssue, audit_dataset, build_dataset,
};
use areas_ingest::{RowSource, load_reserved_slugs, load_source_tables};
use areas_model::{Dataset, DatasetCounts};
use areas_output::write_dataset;

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub output: PathBuf,
    pub reserved: Option<PathBuf>,
    pub schema: RowSchema,
    /// Build and audit, but do not write the artifact.
    pub dry_run: bool,
    /// Abort before writing when the audit reports errors.
    pub strict: bool,
}

impl PipelineOptions {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            reserved: None,
            schema: RowSchema::default(),
            dry_run: false,
            strict: false,
        }
    }
}

#[derive(Debug)]
pub struct PipelineOutcome {
    pub dataset: Dataset,
    pub report: BuildReport,
    pub issues: Vec<SlugIssue>,
    /// Where the artifact was written; `None` on a dry run.
    pub written: Option<PathBuf>,
}

impl PipelineOutcome {
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity() == IssueSeverity::Error)
            .count()
    }
}

pub fn run_pipeline(source: &dyn RowSource, options: &PipelineOptions) -> Result<PipelineOutcome> {
    let reserved = {
        let _span = info_span!("reserved").entered();
        load_reserved_slugs(options.reserved.as_deref())
    };

    let tables = {
        let _span = info_span!("ingest").entered();
        load_source_tables(source).context("load source tables")?
    };

    let (dataset, report) =
        build_dataset(&tables, &reserved, options.schema).context("build hierarchy")?;

    let issues = audit_dataset(&dataset, &reserved);
    for issue in &issues {
        warn!(
            tier = %issue.tier,
            code = %issue.code,
            slug = %issue.slug,
            "{}",
            issue.message
        );
    }
    let errors = issues
        .iter()
        .filter(|issue| issue.severity() == IssueSeverity::Error)
        .count();
    if options.strict && errors > 0 {
        bail!("slug audit found {errors} error(s); refusing to write {}", options.output.display());
    }

    let written = if options.dry_run {
        info!("dry run; skipping output");
        None
    } else {
        write_dataset(&options.output, &dataset)
            .with_context(|| format!("write dataset: {}", options.output.display()))?;
        Some(options.output.clone())
    };

    Ok(PipelineOutcome {
        dataset,
        report,
        issues,
        written,
    })
}

/// The one-line summary printed after a build.
pub fn summary_line(counts: DatasetCounts, output: Option<&Path>) -> String {
    let destination = match output {
        Some(path) => path.display().to_string(),
        None => "(dry run)".to_string(),
    };
    format!(
        "Generated {} states, {} districts, {} subdistricts -> {}",
        counts.states, counts.districts, counts.subdistricts, destination
    )
}
