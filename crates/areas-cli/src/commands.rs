use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use areas_ingest::{SourceLocation, default_base_url};
use areas_model::ServiceAreaIndex;
use areas_output::read_dataset;

use areas_cli::pipeline::{PipelineOptions, PipelineOutcome, run_pipeline};

use crate::cli::{BuildArgs, InspectArgs};
use crate::summary::{print_overview, print_state_districts};

pub fn run_build(args: &BuildArgs) -> Result<PipelineOutcome> {
    let location = source_location(args);
    let build_span = info_span!("build", output = %args.output.display());
    let _build_guard = build_span.enter();

    let source = location.open().context("open row source")?;
    let options = PipelineOptions {
        reserved: args.reserved.clone(),
        dry_run: args.dry_run,
        strict: args.strict,
        ..PipelineOptions::new(&args.output)
    };
    let outcome = run_pipeline(source.as_ref(), &options)?;
    info!(
        states = outcome.dataset.states.len(),
        districts = outcome.dataset.districts.len(),
        subdistricts = outcome.dataset.subdistricts.len(),
        "build complete"
    );
    Ok(outcome)
}

fn source_location(args: &BuildArgs) -> SourceLocation {
    match &args.source_dir {
        Some(dir) => SourceLocation::Local { dir: dir.clone() },
        None => SourceLocation::Remote {
            base_url: args.base_url.clone().unwrap_or_else(default_base_url),
            timeout: Duration::from_secs(args.timeout_secs),
        },
    }
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let dataset = read_dataset(&args.dataset)
        .with_context(|| format!("read dataset: {}", args.dataset.display()))?;
    let index = ServiceAreaIndex::new(&dataset);
    match &args.state {
        Some(slug) => {
            let state = index
                .state_by_slug(slug)
                .ok_or_else(|| anyhow!("no state with slug `{slug}` in {}", args.dataset.display()))?;
            print_state_districts(state, &index);
        }
        None => print_overview(&dataset, &index),
    }
    Ok(())
}
