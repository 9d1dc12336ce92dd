//! Wires validation, the restart policy and the step runner together.

use anyhow::bail;
use varpipe_core::ParameterBag;
use varpipe_core::ParameterName::{
    AnnotationSkip, DbName, InputVcf, OutputDirStatistics, StatisticsSkip,
};
use varpipe_jobs::{JobRunner, Pipeline, RestartPolicy};

use crate::cli::Cli;
use crate::loader;

/// Validates the bag for the requested pipeline and, when valid, runs it.
///
/// # Errors
/// Fails on loader problems, on any validation failure (after logging every
/// failure), or when a step fails.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let bag = loader::load(cli.parameters.as_deref(), &cli.params)?;
    let pipeline = Pipeline::from(cli.pipeline);

    let report = pipeline.validator().validate(&bag);
    if !report.is_valid() {
        for failure in report.failures() {
            tracing::error!(%failure, "invalid job parameter");
        }
        bail!(
            "{} invalid job parameter(s) for pipeline '{pipeline}'",
            report.failures().len()
        );
    }
    tracing::info!(%pipeline, parameters = bag.len(), "job parameters validated");

    if cli.validate_only {
        return Ok(());
    }

    let runner = build_runner(pipeline, &bag, &cli);
    runner.run(&bag)?;
    Ok(())
}

/// Registers the pipeline's steps, each carrying the restart-skip flag
/// decided once from the bag.
fn build_runner(pipeline: Pipeline, bag: &ParameterBag, cli: &Cli) -> JobRunner {
    let allow_start_if_complete = RestartPolicy::allow_start_if_complete(bag);
    let mut runner = JobRunner::new(pipeline.as_str(), &cli.state_dir);

    runner.register_step("load-variants", allow_start_if_complete, load_variants);

    if matches!(pipeline, Pipeline::AggregatedVcf | Pipeline::GenotypedVcf) {
        runner.register_step("load-file", allow_start_if_complete, load_file);
        if !skip_flag(bag, AnnotationSkip) {
            runner.register_step("annotate", allow_start_if_complete, annotate);
        }
    }

    if matches!(pipeline, Pipeline::GenotypedVcf) && !skip_flag(bag, StatisticsSkip) {
        runner.register_step("statistics", allow_start_if_complete, statistics);
    }

    runner
}

fn skip_flag(bag: &ParameterBag, flag: varpipe_core::ParameterName) -> bool {
    // Validation has already rejected malformed flags by the time a runner
    // is built.
    matches!(bag.bool_or(flag, false), Ok(true))
}

fn load_variants(bag: &ParameterBag) -> varpipe_core::Result<()> {
    tracing::info!(
        database = bag.get(DbName).unwrap_or_default(),
        vcf = bag.get(InputVcf).unwrap_or_default(),
        "loading variants"
    );
    Ok(())
}

fn load_file(bag: &ParameterBag) -> varpipe_core::Result<()> {
    tracing::info!(
        database = bag.get(DbName).unwrap_or_default(),
        "loading file metadata"
    );
    Ok(())
}

fn annotate(bag: &ParameterBag) -> varpipe_core::Result<()> {
    tracing::info!(
        vcf = bag.get(InputVcf).unwrap_or_default(),
        "generating annotation"
    );
    Ok(())
}

fn statistics(bag: &ParameterBag) -> varpipe_core::Result<()> {
    tracing::info!(
        output_dir = bag.get(OutputDirStatistics).unwrap_or_default(),
        "computing statistics"
    );
    Ok(())
}
