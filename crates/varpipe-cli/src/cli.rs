//! Argument definitions for the `varpipe` binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use varpipe_jobs::Pipeline;

/// Validates and launches variant-pipeline jobs.
#[derive(Debug, Parser)]
#[command(name = "varpipe", version, about)]
pub struct Cli {
    /// Pipeline variant to validate and run.
    #[arg(long, value_enum)]
    pub pipeline: PipelineArg,

    /// TOML file with the job parameters (flat dotted keys).
    #[arg(long, value_name = "FILE")]
    pub parameters: Option<PathBuf>,

    /// Individual parameter override, repeatable.
    #[arg(short = 'P', long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,

    /// Directory holding persisted execution state.
    #[arg(long, value_name = "DIR", default_value = ".varpipe")]
    pub state_dir: PathBuf,

    /// Validate the parameters and exit without running any step.
    #[arg(long)]
    pub validate_only: bool,
}

/// Pipeline selection on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PipelineArg {
    /// Variant load only.
    LoadOnly,
    /// Full job over an aggregated input file.
    AggregatedVcf,
    /// Full job over a genotyped input file.
    GenotypedVcf,
}

impl From<PipelineArg> for Pipeline {
    fn from(arg: PipelineArg) -> Self {
        match arg {
            PipelineArg::LoadOnly => Self::LoadOnly,
            PipelineArg::AggregatedVcf => Self::AggregatedVcf,
            PipelineArg::GenotypedVcf => Self::GenotypedVcf,
        }
    }
}
