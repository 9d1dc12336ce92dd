//! Per-pipeline job validators and the pipeline catalogue.

use core::fmt;

use varpipe_core::ParameterName::{AnnotationSkip, StatisticsSkip};
use varpipe_core::{Guard, Guarded, RuleSet, TypedBool};

use super::steps;

/// The pipeline variants this launcher can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pipeline {
    /// Variant load only, no file metadata, annotation or statistics.
    LoadOnly,
    /// Full job over an aggregated input file.
    AggregatedVcf,
    /// Full job over a genotyped (non-aggregated) input file, including
    /// statistics.
    GenotypedVcf,
}

impl Pipeline {
    /// All pipeline variants.
    pub const ALL: &'static [Self] = &[Self::LoadOnly, Self::AggregatedVcf, Self::GenotypedVcf];

    /// Stable name used for state files and logging.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoadOnly => "load-only",
            Self::AggregatedVcf => "aggregated-vcf",
            Self::GenotypedVcf => "genotyped-vcf",
        }
    }

    /// The composed validator for this pipeline variant.
    #[must_use]
    pub fn validator(self) -> RuleSet {
        match self {
            Self::LoadOnly => load_only_job(),
            Self::AggregatedVcf => aggregated_vcf_job(),
            Self::GenotypedVcf => genotyped_vcf_job(),
        }
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Validator for the load-only pipeline: exactly the variant-load step
/// rules.
#[must_use]
pub fn load_only_job() -> RuleSet {
    steps::load_variants_step()
}

/// Validator for the aggregated-VCF job: variant load plus file load, with
/// the annotation group required unless `annotation.skip` is true.
///
/// The skip flag itself is format-checked separately, so a malformed flag
/// is reported and, fail-safe, the annotation group stays required.
#[must_use]
pub fn aggregated_vcf_job() -> RuleSet {
    steps::load_variants_step()
        .merged(steps::load_file_step())
        .with(TypedBool::new(AnnotationSkip))
        .with(Guarded::new(
            Guard::IsFalse(AnnotationSkip),
            steps::annotation_group(),
        ))
}

/// Validator for the genotyped-VCF job: the aggregated-VCF rules plus the
/// statistics group, required unless `statistics.skip` is true.
#[must_use]
pub fn genotyped_vcf_job() -> RuleSet {
    aggregated_vcf_job()
        .with(TypedBool::new(StatisticsSkip))
        .with(Guarded::new(
            Guard::IsFalse(StatisticsSkip),
            steps::statistics_group(),
        ))
}
