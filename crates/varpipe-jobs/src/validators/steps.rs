//! Shared per-step rule groups, composed into job validators.

use varpipe_core::ParameterName::{
    AppVepCachePath, AppVepCacheSpecies, AppVepCacheVersion, AppVepNumForks, AppVepPath,
    ConfigChunkSize, ConfigRestartabilityAllow, DbCollectionsFilesName,
    DbCollectionsVariantsName, DbName, InputFasta, InputGtf, InputStudyId, InputStudyName,
    InputStudyType, InputVcf, InputVcfAggregation, InputVcfAggregationMappingPath, InputVcfId,
    OutputDirAnnotation, OutputDirStatistics,
};
use varpipe_core::{
    ExistingDirectory, Guard, Guarded, OneOf, OptionalInteger, ReadableFile, Required, RuleSet,
    TypedBool, TypedInteger,
};

/// Aggregation modes an input variant file may declare.
pub const AGGREGATION_MODES: &[&str] = &["NONE", "BASIC", "EVS", "EXAC"];

/// The aggregation modes that need a mapping file.
pub const AGGREGATION_MODES_WITH_MAPPING: &[&str] = &["BASIC", "EVS", "EXAC"];

/// Recognized study types.
pub const STUDY_TYPES: &[&str] = &[
    "COLLECTION",
    "FAMILY",
    "TRIO",
    "CONTROL",
    "CASE",
    "CASE_CONTROL",
    "PAIRED",
    "PAIRED_TUMOR",
    "TIME_SERIES",
    "AGGREGATE",
];

/// Rules for the variant-load step.
///
/// The aggregation mapping file is required (and probed) only when the
/// declared aggregation mode is a recognized mode other than `NONE`; an
/// absent or unrecognized mode is reported by the enumeration rule alone.
#[must_use]
pub fn load_variants_step() -> RuleSet {
    RuleSet::new()
        .with(Required::new(DbName))
        .with(Required::new(DbCollectionsVariantsName))
        .with(Required::new(InputStudyId))
        .with(Required::new(InputVcfId))
        .with(OneOf::new(InputVcfAggregation, AGGREGATION_MODES))
        .with(ReadableFile::new(InputVcf))
        .with(Guarded::new(
            Guard::AnyOf(InputVcfAggregation, AGGREGATION_MODES_WITH_MAPPING),
            RuleSet::new().with(ReadableFile::new(InputVcfAggregationMappingPath)),
        ))
        .with(OptionalInteger::new(ConfigChunkSize))
        .with(TypedBool::new(ConfigRestartabilityAllow))
}

/// Rules for the file-load step.
#[must_use]
pub fn load_file_step() -> RuleSet {
    RuleSet::new()
        .with(Required::new(DbCollectionsFilesName))
        .with(Required::new(InputStudyName))
        .with(OneOf::new(InputStudyType, STUDY_TYPES))
}

/// Rules for the annotation step group (VEP configuration plus reference
/// inputs).
#[must_use]
pub fn annotation_group() -> RuleSet {
    RuleSet::new()
        .with(Required::new(OutputDirAnnotation))
        .with(Required::new(AppVepCacheSpecies))
        .with(Required::new(AppVepCacheVersion))
        .with(TypedInteger::new(AppVepNumForks))
        .with(ExistingDirectory::new(AppVepCachePath))
        .with(ReadableFile::new(AppVepPath))
        .with(ReadableFile::new(InputFasta))
}

/// Rules for the gene-load step (GTF input).
#[must_use]
pub fn gene_load_step() -> RuleSet {
    RuleSet::new()
        .with(Required::new(DbName))
        .with(ReadableFile::new(InputGtf))
}

/// Rules for the statistics step group.
#[must_use]
pub fn statistics_group() -> RuleSet {
    RuleSet::new().with(Required::new(OutputDirStatistics))
}
