//! The catalogue of recognized parameter names.

use core::fmt;

/// Closed catalogue of recognized configuration parameters.
///
/// Every validation rule refers to a catalogue member; referencing a key
/// outside the catalogue is a programming defect, not a runtime validation
/// failure. The wire names are the dotted property keys used in parameter
/// files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterName {
    /// Target database identifier.
    DbName,
    /// Name of the variants collection.
    DbCollectionsVariantsName,
    /// Name of the files collection.
    DbCollectionsFilesName,
    /// Identifier of the study being loaded.
    InputStudyId,
    /// Human-readable name of the study being loaded.
    InputStudyName,
    /// Study type (collection, family, ...).
    InputStudyType,
    /// Path to the input variant file.
    InputVcf,
    /// Identifier of the input variant file within the study.
    InputVcfId,
    /// Aggregation mode of the input variant file.
    InputVcfAggregation,
    /// Path to the aggregation mapping file, when aggregation is used.
    InputVcfAggregationMappingPath,
    /// Path to the gene annotation (GTF) input file.
    InputGtf,
    /// Path to the reference sequence (FASTA) input file.
    InputFasta,
    /// Directory where annotation output is written.
    OutputDirAnnotation,
    /// Directory where statistics output is written.
    OutputDirStatistics,
    /// Path to the VEP executable.
    AppVepPath,
    /// Path to the VEP cache directory.
    AppVepCachePath,
    /// VEP cache version.
    AppVepCacheVersion,
    /// Species the VEP cache was built for.
    AppVepCacheSpecies,
    /// Number of forks VEP may use.
    AppVepNumForks,
    /// When true, the annotation step group is skipped entirely.
    AnnotationSkip,
    /// When true, the statistics step group is skipped entirely.
    StatisticsSkip,
    /// When true, completed steps are re-executed on job relaunch.
    ConfigRestartabilityAllow,
    /// Chunk size for batched reads and writes.
    ConfigChunkSize,
}

impl ParameterName {
    /// All catalogue members, in a stable order.
    pub const ALL: &'static [Self] = &[
        Self::DbName,
        Self::DbCollectionsVariantsName,
        Self::DbCollectionsFilesName,
        Self::InputStudyId,
        Self::InputStudyName,
        Self::InputStudyType,
        Self::InputVcf,
        Self::InputVcfId,
        Self::InputVcfAggregation,
        Self::InputVcfAggregationMappingPath,
        Self::InputGtf,
        Self::InputFasta,
        Self::OutputDirAnnotation,
        Self::OutputDirStatistics,
        Self::AppVepPath,
        Self::AppVepCachePath,
        Self::AppVepCacheVersion,
        Self::AppVepCacheSpecies,
        Self::AppVepNumForks,
        Self::AnnotationSkip,
        Self::StatisticsSkip,
        Self::ConfigRestartabilityAllow,
        Self::ConfigChunkSize,
    ];

    /// The dotted property key this parameter is read from.
    #[must_use]
    pub const fn as_key(self) -> &'static str {
        match self {
            Self::DbName => "db.name",
            Self::DbCollectionsVariantsName => "db.collections.variants.name",
            Self::DbCollectionsFilesName => "db.collections.files.name",
            Self::InputStudyId => "input.study.id",
            Self::InputStudyName => "input.study.name",
            Self::InputStudyType => "input.study.type",
            Self::InputVcf => "input.vcf",
            Self::InputVcfId => "input.vcf.id",
            Self::InputVcfAggregation => "input.vcf.aggregation",
            Self::InputVcfAggregationMappingPath => "input.vcf.aggregation.mapping-path",
            Self::InputGtf => "input.gtf",
            Self::InputFasta => "input.fasta",
            Self::OutputDirAnnotation => "output.dir.annotation",
            Self::OutputDirStatistics => "output.dir.statistics",
            Self::AppVepPath => "app.vep.path",
            Self::AppVepCachePath => "app.vep.cache.path",
            Self::AppVepCacheVersion => "app.vep.cache.version",
            Self::AppVepCacheSpecies => "app.vep.cache.species",
            Self::AppVepNumForks => "app.vep.num-forks",
            Self::AnnotationSkip => "annotation.skip",
            Self::StatisticsSkip => "statistics.skip",
            Self::ConfigRestartabilityAllow => "config.restartability.allow",
            Self::ConfigChunkSize => "config.chunk.size",
        }
    }

    /// Looks up a catalogue member by its dotted property key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|name| name.as_key() == key)
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_key())
    }
}
