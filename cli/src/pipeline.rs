//! Pipelines -- run the partition step from a TOML profile.
use hic_partition::{ParsePolicy, PartitionConfig, PartitionError, EFFECTIVE_LINK_DISTANCE};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The configuration of the pipeline.
/// Everything not listed here is hard-coded to the values that work well for most of the case.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PipelineConfig {
    /// The path to the contig table.
    contigs: PathBuf,
    /// The path to the pairwise linkage table.
    pairs: PathBuf,
    /// The number of groups.
    k: usize,
    #[serde(default = "default_max_distance")]
    max_distance: u64,
    #[serde(default)]
    strict: bool,
    #[serde(default = "default_threads")]
    threads: usize,
    #[serde(default)]
    verbose: u8,
    /// If not given, the groups go to the stdout.
    #[serde(default)]
    output: Option<PathBuf>,
}

fn default_max_distance() -> u64 {
    EFFECTIVE_LINK_DISTANCE
}

fn default_threads() -> usize {
    1
}

impl PipelineConfig {
    pub fn from_toml(profile: &str) -> Result<Self, PartitionError> {
        toml::from_str(profile).map_err(|why| PartitionError::Config(why.to_string()))
    }
    pub fn partition_config(&self) -> PartitionConfig {
        let policy = match self.strict {
            true => ParsePolicy::Strict,
            false => ParsePolicy::Lenient,
        };
        PartitionConfig::new(self.k)
            .with_max_distance(self.max_distance)
            .with_policy(policy)
    }
}

pub fn run_pipeline(config: &PipelineConfig) -> Result<(), PartitionError> {
    crate::init_logger(config.verbose);
    crate::set_threads(config.threads);
    debug!("PIPELINE\t{:?}", config);
    let partition_config = config.partition_config();
    crate::run_partition(
        &config.contigs,
        &config.pairs,
        &partition_config,
        config.output.as_deref(),
    )
}
