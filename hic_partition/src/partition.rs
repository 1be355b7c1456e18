//! Partition -- separate contigs into k linkage groups.
//!
//! Load the contig catalog and the pairwise linkage table, keep the edges
//! between close contigs, build the normalized similarity matrix, and cluster
//! it by average linkage. Each group is written as
//! `<member count> <comma-joined names>`, one group per line.
use crate::contigs::{load_contigs, load_contigs_from};
use crate::error::PartitionError;
use crate::fields::ParsePolicy;
use crate::filter_edges::{filter_edges, EdgeFilterConfig};
use crate::hierarchical_clustering::average_linkage;
use crate::pairs::{load_pairs, load_pairs_from};
use crate::similarity::similarity_matrix;
use definitions::{Clusters, ContigCatalog, ContigPair};
use std::io::{BufRead, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartitionConfig {
    /// The number of groups.
    k: usize,
    filter: EdgeFilterConfig,
    policy: ParsePolicy,
}

impl PartitionConfig {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            filter: EdgeFilterConfig::default(),
            policy: ParsePolicy::default(),
        }
    }
    pub fn with_max_distance(mut self, max_distance: u64) -> Self {
        self.filter = EdgeFilterConfig::new(max_distance);
        self
    }
    pub fn with_policy(mut self, policy: ParsePolicy) -> Self {
        self.policy = policy;
        self
    }
    pub fn k(&self) -> usize {
        self.k
    }
    pub fn filter(&self) -> &EdgeFilterConfig {
        &self.filter
    }
    pub fn policy(&self) -> ParsePolicy {
        self.policy
    }
    fn check(&self, catalog: &ContigCatalog) -> Result<(), PartitionError> {
        match self.k {
            0 => Err(PartitionError::ZeroClusters),
            k if catalog.len() < k => Err(PartitionError::TooManyClusters {
                k,
                contigs: catalog.len(),
            }),
            _ => Ok(()),
        }
    }
}

/// The result of a partition run.
#[derive(Debug, Clone)]
pub struct Partition {
    pub catalog: ContigCatalog,
    pub clusters: Clusters,
}

impl Partition {
    pub fn write<W: Write>(&self, wtr: &mut W) -> std::io::Result<()> {
        for names in self.clusters.names(&self.catalog) {
            writeln!(wtr, "{} {}", names.len(), names.join(","))?;
        }
        Ok(())
    }
}

/// Everything after loading. `K` is checked before the edges are touched.
pub fn partition(
    catalog: ContigCatalog,
    pairs: &[ContigPair],
    config: &PartitionConfig,
) -> Result<Partition, PartitionError> {
    config.check(&catalog)?;
    let edges = filter_edges(pairs, config.filter());
    let matrix = similarity_matrix(&catalog, &edges);
    let clusters = average_linkage(&matrix, config.k())?;
    for (i, group) in clusters.groups.iter().enumerate() {
        debug!("GROUP\t{}\t{}", i, group.len());
    }
    Ok(Partition { catalog, clusters })
}

pub fn partition_from_readers<R: BufRead, S: BufRead>(
    contigs: R,
    pairs: S,
    config: &PartitionConfig,
) -> Result<Partition, PartitionError> {
    let catalog = load_contigs(contigs, config.policy())?;
    config.check(&catalog)?;
    let pairs = load_pairs(pairs, config.policy())?;
    partition(catalog, &pairs, config)
}

pub fn partition_from_files<P: AsRef<Path>, Q: AsRef<Path>>(
    contigs: P,
    pairs: Q,
    config: &PartitionConfig,
) -> Result<Partition, PartitionError> {
    let catalog = load_contigs_from(contigs, config.policy())?;
    config.check(&catalog)?;
    let pairs = load_pairs_from(pairs, config.policy())?;
    partition(catalog, &pairs, config)
}
