//! Keep edges between close contigs. Pairs estimated to be far apart carry
//! little information and only add noise to the similarity graph.
use definitions::ContigPair;
use serde::{Deserialize, Serialize};

/// Effective link distance (bp). Beyond this the Hi-C signal is regarded as noise.
pub const EFFECTIVE_LINK_DISTANCE: u64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeFilterConfig {
    /// Edges with MLE distance strictly less than this survive.
    pub max_distance: u64,
}

impl EdgeFilterConfig {
    pub fn new(max_distance: u64) -> Self {
        Self { max_distance }
    }
}

impl Default for EdgeFilterConfig {
    fn default() -> Self {
        Self::new(EFFECTIVE_LINK_DISTANCE)
    }
}

pub fn filter_edges(edges: &[ContigPair], config: &EdgeFilterConfig) -> Vec<ContigPair> {
    let kept: Vec<_> = edges
        .iter()
        .filter(|e| e.mle_distance < config.max_distance)
        .cloned()
        .collect();
    debug!("FILTER\t{}\t{}", kept.len(), edges.len());
    info!(
        "Edge filtering keeps {} edges",
        crate::misc::percentage(kept.len(), edges.len())
    );
    kept
}
