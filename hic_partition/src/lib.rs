//! Partition contigs into linkage groups by Hi-C link density.
pub mod contigs;
pub mod error;
pub mod fields;
pub mod filter_edges;
pub mod hierarchical_clustering;
pub mod misc;
pub mod pairs;
pub mod partition;
pub mod reader;
pub mod similarity;
#[macro_use]
extern crate log;

pub use error::PartitionError;
pub use fields::ParsePolicy;
pub use filter_edges::{EdgeFilterConfig, EFFECTIVE_LINK_DISTANCE};
pub use partition::{Partition, PartitionConfig};
