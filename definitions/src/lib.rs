//! Definitions -- A tiny interface for the Hi-C partitioning step.
//! Contigs, their pairwise link statistics, and the resulting linkage groups.
//! Every other crate in this workspace speaks in terms of these structures. The integer index of a contig
//! is its position in the [ContigCatalog](ContigCatalog), and that index is fixed for the whole run.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contig {
    /// Name of the contig. It is the `id` in the draft assembly.
    pub name: String,
    /// Length in base pairs.
    pub length: u64,
    /// Expected number of links under the background model.
    pub expected_links: f64,
    pub observed_links: u64,
    /// Local link density, observed/expected.
    pub lde: f64,
}

impl Contig {
    pub fn new(
        name: &str,
        length: u64,
        expected_links: f64,
        observed_links: u64,
        lde: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            length,
            expected_links,
            observed_links,
            lde,
        }
    }
}

/// A row of the pairwise linkage table.
/// Lengths are copies of the contig lengths as written by the extraction step;
/// they are the ones used to normalize the link count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ContigPair {
    pub contig1: String,
    pub contig2: String,
    pub length1: u64,
    pub length2: u64,
    pub lde1: f64,
    pub lde2: f64,
    pub local_lde: f64,
    pub observed_links: u64,
    /// Expected number of links if the two contigs were adjacent.
    pub expected_links: f64,
    /// Maximum-likelihood estimate of the separation, in base pairs.
    pub mle_distance: u64,
    /// Carried through from the extraction step. Not used here.
    pub score: f64,
}

impl ContigPair {
    pub fn new(contig1: &str, contig2: &str, length1: u64, length2: u64) -> Self {
        Self {
            contig1: contig1.to_string(),
            contig2: contig2.to_string(),
            length1,
            length2,
            ..Default::default()
        }
    }
    pub fn with_links(mut self, observed_links: u64, mle_distance: u64) -> Self {
        self.observed_links = observed_links;
        self.mle_distance = mle_distance;
        self
    }
}

/// The set of contigs, in load order, together with the name -> index table.
/// The table is built once from the complete list and never modified afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "Vec<Contig>", into = "Vec<Contig>")]
pub struct ContigCatalog {
    contigs: Vec<Contig>,
    longest_length: u64,
    index: HashMap<String, usize>,
}

impl From<Vec<Contig>> for ContigCatalog {
    fn from(contigs: Vec<Contig>) -> Self {
        Self::new(contigs)
    }
}

impl From<ContigCatalog> for Vec<Contig> {
    fn from(catalog: ContigCatalog) -> Self {
        catalog.contigs
    }
}

impl ContigCatalog {
    /// If the same name occurs twice, the later row owns the name.
    pub fn new(contigs: Vec<Contig>) -> Self {
        let longest_length = contigs.iter().map(|c| c.length).max().unwrap_or(0);
        let index: HashMap<_, _> = contigs
            .iter()
            .enumerate()
            .map(|(idx, c)| (c.name.clone(), idx))
            .collect();
        Self {
            contigs,
            longest_length,
            index,
        }
    }
    pub fn len(&self) -> usize {
        self.contigs.len()
    }
    pub fn is_empty(&self) -> bool {
        self.contigs.is_empty()
    }
    pub fn contigs(&self) -> &[Contig] {
        &self.contigs
    }
    /// The length of the longest contig in the catalog, 0 if empty.
    pub fn longest_length(&self) -> u64 {
        self.longest_length
    }
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }
    pub fn name(&self, idx: usize) -> Option<&str> {
        self.contigs.get(idx).map(|c| c.name.as_str())
    }
}

/// A partition of the contig indices into linkage groups.
/// Groups are kept in emission order, members in ascending index order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Clusters {
    pub groups: Vec<Vec<usize>>,
}

impl Clusters {
    pub fn new(groups: Vec<Vec<usize>>) -> Self {
        Self { groups }
    }
    pub fn len(&self) -> usize {
        self.groups.len()
    }
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
    /// Resolve the indices into names. Indices outside the catalog are dropped.
    pub fn names<'a>(&self, catalog: &'a ContigCatalog) -> Vec<Vec<&'a str>> {
        self.groups
            .iter()
            .map(|group| group.iter().filter_map(|&idx| catalog.name(idx)).collect())
            .collect()
    }
}
