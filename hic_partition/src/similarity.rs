//! Similarity matrix over contig indices.
//!
//! Raw link counts grow with contig length, so the weight of an edge is
//! `observed_links * longest^2 / (length1 * length2)`, where `longest` is the
//! longest contig in the whole catalog. The clustering thresholds are tuned against this scale.
use definitions::{ContigCatalog, ContigPair};
use nalgebra::DMatrix;

/// Build the symmetric matrix from the filtered edges.
/// Edges naming an unknown contig, self pairs, and edges with a zero length are dropped.
/// Writes are assignments, so for duplicated pairs the last row wins.
pub fn similarity_matrix(catalog: &ContigCatalog, edges: &[ContigPair]) -> DMatrix<f64> {
    let n = catalog.len();
    let mut matrix = DMatrix::zeros(n, n);
    let longest = catalog.longest_length() as f64;
    let longest_squared = longest * longest;
    let mut written = 0;
    for e in edges.iter() {
        let (a, b) = match (catalog.index_of(&e.contig1), catalog.index_of(&e.contig2)) {
            (Some(a), Some(b)) if a != b => (a, b),
            (Some(_), Some(_)) => continue,
            _ => {
                debug!("DANGLING\t{}\t{}", e.contig1, e.contig2);
                continue;
            }
        };
        if e.length1 == 0 || e.length2 == 0 {
            warn!("Zero length pair {}-{} is ignored", e.contig1, e.contig2);
            continue;
        }
        let w = e.observed_links as f64 * longest_squared / (e.length1 as f64 * e.length2 as f64);
        trace!("WEIGHT\t{}\t{}\t{}\t{:.6}", e.contig1, e.contig2, e.observed_links, w);
        matrix[(a, b)] = w;
        matrix[(b, a)] = w;
        written += 1;
    }
    debug!("MATRIX\t{}\t{}", n, written);
    matrix
}
