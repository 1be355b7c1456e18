//! Average-linkage agglomerative clustering.
//!
//! Start from singletons and merge the pair of clusters with the largest mean
//! similarity until `k` clusters remain. A cluster is identified by the smallest
//! contig index in it. Among equal averages the lexicographically smallest
//! pair of identifiers wins, so zero-linkage clusters keep merging in a fixed
//! order and the procedure always stops at exactly `k` clusters.
use crate::error::PartitionError;
use definitions::Clusters;
use nalgebra::DMatrix;
use rayon::prelude::*;

/// (average similarity, smaller id, larger id)
type Candidate = (f64, usize, usize);

/// Low mantissa bits ignored when averages are compared.
const TIE_BITS: u32 = 16;

/// Ordering key of an average similarity: the bit pattern rounded to the nearest
/// multiple of 2^TIE_BITS. Averages a few ULPs apart share a key, so the order in which
/// the cached sums were accumulated does not decide between them.
/// Monotone on non-negative finite values, hence a total order.
pub fn linkage_key(avg: f64) -> u64 {
    let bits = avg.max(0.).to_bits();
    (bits + (1 << (TIE_BITS - 1))) >> TIE_BITS
}

fn better(x: Candidate, y: Candidate) -> Candidate {
    let (kx, ky) = (linkage_key(x.0), linkage_key(y.0));
    if kx > ky {
        x
    } else if ky > kx {
        y
    } else if (x.1, x.2) <= (y.1, y.2) {
        x
    } else {
        y
    }
}

#[derive(Debug, Clone)]
struct Agglomeration {
    /// sums[a][b] is the sum of similarities between the members of cluster a and b.
    /// Only meaningful for live clusters.
    sums: Vec<Vec<f64>>,
    members: Vec<Vec<usize>>,
    /// The merge step at which each cluster last grew. 0 for untouched singletons.
    formed: Vec<usize>,
    /// Identifiers of the live clusters, in ascending order.
    live: Vec<usize>,
}

impl Agglomeration {
    fn new(matrix: &DMatrix<f64>) -> Self {
        let n = matrix.nrows();
        let sums = (0..n)
            .map(|i| (0..n).map(|j| matrix[(i, j)]).collect())
            .collect();
        Self {
            sums,
            members: (0..n).map(|i| vec![i]).collect(),
            formed: vec![0; n],
            live: (0..n).collect(),
        }
    }
    fn average(&self, a: usize, b: usize) -> f64 {
        let size = self.members[a].len() * self.members[b].len();
        self.sums[a][b] / size as f64
    }
    fn best_pair(&self) -> Option<Candidate> {
        let live = &self.live;
        live.par_iter()
            .enumerate()
            .filter_map(|(pos, &a)| {
                live[pos + 1..]
                    .iter()
                    .map(|&b| (self.average(a, b), a, b))
                    .reduce(better)
            })
            .reduce_with(better)
    }
    /// Fold cluster `b` into cluster `a`. Requires a < b.
    fn merge(&mut self, a: usize, b: usize, step: usize) {
        assert!(a < b);
        for &c in self.live.iter().filter(|&&c| c != a && c != b) {
            let sum = self.sums[a][c] + self.sums[b][c];
            self.sums[a][c] = sum;
            self.sums[c][a] = sum;
        }
        let mut absorbed = std::mem::take(&mut self.members[b]);
        self.members[a].append(&mut absorbed);
        self.members[a].sort_unstable();
        self.formed[a] = step;
        self.live.retain(|&c| c != b);
    }
    fn into_clusters(self) -> Clusters {
        let Self {
            mut members,
            formed,
            mut live,
            ..
        } = self;
        live.sort_by_key(|&c| (formed[c], c));
        let groups = live
            .iter()
            .map(|&c| std::mem::take(&mut members[c]))
            .collect();
        Clusters::new(groups)
    }
}

/// Partition the indices of `matrix` into exactly `k` non-empty clusters.
/// The clusters are ordered by the step they were last merged (untouched singletons first),
/// then by their smallest member.
pub fn average_linkage(matrix: &DMatrix<f64>, k: usize) -> Result<Clusters, PartitionError> {
    let n = matrix.nrows();
    if matrix.ncols() != n {
        let msg = format!("similarity matrix is {}x{}", n, matrix.ncols());
        return Err(PartitionError::Config(msg));
    }
    if k == 0 {
        return Err(PartitionError::ZeroClusters);
    }
    if n < k {
        return Err(PartitionError::TooManyClusters { k, contigs: n });
    }
    let mut agglomeration = Agglomeration::new(matrix);
    for step in 1..=(n - k) {
        let (avg, a, b) = match agglomeration.best_pair() {
            Some(pair) => pair,
            None => break,
        };
        trace!("MERGE\t{}\t{}\t{}\t{:.4}", step, a, b, avg);
        agglomeration.merge(a, b, step);
    }
    Ok(agglomeration.into_clusters())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;
    fn matrix(n: usize, edges: &[(usize, usize, f64)]) -> DMatrix<f64> {
        let mut m = DMatrix::zeros(n, n);
        for &(i, j, w) in edges {
            m[(i, j)] = w;
            m[(j, i)] = w;
        }
        m
    }
    fn random_matrix(n: usize, seed: u64) -> DMatrix<f64> {
        let mut rng: Xoshiro256PlusPlus = SeedableRng::seed_from_u64(seed);
        let mut m = DMatrix::zeros(n, n);
        for i in 0..n {
            for j in (i + 1)..n {
                if rng.gen_bool(0.3) {
                    let w: f64 = rng.gen_range(0.0..100.0);
                    m[(i, j)] = w;
                    m[(j, i)] = w;
                }
            }
        }
        m
    }
    fn is_partition(clusters: &Clusters, n: usize, k: usize) -> bool {
        let mut seen = vec![0; n];
        for group in clusters.groups.iter() {
            for &i in group.iter() {
                seen[i] += 1;
            }
        }
        clusters.len() == k
            && clusters.groups.iter().all(|g| !g.is_empty())
            && seen.iter().all(|&x| x == 1)
    }
    #[test]
    fn two_blocks() {
        let m = matrix(4, &[(0, 1, 10.), (2, 3, 10.), (0, 2, 1.), (1, 3, 0.5)]);
        let clusters = average_linkage(&m, 2).unwrap();
        assert_eq!(clusters.groups, vec![vec![0, 1], vec![2, 3]]);
    }
    #[test]
    fn interleaved_blocks() {
        let m = matrix(
            6,
            &[
                (0, 3, 50.),
                (3, 5, 40.),
                (0, 5, 45.),
                (1, 2, 30.),
                (2, 4, 35.),
                (1, 4, 20.),
                (0, 1, 2.),
                (4, 5, 1.),
            ],
        );
        let mut clusters = average_linkage(&m, 2).unwrap();
        clusters.groups.sort();
        assert_eq!(clusters.groups, vec![vec![0, 3, 5], vec![1, 2, 4]]);
    }
    #[test]
    fn average_not_single_linkage() {
        // 2 is strongly linked to 0 only, while 3 is moderately linked to both 0 and 1.
        let m = matrix(4, &[(0, 1, 100.), (0, 2, 30.), (0, 3, 20.), (1, 3, 20.)]);
        let clusters = average_linkage(&m, 2).unwrap();
        // {0,1} first. Then avg({0,1},{2}) = 15 < avg({0,1},{3}) = 20.
        assert_eq!(clusters.groups, vec![vec![2], vec![0, 1, 3]]);
    }
    #[test]
    fn disconnected_graph() {
        let m = DMatrix::zeros(4, 4);
        let clusters = average_linkage(&m, 2).unwrap();
        assert_eq!(clusters.groups, vec![vec![3], vec![0, 1, 2]]);
    }
    #[test]
    fn isolated_contig_merges_last() {
        let m = matrix(5, &[(0, 1, 5.), (1, 2, 5.), (2, 3, 5.), (0, 3, 5.)]);
        let clusters = average_linkage(&m, 2).unwrap();
        assert_eq!(clusters.groups, vec![vec![4], vec![0, 1, 2, 3]]);
    }
    #[test]
    fn k_equals_n() {
        let m = random_matrix(10, 1);
        let clusters = average_linkage(&m, 10).unwrap();
        let expected: Vec<_> = (0..10).map(|i| vec![i]).collect();
        assert_eq!(clusters.groups, expected);
    }
    #[test]
    fn k_equals_one() {
        let m = random_matrix(15, 2);
        let clusters = average_linkage(&m, 1).unwrap();
        let expected: Vec<_> = (0..15).collect();
        assert_eq!(clusters.groups, vec![expected]);
    }
    #[test]
    fn invalid_k() {
        let m = random_matrix(3, 3);
        assert!(matches!(
            average_linkage(&m, 4),
            Err(PartitionError::TooManyClusters { k: 4, contigs: 3 })
        ));
        assert!(matches!(
            average_linkage(&m, 0),
            Err(PartitionError::ZeroClusters)
        ));
        let empty = DMatrix::zeros(0, 0);
        assert!(average_linkage(&empty, 1).is_err());
    }
    #[test]
    fn always_partition() {
        for seed in 0..20 {
            let n = 5 + seed as usize;
            let m = random_matrix(n, seed);
            for k in 1..=n {
                let clusters = average_linkage(&m, k).unwrap();
                assert!(is_partition(&clusters, n, k), "{}\t{}\t{:?}", n, k, clusters);
            }
        }
    }
    #[test]
    fn deterministic() {
        let m = random_matrix(40, 24);
        let first = average_linkage(&m, 6).unwrap();
        for _ in 0..5 {
            assert_eq!(average_linkage(&m, 6).unwrap(), first);
        }
    }
    // Recompute every average from the matrix at each step.
    fn naive(m: &DMatrix<f64>, k: usize) -> Vec<Vec<usize>> {
        let mut clusters: Vec<Vec<usize>> = (0..m.nrows()).map(|i| vec![i]).collect();
        while clusters.len() > k {
            let mut best: Option<(u64, usize, usize)> = None;
            for i in 0..clusters.len() {
                for j in (i + 1)..clusters.len() {
                    let sum: f64 = clusters[i]
                        .iter()
                        .flat_map(|&a| clusters[j].iter().map(move |&b| (a, b)))
                        .map(|(a, b)| m[(a, b)])
                        .sum();
                    let avg = sum / (clusters[i].len() * clusters[j].len()) as f64;
                    let key = linkage_key(avg);
                    best = Some(match best {
                        Some(b) if b.0 >= key => b,
                        _ => (key, i, j),
                    });
                }
            }
            let (_, i, j) = best.unwrap();
            let absorbed = clusters.remove(j);
            clusters[i].extend(absorbed);
            clusters[i].sort_unstable();
        }
        clusters.sort();
        clusters
    }
    #[test]
    fn matches_naive_recomputation() {
        // Integer weights keep the sums exact.
        let mut rng: Xoshiro256PlusPlus = SeedableRng::seed_from_u64(7);
        let n = 25;
        let mut m = DMatrix::zeros(n, n);
        for i in 0..n {
            for j in (i + 1)..n {
                let w = rng.gen_range(0..20) as f64;
                m[(i, j)] = w;
                m[(j, i)] = w;
            }
        }
        for &k in &[1, 3, 7, 12] {
            let mut clusters = average_linkage(&m, k).unwrap();
            clusters.groups.sort();
            assert_eq!(clusters.groups, naive(&m, k));
        }
    }
    #[test]
    fn normalized_weights_tie_by_identifier() {
        // Few distinct lengths make many averages equal, but accumulated in different orders.
        let lens = [1000f64, 3000., 7000.];
        for seed in 0..60 {
            let mut rng: Xoshiro256PlusPlus = SeedableRng::seed_from_u64(seed);
            let n = 20;
            let len: Vec<f64> = (0..n).map(|_| lens[rng.gen_range(0..3)]).collect();
            let mut m = DMatrix::zeros(n, n);
            for i in 0..n {
                for j in (i + 1)..n {
                    let links = rng.gen_range(0..4) as f64;
                    let w = links * 1e8 / (len[i] * len[j]);
                    m[(i, j)] = w;
                    m[(j, i)] = w;
                }
            }
            for &k in &[2, 4, 8] {
                let mut clusters = average_linkage(&m, k).unwrap();
                clusters.groups.sort();
                assert_eq!(clusters.groups, naive(&m, k), "{}\t{}", seed, k);
            }
        }
    }
    #[test]
    fn nearly_equal_averages_share_a_key() {
        let x = 1e8 / 3000. / 7000.;
        let y = x * 3. / 3.;
        let z = (x + x + x) / 3.;
        assert_eq!(linkage_key(x), linkage_key(z));
        assert_eq!(linkage_key(x), linkage_key(y));
        assert_eq!(linkage_key(x), linkage_key(f64::from_bits(x.to_bits() + 3)));
        assert!(linkage_key(x) < linkage_key(x * 1.001));
        assert_eq!(linkage_key(0.), 0);
        // Equal keys fall back to the identifiers.
        assert_eq!(better((x, 2, 5), (z, 1, 9)), (z, 1, 9));
        assert_eq!(better((x * 1.001, 2, 5), (z, 1, 9)), (x * 1.001, 2, 5));
    }
}
