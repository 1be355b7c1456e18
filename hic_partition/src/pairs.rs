//! Pairwise linkage table. One [ContigPair](definitions::ContigPair) per row,
//! no aggregation and no deduplication.
//! ```text
//! #Contig1       Contig2        Length1 Length2 LDE1   LDE2   LDE    ObservedLinks ExpectedLinksIfAdjacent MLEdistance Score
//! jpcChr1.ctg199 jpcChr1.ctg257 124567  274565  0.3195 2.0838 1.1607 2             27.4                    1617125     0.0
//! ```
use crate::error::PartitionError;
use crate::fields::{ParsePolicy, Row};
use crate::reader::{read_records, read_records_from, Record};
use definitions::ContigPair;
use std::io::BufRead;
use std::path::Path;

/// Columns up to the MLE distance. The score column may be absent.
pub const PAIR_COLUMNS: usize = 10;

pub fn parse_pairs(
    records: &[Record],
    policy: ParsePolicy,
) -> Result<Vec<ContigPair>, PartitionError> {
    let mut pairs = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let row = Row::new(i + 1, record, policy);
        let required = match policy {
            ParsePolicy::Lenient => 2,
            ParsePolicy::Strict => PAIR_COLUMNS,
        };
        if !row.has_columns(required)? {
            warn!("SKIP\tPair\t{}", row.line());
            continue;
        }
        let pair = ContigPair {
            contig1: row.text(0).to_string(),
            contig2: row.text(1).to_string(),
            length1: row.number(2)?,
            length2: row.number(3)?,
            lde1: row.number(4)?,
            lde2: row.number(5)?,
            local_lde: row.number(6)?,
            observed_links: row.number(7)?,
            expected_links: row.number(8)?,
            mle_distance: row.number(9)?,
            score: match record.len() > PAIR_COLUMNS {
                true => row.number(10)?,
                false => 0.,
            },
        };
        pairs.push(pair);
    }
    Ok(pairs)
}

pub fn load_pairs<R: BufRead>(
    rdr: R,
    policy: ParsePolicy,
) -> Result<Vec<ContigPair>, PartitionError> {
    let records = read_records(rdr).map_err(|why| PartitionError::io("-", why))?;
    parse_pairs(&records, policy)
}

pub fn load_pairs_from<P: AsRef<Path>>(
    path: P,
    policy: ParsePolicy,
) -> Result<Vec<ContigPair>, PartitionError> {
    let records = read_records_from(path)?;
    let pairs = parse_pairs(&records, policy)?;
    debug!("PAIRS\t{}", pairs.len());
    Ok(pairs)
}
