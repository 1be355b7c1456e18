//! Contig catalog.
//! ```text
//! #Contig         Length  Expected  Observed  LDE
//! jpcChr1.ctg249  25205   2.3       4         1.7391
//! jpcChr1.ctg344  82275   15.4      17        1.1068
//! ```
use crate::error::PartitionError;
use crate::fields::{ParsePolicy, Row};
use crate::reader::{read_records, read_records_from, Record};
use definitions::{Contig, ContigCatalog};
use std::io::BufRead;
use std::path::Path;

pub const CONTIG_COLUMNS: usize = 5;

/// Convert records into contigs, in file order.
pub fn parse_contigs(
    records: &[Record],
    policy: ParsePolicy,
) -> Result<Vec<Contig>, PartitionError> {
    let mut contigs = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let row = Row::new(i + 1, record, policy);
        let required = match policy {
            ParsePolicy::Lenient => 1,
            ParsePolicy::Strict => CONTIG_COLUMNS,
        };
        if !row.has_columns(required)? {
            warn!("SKIP\tContig\t{}", row.line());
            continue;
        }
        let contig = Contig {
            name: row.text(0).to_string(),
            length: row.number(1)?,
            expected_links: row.number(2)?,
            observed_links: row.number(3)?,
            lde: row.number(4)?,
        };
        contigs.push(contig);
    }
    Ok(contigs)
}

/// The name -> index table is built only after every row is loaded.
pub fn load_contigs<R: BufRead>(
    rdr: R,
    policy: ParsePolicy,
) -> Result<ContigCatalog, PartitionError> {
    let records = read_records(rdr).map_err(|why| PartitionError::io("-", why))?;
    let contigs = parse_contigs(&records, policy)?;
    Ok(ContigCatalog::new(contigs))
}

pub fn load_contigs_from<P: AsRef<Path>>(
    path: P,
    policy: ParsePolicy,
) -> Result<ContigCatalog, PartitionError> {
    let records = read_records_from(path)?;
    let contigs = parse_contigs(&records, policy)?;
    let catalog = ContigCatalog::new(contigs);
    debug!("CONTIGS\t{}\t{}", catalog.len(), catalog.longest_length());
    Ok(catalog)
}
