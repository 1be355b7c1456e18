//! Whitespace-delimited tables. No knowledge of the columns.
use crate::error::PartitionError;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub type Record = Vec<String>;

/// Split each line on runs of spaces/tabs.
/// Empty lines and lines starting with `#` are skipped.
/// Bytes that are not valid UTF-8 are replaced by U+FFFD.
pub fn read_records<R: BufRead>(mut rdr: R) -> std::io::Result<Vec<Record>> {
    let mut records = vec![];
    let mut buf = vec![];
    while rdr.read_until(b'\n', &mut buf)? > 0 {
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim();
        if !line.is_empty() && !line.starts_with('#') {
            records.push(line.split_whitespace().map(|x| x.to_string()).collect());
        }
        buf.clear();
    }
    Ok(records)
}

pub fn read_records_from<P: AsRef<Path>>(path: P) -> Result<Vec<Record>, PartitionError> {
    let path = path.as_ref();
    let rdr = std::fs::File::open(path)
        .map(BufReader::new)
        .map_err(|why| PartitionError::io(path, why))?;
    debug!("Opening {}", path.display());
    read_records(rdr).map_err(|why| PartitionError::io(path, why))
}
