pub mod hicpart_commands;
pub mod pipeline;
#[macro_use]
extern crate log;

use hic_partition::{PartitionConfig, PartitionError};
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

pub fn set_threads(threads: usize) {
    debug!("Set Threads\t{}", threads);
    if let Err(why) = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
    {
        debug!("{:?} If you run `pipeline` module, this is Harmless.", why);
    }
}

/// Compute the groups, then write them to `output` (or the stdout).
/// The output file is created only after the computation succeeded.
pub fn run_partition(
    contigs: &Path,
    pairs: &Path,
    config: &PartitionConfig,
    output: Option<&Path>,
) -> Result<(), PartitionError> {
    debug!("START\tPartition");
    let partition = hic_partition::partition::partition_from_files(contigs, pairs, config)?;
    match output {
        Some(path) => {
            let mut wtr = std::fs::File::create(path)
                .map(BufWriter::new)
                .map_err(|why| PartitionError::io(path, why))?;
            partition.write(&mut wtr)?;
            wtr.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut wtr = BufWriter::new(stdout.lock());
            partition.write(&mut wtr)?;
            wtr.flush()?;
        }
    }
    info!("Success");
    Ok(())
}
