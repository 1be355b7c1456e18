use hic_partition::{ParsePolicy, PartitionConfig, PartitionError};
use std::path::Path;
#[macro_use]
extern crate log;

fn main() {
    let matches = hic_cli::hicpart_commands::hicpart_parser().get_matches();
    let result = match matches.subcommand() {
        Some(("partition", sub_m)) => partition(sub_m),
        Some(("pipeline", sub_m)) => pipeline(sub_m),
        _ => unreachable!(),
    };
    if let Err(why) = result {
        error!("{}", why);
        eprintln!("{}", why);
        std::process::exit(1);
    }
}

fn partition(matches: &clap::ArgMatches) -> Result<(), PartitionError> {
    hic_cli::init_logger(matches.get_count("verbose"));
    if let Some(&threads) = matches.get_one::<usize>("threads") {
        hic_cli::set_threads(threads);
    }
    let contigs = required::<String>(matches, "contigs")?;
    let pairs = required::<String>(matches, "pairs")?;
    let k = *required::<usize>(matches, "k")?;
    let max_distance = *required::<u64>(matches, "max_distance")?;
    let policy = match matches.get_flag("strict") {
        true => ParsePolicy::Strict,
        false => ParsePolicy::Lenient,
    };
    let output: Option<&String> = matches.get_one("output");
    let output = output.map(Path::new);
    let config = PartitionConfig::new(k)
        .with_max_distance(max_distance)
        .with_policy(policy);
    debug!("Partition\t{}\t{}\t{:?}", contigs, pairs, config);
    hic_cli::run_partition(Path::new(contigs), Path::new(pairs), &config, output)
}

fn pipeline(matches: &clap::ArgMatches) -> Result<(), PartitionError> {
    let path = required::<String>(matches, "profile")?;
    let profile = std::fs::read_to_string(path).map_err(|why| PartitionError::io(path, why))?;
    let config = hic_cli::pipeline::PipelineConfig::from_toml(&profile)?;
    hic_cli::pipeline::run_pipeline(&config)
}

fn required<'a, T: Clone + Send + Sync + 'static>(
    matches: &'a clap::ArgMatches,
    id: &str,
) -> Result<&'a T, PartitionError> {
    matches
        .get_one::<T>(id)
        .ok_or_else(|| PartitionError::Config(format!("{} is not given", id)))
}
