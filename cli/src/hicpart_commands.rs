use clap::{value_parser, Arg, ArgAction, Command};

fn subcommand_partition() -> Command {
    Command::new("partition")
        .version("0.1")
        .author("Bansho Masutani")
        .about("Separate contigs into k groups.")
        .long_about(
            "Separate contigs into k groups.\n\
             Contigs are grouped by average-link hierarchical clustering on the \
             length-normalized Hi-C link counts. Both tables are produced by the extraction step.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .action(ArgAction::Count)
                .help("Debug mode"),
        )
        .arg(
            Arg::new("contigs")
                .value_name("COUNTS_RE")
                .required(true)
                .help("Contig table: name, length, expected links, observed links, LDE."),
        )
        .arg(
            Arg::new("pairs")
                .value_name("PAIRS")
                .required(true)
                .help("Pairwise linkage table."),
        )
        .arg(
            Arg::new("k")
                .value_name("K")
                .required(true)
                .value_parser(value_parser!(usize))
                .help("Number of groups."),
        )
        .arg(
            Arg::new("max_distance")
                .short('d')
                .long("max_distance")
                .value_name("BP")
                .default_value("1000000")
                .value_parser(value_parser!(u64))
                .help("Pairs with MLE distance at or above this value are ignored."),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Abort on malformed numeric fields instead of reading them as zero."),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("PATH")
                .help("Output file name. Default is the stdout."),
        )
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .value_name("THREADS")
                .default_value("1")
                .value_parser(value_parser!(usize))
                .help("number of threads"),
        )
}

fn subcommand_pipeline() -> Command {
    Command::new("pipeline")
        .version("0.1")
        .author("BanshoMasutani")
        .about("Run partition based on the given TOML file.")
        .arg(
            Arg::new("profile")
                .short('p')
                .value_name("TOML")
                .required(true)
                .help("TOML configuration file. See example.toml for an example."),
        )
}

pub fn hicpart_parser() -> Command {
    Command::new("hicpart")
        .version("0.1")
        .author("Bansho Masutani <ban-m@g.ecc.u-tokyo.ac.jp>")
        .about("Partition draft contigs into linkage groups by Hi-C links")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .subcommand(subcommand_partition())
        .subcommand(subcommand_pipeline())
}
