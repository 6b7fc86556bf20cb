use std::{fs::File, path::PathBuf};

use clap::Parser;
use clap_verbosity_flag::Verbosity;
use eyre::Result;
use human_panic::setup_panic;
use libdnahelix::gen_data::{GenerateOptions, DEFAULT_ENTRIES};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about=None)]
/// Generate a synthetic AncestryDNA style genotype file.
struct Args {
    #[clap(flatten)]
    verbose: Verbosity,

    /// Path to output file
    #[clap(short, long, default_value = "large_test_ancestry_data.txt")]
    output: PathBuf,

    /// Number of genotype records to write
    #[clap(short = 'n', long, default_value_t = DEFAULT_ENTRIES)]
    entries: u64,

    /// Seed for reproducible output, random if not given
    #[clap(long)]
    seed: Option<u64>,

    /// Hide the progress bar
    #[clap(long)]
    quiet_progress: bool,
}

fn main() -> Result<()> {
    setup_panic!();
    jane_eyre::install()?;

    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let mut opts = GenerateOptions::default();
    opts.entries(args.entries).progress(!args.quiet_progress);
    if let Some(seed) = args.seed {
        opts.seed(seed);
    }
    let writer = File::create(&args.output)?;
    opts.generate(writer)?;
    log::info!(
        "Generated test DNA file with {} entries at {}",
        args.entries,
        args.output.display()
    );
    Ok(())
}
