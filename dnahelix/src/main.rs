mod cmd;
mod file;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use eyre::Result;
use human_panic::setup_panic;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about=None)]
/// Render genotype data as a stylized DNA double helix.
struct Args {
    #[clap(flatten)]
    verbose: Verbosity,

    /// Number of threads used to compute helix points, by default num cpus
    #[clap(short = 'j', long, global = true)]
    num_threads: Option<usize>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write helix coordinates and base colors as a tsv table or json
    /// document
    Points(cmd::points::PointsCmd),

    /// Draw a 2D side view of the helix as an svg
    Plot(cmd::plot::PlotCmd),

    /// Write the svg, point table and 3D json document into one directory
    Render(cmd::render::RenderCmd),
}

fn main() -> Result<()> {
    setup_panic!();
    jane_eyre::install()?;

    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let mut n_logical_cores = num_cpus::get();
    if let Some(n) = args.num_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()?;
        n_logical_cores = n;
    }
    log::info!("Using {n_logical_cores} logical cores");

    match args.command {
        Commands::Points(cmd) => cmd.run()?,
        Commands::Plot(cmd) => cmd.run()?,
        Commands::Render(cmd) => cmd.run()?,
    }
    Ok(())
}
