use std::{fs, path::PathBuf};

use clap::Parser;
use libdnahelix::{output, utils};

use super::HelixArgs;

#[derive(Parser, Debug)]
pub struct PlotCmd {
    #[clap(flatten)]
    pub helix: HelixArgs,

    /// Directory for the svg, defaults to output_path from the settings
    /// file. Output file will be named dna_helix_{timestamp}.svg
    #[clap(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Image width in pixels
    #[clap(long, default_value_t = 800)]
    pub width: u32,

    /// Image height in pixels
    #[clap(long, default_value_t = 1600)]
    pub height: u32,
}

impl PlotCmd {
    pub fn run(self) -> eyre::Result<()> {
        let (settings, points) = self.helix.build()?;
        let output_dir = self.output_dir.unwrap_or(settings.output_path);
        fs::create_dir_all(&output_dir)?;

        let svg_path = utils::timestamped_path(&output_dir, "dna_helix", "svg");
        output::render_svg(&points, &svg_path, (self.width, self.height))?;
        log::info!("Wrote {}", svg_path.display());
        Ok(())
    }
}
