use std::{
    fs::{self, File},
    io::BufWriter,
    path::PathBuf,
};

use clap::Parser;
use libdnahelix::{output, utils};

use super::HelixArgs;

#[derive(Parser, Debug)]
pub struct RenderCmd {
    #[clap(flatten)]
    pub helix: HelixArgs,

    /// Directory for rendered artifacts, defaults to output_path from the
    /// settings file
    #[clap(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Image width in pixels
    #[clap(long, default_value_t = 800)]
    pub width: u32,

    /// Image height in pixels
    #[clap(long, default_value_t = 1600)]
    pub height: u32,
}

impl RenderCmd {
    pub fn run(self) -> eyre::Result<()> {
        let (settings, points) = self.helix.build()?;
        let output_dir = self.output_dir.unwrap_or(settings.output_path);
        fs::create_dir_all(&output_dir)?;

        let svg_path = utils::timestamped_path(&output_dir, "dna_helix", "svg");
        output::render_svg(&points, &svg_path, (self.width, self.height))?;

        let tsv_path = utils::timestamped_path(&output_dir, "dna_helix_points", "tsv");
        log::info!("Writing point table to {}", tsv_path.display());
        output::write_tsv(&points, BufWriter::new(File::create(&tsv_path)?))?;

        let json_path = utils::timestamped_path(&output_dir, "dna_helix_3d", "json");
        log::info!("Writing 3D point document to {}", json_path.display());
        output::write_json(&points, BufWriter::new(File::create(&json_path)?))?;
        Ok(())
    }
}
