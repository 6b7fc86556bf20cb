pub mod plot;
pub mod points;
pub mod render;

use clap::Args;
use eyre::eyre;
use libdnahelix::{
    build_helix_series,
    genotype::{load_records, ColumnOrder},
    helix::HelixOptions,
    settings::Settings,
    HelixPoint,
};

use crate::file::ValidPathBuf;

fn parse_column_order(src: &str) -> Result<ColumnOrder, String> {
    src.parse().map_err(|e| format!("{e}"))
}

/// Options shared by every command that builds a helix.
#[derive(Args, Debug)]
pub struct HelixArgs {
    /// Tab separated genotype file, defaults to dna_file_path from the
    /// settings file
    #[clap(short, long)]
    pub input: Option<ValidPathBuf>,

    /// TOML settings file
    #[clap(short, long)]
    pub config: Option<ValidPathBuf>,

    /// Number of base pairs to render, by default 200
    #[clap(short, long)]
    pub base_pairs: Option<usize>,

    /// Helix radius
    #[clap(long)]
    pub radius: Option<f64>,

    /// Rise along the helix axis per base, by default 4 times the angular
    /// step
    #[clap(long)]
    pub vertical_step: Option<f64>,

    /// Rotation per base in radians
    #[clap(long)]
    pub angular_step: Option<f64>,

    /// Rise per full turn, sets the vertical step from the angular step
    #[clap(long, conflicts_with = "vertical_step")]
    pub pitch: Option<f64>,

    /// Fit this many full turns over the rendered base pairs
    #[clap(long, conflicts_with_all = ["vertical_step", "angular_step", "pitch"])]
    pub turns: Option<f64>,

    /// Column layout of the genotype file, either "rsid-first"
    /// (rsid, chromosome, position, genotype) or "chrom-first"
    /// (chromosome, position, rsid, genotype)
    #[clap(long, default_value = "rsid-first", value_parser = parse_column_order)]
    pub columns: ColumnOrder,
}

impl HelixArgs {
    /// Settings file values overridden by any flags given on the command
    /// line.
    pub fn settings(&self) -> eyre::Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(&path.0)?,
            None => Settings::default(),
        };
        if let Some(input) = &self.input {
            settings.dna_file_path = Some(input.0.clone());
        }
        if let Some(base_pairs) = self.base_pairs {
            settings.base_pairs = base_pairs;
        }

        settings.helix = settings.helix.overridden_by(HelixOptions {
            radius: self.radius,
            vertical_step: self.vertical_step,
            angular_step: self.angular_step,
            pitch: self.pitch,
        });
        settings.validate()?;
        Ok(settings)
    }

    pub fn build(&self) -> eyre::Result<(Settings, Vec<HelixPoint>)> {
        let settings = self.settings()?;
        let input = settings.dna_file_path.as_ref().ok_or_else(|| {
            eyre!("No genotype file given, use --input or set dna_file_path in the settings file")
        })?;
        let records = load_records(input, self.columns, Some(settings.base_pairs))?;

        let mut helix = settings.helix_config()?;
        if let Some(turns) = self.turns {
            let total = settings.base_pairs.min(records.len());
            helix = helix.fit_turns(total, turns);
        }
        log::debug!("Helix config: {helix:?}");
        let points = build_helix_series(&records, &helix, settings.base_pairs)?;
        Ok((settings, points))
    }
}
