use std::{io::BufWriter, path::PathBuf};

use clap::Parser;
use libdnahelix::{output, utils};

use super::HelixArgs;

#[derive(Clone, Copy, Debug)]
pub enum Format {
    Tsv,
    Json,
}

fn parse_format(src: &str) -> Result<Format, String> {
    match src {
        "tsv" => Ok(Format::Tsv),
        "json" => Ok(Format::Json),
        _ => Err(String::from("Invalid format: either 'tsv' or 'json'")),
    }
}

#[derive(Parser, Debug)]
pub struct PointsCmd {
    #[clap(flatten)]
    pub helix: HelixArgs,

    /// Path to output file, defaults to stdout if no argument provided.
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Output format, "tsv" table or "json" document
    #[clap(short, long, default_value = "tsv", value_parser = parse_format)]
    pub format: Format,
}

impl PointsCmd {
    pub fn run(self) -> eyre::Result<()> {
        let (_, points) = self.helix.build()?;
        let writer = utils::stdout_or_file(self.output.as_ref())?;
        let writer = BufWriter::new(writer);
        match self.format {
            Format::Tsv => output::write_tsv(&points, writer)?,
            Format::Json => output::write_json(&points, writer)?,
        }
        Ok(())
    }
}
