//! Synthetic genotype files in the AncestryDNA raw data layout, used for
//! testing and benchmarking.
use std::io::{BufWriter, Write};

use chrono::Local;
use eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::{prelude::SmallRng, Rng, SeedableRng};

pub const DEFAULT_ENTRIES: u64 = 500_000;

const CHROMOSOMES: [&str; 25] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16", "17",
    "18", "19", "20", "21", "22", "X", "Y", "MT",
];
const BASES: [char; 4] = ['A', 'T', 'C', 'G'];

/// Length of chromosome 1 in GRCh37
const MAX_POSITION: u64 = 249_250_621;
const MAX_RSID: u64 = 999_999_999;

pub struct GenerateOptions {
    entries: u64,
    rng: SmallRng,
    progress: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            entries: DEFAULT_ENTRIES,
            rng: SmallRng::from_entropy(),
            progress: false,
        }
    }
}

impl GenerateOptions {
    pub fn entries(&mut self, entries: u64) -> &mut Self {
        self.entries = entries;
        self
    }

    /// Use a fixed seed so repeated runs write the same records.
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    pub fn progress(&mut self, progress: bool) -> &mut Self {
        self.progress = progress;
        self
    }

    fn progress_bar(&self) -> Result<ProgressBar> {
        if !self.progress {
            return Ok(ProgressBar::hidden());
        }
        let style = ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] {bar:40} {pos}/{len} {msg}",
        )?;
        Ok(ProgressBar::new(self.entries)
            .with_style(style)
            .with_message("Generating genotype records"))
    }

    fn record(&mut self) -> String {
        let rsid = self.rng.gen_range(1..=MAX_RSID);
        let chrom = CHROMOSOMES[self.rng.gen_range(0..CHROMOSOMES.len())];
        let position = self.rng.gen_range(1..=MAX_POSITION);
        let first = BASES[self.rng.gen_range(0..BASES.len())];
        let second = BASES[self.rng.gen_range(0..BASES.len())];
        format!("rs{rsid}\t{chrom}\t{position}\t{first}{second}")
    }

    pub fn generate<W>(&mut self, writer: W) -> Result<()>
    where
        W: Write,
    {
        let mut writer = BufWriter::new(writer);
        writeln!(writer, "#AncestryDNA raw data export")?;
        writeln!(
            writer,
            "#Generated on {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(writer, "#RSID\tCHROMOSOME\tPOSITION\tGENOTYPE")?;

        let pb = self.progress_bar()?;
        for _ in 0..self.entries {
            let line = self.record();
            writeln!(writer, "{line}")?;
            pb.inc(1);
        }
        writer.flush()?;
        pb.finish_with_message("Done");
        log::info!("Generated {} genotype records", self.entries);
        Ok(())
    }
}
