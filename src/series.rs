//! Combine genotype records with helix geometry into the points consumed by
//! the renderers.
use rayon::prelude::*;
use serde::Serialize;

use crate::{
    base::{color_or_fallback, Base, Rgb},
    genotype::GenotypeRecord,
    helix::{Coord, HelixConfig, HelixError},
};

/// One rung of the helix. Strand A carries the first allele of the genotype,
/// strand B the second, and the rung between them takes the first allele's
/// color.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HelixPoint {
    index: usize,
    rsid: String,
    chromosome: String,
    position: u64,
    strand_a: Coord,
    strand_b: Coord,
    base_a: char,
    base_b: char,
    color_a: Rgb,
    color_b: Rgb,
    rung_color: Rgb,
}

impl HelixPoint {
    fn new(index: usize, record: &GenotypeRecord, config: &HelixConfig) -> Self {
        let (strand_a, strand_b) = config.strands_at(index);
        let (base_a, base_b) = record.alleles();
        let color_a = color_or_fallback(base_a);
        Self {
            index,
            rsid: record.rsid().to_owned(),
            chromosome: record.chromosome().to_owned(),
            position: record.position(),
            strand_a,
            strand_b,
            base_a,
            base_b,
            color_a,
            color_b: color_or_fallback(base_b),
            rung_color: color_a,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn rsid(&self) -> &str {
        self.rsid.as_ref()
    }

    pub fn chromosome(&self) -> &str {
        self.chromosome.as_ref()
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn strand_a(&self) -> Coord {
        self.strand_a
    }

    pub fn strand_b(&self) -> Coord {
        self.strand_b
    }

    pub fn base_a(&self) -> char {
        self.base_a
    }

    pub fn base_b(&self) -> char {
        self.base_b
    }

    pub fn color_a(&self) -> Rgb {
        self.color_a
    }

    pub fn color_b(&self) -> Rgb {
        self.color_b
    }

    pub fn rung_color(&self) -> Rgb {
        self.rung_color
    }

    pub fn is_no_call(&self) -> bool {
        Base::from_symbol(self.base_a).is_err() || Base::from_symbol(self.base_b).is_err()
    }
}

/// Compute the helix points for the first `base_pairs` records, in input
/// order.
pub fn build_helix_series(
    records: &[GenotypeRecord],
    config: &HelixConfig,
    base_pairs: usize,
) -> Result<Vec<HelixPoint>, HelixError> {
    if base_pairs == 0 {
        return Err(HelixError::InvalidBasePairs);
    }
    if records.is_empty() {
        return Err(HelixError::EmptySequence);
    }
    config.validate()?;

    if records.len() < base_pairs {
        log::warn!(
            "Requested {base_pairs} base pairs but only {} records available",
            records.len()
        );
    }
    let total = base_pairs.min(records.len());
    log::info!("Computing helix coordinates for {total} base pairs");
    log::debug!("Helix rises {:.3} per full turn", config.pitch());

    let points: Vec<HelixPoint> = records[..total]
        .par_iter()
        .enumerate()
        .map(|(index, record)| HelixPoint::new(index, record, config))
        .collect();

    let no_calls = points.iter().filter(|p| p.is_no_call()).count();
    if no_calls > 0 {
        log::info!("{no_calls} base pairs contain no-calls or unknown bases, drawn in gray");
    }
    Ok(points)
}
