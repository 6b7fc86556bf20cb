//! Writers for a computed helix series.
//!
//! The tsv table and the json document carry every coordinate and color so
//! external 3D viewers can draw spheres and tubes from them. The svg is a
//! static side view of the helix.
use std::{io::Write, ops::Range, path::Path};

use plotters::prelude::*;
use serde::Serialize;
use thiserror::Error;

use crate::{
    base::{Rgb, COLOR_TABLE, NO_CALL_COLOR},
    helix::Coord,
    series::HelixPoint,
};

const BACKBONE_COLOR: RGBColor = RGBColor(0x80, 0x80, 0x80);

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("No helix points to write")]
    Empty,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to write table: {0}")]
    Csv(#[from] csv::Error),
    #[error("Failed to write json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Plot error: {0}")]
    Plot(String),
}

fn plot_err<E: std::fmt::Display>(e: E) -> OutputError {
    OutputError::Plot(e.to_string())
}

#[derive(Serialize)]
struct PointRow<'a> {
    index: usize,
    rsid: &'a str,
    chromosome: &'a str,
    position: u64,
    base_a: char,
    base_b: char,
    ax: f64,
    ay: f64,
    az: f64,
    bx: f64,
    by: f64,
    bz: f64,
    color_a: Rgb,
    color_b: Rgb,
    rung_color: Rgb,
}

impl<'a> From<&'a HelixPoint> for PointRow<'a> {
    fn from(point: &'a HelixPoint) -> Self {
        let a = point.strand_a();
        let b = point.strand_b();
        Self {
            index: point.index(),
            rsid: point.rsid(),
            chromosome: point.chromosome(),
            position: point.position(),
            base_a: point.base_a(),
            base_b: point.base_b(),
            ax: a.x,
            ay: a.y,
            az: a.z,
            bx: b.x,
            by: b.y,
            bz: b.z,
            color_a: point.color_a(),
            color_b: point.color_b(),
            rung_color: point.rung_color(),
        }
    }
}

/// Tab separated table with a header row, one line per point.
pub fn write_tsv<W>(points: &[HelixPoint], writer: W) -> Result<(), OutputError>
where
    W: Write,
{
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(writer);
    for point in points {
        writer.serialize(PointRow::from(point))?;
    }
    writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct LegendEntry {
    base: char,
    color: Rgb,
}

#[derive(Serialize)]
struct HelixDocument<'a> {
    base_pairs: usize,
    legend: Vec<LegendEntry>,
    fallback_color: Rgb,
    points: &'a [HelixPoint],
}

/// Pretty printed json document with the color legend and every point.
pub fn write_json<W>(points: &[HelixPoint], mut writer: W) -> Result<(), OutputError>
where
    W: Write,
{
    let legend = COLOR_TABLE
        .iter()
        .map(|(base, color)| LegendEntry {
            base: base.symbol(),
            color: *color,
        })
        .collect();
    let document = HelixDocument {
        base_pairs: points.len(),
        legend,
        fallback_color: NO_CALL_COLOR,
        points,
    };
    serde_json::to_writer_pretty(&mut writer, &document)?;
    writer.flush()?;
    Ok(())
}

fn rgb(color: Rgb) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

fn padded(min: f64, max: f64) -> Range<f64> {
    let pad = ((max - min) * 0.05).max(1.0);
    (min - pad)..(max + pad)
}

/// Horizontal and vertical plot ranges for the side view.
fn side_view_bounds(points: &[HelixPoint]) -> (Range<f64>, Range<f64>) {
    let coords = points.iter().flat_map(|p| [p.strand_a(), p.strand_b()]);
    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut z_min, mut z_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for Coord { x, z, .. } in coords {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        z_min = z_min.min(z);
        z_max = z_max.max(z);
    }
    (padded(x_min, x_max), padded(z_min, z_max))
}

/// Side view of the helix (x horizontal, z vertical): gray backbones, a rung
/// per base pair in the first allele's color, and a dot per base in its
/// allele color.
pub fn render_svg<P>(
    points: &[HelixPoint],
    filepath: P,
    size: (u32, u32),
) -> Result<(), OutputError>
where
    P: AsRef<Path>,
{
    if points.is_empty() {
        return Err(OutputError::Empty);
    }
    log::info!(
        "Generating 2D DNA visualization for {} base pairs at {}",
        points.len(),
        filepath.as_ref().display()
    );
    let (x_range, z_range) = side_view_bounds(points);

    let root = SVGBackend::new(filepath.as_ref(), size).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .build_cartesian_2d(x_range, z_range)
        .map_err(plot_err)?;

    let backbones: [fn(&HelixPoint) -> Coord; 2] = [HelixPoint::strand_a, HelixPoint::strand_b];
    for strand in backbones {
        chart
            .draw_series(LineSeries::new(
                points.iter().map(|p| {
                    let c = strand(p);
                    (c.x, c.z)
                }),
                BACKBONE_COLOR.mix(0.5).stroke_width(2),
            ))
            .map_err(plot_err)?;
    }

    chart
        .draw_series(points.iter().map(|p| {
            let (a, b) = (p.strand_a(), p.strand_b());
            PathElement::new(
                vec![(a.x, a.z), (b.x, b.z)],
                rgb(p.rung_color()).mix(0.8).stroke_width(1),
            )
        }))
        .map_err(plot_err)?;

    let bases: [(fn(&HelixPoint) -> Coord, fn(&HelixPoint) -> Rgb); 2] = [
        (HelixPoint::strand_a, HelixPoint::color_a),
        (HelixPoint::strand_b, HelixPoint::color_b),
    ];
    for (strand, color) in bases {
        chart
            .draw_series(points.iter().map(|p| {
                let c = strand(p);
                Circle::new((c.x, c.z), 4, rgb(color(p)).filled())
            }))
            .map_err(plot_err)?;
    }

    root.present().map_err(plot_err)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use assert_fs::TempDir;

    use super::*;
    use crate::{genotype::GenotypeRecord, helix::HelixConfig, series::build_helix_series};

    fn points() -> Vec<HelixPoint> {
        let records = vec![
            GenotypeRecord::new("1", 752721, "rs3131972", "AG"),
            GenotypeRecord::new("1", 776546, "rs12124819", "AA"),
            GenotypeRecord::new("2", 1000, "rs1", "--"),
        ];
        build_helix_series(&records, &HelixConfig::new(1.0, 0.5, 0.6283), 3).unwrap()
    }

    #[test]
    fn test_tsv() {
        let mut buf = Vec::new();
        write_tsv(&points(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "index\trsid\tchromosome\tposition\tbase_a\tbase_b\tax\tay\taz\tbx\tby\tbz\t\
             color_a\tcolor_b\trung_color"
        );
        let first: Vec<&str> = lines[1].split('\t').collect();
        assert_eq!(first[0], "0");
        assert_eq!(first[1], "rs3131972");
        assert_eq!(first[2], "1");
        assert_eq!(first[3], "752721");
        assert_eq!(first[4], "A");
        assert_eq!(first[5], "G");
        assert_eq!(first[6].parse::<f64>().unwrap(), 1.0);
        assert_eq!(first[12], "#FF0000");
        assert_eq!(first[13], "#FFFF00");
        assert_eq!(first[14], "#FF0000");
        assert!(lines[3].ends_with("#808080\t#808080\t#808080"));
    }

    #[test]
    fn test_json() {
        let mut buf = Vec::new();
        write_json(&points(), &mut buf).unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(doc["base_pairs"], 3);
        assert_eq!(doc["fallback_color"], "#808080");
        assert_eq!(doc["legend"].as_array().unwrap().len(), 4);
        assert_eq!(doc["legend"][0]["base"], "A");
        assert_eq!(doc["legend"][0]["color"], "#FF0000");
        let points = doc["points"].as_array().unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[1]["rsid"], "rs12124819");
        assert_eq!(points[1]["chromosome"], "1");
        assert_eq!(points[1]["position"], 776546);
        assert_eq!(points[0]["rung_color"], "#FF0000");
        assert_eq!(points[0]["color_b"], "#FFFF00");
        assert_eq!(points[2]["rung_color"], "#808080");
        assert_eq!(points[0]["strand_b"]["x"], -1.0);
        assert_eq!(points[1]["strand_a"]["z"], 0.5);
    }

    #[test]
    fn test_svg() -> eyre::Result<()> {
        let temp_dir = TempDir::new()?;
        let output = temp_dir.join("helix.svg");
        render_svg(&points(), &output, (400, 800))?;
        let svg = std::fs::read_to_string(&output)?.to_uppercase();
        assert!(svg.contains("<SVG"));
        assert!(svg.contains("#FF0000"));
        Ok(())
    }

    #[test]
    fn test_svg_rungs_use_first_allele() -> eyre::Result<()> {
        // Strand A is all T, so every rung is blue.
        let records = vec![
            GenotypeRecord::new("1", 1, "rs1", "TA"),
            GenotypeRecord::new("1", 2, "rs2", "TA"),
        ];
        let points = build_helix_series(&records, &HelixConfig::default(), 2)?;
        let temp_dir = TempDir::new()?;

        let output = temp_dir.join("blue_rungs.svg");
        render_svg(&points, &output, (400, 800))?;
        let svg = std::fs::read_to_string(&output)?.to_uppercase();
        let rung = svg
            .lines()
            .find(|line| line.contains("<POLYLINE") && line.contains("#0000FF"));
        assert!(rung.is_some(), "{svg}");
        Ok(())
    }

    #[test]
    fn test_svg_empty() {
        let res = render_svg(&[], "never_written.svg", (400, 800));
        assert!(matches!(res, Err(OutputError::Empty)));
    }
}
