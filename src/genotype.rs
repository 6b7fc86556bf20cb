//! Reading genotype calls from raw data exports.
//!
//! Files are tab separated with one call per line, lines starting with `#` are
//! treated as comments. Only the first four columns are used, extra columns
//! are ignored.
use std::{fs::File, io::Read, path::Path, str::FromStr};

use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;

use crate::base::NO_CALL;

#[derive(Error, Debug)]
pub enum GenotypeError {
    #[error("Line {line}: missing {field} column")]
    MissingField { line: u64, field: &'static str },
    #[error("Line {line}: invalid position {value:?}")]
    InvalidPosition { line: u64, value: String },
    #[error("Invalid column order {0:?}, either 'rsid-first' or 'chrom-first'")]
    InvalidColumnOrder(String),
    #[error("Failed to read genotype file: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Layout of the first four columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColumnOrder {
    /// `rsid chromosome position genotype`, AncestryDNA style export
    #[default]
    RsidFirst,
    /// `chromosome position rsid genotype`
    ChromosomeFirst,
}

impl ColumnOrder {
    fn indices(&self) -> [(usize, &'static str); 4] {
        match self {
            ColumnOrder::RsidFirst => [
                (1, "chromosome"),
                (2, "position"),
                (0, "rsid"),
                (3, "genotype"),
            ],
            ColumnOrder::ChromosomeFirst => [
                (0, "chromosome"),
                (1, "position"),
                (2, "rsid"),
                (3, "genotype"),
            ],
        }
    }
}

impl FromStr for ColumnOrder {
    type Err = GenotypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rsid-first" => Ok(ColumnOrder::RsidFirst),
            "chrom-first" => Ok(ColumnOrder::ChromosomeFirst),
            _ => Err(GenotypeError::InvalidColumnOrder(s.to_owned())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenotypeRecord {
    chromosome: String,
    position: u64,
    rsid: String,
    genotype: String,
}

impl GenotypeRecord {
    pub fn new<S>(chromosome: S, position: u64, rsid: S, genotype: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            chromosome: chromosome.into(),
            position,
            rsid: rsid.into(),
            genotype: genotype.into(),
        }
    }

    fn from_string_record(
        record: &StringRecord,
        order: ColumnOrder,
        line: u64,
    ) -> Result<Self, GenotypeError> {
        let [chrom, pos, rsid, genotype] = order.indices().map(|(idx, field)| {
            record
                .get(idx)
                .ok_or(GenotypeError::MissingField { line, field })
        });
        let pos = pos?;
        let position = pos
            .parse::<u64>()
            .map_err(|_| GenotypeError::InvalidPosition {
                line,
                value: pos.to_owned(),
            })?;
        Ok(GenotypeRecord::new(chrom?, position, rsid?, genotype?))
    }

    pub fn chromosome(&self) -> &str {
        self.chromosome.as_ref()
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn rsid(&self) -> &str {
        self.rsid.as_ref()
    }

    pub fn genotype(&self) -> &str {
        self.genotype.as_ref()
    }

    /// First and second allele of the call, a missing allele is reported as
    /// [`NO_CALL`].
    pub fn alleles(&self) -> (char, char) {
        let mut chars = self.genotype.chars();
        let first = chars.next().unwrap_or(NO_CALL);
        let second = chars.next().unwrap_or(NO_CALL);
        (first, second)
    }
}

/// Parse genotype records from `reader`, stopping after `limit` records if
/// given.
pub fn read_records<R>(
    reader: R,
    order: ColumnOrder,
    limit: Option<usize>,
) -> Result<Vec<GenotypeRecord>, GenotypeError>
where
    R: Read,
{
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .comment(Some(b'#'))
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let limit = limit.unwrap_or(usize::MAX);
    let mut acc = Vec::new();
    let mut record = StringRecord::new();
    while acc.len() < limit && reader.read_record(&mut record)? {
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let genotype = GenotypeRecord::from_string_record(&record, order, line)?;
        log::debug!("line {line}: {genotype:?}");
        acc.push(genotype);
    }
    log::info!("Read {} genotype records", acc.len());
    Ok(acc)
}

pub fn load_records<P>(
    filepath: P,
    order: ColumnOrder,
    limit: Option<usize>,
) -> Result<Vec<GenotypeRecord>, GenotypeError>
where
    P: AsRef<Path>,
{
    log::info!("Parsing DNA data from {}", filepath.as_ref().display());
    let file = File::open(filepath)?;
    read_records(file, order, limit)
}

#[cfg(test)]
mod test {
    use assert_fs::TempDir;
    use pretty_assertions::assert_eq;

    use super::*;

    const ANCESTRY: &str = "#AncestryDNA raw data export
#Generated on 1700000000
#RSID\tCHROMOSOME\tPOSITION\tGENOTYPE
rs3131972\t1\t752721\tAG
rs12124819\t1\t776546\tAA
rs11240777\t1\t798959\t--
";

    #[test]
    fn test_read_rsid_first() {
        let records = read_records(ANCESTRY.as_bytes(), ColumnOrder::RsidFirst, None).unwrap();
        assert_eq!(
            records,
            vec![
                GenotypeRecord::new("1", 752721, "rs3131972", "AG"),
                GenotypeRecord::new("1", 776546, "rs12124819", "AA"),
                GenotypeRecord::new("1", 798959, "rs11240777", "--"),
            ]
        );
    }

    #[test]
    fn test_read_chrom_first() {
        let data = "1\t752721\trs3131972\tAG\nX\t100\trs1\tCT\textra\n";
        let records = read_records(data.as_bytes(), ColumnOrder::ChromosomeFirst, None).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].rsid(), "rs3131972");
        assert_eq!(records[1].chromosome(), "X");
        assert_eq!(records[1].position(), 100);
        assert_eq!(records[1].genotype(), "CT");
    }

    #[test]
    fn test_limit() {
        let records = read_records(ANCESTRY.as_bytes(), ColumnOrder::RsidFirst, Some(2)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].rsid(), "rs12124819");

        let records = read_records(ANCESTRY.as_bytes(), ColumnOrder::RsidFirst, Some(0)).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_errors() {
        let res = read_records("rs1\t1\n".as_bytes(), ColumnOrder::RsidFirst, None);
        assert!(matches!(
            res,
            Err(GenotypeError::MissingField {
                field: "position",
                ..
            })
        ));

        let res = read_records("rs1\t1\tfoo\tAA\n".as_bytes(), ColumnOrder::RsidFirst, None);
        match res {
            Err(GenotypeError::InvalidPosition { line, value }) => {
                assert_eq!(line, 1);
                assert_eq!(value, "foo");
            }
            other => panic!("Expected invalid position, got {other:?}"),
        }
    }

    #[test]
    fn test_alleles() {
        assert_eq!(GenotypeRecord::new("1", 1, "rs1", "AG").alleles(), ('A', 'G'));
        assert_eq!(GenotypeRecord::new("1", 1, "rs1", "T").alleles(), ('T', NO_CALL));
        assert_eq!(GenotypeRecord::new("1", 1, "rs1", "").alleles(), (NO_CALL, NO_CALL));
        assert_eq!(GenotypeRecord::new("1", 1, "rs1", "ID").alleles(), ('I', 'D'));
    }

    #[test]
    fn test_column_order() {
        assert_eq!("rsid-first".parse::<ColumnOrder>().unwrap(), ColumnOrder::RsidFirst);
        assert_eq!(
            "chrom-first".parse::<ColumnOrder>().unwrap(),
            ColumnOrder::ChromosomeFirst
        );
        assert!("quack".parse::<ColumnOrder>().is_err());
    }

    #[test]
    fn test_load_records() -> eyre::Result<()> {
        let temp_dir = TempDir::new()?;
        let file = temp_dir.join("dna.txt");
        std::fs::write(&file, ANCESTRY)?;
        let records = load_records(&file, ColumnOrder::RsidFirst, Some(1))?;
        assert_eq!(records, vec![GenotypeRecord::new("1", 752721, "rs3131972", "AG")]);
        Ok(())
    }
}
