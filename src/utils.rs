use std::{
    fs::File,
    io::{stdout, Write},
    path::{Path, PathBuf},
};

use chrono::Local;
use eyre::Result;

const FILE_STAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Allows for writing to File or Stdout depending on if a filename is given.
pub fn stdout_or_file<P>(filename: Option<&P>) -> Result<Box<dyn Write>>
where
    P: AsRef<Path>,
{
    if let Some(fp) = filename {
        let handle = File::create(fp)?;
        Ok(Box::new(handle))
    } else {
        let handle = stdout().lock();
        Ok(Box::new(handle))
    }
}

/// `{dir}/{stem}_{YYYYmmdd-HHMMSS}.{ext}` in local time
pub fn timestamped_path<P>(dir: P, stem: &str, ext: &str) -> PathBuf
where
    P: AsRef<Path>,
{
    let stamp = Local::now().format(FILE_STAMP_FORMAT);
    dir.as_ref().join(format!("{stem}_{stamp}.{ext}"))
}

#[cfg(test)]
mod test {
    use chrono::NaiveDateTime;

    use super::*;

    #[test]
    fn test_timestamped_path() {
        let path = timestamped_path("output", "dna_helix", "svg");
        assert_eq!(path.parent(), Some(Path::new("output")));
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("dna_helix_"), "{name}");
        assert!(name.ends_with(".svg"), "{name}");
        let stamp = &name["dna_helix_".len()..name.len() - ".svg".len()];
        assert_eq!(stamp.len(), "20240101-120000".len(), "{stamp}");
        assert!(NaiveDateTime::parse_from_str(stamp, FILE_STAMP_FORMAT).is_ok());
    }
}
