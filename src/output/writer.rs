//! CSV serialization of a dataset.
//!
//! Records end in `\n`, fields are quoted only when they need to be (so
//! multi-country `Visited` values always are), and floats use the shortest
//! representation that round-trips.

use crate::models::{Dataset, MktestError, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Write `dataset` as CSV, header first, to any sink.
pub fn write_csv<W: Write>(dataset: &Dataset, sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(sink);

    writer.write_record(Dataset::header())?;
    for row in &dataset.rows {
        writer.serialize(row)?;
    }
    writer
        .flush()
        .map_err(|e| MktestError::io("flushing CSV output", e))?;

    Ok(())
}

/// Write `dataset` to `path`, replacing any existing file.
///
/// Output goes to `<path>.tmp` first and is renamed into place, so a failed
/// write never leaves a truncated file at `path`. The parent directory must
/// already exist.
pub fn save_csv(dataset: &Dataset, path: &Path) -> Result<()> {
    let temp_path = temp_path_for(path);

    let written = write_to(dataset, &temp_path).and_then(|()| {
        // Atomic rename
        fs::rename(&temp_path, path).map_err(|e| MktestError::io("renaming output file", e))
    });

    if let Err(e) = written {
        if temp_path.exists() {
            if let Err(cleanup) = fs::remove_file(&temp_path) {
                warn!(path = %temp_path.display(), error = %cleanup, "Failed to remove temp output");
            }
        }
        return Err(e);
    }

    debug!(path = %path.display(), rows = dataset.len(), "CSV saved");
    Ok(())
}

fn write_to(dataset: &Dataset, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| MktestError::io("creating output file", e))?;
    let mut writer = BufWriter::new(file);
    write_csv(dataset, &mut writer)?;
    writer
        .into_inner()
        .map_err(|e| MktestError::io("flushing output file", e.into_error()))?
        .sync_all()
        .map_err(|e| MktestError::io("syncing output file", e))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Row, Token};
    use tempfile::TempDir;

    fn dataset() -> Dataset {
        Dataset {
            countries: vec!["ta".into(), "kiro".into(), "ev".into()],
            rows: vec![
                Row {
                    name: "awi".into(),
                    country: "ta".into(),
                    visited: ["ta", "kiro"].into_iter().map(Token::from).collect(),
                    restlessness: 50.0,
                    mobility: 55.0,
                },
                Row {
                    name: "nu".into(),
                    country: "ev".into(),
                    visited: ["ev"].into_iter().map(Token::from).collect(),
                    restlessness: 37.25,
                    mobility: 1.5,
                },
            ],
        }
    }

    #[test]
    fn test_write_csv_format() {
        let mut out = Vec::new();
        write_csv(&dataset(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Name,Country,Visited,Restlessness,Mobility\n\
             awi,ta,\"kiro,ta\",50.0,55.0\n\
             nu,ev,ev,37.25,1.5\n"
        );
    }

    #[test]
    fn test_save_csv_replaces_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("demo.csv");
        fs::write(&path, "stale contents that are much longer than a header\n".repeat(100))
            .unwrap();

        save_csv(&dataset(), &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Name,Country,Visited,Restlessness,Mobility\n"));
        assert!(!text.contains("stale"));
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_save_csv_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("demo.csv");

        let err = save_csv(&dataset(), &path).unwrap_err();
        assert!(matches!(err, MktestError::Io { .. }));
        assert!(!path.exists());
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_save_csv_failed_rename_removes_temp() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep.txt"), "occupied").unwrap();

        let err = save_csv(&dataset(), &path).unwrap_err();
        assert!(matches!(err, MktestError::Io { .. }));
        assert!(path.join("keep.txt").exists());
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let path = Path::new("data/demo.csv");
        assert_eq!(temp_path_for(path), PathBuf::from("data/demo.csv.tmp"));
    }
}
