//! # Essenza Data
//!
//! Catalog loader: reads the semicolon-separated CSV the fragrance dataset
//! ships in and produces [`RawRecord`]s for [`essenza_core`] to validate.
//! Parsing is the loader's whole job — record validation (dropping
//! incomplete rows, duplicate detection) stays in `Catalog::load`.
//!
//! Expected header:
//! `name;brand;gender;scent_direction;season;personality;occasion;price`

use essenza_core::{Engine, RawRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Field delimiter of the source dataset.
pub const DELIMITER: u8 = b';';

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Catalog(#[from] essenza_core::Error),
}

/// Read raw records from any CSV reader using the dataset delimiter.
///
/// Empty cells come through as empty strings from the CSV layer; they are
/// mapped to `None` here so the core sees "missing" uniformly.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<RawRecord>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        let record: RawRecord = row?;
        records.push(normalize_missing(record));
    }
    debug!(records = records.len(), "read catalog records");
    Ok(records)
}

/// Load raw records from a CSV file on disk.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<RawRecord>, LoadError> {
    let file = File::open(path.as_ref())?;
    read_records(file)
}

/// Load a CSV file straight into a ready-to-query [`Engine`].
pub fn load_engine(path: impl AsRef<Path>) -> Result<Engine, LoadError> {
    let records = load_records(path)?;
    Ok(Engine::load(records)?)
}

fn normalize_missing(record: RawRecord) -> RawRecord {
    fn clear_empty(value: Option<String>) -> Option<String> {
        value.filter(|s| !s.is_empty())
    }

    RawRecord {
        name: clear_empty(record.name),
        brand: clear_empty(record.brand),
        gender: clear_empty(record.gender),
        scent_direction: clear_empty(record.scent_direction),
        season: clear_empty(record.season),
        personality: clear_empty(record.personality),
        occasion: clear_empty(record.occasion),
        price: clear_empty(record.price),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "name;brand;gender;scent_direction;season;personality;occasion;price";

    #[test]
    fn test_read_semicolon_rows() {
        let data = format!(
            "{HEADER}\nAria;Dior;Female;Floral;Spring;Romantic;Day;High\nCedrus;Creed;Male;Woody;Winter;Bold;Evening;High\n"
        );
        let records = read_records(data.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name.as_deref(), Some("Aria"));
        assert_eq!(records[1].scent_direction.as_deref(), Some("Woody"));
    }

    #[test]
    fn test_empty_cells_become_missing() {
        let data = format!("{HEADER}\nAria;;Female;Floral;Spring;Romantic;Day;High\n");
        let records = read_records(data.as_bytes()).unwrap();
        assert_eq!(records[0].brand, None);
        assert_eq!(records[0].gender.as_deref(), Some("Female"));
    }

    #[test]
    fn test_load_engine_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        writeln!(file, "Aria;Dior;Female;Floral;Spring;Romantic;Day;High").unwrap();
        writeln!(file, "Nocte;Dior;Female;Floral;Spring;Romantic;Evening;Low").unwrap();
        let engine = load_engine(file.path()).unwrap();
        assert_eq!(engine.len(), 2);
        assert_eq!(engine.recommend("Aria").unwrap()[0].name, "Nocte");
    }

    #[test]
    fn test_incomplete_rows_dropped_by_core() {
        let data = format!(
            "{HEADER}\nAria;Dior;Female;Floral;Spring;Romantic;Day;High\n;NoName;Male;Woody;Winter;Bold;Day;Low\n"
        );
        let records = read_records(data.as_bytes()).unwrap();
        let engine = Engine::load(records).unwrap();
        assert_eq!(engine.len(), 1);
    }
}
