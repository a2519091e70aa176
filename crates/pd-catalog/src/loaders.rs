//! CSV loading for catalog tables.
//!
//! Tables are headered CSV, one file per catalog. The header row names the
//! columns; every other field must parse as a number.

use std::fs::File;
use std::path::Path;

use pd_types::{CatalogError, PdResult};

use crate::store::{Catalog, CatalogStore};

/// Read one catalog table from a headered CSV file.
pub fn load_catalog<P: AsRef<Path>>(name: &str, path: P) -> PdResult<Catalog> {
    let path = path.as_ref();
    tracing::debug!("loading {} catalog from {}", name, path.display());

    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| CatalogError::ParseError {
            message: format!("{name}: failed to read CSV header: {e}"),
        })?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.map_err(|e| CatalogError::ParseError {
            message: format!("{name}: failed to read CSV record {line}: {e}"),
        })?;
        let row = record
            .iter()
            .map(|field| {
                field.parse::<f64>().map_err(|e| CatalogError::ParseError {
                    message: format!("{name}: record {line}: bad numeric field {field:?}: {e}"),
                })
            })
            .collect::<Result<Vec<f64>, CatalogError>>()?;
        rows.push(row);
    }

    Catalog::new(name, columns, rows)
}

/// Load all five catalogs from `<dir>/{materials,tires,motors,brakes,suspensions}.csv`.
pub fn load_store<P: AsRef<Path>>(dir: P) -> PdResult<CatalogStore> {
    let dir = dir.as_ref();
    CatalogStore::new(
        load_catalog("materials", dir.join("materials.csv"))?,
        load_catalog("tires", dir.join("tires.csv"))?,
        load_catalog("motors", dir.join("motors.csv"))?,
        load_catalog("brakes", dir.join("brakes.csv"))?,
        load_catalog("suspensions", dir.join("suspensions.csv"))?,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pd_types::{CatalogError, PdError};
    use std::io::Write;

    #[test]
    fn loads_a_headered_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tires.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "radius,mass").unwrap();
        writeln!(file, "0.25, 9.5").unwrap();
        writeln!(file, "0.30, 12.0").unwrap();

        let catalog = load_catalog("tires", &path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.columns(), ["radius", "mass"]);
        assert_eq!(catalog.value(1, "radius").unwrap(), 0.30);
    }

    #[test]
    fn non_numeric_field_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("materials.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "density").unwrap();
        writeln!(file, "aluminium").unwrap();

        match load_catalog("materials", &path) {
            Err(PdError::Catalog(CatalogError::ParseError { message })) => {
                assert!(message.contains("aluminium"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_catalog("tires", dir.path().join("nope.csv"));
        assert!(matches!(result, Err(PdError::Io(_))));
    }
}
