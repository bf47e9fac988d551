//! CSV Loader
//!
//! Reads the predator control CSV into a [`PredatorTable`].
//! The header must carry every column in [`REQUIRED_COLUMNS`]; extra columns are ignored.

use super::error::{DataError, DataResult};
use super::types::{PredatorRecord, PredatorTable, REQUIRED_COLUMNS};
use std::io::Read;
use std::path::Path;

/// Default location of the data file, relative to the working directory
pub const DEFAULT_DATA_PATH: &str = "static/data/Predator_control.csv";

/// Load predator control data from a CSV file
pub fn load_predator_data(path: &Path) -> DataResult<PredatorTable> {
    tracing::debug!(path = %path.display(), "Loading predator control data");

    let file = std::fs::File::open(path)?;
    let table = load_predator_data_from_reader(file)?;

    tracing::info!(
        path = %path.display(),
        rows = table.len(),
        "Loaded predator control data"
    );

    Ok(table)
}

/// Load predator control data from any reader (useful for testing)
pub fn load_predator_data_from_reader<R: Read>(reader: R) -> DataResult<PredatorTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    check_required_columns(&headers)?;

    let records = reader
        .deserialize::<PredatorRecord>()
        .collect::<Result<Vec<_>, _>>()?;

    if records.is_empty() {
        return Err(DataError::Empty);
    }

    Ok(PredatorTable::new(records))
}

/// Fail on the first required column absent from the header row
fn check_required_columns(headers: &csv::StringRecord) -> DataResult<()> {
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DataError::MissingColumn(column.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "Year,Number of Active Traps,Pests Caught,Catch Rate
2019,3200,2100,0.66
2020,4100,3300,0.80
2021,5200,4600,0.88";

    #[test]
    fn test_load_from_reader() {
        let table = load_predator_data_from_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(
            table.records()[1],
            PredatorRecord::new(2020, 4100, 3300, 0.80)
        );
    }

    #[test]
    fn test_column_order_and_extra_columns() {
        let csv_data = "Catch Rate, Year ,Region,Pests Caught,Number of Active Traps
0.5,2018,North,1000,2000
0.75,2019,North,1500,2000";

        let table = load_predator_data_from_reader(csv_data.as_bytes()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0], PredatorRecord::new(2018, 2000, 1000, 0.5));
        assert_eq!(table.records()[1].catch_rate, 0.75);
    }

    #[test]
    fn test_missing_column() {
        let csv_data = "Year,Number of Active Traps,Pests Caught
2019,3200,2100";

        let err = load_predator_data_from_reader(csv_data.as_bytes()).unwrap_err();
        match err {
            DataError::MissingColumn(name) => assert_eq!(name, "Catch Rate"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unparseable_cell() {
        let csv_data = "Year,Number of Active Traps,Pests Caught,Catch Rate
2019,3200,2100,0.66
2020,lots,3300,0.80";

        let err = load_predator_data_from_reader(csv_data.as_bytes()).unwrap_err();
        match err {
            DataError::Parse { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_header_only() {
        let csv_data = "Year,Number of Active Traps,Pests Caught,Catch Rate\n";

        let err = load_predator_data_from_reader(csv_data.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::Empty));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let table = load_predator_data(file.path()).unwrap();
        assert_eq!(table.year_span(), Some((2019, 2021)));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_predator_data(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, DataError::Io(_)));
    }

    #[test]
    fn test_bundled_data_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_DATA_PATH);
        let table = load_predator_data(&path).unwrap();

        assert!(!table.is_empty());
        for record in table.iter() {
            assert!(record.active_traps <= 8000);
            assert!(record.pests_caught <= 8000);
            assert!(record.catch_rate <= 1.8);
        }

        let series = crate::data::prepare_predator_chart_data(&table);
        assert_eq!(series.years.len(), table.len());
        assert_eq!(series.active_traps.len(), table.len());
        assert_eq!(series.pests_caught.len(), table.len());
        assert_eq!(series.catch_rate.len(), table.len());
    }
}
