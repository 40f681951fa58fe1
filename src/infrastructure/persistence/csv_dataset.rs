//! Admissions dataset loader.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::entities::AdmissionRecord;
use crate::domain::query::AdmissionTable;

/// Dataset loading failure. Fatal at startup.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("cannot open dataset {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("invalid dataset row {line}: {source}")]
    Row {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

/// Reads the whole admissions CSV into memory.
///
/// Expects the `NAME`, `COURSE`, `CATEGORY`, `GENDER`, `YEAR` and
/// `CLOSE RANK` columns; other columns are ignored. Fields are trimmed.
///
/// # Errors
///
/// Returns [`DatasetError::Open`] if the file cannot be opened and
/// [`DatasetError::Row`] on the first row that does not parse.
pub fn load_admissions(path: &Path) -> Result<AdmissionTable, DatasetError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| DatasetError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let table = read_admissions(reader)?;

    if table.is_empty() {
        tracing::warn!(path = %path.display(), "dataset contains no rows");
    }

    Ok(table)
}

/// Reads admissions from any CSV reader.
///
/// # Errors
///
/// Returns [`DatasetError::Row`] on the first row that does not parse.
pub fn read_admissions<R: std::io::Read>(
    mut reader: csv::Reader<R>,
) -> Result<AdmissionTable, DatasetError> {
    let mut records = Vec::new();

    for row in reader.deserialize::<AdmissionRecord>() {
        let record = row.map_err(|source| DatasetError::Row {
            line: source.position().map(|p| p.line()).unwrap_or(0),
            source,
        })?;
        records.push(record);
    }

    Ok(AdmissionTable::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_ignores_extra_columns_and_trims() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "ID,NAME,COURSE,CATEGORY,GENDER,YEAR,CLOSE RANK,ROUND").unwrap();
        writeln!(file, "1, IIT X ,CS,GEN,M,2021,100,6").unwrap();
        writeln!(file, "2,IIT X,CS,GEN,M,2022,120.5,6").unwrap();

        let table = load_admissions(file.path()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0].college, "IIT X");
        assert_eq!(table.records()[1].closing_rank, 120.5);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = load_admissions(Path::new("/nonexistent/Data.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Open { .. }));
    }

    #[test]
    fn test_load_bad_rank_reports_row() {
        let data = "NAME,COURSE,CATEGORY,GENDER,YEAR,CLOSE RANK\nA,B,GEN,M,2021,abc\n";
        let reader = csv::Reader::from_reader(data.as_bytes());

        let err = read_admissions(reader).unwrap_err();
        assert!(matches!(err, DatasetError::Row { line: 2, .. }));
    }
}
