//! Shared helpers for append-only CSV files.

use serde::Serialize;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::domain::repositories::StoreResult;

/// Writes `header` to `path` if the file does not exist yet or is empty.
///
/// Returns true if the header was written.
pub fn ensure_header(path: &Path, header: &[&str]) -> StoreResult<bool> {
    if let Ok(metadata) = fs::metadata(path)
        && !(metadata.is_file() && metadata.len() == 0)
    {
        return Ok(false);
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(header)?;
    writer.flush()?;
    Ok(true)
}

/// Appends one serialized row to `path`, creating the file with `header` first if needed.
///
/// A file whose last line lacks a terminating newline gets one before the new
/// row, so hand-edited stores do not merge two records into one line.
pub fn append_row<T: Serialize>(path: &Path, header: &[&str], row: &T) -> StoreResult<()> {
    ensure_header(path, header)?;

    let mut file = OpenOptions::new().read(true).append(true).open(path)?;
    if !ends_with_newline(&mut file)? {
        file.write_all(b"\n")?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.serialize(row)?;
    writer.flush()?;
    Ok(())
}

fn ends_with_newline(file: &mut File) -> std::io::Result<bool> {
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::Start(len - 1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
