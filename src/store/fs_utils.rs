//! Low level CSV file helpers shared by the transaction table and the logs.

use csv::{ReaderBuilder, WriterBuilder};
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Header and raw cells of a table, as read from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Replace the whole file with `columns` followed by `rows`.
///
/// The content is written to a sibling `.tmp` file first and renamed over
/// `path` afterwards. A failed write leaves the table untouched.
pub(crate) fn rewrite_table<T: Serialize>(
    path: &Path,
    columns: &[&str],
    rows: &[T],
) -> Result<(), csv::Error> {
    let tmp = tmp_path(path);

    let written = (|| -> Result<(), csv::Error> {
        let mut wtr = WriterBuilder::new().has_headers(false).from_path(&tmp)?;
        wtr.write_record(columns)?;
        for row in rows {
            wtr.serialize(row)?;
        }
        let file = wtr.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
        Ok(())
    })();

    if let Err(e) = written {
        fs::remove_file(&tmp).ok();
        return Err(e);
    }

    fs::rename(&tmp, path)?;
    Ok(())
}

/// Append a single row, writing the header first when the file is new or empty.
pub(crate) fn append_row<T: Serialize>(
    path: &Path,
    columns: &[&str],
    row: &T,
) -> Result<(), csv::Error> {
    let needs_header = fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);

    if needs_header {
        wtr.write_record(columns)?;
    }
    wtr.serialize(row)?;
    wtr.flush()?;
    Ok(())
}

/// Read headers and every record as plain strings.
pub(crate) fn read_raw(path: &Path) -> Result<RawTable, csv::Error> {
    let mut rdr = ReaderBuilder::new().from_path(path)?;
    let headers = rdr.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        rows.push(record?.iter().map(str::to_string).collect());
    }

    Ok(RawTable { headers, rows })
}

/// Whether the header row equals the declared columns.
pub(crate) fn headers_match(headers: &csv::StringRecord, columns: &[&str]) -> bool {
    headers.len() == columns.len() && headers.iter().zip(columns).all(|(h, c)| h == *c)
}
