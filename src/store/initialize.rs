use super::fs_utils::{headers_match, rewrite_table};
use super::layout::TableKind;
use super::records::RecordStore;
use crate::errors::{AppError, AppResult};
use csv::ReaderBuilder;
use std::fs;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    /// Present with the expected header; left untouched.
    Read,
    /// Missing or empty; created with its header row.
    Created,
}

impl RecordStore {
    /// Make sure the data directory and all four tables exist.
    pub fn initialize(&self) -> AppResult<Vec<(TableKind, TableStatus)>> {
        fs::create_dir_all(self.dir())
            .map_err(|e| AppError::persistence(&self.dir().display().to_string(), e))?;

        let mut out = Vec::with_capacity(TableKind::ALL.len());
        for kind in TableKind::ALL {
            out.push((kind, self.initialize_table(kind)?));
        }
        Ok(out)
    }

    fn initialize_table(&self, kind: TableKind) -> AppResult<TableStatus> {
        let spec = self.spec(kind);
        let path = self.path(kind);
        let err = |e: &dyn std::fmt::Display| AppError::persistence(&spec.file_name, e);

        let is_empty = match fs::metadata(&path) {
            Ok(m) => m.len() == 0,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
            Err(e) => return Err(err(&e)),
        };

        if is_empty {
            rewrite_table::<()>(&path, spec.columns, &[]).map_err(|e| err(&e))?;
            info!(file = %spec.file_name, "table created");
            return Ok(TableStatus::Created);
        }

        let mut rdr = ReaderBuilder::new().from_path(&path).map_err(|e| err(&e))?;
        let headers = rdr.headers().map_err(|e| err(&e))?;
        if !headers_match(headers, spec.columns) {
            return Err(err(&format!(
                "unexpected columns, expected {}",
                spec.columns.join(",")
            )));
        }

        Ok(TableStatus::Read)
    }
}
