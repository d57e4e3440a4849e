//! Append-only audit logs.
//! A failed append is reported as `AppError::Logging`, never as a persistence error.

use super::fs_utils::{RawTable, append_row, read_raw};
use super::layout::TableKind;
use super::records::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::audit::{DeleteLog, NewEntryLog, UpdateLog};
use serde::Serialize;
use tracing::debug;

impl RecordStore {
    fn append_log<T: Serialize>(&self, kind: TableKind, row: &T) -> AppResult<()> {
        let spec = self.spec(kind);
        append_row(&self.path(kind), spec.columns, row).map_err(|e| AppError::Logging {
            log: spec.file_name.clone(),
            reason: e.to_string(),
        })?;
        debug!(log = %spec.file_name, "audit row appended");
        Ok(())
    }

    pub fn append_new_entry(&self, entry: &NewEntryLog) -> AppResult<()> {
        self.append_log(TableKind::NewEntryLog, entry)
    }

    pub fn append_update(&self, entry: &UpdateLog) -> AppResult<()> {
        self.append_log(TableKind::UpdateLog, entry)
    }

    pub fn append_delete(&self, entry: &DeleteLog) -> AppResult<()> {
        self.append_log(TableKind::DeleteLog, entry)
    }

    /// Raw content of any table, for display.
    pub fn read_table(&self, kind: TableKind) -> AppResult<RawTable> {
        read_raw(&self.path(kind)).map_err(|e| AppError::persistence(&self.spec(kind).file_name, e))
    }
}
