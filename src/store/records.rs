//! CRUD over the transaction table.
//! Every mutation reads the whole table, changes it in memory and writes it back.

use super::fs_utils::{headers_match, read_raw, rewrite_table};
use super::layout::{StoreLayout, TableKind, TableSpec};
use crate::errors::{AppError, AppResult};
use crate::models::{FieldValue, NewTransaction, Transaction};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The only component touching the persisted tables.
#[derive(Debug, Clone)]
pub struct RecordStore {
    dir: PathBuf,
    layout: StoreLayout,
}

impl RecordStore {
    /// Store with the default file names inside `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_layout(dir, StoreLayout::default())
    }

    pub fn with_layout(dir: impl Into<PathBuf>, layout: StoreLayout) -> Self {
        Self {
            dir: dir.into(),
            layout,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn spec(&self, kind: TableKind) -> &TableSpec {
        self.layout.spec(kind)
    }

    pub fn path(&self, kind: TableKind) -> PathBuf {
        self.dir.join(&self.spec(kind).file_name)
    }

    fn table_err(&self, err: impl std::fmt::Display) -> AppError {
        AppError::persistence(&self.spec(TableKind::Transactions).file_name, err)
    }

    /// Every transaction, in file order.
    pub fn all(&self) -> AppResult<Vec<Transaction>> {
        let spec = self.spec(TableKind::Transactions);
        let mut rdr = ReaderBuilder::new()
            .from_path(self.path(TableKind::Transactions))
            .map_err(|e| self.table_err(e))?;

        let headers = rdr.headers().map_err(|e| self.table_err(e))?;
        if !headers_match(headers, spec.columns) {
            return Err(self.table_err(format!(
                "unexpected columns, expected {}",
                spec.columns.join(",")
            )));
        }

        rdr.deserialize()
            .collect::<Result<Vec<Transaction>, csv::Error>>()
            .map_err(|e| self.table_err(e))
    }

    fn save(&self, rows: &[Transaction]) -> AppResult<()> {
        let spec = self.spec(TableKind::Transactions);
        rewrite_table(&self.path(TableKind::Transactions), spec.columns, rows)
            .map_err(|e| self.table_err(e))?;
        debug!(rows = rows.len(), file = %spec.file_name, "transaction table rewritten");
        Ok(())
    }

    pub fn find(&self, id: u32) -> AppResult<Option<Transaction>> {
        Ok(self.all()?.into_iter().find(|t| t.transaction_id == id))
    }

    pub fn exists(&self, id: u32) -> AppResult<bool> {
        Ok(self.all()?.iter().any(|t| t.transaction_id == id))
    }

    /// Highest id recorded in the log `kind`, 0 when the log does not exist yet.
    ///
    /// Rows without an id (failed adds) are skipped. An unreadable log is an
    /// error: without it a deleted id could be handed out again.
    fn highest_logged_id(&self, kind: TableKind) -> AppResult<u32> {
        let path = self.path(kind);
        if !path.exists() {
            return Ok(0);
        }

        let file_name = &self.spec(kind).file_name;
        let raw = read_raw(&path).map_err(|e| AppError::persistence(file_name, e))?;
        if raw.headers.is_empty() {
            return Ok(0);
        }

        let col = raw
            .column("transaction_id")
            .ok_or_else(|| AppError::persistence(file_name, "missing transaction_id column"))?;

        Ok(raw
            .rows
            .iter()
            .filter_map(|r| r.get(col).and_then(|v| v.trim().parse::<u32>().ok()))
            .max()
            .unwrap_or(0))
    }

    /// Next free id: above every id in the table and every id the new-entry
    /// and delete logs have ever recorded.
    fn next_id_for(&self, rows: &[Transaction]) -> AppResult<u32> {
        let table_max = rows.iter().map(|t| t.transaction_id).max().unwrap_or(0);
        let logged_max = self
            .highest_logged_id(TableKind::NewEntryLog)?
            .max(self.highest_logged_id(TableKind::DeleteLog)?);

        table_max
            .max(logged_max)
            .checked_add(1)
            .ok_or_else(|| self.table_err("transaction ids exhausted"))
    }

    /// Id the next `add` will assign.
    pub fn next_id(&self) -> AppResult<u32> {
        let rows = self.all()?;
        self.next_id_for(&rows)
    }

    /// Append a new transaction and return its id.
    pub fn add(&self, entry: NewTransaction) -> AppResult<u32> {
        let mut rows = self.all()?;
        let id = self.next_id_for(&rows)?;

        rows.push(entry.with_id(id));
        self.save(&rows)?;

        debug!(id, "transaction added");
        Ok(id)
    }

    /// Overwrite one field of the row with `id`, returning the previous value.
    pub fn update(&self, id: u32, value: FieldValue) -> AppResult<FieldValue> {
        let mut rows = self.all()?;
        let row = rows
            .iter_mut()
            .find(|t| t.transaction_id == id)
            .ok_or(AppError::NotFound(id))?;

        let field = value.field();
        let old = row.set(value);
        self.save(&rows)?;

        debug!(id, field = field.column(), "transaction updated");
        Ok(old)
    }

    /// Remove the row with `id` and return it.
    pub fn delete(&self, id: u32) -> AppResult<Transaction> {
        let mut rows = self.all()?;
        let idx = rows
            .iter()
            .position(|t| t.transaction_id == id)
            .ok_or(AppError::NotFound(id))?;

        let removed = rows.remove(idx);
        self.save(&rows)?;

        debug!(id, "transaction deleted");
        Ok(removed)
    }

    /// Transactions dated between `start` and `end`, both inclusive, in file order.
    pub fn query_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<Transaction>> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|t| t.date >= start && t.date <= end)
            .collect())
    }
}
