//! Immutable description of the four tables: file names and column sets.

use serde::{Deserialize, Serialize};

pub const TRANSACTION_COLUMNS: &[&str] = &[
    "transaction_id",
    "date",
    "category",
    "amount",
    "description",
];

pub const NEW_ENTRY_LOG_COLUMNS: &[&str] = &[
    "timestamp",
    "transaction_id",
    "update_type",
    "success",
    "message",
];

pub const DELETE_LOG_COLUMNS: &[&str] = &[
    "timestamp",
    "transaction_id",
    "update_type",
    "message",
    "success",
    "del_record_date",
    "del_record_category",
    "del_record_amount",
    "del_record_description",
];

pub const UPDATE_LOG_COLUMNS: &[&str] = &[
    "timestamp",
    "transaction_id",
    "update_type",
    "field_update",
    "success",
    "old_value",
    "new_value",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Transactions,
    NewEntryLog,
    DeleteLog,
    UpdateLog,
}

impl TableKind {
    pub const ALL: [TableKind; 4] = [
        TableKind::Transactions,
        TableKind::NewEntryLog,
        TableKind::DeleteLog,
        TableKind::UpdateLog,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    /// Human readable name used in messages.
    pub title: &'static str,
    pub file_name: String,
    pub columns: &'static [&'static str],
}

/// File names of the four tables, as stored in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableFiles {
    #[serde(default = "default_transactions_file")]
    pub transactions: String,
    #[serde(default = "default_new_entry_log_file")]
    pub new_entry_log: String,
    #[serde(default = "default_delete_log_file")]
    pub delete_log: String,
    #[serde(default = "default_update_log_file")]
    pub update_log: String,
}

fn default_transactions_file() -> String {
    "finance_data.csv".to_string()
}
fn default_new_entry_log_file() -> String {
    "new_entry_log.csv".to_string()
}
fn default_delete_log_file() -> String {
    "delete_log.csv".to_string()
}
fn default_update_log_file() -> String {
    "update_log.csv".to_string()
}

impl Default for TableFiles {
    fn default() -> Self {
        Self {
            transactions: default_transactions_file(),
            new_entry_log: default_new_entry_log_file(),
            delete_log: default_delete_log_file(),
            update_log: default_update_log_file(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLayout {
    transactions: TableSpec,
    new_entry_log: TableSpec,
    delete_log: TableSpec,
    update_log: TableSpec,
}

impl StoreLayout {
    pub fn from_files(files: &TableFiles) -> Self {
        Self {
            transactions: TableSpec {
                title: "transaction records",
                file_name: files.transactions.clone(),
                columns: TRANSACTION_COLUMNS,
            },
            new_entry_log: TableSpec {
                title: "new entry log records",
                file_name: files.new_entry_log.clone(),
                columns: NEW_ENTRY_LOG_COLUMNS,
            },
            delete_log: TableSpec {
                title: "deleted log records",
                file_name: files.delete_log.clone(),
                columns: DELETE_LOG_COLUMNS,
            },
            update_log: TableSpec {
                title: "update log records",
                file_name: files.update_log.clone(),
                columns: UPDATE_LOG_COLUMNS,
            },
        }
    }

    pub fn spec(&self, kind: TableKind) -> &TableSpec {
        match kind {
            TableKind::Transactions => &self.transactions,
            TableKind::NewEntryLog => &self.new_entry_log,
            TableKind::DeleteLog => &self.delete_log,
            TableKind::UpdateLog => &self.update_log,
        }
    }
}

impl Default for StoreLayout {
    fn default() -> Self {
        Self::from_files(&TableFiles::default())
    }
}
