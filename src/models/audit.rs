//! Rows of the three append-only audit logs.
//! Field order matches the log columns.

use super::transaction::Transaction;
use crate::utils::date::serde_mdy;
use crate::utils::formatting::serde_amount;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const NEW_ENTRY: &str = "New Entry";
pub const UPDATED: &str = "Updated";
pub const DELETED: &str = "Deleted";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEntryLog {
    pub timestamp: String,
    /// Empty when the add failed before an id was assigned.
    pub transaction_id: Option<u32>,
    pub update_type: String,
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateLog {
    pub timestamp: String,
    pub transaction_id: u32,
    pub update_type: String,
    pub field_update: String,
    pub success: bool,
    pub old_value: String,
    pub new_value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteLog {
    pub timestamp: String,
    pub transaction_id: u32,
    pub update_type: String,
    pub message: String,
    pub success: bool,
    #[serde(with = "serde_mdy")]
    pub del_record_date: NaiveDate,
    pub del_record_category: String,
    #[serde(with = "serde_amount")]
    pub del_record_amount: Decimal,
    pub del_record_description: String,
}

impl NewEntryLog {
    pub fn new(timestamp: String, transaction_id: Option<u32>, success: bool, message: &str) -> Self {
        Self {
            timestamp,
            transaction_id,
            update_type: NEW_ENTRY.to_string(),
            success,
            message: message.to_string(),
        }
    }
}

impl DeleteLog {
    /// Snapshot of the removed row.
    pub fn snapshot(timestamp: String, removed: &Transaction, success: bool, message: &str) -> Self {
        Self {
            timestamp,
            transaction_id: removed.transaction_id,
            update_type: DELETED.to_string(),
            message: message.to_string(),
            success,
            del_record_date: removed.date,
            del_record_category: removed.category.to_string(),
            del_record_amount: removed.amount,
            del_record_description: removed.description.clone(),
        }
    }
}
