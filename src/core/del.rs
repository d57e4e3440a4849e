use super::report_log_write;
use super::view::print_transactions;
use crate::errors::{AppError, AppResult};
use crate::models::Transaction;
use crate::models::audit::DeleteLog;
use crate::store::RecordStore;
use crate::ui::messages::success;
use crate::utils::date::now_timestamp;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove transaction `id` and record a snapshot of it in the delete log.
    pub fn apply(store: &RecordStore, id: u32) -> AppResult<Transaction> {
        let existing = store.find(id)?.ok_or(AppError::NotFound(id))?;

        match store.delete(id) {
            Ok(removed) => {
                let timestamp = now_timestamp();
                success(format!("Transaction deleted successfully. Updated Time: {}", timestamp));
                print_transactions("Deleted Record", std::slice::from_ref(&removed));

                let log = DeleteLog::snapshot(timestamp, &removed, true, "Deleted entry");
                report_log_write(store.append_delete(&log), "Deleted");
                Ok(removed)
            }
            Err(e) => {
                let log = DeleteLog::snapshot(now_timestamp(), &existing, false, &e.to_string());
                report_log_write(store.append_delete(&log), "Deleted");
                Err(e)
            }
        }
    }
}
