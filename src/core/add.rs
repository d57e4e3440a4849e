use super::report_log_write;
use crate::errors::AppResult;
use crate::models::NewTransaction;
use crate::models::audit::NewEntryLog;
use crate::store::RecordStore;
use crate::ui::messages::success;
use crate::utils::date::now_timestamp;

/// High-level business logic for adding a transaction.
pub struct AddLogic;

impl AddLogic {
    /// Persist `entry` and record it in the new-entry log.
    /// Returns the id assigned to the new transaction.
    pub fn apply(store: &RecordStore, entry: NewTransaction) -> AppResult<u32> {
        match store.add(entry) {
            Ok(id) => {
                success(format!("Entry added successfully (ID {}).", id));
                let log = NewEntryLog::new(now_timestamp(), Some(id), true, "Entry added");
                report_log_write(store.append_new_entry(&log), "New Entry");
                Ok(id)
            }
            Err(e) => {
                let log = NewEntryLog::new(now_timestamp(), None, false, &e.to_string());
                report_log_write(store.append_new_entry(&log), "New Entry");
                Err(e)
            }
        }
    }
}
