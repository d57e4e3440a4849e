use super::report_log_write;
use super::view::print_transactions;
use crate::errors::{AppError, AppResult};
use crate::models::audit::{UPDATED, UpdateLog};
use crate::models::{FieldValue, UpdateField};
use crate::store::RecordStore;
use crate::ui::messages::success;
use crate::utils::date::now_timestamp;

/// Result of a single-field update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modification {
    pub transaction_id: u32,
    pub field: UpdateField,
    pub old_value: FieldValue,
    pub new_value: FieldValue,
}

pub struct ModifyLogic;

impl ModifyLogic {
    /// Overwrite one field of transaction `id` and record the change in the update log.
    pub fn apply(store: &RecordStore, id: u32, value: FieldValue) -> AppResult<Modification> {
        if !store.exists(id)? {
            return Err(AppError::NotFound(id));
        }

        let field = value.field();
        let new_value = value.clone();

        let mut log = UpdateLog {
            timestamp: now_timestamp(),
            transaction_id: id,
            update_type: UPDATED.to_string(),
            field_update: field.column().to_string(),
            success: false,
            old_value: String::new(),
            new_value: new_value.to_string(),
        };

        match store.update(id, value) {
            Ok(old_value) => {
                success(format!(
                    "Transaction updated successfully. Updated Time: {}",
                    log.timestamp
                ));

                // Display only: the update already succeeded.
                if let Ok(Some(updated)) = store.find(id) {
                    print_transactions("New Updated Record", &[updated]);
                }

                log.success = true;
                log.old_value = old_value.to_string();
                report_log_write(store.append_update(&log), "Updated");

                Ok(Modification {
                    transaction_id: id,
                    field,
                    old_value,
                    new_value,
                })
            }
            Err(e) => {
                report_log_write(store.append_update(&log), "Updated");
                Err(e)
            }
        }
    }
}
