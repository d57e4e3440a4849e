pub mod add;
pub mod config;
pub mod del;
pub mod modify;
pub mod plot;
pub mod report;
pub mod view;

use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use crate::utils::date::now_timestamp;
use tracing::warn;

/// Report the outcome of an audit-log write.
/// A failed write is shown to the user and never propagated.
pub(crate) fn report_log_write(result: AppResult<()>, label: &str) {
    match result {
        Ok(()) => info(format!("Updated {} Log. Timestamp: {}", label, now_timestamp())),
        Err(e) => {
            warn!(error = %e, log = label, "audit log write failed");
            warning(format!(
                "Failed to write to {} Log. Timestamp: {}. {}",
                label,
                now_timestamp(),
                e
            ));
        }
    }
}
