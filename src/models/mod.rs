pub mod audit;
pub mod category;
pub mod field;
pub mod transaction;

pub use category::Category;
pub use field::{FieldValue, UpdateField};
pub use transaction::{NewTransaction, Transaction};
