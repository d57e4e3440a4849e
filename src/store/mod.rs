pub mod audit;
pub mod fs_utils;
pub mod initialize;
pub mod layout;
pub mod records;

pub use fs_utils::RawTable;
pub use initialize::TableStatus;
pub use layout::{StoreLayout, TableFiles, TableKind, TableSpec};
pub use records::RecordStore;
