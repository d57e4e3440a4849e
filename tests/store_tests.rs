mod common;
use common::{data_lines, date, dec, entry, setup_store, setup_test_dir};
use rfintrack::core::add::AddLogic;
use rfintrack::core::del::DeleteLogic;
use rfintrack::core::modify::ModifyLogic;
use rfintrack::errors::AppError;
use rfintrack::models::{Category, FieldValue};
use rfintrack::store::{RecordStore, StoreLayout, TableFiles, TableKind, TableStatus};
use std::fs;
use std::path::Path;

#[test]
fn test_initialize_creates_tables_with_headers() {
    let dir = setup_test_dir("init_creates");
    let store = RecordStore::new(&dir);

    let statuses = store.initialize().expect("initialize");
    assert_eq!(statuses.len(), 4);
    assert!(statuses.iter().all(|(_, s)| *s == TableStatus::Created));

    let header = fs::read_to_string(Path::new(&dir).join("finance_data.csv")).unwrap();
    assert_eq!(header.trim(), "transaction_id,date,category,amount,description");

    let header = fs::read_to_string(Path::new(&dir).join("delete_log.csv")).unwrap();
    assert_eq!(
        header.trim(),
        "timestamp,transaction_id,update_type,message,success,del_record_date,del_record_category,del_record_amount,del_record_description"
    );
}

#[test]
fn test_initialize_is_noop_on_existing_tables() {
    let store = setup_store("init_noop");
    AddLogic::apply(&store, entry("01-15-2024", "100", Category::Income, "Paycheck")).unwrap();

    let statuses = store.initialize().expect("second initialize");
    assert!(statuses.iter().all(|(_, s)| *s == TableStatus::Read));
    assert_eq!(store.all().unwrap().len(), 1, "existing rows must survive");
}

#[test]
fn test_initialize_rejects_unexpected_columns() {
    let dir = setup_test_dir("init_bad_columns");
    fs::write(Path::new(&dir).join("finance_data.csv"), "id,when,what\n").unwrap();

    let err = RecordStore::new(&dir).initialize().unwrap_err();
    assert!(matches!(err, AppError::Persistence { .. }), "got {err:?}");
}

#[test]
fn test_ids_are_increasing_and_never_reused() {
    let store = setup_store("ids_increasing");

    let a = AddLogic::apply(&store, entry("01-01-2024", "10", Category::Expense, "a")).unwrap();
    let b = AddLogic::apply(&store, entry("01-02-2024", "20", Category::Expense, "b")).unwrap();
    assert_eq!((a, b), (1, 2));

    // delete the highest id: its number must not come back
    DeleteLogic::apply(&store, b).unwrap();
    let c = AddLogic::apply(&store, entry("01-03-2024", "30", Category::Expense, "c")).unwrap();
    assert_eq!(c, 3);

    DeleteLogic::apply(&store, a).unwrap();
    let d = AddLogic::apply(&store, entry("01-04-2024", "40", Category::Expense, "d")).unwrap();
    assert_eq!(d, 4);

    let ids: Vec<u32> = store.all().unwrap().iter().map(|t| t.transaction_id).collect();
    assert_eq!(ids, vec![3, 4]);
}

#[test]
fn test_new_entry_log_has_one_row_per_add() {
    let store = setup_store("new_entry_log");
    AddLogic::apply(&store, entry("01-15-2024", "100", Category::Income, "Paycheck")).unwrap();
    AddLogic::apply(&store, entry("01-20-2024", "40", Category::Expense, "Groceries")).unwrap();

    let log = store.read_table(TableKind::NewEntryLog).unwrap();
    assert_eq!(log.rows.len(), 2);

    let id_col = log.column("transaction_id").unwrap();
    let type_col = log.column("update_type").unwrap();
    let ok_col = log.column("success").unwrap();
    assert_eq!(log.rows[1][id_col], "2");
    assert_eq!(log.rows[1][type_col], "New Entry");
    assert_eq!(log.rows[1][ok_col], "true");
}

#[test]
fn test_update_changes_only_target_field_and_logs_old_value() {
    let store = setup_store("update_field");
    AddLogic::apply(&store, entry("01-15-2024", "100", Category::Income, "Paycheck")).unwrap();
    let before = store.find(1).unwrap().unwrap();

    let change = ModifyLogic::apply(&store, 1, FieldValue::Amount(dec("150.25"))).unwrap();
    assert_eq!(change.old_value, FieldValue::Amount(dec("100")));

    let after = store.find(1).unwrap().unwrap();
    assert_eq!(after.amount, dec("150.25"));
    assert_eq!(after.date, before.date);
    assert_eq!(after.category, before.category);
    assert_eq!(after.description, before.description);

    let log = store.read_table(TableKind::UpdateLog).unwrap();
    assert_eq!(log.rows.len(), 1);
    let row = &log.rows[0];
    assert_eq!(row[log.column("field_update").unwrap()], "amount");
    assert_eq!(row[log.column("old_value").unwrap()], "100");
    assert_eq!(row[log.column("new_value").unwrap()], "150.25");
    assert_eq!(row[log.column("update_type").unwrap()], "Updated");
}

#[test]
fn test_update_date_is_logged_in_storage_format() {
    let store = setup_store("update_date");
    AddLogic::apply(&store, entry("01-15-2024", "100", Category::Income, "Paycheck")).unwrap();

    ModifyLogic::apply(&store, 1, FieldValue::Date(date("02-01-2024"))).unwrap();

    let log = store.read_table(TableKind::UpdateLog).unwrap();
    assert_eq!(log.rows[0][log.column("old_value").unwrap()], "01-15-2024");
    assert_eq!(log.rows[0][log.column("new_value").unwrap()], "02-01-2024");
    assert_eq!(store.find(1).unwrap().unwrap().date, date("02-01-2024"));
}

#[test]
fn test_update_unknown_id_is_not_found() {
    let store = setup_store("update_unknown");
    let err = ModifyLogic::apply(&store, 42, FieldValue::Description("x".into())).unwrap_err();
    assert!(matches!(err, AppError::NotFound(42)));
    assert!(store.read_table(TableKind::UpdateLog).unwrap().rows.is_empty());
}

#[test]
fn test_delete_removes_one_row_and_snapshots_it() {
    let store = setup_store("delete_snapshot");
    AddLogic::apply(&store, entry("01-15-2024", "100", Category::Income, "Paycheck")).unwrap();
    AddLogic::apply(&store, entry("01-20-2024", "40.5", Category::Expense, "Groceries, weekly")).unwrap();
    AddLogic::apply(&store, entry("01-21-2024", "12", Category::Expense, "Coffee")).unwrap();

    let removed = DeleteLogic::apply(&store, 2).unwrap();
    assert_eq!(removed.description, "Groceries, weekly");

    let ids: Vec<u32> = store.all().unwrap().iter().map(|t| t.transaction_id).collect();
    assert_eq!(ids, vec![1, 3]);

    let log = store.read_table(TableKind::DeleteLog).unwrap();
    assert_eq!(log.rows.len(), 1);
    let row = &log.rows[0];
    assert_eq!(row[log.column("transaction_id").unwrap()], "2");
    assert_eq!(row[log.column("del_record_date").unwrap()], "01-20-2024");
    assert_eq!(row[log.column("del_record_category").unwrap()], "Expense");
    assert_eq!(row[log.column("del_record_amount").unwrap()], "40.5");
    assert_eq!(row[log.column("del_record_description").unwrap()], "Groceries, weekly");
    assert_eq!(row[log.column("message").unwrap()], "Deleted entry");
}

#[test]
fn test_delete_unknown_id_leaves_table_alone() {
    let store = setup_store("delete_unknown");
    AddLogic::apply(&store, entry("01-15-2024", "100", Category::Income, "Paycheck")).unwrap();

    assert!(matches!(DeleteLogic::apply(&store, 9), Err(AppError::NotFound(9))));
    assert_eq!(store.all().unwrap().len(), 1);
    assert!(store.read_table(TableKind::DeleteLog).unwrap().rows.is_empty());
}

#[test]
fn test_query_by_date_range_is_inclusive() {
    let store = setup_store("range_inclusive");
    AddLogic::apply(&store, entry("12-31-2023", "1", Category::Expense, "before")).unwrap();
    AddLogic::apply(&store, entry("01-01-2024", "2", Category::Expense, "start")).unwrap();
    AddLogic::apply(&store, entry("01-15-2024", "3", Category::Income, "middle")).unwrap();
    AddLogic::apply(&store, entry("01-31-2024", "4", Category::Expense, "end")).unwrap();
    AddLogic::apply(&store, entry("02-01-2024", "5", Category::Expense, "after")).unwrap();

    let rows = store
        .query_by_date_range(date("01-01-2024"), date("01-31-2024"))
        .unwrap();
    let names: Vec<&str> = rows.iter().map(|t| t.description.as_str()).collect();
    assert_eq!(names, vec!["start", "middle", "end"]);
}

#[test]
fn test_exists() {
    let store = setup_store("exists");
    AddLogic::apply(&store, entry("01-15-2024", "100", Category::Income, "Paycheck")).unwrap();
    assert!(store.exists(1).unwrap());
    assert!(!store.exists(2).unwrap());
}

#[test]
fn test_failed_add_leaves_table_unmodified() {
    let dir = setup_test_dir("add_failure");
    let store = RecordStore::new(&dir);
    store.initialize().unwrap();

    // corrupt the header after initialization
    let table = Path::new(&dir).join("finance_data.csv");
    fs::write(&table, "id,when\n7,yesterday\n").unwrap();

    let err = AddLogic::apply(&store, entry("01-15-2024", "100", Category::Income, "Paycheck"))
        .unwrap_err();
    assert!(matches!(err, AppError::Persistence { .. }));
    assert_eq!(fs::read_to_string(&table).unwrap(), "id,when\n7,yesterday\n");

    // the failure is still recorded, without an id
    let lines = data_lines(&dir, "new_entry_log.csv");
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(",,New Entry,false,"));
}

#[test]
fn test_next_id_skips_deleted_highest_id() {
    let store = setup_store("next_id_deleted");
    assert_eq!(store.next_id().unwrap(), 1);

    AddLogic::apply(&store, entry("01-01-2024", "10", Category::Expense, "a")).unwrap();
    AddLogic::apply(&store, entry("01-02-2024", "20", Category::Expense, "b")).unwrap();
    DeleteLogic::apply(&store, 2).unwrap();

    assert_eq!(store.next_id().unwrap(), 3);
}

#[test]
fn test_unreadable_new_entry_log_blocks_add() {
    let dir = setup_test_dir("unreadable_new_entry_log");
    let store = RecordStore::new(&dir);
    store.initialize().unwrap();

    AddLogic::apply(&store, entry("01-01-2024", "10", Category::Expense, "a")).unwrap();
    let b = AddLogic::apply(&store, entry("01-02-2024", "20", Category::Expense, "b")).unwrap();

    // the log can no longer be read
    let log = Path::new(&dir).join("new_entry_log.csv");
    fs::remove_file(&log).unwrap();
    fs::create_dir(&log).unwrap();

    DeleteLogic::apply(&store, b).unwrap();

    let err = AddLogic::apply(&store, entry("01-03-2024", "30", Category::Expense, "c"))
        .unwrap_err();
    assert!(matches!(err, AppError::Persistence { .. }), "got {err:?}");
    assert!(matches!(store.next_id(), Err(AppError::Persistence { .. })));

    let ids: Vec<u32> = store.all().unwrap().iter().map(|t| t.transaction_id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn test_id_exhaustion_is_an_error() {
    let dir = setup_test_dir("id_exhaustion");
    let store = RecordStore::new(&dir);
    store.initialize().unwrap();

    let table = Path::new(&dir).join("finance_data.csv");
    fs::write(
        &table,
        format!(
            "transaction_id,date,category,amount,description\n{},01-01-2024,Expense,5,x\n",
            u32::MAX
        ),
    )
    .unwrap();

    let err = store
        .add(entry("01-02-2024", "10", Category::Expense, "y"))
        .unwrap_err();
    assert!(matches!(err, AppError::Persistence { .. }), "got {err:?}");
    assert_eq!(store.all().unwrap().len(), 1);
}

/// Store whose new-entry log lives in a directory that does not exist,
/// so every append to it fails.
fn store_with_unwritable_new_entry_log(dir: &str) -> RecordStore {
    RecordStore::new(dir).initialize().unwrap();
    let files = TableFiles {
        new_entry_log: "missing/new_entry_log.csv".to_string(),
        ..TableFiles::default()
    };
    RecordStore::with_layout(dir, StoreLayout::from_files(&files))
}

#[test]
fn test_add_succeeds_when_new_entry_log_write_fails() {
    let dir = setup_test_dir("add_log_failure");
    let store = store_with_unwritable_new_entry_log(&dir);

    let id = AddLogic::apply(&store, entry("01-15-2024", "100", Category::Income, "Paycheck"))
        .unwrap();
    assert_eq!(id, 1);
    assert_eq!(
        data_lines(&dir, "finance_data.csv"),
        vec!["1,01-15-2024,Income,100,Paycheck"]
    );
    assert!(!Path::new(&dir).join("missing").exists());
}

#[test]
fn test_unlogged_id_is_not_reused_after_delete() {
    let dir = setup_test_dir("unlogged_id_reuse");
    let store = store_with_unwritable_new_entry_log(&dir);

    let a = AddLogic::apply(&store, entry("01-15-2024", "100", Category::Income, "a")).unwrap();
    DeleteLogic::apply(&store, a).unwrap();

    // only the delete log remembers id 1
    let b = AddLogic::apply(&store, entry("01-16-2024", "50", Category::Income, "b")).unwrap();
    assert_eq!((a, b), (1, 2));
}

#[test]
fn test_modify_succeeds_when_update_log_write_fails() {
    let store = setup_store("modify_log_failure");
    let dir = store.dir().to_string_lossy().to_string();
    AddLogic::apply(&store, entry("01-15-2024", "100", Category::Income, "Paycheck")).unwrap();

    let log = Path::new(&dir).join("update_log.csv");
    fs::remove_file(&log).unwrap();
    fs::create_dir(&log).unwrap();

    let change = ModifyLogic::apply(&store, 1, FieldValue::Amount(dec("120"))).unwrap();
    assert_eq!(change.old_value, FieldValue::Amount(dec("100")));
    assert_eq!(
        data_lines(&dir, "finance_data.csv"),
        vec!["1,01-15-2024,Income,120,Paycheck"]
    );
}

#[test]
fn test_delete_succeeds_when_delete_log_write_fails() {
    let store = setup_store("delete_log_failure");
    let dir = store.dir().to_string_lossy().to_string();
    AddLogic::apply(&store, entry("01-15-2024", "100", Category::Income, "Paycheck")).unwrap();
    AddLogic::apply(&store, entry("01-20-2024", "40", Category::Expense, "Groceries")).unwrap();

    let log = Path::new(&dir).join("delete_log.csv");
    fs::remove_file(&log).unwrap();
    fs::create_dir(&log).unwrap();

    let removed = DeleteLogic::apply(&store, 1).unwrap();
    assert_eq!(removed.description, "Paycheck");
    assert_eq!(
        data_lines(&dir, "finance_data.csv"),
        vec!["2,01-20-2024,Expense,40,Groceries"]
    );
}
