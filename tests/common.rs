#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rfintrack::models::{Category, NewTransaction};
use rfintrack::store::RecordStore;
use rust_decimal::Decimal;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

pub fn rft() -> Command {
    cargo_bin_cmd!("rfintrack")
}

/// Create an empty, unique data directory inside the system temp dir
pub fn setup_test_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rfintrack", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path.to_string_lossy().to_string()
}

/// Initialized store inside a fresh test directory
pub fn setup_store(name: &str) -> RecordStore {
    let store = RecordStore::new(setup_test_dir(name));
    store.initialize().expect("initialize store");
    store
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%m-%d-%Y").expect("valid test date")
}

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).expect("valid test amount")
}

pub fn entry(d: &str, amount: &str, category: Category, description: &str) -> NewTransaction {
    NewTransaction {
        date: date(d),
        amount: dec(amount),
        category,
        description: description.to_string(),
    }
}

/// Data lines of a CSV file (header excluded)
pub fn data_lines(dir: &str, file: &str) -> Vec<String> {
    let content = fs::read_to_string(PathBuf::from(dir).join(file)).expect("read csv");
    content.lines().skip(1).map(str::to_string).collect()
}
