use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{RecordStore, TableStatus};
use crate::ui::messages::{header, info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - the data directory
///  - the transaction table and the three audit logs
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.dir.clone(), cli.test)?;

    println!("⚙️  Initializing rFintrack…");
    println!("🗄️  Data directory : {}", cfg.data_path().display());

    initialize_tables(&cfg.store())?;

    println!("🎉 rFintrack initialization completed!");
    Ok(())
}

/// Create missing tables and report the state of each one.
pub fn initialize_tables(store: &RecordStore) -> AppResult<()> {
    header("File Status");

    for (kind, status) in store.initialize()? {
        let file = &store.spec(kind).file_name;
        match status {
            TableStatus::Read => info(format!("Successfully read {}", file)),
            TableStatus::Created => success(format!("Initialized CSV file: {}", file)),
        }
    }

    Ok(())
}
