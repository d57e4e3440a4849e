//! Interactive numbered menu.
//!
//! Every action returns control to the menu; errors are printed and the loop
//! goes on. The loop ends on "Exit" or when the input stream closes.

use crate::cli::commands::init::initialize_tables;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::del::DeleteLogic;
use crate::core::modify::ModifyLogic;
use crate::core::plot::PlotLogic;
use crate::core::report::{ReportLogic, ranked_report, summary};
use crate::core::view::{ViewLogic, print_transactions};
use crate::errors::{AppError, AppResult};
use crate::input::Prompter;
use crate::models::{Category, FieldValue};
use crate::store::{RecordStore, TableKind};
use crate::ui::messages::{error, info, success, warning};
use crate::utils::date::format_date;
use std::io::{self, BufRead, Write};

const MAIN_MENU: &[&str] = &[
    "1. Add a new transaction",
    "2. View Transactions And Summary/Trend Within A Date Range",
    "3. Modify A Transaction",
    "4. Delete A Transaction",
    "5. View Transactions And Logs",
    "6. View Summary Balance",
    "7. View Income Expense Report",
    "8. Exit",
];

const MODIFY_MENU: &[&str] = &[
    "1. Date",
    "2. Category",
    "3. Amount",
    "4. Description",
    "5. Cancel",
];

const LOG_MENU: &[&str] = &[
    "1. Transactions Log",
    "2. New Entry Log",
    "3. Update Log",
    "4. Delete Log",
    "5. Cancel",
];

const REPORT_MENU: &[&str] = &["1. Income Report", "2. Expense Report", "3. Cancel"];

/// Handle the interactive menu on stdin/stdout.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = cfg.store();
    initialize_tables(&store)?;

    println!("\n💰 rFintrack: personal income and expense tracker");

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    run(&mut prompter, &store, cfg)
}

/// Menu loop over any reader/writer pair.
pub fn run<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    store: &RecordStore,
    cfg: &Config,
) -> AppResult<()> {
    loop {
        print_menu(p, None, MAIN_MENU)?;

        let choice = match p.choice("Enter your choice (1-8): ") {
            Ok(c) => c,
            Err(AppError::InputClosed) => {
                println!("Exiting ....");
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let outcome = match choice.as_str() {
            "1" => add(p, store),
            "2" => date_range(p, store, cfg),
            "3" => modify(p, store),
            "4" => delete(p, store),
            "5" => view_logs(p, store),
            "6" => view_summary(store, cfg),
            "7" => view_reports(p, store, cfg),
            "8" => {
                println!("Exiting ....");
                return Ok(());
            }
            _ => {
                warning("Invalid choice. Enter 1 - 8.");
                Ok(())
            }
        };

        match outcome {
            Ok(()) => {}
            Err(AppError::InputClosed) => {
                println!("Exiting ....");
                return Ok(());
            }
            Err(e) => error(e),
        }
    }
}

fn print_menu<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    title: Option<&str>,
    entries: &[&str],
) -> AppResult<()> {
    let w = p.writer();
    writeln!(w)?;
    if let Some(t) = title {
        writeln!(w, "{}", t)?;
    }
    for entry in entries {
        writeln!(w, "{}", entry)?;
    }
    Ok(())
}

fn add<R: BufRead, W: Write>(p: &mut Prompter<R, W>, store: &RecordStore) -> AppResult<()> {
    let entry = p.get_new_transaction()?;
    AddLogic::apply(store, entry)?;
    Ok(())
}

fn date_range<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    store: &RecordStore,
    cfg: &Config,
) -> AppResult<()> {
    let start = p.get_date("Enter the start date (mm-dd-yyyy): ", false)?;
    let end = p.get_date("Enter the end date (mm-dd-yyyy): ", false)?;

    let rows = store.query_by_date_range(start, end)?;
    if rows.is_empty() {
        info("No transactions found in the given date range.");
        return Ok(());
    }

    print_transactions(
        &format!(
            "Transactions from {} to {}",
            format_date(&start),
            format_date(&end)
        ),
        &rows,
    );
    ReportLogic::print_summary(&summary(&rows), &cfg.currency_symbol);

    if p.confirm("Do you want to see a plot? (y/n): ")? {
        let path = cfg.chart_path();
        PlotLogic::render(&rows, &path)?;
        success(format!("Chart written to {}", path.display()));
    }

    Ok(())
}

/// Ask for an id and check that it exists.
fn verified_id<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    store: &RecordStore,
) -> AppResult<Option<u32>> {
    let id = p.get_transaction_id()?;
    if store.exists(id)? {
        info("Transaction ID found successfully.");
        Ok(Some(id))
    } else {
        warning("Transaction ID NOT FOUND. Please enter a valid transaction id.");
        Ok(None)
    }
}

fn modify<R: BufRead, W: Write>(p: &mut Prompter<R, W>, store: &RecordStore) -> AppResult<()> {
    let Some(id) = verified_id(p, store)? else {
        return Ok(());
    };

    loop {
        print_menu(p, Some("Which do you want to modify: "), MODIFY_MENU)?;

        let value = match p.choice("Enter your choice: ")?.as_str() {
            "1" => FieldValue::Date(p.get_date("Enter the new date (mm-dd-yyyy): ", false)?),
            "2" => FieldValue::Category(p.get_category()?),
            "3" => FieldValue::Amount(p.get_amount()?),
            "4" => FieldValue::Description(p.get_description()?),
            "5" => {
                println!("Exiting ... ");
                return Ok(());
            }
            _ => {
                warning("Invalid choice please try again. Enter 1 - 5.");
                continue;
            }
        };

        if let Err(e) = ModifyLogic::apply(store, id, value) {
            error(format!("Failed to update the transaction. {}", e));
        }
    }
}

fn delete<R: BufRead, W: Write>(p: &mut Prompter<R, W>, store: &RecordStore) -> AppResult<()> {
    let Some(id) = verified_id(p, store)? else {
        return Ok(());
    };

    if !p.confirm(&format!(
        "Delete transaction {}? This action is irreversible. Confirm [y/N]: ",
        id
    ))? {
        info("Operation cancelled.");
        return Ok(());
    }

    DeleteLogic::apply(store, id)?;
    Ok(())
}

fn view_logs<R: BufRead, W: Write>(p: &mut Prompter<R, W>, store: &RecordStore) -> AppResult<()> {
    loop {
        print_menu(p, Some("Which log do you want to view: "), LOG_MENU)?;

        let kind = match p.choice("Enter your choice: ")?.as_str() {
            "1" => TableKind::Transactions,
            "2" => TableKind::NewEntryLog,
            "3" => TableKind::UpdateLog,
            "4" => TableKind::DeleteLog,
            "5" => {
                println!("Exiting ...");
                return Ok(());
            }
            _ => {
                warning("Invalid choice please try again. Enter 1 - 5.");
                continue;
            }
        };

        if let Err(e) = ViewLogic::print_table(store, kind) {
            error(format!("Failed to view records. {}", e));
        }
    }
}

fn view_summary(store: &RecordStore, cfg: &Config) -> AppResult<()> {
    let rows = store.all()?;
    ReportLogic::print_summary(&summary(&rows), &cfg.currency_symbol);
    Ok(())
}

fn view_reports<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    store: &RecordStore,
    cfg: &Config,
) -> AppResult<()> {
    loop {
        print_menu(p, Some("Which report do you want to view: "), REPORT_MENU)?;

        let category = match p.choice("Enter your choice (1 - 3): ")?.as_str() {
            "1" => Category::Income,
            "2" => Category::Expense,
            "3" => {
                println!("Exiting ...");
                return Ok(());
            }
            _ => {
                warning("Invalid choice please try again. Enter 1 - 3.");
                continue;
            }
        };

        match store.all() {
            Ok(rows) => ReportLogic::print_ranked(
                category,
                &ranked_report(&rows, category),
                &cfg.currency_symbol,
            ),
            Err(e) => error(e),
        }
    }
}
