use crate::errors::AppResult;
use crate::models::Transaction;
use crate::store::{RecordStore, TableKind};
use crate::ui::messages::{footer, header, info};
use crate::utils::colors::{colorize_category, colorize_optional};
use crate::utils::date::now_timestamp;
use crate::utils::table::Table;
use ansi_term::Colour;

/// Table of transactions in column order.
pub fn transactions_table(rows: &[Transaction]) -> Table {
    let mut table = Table::new(crate::store::layout::TRANSACTION_COLUMNS.iter().copied());
    for t in rows {
        let mut cells = t.to_row();
        cells[2] = colorize_category(&cells[2]);
        cells[4] = colorize_optional(&cells[4]);
        table.add_row(cells);
    }
    table
}

pub fn print_transactions(title: &str, rows: &[Transaction]) {
    header(title);
    print!("{}", transactions_table(rows).render());
}

/// Colour of the `update_type` cell in log views.
fn color_for_update_type(kind: &str) -> Colour {
    match kind {
        "New Entry" => Colour::Green,
        "Updated" => Colour::Yellow,
        "Deleted" => Colour::Red,
        _ => Colour::White,
    }
}

/// Success flags are written as `true`/`false`; failures stand out in red.
fn paint_success(flag: &str) -> String {
    if flag.eq_ignore_ascii_case("false") {
        Colour::Red.paint(flag).to_string()
    } else {
        flag.to_string()
    }
}

pub struct ViewLogic;

impl ViewLogic {
    /// Print one of the four tables, or a notice when it has no rows.
    pub fn print_table(store: &RecordStore, kind: TableKind) -> AppResult<()> {
        let spec = store.spec(kind);
        let raw = store.read_table(kind)?;

        header(title_case(spec.title));

        if raw.rows.is_empty() {
            info("There are no records currently available. You should add new records.");
            return Ok(());
        }

        let type_col = raw.column("update_type");
        let success_col = raw.column("success");
        let category_col = raw.column("category");

        let mut table = Table::new(raw.headers.iter().cloned());
        for row in &raw.rows {
            let cells = row
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    if Some(i) == type_col {
                        color_for_update_type(cell).paint(cell.as_str()).to_string()
                    } else if Some(i) == success_col {
                        paint_success(cell)
                    } else if Some(i) == category_col {
                        colorize_category(cell)
                    } else {
                        colorize_optional(cell)
                    }
                })
                .collect();
            table.add_row(cells);
        }

        print!("{}", table.render());
        footer();
        println!("Completed Timestamp: {}", now_timestamp());
        Ok(())
    }
}

/// "transaction records" → "Transaction Records"
pub fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
