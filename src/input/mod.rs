//! Interactive user input: prompts, validation and re-prompting.

pub mod parse;
pub mod retry;

pub use retry::RetryPolicy;

use crate::errors::{AppError, AppResult};
use crate::models::{Category, NewTransaction};
use crate::utils::date;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

/// Reads answers from `reader`, writes prompts and validation messages to `writer`.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    policy: RetryPolicy,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self::with_policy(reader, writer, RetryPolicy::default())
    }

    pub fn with_policy(reader: R, writer: W, policy: RetryPolicy) -> Self {
        Self {
            reader,
            writer,
            policy,
        }
    }

    /// Print `prompt` and return the answer without its line terminator.
    /// End of input maps to `AppError::InputClosed`.
    pub fn read_line(&mut self, prompt: &str) -> AppResult<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            writeln!(self.writer)?;
            return Err(AppError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask until `parse` accepts the answer, as allowed by the retry policy.
    pub fn ask<T>(&mut self, prompt: &str, parse: impl Fn(&str) -> AppResult<T>) -> AppResult<T> {
        let mut failures = 0;
        loop {
            let answer = self.read_line(prompt)?;
            match parse(&answer) {
                Ok(v) => return Ok(v),
                Err(AppError::InvalidInput(msg)) => {
                    failures += 1;
                    writeln!(self.writer, "{}", msg)?;
                    if !self.policy.allows_retry(failures) {
                        return Err(AppError::InvalidInput(msg));
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Date in `mm-dd-yyyy`; an empty answer means today when `allow_default` is set.
    pub fn get_date(&mut self, prompt: &str, allow_default: bool) -> AppResult<NaiveDate> {
        self.ask(prompt, |s| {
            if allow_default && s.trim().is_empty() {
                Ok(date::today())
            } else {
                parse::parse_date(s)
            }
        })
    }

    pub fn get_amount(&mut self) -> AppResult<Decimal> {
        self.ask("Enter the amount: ", parse::parse_amount)
    }

    pub fn get_category(&mut self) -> AppResult<Category> {
        self.ask(
            "Enter the category ('I' for Income, 'E' for Expense): ",
            parse::parse_category,
        )
    }

    /// Optional free text; may be empty.
    pub fn get_description(&mut self) -> AppResult<String> {
        Ok(self.read_line("Enter a description (optional): ")?.trim().to_string())
    }

    pub fn get_transaction_id(&mut self) -> AppResult<u32> {
        self.ask("Enter a transaction ID: ", parse::parse_transaction_id)
    }

    /// Every field of a new transaction, in prompt order.
    pub fn get_new_transaction(&mut self) -> AppResult<NewTransaction> {
        let date = self.get_date(
            "Enter the date of the transaction (mm-dd-yyyy) or enter for today's date: ",
            true,
        )?;
        let amount = self.get_amount()?;
        let category = self.get_category()?;
        let description = self.get_description()?;

        Ok(NewTransaction {
            date,
            amount,
            category,
            description,
        })
    }

    /// `y`/`yes` (any case) confirms, anything else declines.
    pub fn confirm(&mut self, prompt: &str) -> AppResult<bool> {
        let answer = self.read_line(prompt)?;
        Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }

    /// Menu selection, trimmed.
    pub fn choice(&mut self, prompt: &str) -> AppResult<String> {
        Ok(self.read_line(prompt)?.trim().to_string())
    }

    /// Writer used for prompts, for callers printing menus.
    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }
}
