//! Pure validators behind the interactive prompts.
//! Each returns the normalized value or an `InvalidInput` error carrying the
//! message shown to the user before re-prompting.

use crate::errors::{AppError, AppResult};
use crate::models::Category;
use crate::utils::date;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

pub fn parse_date(input: &str) -> AppResult<NaiveDate> {
    date::parse_date(input).ok_or_else(|| {
        AppError::InvalidInput("Invalid date format. Please enter the date in mm-dd-yyyy format.".into())
    })
}

/// Positive amount; zero and negative values are rejected.
pub fn parse_amount(input: &str) -> AppResult<Decimal> {
    let amount = Decimal::from_str(input.trim())
        .map_err(|_| AppError::InvalidInput(format!("Could not read '{}' as an amount", input.trim())))?;

    if amount <= Decimal::ZERO {
        return Err(AppError::InvalidInput(
            "Amount must be a non-negative non-zero value".into(),
        ));
    }
    Ok(amount)
}

pub fn parse_category(input: &str) -> AppResult<Category> {
    Category::from_code(input).ok_or_else(|| {
        AppError::InvalidInput(
            "Invalid category entered. Please enter 'I' for Income, 'E' for Expense.".into(),
        )
    })
}

pub fn parse_transaction_id(input: &str) -> AppResult<u32> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| AppError::InvalidInput("Transaction ID must be a whole number.".into()))
}
