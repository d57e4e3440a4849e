use super::category::Category;
use crate::utils::date::format_date;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;

/// Fields of a transaction that can be modified after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateField {
    Date,
    Category,
    Amount,
    Description,
}

impl UpdateField {
    /// Column name in the transaction table.
    pub fn column(&self) -> &'static str {
        match self {
            UpdateField::Date => "date",
            UpdateField::Category => "category",
            UpdateField::Amount => "amount",
            UpdateField::Description => "description",
        }
    }
}

/// A typed value for one field, used for single-field updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Date(NaiveDate),
    Category(Category),
    Amount(Decimal),
    Description(String),
}

impl FieldValue {
    pub fn field(&self) -> UpdateField {
        match self {
            FieldValue::Date(_) => UpdateField::Date,
            FieldValue::Category(_) => UpdateField::Category,
            FieldValue::Amount(_) => UpdateField::Amount,
            FieldValue::Description(_) => UpdateField::Description,
        }
    }
}

/// Storage representation, the same text the table holds.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Date(d) => f.write_str(&format_date(d)),
            FieldValue::Category(c) => f.write_str(c.as_str()),
            FieldValue::Amount(a) => write!(f, "{}", a),
            FieldValue::Description(s) => f.write_str(s),
        }
    }
}
