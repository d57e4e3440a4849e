use super::category::Category;
use super::field::{FieldValue, UpdateField};
use crate::utils::date::{format_date, serde_mdy};
use crate::utils::formatting::serde_amount;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the transaction table.
/// Field order matches the table columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: u32,
    #[serde(with = "serde_mdy")]
    pub date: NaiveDate, // ⇔ "mm-dd-yyyy"
    pub category: Category, // ⇔ "Income" | "Expense"
    #[serde(with = "serde_amount")]
    pub amount: Decimal,
    pub description: String,
}

/// Validated user input for a transaction that has no id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: Category,
    pub description: String,
}

impl NewTransaction {
    pub fn with_id(self, transaction_id: u32) -> Transaction {
        Transaction {
            transaction_id,
            date: self.date,
            category: self.category,
            amount: self.amount,
            description: self.description,
        }
    }
}

impl Transaction {
    pub fn date_str(&self) -> String {
        format_date(&self.date)
    }

    /// Current value of a single field.
    pub fn get(&self, field: UpdateField) -> FieldValue {
        match field {
            UpdateField::Date => FieldValue::Date(self.date),
            UpdateField::Category => FieldValue::Category(self.category),
            UpdateField::Amount => FieldValue::Amount(self.amount),
            UpdateField::Description => FieldValue::Description(self.description.clone()),
        }
    }

    /// Overwrite a single field and return its previous value.
    pub fn set(&mut self, value: FieldValue) -> FieldValue {
        let old = self.get(value.field());
        match value {
            FieldValue::Date(d) => self.date = d,
            FieldValue::Category(c) => self.category = c,
            FieldValue::Amount(a) => self.amount = a,
            FieldValue::Description(s) => self.description = s,
        }
        old
    }

    /// Cells in table column order, storage formatted.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.transaction_id.to_string(),
            self.date_str(),
            self.category.to_string(),
            self.amount.to_string(),
            self.description.clone(),
        ]
    }
}
