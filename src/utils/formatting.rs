//! Formatting utilities used for CLI and report outputs.

use rust_decimal::Decimal;

/// Render an amount with a currency symbol and two decimals, e.g. `$40.00`.
/// Negative values carry the sign after the symbol (`$-5.00`).
pub fn money(symbol: &str, value: Decimal) -> String {
    let rounded = value.round_dp(2);
    if rounded.is_zero() {
        format!("{}{:.2}", symbol, Decimal::ZERO)
    } else {
        format!("{}{:.2}", symbol, rounded)
    }
}

/// Section banner in the style of the console reports.
pub fn banner(title: &str) -> String {
    format!("//////////////////// {} ////////////////////", title)
}

/// Serde adapter storing a `Decimal` as its plain string form.
pub mod serde_amount {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};
    use std::str::FromStr;

    pub fn serialize<S>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&amount.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Decimal::from_str(raw.trim()).map_err(|e| D::Error::custom(format!("invalid amount '{raw}': {e}")))
    }
}
