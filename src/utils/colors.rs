/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Net saving color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_net(value: rust_decimal::Decimal) -> &'static str {
    if value.is_zero() {
        RESET
    } else if value.is_sign_positive() {
        GREEN
    } else {
        RED
    }
}

/// Income cells are green, expense cells red, anything else untouched.
pub fn colorize_category(value: &str) -> String {
    match value {
        "Income" => format!("{GREEN}{value}{RESET}"),
        "Expense" => format!("{RED}{value}{RESET}"),
        _ => value.to_string(),
    }
}

/// Empty cells are shown greyed out as `--`.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}
