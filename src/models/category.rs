use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Expense, // E
    Income,  // I
}

impl Category {
    /// Every category, in the alphabetical order reports group them.
    pub const ALL: [Category; 2] = [Category::Expense, Category::Income];

    pub fn code(&self) -> &'static str {
        match self {
            Category::Income => "I",
            Category::Expense => "E",
        }
    }

    /// Convert enum → table string
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Income => "Income",
            Category::Expense => "Expense",
        }
    }

    /// Helper: convert input code from the prompt (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_uppercase();
        Category::ALL.into_iter().find(|c| c.code() == code)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
