// 💳 Transaction - one simulated ledger record
//
// Amount sign encodes direction: Salary is the only income category,
// everything else is an expense.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// CATEGORY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Leisure,
    Bills,
    Salary,
    Other,
}

impl Category {
    /// Closed set of categories, in table order.
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transport,
        Category::Leisure,
        Category::Bills,
        Category::Salary,
        Category::Other,
    ];

    /// Sampling weight of this category. Weights over `ALL` sum to 1.0.
    pub fn weight(&self) -> f64 {
        match self {
            Category::Food => 0.30,
            Category::Transport => 0.20,
            Category::Leisure => 0.15,
            Category::Bills => 0.15,
            Category::Salary => 0.10,
            Category::Other => 0.10,
        }
    }

    /// Cumulative-weight lookup for a uniform draw in `[0, 1)`.
    ///
    /// Draws that fall past the last boundary through float rounding land on
    /// the final category.
    pub fn from_unit(draw: f64) -> Category {
        let mut cumulative = 0.0;
        for category in Category::ALL {
            cumulative += category.weight();
            if draw < cumulative {
                return category;
            }
        }
        Category::Other
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Leisure => "Leisure",
            Category::Bills => "Bills",
            Category::Salary => "Salary",
            Category::Other => "Other",
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Category::Salary)
    }

    /// Position in `ALL`, used for fixed-size per-category accumulators.
    pub(crate) fn index(&self) -> usize {
        match self {
            Category::Food => 0,
            Category::Transport => 1,
            Category::Leisure => 2,
            Category::Bills => 3,
            Category::Salary => 4,
            Category::Other => 5,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TRANSACTION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "Date")]
    pub date: NaiveDateTime,

    #[serde(rename = "Amount")]
    pub amount: f64,

    #[serde(rename = "Category")]
    pub category: Category,

    #[serde(rename = "Description")]
    pub description: String,
}

impl Transaction {
    pub fn new(date: NaiveDateTime, amount: f64, category: Category) -> Self {
        Transaction {
            date,
            amount,
            category,
            description: format!("Expense in {}", category),
        }
    }

    /// Negative amounts are expenses.
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }
}
