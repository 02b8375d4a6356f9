// 🧾 Report Rendering - text and JSON views of an AnalysisReport
//
// The text layout is what the report viewer shows verbatim: a title, a
// dataset summary, then four numbered sections in fixed order.

use crate::analyzer::AnalysisReport;
use crate::error::Result;
use chrono::Weekday;
use std::fmt;

pub const TITLE: &str = "--- Personal Finance Habits Analysis ---";

/// Section headers, in rendering order.
pub const SECTION_HEADERS: [&str; 4] = [
    "1. Total Monthly Expenses:",
    "2. Total Expenses by Category:",
    "3. ALERT: Possible Unusual Expenses (Anomalies):",
    "4. Average Expense by Weekday:",
];

pub const NO_ANOMALIES: &str = "No unusually large expenses detected.";
pub const NO_EXPENSES: &str = "(no expenses recorded)";
pub const NO_TOP_WEEKDAY: &str = "No spending day to highlight.";

/// Shown for a weekday without expenses; the average is undefined, not zero.
const UNDEFINED: &str = "-";

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

impl AnalysisReport {
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn has_expenses(&self) -> bool {
        self.summary.expense_count > 0
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", TITLE)?;
        writeln!(f)?;
        writeln!(
            f,
            "Generated and analyzed {} transactions covering one year.",
            self.summary.transaction_count
        )?;
        writeln!(
            f,
            "Expenses: {} records totalling {:.2}. Income: {:.2}.",
            self.summary.expense_count, self.summary.total_expenses, self.summary.total_income
        )?;
        writeln!(f)?;

        // 1. Monthly
        writeln!(f, "{}", SECTION_HEADERS[0])?;
        if self.monthly_totals.is_empty() {
            writeln!(f, "{}", NO_EXPENSES)?;
        } else {
            writeln!(f, "{:<12}{:>14}", "Month", "Amount")?;
            for row in &self.monthly_totals {
                writeln!(f, "{:<12}{:>14.2}", row.month, row.total)?;
            }
        }
        writeln!(f)?;

        // 2. Category
        writeln!(f, "{}", SECTION_HEADERS[1])?;
        if self.category_totals.is_empty() {
            writeln!(f, "{}", NO_EXPENSES)?;
        } else {
            writeln!(f, "{:<12}{:>14}", "Category", "Amount")?;
            for row in &self.category_totals {
                writeln!(f, "{:<12}{:>14.2}", row.category.as_str(), row.total)?;
            }
        }
        writeln!(f)?;

        // 3. Anomalies
        writeln!(f, "{}", SECTION_HEADERS[2])?;
        if self.anomalies.is_empty() {
            writeln!(f, "{}", NO_ANOMALIES)?;
        } else {
            writeln!(f, "{:<21}{:>10}  {}", "Date", "Amount", "Category")?;
            for row in &self.anomalies {
                writeln!(
                    f,
                    "{:<21}{:>10.2}  {}",
                    row.date.format("%Y-%m-%d %H:%M:%S").to_string(),
                    row.amount,
                    row.category.as_str()
                )?;
            }
        }
        writeln!(f)?;

        // 4. Weekday
        writeln!(f, "{}", SECTION_HEADERS[3])?;
        if !self.has_expenses() {
            writeln!(f, "{}", NO_EXPENSES)?;
        } else {
            writeln!(f, "{:<12}{:>14}", "Weekday", "Amount")?;
            for row in &self.weekday_averages {
                let name = weekday_name(row.weekday);
                match row.average {
                    Some(avg) => writeln!(f, "{:<12}{:>14.2}", name, avg)?,
                    None => writeln!(f, "{:<12}{:>14}", name, UNDEFINED)?,
                }
            }
        }
        writeln!(f)?;

        match self.top_weekday {
            Some(day) => writeln!(f, "The day you spend the most is: {}", weekday_name(day)),
            None => writeln!(f, "{}", NO_TOP_WEEKDAY),
        }
    }
}
