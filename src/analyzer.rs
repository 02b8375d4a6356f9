// 📊 Spending Analyzer - monthly, category, anomaly and weekday views
//
// Every section works on the expense subset (amount < 0). Income never
// reaches a section; it only feeds the dataset summary.

use crate::transaction::{Category, Transaction};
use chrono::{Datelike, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::debug;

/// Expenses strictly below this amount are flagged.
pub const ANOMALY_THRESHOLD: f64 = -300.0;

/// Display order for the weekday section.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

// ============================================================================
// REPORT TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub transaction_count: usize,
    pub expense_count: usize,
    /// Absolute sum of all expenses.
    pub total_expenses: f64,
    pub total_income: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    /// `YYYY-MM`
    pub month: String,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub date: NaiveDateTime,
    pub amount: f64,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayAverage {
    pub weekday: Weekday,
    /// `None` when no expense fell on this weekday.
    pub average: Option<f64>,
}

/// Structured result of one analysis pass. `Display` renders the text report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub summary: DatasetSummary,
    /// Ascending by month label.
    pub monthly_totals: Vec<MonthlyTotal>,
    /// Descending by total.
    pub category_totals: Vec<CategoryTotal>,
    /// Ascending by amount, most negative first.
    pub anomalies: Vec<Anomaly>,
    /// Always seven rows, Monday through Sunday.
    pub weekday_averages: Vec<WeekdayAverage>,
    /// Weekday with the largest average expense, if any expense exists.
    pub top_weekday: Option<Weekday>,
}

// ============================================================================
// ANALYSIS
// ============================================================================

pub fn analyze(transactions: &[Transaction]) -> AnalysisReport {
    let expenses: Vec<&Transaction> = transactions.iter().filter(|t| t.is_expense()).collect();

    let weekday_averages = weekday_averages(&expenses);
    let top_weekday = top_weekday(&weekday_averages);

    let report = AnalysisReport {
        summary: summarize(transactions, &expenses),
        monthly_totals: monthly_totals(&expenses),
        category_totals: category_totals(&expenses),
        anomalies: anomalies(&expenses),
        weekday_averages,
        top_weekday,
    };

    debug!(
        transactions = transactions.len(),
        expenses = expenses.len(),
        anomalies = report.anomalies.len(),
        "Analysis complete"
    );
    report
}

fn summarize(transactions: &[Transaction], expenses: &[&Transaction]) -> DatasetSummary {
    DatasetSummary {
        transaction_count: transactions.len(),
        expense_count: expenses.len(),
        total_expenses: expenses.iter().map(|t| t.amount).sum::<f64>().abs(),
        total_income: transactions
            .iter()
            .filter(|t| t.amount > 0.0)
            .map(|t| t.amount)
            .sum(),
    }
}

fn monthly_totals(expenses: &[&Transaction]) -> Vec<MonthlyTotal> {
    let mut by_month: BTreeMap<String, f64> = BTreeMap::new();
    for tx in expenses {
        *by_month
            .entry(tx.date.format("%Y-%m").to_string())
            .or_insert(0.0) += tx.amount;
    }

    by_month
        .into_iter()
        .map(|(month, sum)| MonthlyTotal {
            month,
            total: sum.abs(),
        })
        .collect()
}

fn category_totals(expenses: &[&Transaction]) -> Vec<CategoryTotal> {
    let mut sums = [0.0f64; 6];
    let mut seen = [false; 6];
    for tx in expenses {
        let i = tx.category.index();
        sums[i] += tx.amount;
        seen[i] = true;
    }

    let mut totals: Vec<CategoryTotal> = Category::ALL
        .iter()
        .filter(|c| seen[c.index()])
        .map(|&category| CategoryTotal {
            category,
            total: sums[category.index()].abs(),
        })
        .collect();

    // stable: equal totals keep table order
    totals.sort_by(|a, b| b.total.total_cmp(&a.total));
    totals
}

fn anomalies(expenses: &[&Transaction]) -> Vec<Anomaly> {
    let mut flagged: Vec<Anomaly> = expenses
        .iter()
        .filter(|t| t.amount < ANOMALY_THRESHOLD)
        .map(|t| Anomaly {
            date: t.date,
            amount: t.amount,
            category: t.category,
        })
        .collect();

    flagged.sort_by(|a, b| a.amount.total_cmp(&b.amount));
    flagged
}

fn weekday_averages(expenses: &[&Transaction]) -> Vec<WeekdayAverage> {
    let mut sums = [0.0f64; 7];
    let mut counts = [0usize; 7];
    for tx in expenses {
        let i = tx.date.weekday().num_days_from_monday() as usize;
        sums[i] += tx.amount;
        counts[i] += 1;
    }

    WEEKDAYS
        .iter()
        .enumerate()
        .map(|(i, &weekday)| WeekdayAverage {
            weekday,
            average: (counts[i] > 0).then(|| (sums[i] / counts[i] as f64).abs()),
        })
        .collect()
}

/// Largest average wins; ties go to the earlier weekday.
fn top_weekday(averages: &[WeekdayAverage]) -> Option<Weekday> {
    averages
        .iter()
        .filter_map(|w| w.average.map(|avg| (w.weekday, avg)))
        .fold(None, |best: Option<(Weekday, f64)>, (weekday, avg)| match best {
            Some((_, best_avg)) if avg.total_cmp(&best_avg) != Ordering::Greater => best,
            _ => Some((weekday, avg)),
        })
        .map(|(weekday, _)| weekday)
}

// ============================================================================
// TESTS
// ============================================================================
