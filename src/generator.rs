// 🎲 Transaction Generator - synthetic one-year ledger
//
// Categories come from a fixed weighted table, amounts from per-category
// uniform ranges, and dates from a pre-built pool anchored one year back.
// Pool entries are reused across records, so identical dates cluster.

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::transaction::{Category, Transaction};
use chrono::{Duration, Local, NaiveDateTime, Timelike};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Width of the date window, in days, ending at "now".
pub const WINDOW_DAYS: i64 = 365;

/// Per-record chance that a Food/Transport/Leisure/Other amount is anomalous.
pub const ANOMALY_PROBABILITY: f64 = 0.005;

pub const SALARY_RANGE: (f64, f64) = (1500.0, 3000.0);
pub const BILLS_RANGE: (f64, f64) = (-300.0, -50.0);
pub const EXPENSE_RANGE: (f64, f64) = (-150.0, -5.0);
pub const ANOMALY_RANGE: (f64, f64) = (-800.0, -200.0);

// ============================================================================
// GENERATOR
// ============================================================================

pub struct Generator<R: Rng> {
    rng: R,
    now: NaiveDateTime,
}

impl Generator<StdRng> {
    /// Reproducible generator for a fixed seed and clock.
    pub fn seeded(seed: u64, now: NaiveDateTime) -> Self {
        Generator::new(StdRng::seed_from_u64(seed), now)
    }

    /// Entropy-seeded generator anchored at the local clock.
    pub fn from_entropy() -> Self {
        Generator::new(StdRng::from_entropy(), current_time())
    }
}

impl<R: Rng> Generator<R> {
    pub fn new(rng: R, now: NaiveDateTime) -> Self {
        Generator { rng, now }
    }

    /// Oldest timestamp the pool can produce.
    pub fn anchor(&self) -> NaiveDateTime {
        self.now - Duration::days(WINDOW_DAYS)
    }

    /// Generate `count` independent transactions.
    pub fn generate(&mut self, count: usize) -> Vec<Transaction> {
        let pool = self.date_pool(count);
        self.records_from_pool(&pool)
    }

    /// One record per pool slot; each record's date is drawn from `pool`, so entries may repeat.
    fn records_from_pool(&mut self, pool: &[NaiveDateTime]) -> Vec<Transaction> {
        let mut transactions = Vec::with_capacity(pool.len());
        let mut anomalies = 0usize;

        for _ in 0..pool.len() {
            let category = self.sample_category();
            let (amount, anomalous) = self.sample_amount(category);
            if anomalous {
                anomalies += 1;
            }
            let date = pool[self.rng.gen_range(0..pool.len())];
            transactions.push(Transaction::new(date, amount, category));
        }

        info!(
            count = transactions.len(),
            anomalies, "Generated synthetic transactions"
        );
        transactions
    }

    /// One candidate date per requested record, each offset 0..=365 days from the anchor.
    fn date_pool(&mut self, count: usize) -> Vec<NaiveDateTime> {
        let anchor = self.anchor();
        let pool: Vec<NaiveDateTime> = (0..count)
            .map(|_| anchor + Duration::days(self.rng.gen_range(0..=WINDOW_DAYS)))
            .collect();
        debug!(pool = pool.len(), %anchor, "Built date pool");
        pool
    }

    fn sample_category(&mut self) -> Category {
        Category::from_unit(self.rng.gen::<f64>())
    }

    /// Returns the amount and whether the anomaly override fired.
    fn sample_amount(&mut self, category: Category) -> (f64, bool) {
        match category {
            Category::Salary => (self.uniform(SALARY_RANGE), false),
            Category::Bills => (self.uniform(BILLS_RANGE), false),
            _ => {
                let base = self.uniform(EXPENSE_RANGE);
                if self.rng.gen::<f64>() < ANOMALY_PROBABILITY {
                    (self.uniform(ANOMALY_RANGE), true)
                } else {
                    (base, false)
                }
            }
        }
    }

    fn uniform(&mut self, (low, high): (f64, f64)) -> f64 {
        round_cents(self.rng.gen_range(low..=high))
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Generate `count` transactions with fresh entropy, rejecting invalid counts.
pub fn generate(count: i64) -> Result<Vec<Transaction>> {
    let config = AnalysisConfig::new(count)?;
    Ok(Generator::from_entropy().generate(config.transaction_count))
}

/// Local wall clock truncated to whole seconds.
pub fn current_time() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn in_range(value: f64, (low, high): (f64, f64)) -> bool {
        value >= low && value <= high
    }

    #[test]
    fn test_zero_count_is_empty() {
        let mut generator = Generator::seeded(1, fixed_now());
        assert!(generator.generate(0).is_empty());
    }

    #[test]
    fn test_negative_count_fails_fast() {
        let err = generate(-1).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidArgument(_)));
    }

    #[test]
    fn test_generates_requested_count() {
        let mut generator = Generator::seeded(7, fixed_now());
        assert_eq!(generator.generate(250).len(), 250);
    }

    #[test]
    fn test_same_seed_same_dataset() {
        let a = Generator::seeded(42, fixed_now()).generate(100);
        let b = Generator::seeded(42, fixed_now()).generate(100);
        assert_eq!(a, b);
    }

    #[test]
    fn test_sign_and_range_invariants() {
        let transactions = Generator::seeded(3, fixed_now()).generate(5000);

        for tx in &transactions {
            match tx.category {
                Category::Salary => {
                    assert!(tx.amount > 0.0);
                    assert!(in_range(tx.amount, SALARY_RANGE), "salary {}", tx.amount);
                }
                Category::Bills => {
                    assert!(tx.amount < 0.0);
                    assert!(in_range(tx.amount, BILLS_RANGE), "bills {}", tx.amount);
                }
                _ => {
                    assert!(tx.amount < 0.0);
                    assert!(
                        in_range(tx.amount, EXPENSE_RANGE) || in_range(tx.amount, ANOMALY_RANGE),
                        "{} {}",
                        tx.category,
                        tx.amount
                    );
                }
            }
        }
    }

    #[test]
    fn test_amounts_have_two_decimals() {
        let transactions = Generator::seeded(11, fixed_now()).generate(500);
        for tx in &transactions {
            let cents = tx.amount * 100.0;
            assert!((cents - cents.round()).abs() < 1e-6, "{}", tx.amount);
        }
    }

    #[test]
    fn test_dates_within_window() {
        let now = fixed_now();
        let generator = Generator::seeded(5, now);
        let anchor = generator.anchor();
        let transactions = Generator::seeded(5, now).generate(2000);

        for tx in &transactions {
            assert!(tx.date >= anchor);
            assert!(tx.date <= now);
            // offsets are whole days from the anchor
            assert_eq!(tx.date.time(), anchor.time());
        }
    }

    #[test]
    fn test_all_categories_appear() {
        let transactions = Generator::seeded(9, fixed_now()).generate(5000);
        let seen: HashSet<Category> = transactions.iter().map(|t| t.category).collect();
        assert_eq!(seen.len(), Category::ALL.len());
    }

    #[test]
    fn test_category_frequencies_follow_weights() {
        let n = 20_000;
        let transactions = Generator::seeded(21, fixed_now()).generate(n);

        for category in Category::ALL {
            let observed =
                transactions.iter().filter(|t| t.category == category).count() as f64 / n as f64;
            assert!(
                (observed - category.weight()).abs() < 0.02,
                "{} observed {:.3}",
                category,
                observed
            );
        }
    }

    #[test]
    fn test_anomaly_override_rate() {
        let transactions = Generator::seeded(17, fixed_now()).generate(200_000);
        let eligible: Vec<f64> = transactions
            .iter()
            .filter(|t| !matches!(t.category, Category::Salary | Category::Bills))
            .map(|t| t.amount)
            .collect();
        // base amounts never go below -150, so anything lower came from the override
        let overridden: Vec<f64> = eligible.iter().copied().filter(|a| *a < -150.0).collect();

        let rate = overridden.len() as f64 / eligible.len() as f64;
        assert!(
            (rate - ANOMALY_PROBABILITY).abs() < 0.001,
            "override rate {:.5}",
            rate
        );
        assert!(overridden.iter().all(|a| in_range(*a, ANOMALY_RANGE)));
    }

    #[test]
    fn test_records_draw_dates_from_pool() {
        let mut generator = Generator::seeded(23, fixed_now());
        let pool = generator.date_pool(8);
        assert_eq!(pool.len(), 8);

        let transactions = generator.records_from_pool(&pool);
        assert_eq!(transactions.len(), 8);
        for tx in &transactions {
            assert!(pool.contains(&tx.date), "{} not in pool", tx.date);
        }
    }

    #[test]
    fn test_generated_dates_bounded_by_pool_size() {
        let transactions = Generator::seeded(29, fixed_now()).generate(40);
        let distinct: HashSet<NaiveDateTime> = transactions.iter().map(|t| t.date).collect();
        assert!(distinct.len() <= 40);
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(-12.345_6), -12.35);
        assert_eq!(round_cents(1500.004), 1500.0);
    }
}
