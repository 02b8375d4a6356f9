// ⚙️ Analysis Config - how many transactions to synthesize
//
// Transaction count is the only recognized knob.

use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};

/// Transactions generated per run when nothing else is requested.
pub const DEFAULT_TRANSACTION_COUNT: usize = 5000;

/// Upper bound on a single run; larger requests are rejected up front.
pub const MAX_TRANSACTION_COUNT: usize = 10_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Number of transactions to generate. `0` is a valid, empty run.
    pub transaction_count: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            transaction_count: DEFAULT_TRANSACTION_COUNT,
        }
    }
}

impl AnalysisConfig {
    /// Build a config from an untrusted signed count (CLI, JSON, FFI).
    pub fn new(transaction_count: i64) -> Result<Self> {
        if transaction_count < 0 {
            return Err(AnalysisError::InvalidArgument(format!(
                "transaction count must be >= 0, got {}",
                transaction_count
            )));
        }

        let config = AnalysisConfig {
            transaction_count: usize::try_from(transaction_count).map_err(|_| {
                AnalysisError::InvalidArgument(format!(
                    "transaction count {} does not fit in memory",
                    transaction_count
                ))
            })?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Re-check a config that arrived through deserialization.
    pub fn validate(&self) -> Result<()> {
        if self.transaction_count > MAX_TRANSACTION_COUNT {
            return Err(AnalysisError::InvalidArgument(format!(
                "transaction count must be <= {}, got {}",
                MAX_TRANSACTION_COUNT, self.transaction_count
            )));
        }
        Ok(())
    }
}
