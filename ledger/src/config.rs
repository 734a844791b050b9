//! Ledger configuration.

use serde::{Deserialize, Serialize};
use votechain_work::Difficulty;

use crate::LedgerError;

/// Settings fixed for the lifetime of a ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Leading zero hex characters required of every block digest.
    #[serde(default)]
    pub difficulty: Difficulty,

    /// Upper bound on the nonce search. Unbounded when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_nonce: Option<u64>,

    /// Worker threads for the nonce search (0 = rayon's global pool).
    #[serde(default)]
    pub work_threads: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::DEFAULT,
            max_nonce: None,
            work_threads: 0,
        }
    }
}

impl LedgerConfig {
    pub fn with_difficulty(mut self, zeros: u32) -> Self {
        self.difficulty = Difficulty::new(zeros);
        self
    }

    /// Reject settings under which no block could ever be sealed.
    pub fn validate(&self) -> Result<(), LedgerError> {
        let zeros = self.difficulty.zeros();
        if zeros == 0 || zeros > Difficulty::MAX_ZEROS {
            return Err(LedgerError::Config(format!(
                "difficulty must be between 1 and {}, got {zeros}",
                Difficulty::MAX_ZEROS
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let config: LedgerConfig = toml::from_str("").unwrap();
        assert_eq!(config, LedgerConfig::default());
        assert_eq!(config.difficulty, Difficulty::new(4));
    }

    #[test]
    fn partial_toml_overrides() {
        let config: LedgerConfig = toml::from_str("difficulty = 2\nmax_nonce = 500").unwrap();
        assert_eq!(config.difficulty, Difficulty::new(2));
        assert_eq!(config.max_nonce, Some(500));
        assert_eq!(config.work_threads, 0);
    }

    #[test]
    fn rejects_zero_and_unreachable_difficulty() {
        assert!(LedgerConfig::default().with_difficulty(0).validate().is_err());
        assert!(LedgerConfig::default().with_difficulty(65).validate().is_err());
        assert!(LedgerConfig::default().with_difficulty(1).validate().is_ok());
    }
}
