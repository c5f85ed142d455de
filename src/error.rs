use std::path::PathBuf;

/// Reasons a drop is refused. None of them mutate the ledger.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DropError {
    #[error("insufficient balance: bet {bet} exceeds balance {balance}")]
    InsufficientFunds { bet: u64, balance: u64 },

    #[error("invalid bet {bet}: bets must not be negative")]
    InvalidBet { bet: i64 },

    #[error("payout of {reward} on bet {bet} overflows balance {balance}")]
    PayoutOverflow { bet: u64, reward: u128, balance: u64 },
}

impl DropError {
    /// Machine-readable code used in wire responses
    pub fn code(&self) -> &'static str {
        match self {
            DropError::InsufficientFunds { .. } => "insufficient_balance",
            DropError::InvalidBet { .. } => "invalid_bet",
            DropError::PayoutOverflow { .. } => "payout_overflow",
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write config file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid value for {var}: {value:?}")]
    Env { var: &'static str, value: String },

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_funds_display() {
        let err = DropError::InsufficientFunds { bet: 10, balance: 5 };
        assert_eq!(err.to_string(), "insufficient balance: bet 10 exceeds balance 5");
        assert_eq!(err.code(), "insufficient_balance");
    }

    #[test]
    fn test_invalid_bet_display() {
        let err = DropError::InvalidBet { bet: -3 };
        assert_eq!(err.to_string(), "invalid bet -3: bets must not be negative");
        assert_eq!(err.code(), "invalid_bet");
    }

    #[test]
    fn test_payout_overflow_display_carries_wide_reward() {
        let reward = u64::MAX as u128 * 1000;
        let err = DropError::PayoutOverflow {
            bet: u64::MAX,
            reward,
            balance: u64::MAX,
        };
        assert!(err.to_string().starts_with(&format!("payout of {reward} on bet")));
        assert_eq!(err.code(), "payout_overflow");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("rows must be even".to_string());
        assert_eq!(err.to_string(), "config validation error: rows must be even");
    }
}
