//! Bet-and-drop engine
//!
//! One drop is all-or-nothing: every check runs before the ledger is touched.

use serde::{Deserialize, Serialize};

use super::ledger::Ledger;
use crate::config::GameConfig;
use crate::error::{ConfigError, DropError};
use crate::sim::{BitSource, Board, EntropyBits, Multiplier, MultiplierTable, Path, PathGenerator};
use crate::stats::SessionStats;

/// Outcome of a settled drop
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropResult {
    /// Effective moves, one per peg row
    pub moves: Path,
    pub slot: usize,
    pub multiplier: Multiplier,
    pub reward: u64,
    /// Balance after the bet was taken and the reward paid
    pub balance: u64,
}

/// Wire shape handed to hosts. Refusals are ordinary values, not faults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DropResponse {
    Landed {
        moves: Path,
        slot: usize,
        reward: u64,
        balance: u64,
    },
    Refused {
        error: String,
        balance: u64,
    },
}

impl From<DropResult> for DropResponse {
    fn from(r: DropResult) -> Self {
        DropResponse::Landed {
            moves: r.moves,
            slot: r.slot,
            reward: r.reward,
            balance: r.balance,
        }
    }
}

/// Convert signed host input into a bet. Negative amounts are rejected.
pub fn parse_bet(raw: i64) -> Result<u64, DropError> {
    u64::try_from(raw).map_err(|_| DropError::InvalidBet { bet: raw })
}

/// Owns the ledger, the payout table and the bit source for one session
#[derive(Debug)]
pub struct GameEngine<B: BitSource = EntropyBits> {
    generator: PathGenerator,
    table: MultiplierTable,
    ledger: Ledger,
    bits: B,
    stats: SessionStats,
}

impl GameEngine<EntropyBits> {
    /// Engine using the configured seed, or OS entropy when none is set
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        let bits = match config.seed {
            Some(seed) => {
                log::info!("Using fixed seed: {}", seed);
                EntropyBits::seeded(seed)
            }
            None => EntropyBits::from_entropy(),
        };
        Self::new(config, bits)
    }

    /// Engine with an explicit seed, ignoring `config.seed`
    pub fn seeded(config: &GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, EntropyBits::seeded(seed))
    }
}

impl<B: BitSource> GameEngine<B> {
    pub fn new(config: &GameConfig, bits: B) -> Result<Self, ConfigError> {
        let (board, table) = config.validate()?;
        Ok(Self {
            generator: PathGenerator::new(board),
            table,
            ledger: Ledger::new(config.starting_balance),
            bits,
            stats: SessionStats::new(board.slot_count()),
        })
    }

    pub fn balance(&self) -> u64 {
        self.ledger.balance()
    }

    pub fn board(&self) -> &Board {
        self.generator.board()
    }

    pub fn table(&self) -> &MultiplierTable {
        &self.table
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Column after each move of `path`, for animation
    pub fn trace(&self, path: &Path) -> Vec<usize> {
        self.generator.trace(path)
    }

    /// Wager `bet` on one ball.
    ///
    /// Refused drops leave the ledger untouched. On success the balance is
    /// exactly `before - bet + reward`.
    pub fn drop_ball(&mut self, bet: u64) -> Result<DropResult, DropError> {
        let balance = self.ledger.balance();
        if !self.ledger.can_afford(bet) {
            log::warn!("Refused bet {} (balance {})", bet, balance);
            return Err(DropError::InsufficientFunds { bet, balance });
        }

        let moves = self.generator.generate_path(&mut self.bits);
        let slot = self.generator.resolve_slot(&moves);
        let multiplier = self.table[slot];

        let exact = multiplier.payout(bet);
        let settled = u64::try_from(exact)
            .ok()
            .filter(|&r| (balance - bet).checked_add(r).is_some());
        let Some(reward) = settled else {
            log::warn!(
                "Refused bet {}: payout {} overflows balance {}",
                bet,
                exact,
                balance
            );
            return Err(DropError::PayoutOverflow {
                bet,
                reward: exact,
                balance,
            });
        };

        self.ledger.debit(bet);
        self.ledger.credit(reward);
        let balance = self.ledger.balance();

        self.stats.record(bet, slot, reward);
        log::debug!(
            "Drop: bet={} slot={} multiplier={} reward={} balance={}",
            bet,
            slot,
            multiplier,
            reward,
            balance
        );

        Ok(DropResult {
            moves,
            slot,
            multiplier,
            reward,
            balance,
        })
    }

    /// Bet the whole balance
    pub fn all_in(&mut self) -> Result<DropResult, DropError> {
        let bet = self.ledger.balance();
        self.drop_ball(bet)
    }

    /// Drop for signed host input, folded into the wire shape
    pub fn respond(&mut self, raw_bet: i64) -> DropResponse {
        match parse_bet(raw_bet).and_then(|bet| self.drop_ball(bet)) {
            Ok(result) => result.into(),
            Err(err) => DropResponse::Refused {
                error: err.code().to_string(),
                balance: self.ledger.balance(),
            },
        }
    }
}
