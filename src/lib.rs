//! Plinko - a peg-board betting game core
//!
//! Core modules:
//! - `sim`: Board geometry, payout table and path generation (pure, seeded RNG only)
//! - `game`: Ledger and the bet-and-drop engine
//! - `config`: Startup configuration (JSON file + environment)
//! - `stats`: Per-session counters
//! - `error`: Error types shared by the modules above

pub mod config;
pub mod error;
pub mod game;
pub mod sim;
pub mod stats;

pub use config::GameConfig;
pub use error::{ConfigError, DropError};
pub use game::{DropResponse, DropResult, GameEngine, Ledger, SharedEngine, parse_bet};
pub use sim::{
    BitSource, Board, EntropyBits, Move, Multiplier, MultiplierTable, Path, PathGenerator,
};
pub use stats::SessionStats;

/// Game configuration constants
pub mod consts {
    /// Peg rows on the default board
    pub const ROWS: usize = 16;
    /// Landing slots on the default board (always `ROWS + 1`)
    pub const SLOT_COUNT: usize = ROWS + 1;

    /// Default payout schedule, edge to edge
    pub const MULTIPLIERS: [f64; SLOT_COUNT] = [
        1000.0, 130.0, 26.0, 9.0, 4.0, 2.0, 0.2, 0.2,
        0.2, // center
        0.2, 0.2, 2.0, 4.0, 9.0, 26.0, 130.0, 1000.0,
    ];

    /// Balance a fresh session starts with
    pub const STARTING_BALANCE: u64 = 1000;
    /// Bet used by hosts when the player does not name one
    pub const DEFAULT_BET: u64 = 10;

    /// Multipliers are stored as integer tenths
    pub const MULTIPLIER_SCALE: u64 = 10;
}
