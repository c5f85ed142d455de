//! Board simulation module
//!
//! All path logic lives here. This module must be pure and deterministic:
//! - Randomness only through an injected `BitSource`
//! - No ledger, I/O or host dependencies

pub mod board;
pub mod path;
pub mod rng;

pub use board::{Board, Multiplier, MultiplierTable};
pub use path::{Move, Path, PathGenerator};
pub use rng::{BitSource, EntropyBits, RngState, ScriptedBits};
