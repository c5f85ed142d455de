//! Game module: ledger and the bet-and-drop engine

pub mod engine;
pub mod ledger;
pub mod shared;

pub use engine::{DropResponse, DropResult, GameEngine, parse_bet};
pub use ledger::Ledger;
pub use shared::SharedEngine;
