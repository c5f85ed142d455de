//! Plinko console host
//!
//! Reads one command per line from stdin and answers with one JSON line:
//! - a number: bet that amount
//! - empty line: bet the default amount
//! - `all`: bet the whole balance
//! - `balance`, `stats`, `table`: read-only queries
//! - `quit`: exit

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use plinko::consts::DEFAULT_BET;
use plinko::{DropResponse, GameConfig, GameEngine};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Plinko starting...");

    let config = match GameConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let mut game = match GameEngine::from_config(&config) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Failed to start game: {}", e);
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "Board: {} rows, {} slots, balance {}",
        game.board().rows(),
        game.board().slot_count(),
        game.balance()
    );

    match run(&mut game) {
        Ok(()) => {
            let stats = game.stats();
            log::info!(
                "Session over: {} drops, wagered {}, paid {} (RTP {:.1}%, table {:.1}%)",
                stats.drops,
                stats.total_wagered,
                stats.total_paid,
                stats.rtp(),
                game.table().expected_rtp()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("I/O error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(game: &mut GameEngine) -> io::Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        let json = match line.trim() {
            "quit" | "exit" => break,
            "balance" => serde_json::json!({ "balance": game.balance() }),
            "stats" => serde_json::to_value(game.stats())?,
            "table" => serde_json::json!({ "multipliers": game.table().labels() }),
            "all" => match game.all_in() {
                Ok(result) => serde_json::to_value(DropResponse::from(result))?,
                Err(e) => refused(e.code(), game.balance()),
            },
            "" => serde_json::to_value(game.respond(DEFAULT_BET as i64))?,
            other => match other.parse::<i64>() {
                Ok(bet) => serde_json::to_value(game.respond(bet))?,
                Err(_) => refused("invalid_bet", game.balance()),
            },
        };
        writeln!(out, "{}", json)?;
        out.flush()?;
    }
    Ok(())
}

fn refused(code: &str, balance: u64) -> serde_json::Value {
    serde_json::json!({ "error": code, "balance": balance })
}
