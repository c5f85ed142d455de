//! Session statistics
//!
//! Kept in memory for the lifetime of an engine; nothing is persisted.

use serde::{Deserialize, Serialize};

/// Per-session counters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub drops: u64,
    pub total_wagered: u64,
    pub total_paid: u64,
    /// Landings per slot, indexed by slot
    pub slot_hits: Vec<u64>,
    /// Largest single reward so far
    pub best_reward: u64,
}

impl SessionStats {
    pub fn new(slot_count: usize) -> Self {
        Self {
            slot_hits: vec![0; slot_count],
            ..Default::default()
        }
    }

    /// Record one settled drop
    pub fn record(&mut self, bet: u64, slot: usize, reward: u64) {
        self.drops += 1;
        self.total_wagered = self.total_wagered.saturating_add(bet);
        self.total_paid = self.total_paid.saturating_add(reward);
        if slot >= self.slot_hits.len() {
            self.slot_hits.resize(slot + 1, 0);
        }
        self.slot_hits[slot] += 1;
        self.best_reward = self.best_reward.max(reward);
    }

    /// Return to player, in percent (same unit as
    /// `MultiplierTable::expected_rtp`)
    pub fn rtp(&self) -> f64 {
        if self.total_wagered > 0 {
            (self.total_paid as f64 / self.total_wagered as f64) * 100.0
        } else {
            0.0
        }
    }

    /// Net result for the player (paid minus wagered)
    pub fn net(&self) -> i128 {
        self.total_paid as i128 - self.total_wagered as i128
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_record_and_rtp() {
        let mut stats = SessionStats::new(17);
        assert_eq!(stats.rtp(), 0.0);
        stats.record(10, 8, 2);
        stats.record(10, 16, 10_000);
        assert_eq!(stats.drops, 2);
        assert_eq!(stats.total_wagered, 20);
        assert_eq!(stats.total_paid, 10_002);
        assert_eq!(stats.slot_hits[8], 1);
        assert_eq!(stats.slot_hits[16], 1);
        assert_eq!(stats.net(), 9_982);
        assert!((stats.rtp() - 50_010.0).abs() < 1e-9);
        assert_eq!(stats.best_reward, 10_000);
    }

    #[test]
    fn test_rtp_matches_table_unit() {
        use crate::sim::MultiplierTable;

        // Slot hits in exact binomial proportion for 16 rows reproduce the
        // table's expected return
        let table = MultiplierTable::default();
        let mut stats = SessionStats::new(table.len());
        let mut ways = 1u64;
        for (slot, m) in table.iter().enumerate() {
            for _ in 0..ways {
                stats.record(10, slot, m.payout(10) as u64);
            }
            ways = ways * (16 - slot as u64) / (slot as u64 + 1);
        }
        assert_eq!(stats.drops, 1 << 16);
        assert!((stats.rtp() - table.expected_rtp()).abs() < 1e-6);
    }
}
