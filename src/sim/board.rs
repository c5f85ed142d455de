//! Board geometry and payout schedule
//!
//! Both are fixed at startup. A table is only ever paired with a board of the
//! same width, which keeps every resolved slot a valid table index.

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::consts::{MULTIPLIER_SCALE, MULTIPLIERS, ROWS};
use crate::error::ConfigError;

/// Triangular peg board: `rows` rows of pegs above `rows + 1` slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    rows: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self { rows: ROWS }
    }
}

impl Board {
    /// Create a board with the given number of peg rows.
    ///
    /// Rows must be even and at least 2 so the slot row has a single center.
    pub fn new(rows: usize) -> Result<Self, ConfigError> {
        if rows < 2 {
            return Err(ConfigError::Validation(format!(
                "rows must be at least 2, got {rows}"
            )));
        }
        if rows % 2 != 0 {
            return Err(ConfigError::Validation(format!(
                "rows must be even so the board has a center slot, got {rows}"
            )));
        }
        Ok(Self { rows })
    }

    /// Peg rows the ball crosses (one move per row)
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of landing slots
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.rows + 1
    }

    /// Index of the center slot
    #[inline]
    pub fn center(&self) -> usize {
        self.slot_count() / 2
    }

    /// Rightmost slot (the right wall)
    #[inline]
    pub fn last_slot(&self) -> usize {
        self.rows
    }
}

/// Payout factor, stored as integer tenths so rewards are exact
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Multiplier {
    tenths: u64,
}

impl Multiplier {
    pub const ZERO: Multiplier = Multiplier { tenths: 0 };

    pub const fn from_tenths(tenths: u64) -> Self {
        Self { tenths }
    }

    pub fn tenths(&self) -> u64 {
        self.tenths
    }

    /// Parse a decimal factor such as `0.2` or `130`.
    ///
    /// Returns `None` for negative, non-finite or sub-tenth values.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        let scaled = value * MULTIPLIER_SCALE as f64;
        let rounded = scaled.round();
        if (scaled - rounded).abs() > 1e-6 || rounded > u64::MAX as f64 {
            return None;
        }
        Some(Self {
            tenths: rounded as u64,
        })
    }

    pub fn as_f64(&self) -> f64 {
        self.tenths as f64 / MULTIPLIER_SCALE as f64
    }

    /// Exact reward for `bet`, truncated toward zero.
    ///
    /// Wide enough that it never overflows; callers settle it into `u64`.
    pub fn payout(&self, bet: u64) -> u128 {
        bet as u128 * self.tenths as u128 / MULTIPLIER_SCALE as u128
    }
}

impl TryFrom<f64> for Multiplier {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Multiplier::from_f64(value)
            .ok_or_else(|| format!("multiplier {value} must be a non-negative multiple of 0.1"))
    }
}

impl From<Multiplier> for f64 {
    fn from(m: Multiplier) -> f64 {
        m.as_f64()
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.tenths / MULTIPLIER_SCALE;
        let frac = self.tenths % MULTIPLIER_SCALE;
        if frac == 0 {
            write!(f, "{whole}x")
        } else {
            write!(f, "{whole}.{frac}x")
        }
    }
}

/// Symmetric payout schedule indexed by slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultiplierTable {
    slots: Vec<Multiplier>,
}

impl Default for MultiplierTable {
    fn default() -> Self {
        let slots = MULTIPLIERS
            .iter()
            .filter_map(|&m| Multiplier::from_f64(m))
            .collect();
        Self { slots }
    }
}

impl MultiplierTable {
    /// Build a table for `board`, checking width and symmetry
    pub fn new(board: &Board, slots: Vec<Multiplier>) -> Result<Self, ConfigError> {
        if slots.len() != board.slot_count() {
            return Err(ConfigError::Validation(format!(
                "multiplier table has {} entries, board has {} slots",
                slots.len(),
                board.slot_count()
            )));
        }
        let n = slots.len();
        if let Some(i) = (0..n / 2).find(|&i| slots[i] != slots[n - 1 - i]) {
            return Err(ConfigError::Validation(format!(
                "multiplier table is not symmetric: slot {} is {} but slot {} is {}",
                i,
                slots[i],
                n - 1 - i,
                slots[n - 1 - i]
            )));
        }
        Ok(Self { slots })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Multiplier> {
        self.slots.iter()
    }

    /// Display labels, e.g. `["1000x", ..., "0.2x", ...]`
    pub fn labels(&self) -> Vec<String> {
        self.slots.iter().map(|m| m.to_string()).collect()
    }

    /// Expected return to player under a fair binomial drop, in percent
    pub fn expected_rtp(&self) -> f64 {
        let rows = self.slots.len().saturating_sub(1);
        let total = 2f64.powi(rows as i32);
        let mut ways = 1f64;
        let mut sum = 0.0;
        for (k, m) in self.slots.iter().enumerate() {
            sum += ways * m.as_f64();
            ways = ways * (rows - k) as f64 / (k + 1) as f64;
        }
        sum / total * 100.0
    }
}

impl Index<usize> for MultiplierTable {
    type Output = Multiplier;

    fn index(&self, slot: usize) -> &Multiplier {
        &self.slots[slot]
    }
}
