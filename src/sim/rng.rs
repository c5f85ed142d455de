//! Random bit sources for path generation
//!
//! The generator only ever asks for one fair bit per peg row. Production drops
//! use a PCG stream; tests and replays use a scripted sequence.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Source of uniform bits (`true` = step right)
pub trait BitSource {
    fn next_bit(&mut self) -> bool;
}

impl<B: BitSource + ?Sized> BitSource for &mut B {
    fn next_bit(&mut self) -> bool {
        (**self).next_bit()
    }
}

impl<B: BitSource + ?Sized> BitSource for Box<B> {
    fn next_bit(&mut self) -> bool {
        (**self).next_bit()
    }
}

/// RNG seed wrapper so a session can be reproduced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// PCG-backed bit source
#[derive(Debug, Clone)]
pub struct EntropyBits {
    rng: Pcg32,
    seed: Option<RngState>,
}

impl EntropyBits {
    /// Seeded from OS entropy; each process gets a fresh stream
    pub fn from_entropy() -> Self {
        Self {
            rng: Pcg32::from_os_rng(),
            seed: None,
        }
    }

    /// Reproducible stream for a fixed seed
    pub fn seeded(seed: u64) -> Self {
        let state = RngState::new(seed);
        Self {
            rng: state.to_rng(),
            seed: Some(state),
        }
    }

    /// The seed this stream was built from, if it was seeded explicitly
    pub fn seed(&self) -> Option<u64> {
        self.seed.map(|s| s.seed)
    }
}

impl BitSource for EntropyBits {
    fn next_bit(&mut self) -> bool {
        self.rng.random::<bool>()
    }
}

/// Replays a fixed bit sequence, then keeps returning `fallback`
#[derive(Debug, Clone, Default)]
pub struct ScriptedBits {
    bits: VecDeque<bool>,
    fallback: bool,
}

impl ScriptedBits {
    pub fn new(bits: impl IntoIterator<Item = bool>) -> Self {
        Self {
            bits: bits.into_iter().collect(),
            fallback: false,
        }
    }

    /// Every draw returns `bit`
    pub fn constant(bit: bool) -> Self {
        Self {
            bits: VecDeque::new(),
            fallback: bit,
        }
    }

    /// Draws remaining before the fallback kicks in
    pub fn remaining(&self) -> usize {
        self.bits.len()
    }
}

impl BitSource for ScriptedBits {
    fn next_bit(&mut self) -> bool {
        self.bits.pop_front().unwrap_or(self.fallback)
    }
}
