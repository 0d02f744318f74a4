//! The array under sort
//!
//! [`Dataset`] owns the mutable sequence of values every algorithm engine
//! operates on, plus the derived quantities the render side needs (length,
//! maximum). Mutation goes exclusively through permutation-preserving
//! operations:
//!
//! - [`Dataset::swap`] — exchange two positions
//! - [`Dataset::shift_to`] — rotate one element down to a lower position,
//!   keeping the relative order of everything in between
//!
//! so at any step boundary the array is a permutation of what generation
//! produced, and any frame shows real data. Values are unsigned by
//! construction, which settles the non-negativity precondition of the
//! counting and radix engines at the type level.
//!
//! The dataset also counts visible mutations ([`Dataset::moves`]), reset on
//! every (re)generation, for the status bar.

use rand::Rng;

use crate::config::{Config, ConfigError};

/// The shared array under sort, with a visible-move counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    values: Vec<u32>,
    moves: u64,
}

impl Dataset {
    /// Generate a fresh dataset: `config.count` independent uniform samples
    /// in `[config.lower, config.upper]`.
    ///
    /// Fails if the configuration cannot produce one (zero count or an
    /// inverted range). Validation happens here so later regenerations are
    /// infallible.
    pub fn generate(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Dataset {
            values: sample(config),
            moves: 0,
        })
    }

    /// Replace the values wholesale with a fresh sample and reset the move
    /// counter. The configuration was validated at [`Dataset::generate`].
    pub fn regenerate(&mut self, config: &Config) {
        self.values = sample(config);
        self.moves = 0;
    }

    /// Wrap an explicit value sequence. Empty and single-element sequences
    /// are allowed; engines complete immediately on them.
    pub fn from_values(values: Vec<u32>) -> Self {
        Dataset { values, moves: 0 }
    }

    /// The current values, in array order.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Visible mutations (swaps and rotations) since the last generation.
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// The largest value, or 0 for an empty dataset. Used for the counting
    /// table size and the bar chart scale.
    pub fn max(&self) -> u32 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    /// Whether the values are in non-decreasing order.
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|pair| pair[0] <= pair[1])
    }

    /// Exchange positions `a` and `b`. A self-swap is a no-op and counts
    /// nothing.
    pub fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.values.swap(a, b);
        self.moves += 1;
    }

    /// Move the element at `from` down to `to` (`to <= from`), shifting the
    /// block in between up by one. The relative order of the shifted block
    /// is preserved, which is what keeps the radix and merge engines stable.
    /// Counts as one move.
    pub fn shift_to(&mut self, from: usize, to: usize) {
        if from == to {
            return;
        }
        self.values[to..=from].rotate_right(1);
        self.moves += 1;
    }
}

fn sample(config: &Config) -> Vec<u32> {
    let mut rng = rand::thread_rng();
    (0..config.count)
        .map(|_| rng.gen_range(config.lower..=config.upper))
        .collect()
}
