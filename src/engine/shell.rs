//! Shell sort: one gapped comparison per advance.

use crate::dataset::Dataset;

use super::{Engine, StepOutcome, StepSink};

/// Shell sort over the halving gap sequence `n/2, n/4, .., 1`.
///
/// Gapped insertion with the inner chain unrolled to one comparison per
/// advance: compare the element at the chain cursor with its gapped left
/// neighbor, swap if out of order, and walk the chain down. The final
/// gap-1 pass is plain insertion sort, which is what guarantees the
/// result.
pub struct ShellSort {
    gap: usize,
    /// Outer cursor within the current gap pass.
    i: usize,
    /// Chain cursor walking down from `i` in gap strides.
    j: usize,
    started: bool,
    done: bool,
}

impl ShellSort {
    pub fn new() -> Self {
        ShellSort {
            gap: 0,
            i: 0,
            j: 0,
            started: false,
            done: false,
        }
    }
}

impl Default for ShellSort {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for ShellSort {
    fn advance(&mut self, data: &mut Dataset, sink: &mut dyn StepSink) -> StepOutcome {
        if self.done {
            return StepOutcome::Completed;
        }
        let n = data.len();
        if !self.started {
            self.started = true;
            if n < 2 {
                self.done = true;
                return StepOutcome::Completed;
            }
            self.gap = n / 2;
            self.i = self.gap;
            self.j = self.gap;
        }

        // One gapped comparison at the chain cursor
        if self.j >= self.gap && data.values()[self.j - self.gap] > data.values()[self.j] {
            data.swap(self.j - self.gap, self.j);
            sink.notify(data.values(), self.j - self.gap);
            self.j -= self.gap;
            if self.j >= self.gap {
                return StepOutcome::Continue;
            }
        }

        // Chain settled; next outer position, then next gap
        self.i += 1;
        if self.i < n {
            self.j = self.i;
            return StepOutcome::Continue;
        }
        self.gap /= 2;
        if self.gap == 0 {
            self.done = true;
            return StepOutcome::Completed;
        }
        self.i = self.gap;
        self.j = self.i;
        StepOutcome::Continue
    }

    fn reset(&mut self) {
        *self = ShellSort::new();
    }
}
