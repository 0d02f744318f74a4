//! Bubble sort: one adjacent-pair comparison per advance.

use crate::dataset::Dataset;

use super::{Engine, StepOutcome, StepSink};

/// Pass-and-restart bubble sort.
///
/// Each advance compares one adjacent pair; a pass restarts at index 1 and
/// the sort completes after the first pass with zero swaps.
pub struct BubbleSort {
    /// Right index of the next comparison.
    i: usize,
    /// Whether the current pass has swapped anything.
    swapped: bool,
    done: bool,
}

impl BubbleSort {
    pub fn new() -> Self {
        BubbleSort {
            i: 1,
            swapped: false,
            done: false,
        }
    }
}

impl Default for BubbleSort {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for BubbleSort {
    fn advance(&mut self, data: &mut Dataset, sink: &mut dyn StepSink) -> StepOutcome {
        if self.done {
            return StepOutcome::Completed;
        }
        if data.len() < 2 {
            self.done = true;
            return StepOutcome::Completed;
        }

        let i = self.i;
        if data.values()[i] < data.values()[i - 1] {
            data.swap(i - 1, i);
            sink.notify(data.values(), i - 1);
            self.swapped = true;
        }

        self.i += 1;
        if self.i >= data.len() {
            if !self.swapped {
                self.done = true;
                return StepOutcome::Completed;
            }
            self.i = 1;
            self.swapped = false;
        }
        StepOutcome::Continue
    }

    fn reset(&mut self) {
        *self = BubbleSort::new();
    }
}
