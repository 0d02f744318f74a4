//! Insertion sort: one outer position per advance, shifts as a burst.

use crate::dataset::Dataset;

use super::{Engine, StepOutcome, StepSink};

/// Insertion sort with a resumable shift run.
///
/// Each advance inserts the element at the outer cursor by swapping it down
/// until it stops undercutting its left neighbor. The shift run is a burst:
/// it polls for pending input before every comparison and aborts with the
/// inner cursor saved, so the insertion resumes mid-shift.
///
/// The shift condition is strict (`>`), so equal elements never move and
/// the sort is stable.
pub struct InsertionSort {
    /// Position whose element is inserted next.
    outer: usize,
    /// In-progress shift cursor, saved across an aborted burst.
    inner: Option<usize>,
    done: bool,
}

impl InsertionSort {
    pub fn new() -> Self {
        InsertionSort {
            outer: 1,
            inner: None,
            done: false,
        }
    }
}

impl Default for InsertionSort {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for InsertionSort {
    fn advance(&mut self, data: &mut Dataset, sink: &mut dyn StepSink) -> StepOutcome {
        if self.done {
            return StepOutcome::Completed;
        }
        if data.len() < 2 {
            self.done = true;
            return StepOutcome::Completed;
        }

        let outer = self.outer;
        let mut j = match self.inner.take() {
            Some(saved) => saved,
            None => outer - 1,
        };

        loop {
            if sink.interrupted() {
                self.inner = Some(j);
                return StepOutcome::Aborted;
            }
            if data.values()[j] <= data.values()[j + 1] {
                break;
            }
            data.swap(j, j + 1);
            sink.notify(data.values(), j);
            if j == 0 {
                break;
            }
            j -= 1;
        }

        self.outer += 1;
        if self.outer >= data.len() {
            self.done = true;
            return StepOutcome::Completed;
        }
        StepOutcome::Continue
    }

    fn reset(&mut self) {
        *self = InsertionSort::new();
    }
}
