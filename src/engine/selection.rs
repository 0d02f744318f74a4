//! Selection sort: one full minimum scan per advance.

use crate::dataset::Dataset;

use super::{Engine, StepOutcome, StepSink};

/// Selection sort with an interruptible scan.
///
/// Each advance scans the unsorted suffix for its minimum and swaps it to
/// the front, which is the coarsest step of any engine here, so the scan
/// polls for pending input before every comparison. An aborted scan saves
/// its cursor and best-so-far index and resumes without rescanning.
///
/// The best-so-far update is strict (`>`), so the earliest minimum wins and
/// equal values cause no swap churn.
pub struct SelectionSort {
    /// Front of the unsorted suffix.
    outer: usize,
    /// In-progress scan: (next index to examine, best index so far).
    scan: Option<(usize, usize)>,
    done: bool,
}

impl SelectionSort {
    pub fn new() -> Self {
        SelectionSort {
            outer: 0,
            scan: None,
            done: false,
        }
    }
}

impl Default for SelectionSort {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for SelectionSort {
    fn advance(&mut self, data: &mut Dataset, sink: &mut dyn StepSink) -> StepOutcome {
        if self.done {
            return StepOutcome::Completed;
        }
        let n = data.len();
        if n < 2 || self.outer + 1 >= n {
            self.done = true;
            return StepOutcome::Completed;
        }

        let outer = self.outer;
        let (mut j, mut min_idx) = match self.scan.take() {
            Some(saved) => saved,
            None => (outer + 1, outer),
        };

        while j < n {
            if sink.interrupted() {
                self.scan = Some((j, min_idx));
                return StepOutcome::Aborted;
            }
            if data.values()[min_idx] > data.values()[j] {
                min_idx = j;
            }
            j += 1;
        }

        if min_idx != outer {
            data.swap(outer, min_idx);
            sink.notify(data.values(), outer);
        }

        self.outer += 1;
        if self.outer + 1 >= n {
            self.done = true;
            return StepOutcome::Completed;
        }
        StepOutcome::Continue
    }

    fn reset(&mut self) {
        *self = SelectionSort::new();
    }
}
