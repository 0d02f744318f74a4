//! Counting sort: one table-driven placement per advance.

use crate::dataset::Dataset;

use super::{Engine, StepOutcome, StepSink};

/// Counting sort rebuilt as in-place placement.
///
/// The first advance tallies a frequency table sized `max + 1`; every
/// later advance places one value: walk the table to the next non-empty
/// bucket, find an occurrence of that value in the unsorted suffix, and
/// swap it into position. Values already in position cost no move, so an
/// all-equal dataset completes without touching the array.
///
/// The occurrence scan is a burst: it polls for pending input between
/// comparisons and aborts without having changed anything, so the rescan
/// after resume is exact.
pub struct CountingSort {
    /// Remaining occurrences per value; sized `max + 1` at build time.
    counts: Vec<usize>,
    /// Table bucket currently being drained.
    bucket: usize,
    /// Next placement position.
    pos: usize,
    built: bool,
    done: bool,
}

impl CountingSort {
    pub fn new() -> Self {
        CountingSort {
            counts: Vec::new(),
            bucket: 0,
            pos: 0,
            built: false,
            done: false,
        }
    }
}

impl Default for CountingSort {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for CountingSort {
    fn advance(&mut self, data: &mut Dataset, sink: &mut dyn StepSink) -> StepOutcome {
        if self.done {
            return StepOutcome::Completed;
        }
        let n = data.len();
        if n < 2 {
            self.done = true;
            return StepOutcome::Completed;
        }

        if !self.built {
            let mut counts = vec![0usize; data.max() as usize + 1];
            for &value in data.values() {
                counts[value as usize] += 1;
            }
            self.counts = counts;
            self.bucket = 0;
            self.pos = 0;
            self.built = true;
            return StepOutcome::Continue;
        }

        // Drain the table in value order
        while self.counts[self.bucket] == 0 {
            self.bucket += 1;
        }
        let value = self.bucket as u32;

        // The table was tallied from this very array, so an occurrence
        // exists at or beyond `pos`.
        let mut idx = self.pos;
        loop {
            if data.values()[idx] == value {
                break;
            }
            if sink.interrupted() {
                return StepOutcome::Aborted;
            }
            idx += 1;
        }

        if idx != self.pos {
            data.swap(self.pos, idx);
            sink.notify(data.values(), self.pos);
        }
        self.counts[self.bucket] -= 1;
        self.pos += 1;

        if self.pos == n {
            self.done = true;
            return StepOutcome::Completed;
        }
        StepOutcome::Continue
    }

    fn reset(&mut self) {
        *self = CountingSort::new();
    }
}
