//! LSD radix sort: one digit-bucket placement per advance.

use crate::dataset::Dataset;

use super::{Engine, StepOutcome, StepSink};

/// Least-significant-digit radix sort, base 10, stable in place.
///
/// Each pass tallies a histogram of the current decimal digit, then places
/// positions left to right: drain the digit buckets in order, find the
/// first suffix element carrying the bucket's digit, and rotate it into
/// position with [`Dataset::shift_to`]. First-occurrence scanning plus
/// rotation keeps the pass stable, which is what lets the next digit build
/// on this one. The exponent advances by a factor of ten per pass and the
/// sort completes once it exceeds the maximum value.
///
/// The occurrence scan polls for pending input between comparisons and
/// aborts with nothing changed, so the rescan after resume is exact.
pub struct RadixSort {
    /// Weight of the digit this pass sorts by (1, 10, 100, ..).
    exp: u64,
    /// Maximum value, cached when the run starts.
    max: u32,
    /// Remaining elements per digit for the current pass.
    digit_counts: [usize; 10],
    /// Digit bucket currently being drained.
    bucket: usize,
    /// Next placement position.
    pos: usize,
    /// Whether the current pass has its histogram.
    pass_ready: bool,
    started: bool,
    done: bool,
}

impl RadixSort {
    pub fn new() -> Self {
        RadixSort {
            exp: 1,
            max: 0,
            digit_counts: [0; 10],
            bucket: 0,
            pos: 0,
            pass_ready: false,
            started: false,
            done: false,
        }
    }

    fn digit(value: u32, exp: u64) -> usize {
        ((u64::from(value) / exp) % 10) as usize
    }
}

impl Default for RadixSort {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RadixSort {
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
            self.exp = 1;
            self.max = data.max();
            if self.max == 0 {
                // All zeros sort in zero passes
                self.done = true;
                return StepOutcome::Completed;
            }
        }

        if !self.pass_ready {
            self.digit_counts = [0; 10];
            for &value in data.values() {
                self.digit_counts[Self::digit(value, self.exp)] += 1;
            }
            self.bucket = 0;
            self.pos = 0;
            self.pass_ready = true;
            return StepOutcome::Continue;
        }

        // Drain the digit buckets in order
        while self.digit_counts[self.bucket] == 0 {
            self.bucket += 1;
        }
        let target = self.bucket;

        // The histogram was tallied from this very array, so a matching
        // digit exists at or beyond `pos`.
        let mut idx = self.pos;
        loop {
            if Self::digit(data.values()[idx], self.exp) == target {
                break;
            }
            if sink.interrupted() {
                return StepOutcome::Aborted;
            }
            idx += 1;
        }

        if idx != self.pos {
            data.shift_to(idx, self.pos);
            sink.notify(data.values(), self.pos);
        }
        self.digit_counts[target] -= 1;
        self.pos += 1;

        if self.pos == n {
            // Pass complete; move to the next digit or finish
            self.exp *= 10;
            self.pass_ready = false;
            if self.exp > u64::from(self.max) {
                self.done = true;
                return StepOutcome::Completed;
            }
        }
        StepOutcome::Continue
    }

    fn reset(&mut self) {
        *self = RadixSort::new();
    }
}
