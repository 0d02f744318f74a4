//! Bottom-up in-place merge sort: one merge comparison per advance.

use crate::dataset::Dataset;

use super::{Engine, StepOutcome, StepSink};

/// Iterative merge sort over doubling group widths.
///
/// A pass merges adjacent run pairs of the current width; the width doubles
/// per pass and the sort completes once it reaches the array length. Each
/// advance resolves one head-to-head comparison: the winning right head is
/// rotated into place with [`Dataset::shift_to`], which keeps every step
/// boundary a permutation (no scratch buffer) and preserves the order of
/// the displaced left run.
///
/// The comparison is strict (`<` keeps the left head), so on ties the right
/// head is rotated in.
pub struct MergeSort {
    /// Current run width.
    width: usize,
    /// Left edge of the pair being merged.
    lo: usize,
    /// Frontier inside the left run; everything before it is merged.
    li: usize,
    /// Head of the right run.
    mid: usize,
    /// Exclusive end of the right run.
    hi: usize,
    /// Whether li/mid/hi describe an in-progress pair.
    in_pair: bool,
    done: bool,
}

impl MergeSort {
    pub fn new() -> Self {
        MergeSort {
            width: 1,
            lo: 0,
            li: 0,
            mid: 0,
            hi: 0,
            in_pair: false,
            done: false,
        }
    }
}

impl Default for MergeSort {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MergeSort {
    fn advance(&mut self, data: &mut Dataset, sink: &mut dyn StepSink) -> StepOutcome {
        if self.done {
            return StepOutcome::Completed;
        }
        let n = data.len();
        if n < 2 {
            self.done = true;
            return StepOutcome::Completed;
        }

        // Advance the cursors to the next comparison, crossing pair and
        // pass boundaries as needed.
        loop {
            if self.in_pair {
                if self.li < self.mid && self.mid < self.hi {
                    break;
                }
                // One run ran dry; the remainder is already in place
                self.in_pair = false;
                self.lo += 2 * self.width;
            }
            if self.lo + self.width >= n {
                // Any leftover group has no right run to merge with
                self.width *= 2;
                self.lo = 0;
                if self.width >= n {
                    self.done = true;
                    return StepOutcome::Completed;
                }
                continue;
            }
            self.li = self.lo;
            self.mid = self.lo + self.width;
            self.hi = (self.lo + 2 * self.width).min(n);
            self.in_pair = true;
        }

        let (li, mid) = (self.li, self.mid);
        if data.values()[li] < data.values()[mid] {
            // Left head stays put
            self.li += 1;
        } else {
            // Right head rotates in; the left run shifts up one
            data.shift_to(mid, li);
            sink.notify(data.values(), li);
            self.li += 1;
            self.mid += 1;
        }
        StepOutcome::Continue
    }

    fn reset(&mut self) {
        *self = MergeSort::new();
    }
}
