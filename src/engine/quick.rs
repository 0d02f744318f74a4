//! Quicksort: one partition comparison per advance, recursion as a stack.

use crate::dataset::Dataset;

use super::{Engine, StepOutcome, StepSink};

/// Cursors of an in-progress Lomuto partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Partition {
    lo: usize,
    /// Pivot position (last element of the range).
    hi: usize,
    /// Store boundary: values in `lo..i` are at most the pivot.
    i: usize,
    /// Scan cursor.
    j: usize,
}

/// Quicksort with an explicit pending-range stack.
///
/// The recursion of the textbook formulation becomes a stack of inclusive
/// ranges; each advance performs one Lomuto scan comparison (`<=` against
/// the last-element pivot), and the scan's final advance settles the pivot
/// and pushes both sub-ranges. Degenerate ranges are discarded when popped,
/// so they never cost a frame.
pub struct QuickSort {
    /// Ranges still to partition, popped LIFO.
    stack: Vec<(usize, usize)>,
    /// The partition in flight, if any.
    part: Option<Partition>,
    started: bool,
    done: bool,
}

impl QuickSort {
    pub fn new() -> Self {
        QuickSort {
            stack: Vec::new(),
            part: None,
            started: false,
            done: false,
        }
    }
}

impl Default for QuickSort {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for QuickSort {
    fn advance(&mut self, data: &mut Dataset, sink: &mut dyn StepSink) -> StepOutcome {
        if self.done {
            return StepOutcome::Completed;
        }
        if !self.started {
            self.started = true;
            if data.len() < 2 {
                self.done = true;
                return StepOutcome::Completed;
            }
            self.stack.push((0, data.len() - 1));
        }

        let mut part = match self.part.take() {
            Some(part) => part,
            None => loop {
                match self.stack.pop() {
                    Some((lo, hi)) if lo < hi => {
                        break Partition { lo, hi, i: lo, j: lo };
                    }
                    Some(_) => continue,
                    None => {
                        self.done = true;
                        return StepOutcome::Completed;
                    }
                }
            },
        };

        if part.j < part.hi {
            // One scan comparison against the pivot
            if data.values()[part.j] <= data.values()[part.hi] {
                if part.i != part.j {
                    data.swap(part.i, part.j);
                    sink.notify(data.values(), part.i);
                }
                part.i += 1;
            }
            part.j += 1;
            self.part = Some(part);
            return StepOutcome::Continue;
        }

        // Scan exhausted: settle the pivot and queue both sides
        let pivot = part.i;
        if pivot != part.hi {
            data.swap(pivot, part.hi);
            sink.notify(data.values(), pivot);
        }
        if pivot > part.lo {
            self.stack.push((part.lo, pivot - 1));
        }
        if pivot < part.hi {
            self.stack.push((pivot + 1, part.hi));
        }
        if self.stack.is_empty() {
            self.done = true;
            return StepOutcome::Completed;
        }
        StepOutcome::Continue
    }

    fn reset(&mut self) {
        *self = QuickSort::new();
    }
}
