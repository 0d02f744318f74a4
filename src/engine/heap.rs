//! Heapsort: one sift-down level per advance.

use crate::dataset::Dataset;

use super::{Engine, StepOutcome, StepSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Heapify nodes `next-1, next-2, .., 0`.
    Build { next: usize },
    /// The heap occupies `0..end`; `end..` is the sorted suffix.
    Extract { end: usize },
}

/// A sift-down in flight: the node being settled and the heap boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Sift {
    node: usize,
    limit: usize,
}

/// Max-heap heapsort with a flattened sift cursor.
///
/// The nested sift-down loop becomes a persisted [`Sift`] cursor: each
/// advance settles one tree level (compare the node with its children,
/// swap with the larger one, descend). Child comparisons are strict, so
/// an equal child never displaces its parent and a left/right tie keeps
/// the left child.
///
/// Extraction swaps the root into the sorted suffix as its own advance,
/// then sifts the new root level by level.
pub struct HeapSort {
    phase: Phase,
    sift: Option<Sift>,
    started: bool,
    done: bool,
}

impl HeapSort {
    pub fn new() -> Self {
        HeapSort {
            phase: Phase::Build { next: 0 },
            sift: None,
            started: false,
            done: false,
        }
    }

    /// One sift level; returns the continuation, if the sift is not
    /// finished.
    fn sift_level(data: &mut Dataset, sink: &mut dyn StepSink, sift: Sift) -> Option<Sift> {
        let Sift { node, limit } = sift;
        let left = 2 * node + 1;
        if left >= limit {
            return None;
        }

        let mut largest = node;
        if data.values()[left] > data.values()[largest] {
            largest = left;
        }
        let right = left + 1;
        if right < limit && data.values()[right] > data.values()[largest] {
            largest = right;
        }
        if largest == node {
            return None;
        }

        data.swap(node, largest);
        sink.notify(data.values(), largest);
        Some(Sift {
            node: largest,
            limit,
        })
    }
}

impl Default for HeapSort {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for HeapSort {
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
            self.phase = Phase::Build {
                next: data.len() / 2,
            };
        }

        if let Some(sift) = self.sift.take() {
            self.sift = Self::sift_level(data, sink, sift);
            return StepOutcome::Continue;
        }

        match self.phase {
            Phase::Build { next } => {
                if next > 0 {
                    let node = next - 1;
                    self.phase = Phase::Build { next: node };
                    self.sift = Self::sift_level(
                        data,
                        sink,
                        Sift {
                            node,
                            limit: data.len(),
                        },
                    );
                } else {
                    // Heap complete; pull the first maximum to the back
                    let end = data.len() - 1;
                    data.swap(0, end);
                    sink.notify(data.values(), end);
                    self.phase = Phase::Extract { end };
                    self.sift = Some(Sift { node: 0, limit: end });
                }
                StepOutcome::Continue
            }
            Phase::Extract { end } => {
                if end <= 1 {
                    self.done = true;
                    return StepOutcome::Completed;
                }
                let end = end - 1;
                data.swap(0, end);
                sink.notify(data.values(), end);
                self.phase = Phase::Extract { end };
                self.sift = Some(Sift { node: 0, limit: end });
                StepOutcome::Continue
            }
        }
    }

    fn reset(&mut self) {
        *self = HeapSort::new();
    }
}
