//! Resumable sorting engines
//!
//! Every algorithm is a flat state machine implementing [`Engine`]: the
//! driver calls [`Engine::advance`] once per frame, the engine performs the
//! next indivisible unit of visible work against the shared
//! [`Dataset`](crate::dataset::Dataset), and control returns. Cursors
//! persist across calls, so a run can be paused, resumed or abandoned at
//! any step boundary, and the recursion or nested loops of the textbook
//! formulations become explicit cursor state:
//!
//! - [`quick`](QuickSort) keeps a pending-range stack instead of recursing
//! - [`heap`](HeapSort) keeps a flattened (node, limit) sift cursor
//! - [`merge`](MergeSort) keeps (width, pair bounds, run heads) and merges
//!   bottom-up in place with stable rotations
//!
//! Engines whose single step spans several comparisons (selection's minimum
//! scan, insertion's shift run, counting's and radix's occurrence scans)
//! poll [`StepSink::interrupted`] between comparisons and bail out with
//! [`StepOutcome::Aborted`], leaving the dataset untouched since the last
//! completed sub-step. A later [`Engine::advance`] resumes exactly where
//! the burst stopped.

mod bubble;
mod counting;
mod heap;
mod insertion;
mod merge;
mod quick;
mod radix;
mod selection;
mod shell;

pub use bubble::BubbleSort;
pub use counting::CountingSort;
pub use heap::HeapSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use radix::RadixSort;
pub use selection::SelectionSort;
pub use shell::ShellSort;

use crate::control::Algorithm;
use crate::dataset::Dataset;

/// Result of one [`Engine::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// More work remains.
    Continue,

    /// The dataset is sorted. Further calls are no-ops that keep returning
    /// `Completed`.
    Completed,

    /// Pending input interrupted a multi-comparison burst. Cursors are
    /// preserved and the dataset is a valid permutation; the next call
    /// resumes the burst.
    Aborted,
}

/// Engine-facing callback surface, implemented by the driver.
pub trait StepSink {
    /// Report a visible mutation: `values` after the move, `index` the
    /// position most recently written.
    fn notify(&mut self, values: &[u32], index: usize);

    /// Whether undelivered input is waiting. Burst engines poll this
    /// between comparisons and abort when it reports true; the input is
    /// applied at the start of the next tick.
    fn interrupted(&mut self) -> bool;
}

/// A resumable sorting state machine.
pub trait Engine {
    /// Perform the next indivisible unit of visible work.
    fn advance(&mut self, data: &mut Dataset, sink: &mut dyn StepSink) -> StepOutcome;

    /// Drop all cursor state, ready for a fresh dataset.
    fn reset(&mut self);
}

/// One engine per algorithm, dispatched by [`Algorithm`].
pub struct EngineSet {
    bubble: BubbleSort,
    insertion: InsertionSort,
    merge: MergeSort,
    selection: SelectionSort,
    quick: QuickSort,
    heap: HeapSort,
    counting: CountingSort,
    radix: RadixSort,
    shell: ShellSort,
}

impl EngineSet {
    pub fn new() -> Self {
        EngineSet {
            bubble: BubbleSort::new(),
            insertion: InsertionSort::new(),
            merge: MergeSort::new(),
            selection: SelectionSort::new(),
            quick: QuickSort::new(),
            heap: HeapSort::new(),
            counting: CountingSort::new(),
            radix: RadixSort::new(),
            shell: ShellSort::new(),
        }
    }

    /// The engine for `algorithm`.
    pub fn engine_mut(&mut self, algorithm: Algorithm) -> &mut dyn Engine {
        match algorithm {
            Algorithm::Bubble => &mut self.bubble,
            Algorithm::Insertion => &mut self.insertion,
            Algorithm::Merge => &mut self.merge,
            Algorithm::Selection => &mut self.selection,
            Algorithm::Quick => &mut self.quick,
            Algorithm::Heap => &mut self.heap,
            Algorithm::Counting => &mut self.counting,
            Algorithm::Radix => &mut self.radix,
            Algorithm::Shell => &mut self.shell,
        }
    }

    /// Advance the engine for `algorithm` by one step.
    pub fn advance(
        &mut self,
        algorithm: Algorithm,
        data: &mut Dataset,
        sink: &mut dyn StepSink,
    ) -> StepOutcome {
        self.engine_mut(algorithm).advance(data, sink)
    }

    /// Drop every engine's cursors. Called whenever the dataset is
    /// replaced, so no engine can resume against values it never saw.
    pub fn reset_all(&mut self) {
        for algorithm in Algorithm::ALL {
            self.engine_mut(algorithm).reset();
        }
    }
}

impl Default for EngineSet {
    fn default() -> Self {
        Self::new()
    }
}
