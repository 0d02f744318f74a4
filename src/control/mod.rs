//! Algorithm selection and run/pause bookkeeping
//!
//! [`ControlState`] tracks which algorithm is selected, which (if any) is
//! running, and whether the last run completed. The run flags live in a
//! per-algorithm map, but mutual exclusion is enforced at both ends:
//! [`ControlState::start`] clears every other flag before setting one, and
//! [`ControlState::running`] consults only the active algorithm, so a stale
//! flag on a background algorithm can never be observed.

use rustc_hash::FxHashMap;

/// The nine sorting algorithms, in hotkey order (`1`-`9`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Merge,
    Selection,
    Quick,
    Heap,
    Counting,
    Radix,
    Shell,
}

impl Algorithm {
    /// All algorithms, in hotkey order.
    pub const ALL: [Algorithm; 9] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Selection,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Counting,
        Algorithm::Radix,
        Algorithm::Shell,
    ];

    /// Display name for the status bar.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Selection => "selection",
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
            Algorithm::Counting => "counting",
            Algorithm::Radix => "radix",
            Algorithm::Shell => "shell",
        }
    }

    /// Map a 1-based hotkey digit to an algorithm.
    pub fn from_index(index: usize) -> Option<Algorithm> {
        index
            .checked_sub(1)
            .and_then(|i| Algorithm::ALL.get(i).copied())
    }
}

/// Semantic input events, as decoded by the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// Toggle the active algorithm between running and paused.
    Toggle,
    /// Select an algorithm; the dataset is regenerated.
    Select(Algorithm),
    /// Regenerate the dataset, keeping the current selection.
    Generate,
    /// Quit the application.
    Quit,
}

/// Selector, run flags and the sorted marker.
#[derive(Debug, Clone)]
pub struct ControlState {
    active: Algorithm,
    run_flags: FxHashMap<Algorithm, bool>,
    sorted: bool,
}

impl ControlState {
    pub fn new() -> Self {
        ControlState {
            active: Algorithm::Bubble,
            run_flags: FxHashMap::default(),
            sorted: false,
        }
    }

    /// The currently selected algorithm.
    pub fn active(&self) -> Algorithm {
        self.active
    }

    /// Whether the active algorithm completed since the last reset.
    pub fn sorted(&self) -> bool {
        self.sorted
    }

    /// The running algorithm, if any. Only the active algorithm's flag is
    /// consulted.
    pub fn running(&self) -> Option<Algorithm> {
        match self.run_flags.get(&self.active) {
            Some(true) => Some(self.active),
            _ => None,
        }
    }

    /// Start the active algorithm, clearing every other run flag.
    pub fn start(&mut self) {
        self.run_flags.clear();
        self.run_flags.insert(self.active, true);
        self.sorted = false;
    }

    /// Pause the active algorithm. Cursors persist, so a later start
    /// resumes where the run left off.
    pub fn pause(&mut self) {
        self.run_flags.insert(self.active, false);
    }

    /// Flip the active algorithm between running and paused.
    pub fn toggle(&mut self) {
        if self.running().is_some() {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Make `algorithm` the active one and stop whatever was running.
    pub fn select(&mut self, algorithm: Algorithm) {
        self.active = algorithm;
        self.reset();
    }

    /// Record completion of the active algorithm: clear its run flag and
    /// raise the sorted marker.
    pub fn finish(&mut self) {
        self.run_flags.insert(self.active, false);
        self.sorted = true;
    }

    /// Clear all run flags and the sorted marker.
    pub fn reset(&mut self) {
        self.run_flags.clear();
        self.sorted = false;
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotkey_mapping_covers_one_through_nine() {
        assert_eq!(Algorithm::from_index(1), Some(Algorithm::Bubble));
        assert_eq!(Algorithm::from_index(5), Some(Algorithm::Quick));
        assert_eq!(Algorithm::from_index(9), Some(Algorithm::Shell));
        assert_eq!(Algorithm::from_index(0), None);
        assert_eq!(Algorithm::from_index(10), None);
    }

    #[test]
    fn test_toggle_runs_and_pauses() {
        let mut control = ControlState::new();
        assert_eq!(control.running(), None);

        control.toggle();
        assert_eq!(control.running(), Some(Algorithm::Bubble));

        control.toggle();
        assert_eq!(control.running(), None);
        assert!(!control.sorted());
    }

    #[test]
    fn test_only_the_active_algorithm_can_report_running() {
        let mut control = ControlState::new();
        control.toggle();
        assert_eq!(control.running(), Some(Algorithm::Bubble));

        // Switching away stops the old run entirely
        control.select(Algorithm::Heap);
        assert_eq!(control.active(), Algorithm::Heap);
        assert_eq!(control.running(), None);

        control.toggle();
        assert_eq!(control.running(), Some(Algorithm::Heap));
    }

    #[test]
    fn test_finish_sets_sorted_and_stops() {
        let mut control = ControlState::new();
        control.toggle();
        control.finish();

        assert_eq!(control.running(), None);
        assert!(control.sorted());

        // Starting again clears the marker until the next completion
        control.toggle();
        assert!(!control.sorted());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut control = ControlState::new();
        control.toggle();
        control.finish();
        control.reset();

        assert_eq!(control.running(), None);
        assert!(!control.sorted());
    }
}
