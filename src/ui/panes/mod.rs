//! TUI pane rendering modules
//!
//! Stateless render functions for the two visible panes:
//!
//! - [`bars`]: the array under sort as a bar chart, touched bar highlighted
//! - [`status`]: status bar with keybindings, counters and run state

pub mod bars;
pub mod status;

pub use bars::render_bars_pane;
pub use status::render_status_bar;
