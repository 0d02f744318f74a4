//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, frame pacing, crossterm input decoding
//! - **[`panes`]** — stateless render functions for the bar chart and status bar
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a validated
//! [`Driver`] and call [`App::run`] to start the frame loop.
//!
//! [`Driver`]: crate::driver::Driver
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::{App, TerminalInput};
