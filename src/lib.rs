//! # Introduction
//!
//! sortty animates classic sorting algorithms as a live terminal bar
//! chart. The core is a resumable step-execution model: every algorithm
//! runs as a flat state machine that performs one indivisible unit of work
//! per frame, so a sort can be paused, resumed, restarted or replaced at
//! any comparison boundary while the input loop stays responsive.
//!
//! ## Frame pipeline
//!
//! ```text
//! Input → ControlState → Driver → Engine → Dataset → RenderSink → bar chart
//! ```
//!
//! 1. [`config`] — runtime configuration from positional CLI arguments.
//! 2. [`dataset`] — the array under sort; every mutation is a permutation
//!    (swap or stable rotation), so any frame shows real data.
//! 3. [`control`] — algorithm selection and run/pause bookkeeping with the
//!    exclusive [`control::ControlState::running`] accessor.
//! 4. [`engine`] — the nine sorting engines behind [`engine::Engine`], one
//!    step per [`engine::Engine::advance`] call, cooperative cancellation
//!    through [`engine::StepSink::interrupted`].
//! 5. [`driver`] — per-frame orchestration over [`driver::InputSource`]
//!    and [`driver::RenderSink`]; fully headless, which is how the tests
//!    drive it.
//! 6. [`ui`] — ratatui front-end; not part of the stable library API.
//!
//! ## Algorithms
//!
//! Bubble, insertion, merge (bottom-up, in place), selection, quick
//! (explicit range stack), heap (flattened sift), counting (occurrence
//! swaps), radix (LSD, stable rotations) and shell, on keys `1` through
//! `9`.

pub mod config;
pub mod control;
pub mod dataset;
pub mod driver;
pub mod engine;
pub mod ui;
