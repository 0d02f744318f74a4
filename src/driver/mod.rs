//! Per-frame orchestration
//!
//! [`Driver::tick`] is the frame contract: drain pending input, advance the
//! running engine by one step, reconcile completion, then render
//! unconditionally so input-driven changes show the same frame. The driver
//! reaches the outside world only through [`InputSource`] and
//! [`RenderSink`], so the whole loop runs headless in tests.
//!
//! Cancellation is cooperative and deferred: while an engine is inside a
//! multi-comparison burst it polls [`StepSink::interrupted`], which the
//! driver answers from [`InputSource::event_pending`]. The engine aborts at
//! a safe boundary and the event is applied at the start of the next tick;
//! if the event turns out not to pause anything, the next tick simply
//! resumes the burst.

use crate::config::{Config, ConfigError};
use crate::control::{ControlEvent, ControlState};
use crate::dataset::Dataset;
use crate::engine::{EngineSet, StepOutcome, StepSink};

/// Supplies decoded control events.
pub trait InputSource {
    /// The next queued event, if any. Drained to exhaustion at the start
    /// of every tick.
    fn next_event(&mut self) -> Option<ControlEvent>;

    /// Whether an event is waiting. Polled mid-burst through the step
    /// sink; reporting true makes the running engine abort its burst.
    fn event_pending(&mut self) -> bool;
}

/// Receives frames.
pub trait RenderSink {
    /// Draw the current array. `selected` is the most recently touched
    /// index, if any. Must return promptly and cannot mutate the values.
    fn draw_frame(&mut self, values: &[u32], selected: Option<usize>);
}

/// What one tick did, for the caller's status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummary {
    /// Outcome of the engine step, if one ran.
    pub outcome: Option<StepOutcome>,
    /// The last control event applied this tick.
    pub last_event: Option<ControlEvent>,
    /// Whether a quit event was seen.
    pub quit: bool,
}

/// Owns the dataset, control state and engines; steps once per frame.
pub struct Driver {
    config: Config,
    dataset: Dataset,
    control: ControlState,
    engines: EngineSet,
    /// Most recently touched index, kept highlighted across pauses and
    /// cleared on regeneration.
    highlight: Option<usize>,
    quit: bool,
}

impl Driver {
    /// Validate `config` and generate the initial dataset.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let dataset = Dataset::generate(&config)?;
        Ok(Driver::with_dataset(config, dataset))
    }

    /// Wrap an existing dataset; regeneration still samples from `config`.
    pub fn with_dataset(config: Config, dataset: Dataset) -> Self {
        Driver {
            config,
            dataset,
            control: ControlState::new(),
            engines: EngineSet::new(),
            highlight: None,
            quit: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn control(&self) -> &ControlState {
        &self.control
    }

    /// The most recently touched index, if any.
    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Run one frame.
    ///
    /// 1. Drain and apply every pending control event.
    /// 2. Advance the running engine one step, if any.
    /// 3. On completion, mark the control state sorted.
    /// 4. Draw the frame (skipped only when quitting).
    pub fn tick<I: InputSource, R: RenderSink>(
        &mut self,
        input: &mut I,
        render: &mut R,
    ) -> TickSummary {
        let mut summary = TickSummary {
            outcome: None,
            last_event: None,
            quit: false,
        };

        while let Some(event) = input.next_event() {
            self.apply(event);
            summary.last_event = Some(event);
        }
        if self.quit {
            summary.quit = true;
            return summary;
        }

        if let Some(algorithm) = self.control.running() {
            // Reborrow so the collaborators stay usable for the final draw
            let mut bridge = EngineBridge {
                input: &mut *input,
                render: &mut *render,
                highlight: &mut self.highlight,
            };
            let outcome = self
                .engines
                .advance(algorithm, &mut self.dataset, &mut bridge);
            if outcome == StepOutcome::Completed {
                self.control.finish();
            }
            summary.outcome = Some(outcome);
        }

        render.draw_frame(self.dataset.values(), self.highlight);
        summary
    }

    fn apply(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::Toggle => self.control.toggle(),
            ControlEvent::Select(algorithm) => {
                self.control.select(algorithm);
                self.regenerate();
            }
            ControlEvent::Generate => {
                self.control.reset();
                self.regenerate();
            }
            ControlEvent::Quit => self.quit = true,
        }
    }

    /// Replace the dataset wholesale and drop every engine's cursors, so a
    /// half-finished run can never resume against values it never saw.
    fn regenerate(&mut self) {
        self.dataset.regenerate(&self.config);
        self.engines.reset_all();
        self.highlight = None;
    }
}

/// Adapts the driver's collaborators to the engine-facing [`StepSink`].
struct EngineBridge<'a, I: InputSource, R: RenderSink> {
    input: &'a mut I,
    render: &'a mut R,
    highlight: &'a mut Option<usize>,
}

impl<I: InputSource, R: RenderSink> StepSink for EngineBridge<'_, I, R> {
    fn notify(&mut self, values: &[u32], index: usize) {
        *self.highlight = Some(index);
        self.render.draw_frame(values, Some(index));
    }

    fn interrupted(&mut self) -> bool {
        self.input.event_pending()
    }
}
