//! Main TUI application state and logic

use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use crate::control::{Algorithm, ControlEvent};
use crate::driver::{Driver, InputSource, RenderSink, TickSummary};
use crate::engine::StepOutcome;

/// Decodes crossterm events into control events, buffering them until the
/// driver drains the queue at the next tick.
///
/// The buffer is what makes mid-burst cancellation work: an engine polling
/// for pending input sees the decoded event here before the driver applies
/// it.
pub struct TerminalInput {
    queue: VecDeque<ControlEvent>,
    /// Terminal failure captured during polling; re-raised after the tick.
    error: Option<io::Error>,
}

impl TerminalInput {
    pub fn new() -> Self {
        TerminalInput {
            queue: VecDeque::new(),
            error: None,
        }
    }

    /// Poll the terminal for up to `timeout` and queue whatever decodes.
    /// After the first arrival, keeps draining without further waiting.
    pub fn pump(&mut self, timeout: Duration) {
        if self.error.is_some() {
            return;
        }
        let mut wait = timeout;
        loop {
            match event::poll(wait) {
                Ok(true) => match event::read() {
                    Ok(raw) => {
                        if let Some(decoded) = Self::decode(raw) {
                            self.queue.push_back(decoded);
                        }
                    }
                    Err(err) => {
                        self.error = Some(err);
                        return;
                    }
                },
                Ok(false) => return,
                Err(err) => {
                    self.error = Some(err);
                    return;
                }
            }
            wait = Duration::ZERO;
        }
    }

    /// A terminal error captured during polling, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn decode(raw: Event) -> Option<ControlEvent> {
        match raw {
            Event::Key(key) if key.kind == KeyEventKind::Press => Self::decode_key(key),
            Event::Mouse(mouse) => match mouse.kind {
                // A primary click anywhere regenerates
                MouseEventKind::Down(MouseButton::Left) => Some(ControlEvent::Generate),
                _ => None,
            },
            _ => None,
        }
    }

    fn decode_key(key: KeyEvent) -> Option<ControlEvent> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(ControlEvent::Quit);
        }
        match key.code {
            KeyCode::Char(' ') => Some(ControlEvent::Toggle),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c.to_digit(10)? as usize;
                Algorithm::from_index(index).map(ControlEvent::Select)
            }
            KeyCode::Char('g') | KeyCode::Char('G') => Some(ControlEvent::Generate),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(ControlEvent::Quit),
            _ => None,
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TerminalInput {
    fn next_event(&mut self) -> Option<ControlEvent> {
        self.queue.pop_front()
    }

    fn event_pending(&mut self) -> bool {
        if self.queue.is_empty() {
            self.pump(Duration::ZERO);
        }
        !self.queue.is_empty()
    }
}

/// Status fields captured once per tick for the in-frame status bar.
#[derive(Clone)]
struct StatusSnapshot {
    message: String,
    algorithm: Algorithm,
    count: usize,
    moves: u64,
    running: bool,
    sorted: bool,
}

/// Paints frames into the ratatui terminal. Draw failures are captured and
/// re-raised by [`App::run`] after the tick, since mid-burst frames have no
/// way to propagate them.
struct TuiCanvas<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    status: StatusSnapshot,
    error: Option<io::Error>,
}

impl<B: Backend> RenderSink for TuiCanvas<'_, B> {
    fn draw_frame(&mut self, values: &[u32], selected: Option<usize>) {
        if self.error.is_some() {
            return;
        }
        let status = &self.status;
        let drawn = self
            .terminal
            .draw(|frame| render_frame(frame, values, selected, status));
        if let Err(err) = drawn {
            self.error = Some(err);
        }
    }
}

/// Render one frame: the bar chart over a one-line status bar.
fn render_frame(frame: &mut Frame, values: &[u32], selected: Option<usize>, status: &StatusSnapshot) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    let max = values.iter().copied().max().unwrap_or(0);
    let title = format!(" {} sort ", status.algorithm.label());
    super::panes::render_bars_pane(frame, chunks[0], values, max, selected, &title);
    super::panes::render_status_bar(
        frame,
        chunks[1],
        &status.message,
        status.algorithm,
        status.count,
        status.moves,
        status.running,
        status.sorted,
    );
}

/// The main application state
pub struct App {
    /// The step driver owning dataset, control state and engines
    driver: Driver,
    /// Decoded-input queue feeding the driver
    input: TerminalInput,
    /// Status message to display
    status_message: String,
    /// Time budget of one frame
    frame_budget: Duration,
}

impl App {
    /// Create the app around a validated driver.
    pub fn new(driver: Driver) -> Self {
        let frame_rate = u64::from(driver.config().frame_rate.max(1));
        App {
            driver,
            input: TerminalInput::new(),
            status_message: String::from("Pick an algorithm with 1-9, then press space"),
            frame_budget: Duration::from_micros(1_000_000 / frame_rate),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let mut last_tick = Instant::now();
        loop {
            // Collect input until the frame deadline
            let timeout = self.frame_budget.saturating_sub(last_tick.elapsed());
            self.input.pump(timeout);
            if let Some(err) = self.input.take_error() {
                return Err(err);
            }
            if last_tick.elapsed() < self.frame_budget {
                continue;
            }
            last_tick = Instant::now();

            let mut canvas = TuiCanvas {
                terminal: &mut *terminal,
                status: self.status_snapshot(),
                error: None,
            };
            let summary = self.driver.tick(&mut self.input, &mut canvas);
            if let Some(err) = canvas.error.take() {
                return Err(err);
            }
            if let Some(err) = self.input.take_error() {
                return Err(err);
            }

            self.absorb(summary);
            if self.driver.should_quit() {
                return Ok(());
            }
        }
    }

    fn status_snapshot(&self) -> StatusSnapshot {
        let control = self.driver.control();
        StatusSnapshot {
            message: self.status_message.clone(),
            algorithm: control.active(),
            count: self.driver.dataset().len(),
            moves: self.driver.dataset().moves(),
            running: control.running().is_some(),
            sorted: control.sorted(),
        }
    }

    /// Fold a tick summary into the status message.
    fn absorb(&mut self, summary: TickSummary) {
        if let Some(event) = summary.last_event {
            self.status_message = match event {
                ControlEvent::Toggle => {
                    if self.driver.control().running().is_some() {
                        format!("Running {} sort...", self.driver.control().active().label())
                    } else {
                        String::from("Paused")
                    }
                }
                ControlEvent::Select(algorithm) => {
                    format!("Selected {} sort, fresh data", algorithm.label())
                }
                ControlEvent::Generate => String::from("Generated fresh data"),
                ControlEvent::Quit => String::from("Quitting"),
            };
        }
        if summary.outcome == Some(StepOutcome::Completed) {
            self.status_message = format!(
                "{} sort complete after {} moves",
                self.driver.control().active().label(),
                self.driver.dataset().moves()
            );
        }
    }
}
