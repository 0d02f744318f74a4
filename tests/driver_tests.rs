// Driver tests: the tick contract, exercised headless through scripted
// input and a recording render sink

use std::collections::VecDeque;

use sortty::config::Config;
use sortty::control::{Algorithm, ControlEvent};
use sortty::dataset::Dataset;
use sortty::driver::{Driver, InputSource, RenderSink};
use sortty::engine::StepOutcome;

/// Input collaborator fed from a script. Events pushed before a tick are
/// drained at its start; events armed with [`ScriptedInput::arrive_later`]
/// join the queue at the next pending-input probe, as if the user typed
/// mid-burst. `false_alarms` makes the probe report pending input without
/// producing an event.
struct ScriptedInput {
    queue: VecDeque<ControlEvent>,
    arriving: Option<Vec<ControlEvent>>,
    false_alarms: usize,
}

impl ScriptedInput {
    fn new() -> Self {
        ScriptedInput {
            queue: VecDeque::new(),
            arriving: None,
            false_alarms: 0,
        }
    }

    fn push(&mut self, event: ControlEvent) {
        self.queue.push_back(event);
    }

    fn arrive_later(&mut self, events: Vec<ControlEvent>) {
        self.arriving = Some(events);
    }
}

impl InputSource for ScriptedInput {
    fn next_event(&mut self) -> Option<ControlEvent> {
        self.queue.pop_front()
    }

    fn event_pending(&mut self) -> bool {
        if self.false_alarms > 0 {
            self.false_alarms -= 1;
            return true;
        }
        if let Some(events) = self.arriving.take() {
            self.queue.extend(events);
        }
        !self.queue.is_empty()
    }
}

/// Render collaborator that records every frame it is handed.
struct RecordingSink {
    frames: Vec<(Vec<u32>, Option<usize>)>,
}

impl RecordingSink {
    fn new() -> Self {
        RecordingSink { frames: Vec::new() }
    }
}

impl RenderSink for RecordingSink {
    fn draw_frame(&mut self, values: &[u32], selected: Option<usize>) {
        self.frames.push((values.to_vec(), selected));
    }
}

/// A config whose regenerated datasets are fully deterministic: every
/// sample lands on `value`.
fn flat_config(count: usize, value: u32) -> Config {
    Config {
        count,
        lower: value,
        upper: value,
        frame_rate: 60,
    }
}

fn driver_over(values: Vec<u32>) -> Driver {
    let config = Config {
        count: values.len(),
        lower: 1,
        upper: 100,
        frame_rate: 60,
    };
    Driver::with_dataset(config, Dataset::from_values(values))
}

#[test]
fn test_new_rejects_unusable_configs() {
    let zero = Config {
        count: 0,
        ..Config::default()
    };
    assert!(Driver::new(zero).is_err());

    let inverted = Config {
        lower: 9,
        upper: 2,
        ..Config::default()
    };
    assert!(Driver::new(inverted).is_err());

    assert!(Driver::new(Config::default()).is_ok());
}

#[test]
fn test_idle_tick_still_renders() {
    let mut driver = driver_over(vec![3, 1, 2]);
    let mut input = ScriptedInput::new();
    let mut sink = RecordingSink::new();

    let summary = driver.tick(&mut input, &mut sink);

    assert_eq!(summary.outcome, None);
    assert_eq!(summary.last_event, None);
    assert!(!summary.quit);
    assert_eq!(sink.frames.len(), 1);
    assert_eq!(sink.frames[0], (vec![3, 1, 2], None));
}

#[test]
fn test_toggle_starts_and_completion_reconciles() {
    let mut driver = driver_over(vec![2, 1]);
    let mut input = ScriptedInput::new();
    let mut sink = RecordingSink::new();

    // Tick 1: toggle starts bubble, which swaps the pair. The swap is
    // rendered as a sub-frame, then the tick renders its own frame.
    input.push(ControlEvent::Toggle);
    let summary = driver.tick(&mut input, &mut sink);
    assert_eq!(summary.last_event, Some(ControlEvent::Toggle));
    assert_eq!(summary.outcome, Some(StepOutcome::Continue));
    assert_eq!(sink.frames.len(), 2);
    assert_eq!(sink.frames[0], (vec![1, 2], Some(0)));
    assert_eq!(sink.frames[1], (vec![1, 2], Some(0)));
    assert_eq!(driver.dataset().moves(), 1);

    // Tick 2: the clean verification pass completes the run.
    sink.frames.clear();
    let summary = driver.tick(&mut input, &mut sink);
    assert_eq!(summary.outcome, Some(StepOutcome::Completed));
    assert!(driver.control().sorted());
    assert_eq!(driver.control().running(), None);
    assert_eq!(sink.frames.len(), 1);

    // Tick 3: nothing is running, so no engine steps.
    let summary = driver.tick(&mut input, &mut sink);
    assert_eq!(summary.outcome, None);
    assert!(driver.control().sorted());
}

#[test]
fn test_toggle_resumes_where_it_paused() {
    let mut driver = driver_over(vec![3, 2, 1]);
    let mut input = ScriptedInput::new();
    let mut sink = RecordingSink::new();

    input.push(ControlEvent::Toggle);
    driver.tick(&mut input, &mut sink);
    assert_eq!(driver.dataset().values(), &[2, 3, 1]);
    assert_eq!(driver.dataset().moves(), 1);

    input.push(ControlEvent::Toggle);
    driver.tick(&mut input, &mut sink);
    assert_eq!(driver.control().running(), None);
    assert_eq!(driver.dataset().moves(), 1);

    // Resuming picks up mid-pass: the next comparison is (1, 2), not a
    // restarted pass from the front.
    input.push(ControlEvent::Toggle);
    driver.tick(&mut input, &mut sink);
    assert_eq!(driver.dataset().values(), &[2, 1, 3]);
    assert_eq!(driver.dataset().moves(), 2);
}

#[test]
fn test_select_resets_a_run_in_progress() {
    let mut driver = Driver::with_dataset(
        flat_config(4, 5),
        Dataset::from_values(vec![4, 3, 2, 1]),
    );
    let mut input = ScriptedInput::new();
    let mut sink = RecordingSink::new();

    input.push(ControlEvent::Toggle);
    driver.tick(&mut input, &mut sink);
    driver.tick(&mut input, &mut sink);
    assert!(driver.dataset().moves() > 0);
    assert!(driver.highlight().is_some());

    // Switching algorithms abandons the run and regenerates wholesale
    input.push(ControlEvent::Select(Algorithm::Quick));
    let summary = driver.tick(&mut input, &mut sink);
    assert_eq!(summary.last_event, Some(ControlEvent::Select(Algorithm::Quick)));
    assert_eq!(summary.outcome, None);
    assert_eq!(driver.control().active(), Algorithm::Quick);
    assert_eq!(driver.control().running(), None);
    assert_eq!(driver.dataset().values(), &[5, 5, 5, 5]);
    assert_eq!(driver.dataset().moves(), 0);
    assert_eq!(driver.highlight(), None);

    // The fresh selection runs to completion on the fresh data
    input.push(ControlEvent::Toggle);
    for _ in 0..50 {
        driver.tick(&mut input, &mut sink);
        if driver.control().sorted() {
            break;
        }
    }
    assert!(driver.control().sorted());
    assert!(driver.dataset().is_sorted());
}

#[test]
fn test_generate_stops_the_run_and_keeps_the_selection() {
    let mut driver = Driver::with_dataset(
        flat_config(3, 7),
        Dataset::from_values(vec![3, 1, 2]),
    );
    let mut input = ScriptedInput::new();
    let mut sink = RecordingSink::new();

    input.push(ControlEvent::Toggle);
    driver.tick(&mut input, &mut sink);
    assert_eq!(driver.dataset().moves(), 1);

    input.push(ControlEvent::Generate);
    let summary = driver.tick(&mut input, &mut sink);
    assert_eq!(summary.outcome, None);
    assert_eq!(driver.control().running(), None);
    assert_eq!(driver.control().active(), Algorithm::Bubble);
    assert!(!driver.control().sorted());
    assert_eq!(driver.dataset().values(), &[7, 7, 7]);
    assert_eq!(driver.dataset().moves(), 0);
    assert_eq!(driver.highlight(), None);
}

#[test]
fn test_quit_short_circuits_the_tick() {
    let mut driver = driver_over(vec![3, 1, 2]);
    let mut input = ScriptedInput::new();
    let mut sink = RecordingSink::new();

    // Even with a toggle queued ahead of it, quit suppresses the engine
    // step and the frame.
    input.push(ControlEvent::Toggle);
    input.push(ControlEvent::Quit);
    let summary = driver.tick(&mut input, &mut sink);

    assert!(summary.quit);
    assert_eq!(summary.last_event, Some(ControlEvent::Quit));
    assert_eq!(summary.outcome, None);
    assert!(driver.should_quit());
    assert!(sink.frames.is_empty());
    assert_eq!(driver.dataset().moves(), 0);
}

#[test]
fn test_highlight_tracks_the_last_touch_across_pauses() {
    let mut driver = driver_over(vec![2, 1]);
    let mut input = ScriptedInput::new();
    let mut sink = RecordingSink::new();

    input.push(ControlEvent::Toggle);
    driver.tick(&mut input, &mut sink);
    assert_eq!(driver.highlight(), Some(0));

    // Pause; the highlight persists and keeps being rendered
    input.push(ControlEvent::Toggle);
    sink.frames.clear();
    driver.tick(&mut input, &mut sink);
    assert_eq!(driver.highlight(), Some(0));
    assert_eq!(sink.frames.len(), 1);
    assert_eq!(sink.frames[0].1, Some(0));
}

#[test]
fn test_pending_input_aborts_the_burst_and_applies_next_tick() {
    let mut driver = Driver::new(flat_config(5, 3)).expect("valid config");
    let mut input = ScriptedInput::new();
    let mut sink = RecordingSink::new();

    input.push(ControlEvent::Select(Algorithm::Selection));
    driver.tick(&mut input, &mut sink);
    assert_eq!(driver.dataset().values(), &[3, 3, 3, 3, 3]);

    // A generate event lands while the minimum scan is in flight: the
    // engine bails at the next probe instead of finishing the scan.
    input.push(ControlEvent::Toggle);
    input.arrive_later(vec![ControlEvent::Generate]);
    let summary = driver.tick(&mut input, &mut sink);
    assert_eq!(summary.outcome, Some(StepOutcome::Aborted));
    assert_eq!(driver.dataset().moves(), 0);

    // The deferred event is drained and applied at the next tick
    let summary = driver.tick(&mut input, &mut sink);
    assert_eq!(summary.last_event, Some(ControlEvent::Generate));
    assert_eq!(summary.outcome, None);
    assert_eq!(driver.control().running(), None);
    assert_eq!(driver.dataset().moves(), 0);
}

#[test]
fn test_spurious_abort_resumes_the_burst() {
    let mut driver = Driver::new(flat_config(5, 9)).expect("valid config");
    let mut input = ScriptedInput::new();
    let mut sink = RecordingSink::new();

    input.push(ControlEvent::Select(Algorithm::Selection));
    driver.tick(&mut input, &mut sink);
    assert_eq!(driver.dataset().values(), &[9, 9, 9, 9, 9]);

    // The probe fires once with no event behind it. The scan aborts, the
    // drain finds nothing, and the next tick resumes the same scan.
    input.push(ControlEvent::Toggle);
    input.false_alarms = 1;
    let summary = driver.tick(&mut input, &mut sink);
    assert_eq!(summary.outcome, Some(StepOutcome::Aborted));
    assert_eq!(driver.control().running(), Some(Algorithm::Selection));
    assert_eq!(driver.dataset().moves(), 0);

    let summary = driver.tick(&mut input, &mut sink);
    assert_eq!(summary.outcome, Some(StepOutcome::Continue));

    for _ in 0..20 {
        if driver.control().sorted() {
            break;
        }
        driver.tick(&mut input, &mut sink);
    }
    assert!(driver.control().sorted());
    assert!(driver.dataset().is_sorted());
}

#[test]
fn test_toggle_after_completion_stays_sorted() {
    let mut driver = driver_over(vec![2, 1]);
    let mut input = ScriptedInput::new();
    let mut sink = RecordingSink::new();

    input.push(ControlEvent::Toggle);
    driver.tick(&mut input, &mut sink);
    driver.tick(&mut input, &mut sink);
    assert!(driver.control().sorted());
    let moves = driver.dataset().moves();

    // Restarting a finished engine reports completion again immediately
    input.push(ControlEvent::Toggle);
    let summary = driver.tick(&mut input, &mut sink);
    assert_eq!(summary.outcome, Some(StepOutcome::Completed));
    assert!(driver.control().sorted());
    assert_eq!(driver.control().running(), None);
    assert_eq!(driver.dataset().moves(), moves);
}

#[test]
fn test_select_regenerates_within_the_configured_range() {
    let config = Config {
        count: 8,
        lower: 10,
        upper: 20,
        frame_rate: 60,
    };
    let mut driver = Driver::new(config).expect("valid config");
    let mut input = ScriptedInput::new();
    let mut sink = RecordingSink::new();

    input.push(ControlEvent::Select(Algorithm::Radix));
    driver.tick(&mut input, &mut sink);

    assert_eq!(driver.control().active(), Algorithm::Radix);
    assert_eq!(driver.dataset().len(), 8);
    assert!(driver.dataset().values().iter().all(|&v| (10..=20).contains(&v)));
    assert_eq!(driver.dataset().moves(), 0);
}

#[test]
fn test_every_algorithm_sorts_through_the_driver() {
    let config = Config {
        count: 30,
        lower: 1,
        upper: 100,
        frame_rate: 60,
    };
    let mut driver = Driver::new(config).expect("valid config");
    let mut input = ScriptedInput::new();
    let mut sink = RecordingSink::new();

    for algorithm in Algorithm::ALL {
        input.push(ControlEvent::Select(algorithm));
        driver.tick(&mut input, &mut sink);
        input.push(ControlEvent::Toggle);

        let mut ticks = 0;
        while !driver.control().sorted() {
            driver.tick(&mut input, &mut sink);
            ticks += 1;
            assert!(
                ticks < 20_000,
                "{} did not finish within the tick budget",
                algorithm.label()
            );
        }
        assert!(
            driver.dataset().is_sorted(),
            "{} reported completion on unsorted data",
            algorithm.label()
        );
        assert_eq!(driver.dataset().len(), 30);
    }
}
