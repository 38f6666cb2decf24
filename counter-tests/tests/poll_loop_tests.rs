//! Integration Tests für die Poll-Schleife
//!
//! Timing, Escape-Taster, Reset und Fehlerbehandlung

mod common;

use common::{EventLog, MockBoard, MockReset, MockTimer, Rig};
use counter_core::{
    BoardError, CounterConfig, CounterProgram, Led, PollLoop, StepOutcome, Switch,
};

fn default_rig() -> Rig<CounterProgram> {
    Rig::new(CounterProgram::new(&CounterConfig::default()), 10)
}

// ============================================================================
// Tests: Timing
// ============================================================================

#[test]
fn test_each_step_waits_one_interval() {
    let mut rig = default_rig();
    rig.steps(7);
    assert_eq!(rig.timer.delays, vec![10; 7]);
    assert_eq!(rig.timer.now_ms, 70);
    assert_eq!(rig.poll.iterations(), 7);
}

#[test]
fn test_custom_interval() {
    let config = CounterConfig::default().with_poll_interval_ms(25);
    let mut rig = Rig::new(CounterProgram::new(&config), config.poll_interval_ms);
    rig.steps(2);
    assert_eq!(rig.poll.interval_ms(), 25);
    assert_eq!(rig.timer.now_ms, 50);
}

// ============================================================================
// Tests: Escape-Taster
// ============================================================================

#[test]
fn test_escape_switch_requests_bootloader() {
    let mut rig = default_rig();
    assert_eq!(rig.step(), StepOutcome::Continue);

    rig.board.press(Switch::Sw1);
    assert_eq!(rig.step(), StepOutcome::EnterBootloader);
}

#[test]
fn test_escape_checked_after_delay() {
    let mut rig = default_rig();
    rig.board.press(Switch::Sw1);
    rig.board.press(Switch::Sw2);

    assert_eq!(rig.step(), StepOutcome::EnterBootloader);
    // Durchlauf wurde vorher komplett abgearbeitet
    assert_eq!(rig.poll.program().count(), 1);
    assert_eq!(rig.timer.delays, vec![10]);
}

#[test]
fn test_custom_escape_switch() {
    let program = CounterProgram::new(&CounterConfig::default());
    let mut poll = PollLoop::new(program, 10).with_escape(Switch::Sw5);
    let mut board = MockBoard::new();
    let mut timer = MockTimer::new();

    board.press(Switch::Sw1);
    assert_eq!(poll.step(&mut board, &mut timer, &mut ()), StepOutcome::Continue);

    board.press(Switch::Sw5);
    assert_eq!(
        poll.step(&mut board, &mut timer, &mut ()),
        StepOutcome::EnterBootloader
    );
}

#[test]
#[should_panic(expected = "reset triggered")]
fn test_run_triggers_reset_on_escape() {
    let program = CounterProgram::new(&CounterConfig::default());
    let poll = PollLoop::new(program, 10);
    let mut board = MockBoard::new();
    let mut timer = MockTimer::new();
    let mut log = EventLog::default();

    board.press(Switch::Sw1);
    poll.run(&mut board, &mut timer, &mut MockReset, &mut log);
}

// ============================================================================
// Tests: Fehlerbehandlung
// ============================================================================

#[test]
fn test_read_failure_is_recorded_and_loop_continues() {
    let mut rig = default_rig();
    rig.board.press(Switch::Sw2);
    rig.board.fail_next_read = true;

    assert_eq!(rig.step(), StepOutcome::Continue);
    assert_eq!(rig.poll.take_fault(), Some(BoardError::ReadFailed));
    assert_eq!(rig.poll.take_fault(), None);
    assert_eq!(rig.poll.program().count(), 0);

    // Nächster Durchlauf liest wieder normal
    rig.step();
    assert_eq!(rig.poll.program().count(), 1);
    assert_eq!(rig.poll.fault_count(), 1);
}

#[test]
fn test_write_failure_is_recorded() {
    let mut rig = default_rig();
    rig.board.press(Switch::Sw2);
    rig.board.fail_next_write = true;

    rig.step();
    assert_eq!(rig.poll.take_fault(), Some(BoardError::WriteFailed));
    // Zählen passiert vor dem Schreiben der LED
    assert_eq!(rig.poll.program().count(), 1);
    assert!(!rig.board.led(Led::D3));

    // Taster bleibt gehalten: LED holt den Zustand im nächsten Durchlauf nach
    rig.steps(20);
    assert_eq!(rig.poll.take_fault(), None);
    assert!(rig.board.led(Led::D3));
    assert_eq!(rig.poll.program().count(), 1);

    rig.board.release(Switch::Sw2);
    rig.step();
    assert_eq!(rig.poll.take_fault(), None);
    assert!(!rig.board.led(Led::D3));
}

#[test]
fn test_escape_read_failure_counts_as_not_pressed() {
    let mut poll = PollLoop::new(CounterProgram::new(&CounterConfig::default()), 10);
    let mut board = MockBoard::new();
    board.press(Switch::Sw1);
    board.fail_next_read = true;

    assert!(!poll.escape_requested(&mut board));
    assert_eq!(poll.take_fault(), Some(BoardError::ReadFailed));
    assert!(poll.escape_requested(&mut board));
}

#[test]
fn test_reset_event_emitted_once_while_held() {
    let mut rig = default_rig();
    rig.click(Switch::Sw2);
    rig.hold_for(Switch::Sw3, 300);
    rig.step();

    let resets = rig
        .log
        .events
        .iter()
        .filter(|e| **e == counter_core::CounterEvent::Reset)
        .count();
    assert_eq!(resets, 1);
}
