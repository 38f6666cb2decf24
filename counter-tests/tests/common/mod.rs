//! Gemeinsame Mocks für die Host-Tests
#![allow(dead_code)]

use counter_core::{
    BoardError, CounterEvent, EventSink, Led, LedOutput, PollLoop, PollTimer, Program,
    ResetControl, StepOutcome, Switch, SwitchInput,
};

// ============================================================================
// Mock Board
// ============================================================================

/// In-memory Board: Taster werden per `press`/`release` gesetzt,
/// LED-Zustände und Schreibzugriffe werden mitprotokolliert.
#[derive(Default)]
pub struct MockBoard {
    pub held: [bool; 5],
    pub leds: [bool; 4],
    pub read_count: usize,
    pub write_count: usize,
    pub fail_next_read: bool,
    pub fail_next_write: bool,
}

impl MockBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, switch: Switch) {
        self.held[switch.index()] = true;
    }

    pub fn release(&mut self, switch: Switch) {
        self.held[switch.index()] = false;
    }

    pub fn led(&self, led: Led) -> bool {
        self.leds[led.index()]
    }
}

impl SwitchInput for MockBoard {
    fn read_switch(&mut self, switch: Switch) -> Result<bool, BoardError> {
        if self.fail_next_read {
            self.fail_next_read = false;
            return Err(BoardError::ReadFailed);
        }
        self.read_count += 1;
        // Active-low: gedrückt = Pegel 0
        Ok(!self.held[switch.index()])
    }
}

impl LedOutput for MockBoard {
    fn write_led(&mut self, led: Led, on: bool) -> Result<(), BoardError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(BoardError::WriteFailed);
        }
        self.leds[led.index()] = on;
        self.write_count += 1;
        Ok(())
    }
}

// ============================================================================
// Mock Timer / Reset / Event Log
// ============================================================================

/// Simulierte Zeit: `delay_ms` schiebt die Uhr weiter
#[derive(Default)]
pub struct MockTimer {
    pub now_ms: u32,
    pub delays: Vec<u32>,
}

impl MockTimer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PollTimer for MockTimer {
    fn now_ms(&self) -> u32 {
        self.now_ms
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delays.push(ms);
        self.now_ms = self.now_ms.wrapping_add(ms);
    }
}

pub struct MockReset;

impl ResetControl for MockReset {
    fn trigger_reset(&mut self) -> ! {
        panic!("reset triggered");
    }
}

#[derive(Default)]
pub struct EventLog {
    pub events: Vec<CounterEvent>,
}

impl EventSink for EventLog {
    fn emit(&mut self, event: CounterEvent) {
        self.events.push(event);
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Alles, was ein Test für die Schleife braucht
pub struct Rig<P> {
    pub poll: PollLoop<P>,
    pub board: MockBoard,
    pub timer: MockTimer,
    pub log: EventLog,
}

impl<P: Program> Rig<P> {
    pub fn new(program: P, interval_ms: u32) -> Self {
        Self {
            poll: PollLoop::new(program, interval_ms),
            board: MockBoard::new(),
            timer: MockTimer::new(),
            log: EventLog::default(),
        }
    }

    pub fn step(&mut self) -> StepOutcome {
        self.poll.step(&mut self.board, &mut self.timer, &mut self.log)
    }

    pub fn steps(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Taster für einen Durchlauf drücken, dann für einen Durchlauf loslassen
    pub fn click(&mut self, switch: Switch) {
        self.board.press(switch);
        self.step();
        self.board.release(switch);
        self.step();
    }

    /// Taster halten, bis `duration_ms` simulierte Zeit vergangen ist
    pub fn hold_for(&mut self, switch: Switch, duration_ms: u32) {
        let start = self.timer.now_ms;
        self.board.press(switch);
        while self.timer.now_ms.wrapping_sub(start) < duration_ms {
            self.step();
        }
        self.board.release(switch);
    }
}
