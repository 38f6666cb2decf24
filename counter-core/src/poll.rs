//! Poll-Schleife
//!
//! Einziger Kontrollfluss des Boards: abtasten, zählen, LEDs schalten,
//! warten, Escape-Taster prüfen. Strikt sequentiell, ein Thread.

use crate::programs::Program;
use crate::traits::{Board, BoardError, EventSink, PollTimer, ResetControl};
use crate::types::{StepOutcome, Switch};

/// Standard Escape-Taster
pub const ESCAPE_SWITCH: Switch = Switch::Sw1;

/// Kontext der Poll-Schleife
///
/// Besitzt den kompletten Programmzustand. Wird einmal beim Start angelegt
/// und per `&mut` durch jeden Durchlauf gereicht.
pub struct PollLoop<P> {
    program: P,
    escape: Switch,
    interval_ms: u32,
    last_fault: Option<BoardError>,
    fault_count: u32,
    iterations: u32,
}

impl<P: Program> PollLoop<P> {
    pub fn new(program: P, interval_ms: u32) -> Self {
        Self {
            program,
            escape: ESCAPE_SWITCH,
            interval_ms,
            last_fault: None,
            fault_count: 0,
            iterations: 0,
        }
    }

    pub fn with_escape(mut self, escape: Switch) -> Self {
        self.escape = escape;
        self
    }

    /// Schritte 1-4: Taster abtasten, Zähler aktualisieren, LEDs schalten
    ///
    /// Board-Fehler werden gemerkt und nicht weitergereicht.
    pub fn sample<B: Board, S: EventSink>(
        &mut self,
        board: &mut B,
        now_ms: u32,
        events: &mut S,
    ) {
        self.iterations = self.iterations.wrapping_add(1);
        if let Err(e) = self.program.update(board, now_ms, events) {
            self.record_fault(e);
        }
    }

    /// Schritt 6: Escape-Taster gedrückt?
    ///
    /// Ein Lesefehler zählt als "nicht gedrückt".
    pub fn escape_requested<B: Board>(&mut self, board: &mut B) -> bool {
        match board.is_pressed(self.escape) {
            Ok(pressed) => pressed,
            Err(e) => {
                self.record_fault(e);
                false
            }
        }
    }

    /// Ein kompletter Durchlauf (Schritte 1-6) mit blockierendem Warten
    pub fn step<B: Board, T: PollTimer, S: EventSink>(
        &mut self,
        board: &mut B,
        timer: &mut T,
        events: &mut S,
    ) -> StepOutcome {
        self.sample(board, timer.now_ms(), events);
        timer.delay_ms(self.interval_ms);
        if self.escape_requested(board) {
            StepOutcome::EnterBootloader
        } else {
            StepOutcome::Continue
        }
    }

    /// Endlosschleife. Endet nur über `ResetControl::trigger_reset`.
    pub fn run<B: Board, T: PollTimer, R: ResetControl, S: EventSink>(
        mut self,
        board: &mut B,
        timer: &mut T,
        reset: &mut R,
        events: &mut S,
    ) -> ! {
        loop {
            if self.step(board, timer, events) == StepOutcome::EnterBootloader {
                reset.trigger_reset();
            }
        }
    }

    fn record_fault(&mut self, fault: BoardError) {
        self.last_fault = Some(fault);
        self.fault_count = self.fault_count.wrapping_add(1);
    }

    /// Letzten Board-Fehler abholen (und löschen)
    pub fn take_fault(&mut self) -> Option<BoardError> {
        self.last_fault.take()
    }

    pub fn fault_count(&self) -> u32 {
        self.fault_count
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn program(&self) -> &P {
        &self.program
    }
}
