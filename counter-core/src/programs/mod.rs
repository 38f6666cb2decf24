//! Board-Programme
//!
//! Jedes Programm erledigt pro Schleifendurchlauf das Lesen der Taster,
//! die Zählerlogik und das Schalten der LEDs. Warten und Escape-Taster
//! übernimmt die `PollLoop`.

mod bounce_meter;
mod counter;
mod hold_meter;
mod rapid_clicker;
mod toggle;

pub use bounce_meter::BounceMeterProgram;
pub use counter::CounterProgram;
pub use hold_meter::HoldMeterProgram;
pub use rapid_clicker::RapidClickerProgram;
pub use toggle::ToggleProgram;

use crate::traits::{Board, BoardError, EventSink};
use crate::types::{CounterConfig, ProgramKind};

/// Ein Programm, das von der `PollLoop` zyklisch aufgerufen wird
pub trait Program {
    /// Ein Durchlauf: Taster abtasten, Zustand aktualisieren, LEDs schreiben
    ///
    /// # Fehlerbehandlung
    /// Ein Board-Fehler bricht nur den Rest dieses Durchlaufs ab.
    fn update<B: Board, S: EventSink>(
        &mut self,
        board: &mut B,
        now_ms: u32,
        events: &mut S,
    ) -> Result<(), BoardError>;
}

/// Auswahl eines Programms zur Laufzeit (Embassy Tasks dürfen nicht generisch sein)
pub enum AnyProgram {
    Counter(CounterProgram),
    RapidClicker(RapidClickerProgram),
    Toggle(ToggleProgram),
    HoldMeter(HoldMeterProgram),
    BounceMeter(BounceMeterProgram),
}

impl AnyProgram {
    pub fn new(kind: ProgramKind, config: &CounterConfig) -> Self {
        match kind {
            ProgramKind::Counter => Self::Counter(CounterProgram::new(config)),
            ProgramKind::RapidClicker => Self::RapidClicker(RapidClickerProgram::new(config)),
            ProgramKind::Toggle => Self::Toggle(ToggleProgram::new()),
            ProgramKind::HoldMeter => Self::HoldMeter(HoldMeterProgram::new()),
            ProgramKind::BounceMeter => Self::BounceMeter(BounceMeterProgram::new()),
        }
    }

    pub fn kind(&self) -> ProgramKind {
        match self {
            Self::Counter(_) => ProgramKind::Counter,
            Self::RapidClicker(_) => ProgramKind::RapidClicker,
            Self::Toggle(_) => ProgramKind::Toggle,
            Self::HoldMeter(_) => ProgramKind::HoldMeter,
            Self::BounceMeter(_) => ProgramKind::BounceMeter,
        }
    }
}

impl Program for AnyProgram {
    fn update<B: Board, S: EventSink>(
        &mut self,
        board: &mut B,
        now_ms: u32,
        events: &mut S,
    ) -> Result<(), BoardError> {
        match self {
            Self::Counter(p) => p.update(board, now_ms, events),
            Self::RapidClicker(p) => p.update(board, now_ms, events),
            Self::Toggle(p) => p.update(board, now_ms, events),
            Self::HoldMeter(p) => p.update(board, now_ms, events),
            Self::BounceMeter(p) => p.update(board, now_ms, events),
        }
    }
}
