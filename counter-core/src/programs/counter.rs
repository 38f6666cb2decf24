use crate::counter::{Edge, EdgeDetector, PressCounter, ThresholdIndicator};
use crate::traits::{Board, BoardError, EventSink};
use crate::types::{CounterConfig, CounterEvent, Led, Player, Switch};

use super::Program;

/// Zähl-Taster
pub const COUNT_SWITCH: Switch = Switch::Sw2;
/// Reset-Taster
pub const RESET_SWITCH: Switch = Switch::Sw3;
/// Leuchtet solange der Zähl-Taster gedrückt ist
pub const ACTIVITY_LED: Led = Led::D3;
/// Leuchtet ab `max_count`
pub const THRESHOLD_LED: Led = Led::D4;

/// Tastendruck-Zähler mit Schwellwert-LED und Reset
///
/// Reihenfolge pro Durchlauf:
/// 1. SW2 abtasten, Aktivitäts-LED D3 schalten
/// 2. Qualifizierten Druck zählen
/// 3. Schwellwert-LED D4 bewerten
/// 4. SW3 gedrückt: Zähler auf 0, D4 aus
pub struct CounterProgram {
    counter: PressCounter,
    threshold: ThresholdIndicator,
    reset_edge: EdgeDetector,
}

impl CounterProgram {
    pub fn new(config: &CounterConfig) -> Self {
        Self {
            counter: PressCounter::from_config(config),
            threshold: ThresholdIndicator::from_config(config),
            reset_edge: EdgeDetector::new(),
        }
    }

    pub fn count(&self) -> u8 {
        self.counter.count()
    }

    pub fn threshold_lit(&self) -> bool {
        self.threshold.is_lit()
    }
}

impl Program for CounterProgram {
    fn update<B: Board, S: EventSink>(
        &mut self,
        board: &mut B,
        now_ms: u32,
        events: &mut S,
    ) -> Result<(), BoardError> {
        let pressed = board.is_pressed(COUNT_SWITCH)?;
        let sample = self.counter.sample(pressed, now_ms);
        board.write_led(ACTIVITY_LED, sample.activity)?;
        if sample.counted {
            events.emit(CounterEvent::Counted {
                player: Player::One,
                count: self.counter.count(),
            });
        }

        let was_lit = self.threshold.is_lit();
        let lit = self.threshold.evaluate(self.counter.count());
        board.write_led(THRESHOLD_LED, lit)?;
        if lit && !was_lit {
            events.emit(CounterEvent::ThresholdReached {
                player: Player::One,
            });
        }

        let reset = board.is_pressed(RESET_SWITCH)?;
        let reset_edge = self.reset_edge.update(reset);
        if reset {
            self.counter.reset();
            self.threshold.clear();
            board.write_led(THRESHOLD_LED, false)?;
            if reset_edge == Some(Edge::Pressed) {
                events.emit(CounterEvent::Reset);
            }
        }

        Ok(())
    }
}
