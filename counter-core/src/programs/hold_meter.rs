use crate::logic::hold_level;
use crate::traits::{Board, BoardError, EventSink};
use crate::types::{CounterEvent, Led, Switch};

use super::Program;

pub const HOLD_SWITCH: Switch = Switch::Sw4;
pub const CLEAR_SWITCH: Switch = Switch::Sw5;
/// Dauer einer Haltestufe
pub const HOLD_STEP_MS: u32 = 1000;
/// LEDs für Stufe 1, 2, 3
const LEVEL_LEDS: [Led; 3] = [Led::D4, Led::D5, Led::D6];

/// Multifunktions-Taster: Druck und Halten lösen verschiedene Aktionen aus
///
/// D3 leuchtet solange SW4 gedrückt ist. Nach 1 s, 2 s und 3 s Halten
/// gehen D4, D5 und D6 an und bleiben an, bis SW5 alles löscht.
/// Ein Löschen bei gehaltenem SW4 verbraucht den laufenden Druck:
/// neue Stufen gibt es erst nach Loslassen und erneutem Halten.
///
/// Die Haltezeit wird über den Zeitstempel des Druckbeginns gemessen,
/// die Schleife blockiert dabei nie länger als ein Poll-Intervall.
pub struct HoldMeterProgram {
    press_start_ms: Option<u32>,
    level: u8,
    /// SW5 hat gelöscht, während SW4 noch gehalten wurde
    cleared_while_held: bool,
}

impl HoldMeterProgram {
    pub fn new() -> Self {
        Self {
            press_start_ms: None,
            level: 0,
            cleared_while_held: false,
        }
    }

    /// Höchste bisher erreichte Stufe (0..=3)
    pub fn level(&self) -> u8 {
        self.level
    }
}

impl Default for HoldMeterProgram {
    fn default() -> Self {
        Self::new()
    }
}

impl Program for HoldMeterProgram {
    fn update<B: Board, S: EventSink>(
        &mut self,
        board: &mut B,
        now_ms: u32,
        events: &mut S,
    ) -> Result<(), BoardError> {
        let pressed = board.is_pressed(HOLD_SWITCH)?;
        board.write_led(Led::D3, pressed)?;

        if pressed && !self.cleared_while_held {
            let start = *self.press_start_ms.get_or_insert(now_ms);
            let reached = hold_level(
                now_ms.wrapping_sub(start),
                HOLD_STEP_MS,
                LEVEL_LEDS.len() as u8,
            );
            if reached > self.level {
                for &led in &LEVEL_LEDS[usize::from(self.level)..usize::from(reached)] {
                    board.write_led(led, true)?;
                }
                self.level = reached;
                events.emit(CounterEvent::HoldLevel { level: reached });
            }
        } else if !pressed {
            self.press_start_ms = None;
            self.cleared_while_held = false;
        }

        if board.is_pressed(CLEAR_SWITCH)? {
            self.level = 0;
            self.press_start_ms = None;
            self.cleared_while_held = pressed;
            for led in Led::ALL {
                board.write_led(led, false)?;
            }
        }
        Ok(())
    }
}
