use crate::counter::PressCounter;
use crate::logic::milestones_reached;
use crate::traits::{Board, BoardError, EventSink};
use crate::types::{CountPolicy, CounterEvent, Led, Player, Switch};

use super::Program;

pub const BOUNCE_SWITCH: Switch = Switch::Sw4;
pub const CLEAR_SWITCH: Switch = Switch::Sw5;
/// Flankenzahl, ab der D4, D5, D6 leuchten
pub const MILESTONES: [u8; 3] = [15, 30, 45];
const MILESTONE_LEDS: [Led; 3] = [Led::D4, Led::D5, Led::D6];

/// Prell-Messung: zählt jede beobachtete Druck-Flanke ohne Entprellung
///
/// Prellende Kontakte erzeugen pro Druck mehrere Flanken, der Zähler
/// läuft dann schneller als die tatsächlichen Tastendrücke.
///
/// Gezählt wird sättigend (`OncePerPress`): bei 255 bleibt der Zähler stehen
/// statt überzulaufen. Für die Marken 15, 30 und 45 ändert das nichts.
pub struct BounceMeterProgram {
    counter: PressCounter,
    reached: usize,
}

impl BounceMeterProgram {
    pub fn new() -> Self {
        Self {
            counter: PressCounter::new(CountPolicy::OncePerPress),
            reached: 0,
        }
    }

    pub fn count(&self) -> u8 {
        self.counter.count()
    }
}

impl Default for BounceMeterProgram {
    fn default() -> Self {
        Self::new()
    }
}

impl Program for BounceMeterProgram {
    fn update<B: Board, S: EventSink>(
        &mut self,
        board: &mut B,
        now_ms: u32,
        events: &mut S,
    ) -> Result<(), BoardError> {
        let pressed = board.is_pressed(BOUNCE_SWITCH)?;
        let sample = self.counter.sample(pressed, now_ms);
        board.write_led(Led::D3, sample.activity)?;
        if sample.counted {
            events.emit(CounterEvent::Counted {
                player: Player::One,
                count: self.counter.count(),
            });
            let reached = milestones_reached(self.counter.count(), &MILESTONES);
            if reached > self.reached {
                for &led in &MILESTONE_LEDS[self.reached..reached] {
                    board.write_led(led, true)?;
                }
                self.reached = reached;
                events.emit(CounterEvent::Milestone {
                    level: reached as u8,
                });
            }
        }

        if board.is_pressed(CLEAR_SWITCH)? {
            self.counter.reset();
            self.reached = 0;
            for led in Led::ALL {
                board.write_led(led, false)?;
            }
        }
        Ok(())
    }
}
