use crate::counter::{Edge, EdgeDetector};
use crate::traits::{Board, BoardError, EventSink};
use crate::types::{CounterEvent, Led, Switch};

use super::Program;

pub const TOGGLE_SWITCH: Switch = Switch::Sw4;

/// Push-on/Push-off: jeder neue Druck auf SW4 invertiert alle vier LEDs
pub struct ToggleProgram {
    edge: EdgeDetector,
    leds: [bool; 4],
}

impl ToggleProgram {
    pub fn new() -> Self {
        Self {
            edge: EdgeDetector::new(),
            leds: [false; 4],
        }
    }

    pub fn is_lit(&self, led: Led) -> bool {
        self.leds[led.index()]
    }
}

impl Default for ToggleProgram {
    fn default() -> Self {
        Self::new()
    }
}

impl Program for ToggleProgram {
    fn update<B: Board, S: EventSink>(
        &mut self,
        board: &mut B,
        _now_ms: u32,
        events: &mut S,
    ) -> Result<(), BoardError> {
        let pressed = board.is_pressed(TOGGLE_SWITCH)?;
        if self.edge.update(pressed) != Some(Edge::Pressed) {
            return Ok(());
        }

        for led in Led::ALL {
            let lit = &mut self.leds[led.index()];
            *lit = !*lit;
            board.write_led(led, *lit)?;
        }
        events.emit(CounterEvent::Toggled {
            lit: self.leds[Led::D3.index()],
        });
        Ok(())
    }
}
