// GPIO Board und Reset
//
// Implementiert die Board-Traits aus counter-core mit esp-hal GPIOs.

use counter_core::{BoardError, Led, LedOutput, ResetControl, Switch, SwitchInput};
use esp_hal::gpio::{Input, Level, Output};

/// Real Hardware Board
///
/// Fünf Taster als GPIO Inputs mit Pull-Up (active-low),
/// vier LEDs als GPIO Outputs (active-high).
pub struct GpioBoard<'a> {
    switches: [Input<'a>; 5],
    leds: [Output<'a>; 4],
}

impl<'a> GpioBoard<'a> {
    /// Erstellt ein GpioBoard
    ///
    /// # Parameter
    /// - `switches`: Inputs in der Reihenfolge `Switch::ALL` (SW1..SW5)
    /// - `leds`: Outputs in der Reihenfolge `Led::ALL` (D3..D6)
    pub fn new(switches: [Input<'a>; 5], leds: [Output<'a>; 4]) -> Self {
        Self { switches, leds }
    }
}

impl SwitchInput for GpioBoard<'_> {
    fn read_switch(&mut self, switch: Switch) -> Result<bool, BoardError> {
        Ok(self.switches[switch.index()].is_high())
    }
}

impl LedOutput for GpioBoard<'_> {
    fn write_led(&mut self, led: Led, on: bool) -> Result<(), BoardError> {
        let level = if on { Level::High } else { Level::Low };
        self.leds[led.index()].set_level(level);
        Ok(())
    }
}

/// Reset über den Software-Reset des Chips
///
/// Der Chip startet neu und durchläuft dabei den ROM-Bootloader.
pub struct SoftwareReset;

impl ResetControl for SoftwareReset {
    fn trigger_reset(&mut self) -> ! {
        esp_hal::system::software_reset()
    }
}
