//! Hardware Abstraction Traits
//!
//! Diese Traits definieren die Schnittstellen zum Board-Support
//! ohne konkrete Implementierung.

use crate::types::{CounterEvent, Led, Switch};

/// Fehler-Typ für Board-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardError {
    ReadFailed,
    WriteFailed,
}

/// Trait für das Lesen der Taster
///
/// # Implementierungen
/// - **Production:** GpioBoard (ESP32 GPIO Inputs mit Pull-Up)
/// - **Testing:** MockBoard (in-memory Mock)
pub trait SwitchInput {
    /// Liest den physikalischen Pegel eines Tasters
    ///
    /// Active-low: `false` (Pegel 0) bedeutet gedrückt.
    fn read_switch(&mut self, switch: Switch) -> Result<bool, BoardError>;

    /// Ist der Taster gerade gedrückt?
    fn is_pressed(&mut self, switch: Switch) -> Result<bool, BoardError> {
        Ok(!self.read_switch(switch)?)
    }
}

/// Trait für das Schalten der LEDs
pub trait LedOutput {
    /// Schaltet eine LED an (`true`) oder aus (`false`)
    ///
    /// # Fehlerbehandlung
    /// Gibt `BoardError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write_led(&mut self, led: Led, on: bool) -> Result<(), BoardError>;
}

/// Komplettes Board: Taster + LEDs
pub trait Board: SwitchInput + LedOutput {}

impl<T: SwitchInput + LedOutput> Board for T {}

/// Zeitbasis der Poll-Schleife
pub trait PollTimer {
    /// Monotone Zeit in Millisekunden (läuft modulo 2^32 über)
    fn now_ms(&self) -> u32;

    /// Blockierendes Warten, nicht abbrechbar
    fn delay_ms(&mut self, ms: u32);
}

/// Sprung in Reset/Bootloader
pub trait ResetControl {
    /// Kehrt nie zurück
    fn trigger_reset(&mut self) -> !;
}

/// Empfänger für Programm-Events
pub trait EventSink {
    fn emit(&mut self, event: CounterEvent);
}

/// Verwirft alle Events
impl EventSink for () {
    fn emit(&mut self, _event: CounterEvent) {}
}
