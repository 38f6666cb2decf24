//! Zustandsautomaten für Taster und Zähler

use crate::logic::{next_count, threshold_led};
use crate::types::{CountPolicy, CounterConfig, ThresholdPolicy};

/// Zustand eines Tasters aus Sicht der Flankenerkennung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    #[default]
    Released,
    Pressed,
}

/// Erkannte Flanke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Released → Pressed
    Pressed,
    /// Pressed → Released
    Released,
}

/// Flankenerkennung pro Taster
///
/// Zwei Zustände, Startzustand `Released`, kein Endzustand.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeDetector {
    state: ButtonState,
}

impl EdgeDetector {
    pub const fn new() -> Self {
        Self {
            state: ButtonState::Released,
        }
    }

    /// Neuen Abtastwert verarbeiten. Liefert nur bei Zustandswechsel eine Flanke.
    pub fn update(&mut self, pressed: bool) -> Option<Edge> {
        match (self.state, pressed) {
            (ButtonState::Released, true) => {
                self.state = ButtonState::Pressed;
                Some(Edge::Pressed)
            }
            (ButtonState::Pressed, false) => {
                self.state = ButtonState::Released;
                Some(Edge::Released)
            }
            _ => None,
        }
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn is_pressed(&self) -> bool {
        self.state == ButtonState::Pressed
    }
}

/// Ergebnis einer Abtastung im `PressCounter`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// Zustand der Aktivitäts-LED, wird in jedem Durchlauf geschrieben.
    /// Ein fehlgeschlagener Schreibzugriff heilt so im nächsten Durchlauf.
    pub activity: bool,
    /// Wurde in diesem Durchlauf gezählt?
    pub counted: bool,
}

/// Tastendruck-Zähler: `pressCount` + Pressed-Flag
#[derive(Debug, Clone, Copy)]
pub struct PressCounter {
    count: u8,
    edge: EdgeDetector,
    policy: CountPolicy,
    debounce_ms: u32,
    last_counted_ms: Option<u32>,
}

impl PressCounter {
    pub const fn new(policy: CountPolicy) -> Self {
        Self {
            count: 0,
            edge: EdgeDetector::new(),
            policy,
            debounce_ms: 0,
            last_counted_ms: None,
        }
    }

    pub const fn from_config(config: &CounterConfig) -> Self {
        Self::new(config.count_policy).with_debounce_ms(config.debounce_ms)
    }

    /// Sperrzeit: Druck-Flanken kürzer als `debounce_ms` nach dem letzten
    /// gezählten Druck werden nicht gezählt (nur bei `OncePerPress`).
    pub const fn with_debounce_ms(mut self, debounce_ms: u32) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    /// Einen Abtastwert des Tasters verarbeiten
    pub fn sample(&mut self, pressed: bool, now_ms: u32) -> Sample {
        let edge = self.edge.update(pressed);

        match self.policy {
            CountPolicy::EveryPoll => {
                // Zählt jeden Durchlauf, solange gehalten wird
                if pressed {
                    self.count = next_count(self.count, self.policy);
                }
                Sample {
                    activity: pressed,
                    counted: pressed,
                }
            }
            CountPolicy::OncePerPress => {
                // Gezählt wird nur an der Druck-Flanke, die LED folgt dem Taster
                let counted = edge == Some(Edge::Pressed) && !self.locked_out(now_ms);
                if counted {
                    self.count = next_count(self.count, self.policy);
                    self.last_counted_ms = Some(now_ms);
                }
                Sample {
                    activity: pressed,
                    counted,
                }
            }
        }
    }

    fn locked_out(&self, now_ms: u32) -> bool {
        match self.last_counted_ms {
            Some(last) if self.debounce_ms > 0 => now_ms.wrapping_sub(last) < self.debounce_ms,
            _ => false,
        }
    }

    /// Zähler löschen. Das Pressed-Flag bleibt erhalten, ein gehaltener
    /// Taster zählt also erst nach dem Loslassen wieder.
    pub fn reset(&mut self) {
        self.count = 0;
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn is_pressed(&self) -> bool {
        self.edge.is_pressed()
    }

    pub fn policy(&self) -> CountPolicy {
        self.policy
    }
}

/// Schwellwert-LED nach `ThresholdPolicy`
#[derive(Debug, Clone, Copy)]
pub struct ThresholdIndicator {
    max_count: u8,
    policy: ThresholdPolicy,
    lit: bool,
}

impl ThresholdIndicator {
    pub const fn new(max_count: u8, policy: ThresholdPolicy) -> Self {
        Self {
            max_count,
            policy,
            lit: false,
        }
    }

    pub const fn from_config(config: &CounterConfig) -> Self {
        Self::new(config.max_count, config.threshold_policy)
    }

    /// Neu bewerten. Gibt den neuen LED-Zustand zurück.
    pub fn evaluate(&mut self, count: u8) -> bool {
        self.lit = threshold_led(self.lit, count, self.max_count, self.policy);
        self.lit
    }

    pub fn clear(&mut self) {
        self.lit = false;
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }

    pub fn max_count(&self) -> u8 {
        self.max_count
    }
}
