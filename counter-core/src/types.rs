//! Core Types für den Tastenzähler
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Taster auf dem Board (active-low verdrahtet)
///
/// Die Rollen sind fest vom Programm vergeben, nicht konfigurierbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Switch {
    /// Escape-Taster: springt in Reset/Bootloader
    Sw1,
    Sw2,
    Sw3,
    Sw4,
    Sw5,
}

impl Switch {
    pub const ALL: [Switch; 5] = [
        Switch::Sw1,
        Switch::Sw2,
        Switch::Sw3,
        Switch::Sw4,
        Switch::Sw5,
    ];

    /// Position im Array `Switch::ALL`
    pub const fn index(self) -> usize {
        match self {
            Switch::Sw1 => 0,
            Switch::Sw2 => 1,
            Switch::Sw3 => 2,
            Switch::Sw4 => 3,
            Switch::Sw5 => 4,
        }
    }
}

/// Indikator-LEDs D3 bis D6
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Led {
    D3,
    D4,
    D5,
    D6,
}

impl Led {
    pub const ALL: [Led; 4] = [Led::D3, Led::D4, Led::D5, Led::D6];

    /// Position im Array `Led::ALL`
    pub const fn index(self) -> usize {
        match self {
            Led::D3 => 0,
            Led::D4 => 1,
            Led::D5 => 2,
            Led::D6 => 3,
        }
    }
}

/// Spieler im Rapid-Clicker (der einfache Zähler nutzt nur `One`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Player {
    One,
    Two,
}

/// Wie gedrückte Taster gezählt werden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CountPolicy {
    /// Naive Variante: zählt jeden Poll-Durchlauf, solange der Taster gehalten wird.
    /// Der Zähler läuft modulo 256 über.
    EveryPoll,
    /// Flankenerkennung über das Pressed-Flag, Zähler sättigt bei 255
    #[default]
    OncePerPress,
}

/// Verhalten der Schwellwert-LED
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ThresholdPolicy {
    /// Einmal an, bleibt an bis zum Reset
    #[default]
    Latching,
    /// Wird in jedem Durchlauf neu aus `count >= max_count` berechnet
    Toggling,
}

/// Welches Programm auf dem Board läuft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProgramKind {
    /// Tastendrücke zählen, Schwellwert-LED, Reset-Taster
    #[default]
    Counter,
    /// Zwei-Spieler-Spiel: wer zuerst `max_count` erreicht
    RapidClicker,
    /// Jeder neue Druck invertiert alle LEDs
    Toggle,
    /// Haltezeit-Anzeige in Sekundenschritten
    HoldMeter,
    /// Zählt Prellflanken ohne Entprellung
    BounceMeter,
}

/// Zähler-Konfiguration
///
/// Wird einmal beim Start erstellt und danach nicht mehr verändert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CounterConfig {
    /// Schwellwert, ab dem die Erfolgs-LED leuchtet
    pub max_count: u8,
    pub count_policy: CountPolicy,
    pub threshold_policy: ThresholdPolicy,
    /// Sperrzeit nach einem gezählten Druck (0 = aus)
    pub debounce_ms: u32,
    /// Wartezeit am Ende jedes Schleifendurchlaufs
    pub poll_interval_ms: u32,
}

impl CounterConfig {
    pub const DEFAULT_MAX_COUNT: u8 = 50;
    pub const DEFAULT_POLL_INTERVAL_MS: u32 = 10;

    pub const fn new() -> Self {
        Self {
            max_count: Self::DEFAULT_MAX_COUNT,
            count_policy: CountPolicy::OncePerPress,
            threshold_policy: ThresholdPolicy::Latching,
            debounce_ms: 0,
            poll_interval_ms: Self::DEFAULT_POLL_INTERVAL_MS,
        }
    }

    pub const fn with_max_count(mut self, max_count: u8) -> Self {
        self.max_count = max_count;
        self
    }

    pub const fn with_count_policy(mut self, policy: CountPolicy) -> Self {
        self.count_policy = policy;
        self
    }

    pub const fn with_threshold_policy(mut self, policy: ThresholdPolicy) -> Self {
        self.threshold_policy = policy;
        self
    }

    pub const fn with_debounce_ms(mut self, debounce_ms: u32) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub const fn with_poll_interval_ms(mut self, poll_interval_ms: u32) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Beobachtungen der Programme, z.B. für Logging
///
/// Programme loggen nie selbst, sie melden Events an einen `EventSink`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CounterEvent {
    /// Ein Druck wurde gezählt
    Counted { player: Player, count: u8 },
    /// Schwellwert-LED ist gerade angegangen
    ThresholdReached { player: Player },
    /// Zähler wurde per Reset-Taster gelöscht
    Reset,
    /// Toggle-Taster hat alle LEDs umgeschaltet (`lit` = Zustand von D3)
    Toggled { lit: bool },
    /// Neue Haltestufe erreicht
    HoldLevel { level: u8 },
    /// Bounce-Meter hat eine Marke erreicht
    Milestone { level: u8 },
}

/// Ergebnis eines Schleifendurchlaufs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepOutcome {
    Continue,
    /// Escape-Taster gedrückt: Kontrolle geht an Reset/Bootloader
    EnterBootloader,
}

// ============================================================================
// Parsing aus Konfigurationsnamen (Build-Zeit Environment)
// ============================================================================

impl core::convert::TryFrom<&str> for CountPolicy {
    type Error = ();

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        match name {
            "every-poll" => Ok(Self::EveryPoll),
            "once-per-press" => Ok(Self::OncePerPress),
            _ => Err(()),
        }
    }
}

impl core::convert::TryFrom<&str> for ThresholdPolicy {
    type Error = ();

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        match name {
            "latching" => Ok(Self::Latching),
            "toggling" => Ok(Self::Toggling),
            _ => Err(()),
        }
    }
}

impl core::convert::TryFrom<&str> for ProgramKind {
    type Error = ();

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        match name {
            "counter" => Ok(Self::Counter),
            "rapid-clicker" => Ok(Self::RapidClicker),
            "toggle" => Ok(Self::Toggle),
            "hold-meter" => Ok(Self::HoldMeter),
            "bounce-meter" => Ok(Self::BounceMeter),
            _ => Err(()),
        }
    }
}
