// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

use counter_core::{CountPolicy, CounterConfig, ProgramKind, ThresholdPolicy};
use defmt::warn;

// ============================================================================
// GPIO Zuordnung
// ============================================================================
//
// Taster sind active-low gegen GND verdrahtet (interner Pull-Up).
// SW1 liegt auf dem BOOT-Taster des DevKits.

/// GPIO-Pins der Taster SW1..SW5
pub const SWITCH_GPIO_PINS: [u8; 5] = [9, 0, 1, 2, 3];

/// GPIO-Pins der LEDs D3..D6 (active-high)
pub const LED_GPIO_PINS: [u8; 4] = [4, 5, 6, 7];

// ============================================================================
// Poll-Schleife
// ============================================================================

/// Wartezeit pro Schleifendurchlauf in Millisekunden
/// Bestimmt die Abtastrate der Taster
pub const POLL_INTERVAL_MS: u32 = CounterConfig::DEFAULT_POLL_INTERVAL_MS;

/// Event-Channel: Nachrichten-Kapazität
pub const EVENT_QUEUE_SIZE: usize = 8;

// ============================================================================
// Zähler-Konfiguration (Build-Zeit)
// ============================================================================
//
// build.rs setzt diese Variablen immer, fehlende Werte bekommen dort
// ihren Default. Eigene Werte in .env eintragen (siehe .env.example).

/// Programm-Auswahl ("counter", "rapid-clicker", "toggle", "hold-meter", "bounce-meter")
pub const PROGRAM: &str = env!("COUNTER_PROGRAM");

/// Schwellwert für die Erfolgs-LED (0-255)
pub const MAX_COUNT: &str = env!("COUNTER_MAX_COUNT");

/// Zähl-Variante ("once-per-press", "every-poll")
pub const COUNT_POLICY: &str = env!("COUNTER_COUNT_POLICY");

/// Schwellwert-LED Variante ("latching", "toggling")
pub const THRESHOLD_POLICY: &str = env!("COUNTER_THRESHOLD_POLICY");

/// Entprell-Sperrzeit in Millisekunden (0 = aus)
pub const DEBOUNCE_MS: &str = env!("COUNTER_DEBOUNCE_MS");

/// Programm aus `COUNTER_PROGRAM`, bei ungültigem Namen der einfache Zähler
pub fn program_kind() -> ProgramKind {
    ProgramKind::try_from(PROGRAM).unwrap_or_else(|_| {
        warn!("Config: unknown program '{}', using counter", PROGRAM);
        ProgramKind::default()
    })
}

/// Zähler-Konfiguration aus den Build-Zeit Werten
///
/// Ungültige Werte werden geloggt und durch den Default ersetzt.
pub fn counter_config() -> CounterConfig {
    let defaults = CounterConfig::default();

    let max_count = MAX_COUNT.parse::<u8>().unwrap_or_else(|_| {
        warn!("Config: invalid max count '{}'", MAX_COUNT);
        defaults.max_count
    });
    let count_policy = CountPolicy::try_from(COUNT_POLICY).unwrap_or_else(|_| {
        warn!("Config: invalid count policy '{}'", COUNT_POLICY);
        defaults.count_policy
    });
    let threshold_policy = ThresholdPolicy::try_from(THRESHOLD_POLICY).unwrap_or_else(|_| {
        warn!("Config: invalid threshold policy '{}'", THRESHOLD_POLICY);
        defaults.threshold_policy
    });
    let debounce_ms = DEBOUNCE_MS.parse::<u32>().unwrap_or_else(|_| {
        warn!("Config: invalid debounce '{}'", DEBOUNCE_MS);
        defaults.debounce_ms
    });

    defaults
        .with_max_count(max_count)
        .with_count_policy(count_policy)
        .with_threshold_policy(threshold_policy)
        .with_debounce_ms(debounce_ms)
        .with_poll_interval_ms(POLL_INTERVAL_MS)
}
