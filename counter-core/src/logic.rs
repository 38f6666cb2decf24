//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::types::{CountPolicy, ThresholdPolicy};

/// Nächster Zählerstand nach einem gezählten Druck
///
/// # Beispiele
///
/// ```
/// # use counter_core::{CountPolicy, next_count};
/// assert_eq!(next_count(255, CountPolicy::OncePerPress), 255); // sättigt
/// assert_eq!(next_count(255, CountPolicy::EveryPoll), 0);      // läuft über
/// ```
pub fn next_count(count: u8, policy: CountPolicy) -> u8 {
    match policy {
        CountPolicy::EveryPoll => count.wrapping_add(1),
        CountPolicy::OncePerPress => count.saturating_add(1),
    }
}

pub fn threshold_reached(count: u8, max_count: u8) -> bool {
    count >= max_count
}

/// Neuer Zustand der Schwellwert-LED
///
/// `lit` ist der Zustand aus dem letzten Durchlauf.
pub fn threshold_led(lit: bool, count: u8, max_count: u8, policy: ThresholdPolicy) -> bool {
    let reached = threshold_reached(count, max_count);
    match policy {
        ThresholdPolicy::Latching => lit || reached,
        ThresholdPolicy::Toggling => reached,
    }
}

/// Anzahl vollständig abgelaufener Haltestufen, begrenzt auf `max_level`
pub fn hold_level(elapsed_ms: u32, step_ms: u32, max_level: u8) -> u8 {
    if step_ms == 0 {
        return max_level;
    }
    let level = elapsed_ms / step_ms;
    if level >= u32::from(max_level) {
        max_level
    } else {
        level as u8
    }
}

/// Wie viele Marken (aufsteigend sortiert) hat der Zähler erreicht?
pub fn milestones_reached(count: u8, milestones: &[u8]) -> usize {
    milestones.iter().take_while(|&&m| count >= m).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_count_once_per_press_saturates() {
        assert_eq!(next_count(0, CountPolicy::OncePerPress), 1);
        assert_eq!(next_count(254, CountPolicy::OncePerPress), 255);
        assert_eq!(next_count(255, CountPolicy::OncePerPress), 255);
    }

    #[test]
    fn test_next_count_every_poll_wraps() {
        assert_eq!(next_count(41, CountPolicy::EveryPoll), 42);
        assert_eq!(next_count(255, CountPolicy::EveryPoll), 0);
    }

    #[test]
    fn test_threshold_latching_stays_on() {
        assert!(!threshold_led(false, 49, 50, ThresholdPolicy::Latching));
        assert!(threshold_led(false, 50, 50, ThresholdPolicy::Latching));
        // Einmal an, bleibt an
        assert!(threshold_led(true, 0, 50, ThresholdPolicy::Latching));
    }

    #[test]
    fn test_threshold_toggling_follows_count() {
        assert!(threshold_led(false, 60, 50, ThresholdPolicy::Toggling));
        assert!(!threshold_led(true, 10, 50, ThresholdPolicy::Toggling));
    }

    #[test]
    fn test_hold_level() {
        assert_eq!(hold_level(0, 1000, 3), 0);
        assert_eq!(hold_level(999, 1000, 3), 0);
        assert_eq!(hold_level(1000, 1000, 3), 1);
        assert_eq!(hold_level(2500, 1000, 3), 2);
        assert_eq!(hold_level(60_000, 1000, 3), 3);
        assert_eq!(hold_level(5, 0, 3), 3);
    }

    #[test]
    fn test_milestones_reached() {
        let marks = [15, 30, 45];
        assert_eq!(milestones_reached(0, &marks), 0);
        assert_eq!(milestones_reached(15, &marks), 1);
        assert_eq!(milestones_reached(44, &marks), 2);
        assert_eq!(milestones_reached(200, &marks), 3);
    }
}
