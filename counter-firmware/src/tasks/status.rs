// Status Task - Loggt Programm-Events
use defmt::{info, warn};
use embassy_sync::pubsub::WaitResult;

use crate::CounterEventSubscriber;

/// Status Task
///
/// Empfängt alle Events der Poll-Schleife und gibt sie per defmt aus.
/// Läuft getrennt, damit das Logging nie den Poll-Takt verzögert.
#[embassy_executor::task]
pub async fn status_task(mut subscriber: CounterEventSubscriber) {
    info!("Status: Task started");

    loop {
        match subscriber.next_message().await {
            WaitResult::Message(event) => info!("Event: {}", event),
            WaitResult::Lagged(missed) => warn!("Status: {} events dropped", missed),
        }
    }
}
