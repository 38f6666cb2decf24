// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von counter-core
pub use counter_core::{AnyProgram, CounterEvent};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::pubsub::{PubSubChannel, Publisher, Subscriber};

use crate::config::EVENT_QUEUE_SIZE;

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Statt:  Publisher<'static, NoopRawMutex, CounterEvent, 8, 1, 1>
// Nutze:  CounterEventPublisher

/// PubSubChannel für Programm-Events
/// - EVENT_QUEUE_SIZE: Nachrichten-Kapazität im Queue
/// - 1: Subscriber (Status-Task)
/// - 1: Publisher (Poll-Task)
pub type CounterEventChannel = PubSubChannel<NoopRawMutex, CounterEvent, EVENT_QUEUE_SIZE, 1, 1>;

/// Publisher für Programm-Events
pub type CounterEventPublisher =
    Publisher<'static, NoopRawMutex, CounterEvent, EVENT_QUEUE_SIZE, 1, 1>;

/// Subscriber für Programm-Events
pub type CounterEventSubscriber =
    Subscriber<'static, NoopRawMutex, CounterEvent, EVENT_QUEUE_SIZE, 1, 1>;
