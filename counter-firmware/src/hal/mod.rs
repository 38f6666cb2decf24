// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul verbindet die Board-Traits aus counter-core
// mit den ESP32-C6 Peripherals.

pub mod board;

pub use board::{GpioBoard, SoftwareReset};
