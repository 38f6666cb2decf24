// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_tastenzaehler::config::{
    LED_GPIO_PINS, SWITCH_GPIO_PINS, counter_config, program_kind,
};
use esp_tastenzaehler::hal::GpioBoard;
use esp_tastenzaehler::tasks::{poll_task, status_task};
use esp_tastenzaehler::{AnyProgram, CounterEventChannel};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware und Embassy Runtime, wählt das Programm
/// und spawnt Poll- und Status-Task. Danach schläft main().
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Taster: active-low mit internem Pull-Up (Reihenfolge SW1..SW5)
    let pull_up = || InputConfig::default().with_pull(Pull::Up);
    let switches = [
        Input::new(peripherals.GPIO9, pull_up()),
        Input::new(peripherals.GPIO0, pull_up()),
        Input::new(peripherals.GPIO1, pull_up()),
        Input::new(peripherals.GPIO2, pull_up()),
        Input::new(peripherals.GPIO3, pull_up()),
    ];

    // LEDs: starten aus (Reihenfolge D3..D6)
    let leds = [
        Output::new(peripherals.GPIO4, Level::Low, OutputConfig::default()),
        Output::new(peripherals.GPIO5, Level::Low, OutputConfig::default()),
        Output::new(peripherals.GPIO6, Level::Low, OutputConfig::default()),
        Output::new(peripherals.GPIO7, Level::Low, OutputConfig::default()),
    ];
    let board = GpioBoard::new(switches, leds);
    info!(
        "Board: switches on GPIO {}, LEDs on GPIO {}",
        SWITCH_GPIO_PINS, LED_GPIO_PINS
    );

    // Programm und Zähler-Konfiguration (Build-Zeit Werte aus .env)
    let counter = counter_config();
    let kind = program_kind();
    info!("Program: {} with {}", kind, counter);
    let program = AnyProgram::new(kind, &counter);

    // Event-Channel erstellen (Poll → Status)
    static EVENT_CHANNEL: static_cell::StaticCell<CounterEventChannel> =
        static_cell::StaticCell::new();
    let event_channel = &*EVENT_CHANNEL.init(CounterEventChannel::new());
    let publisher = event_channel.publisher().unwrap();
    let subscriber = event_channel.subscriber().unwrap();

    spawner.spawn(status_task(subscriber)).unwrap();
    spawner
        .spawn(poll_task(board, program, counter.poll_interval_ms, publisher))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
