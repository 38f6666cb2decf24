// Poll Task - Tastenabfrage, Zähler und LEDs im festen Takt
use counter_core::{AnyProgram, Board, CounterEvent, EventSink, PollLoop, Program, ResetControl};
use defmt::{error, warn};
use embassy_time::{Duration, Instant, Timer};

use crate::CounterEventPublisher;
use crate::hal::{GpioBoard, SoftwareReset};

/// Leitet Programm-Events an den PubSub-Channel weiter
///
/// `publish_immediate` blockiert nie: ist die Queue voll, fällt die
/// älteste Nachricht raus und der Subscriber sieht `Lagged`.
struct PublisherSink<'a>(&'a CounterEventPublisher);

impl EventSink for PublisherSink<'_> {
    fn emit(&mut self, event: CounterEvent) {
        self.0.publish_immediate(event);
    }
}

/// Poll Logic - Testbare Schleife ohne konkrete Hardware
///
/// Ablauf pro Durchlauf:
/// 1. Programm abtasten lassen (Taster, Zähler, LEDs)
/// 2. Board-Fehler loggen
/// 3. `interval_ms` warten (Async: gibt CPU an andere Tasks zurück)
/// 4. Escape-Taster prüfen, ggf. Reset
///
/// # Trait-basierte Abstraktion
/// - `B: Board`: GpioBoard im Production-Code
/// - `R: ResetControl`: SoftwareReset im Production-Code
pub async fn poll_logic<B: Board, P: Program, R: ResetControl>(
    mut board: B,
    mut poll: PollLoop<P>,
    mut reset: R,
    publisher: CounterEventPublisher,
) -> ! {
    let mut sink = PublisherSink(&publisher);
    let interval = Duration::from_millis(u64::from(poll.interval_ms()));

    loop {
        // Monotone Zeit, läuft nach ~49 Tagen über (Programme rechnen wrapping)
        let now_ms = Instant::now().as_millis() as u32;
        poll.sample(&mut board, now_ms, &mut sink);

        if let Some(fault) = poll.take_fault() {
            error!(
                "Poll: board fault {} (total: {})",
                fault,
                poll.fault_count()
            );
        }

        Timer::after(interval).await;

        if poll.escape_requested(&mut board) {
            warn!(
                "Poll: escape switch pressed after {} iterations, resetting",
                poll.iterations()
            );
            reset.trigger_reset();
        }
    }
}

/// Poll Task - Embassy Task für das Board-Programm
///
/// # Parameter
/// - `board`: initialisierte GPIOs (Taster + LEDs)
/// - `program`: ausgewähltes Programm (siehe `config::program_kind`)
/// - `interval_ms`: Wartezeit pro Durchlauf (`CounterConfig::poll_interval_ms`)
/// - `publisher`: PubSub Publisher für Programm-Events
#[embassy_executor::task]
pub async fn poll_task(
    board: GpioBoard<'static>,
    program: AnyProgram,
    interval_ms: u32,
    publisher: CounterEventPublisher,
) -> ! {
    let poll = PollLoop::new(program, interval_ms);
    poll_logic(board, poll, SoftwareReset, publisher).await
}
