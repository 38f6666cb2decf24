use crate::counter::{Edge, EdgeDetector, PressCounter, ThresholdIndicator};
use crate::traits::{Board, BoardError, EventSink};
use crate::types::{CountPolicy, CounterConfig, CounterEvent, Led, Player, Switch};

use super::Program;

/// Ein Spieler: eigener Taster, Aktivitäts-LED, Sieger-LED
struct Lane {
    player: Player,
    switch: Switch,
    activity_led: Led,
    win_led: Led,
    counter: PressCounter,
    threshold: ThresholdIndicator,
}

impl Lane {
    fn new(
        player: Player,
        switch: Switch,
        activity_led: Led,
        win_led: Led,
        config: &CounterConfig,
    ) -> Self {
        Self {
            player,
            switch,
            activity_led,
            win_led,
            counter: PressCounter::new(CountPolicy::OncePerPress)
                .with_debounce_ms(config.debounce_ms),
            threshold: ThresholdIndicator::from_config(config),
        }
    }

    fn update<B: Board, S: EventSink>(
        &mut self,
        board: &mut B,
        now_ms: u32,
        events: &mut S,
    ) -> Result<(), BoardError> {
        let pressed = board.is_pressed(self.switch)?;
        let sample = self.counter.sample(pressed, now_ms);
        board.write_led(self.activity_led, sample.activity)?;
        if sample.counted {
            events.emit(CounterEvent::Counted {
                player: self.player,
                count: self.counter.count(),
            });
        }

        let was_lit = self.threshold.is_lit();
        let lit = self.threshold.evaluate(self.counter.count());
        board.write_led(self.win_led, lit)?;
        if lit && !was_lit {
            events.emit(CounterEvent::ThresholdReached {
                player: self.player,
            });
        }
        Ok(())
    }

    fn reset<B: Board>(&mut self, board: &mut B) -> Result<(), BoardError> {
        self.counter.reset();
        self.threshold.clear();
        board.write_led(self.win_led, false)
    }
}

/// Zwei-Spieler Rapid-Clicker
///
/// Spieler 1: SW2, D3 (Aktivität), D4 (Sieg).
/// Spieler 2: SW5, D6 (Aktivität), D5 (Sieg).
/// SW3 oder SW4 setzt beide Zähler und Sieger-LEDs zurück.
pub struct RapidClickerProgram {
    lanes: [Lane; 2],
    reset_edge: EdgeDetector,
}

impl RapidClickerProgram {
    pub fn new(config: &CounterConfig) -> Self {
        Self {
            lanes: [
                Lane::new(Player::One, Switch::Sw2, Led::D3, Led::D4, config),
                Lane::new(Player::Two, Switch::Sw5, Led::D6, Led::D5, config),
            ],
            reset_edge: EdgeDetector::new(),
        }
    }

    pub fn count(&self, player: Player) -> u8 {
        self.lane(player).counter.count()
    }

    pub fn has_won(&self, player: Player) -> bool {
        self.lane(player).threshold.is_lit()
    }

    fn lane(&self, player: Player) -> &Lane {
        match player {
            Player::One => &self.lanes[0],
            Player::Two => &self.lanes[1],
        }
    }
}

impl Program for RapidClickerProgram {
    fn update<B: Board, S: EventSink>(
        &mut self,
        board: &mut B,
        now_ms: u32,
        events: &mut S,
    ) -> Result<(), BoardError> {
        for lane in &mut self.lanes {
            lane.update(board, now_ms, events)?;
        }

        let reset = board.is_pressed(Switch::Sw3)? || board.is_pressed(Switch::Sw4)?;
        let reset_edge = self.reset_edge.update(reset);
        if reset {
            for lane in &mut self.lanes {
                lane.reset(board)?;
            }
            if reset_edge == Some(Edge::Pressed) {
                events.emit(CounterEvent::Reset);
            }
        }
        Ok(())
    }
}
