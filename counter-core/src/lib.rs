//! Counter Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, Zustandsautomaten, die Board-Programme
//! und die Poll-Schleife.

#![no_std]

pub mod counter;
pub mod logic;
pub mod poll;
pub mod programs;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use counter::{ButtonState, Edge, EdgeDetector, PressCounter, Sample, ThresholdIndicator};
pub use logic::{hold_level, milestones_reached, next_count, threshold_led, threshold_reached};
pub use poll::{ESCAPE_SWITCH, PollLoop};
pub use programs::{
    AnyProgram, BounceMeterProgram, CounterProgram, HoldMeterProgram, Program,
    RapidClickerProgram, ToggleProgram,
};
pub use traits::{Board, BoardError, EventSink, LedOutput, PollTimer, ResetControl, SwitchInput};
pub use types::{
    CountPolicy, CounterConfig, CounterEvent, Led, Player, ProgramKind, StepOutcome, Switch,
    ThresholdPolicy,
};
