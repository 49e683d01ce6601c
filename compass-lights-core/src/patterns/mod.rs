//! The light patterns. Each one remembers where it was, so switching away and back picks up where it left off.
//!
//! Some patterns draw their current state and then move. Others move and then draw. The boundary behavior of each one
//! is tested and should not be "fixed" to match the others.

mod blink;
mod bounce;
mod breathing;
mod chaos;
mod counter;
mod rotation;

pub use blink::Blink;
pub use bounce::Bounce;
pub use breathing::Breathing;
pub use chaos::Chaos;
pub use counter::BinaryCounter;
pub use rotation::Rotation;

use crate::compass::CompassMap;
use crate::errors::MyError;
use crate::lights::Frame;

/// Something that makes the next frame from its own state. Called once per tick.
pub trait Generator {
    fn step(&mut self) -> Frame;
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PatternMode {
    Clockwise = 0,
    CounterClockwise = 1,
    /// everything on, everything off
    Blink = 2,
    /// like clockwise, but in pin order
    PinOrder = 3,
    /// back and forth like KITT
    Bounce = 4,
    BinaryCounter = 5,
    /// "random"
    Chaos = 6,
    Breathing = 7,
}

impl PatternMode {
    pub const COUNT: usize = 8;

    pub const ALL: [Self; Self::COUNT] = [
        Self::Clockwise,
        Self::CounterClockwise,
        Self::Blink,
        Self::PinOrder,
        Self::Bounce,
        Self::BinaryCounter,
        Self::Chaos,
        Self::Breathing,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Wraps around to `Clockwise` after `Breathing`.
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// How long each frame stays up
    pub const fn cadence_ms(self) -> u32 {
        match self {
            Self::Clockwise | Self::CounterClockwise | Self::PinOrder => 150,
            Self::Blink => 300,
            // faster looks smoother
            Self::Bounce => 100,
            Self::BinaryCounter => 200,
            Self::Chaos | Self::Breathing => 150,
        }
    }
}

impl TryFrom<u8> for PatternMode {
    type Error = MyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(MyError::InvalidMode(value))
    }
}

impl From<PatternMode> for u8 {
    fn from(mode: PatternMode) -> Self {
        mode as u8
    }
}

/// One of each generator, with its state
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pattern {
    Clockwise(Rotation),
    CounterClockwise(Rotation),
    Blink(Blink),
    PinOrder(Rotation),
    Bounce(Bounce),
    BinaryCounter(BinaryCounter),
    Chaos(Chaos),
    Breathing(Breathing),
}

impl Pattern {
    /// A fresh generator for `mode`
    pub fn new(mode: PatternMode, compass: &CompassMap) -> Self {
        match mode {
            PatternMode::Clockwise => Self::Clockwise(Rotation::clockwise(compass)),
            PatternMode::CounterClockwise => {
                Self::CounterClockwise(Rotation::counter_clockwise(compass))
            }
            PatternMode::Blink => Self::Blink(Blink::default()),
            PatternMode::PinOrder => Self::PinOrder(Rotation::pin_order()),
            PatternMode::Bounce => Self::Bounce(Bounce::default()),
            PatternMode::BinaryCounter => Self::BinaryCounter(BinaryCounter::default()),
            PatternMode::Chaos => Self::Chaos(Chaos::default()),
            PatternMode::Breathing => Self::Breathing(Breathing::default()),
        }
    }

    /// One fresh generator per mode, indexed by [`PatternMode::index`]
    pub fn bank(compass: &CompassMap) -> [Self; PatternMode::COUNT] {
        PatternMode::ALL.map(|mode| Self::new(mode, compass))
    }

    pub fn mode(&self) -> PatternMode {
        match self {
            Self::Clockwise(_) => PatternMode::Clockwise,
            Self::CounterClockwise(_) => PatternMode::CounterClockwise,
            Self::Blink(_) => PatternMode::Blink,
            Self::PinOrder(_) => PatternMode::PinOrder,
            Self::Bounce(_) => PatternMode::Bounce,
            Self::BinaryCounter(_) => PatternMode::BinaryCounter,
            Self::Chaos(_) => PatternMode::Chaos,
            Self::Breathing(_) => PatternMode::Breathing,
        }
    }
}

impl Generator for Pattern {
    fn step(&mut self) -> Frame {
        match self {
            Self::Clockwise(x) | Self::CounterClockwise(x) | Self::PinOrder(x) => x.step(),
            Self::Blink(x) => x.step(),
            Self::Bounce(x) => x.step(),
            Self::BinaryCounter(x) => x.step(),
            Self::Chaos(x) => x.step(),
            Self::Breathing(x) => x.step(),
        }
    }
}
