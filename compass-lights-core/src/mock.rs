//! Fake hardware for the tests.
//!
//! Everything here is `Clone` and the clones share state, so a test can keep a handle after moving one into the engine.
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, InputPin, OutputPin};

use crate::lights::{Frame, MaskWrite};

/// A delay that doesn't actually wait. It moves a fake clock forward and remembers every `delay_ms`.
#[derive(Clone, Default)]
pub struct MockClock {
    now_ns: Rc<Cell<u64>>,
    waits_ms: Rc<RefCell<Vec<u32>>>,
}

impl MockClock {
    pub fn now_ms(&self) -> u64 {
        self.now_ns.get() / 1_000_000
    }

    pub fn waits_ms(&self) -> Vec<u32> {
        self.waits_ms.borrow().clone()
    }

    pub fn clear_waits(&self) {
        self.waits_ms.borrow_mut().clear();
    }
}

impl DelayNs for MockClock {
    fn delay_ns(&mut self, ns: u32) {
        self.now_ns.set(self.now_ns.get() + ns as u64);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.waits_ms.borrow_mut().push(ms);
        self.now_ns.set(self.now_ns.get() + ms as u64 * 1_000_000);
    }
}

/// An input that follows a script. Once the script runs out it reads low.
#[derive(Clone, Default)]
pub struct ScriptedPin {
    script: Rc<RefCell<VecDeque<Result<bool, ErrorKind>>>>,
}

impl ScriptedPin {
    pub fn new(levels: &[bool]) -> Self {
        let x = Self::default();
        x.extend(levels);
        x
    }

    pub fn extend(&self, levels: &[bool]) {
        self.script
            .borrow_mut()
            .extend(levels.iter().copied().map(Ok));
    }

    pub fn push_error(&self) {
        self.script.borrow_mut().push_back(Err(ErrorKind::Other));
    }
}

impl ErrorType for ScriptedPin {
    type Error = ErrorKind;
}

impl InputPin for ScriptedPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.script.borrow_mut().pop_front().unwrap_or(Ok(false))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|x| !x)
    }
}

/// An input whose level depends on the time on a [`MockClock`].
///
/// `edges` is a list of `(ms, level)`. Before the first edge it reads low.
#[derive(Clone)]
pub struct TimelinePin {
    clock: MockClock,
    edges: Vec<(u64, bool)>,
}

impl TimelinePin {
    pub fn new(clock: MockClock, edges: &[(u64, bool)]) -> Self {
        Self {
            clock,
            edges: edges.to_vec(),
        }
    }
}

impl ErrorType for TimelinePin {
    type Error = Infallible;
}

impl InputPin for TimelinePin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        let now = self.clock.now_ms();

        let level = self
            .edges
            .iter()
            .take_while(|(at, _)| *at <= now)
            .last()
            .is_some_and(|(_, level)| *level);

        Ok(level)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|x| !x)
    }
}

/// One output pin.
#[derive(Clone, Default)]
pub struct MockPin {
    high: Rc<Cell<bool>>,
}

impl MockPin {
    pub fn is_set_high(&self) -> bool {
        self.high.get()
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high.set(true);
        Ok(())
    }
}

/// Remembers every frame written to it.
#[derive(Clone, Default)]
pub struct RecordingWriter {
    frames: Rc<RefCell<Vec<Frame>>>,
}

impl RecordingWriter {
    pub fn frames(&self) -> Vec<Frame> {
        self.frames.borrow().clone()
    }

    pub fn clear(&self) {
        self.frames.borrow_mut().clear();
    }
}

impl MaskWrite for RecordingWriter {
    fn write_mask(&mut self, frame: Frame) {
        self.frames.borrow_mut().push(frame);
    }
}
