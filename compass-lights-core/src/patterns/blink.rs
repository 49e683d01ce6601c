use super::Generator;
use crate::lights::Frame;

/// All 8 lines on and off together. Starts off.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Blink {
    on: bool,
}

impl Generator for Blink {
    fn step(&mut self) -> Frame {
        let frame = if self.on { Frame::ALL } else { Frame::OFF };

        self.on = !self.on;

        frame
    }
}
