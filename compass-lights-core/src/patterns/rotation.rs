use super::Generator;
use crate::compass::{Compass, CompassMap};
use crate::lights::Frame;

/// One light walking around a fixed route of lines. Draws, then moves.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rotation {
    route: [u8; 8],
    step: u8,
}

impl Rotation {
    pub fn new(route: [u8; 8]) -> Self {
        Self { route, step: 0 }
    }

    /// N, NE, E, SE, S, SW, W, NW
    pub fn clockwise(compass: &CompassMap) -> Self {
        Self::new(compass.route(Compass::CLOCKWISE))
    }

    /// N, NW, W, SW, S, SE, E, NE
    pub fn counter_clockwise(compass: &CompassMap) -> Self {
        Self::new(compass.route(Compass::COUNTER_CLOCKWISE))
    }

    /// Line 0 up to line 7. On the Discovery board this zig-zags around the circle.
    pub fn pin_order() -> Self {
        Self::new([0, 1, 2, 3, 4, 5, 6, 7])
    }

    /// Where the next `step` will be drawn
    pub fn position(&self) -> u8 {
        self.step
    }
}

impl Generator for Rotation {
    fn step(&mut self) -> Frame {
        let frame = Frame::single(self.route[self.step as usize]);

        self.step += 1;
        if self.step as usize >= self.route.len() {
            self.step = 0;
        }

        frame
    }
}
