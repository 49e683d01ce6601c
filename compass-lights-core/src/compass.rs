//! The eight compass points and which output line each one is wired to.
//!
//! The Discovery board has its 8 user LEDs in a circle around the gyro. Going around the circle does NOT match the pin order.
use crate::errors::{MyError, MyResult};
use crate::lights::Frame;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Compass {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Compass {
    /// Going around clockwise, starting at north
    pub const CLOCKWISE: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// Going around the other way, still starting at north
    pub const COUNTER_CLOCKWISE: [Self; 8] = [
        Self::North,
        Self::NorthWest,
        Self::West,
        Self::SouthWest,
        Self::South,
        Self::SouthEast,
        Self::East,
        Self::NorthEast,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Which logical output line each compass point lights.
///
/// Always a permutation of `0..8`.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CompassMap {
    /// indexed by [`Compass::index`]
    lines: [u8; 8],
}

impl CompassMap {
    /// STM32F303 Discovery. LD3 (north) is PE9, LD4 (north-east) is PE8, and so on around the circle.
    ///
    /// Logical line `n` is `PE(8 + n)`.
    pub const DISCOVERY: Self = Self {
        lines: [1, 0, 2, 7, 3, 6, 4, 5],
    };

    /// `lines` is indexed by [`Compass::index`]. Every line has to be used exactly once.
    pub fn new(lines: [u8; 8]) -> MyResult<Self> {
        let mut seen = 0u8;

        for &line in lines.iter() {
            if line >= Frame::LINES {
                return Err(MyError::LineOutOfRange(line));
            }

            let bit = 1 << line;

            if seen & bit != 0 {
                return Err(MyError::DuplicateLine(line));
            }

            seen |= bit;
        }

        Ok(Self { lines })
    }

    pub const fn line(&self, direction: Compass) -> u8 {
        self.lines[direction.index()]
    }

    pub const fn frame(&self, direction: Compass) -> Frame {
        Frame::single(self.line(direction))
    }

    /// The lines to visit when walking `directions` in order
    pub fn route(&self, directions: [Compass; 8]) -> [u8; 8] {
        directions.map(|x| self.line(x))
    }
}

impl Default for CompassMap {
    fn default() -> Self {
        Self::DISCOVERY
    }
}
