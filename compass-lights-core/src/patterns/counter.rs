use super::Generator;
use crate::lights::Frame;

/// Counts up in binary. Bit 0 is line 0. Counts, then draws.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BinaryCounter {
    count: u8,
}

impl BinaryCounter {
    pub fn count(&self) -> u8 {
        self.count
    }
}

impl Generator for BinaryCounter {
    fn step(&mut self) -> Frame {
        self.count = self.count.wrapping_add(1);

        Frame(self.count)
    }
}
