use super::Generator;
use crate::lights::Frame;

/// Pseudo-random frames from a tiny linear congruential generator.
///
/// This is NOT random. The same seed always gives the same frames, and only the low 8 bits of state survive.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chaos {
    state: u32,
}

impl Chaos {
    pub const SEED: u32 = 123;
    pub const MULTIPLIER: u32 = 1_103_515_245;
    pub const INCREMENT: u32 = 12_345;
    pub const MODULUS: u32 = 256;

    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for Chaos {
    fn default() -> Self {
        Self::new(Self::SEED)
    }
}

impl Generator for Chaos {
    /// Advances the generator and shows the new state.
    fn step(&mut self) -> Frame {
        // 2^32 is a multiple of the modulus, so wrapping first doesn't change the answer
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
            % Self::MODULUS;

        Frame(self.state as u8)
    }
}
