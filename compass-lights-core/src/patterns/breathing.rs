use super::Generator;
use crate::lights::Frame;

/// Fills up from line 0 one light at a time, then empties back down. Counts, then draws.
///
/// Turns around after showing all 8 lit and after showing none lit.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Breathing {
    lit: u8,
    emptying: bool,
}

impl Breathing {
    pub fn lit(&self) -> u8 {
        self.lit
    }
}

impl Generator for Breathing {
    fn step(&mut self) -> Frame {
        if self.emptying {
            self.lit -= 1;
            if self.lit == 0 {
                self.emptying = false;
            }
        } else {
            self.lit += 1;
            if self.lit >= Frame::LINES {
                self.emptying = true;
            }
        }

        Frame::lowest(self.lit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts<const N: usize>(x: &mut Breathing) -> [u32; N] {
        core::array::from_fn(|_| x.step().count_lit())
    }

    #[test]
    fn test_fills_then_empties() {
        let mut x = Breathing::default();

        assert_eq!(counts::<9>(&mut x), [1, 2, 3, 4, 5, 6, 7, 8, 7]);
    }

    #[test]
    fn test_lights_in_pin_order() {
        let mut x = Breathing::default();

        assert_eq!(x.step(), Frame(0b0000_0001));
        assert_eq!(x.step(), Frame(0b0000_0011));
        assert_eq!(x.step(), Frame(0b0000_0111));
    }

    #[test]
    fn test_full_breath() {
        let mut x = Breathing::default();

        assert_eq!(
            counts::<16>(&mut x),
            [1, 2, 3, 4, 5, 6, 7, 8, 7, 6, 5, 4, 3, 2, 1, 0]
        );

        // empty is shown once, then it fills again
        assert_eq!(counts::<2>(&mut x), [1, 2]);
        assert_eq!(x.lit(), 2);
    }
}
