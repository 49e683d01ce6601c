use super::Generator;
use crate::lights::Frame;

/// One light sweeping 0 to 7 and back, like KITT. Moves, then draws.
///
/// It turns around on the same step that reaches an end, so each end is shown once per sweep.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bounce {
    position: u8,
    reverse: bool,
}

impl Bounce {
    const LAST: u8 = Frame::LINES - 1;

    pub fn position(&self) -> u8 {
        self.position
    }
}

impl Generator for Bounce {
    fn step(&mut self) -> Frame {
        if self.reverse {
            self.position -= 1;
            if self.position == 0 {
                self.reverse = false;
            }
        } else {
            self.position += 1;
            if self.position >= Self::LAST {
                self.reverse = true;
            }
        }

        Frame::single(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions<const N: usize>(x: &mut Bounce) -> [u8; N] {
        core::array::from_fn(|_| {
            let frame = x.step();
            assert_eq!(frame.count_lit(), 1);
            frame.lit_lines().next().unwrap()
        })
    }

    #[test]
    fn test_turns_at_seven() {
        let mut x = Bounce::default();

        assert_eq!(positions::<8>(&mut x), [1, 2, 3, 4, 5, 6, 7, 6]);
    }

    #[test]
    fn test_full_sweep() {
        let mut x = Bounce::default();

        let sweep = positions::<14>(&mut x);

        assert_eq!(sweep, [1, 2, 3, 4, 5, 6, 7, 6, 5, 4, 3, 2, 1, 0]);

        for line in 0..8u8 {
            let visits = sweep.iter().filter(|&&x| x == line).count();

            let expected = if line == 0 || line == 7 { 1 } else { 2 };

            assert_eq!(visits, expected, "line {line}");
        }

        // and then it turns around at 0 without showing 0 twice
        assert_eq!(positions::<2>(&mut x), [1, 2]);
    }

    #[test]
    fn test_keeps_going() {
        let mut x = Bounce::default();

        let first = positions::<14>(&mut x);
        let second = positions::<14>(&mut x);

        assert_eq!(first, second);
        assert_eq!(x.position(), 0);
    }
}
