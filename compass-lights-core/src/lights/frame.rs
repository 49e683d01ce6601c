/// One on/off state for all 8 lines. Bit `n` is logical line `n`.
///
/// On the Discovery board, logical line `n` is pin `PE(8 + n)`, so the bits are in ascending physical pin order.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Frame(pub u8);

impl Frame {
    pub const LINES: u8 = 8;

    pub const OFF: Self = Self(0);
    pub const ALL: Self = Self(u8::MAX);

    /// Only `line` is lit.
    pub const fn single(line: u8) -> Self {
        Self(1 << (line % Self::LINES))
    }

    /// The lowest `count` lines are lit. Anything over 8 lights everything.
    pub const fn lowest(count: u8) -> Self {
        if count >= Self::LINES {
            Self::ALL
        } else {
            Self((1 << count) - 1)
        }
    }

    pub const fn is_lit(self, line: u8) -> bool {
        line < Self::LINES && self.0 & (1 << line) != 0
    }

    pub const fn count_lit(self) -> u32 {
        self.0.count_ones()
    }

    /// Lit line numbers, lowest first.
    pub fn lit_lines(self) -> impl Iterator<Item = u8> {
        (0..Self::LINES).filter(move |&line| self.is_lit(line))
    }
}

impl From<u8> for Frame {
    fn from(mask: u8) -> Self {
        Self(mask)
    }
}

impl From<Frame> for u8 {
    fn from(frame: Frame) -> Self {
        frame.0
    }
}

#[cfg(test)]
mod tests {
    use super::Frame;

    #[test]
    fn test_single() {
        assert_eq!(Frame::single(0), Frame(0b0000_0001));
        assert_eq!(Frame::single(3), Frame(0b0000_1000));
        assert_eq!(Frame::single(7), Frame(0b1000_0000));
    }

    #[test]
    fn test_lowest() {
        assert_eq!(Frame::lowest(0), Frame::OFF);
        assert_eq!(Frame::lowest(1), Frame(0b0000_0001));
        assert_eq!(Frame::lowest(5), Frame(0b0001_1111));
        assert_eq!(Frame::lowest(7), Frame(0b0111_1111));
        assert_eq!(Frame::lowest(8), Frame::ALL);
        assert_eq!(Frame::lowest(200), Frame::ALL);
    }

    #[test]
    fn test_lit_lines() {
        let frame = Frame(0b1010_0110);

        let lit: Vec<u8> = frame.lit_lines().collect();

        assert_eq!(lit, [1, 2, 5, 7]);
        assert_eq!(frame.count_lit(), 4);
        assert!(!frame.is_lit(0));
        assert!(frame.is_lit(7));
        assert!(!frame.is_lit(8));
    }
}
