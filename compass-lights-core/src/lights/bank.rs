use core::convert::Infallible;

use embedded_hal::digital::{OutputPin, PinState};

use super::Frame;

/// Anything that can replace the state of all 8 lines at once.
///
/// Lines that are not set in the frame are driven low.
pub trait MaskWrite {
    fn write_mask(&mut self, frame: Frame);
}

impl<T: MaskWrite + ?Sized> MaskWrite for &mut T {
    fn write_mask(&mut self, frame: Frame) {
        (**self).write_mask(frame)
    }
}

/// 8 separate gpio pins. `pins[n]` is logical line `n`.
///
/// The pins have to be infallible. embassy's `Output` is.
/// TODO: a version for boards where all 8 lines share one port could write the whole ODR in one go
pub struct PinBank<P> {
    pins: [P; Frame::LINES as usize],
}

impl<P: OutputPin<Error = Infallible>> PinBank<P> {
    pub fn new(pins: [P; Frame::LINES as usize]) -> Self {
        Self { pins }
    }

    pub fn into_pins(self) -> [P; Frame::LINES as usize] {
        self.pins
    }
}

impl<P: OutputPin<Error = Infallible>> MaskWrite for PinBank<P> {
    fn write_mask(&mut self, frame: Frame) {
        for (line, pin) in (0..Frame::LINES).zip(self.pins.iter_mut()) {
            let Ok(()) = pin.set_state(PinState::from(frame.is_lit(line)));
        }
    }
}

/// The output lines, plus the last frame that was written to them.
///
/// `write_mask` is the only way the lines change.
pub struct OutputBank<W> {
    writer: W,
    mask: Frame,
}

impl<W: MaskWrite> OutputBank<W> {
    /// The pins should already be configured as outputs. Everything starts off.
    pub fn new(mut writer: W) -> Self {
        writer.write_mask(Frame::OFF);

        Self {
            writer,
            mask: Frame::OFF,
        }
    }

    pub fn write_mask(&mut self, frame: Frame) {
        self.writer.write_mask(frame);
        self.mask = frame;
    }

    pub fn clear(&mut self) {
        self.write_mask(Frame::OFF);
    }

    /// The last frame written
    pub fn mask(&self) -> Frame {
        self.mask
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
