//! The eight output lines.
//!
//! Patterns only ever hand us a whole [`Frame`]. Nothing writes a single line on its own.

mod bank;
mod frame;

pub use bank::{MaskWrite, OutputBank, PinBank};
pub use frame::Frame;
