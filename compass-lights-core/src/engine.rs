//! The main loop: check the button, maybe change patterns, draw a frame, wait.
//!
//! Everything is blocking and there is only one thread of control. The delay is the only place time passes.
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;
use heapless::Vec;

use crate::button::InputDebouncer;
use crate::config::Config;
use crate::errors::MyResult;
use crate::lights::{Frame, MaskWrite, OutputBank};
use crate::logging::{info, trace};
use crate::patterns::{Generator, Pattern, PatternMode};

/// How long the lights stay dark between patterns
pub const SETTLE_MS: u32 = 100;

pub struct PatternEngine<I, W, D> {
    debouncer: InputDebouncer<I>,
    bank: OutputBank<W>,
    delay: D,
    /// indexed by [`PatternMode::index`]. these are never reset
    patterns: [Pattern; PatternMode::COUNT],
    playlist: Vec<PatternMode, { PatternMode::COUNT }>,
    /// index into `playlist`
    position: usize,
}

impl<I, W, D> PatternEngine<I, W, D>
where
    I: InputPin,
    W: MaskWrite,
    D: DelayNs,
{
    /// `button` and `lights` should already be set up as input and outputs. The lights are turned off here.
    pub fn new(config: &Config, button: I, lights: W, delay: D) -> MyResult<Self> {
        config.validate()?;

        let x = Self {
            debouncer: InputDebouncer::new(button, config.polarity),
            bank: OutputBank::new(lights),
            delay,
            patterns: Pattern::bank(&config.compass),
            playlist: config.playlist.clone(),
            position: config.start_position(),
        };

        info!(
            "{} patterns. starting with {:?}",
            x.playlist.len(),
            x.mode()
        );

        Ok(x)
    }

    pub fn mode(&self) -> PatternMode {
        self.playlist[self.position]
    }

    pub fn playlist(&self) -> &[PatternMode] {
        &self.playlist
    }

    /// The generator for `mode`, whether or not it is in the playlist
    pub fn pattern(&self, mode: PatternMode) -> &Pattern {
        &self.patterns[mode.index()]
    }

    pub fn bank(&self) -> &OutputBank<W> {
        &self.bank
    }

    /// Move to the next pattern in the playlist. The lights go dark for [`SETTLE_MS`] so no old frame is left behind.
    pub fn advance_mode(&mut self) {
        self.position = (self.position + 1) % self.playlist.len();

        info!("pattern: {:?}", self.mode());

        self.bank.clear();
        self.delay.delay_ms(SETTLE_MS);
    }

    /// Step the current pattern, show its frame, and wait for that pattern's cadence.
    pub fn render_current_pattern(&mut self) -> Frame {
        let mode = self.mode();

        let frame = self.patterns[mode.index()].step();

        trace!("{:?}: {:?}", mode, frame);

        self.bank.write_mask(frame);
        self.delay.delay_ms(mode.cadence_ms());

        frame
    }

    /// One trip around the main loop. Returns true if the button changed the pattern.
    pub fn tick(&mut self) -> bool {
        let pressed = self.debouncer.sample(&mut self.delay).is_some();

        if pressed {
            self.advance_mode();
        }

        self.render_current_pattern();

        pressed
    }

    pub fn run(mut self) -> ! {
        loop {
            self.tick();
        }
    }
}
