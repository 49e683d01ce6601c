use heapless::Vec;

use crate::button::ButtonPolarity;
use crate::compass::CompassMap;
use crate::errors::{MyError, MyResult};
use crate::patterns::PatternMode;

/// Timing is NOT configurable. Every delay is a constant next to the code that uses it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// The modes the button cycles through, in order. Wraps after the last one.
    pub playlist: Vec<PatternMode, { PatternMode::COUNT }>,
    /// Has to be in the playlist
    pub start_mode: PatternMode,
    pub polarity: ButtonPolarity,
    pub compass: CompassMap,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            playlist: PatternMode::ALL.into_iter().collect(),
            start_mode: PatternMode::Clockwise,
            polarity: ButtonPolarity::ActiveHigh,
            compass: CompassMap::DISCOVERY,
        }
    }
}

impl Config {
    /// Only cycle through some of the patterns. Starts at the first one.
    pub fn with_playlist(modes: &[PatternMode]) -> MyResult<Self> {
        let playlist = Vec::from_slice(modes).map_err(|_| MyError::PlaylistFull)?;

        let start_mode = *playlist.first().ok_or(MyError::EmptyPlaylist)?;

        let config = Self {
            playlist,
            start_mode,
            ..Default::default()
        };

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> MyResult<()> {
        if self.playlist.is_empty() {
            return Err(MyError::EmptyPlaylist);
        }

        let mut seen = [false; PatternMode::COUNT];

        for mode in self.playlist.iter() {
            if seen[mode.index()] {
                return Err(MyError::DuplicateMode(*mode));
            }
            seen[mode.index()] = true;
        }

        if !seen[self.start_mode.index()] {
            return Err(MyError::StartModeNotInPlaylist(self.start_mode));
        }

        Ok(())
    }

    /// Where `start_mode` is in the playlist. Only meaningful after `validate`.
    pub fn start_position(&self) -> usize {
        self.playlist
            .iter()
            .position(|x| *x == self.start_mode)
            .unwrap_or_default()
    }
}
