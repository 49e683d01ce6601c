use thiserror::Error;

use crate::patterns::PatternMode;

/// i don't love this pattern, but eyre no_std doesn't seem to work right
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MyError {
    #[error("no pattern mode with index {0}")]
    InvalidMode(u8),
    #[error("playlist is empty")]
    EmptyPlaylist,
    #[error("playlist has more entries than there are patterns")]
    PlaylistFull,
    #[error("{0:?} is in the playlist more than once")]
    DuplicateMode(PatternMode),
    #[error("start mode {0:?} is not in the playlist")]
    StartModeNotInPlaylist(PatternMode),
    #[error("output line {0} is mapped to more than one compass point")]
    DuplicateLine(u8),
    #[error("output line {0} is out of range. there are only 8 lines")]
    LineOutOfRange(u8),
}

pub type MyResult<T> = Result<T, MyError>;
