//! Fixed game constants.

/// Number of clue subrounds in the single elimination round.
pub const SUBROUNDS: u8 = 3;

/// Smallest lineup that produces a meaningful round.
pub const MIN_PARTICIPANTS: usize = 3;

/// Number of hint words handed to an insider on request.
pub const HINT_COUNT: usize = 3;

/// Description tokens shorter than this are never used as hints.
pub const MIN_HINT_LEN: usize = 3;
