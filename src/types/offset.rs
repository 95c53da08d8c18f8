use crate::error::ChordmarkError;
use std::fmt;
use std::str::FromStr;

/// Signed semitone distance from the written key.
///
/// Unbounded: `+13` is kept as `+13` for display and only reduced modulo 12
/// when notes are respelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TransposeOffset(i32);

impl TransposeOffset {
    pub const ORIGINAL: TransposeOffset = TransposeOffset(0);

    pub const fn new(semitones: i32) -> Self {
        Self(semitones)
    }

    pub fn semitones(self) -> i32 {
        self.0
    }

    pub fn is_original(self) -> bool {
        self.0 == 0
    }

    /// Equivalent offset in `0..12`.
    pub fn normalized(self) -> u8 {
        self.0.rem_euclid(12) as u8
    }

    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    pub fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    pub fn reset(self) -> Self {
        Self::ORIGINAL
    }

    /// `"Original"`, `"+N"` or `"-N"`.
    pub fn label(self) -> String {
        self.to_string()
    }
}

impl From<i32> for TransposeOffset {
    fn from(semitones: i32) -> Self {
        Self(semitones)
    }
}

impl fmt::Display for TransposeOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => write!(f, "Original"),
            n if n > 0 => write!(f, "+{}", n),
            n => write!(f, "{}", n),
        }
    }
}

impl FromStr for TransposeOffset {
    type Err = ChordmarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("original") {
            return Ok(Self::ORIGINAL);
        }
        let invalid = || ChordmarkError::InvalidOffset(s.to_string());
        let digits = match trimmed.strip_prefix('+') {
            Some(rest) if rest.starts_with(['+', '-']) => return Err(invalid()),
            Some(rest) => rest,
            None => trimmed,
        };
        digits
            .parse::<i32>()
            .map(Self)
            .map_err(|_| invalid())
    }
}
