use crate::error::ChordmarkError;
use std::fmt;
use std::str::FromStr;

/// Pitch class in `0..12`, octave and spelling ignored. C is 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);

    /// Wraps any semitone count into a pitch class, negatives included.
    pub fn from_semitones(semitones: i32) -> Self {
        Self(semitones.rem_euclid(12) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Shifts by `semitones`. The offset is reduced before adding so that
    /// offsets of any magnitude stay in range.
    pub fn transpose(self, semitones: i32) -> Self {
        let shift = semitones.rem_euclid(12) as u8;
        Self((self.0 + shift) % 12)
    }

    pub fn spell(self, style: SpellingStyle) -> NoteSpelling {
        let flat = style == SpellingStyle::Flat;
        let (letter, accidental) = match self.0 {
            0 => (Letter::C, Accidental::Natural),
            1 if flat => (Letter::D, Accidental::Flat),
            1 => (Letter::C, Accidental::Sharp),
            2 => (Letter::D, Accidental::Natural),
            3 if flat => (Letter::E, Accidental::Flat),
            3 => (Letter::D, Accidental::Sharp),
            4 => (Letter::E, Accidental::Natural),
            5 => (Letter::F, Accidental::Natural),
            6 if flat => (Letter::G, Accidental::Flat),
            6 => (Letter::F, Accidental::Sharp),
            7 => (Letter::G, Accidental::Natural),
            8 if flat => (Letter::A, Accidental::Flat),
            8 => (Letter::G, Accidental::Sharp),
            9 => (Letter::A, Accidental::Natural),
            10 if flat => (Letter::B, Accidental::Flat),
            10 => (Letter::A, Accidental::Sharp),
            11 => (Letter::B, Accidental::Natural),
            _ => unreachable!("pitch class out of range"),
        };
        NoteSpelling { letter, accidental }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which enharmonic spelling to emit for the five black keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpellingStyle {
    #[default]
    Sharp,
    Flat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }

    fn semitone(self) -> u8 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accidental {
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Accidental::Sharp),
            'b' => Some(Accidental::Flat),
            _ => None,
        }
    }
}

/// A root or bass note as written: letter plus optional `#`/`b`.
///
/// Any letter/accidental pair can be written, but only the seventeen
/// canonical spellings (`C C# Db D D# Eb E F F# Gb G G# Ab A A# Bb B`)
/// resolve to a pitch class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteSpelling {
    pub letter: Letter,
    pub accidental: Accidental,
}

impl NoteSpelling {
    pub fn new(letter: Letter, accidental: Accidental) -> Self {
        Self { letter, accidental }
    }

    pub fn resolve(&self) -> Option<PitchClass> {
        let base = self.letter.semitone();
        match (self.letter, self.accidental) {
            (Letter::E | Letter::B, Accidental::Sharp) => None,
            (Letter::C | Letter::F, Accidental::Flat) => None,
            (_, Accidental::Natural) => Some(PitchClass(base)),
            (_, Accidental::Sharp) => Some(PitchClass(base + 1)),
            (_, Accidental::Flat) => Some(PitchClass(base - 1)),
        }
    }

    /// Style a transposed copy of this note should be written in: flat only
    /// when this spelling itself carries a flat.
    pub fn style(&self) -> SpellingStyle {
        match self.accidental {
            Accidental::Flat => SpellingStyle::Flat,
            Accidental::Sharp | Accidental::Natural => SpellingStyle::Sharp,
        }
    }

    /// Respells the note `semitones` away, keeping this spelling's style.
    /// `None` when this spelling does not resolve.
    pub fn transpose(&self, semitones: i32) -> Option<NoteSpelling> {
        let pitch = self.resolve()?;
        Some(pitch.transpose(semitones).spell(self.style()))
    }
}

impl fmt::Display for NoteSpelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter.as_char())?;
        match self.accidental {
            Accidental::Natural => Ok(()),
            Accidental::Sharp => write!(f, "#"),
            Accidental::Flat => write!(f, "b"),
        }
    }
}

impl FromStr for NoteSpelling {
    type Err = ChordmarkError;

    /// Parses a canonical spelling; `"E#"`, `"Cb"` and friends are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ChordmarkError::UnknownSpelling(s.to_string());
        let mut chars = s.chars();
        let letter = chars.next().and_then(Letter::from_char).ok_or_else(unknown)?;
        let accidental = match chars.next() {
            None => Accidental::Natural,
            Some(c) => Accidental::from_char(c).ok_or_else(unknown)?,
        };
        if chars.next().is_some() {
            return Err(unknown());
        }
        let spelling = NoteSpelling { letter, accidental };
        spelling.resolve().map(|_| spelling).ok_or_else(unknown)
    }
}

/// Looks up the pitch class of a spelling such as `"Db"`.
pub fn resolve(spelling: &str) -> Option<PitchClass> {
    spelling.parse::<NoteSpelling>().ok()?.resolve()
}

/// Spells a pitch class in sharp or flat notation.
pub fn spell(pitch: PitchClass, use_flat: bool) -> NoteSpelling {
    let style = if use_flat {
        SpellingStyle::Flat
    } else {
        SpellingStyle::Sharp
    };
    pitch.spell(style)
}
