use crate::error::ChordmarkError;
use crate::types::pitch::NoteSpelling;
use std::fmt;
use std::str::FromStr;

/// A chord symbol as found in chord-notation text, e.g. `Am7` or `G/B`.
///
/// `quality` is kept verbatim (`"m7"`, `"maj7"`, `"sus4"`, ...). The slash
/// bass, when present, is split out so it can be transposed on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordToken {
    pub root: NoteSpelling,
    pub quality: String,
    pub bass: Option<NoteSpelling>,
}

impl ChordToken {
    pub fn new(root: NoteSpelling, quality: impl Into<String>, bass: Option<NoteSpelling>) -> Self {
        Self {
            root,
            quality: quality.into(),
            bass,
        }
    }

    /// Everything after the root: quality plus `/bass`.
    pub fn suffix(&self) -> String {
        match &self.bass {
            Some(bass) => format!("{}/{}", self.quality, bass),
            None => self.quality.clone(),
        }
    }

    pub fn is_resolvable(&self) -> bool {
        self.root.resolve().is_some() && self.bass.is_none_or(|bass| bass.resolve().is_some())
    }
}

impl fmt::Display for ChordToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.quality)?;
        if let Some(bass) = &self.bass {
            write!(f, "/{}", bass)?;
        }
        Ok(())
    }
}

impl FromStr for ChordToken {
    type Err = ChordmarkError;

    /// Parses a string holding exactly one chord token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::scanner::parse_chord(s).ok_or_else(|| ChordmarkError::InvalidChord(s.to_string()))
    }
}
