//! Chord token scanner.
//!
//! Finds chord symbols inside free-form text using a fixed grammar:
//!
//! ```text
//! chord   = root quality [ "/" note ]
//! root    = note
//! note    = "A".."G" [ "#" | "b" ]
//! quality = [ "m" | "M" ] [ "aj" | "in" ] [ digit [ digit ] ]
//!           [ "sus" | "add" | "dim" | "aug" ] [ digit ]
//! ```
//!
//! A token must not be preceded by a word character (ASCII alphanumeric or
//! `_`) and must not be followed by a word character. A token that ends on
//! a note accidental must not be followed by `#` either (`C##`), while a
//! `#` after the quality starts an alteration left as text (`E7#9`).
//! Matching is greedy; a candidate whose longest form fails the trailing
//! boundary is rejected and stays plain text.

use crate::types::chord::ChordToken;
use crate::types::pitch::{Accidental, Letter, NoteSpelling};
use std::ops::Range;

const QUALITY_EXTENSIONS: [&str; 2] = ["aj", "in"];
const QUALITY_WORDS: [&str; 4] = ["sus", "add", "dim", "aug"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text outside any chord token, copied through verbatim.
    Text(&'a str),
    Chord {
        span: Range<usize>,
        source: &'a str,
        token: ChordToken,
    },
}

impl<'a> Segment<'a> {
    /// The input slice this segment covers.
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Text(text) => *text,
            Segment::Chord { source, .. } => *source,
        }
    }
}

/// Splits `text` into alternating plain-text and chord segments that cover
/// the input exactly once, in order.
pub struct Scanner<'a> {
    input: &'a str,
    position: usize,
    pending: Option<Segment<'a>>,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            pending: None,
        }
    }

    fn chord_at(&self, start: usize) -> Option<Segment<'a>> {
        let bytes = self.input.as_bytes();
        if start > 0 && is_word_byte(bytes[start - 1]) {
            return None;
        }
        let (end, token) = match_chord(bytes, start)?;
        Some(Segment::Chord {
            span: start..end,
            source: &self.input[start..end],
            token,
        })
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(segment) = self.pending.take() {
            return Some(segment);
        }

        let len = self.input.len();
        if self.position >= len {
            return None;
        }

        let start = self.position;
        for index in start..len {
            if let Some(chord) = self.chord_at(index) {
                if let Segment::Chord { span, .. } = &chord {
                    self.position = span.end;
                }
                if index == start {
                    return Some(chord);
                }
                self.pending = Some(chord);
                return Some(Segment::Text(&self.input[start..index]));
            }
        }

        self.position = len;
        Some(Segment::Text(&self.input[start..]))
    }
}

pub fn scan(text: &str) -> Vec<Segment<'_>> {
    Scanner::new(text).collect()
}

/// All chord tokens in `text`, in order of appearance.
pub fn chords(text: &str) -> impl Iterator<Item = ChordToken> + '_ {
    Scanner::new(text).filter_map(|segment| match segment {
        Segment::Chord { token, .. } => Some(token),
        Segment::Text(_) => None,
    })
}

/// Parses `text` as a single chord token with nothing around it.
pub fn parse_chord(text: &str) -> Option<ChordToken> {
    match match_chord(text.as_bytes(), 0) {
        Some((end, token)) if end == text.len() => Some(token),
        _ => None,
    }
}

fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

struct Cursor<'b> {
    bytes: &'b [u8],
    pos: usize,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn peek_at(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.pos + ahead).copied()
    }

    fn eat_if(&mut self, accept: impl Fn(u8) -> bool) -> bool {
        match self.peek() {
            Some(byte) if accept(byte) => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn eat_any(&mut self, words: &[&str]) -> bool {
        let rest = &self.bytes[self.pos..];
        match words.iter().find(|word| rest.starts_with(word.as_bytes())) {
            Some(word) => {
                self.pos += word.len();
                true
            }
            None => false,
        }
    }

    fn note(&mut self) -> Option<NoteSpelling> {
        let letter = Letter::from_char(self.peek()? as char)?;
        self.pos += 1;
        let accidental = match self.peek().and_then(|byte| Accidental::from_char(byte as char)) {
            Some(accidental) => {
                self.pos += 1;
                accidental
            }
            None => Accidental::Natural,
        };
        Some(NoteSpelling::new(letter, accidental))
    }
}

/// Longest chord starting at `start`, with its end offset. The leading
/// boundary is the caller's concern; the trailing one is checked here.
fn match_chord(bytes: &[u8], start: usize) -> Option<(usize, ChordToken)> {
    let mut cursor = Cursor { bytes, pos: start };
    let root = cursor.note()?;

    let quality_start = cursor.pos;
    cursor.eat_if(|b| b == b'm' || b == b'M');
    cursor.eat_any(&QUALITY_EXTENSIONS);
    if cursor.eat_if(|b| b.is_ascii_digit()) {
        cursor.eat_if(|b| b.is_ascii_digit());
    }
    cursor.eat_any(&QUALITY_WORDS);
    cursor.eat_if(|b| b.is_ascii_digit());
    let quality_end = cursor.pos;

    let bass = match (cursor.peek(), cursor.peek_at(1)) {
        (Some(b'/'), Some(next)) if Letter::from_char(next as char).is_some() => {
            cursor.pos += 1;
            cursor.note()
        }
        _ => None,
    };

    let ends_on_accidental = match bass {
        Some(bass) => bass.accidental != Accidental::Natural,
        None => quality_start == quality_end && root.accidental != Accidental::Natural,
    };
    if let Some(next) = cursor.peek() {
        if is_word_byte(next) || (next == b'#' && ends_on_accidental) {
            return None;
        }
    }

    // quality bytes are all ASCII
    let quality = String::from_utf8_lossy(&bytes[quality_start..quality_end]).into_owned();
    Some((cursor.pos, ChordToken::new(root, quality, bass)))
}
