//! ChordMark - chord sheet transposition library
//!
//! This library finds chord symbols in chord-notation text (or in `chordmark`
//! blocks of a Markdown note), moves them by a number of semitones while
//! keeping each chord's sharp/flat spelling and quality, and keeps the
//! interactive transpose state for a rendered sheet.

pub mod document;
pub mod error;
pub mod render;
pub mod scanner;
pub mod session;
pub mod transforms;
pub mod types;

#[cfg(test)]
mod util;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use document::{SourceFormat, transpose_document};
pub use error::{ChordmarkError, Result};
pub use render::{RenderOptions, SongRenderer};
pub use session::{RenderOutcome, TransposeSession};
pub use transforms::transpose::{transpose_chord, transpose_text};
pub use transforms::{BassPolicy, TransformDescriptor, TransposeOptions, apply_transforms};
pub use types::chord::ChordToken;
pub use types::offset::TransposeOffset;
pub use types::pitch::{NoteSpelling, PitchClass, SpellingStyle};
