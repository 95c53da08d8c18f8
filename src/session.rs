//! Interactive transpose state for one rendered chord sheet.
//!
//! The session keeps the source exactly as written and an absolute offset.
//! Every render transposes the original source by the full offset, so
//! stepping up and back down always lands on the original text.

use crate::render::{RenderOptions, SongRenderer};
use crate::transforms::TransposeOptions;
use crate::transforms::transpose;
use crate::types::offset::TransposeOffset;
use std::borrow::Cow;

/// Result of rendering the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Song(String),
    /// Inline message shown in place of the song.
    Error(String),
}

impl RenderOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, RenderOutcome::Error(_))
    }
}

#[derive(Debug, Clone)]
pub struct TransposeSession {
    source: String,
    offset: TransposeOffset,
    pub options: TransposeOptions,
    pub render_options: RenderOptions,
}

impl TransposeSession {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            offset: TransposeOffset::ORIGINAL,
            options: TransposeOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: TransposeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_render_options(mut self, render_options: RenderOptions) -> Self {
        self.render_options = render_options;
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn offset(&self) -> TransposeOffset {
        self.offset
    }

    pub fn up(&mut self) -> TransposeOffset {
        self.set_offset(self.offset.increment())
    }

    pub fn down(&mut self) -> TransposeOffset {
        self.set_offset(self.offset.decrement())
    }

    pub fn reset(&mut self) -> TransposeOffset {
        self.set_offset(self.offset.reset())
    }

    fn set_offset(&mut self, offset: TransposeOffset) -> TransposeOffset {
        log::debug!("Transpose offset {} -> {}", self.offset, offset);
        self.offset = offset;
        offset
    }

    /// `"Original"`, `"+N"` or `"-N"`.
    pub fn label(&self) -> String {
        self.offset.label()
    }

    /// The original source transposed by the current absolute offset.
    pub fn transposed(&self) -> Cow<'_, str> {
        transpose::transform(&self.source, self.offset.semitones(), &self.options)
    }

    pub fn render<R: SongRenderer + ?Sized>(&self, renderer: &R) -> RenderOutcome {
        match renderer.render(&self.transposed(), &self.render_options) {
            Ok(song) => RenderOutcome::Song(song),
            Err(e) => {
                log::warn!("Failed to render chord sheet at offset {}: {}", self.offset, e);
                RenderOutcome::Error(format!("Error rendering: {}", e))
            }
        }
    }
}
