//! Chord sheets embedded in Markdown notes as fenced `chordmark` blocks.

use crate::transforms::TransposeOptions;
use crate::transforms::transpose;
use std::borrow::Cow;
use std::ops::Range;

/// Info-string language that marks a chord sheet block.
pub const CHORDMARK_LANGUAGE: &str = "chordmark";

/// How an input is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceFormat {
    /// The whole input is chord-notation text.
    #[default]
    ChordText,
    /// Markdown; only `chordmark` blocks hold chord notation.
    Markdown,
}

impl SourceFormat {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "md" | "markdown" => Some(SourceFormat::Markdown),
            "chordmark" | "cm" | "txt" => Some(SourceFormat::ChordText),
            _ => None,
        }
    }
}

/// A fenced code block. Line numbers are 0-based and point at the fence
/// lines; for an unclosed block `line_end` is the last line of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock<'a> {
    pub language: &'a str,
    pub line_start: usize,
    pub line_end: usize,
    pub content: &'a str,
    pub content_span: Range<usize>,
    pub closed: bool,
}

struct Fence<'a> {
    marker: u8,
    len: usize,
    info: &'a str,
}

impl<'a> Fence<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        let body = line.trim_end_matches(['\n', '\r']);
        let unindented = body.trim_start_matches(' ');
        if body.len() - unindented.len() > 3 {
            return None;
        }

        let marker = *unindented.as_bytes().first()?;
        if marker != b'`' && marker != b'~' {
            return None;
        }
        let len = unindented.bytes().take_while(|&b| b == marker).count();
        if len < 3 {
            return None;
        }

        let info = unindented[len..].trim();
        if marker == b'`' && info.contains('`') {
            return None;
        }
        Some(Self { marker, len, info })
    }

    fn is_closed_by(&self, line: &str) -> bool {
        matches!(
            Fence::parse(line),
            Some(fence) if fence.marker == self.marker && fence.len >= self.len && fence.info.is_empty()
        )
    }

    fn language(&self) -> &'a str {
        self.info.split_whitespace().next().unwrap_or("")
    }
}

struct OpenBlock<'a> {
    fence: Fence<'a>,
    line_start: usize,
    content_start: usize,
}

/// Every fenced code block in `markdown`, whatever its language.
pub fn fenced_blocks(markdown: &str) -> Vec<CodeBlock<'_>> {
    let mut blocks = Vec::new();
    let mut open: Option<OpenBlock<'_>> = None;
    let mut offset = 0;
    let mut last_line = 0;

    for (index, line) in markdown.split_inclusive('\n').enumerate() {
        let line_start_offset = offset;
        offset += line.len();
        last_line = index;

        match open.take() {
            None => {
                open = Fence::parse(line).map(|fence| OpenBlock {
                    fence,
                    line_start: index,
                    content_start: offset,
                });
            }
            Some(current) if current.fence.is_closed_by(line) => {
                let span = current.content_start..line_start_offset;
                blocks.push(CodeBlock {
                    language: current.fence.language(),
                    line_start: current.line_start,
                    line_end: index,
                    content: &markdown[span.clone()],
                    content_span: span,
                    closed: true,
                });
            }
            Some(current) => open = Some(current),
        }
    }

    if let Some(current) = open {
        let span = current.content_start..markdown.len();
        blocks.push(CodeBlock {
            language: current.fence.language(),
            line_start: current.line_start,
            line_end: last_line,
            content: &markdown[span.clone()],
            content_span: span,
            closed: false,
        });
    }

    blocks
}

/// The `chordmark` blocks of `markdown`.
pub fn blocks(markdown: &str) -> Vec<CodeBlock<'_>> {
    fenced_blocks(markdown)
        .into_iter()
        .filter(|block| block.language == CHORDMARK_LANGUAGE)
        .collect()
}

/// Transposes the content of every `chordmark` block, leaving the rest of
/// the document untouched.
pub fn transform<'a>(markdown: &'a str, amount: i32, options: &TransposeOptions) -> Cow<'a, str> {
    if amount == 0 {
        return Cow::Borrowed(markdown);
    }

    let chord_blocks = blocks(markdown);
    if chord_blocks.is_empty() {
        return Cow::Borrowed(markdown);
    }

    let mut output = String::with_capacity(markdown.len() + markdown.len() / 8);
    let mut copied = 0;
    for block in &chord_blocks {
        log::debug!(
            "Transposing chordmark block at lines {}..={} by {}",
            block.line_start + 1,
            block.line_end + 1,
            amount
        );
        output.push_str(&markdown[copied..block.content_span.start]);
        output.push_str(&transpose::transform(block.content, amount, options));
        copied = block.content_span.end;
    }
    output.push_str(&markdown[copied..]);
    Cow::Owned(output)
}

/// [`transform`] with the default options.
pub fn transpose_document(markdown: &str, semitones: i32) -> Cow<'_, str> {
    transform(markdown, semitones, &TransposeOptions::default())
}
