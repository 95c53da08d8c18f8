use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChordmarkError {
    /// A note name outside the canonical spelling set, e.g. `"Cb"` or `"H"`.
    #[error("Unknown note spelling \"{0}\"")]
    UnknownSpelling(String),

    /// Text that does not form a single chord token.
    #[error("Invalid chord \"{0}\"")]
    InvalidChord(String),

    /// Invalid transpose offset, e.g. `"+x"`.
    #[error("Invalid transpose offset \"{0}\"")]
    InvalidOffset(String),

    /// The song-formatting collaborator rejected the chord text.
    #[error("{0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, ChordmarkError>;
