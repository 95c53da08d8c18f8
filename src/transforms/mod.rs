pub mod transpose;

use crate::document::{self, SourceFormat};
use std::borrow::Cow;

/// What to do with the note after a `/` in chords such as `G/B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BassPolicy {
    /// Move the bass note with the root, spelled in its own style.
    #[default]
    Transpose,
    /// Leave the bass note as written.
    Preserve,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransposeOptions {
    pub bass: BassPolicy,
}

#[derive(Debug, Clone, Default)]
pub struct TransformDescriptor {
    pub transpose_amount: i32,
    pub options: TransposeOptions,
    pub format: SourceFormat,
}

pub fn apply_transforms<'a>(source: &'a str, transforms: &TransformDescriptor) -> Cow<'a, str> {
    match transforms.format {
        SourceFormat::ChordText => {
            transpose::transform(source, transforms.transpose_amount, &transforms.options)
        }
        SourceFormat::Markdown => {
            document::transform(source, transforms.transpose_amount, &transforms.options)
        }
    }
}
