//! Python bindings for the chordmark library using PyO3

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use crate::document;
use crate::session::TransposeSession as RustTransposeSession;
use crate::transforms::{BassPolicy, TransposeOptions, transpose};
use crate::types::chord::ChordToken;

pyo3::create_exception!(chordmark, ParseError, PyValueError);

fn options(keep_bass: bool) -> TransposeOptions {
    TransposeOptions {
        bass: if keep_bass {
            BassPolicy::Preserve
        } else {
            BassPolicy::Transpose
        },
    }
}

/// Transpose state for one chord sheet
#[pyclass(name = "TransposeSession")]
#[derive(Clone)]
pub struct PyTransposeSession {
    inner: RustTransposeSession,
}

#[pymethods]
impl PyTransposeSession {
    #[new]
    #[pyo3(signature = (source, keep_bass=false))]
    fn new(source: String, keep_bass: bool) -> Self {
        PyTransposeSession {
            inner: RustTransposeSession::new(source).with_options(options(keep_bass)),
        }
    }

    #[staticmethod]
    #[pyo3(signature = (path, keep_bass=false))]
    fn from_file(path: &str, keep_bass: bool) -> PyResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PyIOError::new_err(format!("Failed to read file '{}': {}", path, e)))?;
        Ok(Self::new(content, keep_bass))
    }

    fn up(&mut self) -> i32 {
        self.inner.up().semitones()
    }

    fn down(&mut self) -> i32 {
        self.inner.down().semitones()
    }

    fn reset(&mut self) -> i32 {
        self.inner.reset().semitones()
    }

    fn transposed(&self) -> String {
        self.inner.transposed().into_owned()
    }

    #[getter]
    fn offset(&self) -> i32 {
        self.inner.offset().semitones()
    }

    #[getter]
    fn label(&self) -> String {
        self.inner.label()
    }

    #[getter]
    fn source(&self) -> String {
        self.inner.source().to_string()
    }

    fn __str__(&self) -> String {
        self.transposed()
    }

    fn __repr__(&self) -> String {
        format!(
            "TransposeSession(offset={}, length={})",
            self.offset(),
            self.inner.source().len()
        )
    }
}

/// Transpose chord-notation text
///
/// Example:
///     chordmark.transpose_text("C G/B Am F", 2)  # 'D A/C# Bm G'
#[pyfunction]
#[pyo3(signature = (text, semitones, keep_bass=false))]
fn transpose_text(text: &str, semitones: i32, keep_bass: bool) -> String {
    transpose::transform(text, semitones, &options(keep_bass)).into_owned()
}

/// Transpose the chordmark blocks of a Markdown document
#[pyfunction]
#[pyo3(signature = (markdown, semitones, keep_bass=false))]
fn transpose_document(markdown: &str, semitones: i32, keep_bass: bool) -> String {
    document::transform(markdown, semitones, &options(keep_bass)).into_owned()
}

/// Split a chord symbol into (root, quality, bass)
///
/// Raises ParseError if the text is not a single chord.
#[pyfunction]
fn parse_chord(text: &str) -> PyResult<(String, String, Option<String>)> {
    let chord: ChordToken = text.parse().map_err(|e| ParseError::new_err(format!("{}", e)))?;
    Ok((
        chord.root.to_string(),
        chord.quality,
        chord.bass.map(|bass| bass.to_string()),
    ))
}

/// ChordMark chord sheet transposition
///
/// Example:
///     session = chordmark.TransposeSession("C G Am F")
///     session.up()
///     print(session.label, session.transposed())
#[pymodule]
fn chordmark(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTransposeSession>()?;
    m.add_function(wrap_pyfunction!(transpose_text, m)?)?;
    m.add_function(wrap_pyfunction!(transpose_document, m)?)?;
    m.add_function(wrap_pyfunction!(parse_chord, m)?)?;

    m.add("ParseError", m.py().get_type::<ParseError>())?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
