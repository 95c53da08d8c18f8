use crate::error::ChordmarkError;

/// Which parts of the song the formatter should print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartType {
    /// Lyrics with chords.
    #[default]
    Complete,
    /// Lyrics only.
    Lyrics,
    /// Chords only, as a lead sheet.
    Chords,
}

/// When chord durations are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChordDuration {
    #[default]
    Auto,
    Never,
    Always,
}

/// Layout settings handed through to the song formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub align_bars: bool,
    pub align_chords_with_lyrics: bool,
    pub print_chords_duration: ChordDuration,
    pub chart_type: ChartType,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            align_bars: true,
            align_chords_with_lyrics: true,
            print_chords_duration: ChordDuration::Auto,
            chart_type: ChartType::Complete,
        }
    }
}

/// Turns chord-notation text into a display representation.
///
/// The layout itself lives outside this crate; implementors wrap whatever
/// song formatter the host uses and report parse rejections as
/// [`ChordmarkError::Render`].
pub trait SongRenderer {
    fn render(&self, source: &str, options: &RenderOptions) -> Result<String, ChordmarkError>;
}

impl<F> SongRenderer for F
where
    F: Fn(&str, &RenderOptions) -> Result<String, ChordmarkError>,
{
    fn render(&self, source: &str, options: &RenderOptions) -> Result<String, ChordmarkError> {
        self(source, options)
    }
}

/// Passes the chord text through as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl SongRenderer for PlainRenderer {
    fn render(&self, source: &str, _options: &RenderOptions) -> Result<String, ChordmarkError> {
        Ok(source.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = RenderOptions::default();
        assert!(options.align_bars);
        assert!(options.align_chords_with_lyrics);
        assert_eq!(options.print_chords_duration, ChordDuration::Auto);
        assert_eq!(options.chart_type, ChartType::Complete);
    }

    #[test]
    fn test_plain_renderer() {
        let rendered = PlainRenderer.render("C G\nla la", &RenderOptions::default());
        assert_eq!(rendered, Ok("C G\nla la".to_string()));
    }

    #[test]
    fn test_closure_renderer() {
        let lead_sheet_only = |source: &str, options: &RenderOptions| {
            if options.chart_type == ChartType::Chords {
                Ok(source.to_uppercase())
            } else {
                Err(ChordmarkError::Render("unsupported chart".to_string()))
            }
        };
        let options = RenderOptions {
            chart_type: ChartType::Chords,
            ..Default::default()
        };
        assert_eq!(lead_sheet_only.render("am", &options), Ok("AM".to_string()));
        assert!(lead_sheet_only.render("am", &RenderOptions::default()).is_err());
    }
}
