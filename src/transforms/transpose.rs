use crate::scanner::{Scanner, Segment};
use crate::transforms::{BassPolicy, TransposeOptions};
use crate::types::chord::ChordToken;
use std::borrow::Cow;

/// Moves a chord by `amount` semitones. Root and bass each keep their own
/// sharp/flat style. `None` if a note that has to move cannot be resolved.
pub fn transpose_chord(chord: &ChordToken, amount: i32, bass_policy: BassPolicy) -> Option<ChordToken> {
    let root = chord.root.transpose(amount)?;
    let bass = match (chord.bass, bass_policy) {
        (Some(bass), BassPolicy::Transpose) => Some(bass.transpose(amount)?),
        (bass, _) => bass,
    };
    Some(ChordToken {
        root,
        quality: chord.quality.clone(),
        bass,
    })
}

/// Transposes every chord token in `text`, copying everything else through
/// byte for byte. Zero returns the input without scanning.
pub fn transform<'a>(text: &'a str, amount: i32, options: &TransposeOptions) -> Cow<'a, str> {
    if amount == 0 {
        return Cow::Borrowed(text);
    }

    let mut output = String::with_capacity(text.len() + text.len() / 8);
    for segment in Scanner::new(text) {
        match segment {
            Segment::Text(plain) => output.push_str(plain),
            Segment::Chord { source, token, .. } => match transpose_chord(&token, amount, options.bass) {
                Some(moved) => {
                    log::trace!("{} -> {}", source, moved);
                    output.push_str(&moved.to_string());
                }
                None => {
                    log::debug!("Leaving unresolvable chord \"{}\" unchanged", source);
                    output.push_str(source);
                }
            },
        }
    }
    Cow::Owned(output)
}

/// Transposes chord-notation text with the default options.
pub fn transpose_text(text: &str, semitones: i32) -> Cow<'_, str> {
    transform(text, semitones, &TransposeOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::assert_eq_transformed;
    use pretty_assertions::assert_eq;

    fn up(text: &str, amount: i32) -> String {
        transpose_text(text, amount).into_owned()
    }

    #[test]
    fn test_transpose() {
        let input = r#"
[Verse 1]
C         G/B        Am    F
Ponho o meu chapéu e saio
Dm7 G7 Cmaj7
"#;
        let expected = r#"
[Verse 1]
D         A/C#        Bm    G
Ponho o meu chapéu e saio
Em7 A7 Dmaj7
"#;

        assert_eq_transformed(input, |text| up(text, 2), expected);
    }

    #[test]
    fn test_scenarios() {
        assert_eq!(up("C G/B Am F", 2), "D A/C# Bm G");
        assert_eq!(up("Dm7 G7 Cmaj7", -1), "C#m7 F#7 Bmaj7");
        assert_eq!(up("Bb", 3), "Db");
        assert_eq!(up("Bb Eb", 1), "B E");
        assert_eq!(up("Bb Eb Ab", 4), "D G C");
        assert_eq!(up("Bb Eb Ab", 6), "E A D");
        assert_eq!(up("Bb Eb Ab", -1), "A D G");
        assert_eq!(up("Bb Eb Ab", -3), "G C F");
        assert_eq!(up("Bb Eb Ab", 1), "B E A");
        assert_eq!(up("Bb Eb Ab", 2), "C F Bb");
        assert_eq!(up("E7#9", 2), "F#7#9");
        assert_eq!(up("Cmaj7#11", 2), "Dmaj7#11");
        assert_eq!(up("C7#9/G#", 2), "D7#9/A#");
        assert_eq!(up("A E7#9 Am", -2), "G D7#9 Gm");
    }

    #[test]
    fn test_zero_is_borrowed() {
        let text = "C G Am F";
        assert!(matches!(transpose_text(text, 0), Cow::Borrowed(t) if std::ptr::eq(t, text)));
    }

    #[test]
    fn test_octave_wraparound() {
        let text = "C C# Db D D# Eb E F F# Gb G G# Ab A A# Bb B";
        assert_eq!(up(text, 12), text);
        assert_eq!(up(text, -24), text);
        assert_eq!(up(text, 13), up(text, 1));
        assert_eq!(up(text, -13), up(text, -1));
        assert_eq!(up(text, -1), up(text, 11));
    }

    #[test]
    fn test_style_is_per_token() {
        assert_eq!(up("Bb A#", 3), "Db C#");
        assert_eq!(up("Gb/Bb F#/A#", 1), "G/B G/B");
        assert_eq!(up("D/F# Db/F", 1), "D#/G D/F#");
        assert_eq!(up("G/Bb", 1), "G#/B");
        assert_eq!(up("Eb/G", 1), "E/G#");
    }

    #[test]
    fn test_bass_policy() {
        let keep = TransposeOptions {
            bass: BassPolicy::Preserve,
        };
        assert_eq!(transform("C G/B Am F", 2, &keep), "D A/B Bm G");
        assert_eq!(transform("C/E#", 2, &keep), "D/E#");
        assert_eq!(transform("C/E#", 2, &TransposeOptions::default()), "C/E#");
    }

    #[test]
    fn test_suffixes_preserved() {
        assert_eq!(
            up("Csus4 C7sus4 Cadd9 Cdim7 Caug Cmin7 CM7 C13 C6/9", 5),
            "Fsus4 F7sus4 Fadd9 Fdim7 Faug Fmin7 FM7 F13 F6/9"
        );
    }

    #[test]
    fn test_unresolvable_pass_through() {
        assert_eq!(up("Cb Fbm7 E#/G B#", 2), "Cb Fbm7 E#/G B#");
        assert_eq!(up("Cb G", 2), "Cb A");
    }

    #[test]
    fn test_non_chord_text_untouched() {
        let text = "Am7b5 Cx Dog 123 **bold** <b>tag</b>\t\r\n  ~~ é ✓";
        assert_eq!(up(text, 7), text);
    }

    #[test]
    fn test_chordmark_syntax() {
        let input = "#v\nA.. D.. | E7. A.\n_Hey _Jude, don't make it _bad\n";
        let expected = "#v\nB.. E.. | F#7. B.\n_Hey _Jude, don't make it _bad\n";
        assert_eq!(up(input, 2), expected);
    }

    #[test]
    fn test_round_trip() {
        let text = "C G/B Am F\nDm7 G7 Cmaj7\nF#m C#sus4 G#dim";
        for amount in -14..=14 {
            assert_eq!(up(&up(text, amount), -amount), text, "amount {}", amount);
        }
    }

    #[test]
    fn test_transpose_chord() {
        let chord: ChordToken = "F#m7/C#".parse().unwrap();
        let moved = transpose_chord(&chord, -2, BassPolicy::Transpose).unwrap();
        assert_eq!(moved.to_string(), "Em7/B");
        let kept = transpose_chord(&chord, -2, BassPolicy::Preserve).unwrap();
        assert_eq!(kept.to_string(), "Em7/C#");
    }
}
