use chordmark::types::pitch::{PitchClass, resolve, spell};
use chordmark::{BassPolicy, TransposeOptions, transpose_text};
use proptest::prelude::*;

const CANONICAL: [&str; 17] = [
    "C", "C#", "Db", "D", "D#", "Eb", "E", "F", "F#", "Gb", "G", "G#", "Ab", "A", "A#", "Bb", "B",
];
const SHARP_ROOTS: [&str; 12] = ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];
const QUALITIES: [&str; 12] = ["", "m", "7", "m7", "maj7", "M7", "sus4", "7sus4", "add9", "dim", "aug", "13"];
const FILLERS: [&str; 8] = [" ", "  ", "\n", " | ", ". ", "\nla la la\n", " (x2) ", "\t"];

fn arb_chord() -> impl Strategy<Value = String> {
    (
        prop::sample::select(SHARP_ROOTS.to_vec()),
        prop::sample::select(QUALITIES.to_vec()),
        prop::option::of(prop::sample::select(SHARP_ROOTS.to_vec())),
    )
        .prop_map(|(root, quality, bass)| match bass {
            Some(bass) => format!("{}{}/{}", root, quality, bass),
            None => format!("{}{}", root, quality),
        })
}

/// Chord sheets spelled with sharps and naturals only.
fn arb_sheet() -> impl Strategy<Value = String> {
    prop::collection::vec((arb_chord(), prop::sample::select(FILLERS.to_vec())), 0..24).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(chord, filler)| format!("{}{}", chord, filler))
            .collect::<String>()
    })
}

/// Arbitrary text made only of characters that can never start a chord.
fn arb_prose() -> impl Strategy<Value = String> {
    "[a-z0-9 ,.!?'\\n\\t\\-_#/éçã]{0,80}"
}

proptest! {
    #[test]
    fn prop_spelling_round_trips(root in prop::sample::select(CANONICAL.to_vec()), shift in any::<i32>(), flat in any::<bool>()) {
        let moved = resolve(root).unwrap().transpose(shift);
        prop_assert_eq!(resolve(&spell(moved, flat).to_string()), Some(moved));
    }

    #[test]
    fn prop_shift_is_euclidean(value in 0u8..12, shift in any::<i32>()) {
        let pitch = PitchClass::from_semitones(value as i32);
        let expected = ((value as i64 + shift as i64) % 12 + 12) % 12;
        prop_assert_eq!(pitch.transpose(shift).value() as i64, expected);
    }

    #[test]
    fn prop_identity(text in ".{0,200}") {
        prop_assert_eq!(transpose_text(&text, 0), text.as_str());
    }

    #[test]
    fn prop_round_trip(sheet in arb_sheet(), shift in -50i32..50) {
        let there = transpose_text(&sheet, shift).into_owned();
        prop_assert_eq!(transpose_text(&there, -shift), sheet.as_str());
    }

    #[test]
    fn prop_composes(sheet in arb_sheet(), first in -30i32..30, second in -30i32..30) {
        let twice = transpose_text(&transpose_text(&sheet, first), second).into_owned();
        prop_assert_eq!(transpose_text(&sheet, first + second), twice.as_str());
    }

    #[test]
    fn prop_octaves_are_identity(sheet in arb_sheet(), octaves in -5i32..5, shift in -11i32..12) {
        prop_assert_eq!(transpose_text(&sheet, octaves * 12), sheet.as_str());
        prop_assert_eq!(
            transpose_text(&sheet, octaves * 12 + shift),
            transpose_text(&sheet, shift)
        );
    }

    #[test]
    fn prop_prose_untouched(text in arb_prose(), shift in any::<i32>()) {
        prop_assert_eq!(transpose_text(&text, shift), text.as_str());
    }

    #[test]
    fn prop_line_structure_kept(sheet in arb_sheet(), shift in -11i32..12) {
        let options = TransposeOptions { bass: BassPolicy::Preserve };
        let moved = chordmark::transforms::transpose::transform(&sheet, shift, &options);
        let lines_before = sheet.lines().count();
        prop_assert_eq!(moved.lines().count(), lines_before);
    }
}
