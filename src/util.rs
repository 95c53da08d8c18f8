use pretty_assertions::assert_eq;

/// Runs `transform` on `input` and compares the result with `expected`
/// line by line, so a mismatch points at the offending line.
pub fn assert_eq_transformed(input: &str, transform: fn(&str) -> String, expected: &str) {
    let transformed = transform(input);
    let actual_lines: Vec<&str> = transformed.split('\n').collect();
    let expected_lines: Vec<&str> = expected.split('\n').collect();
    assert_eq!(
        actual_lines.len(),
        expected_lines.len(),
        "line count mismatch {} != {}, output={:?}",
        actual_lines.len(),
        expected_lines.len(),
        actual_lines,
    );
    for (index, (line, expected)) in actual_lines.iter().zip(expected_lines.iter()).enumerate() {
        assert_eq!(line, expected, "line #{}", index + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tests() {
        assert_eq_transformed("a\nb", |s| s.to_uppercase(), "A\nB");
        assert_eq_transformed("", |s| s.to_string(), "");
    }

    #[test]
    #[should_panic(expected = "line #2")]
    fn test_reports_line() {
        assert_eq_transformed("a\nb", |s| s.to_string(), "a\nc");
    }
}
