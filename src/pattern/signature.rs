// Tue Jan 13 2026 - Alex

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s").expect("static regex"));

pub fn strip_whitespace(line: &str) -> String {
    WHITESPACE.replace_all(line, "").into_owned()
}

/// Joins signature lines into compact pattern text, dropping all whitespace.
pub fn join_signature_lines<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines.into_iter()
        .map(|line| strip_whitespace(line.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{Pattern, PatternError};

    #[test]
    fn test_strip_whitespace() {
        assert_eq!(strip_whitespace(" 48 8B\t05 ?? \r\n"), "488B05??");
        assert_eq!(strip_whitespace(""), "");
    }

    #[test]
    fn test_join_lines() {
        let lines = ["48 89 5C 24 08", "  ?? ?? ", "C3"];
        assert_eq!(join_signature_lines(lines), "48895C2408????C3");
    }

    #[test]
    fn test_joined_lines_parse_as_pattern() {
        let pattern = Pattern::from_hex(&join_signature_lines(["48 8B", "?? C3"])).unwrap();
        assert_eq!(pattern.bytes(), &[Some(0x48), Some(0x8B), None, Some(0xC3)]);

        assert_eq!(
            Pattern::from_hex(&join_signature_lines(["48 8", "B C3 G"])),
            Err(PatternError::OddLength(7))
        );
        assert_eq!(Pattern::from_hex(&join_signature_lines(["   "])), Err(PatternError::Empty));
    }
}
