// Tue Jan 13 2026 - Alex

use crate::pattern::Pattern;

/// Every offset in `data` where `pattern` matches, ascending.
pub fn scan(data: &[u8], pattern: &Pattern) -> Vec<usize> {
    let mut results = Vec::new();

    if pattern.is_empty() || data.len() < pattern.len() {
        return results;
    }

    let last = data.len() - pattern.len();

    match pattern.first_significant() {
        Some((anchor, anchor_byte)) => {
            for offset in 0..=last {
                if data[offset + anchor] == anchor_byte && pattern.matches(&data[offset..]) {
                    results.push(offset);
                }
            }
        }
        None => results.extend(0..=last),
    }

    results
}

/// The single offset where `pattern` matches, or the number of matches seen.
pub fn find_unique(data: &[u8], pattern: &Pattern) -> Result<usize, usize> {
    match scan(data, pattern).as_slice() {
        [offset] => Ok(*offset),
        matches => Err(matches.len()),
    }
}
