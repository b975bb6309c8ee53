//! Longest-prefix matcher for multi-character substitutions.
//!
//! Compiled once per invocation from the effective multicharmap: keys are
//! encoded to UTF-16 unit sequences and grouped by unit length, so a probe
//! is one hash lookup per distinct length, longest first. Matching runs on
//! the raw unit suffix, before the reader commits to a single-character
//! step, so keys spanning several scalars (or a surrogate pair) match as
//! a unit.
//!
//! Tie-break: the longest key wins; two distinct keys of equal length
//! cannot match the same prefix, so no further ordering is needed.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub(crate) struct MultiMatcher {
    /// Distinct key lengths in units, longest first.
    lengths: Vec<usize>,
    map: HashMap<Vec<u16>, String>,
}

impl MultiMatcher {
    pub(crate) fn compile(entries: &HashMap<String, String>) -> Self {
        let mut map = HashMap::with_capacity(entries.len());
        let mut lengths: Vec<usize> = Vec::new();
        for (key, value) in entries {
            let units: Vec<u16> = key.encode_utf16().collect();
            if units.is_empty() {
                continue;
            }
            if !lengths.contains(&units.len()) {
                lengths.push(units.len());
            }
            map.insert(units, value.clone());
        }
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        Self { lengths, map }
    }

    /// Longest key matching the input at `i`, as `(replacement, advance)`
    /// where `advance` is the matched length in units.
    pub(crate) fn match_at(&self, units: &[u16], i: usize) -> Option<(&str, usize)> {
        for &len in &self.lengths {
            let end = i + len;
            if end > units.len() {
                continue;
            }
            if let Some(value) = self.map.get(&units[i..end]) {
                return Some((value.as_str(), len));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(entries: &[(&str, &str)]) -> MultiMatcher {
        let map: HashMap<String, String> = entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        MultiMatcher::compile(&map)
    }

    #[test]
    fn longest_key_wins() {
        let m = matcher(&[("ab", "short"), ("abc", "long")]);
        let units: Vec<u16> = "abcd".encode_utf16().collect();
        assert_eq!(m.match_at(&units, 0), Some(("long", 3)));
    }

    #[test]
    fn shorter_key_matches_when_longer_runs_past_the_end() {
        let m = matcher(&[("ab", "short"), ("abc", "long")]);
        let units: Vec<u16> = "ab".encode_utf16().collect();
        assert_eq!(m.match_at(&units, 0), Some(("short", 2)));
    }

    #[test]
    fn no_match_mid_input() {
        let m = matcher(&[("ab", "x")]);
        let units: Vec<u16> = "aab".encode_utf16().collect();
        assert_eq!(m.match_at(&units, 0), None);
        assert_eq!(m.match_at(&units, 1), Some(("x", 2)));
    }

    #[test]
    fn combining_sequence_matches_as_a_unit() {
        // bet + hiriq + yod shadows bet + hiriq.
        let m = matcher(&[("\u{05D1}\u{05B4}", "i2"), ("\u{05D1}\u{05B4}\u{05D9}", "i3")]);
        let three: Vec<u16> = "\u{05D1}\u{05B4}\u{05D9}".encode_utf16().collect();
        assert_eq!(m.match_at(&three, 0), Some(("i3", 3)));
        let two: Vec<u16> = "\u{05D1}\u{05B4}x".encode_utf16().collect();
        assert_eq!(m.match_at(&two, 0), Some(("i2", 2)));
    }

    #[test]
    fn key_spanning_a_surrogate_pair_counts_units() {
        let m = matcher(&[("😀!", "grin")]);
        let units: Vec<u16> = "😀!rest".encode_utf16().collect();
        // Pair is two units plus the bang.
        assert_eq!(m.match_at(&units, 0), Some(("grin", 3)));
    }

    #[test]
    fn empty_map_matches_nothing() {
        let m = matcher(&[]);
        let units: Vec<u16> = "abc".encode_utf16().collect();
        assert_eq!(m.match_at(&units, 0), None);
    }
}
