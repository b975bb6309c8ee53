//! Reader-only diagnostic trace.
//!
//! With `debug` set, a call bypasses the pipeline and returns two lines:
//! the input itself and the reader's decomposition of it as a JSON-style
//! nested list: logical characters grouped into words split on every
//! U+0020 space, each listed as its numeric code point. Valid surrogate
//! pairs appear as one supplementary code point; lone surrogates as their
//! own unit value (the space substitution is pipeline policy, not part of
//! the decomposition). The trace consumes the same reader as the pipeline,
//! so surrogate handling stays independently testable.

use crate::reader::logical_chars;

pub(crate) fn trace(units: &[u16]) -> String {
    let mut words: Vec<Vec<u32>> = vec![Vec::new()];
    for wc in logical_chars(units) {
        if wc.code_point == u32::from(b' ') {
            words.push(Vec::new());
        } else if let Some(word) = words.last_mut() {
            word.push(wc.code_point);
        }
    }

    let mut out = String::from("STRING: ");
    out.push_str(&String::from_utf16_lossy(units));
    out.push_str("\nCODEPOINTS: [");
    for (wi, word) in words.iter().enumerate() {
        if wi > 0 {
            out.push(',');
        }
        out.push('[');
        for (ci, code_point) in word.iter().enumerate() {
            if ci > 0 {
                out.push(',');
            }
            out.push_str(&code_point.to_string());
        }
        out.push(']');
    }
    out.push(']');
    out
}
