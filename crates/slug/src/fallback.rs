//! Deterministic fallback encoding for inputs that transliterate to
//! nothing.
//!
//! Contract:
//! - `encode_sanitized` base64-encodes the UTF-8 bytes of the sanitized
//!   input (the reader's output, lone surrogates already replaced by
//!   spaces) and runs the ordinary pipeline once over the encoded text, so
//!   padding and non-slug symbols (`+`, `/`, `=`) are stripped and the
//!   caller's lowercasing applies downstream.
//! - Never recurses: if the second pass also comes back empty, empty is
//!   the answer.
//! - Deterministic and documented as non-invertible beyond the encoding
//!   step.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::options::Effective;
use crate::pipeline::{collapse, transliterate};
use crate::reader::logical_chars;

/// Standard base64 of raw bytes, padding included; the pipeline strips the
/// non-slug symbols afterwards. Kept separate so the encoding can be
/// checked in isolation.
pub(crate) fn encode_bytes(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Encode the sanitized input and slug the encoded text.
pub(crate) fn encode_sanitized(units: &[u16], cfg: &Effective) -> String {
    let sanitized: String = logical_chars(units).map(|wc| wc.ch).collect();
    let encoded = encode_bytes(sanitized.as_bytes());
    let encoded_units: Vec<u16> = encoded.encode_utf16().collect();
    collapse(&transliterate(&encoded_units, cfg), cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::resolve;
    use crate::store::SlugStore;

    #[test]
    fn encoding_matches_standard_base64() {
        assert_eq!(encode_bytes(b"=)"), "PSk=");
        assert_eq!(encode_bytes(" ".as_bytes()), "IA==");
        assert_eq!(encode_bytes("鳄梨".as_bytes()), "6bOE5qKo");
        assert_eq!(encode_bytes(b""), "");
    }

    #[test]
    fn sanitized_encoding_strips_padding_and_symbols() {
        let store = SlugStore::from_embedded_defaults();
        let cfg = resolve(&store, None);
        let units: Vec<u16> = "=)".encode_utf16().collect();
        assert_eq!(encode_sanitized(&units, &cfg), "PSk");
    }

    #[test]
    fn lone_surrogates_encode_as_their_space_substitute() {
        let store = SlugStore::from_embedded_defaults();
        let cfg = resolve(&store, None);
        assert_eq!(encode_sanitized(&[0xDD8A], &cfg), "IA");
        assert_eq!(encode_sanitized(&[0xD800], &cfg), "IA");
    }

    #[test]
    fn empty_input_stays_empty() {
        let store = SlugStore::from_embedded_defaults();
        let cfg = resolve(&store, None);
        assert_eq!(encode_sanitized(&[], &cfg), "");
    }
}
