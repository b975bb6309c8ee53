//! Unicode-to-slug transliteration engine.
//!
//! Converts arbitrary Unicode text into a canonical, URL-safe slug: a
//! lowercase (by default), hyphen-delimited sequence of ASCII tokens.
//!
//! Contract:
//! - Total: `slug` never panics and never fails, for well-formed strings,
//!   malformed UTF-16 (`slug_utf16` tolerates lone surrogates), and any
//!   recognized or unrecognized locale/mode value.
//! - Deterministic: inputs that transliterate to nothing fall back to a
//!   base64-derived identifier unless the fallback is disabled.
//! - Configuration layers per call: global defaults → mode preset →
//!   locale overlay → call options; an invocation never mutates shared
//!   state, so concurrent calls against a stable store are safe.
//!
//! ```
//! assert_eq!(slug::slug("Déjà vu"), "deja-vu");
//! assert_eq!(slug::slug_with("foo bar", "_"), "foo_bar");
//! ```

mod debug;
mod error;
mod fallback;
mod matcher;
mod options;
mod pipeline;
mod reader;
mod store;

pub use error::OptionsError;
pub use options::{Mode, SlugOptions};
pub use store::{ModePreset, ModePresets, SlugDefaults, SlugStore, store, store_mut};

use options::resolve;
use pipeline::{collapse, transliterate};

/// Slug `input` with the process-wide defaults.
pub fn slug(input: &str) -> String {
    let units: Vec<u16> = input.encode_utf16().collect();
    slug_units(&units, None)
}

/// Slug `input` with per-call options. A bare `&str` is shorthand for
/// "replace separators with that string".
pub fn slug_with(input: &str, options: impl Into<SlugOptions>) -> String {
    let options = options.into();
    let units: Vec<u16> = input.encode_utf16().collect();
    slug_units(&units, Some(&options))
}

/// Slug a raw UTF-16 unit sequence, tolerating lone and invalid
/// surrogates (each is treated as a single space).
pub fn slug_utf16(units: &[u16]) -> String {
    slug_units(units, None)
}

/// `slug_utf16` with per-call options.
pub fn slug_utf16_with(units: &[u16], options: impl Into<SlugOptions>) -> String {
    let options = options.into();
    slug_units(units, Some(&options))
}

/// Merge entries into the process-wide base maps: one-logical-character
/// keys update the charmap, longer keys the multicharmap.
pub fn extend<K, V, I>(map: I)
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    store_mut().extend(map);
}

/// Set the process-wide default locale; unrecognized codes are silently
/// ignored.
pub fn set_locale(code: &str) {
    store_mut().set_locale(code);
}

/// Restore the process-wide store to its embedded-data state.
pub fn reset() {
    store_mut().reset();
}

fn slug_units(units: &[u16], options: Option<&SlugOptions>) -> String {
    let cfg = {
        let guard = store();
        resolve(&guard, options)
    };
    if cfg.debug {
        return debug::trace(units);
    }
    let mut result = collapse(&transliterate(units, &cfg), &cfg);
    if result.is_empty() && cfg.fallback && !units.is_empty() {
        tracing::debug!(target: "slug::pipeline", len = units.len(), "fallback_engaged");
        result = fallback::encode_sanitized(units, &cfg);
    }
    if cfg.lower {
        result = result.to_lowercase();
    }
    result
}
