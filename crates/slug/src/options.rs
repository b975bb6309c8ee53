//! Call options and the configuration resolver.
//!
//! Contract:
//! - `resolve` is a pure function from a store snapshot plus optional call
//!   options to one `Effective` configuration; it never mutates the store
//!   or the caller's options.
//! - Layering, later layers overriding earlier ones: hard-coded defaults →
//!   mode preset → locale overlay → call options. Map-typed fields merge
//!   key-by-key (the later layer wins per key); scalar fields replace
//!   outright when present.
//! - A bare `&str` converts into options carrying only a replacement, the
//!   shorthand for "same defaults, different separator".

use std::collections::HashMap;

use regex::Regex;

use crate::error::OptionsError;
use crate::matcher::MultiMatcher;
use crate::store::SlugStore;

const DEFAULT_REPLACEMENT: &str = "-";

/// Output policy: which characters beyond ASCII alphanumerics and the
/// replacement survive untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Permits `.`, `_`, and `~` (the RFC 3986 unreserved marks).
    Rfc3986,
    /// Strips all punctuation; the default mode.
    Pretty,
}

impl Mode {
    /// Parse a mode code. Unrecognized codes yield `None`; callers fall
    /// back to the store's default mode rather than failing.
    pub fn parse(code: &str) -> Option<Mode> {
        match code {
            "rfc3986" => Some(Mode::Rfc3986),
            "pretty" => Some(Mode::Pretty),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Rfc3986 => "rfc3986",
            Mode::Pretty => "pretty",
        }
    }
}

/// Per-call options. Every field is optional; `None` defers to the store
/// and the active mode preset.
#[derive(Debug, Clone, Default)]
pub struct SlugOptions {
    pub replacement: Option<String>,
    /// Extra charmap entries merged over the accumulated map.
    pub charmap: Option<HashMap<char, String>>,
    /// Extra multicharmap entries merged over the accumulated map.
    pub multicharmap: Option<HashMap<String, String>>,
    /// Per-character removal predicate.
    pub remove: Option<Regex>,
    pub lower: Option<bool>,
    pub trim: Option<bool>,
    pub mode: Option<Mode>,
    pub locale: Option<String>,
    pub fallback: Option<bool>,
    /// Bypass the pipeline and return the reader trace (see `debug`).
    pub debug: Option<bool>,
}

impl SlugOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile `pattern` as the removal predicate.
    pub fn remove_pattern(mut self, pattern: &str) -> Result<Self, OptionsError> {
        self.remove = Some(Regex::new(pattern)?);
        Ok(self)
    }
}

impl From<&str> for SlugOptions {
    fn from(replacement: &str) -> Self {
        Self {
            replacement: Some(replacement.to_string()),
            ..Self::default()
        }
    }
}

impl From<String> for SlugOptions {
    fn from(replacement: String) -> Self {
        Self {
            replacement: Some(replacement),
            ..Self::default()
        }
    }
}

/// One invocation's fully-resolved configuration.
#[derive(Debug, Clone)]
pub(crate) struct Effective {
    pub replacement: String,
    /// The replacement as a separator class, when it is exactly one
    /// character; input equal to it folds into separator runs.
    pub sep_char: Option<char>,
    pub charmap: HashMap<char, String>,
    pub matcher: MultiMatcher,
    pub remove: Option<Regex>,
    pub lower: bool,
    pub trim: bool,
    pub fallback: bool,
    pub debug: bool,
    /// The mode's extra pass-through characters.
    pub allowed: Vec<char>,
}

/// Layer the store snapshot, the active mode preset, the locale overlay,
/// and the call options into one effective configuration.
pub(crate) fn resolve(store: &SlugStore, options: Option<&SlugOptions>) -> Effective {
    let mode = options
        .and_then(|o| o.mode)
        .unwrap_or(store.defaults.mode);
    let preset = store.defaults.modes.preset(mode);

    let mut charmap = store.charmap.clone();
    for (key, value) in &preset.charmap {
        charmap.insert(*key, value.clone());
    }

    let mut multicharmap = store.multicharmap.clone();
    for (key, value) in &preset.multicharmap {
        multicharmap.insert(key.clone(), value.clone());
    }

    // The call-supplied locale wins outright; an unrecognized call value
    // suppresses the overlay rather than falling back to the default.
    let locale = options
        .and_then(|o| o.locale.as_deref())
        .or(store.locale.as_deref());
    if let Some(overlay) = locale.and_then(slug_charmap::locale_overlay) {
        for (key, value) in overlay {
            charmap.insert(*key, (*value).to_string());
        }
    }

    if let Some(call) = options.and_then(|o| o.charmap.as_ref()) {
        for (key, value) in call {
            charmap.insert(*key, value.clone());
        }
    }
    if let Some(call) = options.and_then(|o| o.multicharmap.as_ref()) {
        for (key, value) in call {
            multicharmap.insert(key.clone(), value.clone());
        }
    }

    let replacement = options
        .and_then(|o| o.replacement.clone())
        .or_else(|| preset.replacement.clone())
        .unwrap_or_else(|| DEFAULT_REPLACEMENT.to_string());
    let sep_char = if replacement.chars().count() == 1 {
        replacement.chars().next()
    } else {
        None
    };

    Effective {
        sep_char,
        replacement,
        charmap,
        matcher: MultiMatcher::compile(&multicharmap),
        remove: options.and_then(|o| o.remove.clone()),
        lower: options
            .and_then(|o| o.lower)
            .or(preset.lower)
            .unwrap_or(true),
        trim: options
            .and_then(|o| o.trim)
            .or(preset.trim)
            .unwrap_or(true),
        fallback: options
            .and_then(|o| o.fallback)
            .unwrap_or(store.defaults.fallback),
        debug: options.and_then(|o| o.debug).unwrap_or(false),
        allowed: preset.allowed.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SlugStore {
        SlugStore::from_embedded_defaults()
    }

    #[test]
    fn defaults_resolve_without_options() {
        let cfg = resolve(&store(), None);
        assert_eq!(cfg.replacement, "-");
        assert_eq!(cfg.sep_char, Some('-'));
        assert!(cfg.lower);
        assert!(cfg.trim);
        assert!(cfg.fallback);
        assert!(!cfg.debug);
        assert!(cfg.allowed.is_empty());
        assert_eq!(cfg.charmap.get(&'Ö').map(String::as_str), Some("O"));
    }

    #[test]
    fn replacement_shorthand_converts() {
        let opts = SlugOptions::from("_");
        let cfg = resolve(&store(), Some(&opts));
        assert_eq!(cfg.replacement, "_");
        assert_eq!(cfg.sep_char, Some('_'));
        // Everything else stays at defaults.
        assert!(cfg.lower && cfg.trim && cfg.fallback);
    }

    #[test]
    fn empty_replacement_has_no_separator_class() {
        let cfg = resolve(&store(), Some(&SlugOptions::from("")));
        assert_eq!(cfg.replacement, "");
        assert_eq!(cfg.sep_char, None);
    }

    #[test]
    fn rfc3986_mode_carries_allowed_extras() {
        let opts = SlugOptions {
            mode: Some(Mode::Rfc3986),
            ..SlugOptions::default()
        };
        let cfg = resolve(&store(), Some(&opts));
        assert_eq!(cfg.allowed, vec!['.', '_', '~']);
    }

    #[test]
    fn locale_overlay_merges_over_base() {
        let opts = SlugOptions {
            locale: Some("de".to_string()),
            ..SlugOptions::default()
        };
        let cfg = resolve(&store(), Some(&opts));
        assert_eq!(cfg.charmap.get(&'Ö').map(String::as_str), Some("OE"));
        // Untouched base entries survive the overlay.
        assert_eq!(cfg.charmap.get(&'É').map(String::as_str), Some("E"));
    }

    #[test]
    fn unrecognized_call_locale_suppresses_the_default_overlay() {
        let mut s = store();
        s.set_locale("de");
        let opts = SlugOptions {
            locale: Some("fhqwhgads".to_string()),
            ..SlugOptions::default()
        };
        let cfg = resolve(&s, Some(&opts));
        assert_eq!(cfg.charmap.get(&'Ö').map(String::as_str), Some("O"));
    }

    #[test]
    fn call_charmap_wins_per_key() {
        let opts = SlugOptions {
            charmap: Some(HashMap::from([('Ö', "0".to_string())])),
            ..SlugOptions::default()
        };
        let cfg = resolve(&store(), Some(&opts));
        assert_eq!(cfg.charmap.get(&'Ö').map(String::as_str), Some("0"));
        assert_eq!(cfg.charmap.get(&'ö').map(String::as_str), Some("o"));
    }

    #[test]
    fn options_value_is_not_consumed_by_resolution() {
        let opts = SlugOptions {
            lower: Some(false),
            ..SlugOptions::default()
        };
        let first = resolve(&store(), Some(&opts));
        let second = resolve(&store(), Some(&opts));
        assert_eq!(first.lower, second.lower);
        assert_eq!(opts.lower, Some(false));
    }

    #[test]
    fn mode_parse_is_total() {
        assert_eq!(Mode::parse("rfc3986"), Some(Mode::Rfc3986));
        assert_eq!(Mode::parse("pretty"), Some(Mode::Pretty));
        assert_eq!(Mode::parse("fhqwhgads"), None);
        assert_eq!(Mode::parse(""), None);
    }

    #[test]
    fn remove_pattern_surfaces_compile_errors() {
        let err = SlugOptions::new().remove_pattern("[od").unwrap_err();
        assert!(matches!(
            err,
            crate::error::OptionsError::InvalidRemovePattern(_)
        ));
        let ok = SlugOptions::new().remove_pattern("[od]").unwrap();
        assert!(ok.remove.is_some());
    }
}
