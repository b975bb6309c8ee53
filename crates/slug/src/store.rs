//! Process-wide default store.
//!
//! Contract:
//! - `SlugStore` is a plain value constructed from the embedded tables;
//!   the process-wide instance lives behind an `RwLock` so plain
//!   invocations (read snapshot, then operate on private data) run
//!   concurrently while `extend` / `set_locale` / `reset` serialize.
//! - The maps and defaults are public fields: advanced callers may edit
//!   them directly, and `reset()` is the recovery mechanism; after it,
//!   the store is observationally identical to process start.
//! - No other code path mutates the store.

use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::options::Mode;

/// One mode's deltas on top of the hard-coded defaults.
#[derive(Debug, Clone, Default)]
pub struct ModePreset {
    /// Replacement override; `None` inherits `-`.
    pub replacement: Option<String>,
    pub lower: Option<bool>,
    pub trim: Option<bool>,
    /// Charmap entries merged over the base map when this mode is active.
    pub charmap: HashMap<char, String>,
    /// Multicharmap entries merged over the base map.
    pub multicharmap: HashMap<String, String>,
    /// Characters beyond ASCII alphanumerics that pass through untouched.
    pub allowed: Vec<char>,
}

/// The two built-in mode presets.
#[derive(Debug, Clone)]
pub struct ModePresets {
    pub rfc3986: ModePreset,
    pub pretty: ModePreset,
}

impl ModePresets {
    pub fn preset(&self, mode: Mode) -> &ModePreset {
        match mode {
            Mode::Rfc3986 => &self.rfc3986,
            Mode::Pretty => &self.pretty,
        }
    }
}

/// Store-level defaults: the default mode, its presets, and the fallback
/// flag.
#[derive(Debug, Clone)]
pub struct SlugDefaults {
    pub mode: Mode,
    pub modes: ModePresets,
    pub fallback: bool,
}

/// Process-wide mutable defaults with an explicit lifecycle.
#[derive(Debug, Clone)]
pub struct SlugStore {
    pub charmap: HashMap<char, String>,
    pub multicharmap: HashMap<String, String>,
    pub defaults: SlugDefaults,
    /// Default locale; `None` until `set_locale` records a recognized code.
    pub locale: Option<String>,
}

impl SlugStore {
    /// Build a store from the embedded tables: the state the process
    /// starts with and the state `reset()` restores.
    pub fn from_embedded_defaults() -> Self {
        let charmap = slug_charmap::BASE_CHARMAP
            .iter()
            .map(|(ch, value)| (*ch, (*value).to_string()))
            .collect();
        let multicharmap = slug_charmap::BASE_MULTICHARMAP
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        Self {
            charmap,
            multicharmap,
            defaults: SlugDefaults {
                mode: Mode::Pretty,
                modes: ModePresets {
                    rfc3986: ModePreset {
                        lower: Some(true),
                        allowed: vec!['.', '_', '~'],
                        ..ModePreset::default()
                    },
                    pretty: ModePreset {
                        lower: Some(true),
                        ..ModePreset::default()
                    },
                },
                fallback: true,
            },
            locale: None,
        }
    }

    /// Restore the embedded-table state, discarding every mutation,
    /// including direct edits of the public fields.
    pub fn reset(&mut self) {
        *self = Self::from_embedded_defaults();
    }

    /// Merge entries into the base maps: a one-logical-character key
    /// updates the charmap, a longer key the multicharmap. Existing
    /// entries are overwritten per key, never removed.
    pub fn extend<K, V, I>(&mut self, map: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut added = 0usize;
        for (key, value) in map {
            let key = key.into();
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => {
                    self.charmap.insert(ch, value.into());
                }
                (Some(_), Some(_)) => {
                    self.multicharmap.insert(key, value.into());
                }
                (None, _) => continue,
            }
            added += 1;
        }
        debug!(target: "slug::store", added, "charmap_extended");
    }

    /// Record `code` as the default locale if it is recognized; otherwise
    /// leave the store untouched.
    pub fn set_locale(&mut self, code: &str) {
        if slug_charmap::locale_overlay(code).is_some() {
            self.locale = Some(code.to_string());
        } else {
            debug!(target: "slug::store", locale = code, "locale_ignored");
        }
    }
}

static STORE: LazyLock<RwLock<SlugStore>> =
    LazyLock::new(|| RwLock::new(SlugStore::from_embedded_defaults()));

/// Read access to the process-wide store.
pub fn store() -> RwLockReadGuard<'static, SlugStore> {
    STORE.read().unwrap_or_else(PoisonError::into_inner)
}

/// Write access to the process-wide store, for direct field edits.
pub fn store_mut() -> RwLockWriteGuard<'static, SlugStore> {
    STORE.write().unwrap_or_else(PoisonError::into_inner)
}
