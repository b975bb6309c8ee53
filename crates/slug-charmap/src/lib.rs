//! Embedded transliteration tables.
//!
//! Contract:
//! - Pure data: per-script single-character replacements (`BASE_CHARMAP`),
//!   multi-character sequences matched by longest prefix
//!   (`BASE_MULTICHARMAP`), and per-locale charmap deltas (`LOCALES`).
//! - Tables are `&'static` slices of tuples; the engine loads them into its
//!   own maps and never mutates the embedded copies, so a store reset can
//!   always rebuild the initial state from here.
//! - Replacement values carry their intended case (`Ö → "OE"`, `ö → "oe"`);
//!   case folding is the engine's job, not the tables'.

pub mod charmap;
pub mod locales;
pub mod multicharmap;

pub use charmap::BASE_CHARMAP;
pub use locales::{LOCALES, locale_overlay};
pub use multicharmap::BASE_MULTICHARMAP;
