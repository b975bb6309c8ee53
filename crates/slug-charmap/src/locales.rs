//! Per-locale charmap overlays.
//!
//! An overlay is a charmap delta applied on top of the accumulated charmap
//! for one invocation (or process-wide once selected as the default
//! locale). Only the codes listed here have any effect; everything else is
//! ignored wherever a locale is supplied.

/// Bulgarian: national romanization; also transliterates the Latin look-
/// alikes `X`/`x` used interchangeably with Cyrillic in practice.
static BG: &[(char, &str)] = &[
    ('Й', "Y"),
    ('й', "y"),
    ('X', "H"),
    ('x', "h"),
    ('Ц', "Ts"),
    ('ц', "ts"),
    ('Щ', "Sht"),
    ('щ', "sht"),
    ('Ъ', "A"),
    ('ъ', "a"),
    ('Ь', "Y"),
    ('ь', "y"),
];

/// German: umlauts expand to their digraph spellings.
static DE: &[(char, &str)] = &[
    ('Ä', "AE"),
    ('ä', "ae"),
    ('Ö', "OE"),
    ('ö', "oe"),
    ('Ü', "UE"),
    ('ü', "ue"),
];

/// Serbian: Cyrillic and Latin digraph letters.
static SR: &[(char, &str)] = &[
    ('đ', "dj"),
    ('Đ', "Dj"),
    ('ђ', "dj"),
    ('Ђ', "Dj"),
    ('ј', "j"),
    ('Ј', "j"),
    ('љ', "lj"),
    ('Љ', "Lj"),
    ('њ', "nj"),
    ('Њ', "Nj"),
    ('ћ', "c"),
    ('Ћ', "C"),
    ('џ', "dz"),
    ('Џ', "Dz"),
    ('ǉ', "lj"),
    ('ǈ', "LJ"),
    ('ǋ', "NJ"),
];

/// Ukrainian: national romanization where it differs from the base
/// Cyrillic table.
static UK: &[(char, &str)] = &[
    ('И', "Y"),
    ('и', "y"),
    ('Й', "Y"),
    ('й', "y"),
    ('Ц', "Ts"),
    ('ц', "ts"),
    ('Х', "Kh"),
    ('х', "kh"),
    ('Щ', "Shch"),
    ('щ', "shch"),
    ('Г', "H"),
    ('г', "h"),
];

/// Every recognized locale and its overlay.
pub static LOCALES: &[(&str, &[(char, &str)])] =
    &[("bg", BG), ("de", DE), ("sr", SR), ("uk", UK)];

/// Overlay for `code`, or `None` when the locale is unrecognized.
pub fn locale_overlay(code: &str) -> Option<&'static [(char, &'static str)]> {
    LOCALES.iter().find(|(c, _)| *c == code).map(|(_, t)| *t)
}
