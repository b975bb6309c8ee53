//! Transliteration and collapse/trim passes.
//!
//! Contract:
//! - `transliterate` walks the input once, left to right: multi-character
//!   match first, then the charmap, then the raw logical character. Each
//!   resolved output string is folded into separator/literal tokens.
//! - Folding rules: whitespace and the (single-character) replacement are
//!   separators; a character matching the `remove` predicate is dropped;
//!   mapped output (charmap/multicharmap values) otherwise passes through
//!   verbatim, while raw input must be an ASCII alphanumeric or one of the
//!   mode's allowed extras. Everything else is dropped silently, never
//!   turned into a separator, which is why zero-width characters and
//!   unmapped combining marks disappear without leaving a hyphen behind.
//! - `collapse` merges each separator run into one replacement instance
//!   and, with `trim` unset, keeps exactly one instance per boundary run.
//! - Case folding happens once, on the final string, in the caller.

use crate::options::Effective;
use crate::reader::whole_char_at;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    Separator,
    Literal(char),
}

pub(crate) fn transliterate(units: &[u16], cfg: &Effective) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(units.len());
    let mut i = 0;
    while i < units.len() {
        if let Some((value, advance)) = cfg.matcher.match_at(units, i) {
            fold_mapped(value, cfg, &mut tokens);
            i += advance;
            continue;
        }
        let wc = whole_char_at(units, i);
        match cfg.charmap.get(&wc.ch) {
            Some(mapped) => fold_mapped(mapped, cfg, &mut tokens),
            None => fold_raw(wc.ch, cfg, &mut tokens),
        }
        i = wc.last + 1;
    }
    tokens
}

/// Fold a replacement-table value. Table values are trusted: apart from
/// separator classification and the `remove` predicate they pass through
/// verbatim, which is what lets a caller whitelist a character by mapping
/// it to itself.
fn fold_mapped(value: &str, cfg: &Effective, out: &mut Vec<Token>) {
    for ch in value.chars() {
        if is_separator(ch, cfg) {
            out.push(Token::Separator);
        } else if !is_removed(ch, cfg) {
            out.push(Token::Literal(ch));
        }
    }
}

/// Fold one raw input character through the mode's allowed-character
/// policy.
fn fold_raw(ch: char, cfg: &Effective, out: &mut Vec<Token>) {
    if is_separator(ch, cfg) {
        out.push(Token::Separator);
    } else if is_removed(ch, cfg) {
        // dropped by the remove predicate
    } else if ch.is_ascii_alphanumeric() || cfg.allowed.contains(&ch) {
        out.push(Token::Literal(ch));
    }
}

fn is_separator(ch: char, cfg: &Effective) -> bool {
    ch.is_whitespace() || cfg.sep_char == Some(ch)
}

fn is_removed(ch: char, cfg: &Effective) -> bool {
    cfg.remove.as_ref().is_some_and(|pattern| {
        let mut buf = [0u8; 4];
        pattern.is_match(ch.encode_utf8(&mut buf))
    })
}

pub(crate) fn collapse(tokens: &[Token], cfg: &Effective) -> String {
    let mut out = String::new();
    let mut leading = false;
    let mut pending = false;
    for token in tokens {
        match token {
            Token::Separator => {
                if out.is_empty() {
                    leading = true;
                } else {
                    pending = true;
                }
            }
            Token::Literal(ch) => {
                if pending {
                    out.push_str(&cfg.replacement);
                    pending = false;
                }
                out.push(*ch);
            }
        }
    }
    if !cfg.trim {
        if leading {
            out.insert_str(0, &cfg.replacement);
        }
        if pending {
            out.push_str(&cfg.replacement);
        }
    }
    out
}
