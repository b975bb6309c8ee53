//! Multi-character replacement table.
//!
//! Keys are sequences of more than one Unicode scalar (base letter plus
//! combining mark, or letter plus vowel point) matched by longest prefix
//! before any single-character lookup. Combining marks are invisible or
//! ambiguous in source form, so keys are spelled with `\u{..}` escapes and
//! a trailing comment naming the sequence.

/// Base multicharmap applied to every invocation unless overridden by a
/// mode preset or call options.
pub static BASE_MULTICHARMAP: &[(&str, &str)] = &[
    // devanagari consonant + nukta (decomposed forms of \u{0958}..\u{095F})
    ("\u{0915}\u{093C}", "Qi"),     // क़
    ("\u{0916}\u{093C}", "Khi"),    // ख़
    ("\u{0917}\u{093C}", "Ghi"),    // ग़
    ("\u{091C}\u{093C}", "Za"),     // ज़
    ("\u{0921}\u{093C}", "ugDha"),  // ड़
    ("\u{0922}\u{093C}", "ugDhha"), // ढ़
    ("\u{092B}\u{093C}", "Fi"),     // फ़
    ("\u{092F}\u{093C}", "Yi"),     // य़
    // hebrew letter + dagesh
    ("\u{05D1}\u{05BC}", "b"), // bet + dagesh
    ("\u{05D2}\u{05BC}", "g"), // gimel + dagesh
    ("\u{05D3}\u{05BC}", "d"), // dalet + dagesh
    ("\u{05DB}\u{05BC}", "k"), // kaf + dagesh
    ("\u{05DA}\u{05BC}", "k"), // final kaf + dagesh
    ("\u{05E4}\u{05BC}", "p"), // pe + dagesh
    ("\u{05EA}\u{05BC}", "t"), // tav + dagesh
    // hebrew shin + shin/sin dot
    ("\u{05E9}\u{05C1}", "sh"), // shin + shin dot
    ("\u{05E9}\u{05C2}", "s"),  // shin + sin dot
    // hebrew vav + point
    ("\u{05D5}\u{05B9}", "o"), // vav + holam
    ("\u{05D5}\u{05BC}", "u"), // vav + dagesh (shuruk)
    // hebrew niqqud vowels, keyed on their carrier letter
    ("\u{05D1}\u{05B0}", "e"),         // bet + sheva
    ("\u{05D7}\u{05B1}", "e"),         // het + hataf segol
    ("\u{05D7}\u{05B2}", "a"),         // het + hataf patah
    ("\u{05D7}\u{05B3}", "o"),         // het + hataf qamats
    ("\u{05D1}\u{05B4}", "i"),         // bet + hiriq
    ("\u{05D1}\u{05B4}\u{05D9}", "i"), // bet + hiriq + yod
    ("\u{05D1}\u{05B5}", "e"),         // bet + tsere
    ("\u{05D1}\u{05B5}\u{05D9}", "e"), // bet + tsere + yod
    ("\u{05D1}\u{05B6}", "e"),         // bet + segol
    ("\u{05D1}\u{05B7}", "a"),         // bet + patah
    ("\u{05D1}\u{05B8}", "a"),         // bet + qamats
    ("\u{05D1}\u{05B9}", "o"),         // bet + holam
    ("\u{05D1}\u{05BB}", "u"),         // bet + qubuts
];
