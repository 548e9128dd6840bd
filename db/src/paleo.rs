//! Hebrew to Paleo-Hebrew text transforms.
//!
//! Paleo-Hebrew is rendered with the Unicode Phoenician block, which has one
//! code point per consonant of the 22-letter alphabet.

/// Maqqef, sof pasuq, paseq and nun hafukha.
pub const ANCIENT_PUNCTUATION: [char; 4] = ['\u{05BE}', '\u{05C3}', '\u{05C0}', '\u{05C6}'];

/// Phoenician letters indexed by position in the Hebrew block, starting at
/// alef (U+05D0). Final forms share the letter of their regular form.
const PHOENICIAN: [char; 27] = [
    '\u{10900}', // alef
    '\u{10901}', // bet
    '\u{10902}', // gimel
    '\u{10903}', // dalet
    '\u{10904}', // he
    '\u{10905}', // vav
    '\u{10906}', // zayin
    '\u{10907}', // het
    '\u{10908}', // tet
    '\u{10909}', // yod
    '\u{1090A}', // final kaf
    '\u{1090A}', // kaf
    '\u{1090B}', // lamed
    '\u{1090C}', // final mem
    '\u{1090C}', // mem
    '\u{1090D}', // final nun
    '\u{1090D}', // nun
    '\u{1090E}', // samekh
    '\u{1090F}', // ayin
    '\u{10910}', // final pe
    '\u{10910}', // pe
    '\u{10911}', // final tsadi
    '\u{10911}', // tsadi
    '\u{10912}', // qof
    '\u{10913}', // resh
    '\u{10914}', // shin
    '\u{10915}', // tav
];

/// Converts Hebrew text into its Paleo-Hebrew rendering.
///
/// Implemented for any `Fn(&str) -> String`, so a closure can stand in for a
/// real converter.
pub trait Transliterate {
    fn transliterate(&self, hebrew: &str) -> String;
}

impl<F> Transliterate for F
where
    F: Fn(&str) -> String,
{
    fn transliterate(&self, hebrew: &str) -> String {
        self(hebrew)
    }
}

/// Letter-for-letter conversion into the Phoenician script.
///
/// Vowel points and cantillation are dropped. Punctuation, whitespace and
/// anything outside the Hebrew block pass through unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct PhoenicianScript;

impl Transliterate for PhoenicianScript {
    fn transliterate(&self, hebrew: &str) -> String {
        hebrew
            .chars()
            .filter(|c| !is_diacritic(*c))
            .map(|c| match c {
                '\u{05D0}'..='\u{05EA}' => PHOENICIAN[(c as u32 - 0x05D0) as usize],
                _ => c,
            })
            .collect()
    }
}

/// Renders Hebrew text with the default [PhoenicianScript] converter.
pub fn paleo_of(hebrew: &str) -> String {
    PhoenicianScript.transliterate(hebrew)
}

/// Removes the ancient punctuation marks, leaving every other character.
pub fn strip_ancient_punctuation(text: &str) -> String {
    text.chars()
        .filter(|c| !ANCIENT_PUNCTUATION.contains(c))
        .collect()
}

/// Niqqud, cantillation and other combining marks of the Hebrew block.
fn is_diacritic(c: char) -> bool {
    ('\u{0591}'..='\u{05C7}').contains(&c) && !ANCIENT_PUNCTUATION.contains(&c)
}
