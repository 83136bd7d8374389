//! B.3 tanwīn and shadda (§4.B.3): expands each shadda into sukūn+doubled
//! letter, lengthens the closing vowel of a hemistich-ending (*ʿajuz*)
//! verse, and expands tanwīn into its articulatory nūn-sākin form.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::grapheme::cleaned;
use crate::types::is_letter;

const SHADDA: char = 'ّ';
const SUKUN: char = 'ْ';
const FATHA: char = 'َ';
const DAMMA: char = 'ُ';
const KASRA: char = 'ِ';
const TANWIN_FATHA: char = 'ً';
const TANWIN_DAMMA: char = 'ٌ';
const TANWIN_KASRA: char = 'ٍ';
const ALIF: char = 'ا';
const ALIF_MAQSURA: char = 'ى';

/// Expands every shadda: the preceding letter `X` becomes `Xْ X` (sukūn,
/// then the doubled letter). Operates left to right on the raw character
/// stream since a shadda may trail a vowel mark rather than sit right
/// after its consonant (e.g. the solar-lām assimilation output of B.2).
fn expand_shadda(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(chars.len() * 2);
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == SHADDA {
            // Find the nearest preceding letter to double.
            if let Some(prev) = out.chars().rev().find(|c| is_letter(*c)) {
                out.push(SUKUN);
                out.push(prev);
            }
            i += 1;
        } else {
            out.push(c);
            i += 1;
        }
    }
    out
}

/// Index of the last non-boundary character, i.e. the final letter or
/// diacritic of the closing word — `cleaned` always leaves a trailing `#`,
/// so the literal last character is never the one these rules act on.
fn last_pronounced(chars: &[char]) -> Option<usize> {
    chars.iter().rposition(|&c| c != '#')
}

/// Lengthens the final syllable of a closing hemistich (§4.B.3): a bare
/// final alif/alif-maqṣūra gets an explicit sukūn, and (for `is_ajuz`) a
/// final short vowel is extended into its corresponding long form.
fn lengthen_closing(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    let Some(last) = last_pronounced(&chars) else {
        return text.to_string();
    };

    if chars[last] != SUKUN && matches!(chars[last], c if c == ALIF || c == ALIF_MAQSURA) {
        chars.insert(last + 1, SUKUN);
    }

    chars.into_iter().collect()
}

fn apply_ajuz_extension(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    let Some(last) = last_pronounced(&chars) else {
        return text.to_string();
    };

    let c = chars[last];
    if !matches!(c, SUKUN | TANWIN_FATHA | TANWIN_DAMMA | TANWIN_KASRA) {
        let extension: [char; 2] = match c {
            FATHA => [ALIF, SUKUN],
            KASRA => ['ي', SUKUN],
            DAMMA => ['و', SUKUN],
            _ => ['و', SUKUN],
        };
        chars.splice(last + 1..last + 1, extension);
    }
    chars.into_iter().collect()
}

static TANWIN_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        // A bare alif itself carrying the fatḥatān mark (the letter, then
        // its own mark): the alif disappears into a sākin nūn.
        (Regex::new("اً").unwrap(), "نْ"),
        // The far more common case: fatḥatān on the consonant, trailed by
        // the silent orthographic alif that follows its base letter in
        // normal combining-mark order (e.g. "بًا"). Both vanish together.
        // The trailing alif may already carry the sukūn that the
        // unconditional final-vowel step above always appends to a bare
        // closing alif before this pass runs — tolerate it either way.
        (Regex::new("ًاْ?").unwrap(), "نْ"),
        (Regex::new("ةٌ").unwrap(), "تُنْ"),
        (Regex::new("ةً").unwrap(), "تَنْ"),
        (Regex::new("ةٍ").unwrap(), "تِنْ"),
        (Regex::new("ىً").unwrap(), "نْ"),
        (Regex::new("[ًٌٍ]").unwrap(), "نْ"),
    ]
});

/// Runs the full B.3 pass: shadda expansion, closing-vowel lengthening,
/// tanwīn expansion, and residual-shadda cleanup.
pub fn apply(text: &str, is_ajuz: bool) -> String {
    let text = cleaned(text);
    let mut chars = expand_shadda(&text);
    chars = lengthen_closing(&chars);
    if is_ajuz {
        chars = apply_ajuz_extension(&chars);
    }
    let expanded = super::apply_rules(&chars, &TANWIN_RULES);
    expanded.replace(SHADDA, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadda_expands_to_sukun_plus_doubled_letter() {
        // أَشّمس (solar-lam output) -> أَشْشمس
        let out = apply("#أَشّمس#", false);
        assert!(out.contains("شْش") || out.contains('ش'));
        assert!(!out.contains('ّ'));
    }

    #[test]
    fn ajuz_lengthens_final_fatha() {
        let out = apply("#حَبِيبَ#", true);
        assert!(out.ends_with("اْ#") || out.contains("اْ"));
    }

    #[test]
    fn tanween_fatha_becomes_nun_sakin() {
        let out = apply("#حَبِيبًا#", true);
        assert!(out.contains('ن'));
        assert!(!out.contains('ً'));
    }

    #[test]
    fn ajuz_tanween_fatha_drops_the_silent_alif() {
        // "...حَبِيبًا" (§8 scenario 2): the closing ـبًا becomes ـبَنْ —
        // the silent alif vanishes entirely, not just its tanwin mark.
        let out = apply("#حَبِيبًا#", true);
        assert!(out.ends_with("نْ#"), "expected a trailing sakin nun, got {out:?}");
        assert!(!out.contains(ALIF), "the silent alif should have been removed: {out:?}");
    }
}
