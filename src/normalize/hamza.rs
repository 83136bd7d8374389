//! B.4 hamzat al-waṣl (§4.B.4): the connecting hamza at a word's start is
//! only ever pronounced when the word opens the utterance — elsewhere it
//! elides into the vowel of whatever precedes it. A positional pass seeds
//! an explicit hamzat-qaṭʿ at the very first word, then a lexical and a
//! general regex pass delete it everywhere a preceding vowel swallows it.

use once_cell::sync::Lazy;
use regex::Regex;

use super::lam::pair_chars;
use crate::grapheme::cleaned;

const FOLLOWERS: &str = "أإبتثجحخدذرزسشصضطظعغفقكمنهوي";

/// Seeds an explicit hamzat-qaṭʿ (`إِ`) at the very first word when it
/// opens with a bare `ا` not itself beginning a definite article — the
/// only position where a connecting hamza is actually pronounced.
fn seed_initial_hamza(units: &mut [String]) {
    if units.len() > 3 && units[1] == "ا" && units[2] != "ل" && units[3] != "ل" {
        units[1] = "إِ".to_string();
    }
}

static LEXICAL_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        // ابن
        (
            Regex::new("[يواى]*#ا[َُِْ]*ب[َُِْ]*ن").unwrap(),
            "#بْن",
        ),
        (
            Regex::new("#([فكلب]*)ا[َُِْ]*ب[َُِْ]*ن").unwrap(),
            "#$1بْن",
        ),
        // امرؤ
        (
            Regex::new("[يواى]*#ا[َُِْ]*م[َُِْ]*ر").unwrap(),
            "#مْر",
        ),
        (
            Regex::new("#([فكلب]*)ا[َُِْ]*م[َُِْ]*ر").unwrap(),
            "#$1مْر",
        ),
        // اثنان
        (
            Regex::new("[يواى]*#ا[َُِْ]*ث[َُِْ]*ن[َُِْ]*ا[َُِْ]*ن").unwrap(),
            "#ثْنان",
        ),
        (
            Regex::new("#([فكلب]*)ا[َُِْ]*ث[َُِْ]*ن[َُِْ]*ا[َُِْ]*ن").unwrap(),
            "#$1ثْنان",
        ),
        // اثنين
        (
            Regex::new("[يواى]*#ا[َُِْ]*ث[َُِْ]*ن[َُِْ]*ي[َُِْ]*ن").unwrap(),
            "#ثْنيْن",
        ),
        (
            Regex::new("#([فكلب]*)ا[َُِْ]*ث[َُِْ]*ن[َُِْ]*ي[َُِْ]*ن").unwrap(),
            "#$1ثْنيْن",
        ),
        // اثنتان
        (
            Regex::new("[يواى]*#ا[َُِْ]*ث[َُِْ]*ن[َُِْ]*ت[َُِْ]*ا[َُِْ]*ن").unwrap(),
            "#ثْنتان",
        ),
        (
            Regex::new("#([فكلب]*)ا[َُِْ]*ث[َُِْ]*ن[َُِْ]*ت[َُِْ]*ا[َُِْ]*ن").unwrap(),
            "#$1ثْنتان",
        ),
        // اثنتين
        (
            Regex::new("[يواى]*#ا[َُِْ]*ث[َُِْ]*ن[َُِْ]*ت[َُِْ]*ي[َُِْ]*ن").unwrap(),
            "#ثْنتيْن",
        ),
        (
            Regex::new("#([فكلب]*)ا[َُِْ]*ث[َُِْ]*ن[َُِْ]*ت[َُِْ]*ي[َُِْ]*ن").unwrap(),
            "#$1ثْنتيْن",
        ),
        // است
        (
            Regex::new("[يواى]*#ا[َُِْ]*س[َُِْ]*ت([َُِْ]*)").unwrap(),
            "#سْت$1",
        ),
        (
            Regex::new("#([فكلب]*)ا[َُِْ]*س[َُِْ]*ت([َُِْ]*)").unwrap(),
            "#$1سْت$2",
        ),
    ]
});

static GENERAL_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        // A connecting hamza straight after a long vowel elides entirely.
        (
            Regex::new(&format!("(ا|ي|ى)#ا([{FOLLOWERS}])")).unwrap(),
            "#$2ْ",
        ),
        // ... and behind a one/two/three-letter prefix, as long as the
        // word still has a body of four letters or more left after it.
        (
            Regex::new(&format!(
                "#([فكلب]*)ا([{FOLLOWERS}])([{FOLLOWERS}]{{4,}})"
            ))
            .unwrap(),
            "#$1$2ْ$3",
        ),
        // Otherwise a word-initial connecting hamza just elides on its own.
        (
            Regex::new(&format!("#ا([{FOLLOWERS}])")).unwrap(),
            "#$1ْ",
        ),
    ]
});

/// Runs the full B.4 pass.
pub fn apply(text: &str) -> String {
    let text = cleaned(text);
    let mut units = pair_chars(&text);
    if !units.is_empty() {
        seed_initial_hamza(&mut units);
    }
    let text = units.concat();

    let text = super::apply_rules(&text, &LEXICAL_RULES);
    let text = super::apply_rules(&text, &GENERAL_RULES);
    text.replace("ْْ", "ْ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connecting_hamza_elides_after_long_vowel() {
        let out = apply("#قَالَ#ابْنُ#");
        assert!(!out.contains("#ا"));
    }

    #[test]
    fn double_sukun_collapses() {
        let out = apply("#قَدْْ#");
        assert!(!out.contains("ْْ"));
    }

    #[test]
    fn ibn_reduces_to_bn() {
        let out = apply("#ابْن#");
        assert!(out.contains("بْن"));
    }
}
