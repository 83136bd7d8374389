//! Component C: reduces a normalised prosodic string to the letter-only
//! string, the diacritic-only string, and the binary `U`/`-` skeleton
//! (§4.C).

use crate::grapheme;

const FATHA: char = 'َ';
const KASRA: char = 'ِ';
const DAMMA: char = 'ُ';
const SUKUN: char = 'ْ';
const ALIF: char = 'ا';
const ALIF_MAQSURA: char = 'ى';

/// The three parallel projections of a normalised, boundary-stripped
/// prosodic string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub chars: String,
    pub harakat: String,
    pub skeleton: String,
}

/// Extracts `chars`/`harakat`/`skeleton` from `text`, which must already be
/// the concatenated prosodic form with `#` boundaries collapsed away (the
/// caller replaces `#` with nothing and removes any remaining whitespace
/// before calling this, matching the other components' contract).
pub fn extract(text: &str) -> Extraction {
    let graphemes = grapheme::split(text);
    let mut chars = String::new();
    let mut harakat = String::new();

    for g in &graphemes {
        if g.is_boundary() {
            continue;
        }
        chars.push(g.letter);
        let haraka = match g.diacritic {
            Some(d) => normalize_haraka(d),
            None if g.letter == ALIF || g.letter == ALIF_MAQSURA => SUKUN,
            None => FATHA,
        };
        harakat.push(haraka);
    }

    let skel = skeletonize(&harakat);

    Extraction {
        chars,
        harakat,
        skeleton: skel,
    }
}

/// The binary model ignores vowel quality: kasra/ḍamma collapse to fatḥa.
fn normalize_haraka(d: char) -> char {
    match d {
        KASRA | DAMMA => FATHA,
        other => other,
    }
}

/// Maps a harakāt string to the `U`/`-` skeleton: a fatḥa immediately
/// followed by a sukūn is one long unit (`-`); a lone fatḥa is short (`U`);
/// a lone sukūn is itself one long unit (`-`).
fn skeletonize(harakat: &str) -> String {
    let chars: Vec<char> = harakat.chars().collect();
    let mut out = String::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == FATHA && i + 1 < chars.len() && chars[i + 1] == SUKUN {
            out.push('-');
            i += 2;
        } else if chars[i] == FATHA {
            out.push('U');
            i += 1;
        } else {
            // SUKUN, standing alone, is a sakin unit.
            out.push('-');
            i += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skeleton_is_binary_alphabet() {
        let ext = extract("قَفَاْ");
        assert!(ext.skeleton.chars().all(|c| c == 'U' || c == '-'));
    }

    #[test]
    fn unmarked_consonant_is_fatha() {
        let ext = extract("قف");
        assert_eq!(ext.harakat, "ََ");
        assert_eq!(ext.skeleton, "UU");
    }

    #[test]
    fn bare_alif_is_sakin() {
        // ق + fatḥa followed directly by a bare ا is one long vowel: the
        // whole "qā" is a single sākin unit (§3: "two consonants or a long
        // vowel"), not a short syllable plus a separate long one.
        let ext = extract("قَا");
        assert_eq!(ext.skeleton, "-");
    }

    #[test]
    fn fatha_sukun_pair_is_one_long_unit() {
        // ق + fatḥa immediately followed by ف + sukūn is the two-consonant
        // case of the same rule: "qaf" is one closed (heavy) syllable.
        let ext = extract("قَفْ");
        assert_eq!(ext.skeleton, "-");
    }

    #[test]
    fn fatha_then_separate_sakin_unit_is_two_symbols() {
        // A short syllable followed by a sakin unit that is NOT directly
        // adjacent in the harakat stream stays two separate symbols.
        let ext = extract("قَفَاْ");
        assert_eq!(ext.skeleton, "U-");
    }

    #[test]
    fn kasra_and_damma_collapse_to_fatha_quality() {
        let a = extract("قِ");
        let b = extract("قُ");
        assert_eq!(a.skeleton, "U");
        assert_eq!(b.skeleton, "U");
    }
}
