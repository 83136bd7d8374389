//! Analysis of classical and free-verse Arabic poetry per al-Khalīl's
//! system of *ʿarūḍ* (prosody): orthographic normalisation, meter
//! identification, foot segmentation, rhyme (*qāfiya*) classification,
//! and a step-by-step validator against caller-supplied expected patterns.
//!
//! The pipeline is a pure function of its input (§5): no shared state, no
//! I/O, safe to call concurrently from multiple threads without
//! synchronisation.

pub mod error;
pub mod feet;
pub mod free_verse;
pub mod grapheme;
pub mod ishbaa;
pub mod meter;
pub mod normalize;
pub mod rhyme;
pub mod skeleton;
pub mod types;
pub mod wizard;

pub use error::{FreeVerseError, IshbaaError};
pub use ishbaa::SearchLimits;
pub use rhyme::{analyse_many as analyse_rhymes, analyse_one as analyse_rhyme};
pub use types::{
    Foot, FootReport, Grapheme, Meter, PoemResult, RhymeAnalysis, RhymeClass, RhymeSet, RhymeSlot,
    VerseResult,
};
pub use wizard::{wizard_classical, wizard_free_verse};

/// Analyses one classical verse (§6). Tries the direct skeleton first; if
/// that matches no meter, retries through the *ishbāʿ* (vowel-lengthening)
/// search of §4.F before giving up. An unmatched verse is not an error
/// (§7.1): it comes back with `meter: Meter::Unknown` and no feet.
pub fn analyse_classical(text: &str, is_ajuz: bool) -> VerseResult {
    let normalized = normalize::normalize(text, is_ajuz);
    let continuous: String = normalized.chars().filter(|&c| c != types::BOUNDARY).collect();
    let extraction = skeleton::extract(&continuous);

    let meter = meter::identify(&extraction.skeleton);
    if !meter.is_unknown() {
        let feet = feet::segment(meter, &extraction.skeleton, &extraction.chars);
        return VerseResult {
            shater: normalized,
            arrodi: continuous,
            chars: extraction.chars,
            harakat: extraction.harakat,
            rokaz: extraction.skeleton,
            meter,
            feet,
        };
    }

    match ishbaa::search(&normalized, SearchLimits::default()) {
        Ok(result) => VerseResult {
            shater: result.shater,
            arrodi: result.arrodi,
            chars: result.chars,
            harakat: result.harakat,
            rokaz: result.rokaz,
            meter: result.meter,
            feet: result.feet,
        },
        Err(_) => VerseResult {
            shater: normalized,
            arrodi: continuous,
            chars: extraction.chars,
            harakat: extraction.harakat,
            rokaz: extraction.skeleton,
            meter: Meter::Unknown,
            feet: Vec::new(),
        },
    }
}

/// Analyses one free-verse (*tafʿīla*) poem (§6). `text` holds the whole
/// poem; its lines are normalised and concatenated into a single skeleton
/// before the dominant meter is identified (§4.G).
pub fn analyse_free_verse(text: &str) -> Result<PoemResult, FreeVerseError> {
    let mut chars = String::new();
    let mut skeleton = String::new();

    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        let normalized = normalize::normalize(line, false);
        let continuous: String = normalized.chars().filter(|&c| c != types::BOUNDARY).collect();
        let extraction = skeleton::extract(&continuous);
        chars.push_str(&extraction.chars);
        skeleton.push_str(&extraction.skeleton);
    }

    free_verse::analyse(&skeleton, &chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taweel_verse_is_identified_with_named_feet() {
        let result = analyse_classical("قِفَا نَبْكِ مِنْ ذِكْرَى حَبِيبٍ وَمَنْزِلِ", false);
        assert_eq!(result.meter, Meter::Taweel);
        assert!(!result.feet.is_empty());
    }

    #[test]
    fn unmatched_verse_reports_unknown_without_erroring() {
        let result = analyse_classical("لا لا لا لا", false);
        assert_eq!(result.meter, Meter::Unknown);
        assert!(result.feet.is_empty());
    }

    #[test]
    fn rhyme_consistency_across_a_poem_has_no_errors() {
        let verses = ["سَحَرُ", "قَمَرُ", "مَطَرُ"];
        let set = analyse_rhymes(&verses);
        let RhymeSet::Lines(slots) = set else { panic!("expected Lines") };
        for slot in &slots {
            let RhymeSlot::Analysis(a) = slot else { panic!("expected Analysis") };
            assert!(a.errors.is_empty());
        }
    }
}
