//! Component H: isolates the rhyme suffix (*qāfiya*) of a verse ending,
//! classifies its components (*rawī*, *waṣl*, *khurūj*, *ridf*, *taʾsīs*,
//! *dakhīl*), and diffs each verse of a poem against the first one (§4.H).
//!
//! See DESIGN.md for why this module normalises with `is_ajuz = false`
//! rather than the `true` spec.md's prose names: the *ʿajuz* vowel
//! extension in B.3 is a scansion device (every hemistich's closing
//! syllable scans heavy) and applying it here would erase exactly the
//! distinction — a written long vowel versus a bare short one read in
//! pause — that `Bound`/`Absolute` classification depends on.

use crate::grapheme::{self, Grapheme};
use crate::normalize;
use crate::types::{RhymeAnalysis, RhymeClass, RhymeSet, RhymeSlot};

const SUKUN: char = 'ْ';
const FATHA: char = 'َ';
const DAMMA: char = 'ُ';
const KASRA: char = 'ِ';

fn text_of(g: &Grapheme) -> String {
    let mut s = String::new();
    g.push_to(&mut s);
    s
}

fn is_sukun_equivalent(g: &Grapheme) -> bool {
    match g.diacritic {
        Some(SUKUN) => true,
        None if g.letter == 'ا' || g.letter == 'ى' => true,
        _ => false,
    }
}

/// Scans `graphemes` from the end and returns the index at which the
/// rhyme suffix (the *qāfiya*) begins: the span from two sukūn-equivalents
/// back to the end, plus one additional consonant past the second one
/// (§4.H). If fewer than two sukūn-equivalents occur at all, the whole
/// span is the suffix.
fn qafiya_start(graphemes: &[Grapheme]) -> usize {
    let mut sukun_count = 0usize;
    for idx in (0..graphemes.len()).rev() {
        if is_sukun_equivalent(&graphemes[idx]) {
            sukun_count += 1;
            if sukun_count >= 2 {
                return idx.saturating_sub(1);
            }
        }
    }
    0
}

/// Classifies the rhyme components of `qafiya` (§4.H) and assembles the
/// `RhymeAnalysis` for one verse ending.
fn classify(qafiya: &[Grapheme]) -> RhymeAnalysis {
    let text: String = qafiya.iter().map(text_of).collect();

    if qafiya.is_empty() {
        return RhymeAnalysis {
            text,
            class: RhymeClass::Bound,
            rawi: String::new(),
            wasl: String::new(),
            khuruj: String::new(),
            tasis: String::new(),
            dakhil: String::new(),
            ridf: String::new(),
            type_description: "قافية مقيّدة مجرَّدة".to_string(),
            errors: Vec::new(),
        };
    }

    let last = qafiya.len() - 1;
    let non_sukun_vowel = |g: &Grapheme| matches!(g.diacritic, Some(FATHA) | Some(DAMMA) | Some(KASRA));

    let class;
    let rawi_idx: usize;
    let mut wasl = String::new();
    let mut khuruj = String::new();

    if qafiya[last].letter == 'ه' && last >= 1 && non_sukun_vowel(&qafiya[last]) {
        class = RhymeClass::Absolute;
        rawi_idx = last - 1;
        wasl = text_of(&qafiya[last]);
    } else if qafiya[last].letter == 'ك' && last >= 1 && non_sukun_vowel(&qafiya[last]) {
        class = RhymeClass::Absolute;
        rawi_idx = last - 1;
        wasl = text_of(&qafiya[last]);
    } else if matches!(qafiya[last].letter, 'ا' | 'ى' | 'و' | 'ي') {
        if last >= 2 && qafiya[last - 1].letter == 'ه' && non_sukun_vowel(&qafiya[last - 1]) && last >= 3 {
            class = RhymeClass::Absolute;
            rawi_idx = last - 3;
            wasl = text_of(&qafiya[last - 1]);
            khuruj = text_of(&qafiya[last]);
        } else if last >= 1 {
            class = RhymeClass::Absolute;
            rawi_idx = last - 1;
            wasl = text_of(&qafiya[last]);
        } else {
            class = RhymeClass::Bound;
            rawi_idx = last;
        }
    } else {
        class = RhymeClass::Bound;
        rawi_idx = last;
    }

    let rawi = text_of(&qafiya[rawi_idx]);

    let mut ridf = String::new();
    let mut tasis = String::new();
    let mut dakhil = String::new();

    if rawi_idx >= 1 {
        let c = &qafiya[rawi_idx - 1];
        let preceding = if rawi_idx >= 2 { Some(&qafiya[rawi_idx - 2]) } else { None };

        let is_ridf = match (c.letter, c.diacritic) {
            ('و', Some(SUKUN)) => preceding.is_some_and(|p| p.diacritic == Some(DAMMA)),
            ('ي', Some(SUKUN)) => preceding.is_some_and(|p| p.diacritic == Some(KASRA)),
            ('ا', _) => preceding.is_some_and(|p| p.diacritic == Some(FATHA)),
            ('ى', _) => preceding.is_some_and(|p| p.diacritic == Some(FATHA)),
            _ => false,
        };

        if is_ridf {
            ridf = text_of(c);
        } else if let Some(p) = preceding {
            // §4.H requires the taʾsīs alif to belong to the rhyme's final
            // word, but every internal word boundary in the ʿajuz is already
            // erased by `normalize::normalize` before this function ever
            // sees the text, so "final word" and "whole qafiya span" coincide
            // here and no separate word check is needed.
            if p.letter == 'ا' || p.letter == 'ى' {
                tasis = text_of(p);
                dakhil = text_of(c);
            }
        }
    }

    let type_description = describe(class, &ridf, &tasis, &khuruj);

    RhymeAnalysis {
        text,
        class,
        rawi,
        wasl,
        khuruj,
        tasis,
        dakhil,
        ridf,
        type_description,
        errors: Vec::new(),
    }
}

fn describe(class: RhymeClass, ridf: &str, tasis: &str, khuruj: &str) -> String {
    match class {
        RhymeClass::Absolute => {
            if ridf.is_empty() && tasis.is_empty() && khuruj.is_empty() {
                "قافية مطلقة مجرَّدة".to_string()
            } else if !ridf.is_empty() {
                let mut s = "قافية مطلقة بردف".to_string();
                if !khuruj.is_empty() {
                    s.push_str(" و خروج");
                }
                s
            } else if !tasis.is_empty() {
                let mut s = "قافية مطلقة بتأسيس".to_string();
                if !khuruj.is_empty() {
                    s.push_str(" و خروج");
                }
                s
            } else {
                "قافية مطلقة بخروج".to_string()
            }
        }
        RhymeClass::Bound => {
            if ridf.is_empty() && tasis.is_empty() {
                "قافية مقيّدة مجرَّدة".to_string()
            } else if !ridf.is_empty() {
                "قافية مقيّدة بردف".to_string()
            } else {
                "قافية مقيّدة بتأسيس".to_string()
            }
        }
    }
}

/// Analyses the rhyme of one verse ending (§4.H, §6). `text` is the raw,
/// unnormalised verse ending; this runs it through the orthographic
/// normaliser itself.
pub fn analyse_one(text: &str) -> RhymeAnalysis {
    let normalized = normalize::normalize(text, false);
    let continuous: String = normalized.chars().filter(|&c| c != crate::types::BOUNDARY).collect();
    let graphemes = grapheme::split(&continuous);
    let start = qafiya_start(&graphemes);
    classify(&graphemes[start..])
}

/// Diffs `current` against the poem's `baseline` verse, producing the
/// cross-verse error list of §4.H.
fn diff_against_baseline(current: &RhymeAnalysis, baseline: &RhymeAnalysis) -> Vec<String> {
    let mut errors = Vec::new();

    if current.rawi != baseline.rawi {
        errors.push(
            "قافية هذا البيت مختلفة كليَّاً عن قافية القصيدة و ذلك <b>لاختلاف الرَّويِّ</b> بين القافيتين."
                .to_string(),
        );
        return errors;
    }

    if current.wasl != baseline.wasl {
        let equivalent = (current.wasl == "اْ" && baseline.wasl == "ىْ")
            || (current.wasl == "ىْ" && baseline.wasl == "اْ");
        if !equivalent {
            errors.push("قافية هذا البيت مختلفة عن قافية القصيدة بسبب <b>اختلاف حرف الوصل</b>.".to_string());
        }
        return errors;
    }

    if !current.tasis.is_empty() && baseline.tasis.is_empty() {
        errors.push(
            "لقد قمت باستعمال ألف التأسيس في قافية هذا البيت في حين أنَّ قافية القصيدة ليست مؤسَّسة و هذا عيب من عيوب القافية يعرف بـ<b>سناد التأسيس</b>."
                .to_string(),
        );
    } else if current.tasis.is_empty() && !baseline.tasis.is_empty() {
        errors.push("يجب أن تُؤَسَّسَ قافية هذا البيت بألف التأسيس !".to_string());
    }

    if !current.ridf.is_empty() && baseline.ridf.is_empty() {
        errors.push(
            "لقد قمت باستعمال ردف للقافية في قافية هذا البيت في حين أنَّ قافية القصيدة ليست مردفة و هذا عيب من عيوب القافية يعرف بـ<b>سناد الرِّدف</b>."
                .to_string(),
        );
    } else if current.ridf.is_empty() && !baseline.ridf.is_empty() {
        errors.push("يجب أن تُرْدِفَ قافية هذا البيت بحرف الرِّدف المناسب قبل الرَّوي مباشرةً !".to_string());
    } else if !current.ridf.is_empty() && !baseline.ridf.is_empty() {
        let current_wy = current.ridf == "يْ" || current.ridf == "وْ";
        let current_a = current.ridf == "ا" || current.ridf == "اْ";
        let baseline_wy = baseline.ridf == "يْ" || baseline.ridf == "وْ";
        let baseline_a = baseline.ridf == "ا" || baseline.ridf == "اْ";
        if (current_wy && baseline_a) || (current_a && baseline_wy) {
            errors.push("لا يمكن أن تجتمع الياء أو الواو كردف مع الألف كردف !".to_string());
        }
    }

    errors
}

/// Analyses the rhyme of every verse in a poem (§6, §7.2). `verses` holds
/// one verse ending per line; an empty string marks a blank input line.
/// The first non-empty verse becomes the baseline every later verse is
/// diffed against. Returns `RhymeSet::AllEmpty` if every verse was blank.
pub fn analyse_many(verses: &[&str]) -> RhymeSet {
    let mut results = Vec::with_capacity(verses.len());
    let mut baseline: Option<RhymeAnalysis> = None;

    for verse in verses {
        if verse.is_empty() {
            results.push(RhymeSlot::Empty);
            continue;
        }

        match &baseline {
            None => {
                let analysis = analyse_one(verse);
                baseline = Some(analysis.clone());
                results.push(RhymeSlot::Analysis(analysis));
            }
            Some(base) => {
                let mut analysis = analyse_one(verse);
                analysis.errors = diff_against_baseline(&analysis, base);
                results.push(RhymeSlot::Analysis(analysis));
            }
        }
    }

    match baseline {
        Some(_) => RhymeSet::Lines(results),
        None => RhymeSet::AllEmpty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_rhyme_has_no_errors_against_itself() {
        let analysis = analyse_one("سَحَرُ");
        assert_eq!(analysis.class, RhymeClass::Bound);
        assert!(analysis.ridf.is_empty());
        assert!(analysis.tasis.is_empty());
        assert_eq!(analysis.type_description, "قافية مقيّدة مجرَّدة");
    }

    #[test]
    fn consistent_rawi_across_verses_has_no_errors() {
        let verses = ["سَحَرُ", "قَمَرُ", "مَطَرُ"];
        let set = analyse_many(&verses);
        let RhymeSet::Lines(slots) = set else { panic!("expected Lines") };
        for slot in &slots {
            let RhymeSlot::Analysis(a) = slot else { panic!("expected Analysis") };
            assert!(a.errors.is_empty(), "unexpected errors: {:?}", a.errors);
        }
    }

    #[test]
    fn rawi_mismatch_is_flagged() {
        let verses = ["سَحَرُ", "قَمَرُ", "كَرِمُ"];
        let set = analyse_many(&verses);
        let RhymeSet::Lines(slots) = set else { panic!("expected Lines") };
        let RhymeSlot::Analysis(last) = &slots[2] else { panic!("expected Analysis") };
        assert!(!last.errors.is_empty());
        assert!(last.errors[0].contains("الرَّويِّ"));
    }

    #[test]
    fn all_empty_verses_yield_all_empty_marker() {
        let verses = ["", "", ""];
        assert_eq!(analyse_many(&verses), RhymeSet::AllEmpty);
    }

    #[test]
    fn baseline_among_leading_empties_is_still_found() {
        let verses = ["", "سَحَرُ", "قَمَرُ"];
        let set = analyse_many(&verses);
        let RhymeSet::Lines(slots) = set else { panic!("expected Lines") };
        assert_eq!(slots[0], RhymeSlot::Empty);
        assert!(matches!(slots[1], RhymeSlot::Analysis(_)));
    }
}
