//! Component B: the four ordered orthographic rewrite passes that turn
//! cleaned input into a full prosodic form (§4.B). Each pass re-cleans its
//! input through `grapheme::cleaned` before rewriting, and hands its output
//! to the next pass — later passes rely on invariants the earlier ones
//! establish (every word starts clean, no stray punctuation, `#` boundaries
//! intact).

mod hamza;
mod lam;
mod lexicon;
mod tanwin;

use log::trace;
use regex::Regex;

/// Applies an ordered list of (pattern, replacement) rules to `text`, each
/// rule seeing the cumulative result of the ones before it — the same
/// "replace in place, in declaration order" semantics the source's rule
/// lists describe.
fn apply_rules(text: &str, rules: &[(Regex, &str)]) -> String {
    let mut out = text.to_string();
    for (pattern, replacement) in rules {
        out = pattern.replace_all(&out, *replacement).into_owned();
    }
    out
}

/// Runs the full normalisation pipeline on one verse and returns its
/// prosodic form (§4.B). `is_ajuz` selects the closing-vowel lengthening of
/// B.3 for a second-hemistich (or rhyme-suffix) verse.
pub fn normalize(text: &str, is_ajuz: bool) -> String {
    trace!("normalize: pass B.1 special-case lexicon");
    let text = lexicon::apply(text);
    trace!("normalize: pass B.2 lunar/solar lam");
    let text = lam::apply(&text);
    trace!("normalize: pass B.3 tanwin/shadda (ajuz={is_ajuz})");
    let text = tanwin::apply(&text, is_ajuz);
    trace!("normalize: pass B.4 hamzat al-wasl");
    hamza::apply(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_is_idempotent_on_its_own_output() {
        let _ = env_logger::builder().is_test(true).try_init();
        let once = normalize("قِفَا نَبْكِ مِنْ ذِكْرَى حَبِيبٍ وَمَنْزِلِ", false);
        let twice = normalize(&once, false);
        assert_eq!(once, twice);
    }

    #[test]
    fn normalize_begins_and_ends_with_boundary() {
        let out = normalize("قِفَا نَبْكِ", false);
        assert!(out.starts_with('#'));
        assert!(out.ends_with('#'));
        assert!(!out.contains("##"));
    }
}
