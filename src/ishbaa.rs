//! Component F: the vowel-lengthening (*ishbāʿ*) fallback search (§4.F).
//!
//! When a verse's plain skeleton matches no meter, certain bound pronoun
//! suffixes (`هُ`, `هِ`, `مُ`) may be read with a lengthened vowel. This
//! enumerates every subset of the verse's lengthenable pronouns and
//! re-runs the meter match on each candidate, accepting the first one
//! that identifies a meter.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::IshbaaError;
use crate::feet;
use crate::meter;
use crate::skeleton;
use crate::types::{Foot, Meter};

/// Bounds the combinatorial search: `2^max_pronouns` candidate verses get
/// re-matched in the worst case, so this caps how many lengthenable
/// pronouns a single verse may contain before the search is refused
/// outright rather than left to run unbounded.
#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    pub max_pronouns: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits { max_pronouns: 16 }
    }
}

/// One successful lengthening outcome (§6): the rewritten verse plus its
/// now-matched meter and feet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IshbaaResult {
    pub shater: String,
    pub arrodi: String,
    pub chars: String,
    pub harakat: String,
    pub rokaz: String,
    pub meter: Meter,
    pub feet: Vec<Foot>,
}

static PRONOUN: Lazy<Regex> = Lazy::new(|| Regex::new("(هُ|هِ|مُ)#").unwrap());

fn lengthened(pronoun: &str) -> &'static str {
    match pronoun {
        "هُ" => "هُوْ",
        "هِ" => "هِيْ",
        "مُ" => "مُوْ",
        _ => "",
    }
}

/// Builds the candidate text for `mask`, bit `i` (counted from the most
/// significant bit of `k`) selecting whether occurrence `i` is lengthened.
fn apply_mask(text: &str, occurrences: &[(usize, usize, &str)], mask: u32, k: usize) -> String {
    let mut out = String::with_capacity(text.len() + k * 2);
    let mut cursor = 0;
    for (i, (start, end, pronoun)) in occurrences.iter().enumerate() {
        out.push_str(&text[cursor..*start]);
        let bit = (mask >> (k - 1 - i)) & 1;
        if bit == 1 {
            out.push_str(lengthened(pronoun));
        } else {
            out.push_str(pronoun);
        }
        cursor = *end - 1; // keep the boundary `#` that closed the match
    }
    out.push_str(&text[cursor..]);
    out
}

/// Runs the search over `normalised` (the already-normalised, `#`-bounded
/// prosodic form of one verse). Returns the first candidate whose
/// skeleton identifies a known meter, or `IshbaaError` if none does (or
/// the verse exceeds `limits.max_pronouns`).
pub fn search(normalised: &str, limits: SearchLimits) -> Result<IshbaaResult, IshbaaError> {
    let occurrences: Vec<(usize, usize, &str)> = PRONOUN
        .captures_iter(normalised)
        .map(|c| {
            let m = c.get(0).unwrap();
            let g = c.get(1).unwrap();
            (m.start(), m.end(), g.as_str())
        })
        .collect();

    let k = occurrences.len();
    if k > limits.max_pronouns {
        return Err(IshbaaError::TooManyPronouns {
            found: k,
            limit: limits.max_pronouns,
        });
    }

    let total: u32 = if k == 0 { 1 } else { 1 << k };
    for mask in (0..total).rev() {
        let state_text = if k == 0 {
            normalised.to_string()
        } else {
            apply_mask(normalised, &occurrences, mask, k)
        };

        let continuous: String = state_text.chars().filter(|c| *c != '#').collect();
        let extraction = skeleton::extract(&continuous);
        let identified = meter::identify(&extraction.skeleton);

        if !identified.is_unknown() {
            let feet = feet::segment(identified, &extraction.skeleton, &extraction.chars);
            return Ok(IshbaaResult {
                shater: state_text,
                arrodi: continuous,
                chars: extraction.chars,
                harakat: extraction.harakat,
                rokaz: extraction.skeleton,
                meter: identified,
                feet,
            });
        }
    }

    Err(IshbaaError::UnknownAlso)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_pronouns_runs_a_single_candidate() {
        let err = search("#لالالالالالالالالالالالالالالالالالالالا#", SearchLimits::default());
        assert!(err.is_err());
    }

    #[test]
    fn too_many_pronouns_is_refused() {
        let many = "هُ# ".repeat(20);
        let err = search(&many, SearchLimits { max_pronouns: 4 });
        assert_eq!(
            err.unwrap_err(),
            IshbaaError::TooManyPronouns { found: 20, limit: 4 }
        );
    }
}
