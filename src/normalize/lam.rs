//! B.2 lunar and solar lām (§4.B.2): a positional prefix stage over the
//! first few graphemes, followed by a regex stage that handles the same
//! distinction mid-utterance.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::grapheme::cleaned;

const LUNAR_LETTERS: &[char] = &[
    'أ', 'إ', 'ب', 'غ', 'ح', 'ج', 'ك', 'و', 'خ', 'ف', 'ع', 'ق', 'ي', 'م', 'ه',
];

/// Groups `text` into consonant-plus-diacritic units the way the source's
/// prefix scanner expects, `#` always its own unit. A unit is two
/// characters only when the second one is genuinely a diacritic (this
/// includes a trailing shadda mark); two bare consonants in a row — as in
/// the unmarked "ال" of a definite article — stay separate, since they are
/// not one prosodic unit.
pub(super) fn pair_chars(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '#' {
            out.push("#".to_string());
            i += 1;
        } else if i + 1 < chars.len() && crate::types::is_diacritic(chars[i + 1]) {
            out.push(format!("{}{}", chars[i], chars[i + 1]));
            i += 2;
        } else {
            out.push(chars[i].to_string());
            i += 1;
        }
    }
    out
}

fn first_letter(unit: &str) -> Option<char> {
    unit.chars().next()
}

/// The positional prefix stage: rewrites a leading `ال`/`لل`/`فال`/`بال`/`كال`
/// according to whether the letter it attaches to is lunar or solar.
fn positional_stage(units: &mut Vec<String>) {
    if units.len() < 4 {
        return;
    }

    // "الا..." — hamzat-wasl-initial ال directly followed by another alif.
    if units[0] == "#" && units[1] == "ا" && units[2] == "ل" && units[3] == "ا" {
        let mut rest = units[4..].to_vec();
        units.clear();
        units.push("#".to_string());
        units.push("أ".to_string());
        units.push("لِ".to_string());
        units.append(&mut rest);
        return;
    }

    let fourth = units.get(3).and_then(|s| first_letter(s));

    if units[0] == "#"
        && units[1] == "ا"
        && units[2] == "ل"
        && fourth.is_some_and(|c| LUNAR_LETTERS.contains(&c))
    {
        units[0] = "#".to_string();
        units[1] = "أ".to_string();
        units[2] = "لْ".to_string();
    } else if units[0] == "#"
        && units[1] == "ل"
        && units[2] == "ل"
        && fourth.is_some_and(|c| LUNAR_LETTERS.contains(&c))
    {
        units[0] = "#".to_string();
        units[1] = "ل".to_string();
        units[2] = "لْ".to_string();
    } else if units.len() > 4
        && units[0] == "#"
        && units[1] == "ف"
        && units[2] == "ا"
        && units[3] == "ل"
        && first_letter(&units[4]).is_some_and(|c| LUNAR_LETTERS.contains(&c))
    {
        units[0] = "#".to_string();
        units[1] = "ف".to_string();
        units[2] = "ل".to_string();
        units[3] = "ْ".to_string();
    } else if units.len() > 4
        && units[0] == "#"
        && units[1] == "ب"
        && units[2] == "ا"
        && units[3] == "ل"
        && first_letter(&units[4]).is_some_and(|c| LUNAR_LETTERS.contains(&c))
    {
        units[0] = "#".to_string();
        units[1] = "ب".to_string();
        units[2] = "ل".to_string();
        units[3] = "ْ".to_string();
    } else if units.len() > 4
        && units[0] == "#"
        && units[1] == "ك"
        && units[2] == "ا"
        && units[3] == "ل"
        && first_letter(&units[4]).is_some_and(|c| LUNAR_LETTERS.contains(&c))
    {
        units[0] = "#".to_string();
        units[1] = "ك".to_string();
        units[2] = "ل".to_string();
        units[3] = "ْ".to_string();
    } else if units[0] == "#" && units[1] == "ا" && units[2] == "ل" {
        units[1] = "أ".to_string();
        if units.len() > 3 && units[3] != "ّ" {
            let shaddad = format!("{}ّ", units[3]);
            units[3] = shaddad;
            units.remove(2);
        }
    }

    if units.first().map(String::as_str) != Some("#") {
        units.insert(0, "#".to_string());
    }
    if units.last().map(String::as_str) != Some("#") {
        units.push("#".to_string());
    }
}

static SOLAR_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (
            Regex::new(r"و#ال([تثدذرزسشصضطظلن])").unwrap(),
            "و#$1ّ",
        ),
        (
            Regex::new(r"(?:ا[َُِْ]*|ى[َُِْ]*|ي[ُِْ]*|وْ)#ال([تثدذرزسشصضطظلن])").unwrap(),
            "#$1ّ",
        ),
        (
            Regex::new(r"(ي[َّ]*)#ال([تثدذرزسشصضطظلن])").unwrap(),
            "$1#$2ّ",
        ),
        (
            Regex::new(r"ة([َُِ]*)#ال([تثدذرزسشصضطظلن])").unwrap(),
            "ت$1#$2ّ",
        ),
        (
            Regex::new(r"#([فكب]*)ال([تثدذرزسشصضطظلن])").unwrap(),
            "#$1$2ّ",
        ),
        (Regex::new(r"#لل([تثدذرزسشصضطظلن])").unwrap(), "ل#$1ّ"),
        (Regex::new(r"#ال(ا)").unwrap(), "#لِ"),
        (
            Regex::new(r"(?:ا[َُِْ]*|ى[َُِْ]*|ي[ُِْ]*|وْ)#ال([أإبغحجكوخفعقيمه])").unwrap(),
            "#لْ$1",
        ),
        (
            Regex::new(r"#([فكب]*)ال([أإبغحجكوخفعقيمه])").unwrap(),
            "#$1لْ$2",
        ),
        (
            Regex::new(r"#ال([أإبغحجكوخفعقيمه])").unwrap(),
            "#ألْ$1",
        ),
        (
            Regex::new(r"#لل([أإبغحجكوخفعقيمه])").unwrap(),
            "#للْ$1",
        ),
    ]
});

/// Applies both stages of §4.B.2. Returns the cleaned input unchanged when
/// it is too short to carry a definite-article prefix (fewer than four
/// graphemes), matching the source's early return.
pub fn apply(text: &str) -> String {
    let text = cleaned(text);
    let mut units = pair_chars(&text);
    if units.len() < 4 {
        return text;
    }
    positional_stage(&mut units);
    let joined: String = units.concat();
    super::apply_rules(&joined, &SOLAR_RULES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_consonants_are_not_paired() {
        let units = pair_chars("#ال#");
        assert_eq!(units, vec!["#", "ا", "ل", "#"]);
    }

    #[test]
    fn consonant_and_diacritic_still_pair() {
        let units = pair_chars("#قَ#");
        assert_eq!(units, vec!["#", "قَ", "#"]);
    }

    #[test]
    fn solar_lam_deletes_and_doubles() {
        // اَلشَّمْسُ-style input, reduced to the bare skeleton the source
        // illustrates: ال + a solar letter drops the lam and doubles it.
        let out = apply("الشمس");
        assert!(out.starts_with("#أشّ") || out.contains("شّ"));
        assert!(!out.contains("ال"));
    }

    #[test]
    fn lunar_lam_keeps_the_lam_with_sukun() {
        let out = apply("القمر");
        assert!(out.contains("لْق") || out.contains("أَلْق"));
    }
}
