//! B.1 special-case lexicon: an ordered list of match/replacement rules for
//! words whose prosodic reading the bare script doesn't spell out —
//! the plural wāw, ʿamr, the divine name, demonstratives, relative
//! pronouns, and a handful of proper names (§4.B.1).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::grapheme::cleaned;

static RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        // Plural waw (واو الجمع): the alif after a word-final waw is silent.
        (Regex::new(r"و[َُِْ]*ا#").unwrap(), "وْ#"),
        // عمرو and its case-marked forms.
        (Regex::new(r"#عمرٍو#").unwrap(), "#عمْرٍ#"),
        (Regex::new(r"#عمروٍ#").unwrap(), "#عمْرٍ#"),
        (Regex::new(r"#عمرًو#").unwrap(), "#عمْرً#"),
        (Regex::new(r"#عمروً#").unwrap(), "#عمْرً#"),
        (Regex::new(r"#عمرٌو#").unwrap(), "#عمْرٌ#"),
        (Regex::new(r"#عمروٌ#").unwrap(), "#عمْرٌ#"),
        (Regex::new(r"#عمرو#").unwrap(), "#عمْر#"),
        // Restore the elongated alif madda to its hamza+alif origin.
        (Regex::new(r"آ").unwrap(), "أا"),
        // The divine-name paradigm, in all its case forms.
        (Regex::new(r"ى#الله#").unwrap(), "لّاه#"),
        (Regex::new(r"تالله#").unwrap(), "تلّاه#"),
        (Regex::new(r"ا#الله#").unwrap(), "لّاه#"),
        (Regex::new(r"اللهُ#").unwrap(), "الْلاهُ#"),
        (Regex::new(r"اللهَ#").unwrap(), "الْلاهَ#"),
        (Regex::new(r"اللهِ#").unwrap(), "الْلاهِ#"),
        (Regex::new(r"الله#").unwrap(), "الْلاه#"),
        (Regex::new(r"للهِ#").unwrap(), "للْلاهِ#"),
        (Regex::new(r"لله#").unwrap(), "للْلاه#"),
        (Regex::new(r"#الل[َّ]*هم([َّ]*)#").unwrap(), "#الْلاهم$1#"),
        // الإله / الرحمن and their prefixed forms.
        (Regex::new(r"#الإله([َُِْ]*)#").unwrap(), "#الإلاه$1#"),
        (Regex::new(r"#لل[ْ]*إله([َُِْ]*)#").unwrap(), "للْإلاه$1#"),
        (
            Regex::new(r"#إله([َُِْ]*)([يهمنا])([َُِْ]*)#").unwrap(),
            "#إلاه$1$2$3#",
        ),
        (
            Regex::new(r"الر[َّ]*حمن([َُِْ]*)#").unwrap(),
            "الرَّحْمان$1#",
        ),
        (
            Regex::new(r"للر[َّ]*حمن([َُِْ]*)#").unwrap(),
            "لِرَّحْمان$1#",
        ),
        // Demonstrative pronouns (أسماء الإشارة) whose pronounced long
        // vowel is orthographically suppressed.
        (
            Regex::new(r"#([فلكب]*)ه[َ]*ذ[َ]*ا[ْ]*#").unwrap(),
            "#${1}هَاذَا#",
        ),
        (
            Regex::new(r"#([فلكب]*)ه[َ]*ذ[ِ]*ه([َُِ]*)#").unwrap(),
            "#${1}هَاذِه$2#",
        ),
        (
            Regex::new(r"#([فلكب]*)ه[َُِ]*ؤ[َُِ]*ل[َِ]*ا[ْ]*ء([َُِْ]*)#").unwrap(),
            "#${1}هَاؤُلَاء$2#",
        ),
        (
            Regex::new(r"#([فلكب]*)ذ[َُِ]*ل[َُِ]*ك([َِ]*)#").unwrap(),
            "#${1}ذَالِك$2#",
        ),
        (
            Regex::new(r"#([فلكب]*)ه[َُِ]*ذ[َُِ]*ي([َِ]*)#").unwrap(),
            "#${1}هَاذِي$2#",
        ),
        (
            Regex::new(r"#([فلكب]*)ه[َُِ]*ذ[َِ]*ا[ْ]*ن([َُِْ]*)#").unwrap(),
            "#${1}هَاذَان$2#",
        ),
        (
            Regex::new(r"#([فلكب]*)ه[َُِ]*ذ[َِ]*ي[ْ]*ن([َُِْ]*)#").unwrap(),
            "#${1}هَاذَيْن$2#",
        ),
        (
            Regex::new(r"#([فلكب]*)ه[َُِ]*ه[َِ]*ن[ْ]*ا([َُِْ]*)#").unwrap(),
            "#${1}هَاهُنَا#",
        ),
        (
            Regex::new(r"#([فلكب]*)ه[َُِ]*ه[َِ]*ن[ْ]*ا[ْ]*ك([َُِْ]*)#").unwrap(),
            "#${1}هَاهُنَاك$2#",
        ),
        (
            Regex::new(r"#([فلكب]*)ه[َُِ]*ك[َِ]*ذ[ْ]*ا([َُِْ]*)#").unwrap(),
            "#${1}هَاكَذَا#",
        ),
        // لكن(ّ) saakin or doubled.
        (Regex::new(r"#ل[َُِ]*ك[َِ]*ن([ْ]*)#").unwrap(), "#لَاْكِنْ#"),
        (Regex::new(r"#ل[َُِ]*ك[َِ]*ن([ّ]*)#").unwrap(), "#لَاْكِنْنَ#"),
        // Relative pronouns (الأسماء الموصولة) and their prefix variants.
        (
            Regex::new(r"#ا[َُِ]*ل[َُِ]*ذ[َُِ]*ي([َُِْ]*)#").unwrap(),
            "#اللّذِيْ#",
        ),
        (
            Regex::new(r"#([فبك]*)ا[َُِ]*ل[َُِ]*ذ[َُِ]*ي([َُِْ]*)#").unwrap(),
            "#${1}اللّذِيْ#",
        ),
        (
            Regex::new(r"#ل[َُِ]*ل[َُِ]*ذ[َُِ]*ي([َُِْ]*)#").unwrap(),
            "#لِلْلَذِيْ#",
        ),
        (
            Regex::new(r"#ا[َُِ]*ل[َُِ]*ت[َُِ]*ي([َُِْ]*)#").unwrap(),
            "#اللّتِيْ#",
        ),
        (
            Regex::new(r"#([فبك]*)ا[َُِ]*ل[َُِ]*ت[َُِ]*ي([َُِْ]*)#").unwrap(),
            "#${1}اللّتِيْ#",
        ),
        (
            Regex::new(r"#ل[َُِ]*ل[َُِ]*ت[َُِ]*ي([َُِْ]*)#").unwrap(),
            "#لِلْلَتِيْ#",
        ),
        (
            Regex::new(r"#ا[َُِ]*ل[َُِ]*ذ[َُِ]*ي[َُِ]*ن([َِ]*)#").unwrap(),
            "#اللّذِيْنَ#",
        ),
        (
            Regex::new(r"#([فبك]*)ا[َُِ]*ل[َُِ]*ذ[َُِ]*ي[َُِ]*ن([َِ]*)#").unwrap(),
            "#${1}اللّذِيْنَ#",
        ),
        (
            Regex::new(r"#ل[َُِ]*ل[َُِ]*ذ[َُِ]*ي[َُِ]*ن([َِ]*)#").unwrap(),
            "#لِلْلَذِيْنَ#",
        ),
        // Proper names whose pronounced lengths differ from script.
        (
            Regex::new(r"#د[َُِ]*ا[َُِ]*و[َُِ]*د([ٌٍَِ]*|[اً]*)#").unwrap(),
            "#دَاوُوْد$1#",
        ),
        (
            Regex::new(r"#ط[َُِ]*ا[َُِ]*و[َُِ]*س([ٌٍَِ]*|[اً]*)#").unwrap(),
            "#طَاوُوْس$1#",
        ),
        (
            Regex::new(r"#ن[َُِ]*ا[َُِ]*و[َُِ]*س([ٌٍَِ]*|[اً]*)#").unwrap(),
            "#نَاوُوْس$1#",
        ),
        (Regex::new(r"#ط[َُِ]*ه[َُِ]*#").unwrap(), "#طاها#"),
    ]
});

/// Cleans `text` and applies the B.1 rule list in declaration order.
pub fn apply(text: &str) -> String {
    let text = cleaned(text);
    super::apply_rules(&text, &RULES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_waw_silences_the_trailing_alif() {
        let out = apply("قالوا");
        assert_eq!(out, "#قالوْ#");
    }

    #[test]
    fn bare_amr_loses_its_silent_waw() {
        let out = apply("عمرو");
        assert_eq!(out, "#عمْر#");
    }

    #[test]
    fn alif_madda_restores_to_hamza_plus_alif() {
        let out = apply("آمن");
        assert!(out.starts_with("#أا"));
    }
}
