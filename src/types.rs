//! The data model shared across every pipeline stage: graphemes, the
//! skeleton alphabet, meters, feet, and rhyme analysis.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The 37-symbol letter inventory (§3), in source declaration order.
/// `#` is the word-boundary sentinel, never a pronounced letter.
pub const LETTERS: &[char] = &[
    'ا', 'أ', 'إ', 'آ', 'ء', 'ئ', 'ؤ', 'ى', 'ب', 'ت', 'ة', 'ث', 'ج', 'ح', 'خ', 'د', 'ذ', 'ر', 'ز',
    'ش', 'س', 'ص', 'ض', 'ط', 'ظ', 'ع', 'غ', 'ف', 'ق', 'ك', 'ل', 'م', 'ن', 'ه', 'و', 'ي', '#',
];

/// The 8-symbol diacritic inventory (§3).
pub const DIACRITICS: &[char] = &['ّ', 'َ', 'ُ', 'ِ', 'ً', 'ٌ', 'ٍ', 'ْ'];

/// Word-boundary sentinel used throughout the prosodic-form pipeline.
/// Never leaks into a public output string.
pub const BOUNDARY: char = '#';

pub fn is_letter(c: char) -> bool {
    LETTERS.contains(&c)
}

pub fn is_diacritic(c: char) -> bool {
    DIACRITICS.contains(&c)
}

/// One indivisible letter+diacritic unit, or the `#` boundary sentinel on
/// its own (§3 Grapheme).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grapheme {
    pub letter: char,
    pub diacritic: Option<char>,
}

impl Grapheme {
    pub fn boundary() -> Self {
        Grapheme {
            letter: BOUNDARY,
            diacritic: None,
        }
    }

    pub fn is_boundary(&self) -> bool {
        self.letter == BOUNDARY
    }

    pub fn push_to(&self, out: &mut String) {
        out.push(self.letter);
        if let Some(d) = self.diacritic {
            out.push(d);
        }
    }
}

impl std::fmt::Display for Grapheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter)?;
        if let Some(d) = self.diacritic {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

/// A classical meter (*baḥr*), or its shortened (*majzūʾ*/*manhūk*) variant.
///
/// Names are the stable ASCII identifiers of §3; `Unknown` is the outcome of
/// an unmatched skeleton, not an error (§7.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Meter {
    Taweel,
    Baseet,
    Madeed,
    Kamel,
    Rajaz,
    Ramal,
    Saree3,
    Khafeef,
    Munsare7,
    Wafer,
    AhadhKamel,
    Mutakareb,
    Mutadarak,
    MukhallaBaseet,
    MajzuuBaseet,
    MajzuuKamel,
    MajzuuRamal,
    MajzuuSaree3,
    MajzuuKhafeef,
    MajzuuMunsare7,
    MajzuuMutakareb,
    MajzuuMutadarak,
    Hazaj,
    MajzuuWafer,
    MajzuuRajaz,
    Modare3,
    Moktadab,
    Mojtath,
    ManhookRajaz,
    Unknown,
}

impl Meter {
    /// Stable ASCII identifier, as returned across the public API (§6).
    pub fn as_str(self) -> &'static str {
        match self {
            Meter::Taweel => "taweel",
            Meter::Baseet => "baseet",
            Meter::Madeed => "madeed",
            Meter::Kamel => "kamel",
            Meter::Rajaz => "rajaz",
            Meter::Ramal => "ramal",
            Meter::Saree3 => "saree3",
            Meter::Khafeef => "khafeef",
            Meter::Munsare7 => "munsare7",
            Meter::Wafer => "wafer",
            Meter::AhadhKamel => "ahadh_kamel",
            Meter::Mutakareb => "mutakareb",
            Meter::Mutadarak => "mutadarak",
            Meter::MukhallaBaseet => "mukhalla_baseet",
            Meter::MajzuuBaseet => "majzuu_baseet",
            Meter::MajzuuKamel => "majzuu_kamel",
            Meter::MajzuuRamal => "majzuu_ramal",
            Meter::MajzuuSaree3 => "majzuu_saree3",
            Meter::MajzuuKhafeef => "majzuu_khafeef",
            Meter::MajzuuMunsare7 => "majzuu_munsare7",
            Meter::MajzuuMutakareb => "majzuu_mutakareb",
            Meter::MajzuuMutadarak => "majzuu_mutadarak",
            Meter::Hazaj => "hazaj",
            Meter::MajzuuWafer => "majzuu_wafer",
            Meter::MajzuuRajaz => "majzuu_rajaz",
            Meter::Modare3 => "modare3",
            Meter::Moktadab => "moktadab",
            Meter::Mojtath => "mojtath",
            Meter::ManhookRajaz => "manhook_rajaz",
            Meter::Unknown => "unknown",
        }
    }

    pub fn is_unknown(self) -> bool {
        matches!(self, Meter::Unknown)
    }
}

impl std::fmt::Display for Meter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named prosodic foot (*tafʿīla*) aligned to the letters it spans.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Foot {
    /// Canonical Arabic name, e.g. `فَعُوْلُنْ`, or the `????` placeholder.
    pub name: String,
    /// The letters (display-formatted, see `display_letters`) this foot covers.
    pub letters: String,
}

/// Applies the alif-maqṣūra / tāʾ-marbūṭa display spacing described in
/// SPEC_FULL.md (a cosmetic formatting step, not a data transform: it must
/// never be applied before letter-span lengths are checked against `chars`).
pub fn display_letters(letters: &str) -> String {
    letters.replace('ى', "ى ").replace('ة', "ة ")
}

/// The full result of analysing one classical verse (§6).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VerseResult {
    /// The verse after normalisation, boundary sentinels rendered as spaces.
    pub shater: String,
    /// Alias of `shater`: the *arūḍī* writing of the verse.
    pub arrodi: String,
    /// Letter-only projection of `arrodi`.
    pub chars: String,
    /// Diacritic-only projection of `arrodi`, normalised to fatḥa/sukūn.
    pub harakat: String,
    /// The `U`/`-` skeleton.
    pub rokaz: String,
    pub meter: Meter,
    pub feet: Vec<Foot>,
}

/// The result of analysing a free-verse (*tafʿīla*) poem (§6).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PoemResult {
    pub meter: Meter,
    /// The skeleton sub-pattern consumed by each foot, in order.
    pub tafaeel: Vec<String>,
    /// The canonical Arabic name of each foot, parallel to `tafaeel`.
    pub names: Vec<String>,
    /// The display-formatted letter span of each foot, parallel to `tafaeel`.
    pub words: Vec<String>,
}

/// Classification of a rhyme's structural class (§3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RhymeClass {
    /// *muṭlaqa*: the rhyme ends in a pronounced long vowel or hāʾ.
    Absolute,
    /// *muqayyada*: the rhyme ends in a bare consonant.
    Bound,
}

/// One verse's rhyme (*qāfiya*) analysis (§3, §4.H).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RhymeAnalysis {
    pub text: String,
    pub class: RhymeClass,
    /// The anchoring consonant (letter + its vowel), e.g. `"رَ"`.
    pub rawi: String,
    /// The vowel/hāʾ following the *rawī*, if any.
    pub wasl: String,
    /// The long vowel after a hāʾ *waṣl*, if any.
    pub khuruj: String,
    /// An alif three positions before the *rawī*, if present.
    pub tasis: String,
    /// The consonant between *taʾsīs* and *rawī*, if present.
    pub dakhil: String,
    /// A long vowel immediately before the *rawī*, if present.
    pub ridf: String,
    /// Arabic description composing class + which components are present.
    pub type_description: String,
    /// Cross-verse diagnostics against the poem's baseline (empty for the baseline itself).
    pub errors: Vec<String>,
}

/// One line's outcome in a multi-verse rhyme pass: either an analysis, or
/// the `empty` marker for a blank input line (§7.2).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RhymeSlot {
    Analysis(RhymeAnalysis),
    Empty,
}

/// The outcome of analysing a whole poem's rhymes (§6, §7.2): either the
/// per-line slots, or the distinguished marker for "every verse was empty".
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RhymeSet {
    Lines(Vec<RhymeSlot>),
    AllEmpty,
}

/// Per-foot outcome of a wizard validation pass (§4.I).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FootReport {
    Ok {
        tafeela: String,
        chars: String,
    },
    Err {
        tafeela: String,
        chars: String,
        errors: Vec<String>,
    },
}
