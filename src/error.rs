//! Crate-wide error types.
//!
//! Most of the analysis pipeline is total: every rewrite pass produces a
//! well-formed string for any input, and an unmatched meter or an unmatched
//! rhyme baseline is an ordinary value, not a failure (see `types::Meter::Unknown`
//! and `rhyme::RhymeSet::AllEmpty`). The two spots where the domain itself
//! names a distinguished failure outcome get a real `Err`.

use thiserror::Error;

/// Failure of the free-verse engine to settle on a dominant *tafʿīla*.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FreeVerseError {
    /// No candidate meter's characteristic pattern matched the poem's opening.
    #[error("لم يتم التعرّف على وزن هذه القصيدة للأسف , تأكّد من إدخال نصّ القصيدة بشكل صحيح")]
    UnrecognisedMeter,
}

/// Failure of the *ishbāʿ* (vowel-lengthening) search.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IshbaaError {
    /// None of the 2^k lengthening subsets produced a recognised meter.
    #[error("unknownAlso")]
    UnknownAlso,
    /// The verse has more lengthenable pronoun positions than `SearchLimits::max_pronouns`.
    #[error("pronoun count {found} exceeds search cap {limit}")]
    TooManyPronouns { found: usize, limit: usize },
}
