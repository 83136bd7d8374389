//! Component E: walks a meter's skeleton into its named feet (§4.E).
//!
//! Only `taweel` and `baseet` have a worked-out foot walk (this mirrors
//! the preserved state of the system this module is modelled on — see
//! DESIGN.md's Open Questions). Every other meter returns no feet; the
//! verse's meter name is still reported.

mod baseet;
mod taweel;

use crate::types::{Foot, Meter};

/// Segments `skeleton`/`chars` into feet for `meter`, or an empty list if
/// this meter has no foot walk implemented yet.
pub fn segment(meter: Meter, skeleton: &str, chars: &str) -> Vec<Foot> {
    match meter {
        Meter::Taweel => taweel::segment(skeleton, chars),
        Meter::Baseet => baseet::segment(skeleton, chars),
        _ => Vec::new(),
    }
}
