//! The fixed meter pattern table (§3, §4.D): one regular expression per
//! meter over the `U`/`-` skeleton alphabet, tried in this declaration
//! order. The source wraps each pattern in `%...%` sentinels and matches
//! a `%`-delimited skeleton by prefix; since every pattern ends in `%`
//! that is a full match, so here each pattern is anchored with `^...$`
//! against the bare skeleton directly.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Meter;

fn anchored(pattern: &str) -> Regex {
    Regex::new(&format!("^{pattern}$")).unwrap_or_else(|e| panic!("bad meter pattern: {e}"))
}

pub static PATTERNS: Lazy<Vec<(Meter, Regex)>> = Lazy::new(|| {
    vec![
        (Meter::Taweel, anchored(r"U-[-U]U---U-[U-]U(---|-U-|--)")),
        (Meter::Baseet, anchored(r"(--U-|U-U-)(-U-|UU-)--U-(-U-|UU-|--)")),
        (Meter::Madeed, anchored(r"[-U]U--[-U]U-(-U--|-U-U|-U-|UU-)")),
        (Meter::Kamel, anchored(r"(UU|-)-U-(UU|-)-U-(UU-U-|--U-|UU--|---)")),
        (
            Meter::Rajaz,
            anchored(r"(--U-|U-U-|-UU-|UUU-)(--U-|U-U-|-UU-|UUU-)(--U-|U-U-|-UU-|UUU-|---)"),
        ),
        (
            Meter::Ramal,
            anchored(r"(-U--|UU--|UU-U|-U-U)(-U--|UU--|UU-U|-U-U)(-U--|-U-|UU-|-U-U)"),
        ),
        (
            Meter::Saree3,
            anchored(r"(--U-|U-U-|-UU-|UUU-)(--U-|U-U-|-UU-|UUU-)(-U-|-U-U)"),
        ),
        (
            Meter::Khafeef,
            anchored(r"(-U--|UU--)(--U-|U-U-)(-U--|UU--|---|UU-)"),
        ),
        (
            Meter::Munsare7,
            anchored(r"(--U-|U-U-|-UU-|UUU-)(---U|-U-U|UU-U)(--U-|-UU-|---)"),
        ),
        (Meter::Wafer, anchored(r"(U-UU-|U---)(U-UU-|U---)(U--)")),
        (Meter::AhadhKamel, anchored(r"(UU-U-|--U-)(UU-U-|--U-)UU-")),
        (Meter::Mutakareb, anchored(r"(U--|U-U){3}(U--|U-U|U-)")),
        (
            Meter::Mutadarak,
            anchored(r"(-U-|UU-|--)(-U-|UU-|--)(-U-|UU-|--)(-U-|UU-|--)"),
        ),
        (Meter::MukhallaBaseet, anchored(r"(--U-|U-U-|-UU-)-U-U--")),
        (
            Meter::MajzuuBaseet,
            anchored(r"(--U-|U-U-|-UU-|UUU-)(-U-|UU-)(--U-|---|--U-U)"),
        ),
        (
            Meter::MajzuuKamel,
            anchored(r"(UU-U-|--U-)(UU-U-|UU--|--U-|UU-U-U|UU-U--)"),
        ),
        (
            Meter::MajzuuRamal,
            anchored(r"(-U--|UU--)(-U--|UU--|-U--U|-U-)"),
        ),
        (
            Meter::MajzuuSaree3,
            anchored(r"(--U-|U-U-|-UU-|UUU-)(-U-|-U-U)"),
        ),
        (Meter::MajzuuKhafeef, anchored(r"(-U--|UU--)(--U-|U-U-)")),
        (
            Meter::MajzuuMunsare7,
            anchored(r"(--U-|U-U-|-UU-|UUU-)(---U|---)"),
        ),
        (
            Meter::MajzuuMutakareb,
            anchored(r"(U--|U-U){2}(U--|U-U|U-|-)"),
        ),
        (
            Meter::MajzuuMutadarak,
            anchored(r"(-U-|UU-|--){2}(-U-|-U-U|UU--)"),
        ),
        (Meter::Hazaj, anchored(r"(U---|U--U)(U---|U--U)")),
        (Meter::MajzuuWafer, anchored(r"(U-UU-|U---)(U-UU-|U---)")),
        (
            Meter::MajzuuRajaz,
            anchored(r"(--U-|U-U-|-UU-|UUU-)(--U-|U-U-|-UU-|UUU-|---|--U--)"),
        ),
        (Meter::Modare3, anchored(r"(U--U|U-U-)-U--")),
        (Meter::Moktadab, anchored(r"-U-U-UU-")),
        (
            Meter::Mojtath,
            anchored(r"(--U-|U-U-)(-U--|UU--|---)"),
        ),
        (
            Meter::ManhookRajaz,
            anchored(r"(--U-|U-U-|-UU-|UUU-|---)"),
        ),
    ]
});
