//! The full foot walk for *basīṭ* (§4.E), the second meter with every
//! permitted substitution worked out explicitly.

use crate::types::Foot;

fn take(chars: &[char], start: usize, len: usize) -> String {
    chars
        .get(start..(start + len).min(chars.len()))
        .unwrap_or(&[])
        .iter()
        .collect()
}

pub fn segment(skeleton: &str, chars: &str) -> Vec<Foot> {
    let chars: Vec<char> = chars.chars().collect();
    let mut feet = Vec::with_capacity(4);
    let mut i = 0;

    let first = skeleton.get(0..4).unwrap_or("");
    if first == "--U-" {
        feet.push(Foot {
            name: "مُسْتَفْعِلُنْ".to_string(),
            letters: take(&chars, i, 14),
        });
        i += 14;
    } else if first == "U-U-" {
        feet.push(Foot {
            name: "مُتَفْعِلُنْ".to_string(),
            letters: take(&chars, i, 12),
        });
        i += 12;
    } else if first == "-UU-" {
        feet.push(Foot {
            name: "مُسْتَعِلُنْ".to_string(),
            letters: take(&chars, i, 12),
        });
        i += 12;
    }

    let second = skeleton.get(4..7).unwrap_or("");
    if second == "-U-" {
        feet.push(Foot {
            name: "فَاْعِلُنْ".to_string(),
            letters: take(&chars, i, 10),
        });
        i += 10;
    } else if second == "UU-" {
        feet.push(Foot {
            name: "فَعِلُنْ".to_string(),
            letters: take(&chars, i, 8),
        });
        i += 8;
    }

    feet.push(Foot {
        name: "مُسْتَفْعِلُنْ".to_string(),
        letters: take(&chars, i, 14),
    });
    i += 14;

    let tail = skeleton.get(11..14).unwrap_or("");
    if tail == "-U-" {
        feet.push(Foot {
            name: "فَاْعِلُنْ".to_string(),
            letters: take(&chars, i, 10),
        });
    } else if tail == "UU-" {
        feet.push(Foot {
            name: "فَعِلُنْ".to_string(),
            letters: take(&chars, i, 8),
        });
    } else if tail == "--" {
        feet.push(Foot {
            name: "فَاْلُنْ".to_string(),
            letters: take(&chars, i, 8),
        });
    }

    feet
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_form_yields_four_feet() {
        let feet = segment("--U--U---U--U-", &"أ".repeat(48));
        assert_eq!(feet.len(), 4);
        assert_eq!(feet[0].name, "مُسْتَفْعِلُنْ");
        assert_eq!(feet[3].name, "فَاْعِلُنْ");
    }
}
