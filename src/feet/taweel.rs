//! The full foot walk for *ṭawīl* (§4.E), the only long meter with every
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

    let first = skeleton.get(0..3).unwrap_or("");
    if first == "U--" {
        feet.push(Foot {
            name: "فَعُوْلُنْ".to_string(),
            letters: take(&chars, i, 10),
        });
        i += 10;
    } else if first == "U-U" {
        feet.push(Foot {
            name: "فَعُوْلُ".to_string(),
            letters: take(&chars, i, 8),
        });
        i += 8;
    }

    feet.push(Foot {
        name: "مَفَاْعِيْلُنْ".to_string(),
        letters: take(&chars, i, 14),
    });
    i += 14;

    let second = skeleton.get(7..10).unwrap_or("");
    if second == "U--" {
        feet.push(Foot {
            name: "فَعُوْلُنْ".to_string(),
            letters: take(&chars, i, 10),
        });
        i += 10;
    } else if second == "U-U" {
        feet.push(Foot {
            name: "فَعُوْلُ".to_string(),
            letters: take(&chars, i, 8),
        });
        i += 8;
    }

    let tail = skeleton.get(10..).unwrap_or("");
    if tail == "U---" {
        feet.push(Foot {
            name: "مَفَاْعِيْلُنْ".to_string(),
            letters: take(&chars, i, 14),
        });
    } else if tail == "U-U-" {
        feet.push(Foot {
            name: "مَفَاْعِلُنْ".to_string(),
            letters: take(&chars, i, 12),
        });
    } else if tail == "U--" {
        feet.push(Foot {
            name: "فَعُوْلُنْ".to_string(),
            letters: take(&chars, i, 10),
        });
    }

    feet
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_form_yields_four_feet() {
        let feet = segment("U--U---U-U--U---", &"أ".repeat(48));
        assert_eq!(feet.len(), 4);
        assert_eq!(feet[0].name, "فَعُوْلُنْ");
        assert_eq!(feet[1].name, "مَفَاْعِيْلُنْ");
    }

    #[test]
    fn short_first_foot_uses_shorter_name() {
        let feet = segment("U-UU---U-U--U---", &"أ".repeat(46));
        assert_eq!(feet[0].name, "فَعُوْلُ");
    }
}
