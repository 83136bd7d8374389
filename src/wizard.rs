//! Component I: validates a verse (classical or free) against a
//! caller-supplied list of expected *tafʿīla* patterns, reporting
//! per-foot OK/error with an Arabic diagnostic (§4.I).

use crate::normalize;
use crate::skeleton;
use crate::types::{display_letters, FootReport, BOUNDARY};

fn char_name(n: usize) -> String {
    const NAMES: &[(usize, &str)] = &[
        (1, "الأوّل"),
        (2, "الثّاني"),
        (3, "الثّالث"),
        (4, "الرّابع"),
        (5, "الخامس"),
        (6, "السّادس"),
        (7, "السّابع"),
        (8, "الثّامن"),
        (9, "التّاسع"),
        (10, "العاشر"),
    ];
    NAMES
        .iter()
        .find(|(k, _)| *k == n)
        .map(|(_, s)| s.to_string())
        .unwrap_or_else(|| format!("رقم {n}"))
}

fn state_name(n: usize) -> String {
    const NAMES: &[(usize, &str)] = &[
        (1, "الأولى"),
        (2, "الثّانية"),
        (3, "الثّالثة"),
        (4, "الرّابعة"),
        (5, "الخامسة"),
        (6, "السّادسة"),
    ];
    NAMES
        .iter()
        .find(|(k, _)| *k == n)
        .map(|(_, s)| s.to_string())
        .unwrap_or_else(|| format!("رقم {n}"))
}

/// The canonical Arabic name of whichever alternative in `patterns`
/// literally equals `current_status`, or empty if none does.
fn name_for(current_status: &str, patterns: &[&str], names: &[&str]) -> String {
    patterns
        .iter()
        .position(|p| *p == current_status)
        .map(|i| names[i].to_string())
        .unwrap_or_default()
}

/// Letters consumed by a skeleton segment: each `U` is one letter, each
/// `-` is two, doubled again to match the spacing the source's foot
/// tables use (§4.E: `فَعُوْلُنْ` for `U--` consumes 10 letters).
fn letters_consumed(segment: &str) -> usize {
    segment.chars().map(|c| if c == '-' { 2 } else { 1 }).sum::<usize>() * 2
}

/// Compares `current` (the actual skeleton prefix) against every
/// alternative in `patterns`, producing one diagnostic per alternative
/// that doesn't match — naming the offending letter by 1-based ordinal,
/// or flagging the segment as metrically too short/too long (§4.I).
fn compare_with_tafeela(current: &str, patterns: &[&str], names: &[&str]) -> Vec<String> {
    let mut errors = Vec::new();
    let current_chars: Vec<char> = current.chars().collect();

    for (i, (pattern, name)) in patterns.iter().zip(names.iter()).enumerate() {
        let state_no = i + 1;
        let pattern_chars: Vec<char> = pattern.chars().collect();
        let pattern_at_least_as_long = pattern_chars.len() >= current_chars.len();
        let common = current_chars.len().min(pattern_chars.len());

        let mut char_pos = 0usize;
        let mut diagnosed = false;

        for j in 0..common {
            let curr_char = current_chars[j];
            char_pos += if curr_char == 'U' { 1 } else { 2 };

            if curr_char == pattern_chars[j] {
                continue;
            }

            if curr_char == 'U' {
                errors.push(format!(
                    "<b> الصورة{} ({name}) :</b>يجب تسكين الحرف {} كي نحصل على تقطيع متوافق مع هذه الصورة",
                    state_name(state_no),
                    char_name(char_pos + 1)
                ));
            } else {
                errors.push(format!(
                    "<b> الصورة{} ({name}) :</b>يجب أن يكون الحرف {} متحركاً كي نحصل على تقطيع متوافق مع هذه الصورة",
                    state_name(state_no),
                    char_name(char_pos)
                ));
            }
            diagnosed = true;
            break;
        }

        if !diagnosed {
            let tail = if pattern_at_least_as_long {
                "التقطيع الحالي لهذه التفعيلة أقصر وزنيّاً من هذه الصورة"
            } else {
                "التقطيع الحالي لهذه التفعيلة أطول وزنيّاً من هذه الصورة"
            };
            errors.push(format!("<b> الصورة{} ({name}) :</b>{tail}", state_name(state_no)));
        }
    }

    errors
}

/// Consumes one foot's worth of `rokaz`/`chars`, trying every alternative
/// in `patterns` in order and accepting the first literal match; on
/// failure it still consumes the first alternative's length (so the
/// caller can keep walking in free-verse mode) and attaches diagnostics.
fn step(rokaz: &mut String, chars: &mut Vec<char>, patterns: &[&str], names: &[&str]) -> FootReport {
    let matched = patterns.iter().find(|pattern| {
        let take = pattern.len().min(rokaz.len());
        &rokaz[..take] == **pattern
    });

    let consumed_len = matched.map(|p| p.len()).unwrap_or_else(|| patterns[0].len());
    let take = consumed_len.min(rokaz.len());
    let current_status = rokaz[..take].to_string();
    let name = name_for(&current_status, patterns, names);

    let letter_count = letters_consumed(&current_status).min(chars.len());
    let span: String = chars.drain(..letter_count).collect();
    *rokaz = rokaz[take..].to_string();

    match matched {
        Some(_) => FootReport::Ok {
            tafeela: name,
            chars: display_letters(&span),
        },
        None => FootReport::Err {
            tafeela: name,
            chars: display_letters(&span),
            errors: compare_with_tafeela(&current_status, patterns, names),
        },
    }
}

/// Validates a classical verse against one expected pattern group per
/// foot (§4.I, §6). Halts at the first mismatched foot.
pub fn wizard_classical(
    text: &str,
    is_ajuz: bool,
    expected_patterns: &[Vec<&str>],
    expected_names: &[Vec<&str>],
) -> Vec<FootReport> {
    let normalized = normalize::normalize(text, is_ajuz);
    let continuous: String = normalized.chars().filter(|&c| c != BOUNDARY).collect();
    let extraction = skeleton::extract(&continuous);

    let mut rokaz = extraction.skeleton;
    let mut chars: Vec<char> = extraction.chars.chars().collect();
    let mut results = Vec::new();

    for (patterns, names) in expected_patterns.iter().zip(expected_names.iter()) {
        let report = step(&mut rokaz, &mut chars, patterns, names);
        let is_err = matches!(report, FootReport::Err { .. });
        results.push(report);
        if is_err {
            break;
        }
    }

    results
}

/// Validates a free-verse poem against one flat pattern list shared by
/// every foot (§4.I, §6). Unlike classical mode, it keeps walking past
/// a mismatch until the skeleton is consumed.
pub fn wizard_free_verse(text: &str, expected_patterns: &[&str], expected_names: &[&str]) -> Vec<FootReport> {
    let normalized = normalize::normalize(text, false);
    let continuous: String = normalized.chars().filter(|&c| c != BOUNDARY).collect();
    let extraction = skeleton::extract(&continuous);

    let mut rokaz = extraction.skeleton;
    let mut chars: Vec<char> = extraction.chars.chars().collect();
    let mut results = Vec::new();

    while !rokaz.is_empty() {
        results.push(step(&mut rokaz, &mut chars, expected_patterns, expected_names));
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_foot_reports_ok() {
        let groups = vec![vec!["U--"]];
        let names = vec![vec!["فَعُوْلُنْ"]];
        let reports = wizard_classical("فَعُوْلُنْ", false, &groups, &names);
        assert_eq!(reports.len(), 1);
        assert!(matches!(reports[0], FootReport::Ok { .. }));
    }

    #[test]
    fn mismatched_foot_reports_err_with_diagnostics() {
        let groups = vec![vec!["U--"]];
        let names = vec![vec!["فَعُوْلُنْ"]];
        // "مَفَاْعِيْلُنْ" skeletonises to "U---", not "U--".
        let reports = wizard_classical("مَفَاْعِيْلُنْ", false, &groups, &names);
        assert_eq!(reports.len(), 1);
        match &reports[0] {
            FootReport::Err { errors, .. } => assert!(!errors.is_empty()),
            _ => panic!("expected an error report"),
        }
    }

    #[test]
    fn classical_mode_halts_on_first_error() {
        let groups = vec![vec!["---"], vec!["U--"]];
        let names = vec![vec!["؟؟؟؟"], vec!["فَعُوْلُنْ"]];
        let reports = wizard_classical("فَعُوْلُنْ", false, &groups, &names);
        assert_eq!(reports.len(), 1);
    }
}
