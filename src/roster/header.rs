use super::{is_student_column, CourseHeader, Line, COURSE_HEADER_KEYS};

fn is_header_key(token: &str) -> bool {
    COURSE_HEADER_KEYS.contains(&token)
}

/// Recover recognized course-metadata fields from header tokens.
///
/// A recognized key claims the token after it as its value, unless that
/// token is itself a key or a student-table column name, in which case the
/// field is recorded empty. Each key is captured at most once; repeats are
/// ignored. Values shed leading/trailing ':' and ' ' left over from the
/// "Key : value" print layout.
pub fn extract(tokens: &[Line]) -> CourseHeader {
    let mut header = CourseHeader::default();

    for (i, token) in tokens.iter().enumerate() {
        // If a student-table column shows up the header/body split misfired;
        // stop before swallowing roster data as field values.
        if is_student_column(token) {
            break;
        }

        let Some(slot) = header.slot_mut(token) else {
            continue;
        };
        if slot.is_some() {
            continue;
        }

        let value = tokens
            .get(i + 1)
            .filter(|next| !is_header_key(next) && !is_student_column(next))
            .map(|next| next.trim_matches([':', ' ']).to_string())
            .unwrap_or_default();
        *slot = Some(value);
    }

    header
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(lines: &[&str]) -> Vec<Line> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn captures_key_value_pairs() {
        let h = extract(&toks(&["Course", "MATH101", "Instructor", "Jane Doe"]));
        assert_eq!(h.course.as_deref(), Some("MATH101"));
        assert_eq!(h.instructor.as_deref(), Some("Jane Doe"));
        assert_eq!(h.semester, None);
    }

    #[test]
    fn strips_colon_space_punctuation() {
        let h = extract(&toks(&["Course", ": ENG101", "Day/Time:", "MWF 08:00-08:50"]));
        assert_eq!(h.course.as_deref(), Some("ENG101"));
        assert_eq!(h.day_time.as_deref(), Some("MWF 08:00-08:50"));
    }

    #[test]
    fn key_at_end_of_tokens_is_empty() {
        let h = extract(&toks(&["Section"]));
        assert_eq!(h.section.as_deref(), Some(""));
    }

    #[test]
    fn key_followed_by_key_is_empty() {
        let h = extract(&toks(&["Course", "Instructor", "Jane Doe"]));
        assert_eq!(h.course.as_deref(), Some(""));
        assert_eq!(h.instructor.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn duplicate_key_keeps_first_value() {
        let h = extract(&toks(&["Section", "01", "Section", "02"]));
        assert_eq!(h.section.as_deref(), Some("01"));
    }

    #[test]
    fn stops_at_student_column() {
        let h = extract(&toks(&["Course", "ENG101", "Full Name", "Instructor", "Jane"]));
        assert_eq!(h.course.as_deref(), Some("ENG101"));
        assert_eq!(h.instructor, None);
    }

    #[test]
    fn key_followed_by_student_column_is_empty() {
        let h = extract(&toks(&["Section", "Full Name"]));
        assert_eq!(h.section.as_deref(), Some(""));
    }
}
