use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use super::{Line, Student};

/// Bodies shorter than this hold at most one student and carry no printed
/// line number, so they take the lonely-student path. The value is coupled
/// to the token width of one numbered student record; do not re-derive it.
const LONELY_BODY_LIMIT: usize = 5;

// IDs are an optional "TU-" prefix plus exactly 5 digits. The \b guard plus
// the mandatory whitespace around each field keeps a 5-digit window of a
// longer digit run from matching.
static ROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2})\s+((?:TU-)?\d{5})\s+([^\d+]+)").unwrap());
static LONELY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*((?:TU-)?\d{5})\s+([^\d+]+)").unwrap());

/// Parse roster body tokens into students, picking the regime by body size.
pub fn extract(body: &[Line]) -> Vec<Student> {
    if body.len() < LONELY_BODY_LIMIT {
        lonely_student(body)
    } else {
        numbered_students(body)
    }
}

/// Single-student shape: "[TU-]12345 Name", no printed line number.
fn lonely_student(body: &[Line]) -> Vec<Student> {
    if body.is_empty() {
        return Vec::new();
    }

    let text = body.join(" ");
    match LONELY_RE.captures(&text) {
        Some(caps) => vec![Student {
            line_no: Some(1),
            student_id: caps[1].to_string(),
            full_name: caps[2].to_string(),
        }],
        None => {
            warn!(text = %text, "could not extract lonely student");
            Vec::new()
        }
    }
}

/// Multi-student shape: repeated "lineno [TU-]12345 Name" runs, scanned in
/// document order. Printed line numbers are a data-quality signal only:
/// gaps are warned about, never used to drop or reorder records.
fn numbered_students(body: &[Line]) -> Vec<Student> {
    let text = body.join(" ");
    let mut students: Vec<Student> = Vec::new();
    let mut last_no: Option<u32> = None;

    for caps in ROW_RE.captures_iter(&text) {
        let line_no = caps[1].parse::<u32>().ok();

        if let (Some(prev), Some(cur)) = (last_no, line_no) {
            if cur != prev + 1 {
                warn!(expected = prev + 1, got = cur, "roster line numbers out of sequence");
            }
        }
        last_no = line_no;

        students.push(Student {
            line_no,
            student_id: caps[2].to_string(),
            full_name: caps[3].to_string(),
        });
    }

    if students.is_empty() {
        warn!(text = %text, "no students matched in roster body");
    }

    students
}

// ── Tests ──
