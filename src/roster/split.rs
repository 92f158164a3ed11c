use tracing::warn;

use super::{Line, EMAIL_SENTINEL, STUDENT_ID_SENTINEL, TOTAL_SENTINEL};

/// Regions of a flattened course, driven by the sentinel tokens:
/// course metadata runs until "StudentID", the student-table column header
/// runs until "Email", the roster body runs until "Total".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    BeforeHeader,
    InHeader,
    InBody,
    Done,
}

/// Split a flattened course into (header tokens, roster body tokens).
///
/// Degraded shapes are tolerated: a course with no "StudentID" is all
/// header; a column header with no closing "Email" yields an empty body; a
/// roster with no trailing "Total" runs to the end of the course. Each case
/// is warned about with the offending tokens.
pub fn split_head_body(course: &[Line]) -> (Vec<Line>, Vec<Line>) {
    let mut state = State::BeforeHeader;
    let mut header = Vec::new();
    let mut body = Vec::new();

    for token in course {
        match state {
            State::BeforeHeader => {
                if token == STUDENT_ID_SENTINEL {
                    state = State::InHeader;
                } else {
                    header.push(token.clone());
                }
            }
            State::InHeader => {
                // Remaining column names ("Full Name", "Cell #") are dropped.
                if token == EMAIL_SENTINEL {
                    state = State::InBody;
                }
            }
            State::InBody => {
                if token == TOTAL_SENTINEL {
                    state = State::Done;
                } else {
                    body.push(token.clone());
                }
            }
            State::Done => break,
        }
    }

    match state {
        State::BeforeHeader => {
            warn!(tokens = ?course, "course has no 'StudentID', treating it as header-only");
        }
        State::InHeader => {
            warn!(tokens = ?course, "course has 'StudentID' but no 'Email', no roster body");
        }
        State::InBody | State::Done => {}
    }

    (header, body)
}

// ── Tests ──
