use tracing::{debug, warn};

use super::{Line, Page, EMAIL_SENTINEL, TOTAL_SENTINEL};

/// Merge filtered pages into flattened courses. Pages accumulate into the
/// current course until a page contains the "Total" sentinel, or until a
/// continuation page is left empty after its repeated column header is
/// stripped. Continuation pages repeat the student-table header verbatim;
/// everything up to and including "Email" on them is student data from the
/// previous page's course and gets stripped.
pub fn segment(pages: Vec<Page>) -> Vec<Vec<Line>> {
    let mut courses: Vec<Vec<Page>> = Vec::new();
    let mut current: Vec<Page> = Vec::new();

    for (idx, mut page) in pages.into_iter().enumerate() {
        let mut emptied = false;

        if !current.is_empty() {
            match page.iter().position(|l| l == EMAIL_SENTINEL) {
                Some(pos) => {
                    page.drain(..=pos);
                    emptied = page.is_empty();
                }
                None => {
                    warn!(page = idx, tokens = ?page, "continuation page lacks 'Email', possible corruption");
                }
            }
        }

        let has_total = page.iter().any(|l| l == TOTAL_SENTINEL);
        current.push(page);

        if has_total || emptied {
            debug!(course = courses.len(), pages = current.len(), "course finalized");
            courses.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        warn!(
            pages = current.len(),
            "input ended inside an unterminated course, dropping it"
        );
    }

    courses.into_iter().map(flatten).collect()
}

/// Flatten the (at most two) pages of one course into a single token
/// sequence. A course spanning more than two pages means the segmenter
/// misfired and is a pipeline defect, not bad input.
pub fn flatten(pages: Vec<Page>) -> Vec<Line> {
    assert!(
        pages.len() <= 2,
        "course spans {} pages, expected at most 2",
        pages.len()
    );
    pages.into_iter().flatten().collect()
}

// ── Tests ──
