pub mod header;
pub mod pages;
pub mod split;
pub mod students;
pub mod table;

use tracing::info;

/// One line of extracted text. Order is significant within its page.
pub type Line = String;
/// One physical page's worth of lines, bounded by form-feed markers upstream.
pub type Page = Vec<Line>;

// Sentinel vocabulary of the roster document format. These strings are part
// of the contract with the source PDF extract: changing them changes which
// documents are parsable.
pub const TOTAL_SENTINEL: &str = "Total";
pub const EMAIL_SENTINEL: &str = "Email";
pub const STUDENT_ID_SENTINEL: &str = "StudentID";

pub const COURSE_HEADER_KEYS: &[&str] = &[
    "Course",
    "Semester",
    "Course Title",
    "Instructor",
    "Section",
    "Day/Time:",
];

pub const STUDENT_COLUMNS: &[&str] = &["StudentID", "Full Name", "Cell #", "Email"];

pub fn is_student_column(token: &str) -> bool {
    STUDENT_COLUMNS.contains(&token)
}

/// Recognized course-metadata fields. A field is `None` when its key never
/// appeared in the header tokens, and `Some("")` when the key appeared with
/// no usable value after it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseHeader {
    pub course: Option<String>,
    pub semester: Option<String>,
    pub course_title: Option<String>,
    pub instructor: Option<String>,
    pub section: Option<String>,
    pub day_time: Option<String>,
}

impl CourseHeader {
    pub(crate) fn slot_mut(&mut self, key: &str) -> Option<&mut Option<String>> {
        match key {
            "Course" => Some(&mut self.course),
            "Semester" => Some(&mut self.semester),
            "Course Title" => Some(&mut self.course_title),
            "Instructor" => Some(&mut self.instructor),
            "Section" => Some(&mut self.section),
            "Day/Time:" => Some(&mut self.day_time),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "Course" => self.course.as_deref(),
            "Semester" => self.semester.as_deref(),
            "Course Title" => self.course_title.as_deref(),
            "Instructor" => self.instructor.as_deref(),
            "Section" => self.section.as_deref(),
            "Day/Time:" => self.day_time.as_deref(),
            _ => None,
        }
    }
}

/// One enrolled student as printed in the roster. `line_no` is the sequence
/// position printed in the source and is best-effort only: mismatches are
/// warned about during extraction, never corrected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub line_no: Option<u32>,
    pub student_id: String,
    pub full_name: String,
}

/// A parsed course: its header fields plus the students in document order.
#[derive(Debug, Clone)]
pub struct CourseRecord {
    pub header: CourseHeader,
    pub students: Vec<Student>,
}

/// Runs the full extraction over filtered pages: segment into courses, split
/// each into header/body, and parse both halves.
pub fn parse_document(pages: Vec<Page>) -> Vec<CourseRecord> {
    let courses = pages::segment(pages);
    let mut records = Vec::with_capacity(courses.len());

    for (i, course) in courses.into_iter().enumerate() {
        let (head, body) = split::split_head_body(&course);
        let header = header::extract(&head);
        let students = students::extract(&body);
        info!(course = i, students = students.len(), "course parsed");
        records.push(CourseRecord { header, students });
    }

    records
}

// ── Tests ──
