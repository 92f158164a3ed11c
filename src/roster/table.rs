use super::{CourseHeader, CourseRecord};

/// One flat output row: a course's header fields joined to one student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    /// Zero-based course sequence id, in document order.
    pub crsid: usize,
    pub header: CourseHeader,
    pub line_no: Option<u32>,
    pub student_id: String,
    pub full_name: String,
}

/// Cross-product each course's header with its students. Row order is
/// stable: course order, then student order within the course. Pure over its
/// input, so rebuilding from the same records gives identical rows.
pub fn build_rows(records: &[CourseRecord]) -> Vec<OutputRow> {
    records
        .iter()
        .enumerate()
        .flat_map(|(crsid, record)| {
            record.students.iter().map(move |student| OutputRow {
                crsid,
                header: record.header.clone(),
                line_no: student.line_no,
                student_id: student.student_id.clone(),
                full_name: student.full_name.clone(),
            })
        })
        .collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Student;

    fn record(course: &str, students: &[(u32, &str, &str)]) -> CourseRecord {
        CourseRecord {
            header: CourseHeader {
                course: Some(course.to_string()),
                ..CourseHeader::default()
            },
            students: students
                .iter()
                .map(|(n, id, name)| Student {
                    line_no: Some(*n),
                    student_id: id.to_string(),
                    full_name: name.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn rows_follow_course_then_student_order() {
        let records = vec![
            record("ENG101", &[(1, "11111", "Ann"), (2, "22222", "Ben")]),
            record("BIO210", &[(1, "33333", "Cleo")]),
        ];
        let rows = build_rows(&records);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].crsid, 0);
        assert_eq!(rows[0].student_id, "11111");
        assert_eq!(rows[1].student_id, "22222");
        assert_eq!(rows[2].crsid, 1);
        assert_eq!(rows[2].header.course.as_deref(), Some("BIO210"));
    }

    #[test]
    fn studentless_course_contributes_no_rows() {
        let records = vec![record("ENG101", &[]), record("BIO210", &[(1, "33333", "Cleo")])];
        let rows = build_rows(&records);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].crsid, 1);
    }

    #[test]
    fn building_twice_is_identical() {
        let records = vec![record("ENG101", &[(1, "11111", "Ann")])];
        assert_eq!(build_rows(&records), build_rows(&records));
    }
}
