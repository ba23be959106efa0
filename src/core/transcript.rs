//! CSV parser for transcript data
//!
//! A transcript file has a metadata section (`Student,...` /
//! `Institution,...`), a `Semesters` marker line, a column header, then one
//! row per course: `Semester,Course,Credits,Grade`. Semesters appear in file
//! order; each is frozen into a [`SemesterRecord`] with its GPA computed at
//! parse time.

use crate::core::gpa::cumulative_gpa;
use crate::core::models::{Course, CourseId, Grade, Semester, SemesterRecord};
use std::error::Error;
use std::fs;
use std::path::Path;

/// A parsed transcript: metadata plus completed semesters in file order
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    /// Student name from the metadata section
    pub student: String,
    /// Institution name from the metadata section
    pub institution: String,
    /// Completed semesters, oldest first
    pub semesters: Vec<SemesterRecord>,
}

impl Transcript {
    /// Cumulative GPA over every course in the transcript
    #[must_use]
    pub fn cumulative_gpa(&self) -> f64 {
        cumulative_gpa(&self.semesters, &[])
    }

    /// Total credit hours across all semesters
    #[must_use]
    pub fn total_credits(&self) -> u32 {
        self.semesters.iter().map(SemesterRecord::total_credits).sum()
    }

    /// Total number of courses across all semesters
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.semesters.iter().map(SemesterRecord::course_count).sum()
    }
}

/// Parse a transcript CSV file
///
/// # Arguments
/// * `path` - Path to the CSV file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed
pub fn parse_transcript_csv<P: AsRef<Path>>(path: P) -> Result<Transcript, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    parse_transcript_str(&content)
}

/// Parse a transcript from CSV text
///
/// # Errors
/// Returns an error if required sections are missing or a course row is
/// malformed (bad credits, unknown grade, wrong field count)
pub fn parse_transcript_str(content: &str) -> Result<Transcript, Box<dyn Error>> {
    let lines: Vec<&str> = content.lines().collect();

    let (student, institution) = parse_metadata(&lines)?;

    // Find the course section
    let section_start = lines
        .iter()
        .position(|line| line.trim().eq_ignore_ascii_case("semesters"))
        .ok_or("No 'Semesters' section found in CSV")?;

    if section_start + 1 >= lines.len() {
        return Err("No course header found after 'Semesters' section".into());
    }

    let mut semesters: Vec<Semester> = Vec::new();
    let mut next_id: u64 = 1;

    // Skip the section marker and the column header
    for (offset, line) in lines.iter().enumerate().skip(section_start + 2) {
        if line.trim().is_empty() {
            continue;
        }

        let row_number = offset + 1;
        let fields = parse_csv_line(line);
        if fields.len() < 4 {
            return Err(format!(
                "Row {row_number}: expected Semester,Course,Credits,Grade, got {} field(s)",
                fields.len()
            )
            .into());
        }

        let semester_name = fields[0].trim();
        let course_name = fields[1].trim().to_string();
        let credits: u32 = fields[2]
            .trim()
            .parse()
            .map_err(|_| format!("Row {row_number}: invalid credits '{}'", fields[2].trim()))?;
        let grade: Grade = fields[3]
            .trim()
            .parse()
            .map_err(|e| format!("Row {row_number}: {e}"))?;

        let course = Course::new(CourseId(next_id), course_name, credits, grade);
        next_id += 1;

        // Group into the semester with this name, preserving file order
        match semesters.iter_mut().find(|s| s.name == semester_name) {
            Some(semester) => semester.courses.push(course),
            None => {
                let id = format!("s{}", semesters.len() + 1);
                let mut semester = Semester::new(id, semester_name.to_string());
                semester.courses.push(course);
                semesters.push(semester);
            }
        }
    }

    Ok(Transcript {
        student,
        institution,
        semesters: semesters.into_iter().map(Semester::into_record).collect(),
    })
}

/// Parse transcript metadata from the header section
fn parse_metadata(lines: &[&str]) -> Result<(String, String), Box<dyn Error>> {
    let mut student = String::new();
    let mut institution = String::new();

    for line in lines.iter().take(10) {
        let fields = parse_csv_line(line);
        if fields.len() < 2 {
            continue;
        }

        match fields[0].trim().to_lowercase().as_str() {
            "student" => student = fields[1].trim().to_string(),
            "institution" => institution = fields[1].trim().to_string(),
            _ => {}
        }
    }

    if student.is_empty() {
        return Err("Missing Student name".into());
    }
    if institution.is_empty() {
        return Err("Missing Institution".into());
    }

    Ok((student, institution))
}

/// Split a CSV line into fields, honoring double-quoted values
fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.clone());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current);

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Student,Jane Doe
Institution,Example University
Semesters
Semester,Course,Credits,Grade
Fall 2023,Data Structures,4,A
Fall 2023,Calculus II,3,B+
Fall 2023,Physics I,4,A-
Spring 2024,Algorithms,4,A
Spring 2024,Database Systems,3,A-
Spring 2024,Linear Algebra,3,B+
";

    #[test]
    fn parses_metadata_and_semesters() {
        let transcript = parse_transcript_str(SAMPLE).expect("parse transcript");

        assert_eq!(transcript.student, "Jane Doe");
        assert_eq!(transcript.institution, "Example University");
        assert_eq!(transcript.semesters.len(), 2);
        assert_eq!(transcript.semesters[0].name, "Fall 2023");
        assert_eq!(transcript.semesters[1].name, "Spring 2024");
        assert_eq!(transcript.course_count(), 6);
        assert_eq!(transcript.total_credits(), 21);
    }

    #[test]
    fn freezes_semester_gpas_at_parse_time() {
        let transcript = parse_transcript_str(SAMPLE).expect("parse transcript");

        // Fall 2023: (4*4.0 + 3*3.3 + 4*3.7) / 11
        let fall = &transcript.semesters[0];
        let expected = 4.0f64.mul_add(4.0, 3.0f64.mul_add(3.3, 4.0 * 3.7)) / 11.0;
        assert!((fall.gpa - expected).abs() < 1e-9);
    }

    #[test]
    fn handles_quoted_course_names() {
        let content = "\
Student,Jane Doe
Institution,Example University
Semesters
Semester,Course,Credits,Grade
Fall 2023,\"Reading, Writing, Rhetoric\",3,A
";
        let transcript = parse_transcript_str(content).expect("parse transcript");
        assert_eq!(
            transcript.semesters[0].courses[0].name,
            "Reading, Writing, Rhetoric"
        );
    }

    #[test]
    fn rejects_missing_student() {
        let content = "Institution,Example University\nSemesters\nSemester,Course,Credits,Grade\n";
        assert!(parse_transcript_str(content).is_err());
    }

    #[test]
    fn rejects_missing_section() {
        let content = "Student,Jane Doe\nInstitution,Example University\n";
        assert!(parse_transcript_str(content).is_err());
    }

    #[test]
    fn rejects_bad_credits_with_row_context() {
        let content = "\
Student,Jane Doe
Institution,Example University
Semesters
Semester,Course,Credits,Grade
Fall 2023,Data Structures,four,A
";
        let err = parse_transcript_str(content).expect_err("bad credits");
        assert!(err.to_string().contains("Row 5"));
    }

    #[test]
    fn rejects_unknown_grade() {
        let content = "\
Student,Jane Doe
Institution,Example University
Semesters
Semester,Course,Credits,Grade
Fall 2023,Data Structures,4,Z
";
        let err = parse_transcript_str(content).expect_err("unknown grade");
        assert!(err.to_string().contains("Unknown letter grade"));
    }

    #[test]
    fn skips_blank_rows() {
        let content = "\
Student,Jane Doe
Institution,Example University
Semesters
Semester,Course,Credits,Grade
Fall 2023,Data Structures,4,A

Fall 2023,Physics I,4,B
";
        let transcript = parse_transcript_str(content).expect("parse transcript");
        assert_eq!(transcript.course_count(), 2);
    }
}
