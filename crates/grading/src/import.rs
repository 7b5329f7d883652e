//! `name,grade` line import and `name: grade => letter` export.
//!
//! Lines are split on the first comma; there is no quoting or escaping.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use ledgerlab_core::{DomainError, DomainResult};

use crate::student::Student;

#[derive(Debug, Error)]
pub enum GradingError {
    #[error("failed to read grades from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write results to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A line that did not produce a student.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    /// 1-based line number in the input.
    pub line_number: usize,
    pub content: String,
    pub error: DomainError,
}

/// Outcome of a batch import: accepted students plus every rejected line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportReport {
    pub students: Vec<Student>,
    pub rejected: Vec<Rejection>,
}

impl ImportReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Parse one `name,grade` line into a validated student.
pub fn parse_line(line: &str) -> DomainResult<Student> {
    let (name, raw_grade) = line
        .split_once(',')
        .ok_or_else(|| DomainError::validation("line", "expected 'name,grade'"))?;

    let raw_grade = raw_grade.trim();
    let grade: f64 = raw_grade
        .parse()
        .map_err(|_| DomainError::validation("grade", format!("'{raw_grade}' is not a number")))?;

    Student::new(name.trim(), grade)
}

/// Import every line, skipping blanks; a bad line is logged and recorded, never fatal.
pub fn import_lines<I, S>(lines: I) -> ImportReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = ImportReport::default();

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line) {
            Ok(student) => report.students.push(student),
            Err(error) => {
                tracing::warn!(line = idx + 1, content = line, %error, "skipping grade row");
                report.rejected.push(Rejection {
                    line_number: idx + 1,
                    content: line.to_string(),
                    error,
                });
            }
        }
    }

    tracing::info!(
        accepted = report.students.len(),
        rejected = report.rejected.len(),
        "grade import finished"
    );
    report
}

pub fn read_grades(path: impl AsRef<Path>) -> Result<ImportReport, GradingError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| GradingError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(import_lines(contents.lines()))
}

/// Write one `name: grade => letter` line per student.
pub fn write_results(path: impl AsRef<Path>, students: &[Student]) -> Result<(), GradingError> {
    let path = path.as_ref();
    let write_err = |source| GradingError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = fs::File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    for s in students {
        writeln!(writer, "{}: {} => {}", s.name(), s.grade(), s.letter()).map_err(write_err)?;
    }
    writer.flush().map_err(write_err)?;

    tracing::info!(path = %path.display(), students = students.len(), "results written");
    Ok(())
}
