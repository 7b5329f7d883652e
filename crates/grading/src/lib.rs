//! School grading: validated students, letter grades and a plain
//! `name,grade` line format for import and export.

pub mod import;
pub mod student;

pub use import::{
    GradingError, ImportReport, Rejection, import_lines, parse_line, read_grades, write_results,
};
pub use student::{LetterGrade, Student};
