use serde::{Deserialize, Serialize};

use ledgerlab_core::{DomainResult, Rule, non_blank};

/// Letter band for a numeric grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    /// ≥80 A, ≥70 B, ≥60 C, ≥50 D, otherwise F.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            LetterGrade::A
        } else if score >= 70.0 {
            LetterGrade::B
        } else if score >= 60.0 {
            LetterGrade::C
        } else if score >= 50.0 {
            LetterGrade::D
        } else {
            LetterGrade::F
        }
    }
}

impl core::fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    name: String,
    grade: f64,
}

impl Student {
    /// Grade must lie in `0..=100`.
    pub fn new(name: impl Into<String>, grade: f64) -> DomainResult<Self> {
        let name = non_blank("name", name)?;
        let grade = Rule::Percentage.check("grade", grade)?;
        Ok(Self { name, grade })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grade(&self) -> f64 {
        self.grade
    }

    pub fn letter(&self) -> LetterGrade {
        LetterGrade::from_score(self.grade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerlab_core::DomainError;
    use proptest::prelude::*;

    #[test]
    fn grade_above_100_is_rejected() {
        let err = Student::new("Akosua", 110.0).unwrap_err();
        match err {
            DomainError::Validation { field, .. } => assert_eq!(field, "grade"),
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn band_edges() {
        assert_eq!(LetterGrade::from_score(80.0), LetterGrade::A);
        assert_eq!(LetterGrade::from_score(79.9), LetterGrade::B);
        assert_eq!(LetterGrade::from_score(60.0), LetterGrade::C);
        assert_eq!(LetterGrade::from_score(50.0), LetterGrade::D);
        assert_eq!(LetterGrade::from_score(49.99), LetterGrade::F);
    }

    #[test]
    fn sample_students_get_expected_letters() {
        let letters: Vec<_> = [("Ibrahim", 85.0), ("Ama", 72.0), ("Kwame", 45.0)]
            .into_iter()
            .map(|(n, g)| Student::new(n, g).unwrap().letter())
            .collect();
        assert_eq!(letters, [LetterGrade::A, LetterGrade::B, LetterGrade::F]);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: a higher score never earns a worse letter.
        #[test]
        fn letters_are_monotonic(a in 0.0f64..=100.0, b in 0.0f64..=100.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            // A < B < ... < F in declaration order, so a better letter compares lower.
            prop_assert!(LetterGrade::from_score(hi) <= LetterGrade::from_score(lo));
        }
    }
}
