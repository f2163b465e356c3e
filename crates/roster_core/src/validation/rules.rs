//! Built-in student validation rules.
//!
//! # Responsibility
//! - Define the single-method rule contract used by the pipeline.
//! - Provide the id, name and age rules with their fixed thresholds.
//!
//! # Invariants
//! - Rules are stateless and never mutate the candidate.
//! - A missing candidate fails every rule with `MissingStudent`.
//! - Length checks count characters of the trimmed value, not bytes.
//! - Trimming strips only ASCII control characters and space, and the name
//!   pattern only accepts ASCII whitespace; no-break and ideographic spaces
//!   are ordinary characters.

use crate::model::student::Student;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum trimmed character count for a student id.
pub const MIN_ID_CHARS: usize = 3;
/// Minimum trimmed character count for a student name.
pub const MIN_NAME_CHARS: usize = 2;
/// Lowest accepted age, inclusive.
pub const MIN_AGE: i32 = 1;
/// Highest accepted age, inclusive.
pub const MAX_AGE: i32 = 120;

static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ \t\n\x0B\x0C\r]+$").expect("valid student name regex")
});

/// Rule failure reported for a candidate student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingStudent,
    BlankId,
    IdTooShort { min: usize },
    BlankName,
    NameTooShort { min: usize },
    NameInvalidCharacters,
    AgeNotPositive { age: i32 },
    AgeAboveMaximum { max: i32 },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingStudent => write!(f, "Error: student record must not be null"),
            Self::BlankId => write!(f, "Error: ID must not be empty"),
            Self::IdTooShort { min } => {
                write!(f, "Error: ID must be at least {min} characters long")
            }
            Self::BlankName => write!(f, "Error: name must not be empty"),
            Self::NameTooShort { min } => {
                write!(f, "Error: name must be at least {min} characters long")
            }
            Self::NameInvalidCharacters => {
                write!(f, "Error: name may only contain letters and spaces")
            }
            Self::AgeNotPositive { .. } => write!(f, "Error: age must be greater than 0"),
            Self::AgeAboveMaximum { max } => {
                write!(f, "Error: age cannot be greater than {max} years")
            }
        }
    }
}

impl Error for ValidationError {}

/// Strips leading and trailing characters up to and including U+0020.
///
/// Unicode spaces such as U+00A0 are kept, so they count toward lengths and
/// are rejected by the name pattern.
pub fn trim_blank(value: &str) -> &str {
    value.trim_matches(|c: char| c <= ' ')
}

/// One validation strategy applied to a candidate student.
pub trait ValidationRule {
    /// Short stable name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Checks one candidate and reports the first violated condition.
    fn check(&self, candidate: Option<&Student>) -> Result<(), ValidationError>;
}

/// Requires a non-blank id of at least `MIN_ID_CHARS` characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdRule;

impl ValidationRule for IdRule {
    fn name(&self) -> &'static str {
        "id"
    }

    fn check(&self, candidate: Option<&Student>) -> Result<(), ValidationError> {
        let student = candidate.ok_or(ValidationError::MissingStudent)?;
        let trimmed = trim_blank(&student.id);
        if trimmed.is_empty() {
            return Err(ValidationError::BlankId);
        }
        if trimmed.chars().count() < MIN_ID_CHARS {
            return Err(ValidationError::IdTooShort { min: MIN_ID_CHARS });
        }
        Ok(())
    }
}

/// Requires a non-blank name made of letters and spaces only.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameRule;

impl ValidationRule for NameRule {
    fn name(&self) -> &'static str {
        "name"
    }

    fn check(&self, candidate: Option<&Student>) -> Result<(), ValidationError> {
        let student = candidate.ok_or(ValidationError::MissingStudent)?;
        let trimmed = trim_blank(&student.name);
        if trimmed.is_empty() {
            return Err(ValidationError::BlankName);
        }
        if trimmed.chars().count() < MIN_NAME_CHARS {
            return Err(ValidationError::NameTooShort {
                min: MIN_NAME_CHARS,
            });
        }
        if !NAME_RE.is_match(student.name.as_str()) {
            return Err(ValidationError::NameInvalidCharacters);
        }
        Ok(())
    }
}

/// Requires an age inside `[MIN_AGE, MAX_AGE]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AgeRule;

impl ValidationRule for AgeRule {
    fn name(&self) -> &'static str {
        "age"
    }

    fn check(&self, candidate: Option<&Student>) -> Result<(), ValidationError> {
        let student = candidate.ok_or(ValidationError::MissingStudent)?;
        if student.age < MIN_AGE {
            return Err(ValidationError::AgeNotPositive { age: student.age });
        }
        if student.age > MAX_AGE {
            return Err(ValidationError::AgeAboveMaximum { max: MAX_AGE });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{trim_blank, AgeRule, IdRule, NameRule, ValidationError, ValidationRule};
    use crate::model::student::Student;

    fn student(id: &str, name: &str, age: i32) -> Student {
        Student::new(id, name, age)
    }

    #[test]
    fn every_rule_rejects_missing_candidate() {
        let rules: [&dyn ValidationRule; 3] = [&IdRule, &NameRule, &AgeRule];
        for rule in rules {
            assert_eq!(rule.check(None), Err(ValidationError::MissingStudent));
        }
    }

    #[test]
    fn id_rule_distinguishes_blank_and_short() {
        assert_eq!(
            IdRule.check(Some(&student("   ", "Ana", 20))),
            Err(ValidationError::BlankId)
        );
        assert_eq!(
            IdRule.check(Some(&student(" ab ", "Ana", 20))),
            Err(ValidationError::IdTooShort { min: 3 })
        );
        assert_eq!(IdRule.check(Some(&student("S01", "Ana", 20))), Ok(()));
    }

    #[test]
    fn name_rule_accepts_accented_letters_and_spaces() {
        assert_eq!(
            NameRule.check(Some(&student("S01", "José Núñez", 20))),
            Ok(())
        );
        assert_eq!(
            NameRule.check(Some(&student("S01", "ÁNGEL ÉLIDA", 20))),
            Ok(())
        );
    }

    #[test]
    fn name_rule_reports_each_failure_mode() {
        assert_eq!(
            NameRule.check(Some(&student("S01", "  ", 20))),
            Err(ValidationError::BlankName)
        );
        assert_eq!(
            NameRule.check(Some(&student("S01", " A ", 20))),
            Err(ValidationError::NameTooShort { min: 2 })
        );
        assert_eq!(
            NameRule.check(Some(&student("S01", "Ana P.", 20))),
            Err(ValidationError::NameInvalidCharacters)
        );
        assert_eq!(
            NameRule.check(Some(&student("S01", "R2D2", 20))),
            Err(ValidationError::NameInvalidCharacters)
        );
    }

    #[test]
    fn name_rule_rejects_non_ascii_spaces() {
        assert_eq!(
            NameRule.check(Some(&student("S01", "Ana\u{00A0}Paz", 20))),
            Err(ValidationError::NameInvalidCharacters)
        );
        assert_eq!(
            NameRule.check(Some(&student("S01", "Ana\u{3000}Paz", 20))),
            Err(ValidationError::NameInvalidCharacters)
        );
        assert_eq!(
            NameRule.check(Some(&student("S01", "Ana\tPaz\r\n", 20))),
            Ok(())
        );
    }

    #[test]
    fn trim_blank_keeps_unicode_spaces() {
        assert_eq!(trim_blank("\t\u{1F} S01 \n"), "S01");
        assert_eq!(trim_blank("\u{00A0}S01\u{00A0}"), "\u{00A0}S01\u{00A0}");
    }

    #[test]
    fn id_rule_counts_no_break_spaces_as_characters() {
        assert_eq!(
            IdRule.check(Some(&student("\u{00A0}\u{00A0}\u{00A0}", "Ana", 20))),
            Ok(())
        );
        assert_eq!(
            NameRule.check(Some(&student("S01", "\u{00A0}", 20))),
            Err(ValidationError::NameTooShort { min: 2 })
        );
    }

    #[test]
    fn age_rule_enforces_inclusive_bounds() {
        assert_eq!(
            AgeRule.check(Some(&student("S01", "Ana", 0))),
            Err(ValidationError::AgeNotPositive { age: 0 })
        );
        assert_eq!(
            AgeRule.check(Some(&student("S01", "Ana", 121))),
            Err(ValidationError::AgeAboveMaximum { max: 120 })
        );
        assert_eq!(AgeRule.check(Some(&student("S01", "Ana", 1))), Ok(()));
        assert_eq!(AgeRule.check(Some(&student("S01", "Ana", 120))), Ok(()));
    }

    #[test]
    fn messages_are_distinct_per_failure_mode() {
        let messages = [
            ValidationError::MissingStudent.to_string(),
            ValidationError::BlankId.to_string(),
            ValidationError::IdTooShort { min: 3 }.to_string(),
            ValidationError::BlankName.to_string(),
            ValidationError::NameTooShort { min: 2 }.to_string(),
            ValidationError::NameInvalidCharacters.to_string(),
            ValidationError::AgeNotPositive { age: 0 }.to_string(),
            ValidationError::AgeAboveMaximum { max: 120 }.to_string(),
        ];
        for (index, message) in messages.iter().enumerate() {
            assert!(message.starts_with("Error:"));
            assert!(!messages[index + 1..].contains(message));
        }
    }
}
