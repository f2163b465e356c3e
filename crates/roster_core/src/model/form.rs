//! Raw form input conversion.
//!
//! # Responsibility
//! - Turn text captured by an input form into a `Student` candidate.
//!
//! # Invariants
//! - `id` and `name` are forwarded unmodified; rules decide their validity.
//! - Only the age text is trimmed before numeric parsing.

use crate::model::student::Student;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Unparsed student fields as typed by a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentForm {
    pub id: String,
    pub name: String,
    pub age: String,
}

/// Form conversion errors raised before validation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Age text is not a whole number.
    InvalidAge(String),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAge(_) => write!(f, "Error: age must be a valid number"),
        }
    }
}

impl Error for FormError {}

impl StudentForm {
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age: age.into(),
        }
    }

    /// Builds a candidate student, failing only when age is not numeric.
    pub fn into_student(self) -> Result<Student, FormError> {
        let age = self
            .age
            .trim()
            .parse::<i32>()
            .map_err(|_| FormError::InvalidAge(self.age.clone()))?;
        Ok(Student::new(self.id, self.name, age))
    }
}
