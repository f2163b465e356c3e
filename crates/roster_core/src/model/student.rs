//! Student domain model.
//!
//! # Responsibility
//! - Define the canonical record held by the roster store.
//!
//! # Invariants
//! - `id` is the stable unique key inside one store.
//! - A stored student is only replaced as a whole, never merged field-wise.

use serde::{Deserialize, Serialize};

/// Caller-supplied stable identifier of a student.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type StudentId = String;

/// Canonical domain record for one enrolled student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique key inside the store. Checked by `IdRule` before writes.
    pub id: StudentId,
    /// Full name, free text. Checked by `NameRule` before writes.
    pub name: String,
    /// Age in whole years. Checked by `AgeRule` before writes.
    pub age: i32,
}

impl Student {
    /// Creates a student from its three fields without validating them.
    ///
    /// Validation is the service layer's job; this constructor accepts any
    /// input so invalid candidates can still be represented and rejected.
    pub fn new(id: impl Into<StudentId>, name: impl Into<String>, age: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
        }
    }
}
