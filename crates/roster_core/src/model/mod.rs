//! Domain model for the student roster.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Convert raw form input into domain candidates.
//!
//! # Invariants
//! - Every stored student is identified by a caller-supplied `StudentId`.
//! - Removal is a hard delete; no tombstones are kept.

pub mod form;
pub mod student;
