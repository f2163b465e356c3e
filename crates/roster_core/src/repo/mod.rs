//! Roster storage and change notification.
//!
//! # Responsibility
//! - Own the in-memory collection of students.
//! - Define the observer contract used to keep dependents in sync.
//!
//! # Invariants
//! - Store primitives do not validate field contents; the service does.
//! - Store primitives report failure as `false`, never by panicking.

pub mod observer;
pub mod student_store;
