//! Student validation rules and the pipeline that composes them.
//!
//! # Responsibility
//! - Reject invalid candidates before any store mutation happens.
//! - Surface exactly one deterministic error per rejected candidate.
//!
//! # Invariants
//! - Rules run in registration order; the first failure wins.
//! - Validation is pure: it never touches the store.

pub mod pipeline;
pub mod rules;
