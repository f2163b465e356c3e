//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation and store calls into use-case level APIs.
//! - Keep presentation layers decoupled from storage details.

pub mod student_service;
