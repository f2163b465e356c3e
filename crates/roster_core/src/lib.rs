//! Core data-and-rules layer for the student roster.
//! This crate is the single source of truth for roster invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod validation;

pub use logging::{
    default_log_level, init_logging, logging_status, LogEvent, LogStatus, LoggingConfig,
    LoggingError,
};
pub use model::form::{FormError, StudentForm};
pub use model::student::{Student, StudentId};
pub use repo::observer::{ObserverHandle, StudentObserver};
pub use repo::student_store::StudentStore;
pub use service::student_service::{
    is_success_message, outcome_message, MutationOutcome, ServiceError, ServiceResult,
    StoreOperation, StudentService, SUCCESS_MARKER,
};
pub use validation::pipeline::ValidationPipeline;
pub use validation::rules::{
    trim_blank, AgeRule, IdRule, NameRule, ValidationError, ValidationRule, MAX_AGE, MIN_AGE,
    MIN_ID_CHARS, MIN_NAME_CHARS,
};

/// Minimal health-check API for embedding smoke checks.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
