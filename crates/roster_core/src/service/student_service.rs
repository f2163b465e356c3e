//! Student use-case service.
//!
//! # Responsibility
//! - Validate candidates, check key existence, then delegate to the store.
//! - Translate every outcome into a typed result with a user-facing message.
//!
//! # Invariants
//! - No store mutation happens when validation or existence checks fail.
//! - All failures are returned as `ServiceError` values, never panics.
//! - Success messages contain `SUCCESS_MARKER`; error messages never do.

use crate::logging::{LogEvent, LogStatus};
use crate::model::student::{Student, StudentId};
use crate::repo::student_store::StudentStore;
use crate::validation::pipeline::ValidationPipeline;
use crate::validation::rules::{trim_blank, ValidationError};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// Substring present in every success message and in no error message.
pub const SUCCESS_MARKER: &str = "successfully";

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Store mutation kinds exposed through the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    Add,
    Update,
    Remove,
}

impl StoreOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Update => "update",
            Self::Remove => "remove",
        }
    }

    /// Log event name for this operation.
    pub fn event(self) -> &'static str {
        match self {
            Self::Add => "student_add",
            Self::Update => "student_update",
            Self::Remove => "student_remove",
        }
    }
}

/// Service error for student use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Candidate failed a validation rule.
    Validation(ValidationError),
    /// Add targeted an id that is already stored.
    DuplicateId(StudentId),
    /// Update or remove targeted an id that is not stored.
    NotFound(StudentId),
    /// Remove was given a blank id.
    BlankId,
    /// Store rejected a write after every service-level check passed.
    StoreAnomaly {
        operation: StoreOperation,
        id: StudentId,
    },
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "Error: a student with ID {id} already exists"),
            Self::NotFound(id) => write!(f, "Error: no student exists with ID {id}"),
            Self::BlankId => write!(f, "Error: ID must not be empty"),
            Self::StoreAnomaly { operation, .. } => {
                write!(f, "Error: failed to {} the student", operation.as_str())
            }
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Successful mutation summary returned to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    pub operation: StoreOperation,
    pub id: StudentId,
}

impl MutationOutcome {
    /// User-facing confirmation containing `SUCCESS_MARKER`.
    pub fn message(&self) -> String {
        let verb = match self.operation {
            StoreOperation::Add => "added",
            StoreOperation::Update => "updated",
            StoreOperation::Remove => "removed",
        };
        format!("Student {verb} {SUCCESS_MARKER}")
    }
}

/// Renders any service outcome as the message shown to users.
pub fn outcome_message(result: &ServiceResult<MutationOutcome>) -> String {
    match result {
        Ok(outcome) => outcome.message(),
        Err(err) => err.to_string(),
    }
}

/// Classifies a rendered outcome message as success or failure.
pub fn is_success_message(message: &str) -> bool {
    message.contains(SUCCESS_MARKER)
}

/// Student service facade over the shared store.
pub struct StudentService {
    store: Rc<StudentStore>,
    pipeline: ValidationPipeline,
}

impl StudentService {
    /// Creates a service with the default id, name, age rules.
    pub fn new(store: Rc<StudentStore>) -> Self {
        Self::with_pipeline(store, ValidationPipeline::student_defaults())
    }

    /// Creates a service with a caller-composed pipeline.
    pub fn with_pipeline(store: Rc<StudentStore>, pipeline: ValidationPipeline) -> Self {
        Self { store, pipeline }
    }

    /// Shared store handle, used to register observers.
    pub fn store(&self) -> &Rc<StudentStore> {
        &self.store
    }

    /// Validates and adds a new student.
    pub fn add_student(&self, candidate: &Student) -> ServiceResult<MutationOutcome> {
        self.validate(candidate, StoreOperation::Add)?;
        if self.store.exists(&candidate.id) {
            warn!("{}", rejected(StoreOperation::Add, "duplicate_id"));
            return Err(ServiceError::DuplicateId(candidate.id.clone()));
        }
        if !self.store.add(candidate.clone()) {
            return Err(store_anomaly(StoreOperation::Add, &candidate.id));
        }
        Ok(success(StoreOperation::Add, &candidate.id))
    }

    /// Validates and fully replaces an existing student.
    pub fn update_student(&self, candidate: &Student) -> ServiceResult<MutationOutcome> {
        self.validate(candidate, StoreOperation::Update)?;
        if !self.store.exists(&candidate.id) {
            warn!("{}", rejected(StoreOperation::Update, "not_found"));
            return Err(ServiceError::NotFound(candidate.id.clone()));
        }
        if !self.store.update(candidate.clone()) {
            return Err(store_anomaly(StoreOperation::Update, &candidate.id));
        }
        Ok(success(StoreOperation::Update, &candidate.id))
    }

    /// Removes an existing student by id.
    pub fn remove_student(&self, id: &str) -> ServiceResult<MutationOutcome> {
        if trim_blank(id).is_empty() {
            warn!("{}", rejected(StoreOperation::Remove, "blank_id"));
            return Err(ServiceError::BlankId);
        }
        if !self.store.exists(id) {
            warn!("{}", rejected(StoreOperation::Remove, "not_found"));
            return Err(ServiceError::NotFound(id.to_string()));
        }
        if !self.store.remove(id) {
            return Err(store_anomaly(StoreOperation::Remove, id));
        }
        Ok(success(StoreOperation::Remove, id))
    }

    /// Lists all students in insertion order.
    pub fn list_students(&self) -> Vec<Student> {
        self.store.list()
    }

    /// Finds one student; blank ids never match.
    pub fn find_student(&self, id: &str) -> Option<Student> {
        if trim_blank(id).is_empty() {
            return None;
        }
        self.store.find_by_id(id)
    }

    fn validate(&self, candidate: &Student, operation: StoreOperation) -> ServiceResult<()> {
        self.pipeline.validate(Some(candidate)).map_err(|err| {
            warn!("{}", rejected(operation, "validation"));
            ServiceError::from(err)
        })
    }
}

fn rejected(operation: StoreOperation, reason: &'static str) -> LogEvent {
    LogEvent::new("service", operation.event(), LogStatus::Rejected).reason(reason)
}

fn success(operation: StoreOperation, id: &str) -> MutationOutcome {
    info!("{}", LogEvent::new("service", operation.event(), LogStatus::Ok));
    MutationOutcome {
        operation,
        id: id.to_string(),
    }
}

fn store_anomaly(operation: StoreOperation, id: &str) -> ServiceError {
    error!(
        "{}",
        LogEvent::new("service", operation.event(), LogStatus::Error).reason("store_anomaly")
    );
    ServiceError::StoreAnomaly {
        operation,
        id: id.to_string(),
    }
}
