//! Ordered, short-circuiting composition of validation rules.

use crate::logging::{LogEvent, LogStatus};
use crate::model::student::Student;
use crate::validation::rules::{AgeRule, IdRule, NameRule, ValidationError, ValidationRule};
use log::debug;

/// Runs registered rules in order and stops at the first failure.
#[derive(Default)]
pub struct ValidationPipeline {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationPipeline {
    /// Creates an empty pipeline that accepts every candidate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pipeline with the built-in student rules in id, name, age order.
    ///
    /// The order decides which single error is surfaced when a candidate
    /// violates several rules.
    pub fn student_defaults() -> Self {
        let mut pipeline = Self::new();
        pipeline.add_rule(IdRule);
        pipeline.add_rule(NameRule);
        pipeline.add_rule(AgeRule);
        pipeline
    }

    /// Appends one rule after every rule already registered.
    pub fn add_rule(&mut self, rule: impl ValidationRule + 'static) {
        self.rules.push(Box::new(rule));
    }

    /// Removes every registered rule.
    pub fn clear_rules(&mut self) {
        self.rules.clear();
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns rule names in registration order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Validates one candidate and returns the first rule failure.
    pub fn validate(&self, candidate: Option<&Student>) -> Result<(), ValidationError> {
        for rule in &self.rules {
            if let Err(err) = rule.check(candidate) {
                debug!(
                    "{}",
                    LogEvent::new("validation", "student_validate", LogStatus::Rejected)
                        .tag("rule", rule.name())
                );
                return Err(err);
            }
        }
        Ok(())
    }
}
