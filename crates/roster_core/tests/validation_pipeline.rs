use roster_core::{Student, ValidationError, ValidationPipeline, ValidationRule};

struct RejectAdults;

impl ValidationRule for RejectAdults {
    fn name(&self) -> &'static str {
        "minors_only"
    }

    fn check(&self, candidate: Option<&Student>) -> Result<(), ValidationError> {
        match candidate {
            None => Err(ValidationError::MissingStudent),
            Some(student) if student.age >= 18 => {
                Err(ValidationError::AgeAboveMaximum { max: 17 })
            }
            Some(_) => Ok(()),
        }
    }
}

#[test]
fn valid_candidate_passes_default_rules() {
    let pipeline = ValidationPipeline::student_defaults();
    let student = Student::new("S01", "Ana Paz", 20);
    assert_eq!(pipeline.validate(Some(&student)), Ok(()));
}

#[test]
fn missing_candidate_fails_with_null_message() {
    let pipeline = ValidationPipeline::student_defaults();
    assert_eq!(
        pipeline.validate(None),
        Err(ValidationError::MissingStudent)
    );
}

#[test]
fn short_id_wins_over_out_of_range_age() {
    let pipeline = ValidationPipeline::student_defaults();
    let student = Student::new("ab", "Ana Paz", 200);
    assert_eq!(
        pipeline.validate(Some(&student)),
        Err(ValidationError::IdTooShort { min: 3 })
    );
}

#[test]
fn name_error_wins_over_age_error() {
    let pipeline = ValidationPipeline::student_defaults();
    let student = Student::new("S01", "4na", -1);
    assert_eq!(
        pipeline.validate(Some(&student)),
        Err(ValidationError::NameInvalidCharacters)
    );
}

#[test]
fn age_bounds_are_reported_separately() {
    let pipeline = ValidationPipeline::student_defaults();

    let too_young = Student::new("S01", "Ana", 0);
    let too_old = Student::new("S01", "Ana", 121);
    let low_err = pipeline.validate(Some(&too_young)).unwrap_err();
    let high_err = pipeline.validate(Some(&too_old)).unwrap_err();

    assert_eq!(low_err, ValidationError::AgeNotPositive { age: 0 });
    assert_eq!(high_err, ValidationError::AgeAboveMaximum { max: 120 });
    assert_ne!(low_err.to_string(), high_err.to_string());
}

#[test]
fn custom_rules_run_after_defaults() {
    let mut pipeline = ValidationPipeline::student_defaults();
    pipeline.add_rule(RejectAdults);
    assert_eq!(pipeline.rule_names(), vec!["id", "name", "age", "minors_only"]);

    let adult = Student::new("S01", "Ana", 30);
    assert_eq!(
        pipeline.validate(Some(&adult)),
        Err(ValidationError::AgeAboveMaximum { max: 17 })
    );

    let blank_id_adult = Student::new("", "Ana", 30);
    assert_eq!(
        pipeline.validate(Some(&blank_id_adult)),
        Err(ValidationError::BlankId)
    );
}
