use roster_core::{Student, StudentForm};

#[test]
fn student_new_keeps_fields_verbatim() {
    let student = Student::new(" S01 ", "  Ana Paz", -3);

    assert_eq!(student.id, " S01 ");
    assert_eq!(student.name, "  Ana Paz");
    assert_eq!(student.age, -3);
}

#[test]
fn student_serialization_uses_expected_wire_fields() {
    let student = Student::new("S01", "Ana Paz", 20);

    let json = serde_json::to_value(&student).unwrap();
    assert_eq!(json["id"], "S01");
    assert_eq!(json["name"], "Ana Paz");
    assert_eq!(json["age"], 20);

    let decoded: Student = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, student);
}

#[test]
fn form_conversion_feeds_service_candidates() {
    let student = StudentForm::new("S07", "Eva Ríos", " 31")
        .into_student()
        .unwrap();
    assert_eq!(student, Student::new("S07", "Eva Ríos", 31));

    let err = StudentForm::new("S07", "Eva Ríos", "")
        .into_student()
        .unwrap_err();
    assert!(err.to_string().starts_with("Error:"));
}
