use roster_core::{Student, StudentValidationError};

#[test]
fn valid_record_passes_validation() {
    let student = Student::new("s-001", "Grace Hopper", 85, "Arlington, Virginia");
    assert!(student.validate().is_ok());
}

#[test]
fn validation_reports_first_violation_per_field() {
    let blank_id = Student::new("  ", "name", 20, "address");
    assert_eq!(
        blank_id.validate().unwrap_err(),
        StudentValidationError::InvalidId
    );

    let long_name = Student::new("s-1", "n".repeat(101), 20, "address");
    assert_eq!(
        long_name.validate().unwrap_err(),
        StudentValidationError::InvalidName
    );

    let age_zero = Student::new("s-1", "name", 0, "address");
    assert_eq!(
        age_zero.validate().unwrap_err(),
        StudentValidationError::InvalidAge(0)
    );

    let long_address = Student::new("s-1", "name", 20, "a".repeat(201));
    assert_eq!(
        long_address.validate().unwrap_err(),
        StudentValidationError::InvalidAddress
    );
}

#[test]
fn boundary_lengths_and_ages_are_accepted() {
    let edge = Student::new("i".repeat(50), "n".repeat(100), 1, "a".repeat(200));
    assert!(edge.validate().is_ok());

    let oldest = Student::new("s-1", "name", 150, "address");
    assert!(oldest.validate().is_ok());
}

#[test]
fn student_serialization_uses_expected_wire_fields() {
    let student = Student::new("s-001", "Ada Lovelace", 36, "London");

    let json = serde_json::to_value(&student).unwrap();
    assert_eq!(json["id"], "s-001");
    assert_eq!(json["name"], "Ada Lovelace");
    assert_eq!(json["age"], 36);
    assert_eq!(json["address"], "London");

    let decoded: Student = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, student);
}

#[test]
fn validation_error_messages_are_readable() {
    let err = Student::new("s-1", "name", 151, "address")
        .validate()
        .unwrap_err();
    assert_eq!(err.to_string(), "age 151 is outside 1..=150");
}
