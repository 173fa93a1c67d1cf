//! Registration and validation through the public API

use sisfila_core::domain::{
    is_valid_department_code, is_valid_registration_id, Department, DomainError, Student,
};

#[test]
fn test_registration_id_format() {
    assert!(is_valid_registration_id("123456789"));
    assert!(!is_valid_registration_id("12345678"));
    assert!(!is_valid_registration_id("12345678a"));

    assert!(Student::new("123456789", "Ana").is_valid());
    assert!(!Student::new("12345678a", "Ana").is_valid());
}

#[test]
fn test_department_code_normalization() {
    let dept = Department::new("mat", "Matemática");
    assert_eq!(dept.code(), "MAT");
    assert!(dept.is_valid());

    let dept = Department::new("MAT1", "Matemática 1");
    assert!(!dept.is_valid());

    assert!(!is_valid_department_code(""));
}

#[test]
fn test_student_belongs_to_one_department() {
    let mut mat = Department::new("MAT", "Matemática");
    let mut comp = Department::new("COMP", "Computação");
    let mut student = Student::new("123456789", "Ana");
    assert!(!student.has_department());

    mat.register(&mut student).unwrap();
    assert!(student.has_department());
    assert_eq!(student.department(), Some("MAT"));

    let err = comp.register(&mut student).unwrap_err();
    assert!(matches!(err, DomainError::AlreadyAffiliated { .. }));
    assert!(comp.find_student("123456789").is_none());
    assert_eq!(comp.registered_students().count(), 0);
}

#[test]
fn test_find_student() {
    let mut dept = Department::new("MAT", "Matemática");
    let mut student = Student::new("123456789", "Ana");
    dept.register(&mut student).unwrap();

    let found = dept.find_student("123456789").unwrap();
    assert_eq!(found, &student);
    assert!(dept.find_student("987654321").is_none());
    assert!(matches!(
        dept.find_student_or_err("987654321"),
        Err(DomainError::StudentNotFound(_))
    ));
}

#[test]
fn test_rename_department() {
    let mut dept = Department::new("MAT", "Matemática");
    dept.set_name("Departamento de Matemática");
    dept.set_code("dmat");

    assert_eq!(dept.name(), "Departamento de Matemática");
    assert_eq!(dept.code(), "DMAT");
}

#[test]
fn test_registered_student_serializes() {
    let mut dept = Department::new("MAT", "Matemática");
    let mut student = Student::new("123456789", "Ana");
    dept.register(&mut student).unwrap();

    let json = serde_json::to_value(dept.find_student("123456789").unwrap()).unwrap();
    assert_eq!(json["department"], "MAT");
    assert_eq!(json["registration_id"], "123456789");
}

#[test]
fn test_code_change_follows_registry() {
    let mut dept = Department::new("MAT", "Matemática");
    let mut student = Student::new("123456789", "Ana");
    dept.register(&mut student).unwrap();

    dept.set_code("COMP");

    let stored = dept.find_student("123456789").unwrap();
    assert_eq!(stored.department(), Some("COMP"));
    assert_eq!(stored.department(), Some(dept.code()));
}

#[test]
fn test_rename_registered_student() {
    let mut dept = Department::new("MAT", "Matemática");
    let mut student = Student::new("123456789", "Ana");
    dept.register(&mut student).unwrap();

    // Renaming the caller's value does not touch the registry
    student.set_name("Ana Clara");
    assert_eq!(dept.find_student("123456789").unwrap().name(), "Ana");

    dept.rename_student("123456789", "Ana Maria").unwrap();
    assert_eq!(dept.find_student("123456789").unwrap().name(), "Ana Maria");
    assert!(matches!(
        dept.rename_student("987654321", "Nobody"),
        Err(DomainError::StudentNotFound(_))
    ));
}
