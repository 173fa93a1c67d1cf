// Format checks for registration numbers and department codes

/// Length of a registration number (matrícula)
pub const REGISTRATION_ID_LEN: usize = 9;

/// True iff `id` is exactly nine ASCII decimal digits
pub fn is_valid_registration_id(id: &str) -> bool {
    id.len() == REGISTRATION_ID_LEN && id.bytes().all(|b| b.is_ascii_digit())
}

/// True iff `code` is one or more uppercase ASCII letters
pub fn is_valid_department_code(code: &str) -> bool {
    !code.is_empty() && code.bytes().all(|b| b.is_ascii_uppercase())
}

/// Uppercase a department code as it is stored
pub fn normalize_department_code(code: &str) -> String {
    code.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_id() {
        assert!(is_valid_registration_id("123456789"));
        assert!(is_valid_registration_id("000000000"));
        assert!(!is_valid_registration_id("12345678"));
        assert!(!is_valid_registration_id("1234567890"));
        assert!(!is_valid_registration_id("12345678a"));
        assert!(!is_valid_registration_id(" 12345678"));
        assert!(!is_valid_registration_id(""));
    }

    #[test]
    fn test_registration_id_rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not in [0-9]
        assert!(!is_valid_registration_id("١٢٣٤٥٦٧٨٩"));
    }

    #[test]
    fn test_department_code() {
        assert!(is_valid_department_code("MAT"));
        assert!(is_valid_department_code("A"));
        assert!(!is_valid_department_code(""));
        assert!(!is_valid_department_code("mat"));
        assert!(!is_valid_department_code("MAT1"));
        assert!(!is_valid_department_code("MA T"));
    }

    #[test]
    fn test_normalize_department_code() {
        assert_eq!(normalize_department_code("mat"), "MAT");
        assert_eq!(normalize_department_code("Comp"), "COMP");
        assert!(is_valid_department_code(&normalize_department_code("mat")));
        assert!(!is_valid_department_code(&normalize_department_code("mat1")));
        assert!(!is_valid_department_code(&normalize_department_code("ção")));
    }
}
