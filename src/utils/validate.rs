/// 邀请码只要求非空，其余字符原样接受
pub fn validate_class_code(code: &str) -> Result<(), &'static str> {
    if code.trim().is_empty() {
        return Err("Class code must not be empty");
    }
    Ok(())
}

pub fn validate_class_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Class name must not be empty");
    }
    if name.chars().count() > 128 {
        return Err("Class name must be at most 128 characters");
    }
    Ok(())
}

pub fn validate_test_title(title: &str) -> Result<(), &'static str> {
    if title.trim().is_empty() {
        return Err("Test title must not be empty");
    }
    Ok(())
}

/// 得分必须非负，且不超过满分（若设置了满分）
pub fn validate_marks(marks: i32, total_marks: Option<i32>) -> Result<(), &'static str> {
    if marks < 0 {
        return Err("Marks must not be negative");
    }
    if let Some(total) = total_marks
        && marks > total
    {
        return Err("Marks must not exceed the test's total marks");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_class_codes() {
        assert!(validate_class_code("ALG1").is_ok());
        assert!(validate_class_code("phys-2024_a").is_ok());
        assert!(validate_class_code("MATH 101").is_ok());
        assert!(validate_class_code("CS.101").is_ok());
        assert!(validate_class_code(&"X".repeat(64)).is_ok());
    }

    #[test]
    fn test_invalid_class_codes() {
        assert!(validate_class_code("").is_err());
        assert!(validate_class_code("   ").is_err());
    }

    #[test]
    fn test_class_name() {
        assert!(validate_class_name("Algebra I").is_ok());
        assert!(validate_class_name("   ").is_err());
    }

    #[test]
    fn test_marks_bounds() {
        assert!(validate_marks(0, Some(50)).is_ok());
        assert!(validate_marks(50, Some(50)).is_ok());
        assert!(validate_marks(51, Some(50)).is_err());
        assert!(validate_marks(-1, None).is_err());
        assert!(validate_marks(1000, None).is_ok());
    }
}
