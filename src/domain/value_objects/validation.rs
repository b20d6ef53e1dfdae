use serde::Serialize;

/// One entry of the structured validation error list returned on 400s.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

pub fn check_required_text(
    errors: &mut Vec<FieldError>,
    field: &str,
    value: &str,
    max_len: usize,
) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, &format!("{} is required", field)));
    } else if value.chars().count() > max_len {
        errors.push(FieldError::new(
            field,
            &format!("{} cannot exceed {} characters", field, max_len),
        ));
    }
}

pub fn check_non_negative(errors: &mut Vec<FieldError>, field: &str, value: f64) {
    if value < 0.0 || !value.is_finite() {
        errors.push(FieldError::new(
            field,
            &format!("{} must be a positive number", field),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_oversized_text() {
        let mut errors = Vec::new();
        check_required_text(&mut errors, "name", "  ", 100);
        check_required_text(&mut errors, "plan", &"x".repeat(51), 50);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "name");
        assert!(errors[1].message.contains("50"));
    }

    #[test]
    fn length_limit_counts_characters_not_bytes() {
        let mut errors = Vec::new();
        check_required_text(&mut errors, "name", &"ö".repeat(100), 100);
        assert!(errors.is_empty());

        check_required_text(&mut errors, "name", &"ö".repeat(101), 100);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn rejects_negative_and_non_finite_amounts() {
        let mut errors = Vec::new();
        check_non_negative(&mut errors, "totalSpend", -1.0);
        check_non_negative(&mut errors, "monthlyAmount", f64::NAN);
        check_non_negative(&mut errors, "amount", 0.0);
        assert_eq!(errors.len(), 2);
    }
}
