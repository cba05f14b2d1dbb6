use crate::utils::error::{ExampleError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(ExampleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_bounds(field_name: &str, min: i32, max: i32) -> Result<()> {
    if min > max {
        return Err(ExampleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{}..{}", min, max),
            reason: "Lower bound must not exceed upper bound".to_string(),
        });
    }
    Ok(())
}
