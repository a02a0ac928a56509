use crate::utils::error::{GatewayError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Only presence is checked; blank-looking or odd values are passed through as-is.
pub fn validate_present(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(GatewayError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}
