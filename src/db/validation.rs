//! Field checks applied right before an insert.

use crate::error::ValidationError;

/// Column length ceilings, in characters.
pub mod limits {
    pub const CHECKLIST_ID: usize = 45;
    pub const EVALUATION_ID: usize = 45;
    pub const DELIVERABLE_ID: usize = 255;
    pub const QUESTION_ID: usize = 50;
}

/// Reject values longer than `max_length` characters. `None` always passes.
pub fn check_length(
    field: &'static str,
    value: Option<&str>,
    max_length: usize,
) -> Result<(), ValidationError> {
    match value {
        Some(v) => {
            let actual_length = v.chars().count();
            if actual_length > max_length {
                Err(ValidationError::TooLong {
                    field,
                    max_length,
                    actual_length,
                })
            } else {
                Ok(())
            }
        }
        None => Ok(()),
    }
}

/// Require a value to be present.
pub fn require<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, ValidationError> {
    value.ok_or(ValidationError::Missing { field })
}
