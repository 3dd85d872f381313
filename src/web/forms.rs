//! HTML form definitions and validation.

use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

/// Submitted new-post form.
#[derive(Debug, Default, Clone, Deserialize, Validate)]
pub struct PostForm {
    #[serde(default)]
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "Title must be at most 100 characters.")
    )]
    pub title: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub content: String,
}

impl PostForm {
    /// Strips surrounding whitespace so limits apply to what is stored.
    pub fn trimmed(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(
            ValidationError::new("required").with_message(Cow::Borrowed("This field is required."))
        );
    }
    Ok(())
}

/// Collects the messages attached to one field.
pub fn field_messages(errors: &ValidationErrors, field: &str) -> Vec<String> {
    errors
        .field_errors()
        .get(field)
        .map(|errs| {
            errs.iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect()
        })
        .unwrap_or_default()
}
