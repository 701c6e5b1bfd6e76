use serde::{Deserialize, Serialize};

/// Storage-assigned integer key shared by owners, pets, visits and vets.
pub type Id = i32;

/// Date format accepted from forms and used in the JSON views.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single field-level problem found while binding or validating a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub code: String,
    pub message: String,
}

/// Errors collected while binding a form onto a domain object.
///
/// Binding never stops at the first problem; every field is checked and the
/// caller decides whether to persist or to re-render the form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BindingResult {
    pub errors: Vec<FieldError>,
}

impl BindingResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject(&mut self, field: &str, code: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_string(),
            code: code.to_string(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
