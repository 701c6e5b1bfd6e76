use crate::model::{BindingResult, Id, DATE_FORMAT};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Matches the `visits.description` column width
pub const MAX_DESCRIPTION_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    /// Assigned by the store on first save; `None` until then
    pub id: Option<Id>,
    pub pet_id: Id,
    pub date: NaiveDate,
    pub description: String,
    pub active: bool,
}

impl Visit {
    /// A fresh, unsaved visit for the given pet, dated today
    pub fn new(pet_id: Id) -> Self {
        Self {
            id: None,
            pet_id,
            date: Utc::now().date_naive(),
            description: String::new(),
            active: true,
        }
    }

    /// Soft-cancel. Once inactive a visit never becomes active again.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}

/// Inbound visit form.
///
/// Only the fields listed here are ever bound from a request body. Anything
/// else the client sends (notably `id`, `pet_id` or `active`) is dropped by
/// deserialization, so identity and status stay under server control.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VisitForm {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl VisitForm {
    /// Copy the submitted fields onto `visit` and validate the result.
    ///
    /// An absent or empty `date` leaves the visit's current date in place.
    pub fn bind(&self, visit: &mut Visit) -> BindingResult {
        let mut result = BindingResult::new();

        if let Some(raw) = self.date.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
                Ok(date) => visit.date = date,
                Err(_) => result.reject(
                    "date",
                    "typeMismatch",
                    format!("'{}' is not a valid date (expected yyyy-MM-dd)", raw),
                ),
            }
        }

        if let Some(description) = &self.description {
            visit.description = description.clone();
        }

        if visit.description.trim().is_empty() {
            result.reject("description", "required", "must not be blank");
        } else if visit.description.chars().count() > MAX_DESCRIPTION_LEN {
            result.reject(
                "description",
                "size",
                format!("must be at most {} characters", MAX_DESCRIPTION_LEN),
            );
        }

        result
    }
}
