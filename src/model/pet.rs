use crate::model::{Id, Visit};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: Id,
    pub name: String,
    pub birth_date: NaiveDate,
    #[serde(rename = "type")]
    pub pet_type: String,
    pub owner_id: Id,
    /// Visit history in insertion order. Stores return pets without it; the
    /// caller attaches visits explicitly.
    #[serde(default)]
    pub visits: Vec<Visit>,
}

impl Pet {
    /// Replace the visit collection wholesale
    pub fn set_visits(&mut self, visits: Vec<Visit>) {
        self.visits = visits;
    }

    /// Attach a visit to this pet, pointing its back-reference here
    pub fn add_visit(&mut self, mut visit: Visit) {
        visit.pet_id = self.id;
        self.visits.push(visit);
    }

    pub fn is_owned_by(&self, owner_id: Id) -> bool {
        self.owner_id == owner_id
    }
}
