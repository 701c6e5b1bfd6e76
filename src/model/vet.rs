use crate::model::Id;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vet {
    pub id: Id,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub specialties: Vec<String>,
}

impl Vet {
    pub fn new(id: Id, first_name: &str, last_name: &str, specialties: &[&str]) -> Self {
        Self {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            specialties: specialties.iter().map(|s| s.to_string()).collect(),
        }
    }
}
