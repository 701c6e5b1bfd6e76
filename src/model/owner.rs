use crate::model::{Id, Pet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub id: Id,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

/// Owner page: the owner plus every pet with its visit history.
#[derive(Debug, Clone, Serialize)]
pub struct OwnerDetails {
    #[serde(flatten)]
    pub owner: Owner,
    pub pets: Vec<Pet>,
}
