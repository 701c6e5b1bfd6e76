use crate::model::Id;

#[derive(Debug, thiserror::Error)]
pub enum ClinicError {
    #[error("Pet {0} not found")]
    PetNotFound(Id),

    #[error("Pet {pet_id} not found for owner {owner_id}")]
    PetNotOwned { owner_id: Id, pet_id: Id },

    #[error("Visit {visit_id} not found for pet {pet_id}")]
    VisitNotFound { pet_id: Id, visit_id: Id },

    #[error("Owner {0} not found")]
    OwnerNotFound(Id),

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl ClinicError {
    pub fn is_not_found(&self) -> bool {
        !matches!(self, ClinicError::Store(_))
    }
}
