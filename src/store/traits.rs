use crate::model::{Id, Owner, Pet, Vet, Visit};
use anyhow::Result;

#[async_trait::async_trait]
pub trait OwnerStore: Send + Sync {
    async fn get_owner(&self, id: Id) -> Result<Option<Owner>>;
    async fn upsert_owner(&self, owner: Owner) -> Result<()>;
}

/// Pets are returned without their visit history attached
#[async_trait::async_trait]
pub trait PetStore: Send + Sync {
    async fn get_pet(&self, id: Id) -> Result<Option<Pet>>;
    async fn list_pets_for_owner(&self, owner_id: Id) -> Result<Vec<Pet>>;
    async fn upsert_pet(&self, pet: Pet) -> Result<()>;
}

#[async_trait::async_trait]
pub trait VisitStore: Send + Sync {
    /// All visits of a pet in insertion order
    async fn list_visits_for_pet(&self, pet_id: Id) -> Result<Vec<Visit>>;
    /// Indexed lookup; `None` when the visit is missing or belongs to another pet
    async fn get_visit(&self, pet_id: Id, visit_id: Id) -> Result<Option<Visit>>;
    /// Insert when `visit.id` is `None`, otherwise update. Returns the stored visit.
    async fn save_visit(&self, visit: Visit) -> Result<Visit>;
}

#[async_trait::async_trait]
pub trait VetStore: Send + Sync {
    async fn list_vets(&self) -> Result<Vec<Vet>>;
    async fn upsert_vet(&self, vet: Vet) -> Result<()>;
}

pub trait Store: OwnerStore + PetStore + VisitStore + VetStore + Send + Sync {}
