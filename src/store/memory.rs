use anyhow::{anyhow, Result};
use parking_lot::RwLock;
use std::collections::BTreeMap;

use crate::model::{Id, Owner, Pet, Vet, Visit};
use crate::store::traits::{OwnerStore, PetStore, Store, VetStore, VisitStore};

#[derive(Debug, Default)]
struct Tables {
    owners: BTreeMap<Id, Owner>,
    pets: BTreeMap<Id, Pet>,
    vets: BTreeMap<Id, Vet>,
    visits: BTreeMap<Id, Visit>,
    next_visit_id: Id,
}

/// Process-local store backed by ordered maps.
///
/// Visit ids come from a monotonically increasing counter, so iterating the
/// visit map yields insertion order.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visit_count(&self) -> usize {
        self.tables.read().visits.len()
    }
}

#[async_trait::async_trait]
impl OwnerStore for InMemoryStore {
    async fn get_owner(&self, id: Id) -> Result<Option<Owner>> {
        Ok(self.tables.read().owners.get(&id).cloned())
    }

    async fn upsert_owner(&self, owner: Owner) -> Result<()> {
        self.tables.write().owners.insert(owner.id, owner);
        Ok(())
    }
}

#[async_trait::async_trait]
impl PetStore for InMemoryStore {
    async fn get_pet(&self, id: Id) -> Result<Option<Pet>> {
        Ok(self.tables.read().pets.get(&id).cloned())
    }

    async fn list_pets_for_owner(&self, owner_id: Id) -> Result<Vec<Pet>> {
        let tables = self.tables.read();
        Ok(tables
            .pets
            .values()
            .filter(|p| p.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn upsert_pet(&self, mut pet: Pet) -> Result<()> {
        pet.visits.clear();
        self.tables.write().pets.insert(pet.id, pet);
        Ok(())
    }
}

#[async_trait::async_trait]
impl VisitStore for InMemoryStore {
    async fn list_visits_for_pet(&self, pet_id: Id) -> Result<Vec<Visit>> {
        let tables = self.tables.read();
        Ok(tables
            .visits
            .values()
            .filter(|v| v.pet_id == pet_id)
            .cloned()
            .collect())
    }

    async fn get_visit(&self, pet_id: Id, visit_id: Id) -> Result<Option<Visit>> {
        let tables = self.tables.read();
        Ok(tables
            .visits
            .get(&visit_id)
            .filter(|v| v.pet_id == pet_id)
            .cloned())
    }

    async fn save_visit(&self, mut visit: Visit) -> Result<Visit> {
        let mut tables = self.tables.write();
        if !tables.pets.contains_key(&visit.pet_id) {
            return Err(anyhow!("Cannot save visit for unknown pet {}", visit.pet_id));
        }

        let id = match visit.id {
            Some(id) if tables.visits.contains_key(&id) => id,
            Some(id) => return Err(anyhow!("Visit {} does not exist", id)),
            None => {
                tables.next_visit_id += 1;
                tables.next_visit_id
            }
        };

        visit.id = Some(id);
        tables.visits.insert(id, visit.clone());
        Ok(visit)
    }
}

#[async_trait::async_trait]
impl VetStore for InMemoryStore {
    async fn list_vets(&self) -> Result<Vec<Vet>> {
        Ok(self.tables.read().vets.values().cloned().collect())
    }

    async fn upsert_vet(&self, vet: Vet) -> Result<()> {
        self.tables.write().vets.insert(vet.id, vet);
        Ok(())
    }
}

impl Store for InMemoryStore {}
