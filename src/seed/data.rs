use crate::model::{Id, Owner, Pet, Vet, Visit};
use crate::store::traits::Store;
use anyhow::Result;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn owner(id: Id, first: &str, last: &str, address: &str, city: &str, telephone: &str) -> Owner {
    Owner {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        address: address.to_string(),
        city: city.to_string(),
        telephone: telephone.to_string(),
    }
}

fn pet(id: Id, name: &str, birth_date: NaiveDate, pet_type: &str, owner_id: Id) -> Pet {
    Pet {
        id,
        name: name.to_string(),
        birth_date,
        pet_type: pet_type.to_string(),
        owner_id,
        visits: Vec::new(),
    }
}

pub fn seed_vets() -> Vec<Vet> {
    vec![
        Vet::new(1, "James", "Carter", &[]),
        Vet::new(2, "Helen", "Leary", &["radiology"]),
        Vet::new(3, "Linda", "Douglas", &["surgery", "dentistry"]),
        Vet::new(4, "Rafael", "Ortega", &["surgery"]),
        Vet::new(5, "Henry", "Stevens", &["radiology"]),
        Vet::new(6, "Sharon", "Jenkins", &[]),
    ]
}

pub fn seed_owners() -> Vec<Owner> {
    vec![
        owner(1, "George", "Franklin", "110 W. Liberty St.", "Madison", "6085551023"),
        owner(2, "Betty", "Davis", "638 Cardinal Ave.", "Sun Prairie", "6085551749"),
        owner(3, "Eduardo", "Rodriquez", "2693 Commerce St.", "McFarland", "6085558763"),
        owner(4, "Harold", "Davis", "563 Friendly St.", "Windsor", "6085553198"),
        owner(5, "Peter", "McTavish", "2387 S. Fair Way", "Madison", "6085552765"),
        owner(6, "Jean", "Coleman", "105 N. Lake St.", "Monona", "6085552654"),
        owner(7, "Jeff", "Black", "1450 Oak Blvd.", "Monona", "6085555387"),
        owner(8, "Maria", "Escobito", "345 Maple St.", "Madison", "6085557683"),
        owner(9, "David", "Schroeder", "2749 Blackhawk Trail", "Madison", "6085559435"),
        owner(10, "Carlos", "Estaban", "2335 Independence La.", "Waunakee", "6085555487"),
    ]
}

pub fn seed_pets() -> Vec<Pet> {
    vec![
        pet(1, "Leo", date(2010, 9, 7), "cat", 1),
        pet(2, "Basil", date(2012, 8, 6), "hamster", 2),
        pet(3, "Rosy", date(2011, 4, 17), "dog", 3),
        pet(4, "Jewel", date(2010, 3, 7), "dog", 3),
        pet(5, "Iggy", date(2010, 11, 30), "lizard", 4),
        pet(6, "George", date(2010, 1, 20), "snake", 5),
        pet(7, "Samantha", date(2012, 9, 4), "cat", 6),
        pet(8, "Max", date(2012, 9, 4), "cat", 6),
        pet(9, "Lucky", date(2011, 8, 6), "bird", 7),
        pet(10, "Mulligan", date(2007, 2, 24), "dog", 8),
        pet(11, "Freddy", date(2010, 3, 9), "bird", 9),
        pet(12, "Lucky", date(2010, 6, 24), "dog", 10),
        pet(13, "Sly", date(2012, 6, 8), "cat", 10),
    ]
}

/// Visits in the order they are inserted, so they receive ids 1..=4 on an
/// empty store
pub fn seed_visits() -> Vec<Visit> {
    [
        (7, date(2013, 1, 1), "rabies shot"),
        (8, date(2013, 1, 2), "rabies shot"),
        (8, date(2013, 1, 3), "neutered"),
        (7, date(2013, 1, 4), "spayed"),
    ]
    .into_iter()
    .map(|(pet_id, date, description)| Visit {
        id: None,
        pet_id,
        date,
        description: description.to_string(),
        active: true,
    })
    .collect()
}

/// Load the sample clinic: owners, pets, vets and a handful of visits.
///
/// Owners, pets and vets are upserted by id. Visits are only inserted for pets
/// that have none yet, so loading twice does not duplicate them.
pub async fn load_seed_data<S: Store>(store: &S) -> Result<()> {
    for vet in seed_vets() {
        store.upsert_vet(vet).await?;
    }
    for owner in seed_owners() {
        store.upsert_owner(owner).await?;
    }
    for pet in seed_pets() {
        store.upsert_pet(pet).await?;
    }

    let mut visited = Vec::new();
    for visit in seed_visits() {
        if !visited.contains(&visit.pet_id)
            && !store.list_visits_for_pet(visit.pet_id).await?.is_empty()
        {
            continue;
        }
        visited.push(visit.pet_id);
        store.save_visit(visit).await?;
    }

    log::info!(
        "Seed data loaded: {} owners, {} pets, {} vets",
        seed_owners().len(),
        seed_pets().len(),
        seed_vets().len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;
    use crate::store::traits::{PetStore, VetStore, VisitStore};

    #[tokio::test]
    async fn test_seed_populates_store() {
        let store = InMemoryStore::new();
        load_seed_data(&store).await.unwrap();

        assert_eq!(store.list_vets().await.unwrap().len(), 6);
        assert_eq!(store.list_pets_for_owner(6).await.unwrap().len(), 2);

        let visits = store.list_visits_for_pet(7).await.unwrap();
        let ids: Vec<_> = visits.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![Some(1), Some(4)]);
        assert_eq!(visits[0].description, "rabies shot");
    }

    #[tokio::test]
    async fn test_seed_is_repeatable() {
        let store = InMemoryStore::new();
        load_seed_data(&store).await.unwrap();
        load_seed_data(&store).await.unwrap();

        assert_eq!(store.visit_count(), 4);
    }
}
