use itertools::Itertools;

use crate::logic::ClinicError;
use crate::model::{Id, OwnerDetails};
use crate::store::traits::Store;

/// Owner page data: pets sorted by name, each with its full visit history
pub async fn load_owner_details<S: Store>(
    store: &S,
    owner_id: Id,
) -> Result<OwnerDetails, ClinicError> {
    let owner = store
        .get_owner(owner_id)
        .await?
        .ok_or(ClinicError::OwnerNotFound(owner_id))?;

    let mut pets = Vec::new();
    for mut pet in store.list_pets_for_owner(owner_id).await? {
        pet.set_visits(store.list_visits_for_pet(pet.id).await?);
        pets.push(pet);
    }

    let pets = pets
        .into_iter()
        .sorted_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)))
        .collect();

    Ok(OwnerDetails { owner, pets })
}
