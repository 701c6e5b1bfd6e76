use serde::Serialize;

use crate::logic::ClinicError;
use crate::model::{BindingResult, FieldError, Id, Pet, Vet, Visit, VisitForm};
use crate::store::traits::Store;

/// View rendered for both creating and editing a visit
pub const VISIT_FORM_VIEW: &str = "pets/createOrUpdateVisitForm";

/// Request-scoped data every visit operation starts from.
///
/// Built explicitly by the handler before the operation runs: the pet with its
/// stored visits plus a fresh visit appended to that collection, the fresh
/// visit itself, and the vet list for the form.
#[derive(Debug, Clone)]
pub struct VisitContext {
    pub pet: Pet,
    pub visit: Visit,
    pub vets: Vec<Vet>,
}

impl VisitContext {
    pub async fn load<S: Store>(store: &S, pet_id: Id) -> Result<Self, ClinicError> {
        let mut pet = store
            .get_pet(pet_id)
            .await?
            .ok_or(ClinicError::PetNotFound(pet_id))?;

        pet.set_visits(store.list_visits_for_pet(pet_id).await?);
        let visit = Visit::new(pet.id);
        pet.add_visit(visit.clone());
        let vets = store.list_vets().await?;

        Ok(Self { pet, visit, vets })
    }

    /// Same as [`VisitContext::load`], but the pet must belong to `owner_id`
    pub async fn load_for_owner<S: Store>(
        store: &S,
        owner_id: Id,
        pet_id: Id,
    ) -> Result<Self, ClinicError> {
        let context = Self::load(store, pet_id).await?;
        if !context.pet.is_owned_by(owner_id) {
            return Err(ClinicError::PetNotOwned { owner_id, pet_id });
        }
        Ok(context)
    }

    fn into_form(self, binding: BindingResult) -> VisitOutcome {
        VisitOutcome::Form(VisitFormModel {
            view: VISIT_FORM_VIEW,
            pet: self.pet,
            visit: self.visit,
            vets: self.vets,
            errors: binding.errors,
        })
    }
}

/// Everything the visit form needs to render
#[derive(Debug, Clone, Serialize)]
pub struct VisitFormModel {
    pub view: &'static str,
    pub pet: Pet,
    pub visit: Visit,
    pub vets: Vec<Vet>,
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Clone)]
pub enum VisitOutcome {
    /// Render (or re-render) the visit form
    Form(VisitFormModel),
    /// Redirect to the given location
    Redirect(String),
}

impl VisitOutcome {
    fn owner_page(owner_id: Id) -> Self {
        VisitOutcome::Redirect(format!("/owners/{}", owner_id))
    }
}

pub struct VisitFlow;

impl VisitFlow {
    pub fn show_new_form(context: VisitContext) -> VisitOutcome {
        context.into_form(BindingResult::new())
    }

    pub async fn submit_new<S: Store>(
        store: &S,
        mut context: VisitContext,
        owner_id: Id,
        form: &VisitForm,
    ) -> Result<VisitOutcome, ClinicError> {
        let binding = form.bind(&mut context.visit);
        if binding.has_errors() {
            log::debug!(
                "New visit for pet {} rejected with {} field error(s)",
                context.pet.id,
                binding.errors.len()
            );
            return Ok(context.into_form(binding));
        }

        let saved = store.save_visit(context.visit).await?;
        log::info!(
            "Created visit {:?} for pet {} (owner {})",
            saved.id,
            saved.pet_id,
            owner_id
        );
        Ok(VisitOutcome::owner_page(owner_id))
    }

    pub async fn show_edit_form<S: Store>(
        store: &S,
        mut context: VisitContext,
        visit_id: Id,
    ) -> Result<VisitOutcome, ClinicError> {
        context.visit = Self::find_visit(store, context.pet.id, visit_id).await?;
        Ok(context.into_form(BindingResult::new()))
    }

    /// Apply the form to `visit`, the stored visit found by
    /// [`VisitFlow::find_visit`]. The path id always wins over anything the
    /// client sent, and the active flag is left untouched.
    pub async fn submit_edit<S: Store>(
        store: &S,
        mut context: VisitContext,
        owner_id: Id,
        visit_id: Id,
        mut visit: Visit,
        form: &VisitForm,
    ) -> Result<VisitOutcome, ClinicError> {
        let binding = form.bind(&mut visit);
        if binding.has_errors() {
            log::debug!(
                "Edit of visit {} rejected with {} field error(s)",
                visit_id,
                binding.errors.len()
            );
            context.visit = visit;
            return Ok(context.into_form(binding));
        }

        visit.id = Some(visit_id);
        store.save_visit(visit).await?;
        log::info!("Updated visit {} for pet {}", visit_id, context.pet.id);
        Ok(VisitOutcome::owner_page(owner_id))
    }

    /// Soft-cancel: flip the active flag and save. Cancelling twice is harmless.
    pub async fn cancel<S: Store>(
        store: &S,
        context: VisitContext,
        owner_id: Id,
        visit_id: Id,
    ) -> Result<VisitOutcome, ClinicError> {
        let mut visit = Self::find_visit(store, context.pet.id, visit_id).await?;
        if !visit.active {
            log::debug!("Visit {} is already cancelled", visit_id);
        }

        visit.cancel();
        visit.id = Some(visit_id);
        store.save_visit(visit).await?;
        log::info!("Cancelled visit {} for pet {}", visit_id, context.pet.id);
        Ok(VisitOutcome::owner_page(owner_id))
    }

    /// Indexed lookup of one of the pet's visits; 404 when absent
    pub async fn find_visit<S: Store>(
        store: &S,
        pet_id: Id,
        visit_id: Id,
    ) -> Result<Visit, ClinicError> {
        store
            .get_visit(pet_id, visit_id)
            .await?
            .ok_or(ClinicError::VisitNotFound { pet_id, visit_id })
    }
}
