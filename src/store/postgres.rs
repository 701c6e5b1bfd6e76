use anyhow::{anyhow, Context, Result};
use sqlx::{postgres::PgPoolOptions, postgres::PgRow, PgPool, Row};

use crate::model::{Id, Owner, Pet, Vet, Visit};
use crate::store::traits::{OwnerStore, PetStore, Store, VetStore, VisitStore};

#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new PostgreSQL store with the given database URL
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .context("Failed to create PostgreSQL connection pool")?;

        Ok(Self { pool })
    }

    /// Run the embedded schema migrations
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to run database migrations")?;
        Ok(())
    }
}

fn owner_from_row(row: &PgRow) -> Owner {
    Owner {
        id: row.get("id"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        address: row.get("address"),
        city: row.get("city"),
        telephone: row.get("telephone"),
    }
}

fn pet_from_row(row: &PgRow) -> Pet {
    Pet {
        id: row.get("id"),
        name: row.get("name"),
        birth_date: row.get("birth_date"),
        pet_type: row.get("pet_type"),
        owner_id: row.get("owner_id"),
        visits: Vec::new(),
    }
}

fn visit_from_row(row: &PgRow) -> Visit {
    Visit {
        id: Some(row.get("id")),
        pet_id: row.get("pet_id"),
        date: row.get("visit_date"),
        description: row.get("description"),
        active: row.get("active"),
    }
}

#[async_trait::async_trait]
impl OwnerStore for PostgresStore {
    async fn get_owner(&self, id: Id) -> Result<Option<Owner>> {
        let row = sqlx::query(
            "SELECT id, first_name, last_name, address, city, telephone FROM owners WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch owner")?;

        Ok(row.as_ref().map(owner_from_row))
    }

    async fn upsert_owner(&self, owner: Owner) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO owners (id, first_name, last_name, address, city, telephone)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                address = EXCLUDED.address,
                city = EXCLUDED.city,
                telephone = EXCLUDED.telephone
            "#,
        )
        .bind(owner.id)
        .bind(&owner.first_name)
        .bind(&owner.last_name)
        .bind(&owner.address)
        .bind(&owner.city)
        .bind(&owner.telephone)
        .execute(&self.pool)
        .await
        .context("Failed to upsert owner")?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl PetStore for PostgresStore {
    async fn get_pet(&self, id: Id) -> Result<Option<Pet>> {
        let row = sqlx::query(
            "SELECT id, name, birth_date, pet_type, owner_id FROM pets WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch pet")?;

        Ok(row.as_ref().map(pet_from_row))
    }

    async fn list_pets_for_owner(&self, owner_id: Id) -> Result<Vec<Pet>> {
        let rows = sqlx::query(
            "SELECT id, name, birth_date, pet_type, owner_id FROM pets WHERE owner_id = $1 ORDER BY id",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list pets for owner")?;

        Ok(rows.iter().map(pet_from_row).collect())
    }

    async fn upsert_pet(&self, pet: Pet) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO pets (id, name, birth_date, pet_type, owner_id)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                birth_date = EXCLUDED.birth_date,
                pet_type = EXCLUDED.pet_type,
                owner_id = EXCLUDED.owner_id
            "#,
        )
        .bind(pet.id)
        .bind(&pet.name)
        .bind(pet.birth_date)
        .bind(&pet.pet_type)
        .bind(pet.owner_id)
        .execute(&self.pool)
        .await
        .context("Failed to upsert pet")?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl VisitStore for PostgresStore {
    async fn list_visits_for_pet(&self, pet_id: Id) -> Result<Vec<Visit>> {
        let rows = sqlx::query(
            "SELECT id, pet_id, visit_date, description, active FROM visits WHERE pet_id = $1 ORDER BY id",
        )
        .bind(pet_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list visits for pet")?;

        Ok(rows.iter().map(visit_from_row).collect())
    }

    async fn get_visit(&self, pet_id: Id, visit_id: Id) -> Result<Option<Visit>> {
        let row = sqlx::query(
            "SELECT id, pet_id, visit_date, description, active FROM visits WHERE pet_id = $1 AND id = $2",
        )
        .bind(pet_id)
        .bind(visit_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch visit")?;

        Ok(row.as_ref().map(visit_from_row))
    }

    async fn save_visit(&self, mut visit: Visit) -> Result<Visit> {
        match visit.id {
            None => {
                let id: Id = sqlx::query_scalar(
                    r#"
                    INSERT INTO visits (pet_id, visit_date, description, active)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id
                    "#,
                )
                .bind(visit.pet_id)
                .bind(visit.date)
                .bind(&visit.description)
                .bind(visit.active)
                .fetch_one(&self.pool)
                .await
                .context("Failed to insert visit")?;

                visit.id = Some(id);
            }
            Some(id) => {
                let result = sqlx::query(
                    r#"
                    UPDATE visits SET
                        pet_id = $2,
                        visit_date = $3,
                        description = $4,
                        active = $5
                    WHERE id = $1
                    "#,
                )
                .bind(id)
                .bind(visit.pet_id)
                .bind(visit.date)
                .bind(&visit.description)
                .bind(visit.active)
                .execute(&self.pool)
                .await
                .context("Failed to update visit")?;

                if result.rows_affected() == 0 {
                    return Err(anyhow!("Visit {} does not exist", id));
                }
            }
        }

        Ok(visit)
    }
}

#[async_trait::async_trait]
impl VetStore for PostgresStore {
    async fn list_vets(&self) -> Result<Vec<Vet>> {
        let rows = sqlx::query("SELECT id, first_name, last_name, specialties FROM vets ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list vets")?;

        let vets = rows
            .into_iter()
            .map(|row| Vet {
                id: row.get("id"),
                first_name: row.get("first_name"),
                last_name: row.get("last_name"),
                specialties: row.get("specialties"),
            })
            .collect();

        Ok(vets)
    }

    async fn upsert_vet(&self, vet: Vet) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO vets (id, first_name, last_name, specialties)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                specialties = EXCLUDED.specialties
            "#,
        )
        .bind(vet.id)
        .bind(&vet.first_name)
        .bind(&vet.last_name)
        .bind(&vet.specialties)
        .execute(&self.pool)
        .await
        .context("Failed to upsert vet")?;

        Ok(())
    }
}

impl Store for PostgresStore {}
