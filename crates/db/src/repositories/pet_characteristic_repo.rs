//! Repository for the `pet_characteristics` table.

use pawmatch_core::types::DbId;
use sqlx::PgPool;

use crate::models::pet_characteristic::{PetCharacteristic, UpsertPetCharacteristic};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, pet_id, attribute_id, option_id, value, created_at, updated_at";

/// Provides storage operations for pet characteristics.
pub struct PetCharacteristicRepo;

impl PetCharacteristicRepo {
    /// Create or replace the characteristic for `(pet_id, attribute_id)`.
    pub async fn upsert(
        pool: &PgPool,
        pet_id: DbId,
        attribute_id: DbId,
        input: &UpsertPetCharacteristic,
    ) -> Result<PetCharacteristic, sqlx::Error> {
        let query = format!(
            "INSERT INTO pet_characteristics (pet_id, attribute_id, option_id, value) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT ON CONSTRAINT uq_pet_characteristics_pet_attribute DO UPDATE SET \
                option_id = EXCLUDED.option_id, \
                value = EXCLUDED.value \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PetCharacteristic>(&query)
            .bind(pet_id)
            .bind(attribute_id)
            .bind(input.option_id)
            .bind(input.value)
            .fetch_one(pool)
            .await
    }

    pub async fn find(
        pool: &PgPool,
        pet_id: DbId,
        attribute_id: DbId,
    ) -> Result<Option<PetCharacteristic>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pet_characteristics WHERE pet_id = $1 AND attribute_id = $2"
        );
        sqlx::query_as::<_, PetCharacteristic>(&query)
            .bind(pet_id)
            .bind(attribute_id)
            .fetch_optional(pool)
            .await
    }

    /// List a pet's characteristics ordered by `attribute_id`.
    pub async fn list_by_pet(
        pool: &PgPool,
        pet_id: DbId,
    ) -> Result<Vec<PetCharacteristic>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pet_characteristics WHERE pet_id = $1 ORDER BY attribute_id"
        );
        sqlx::query_as::<_, PetCharacteristic>(&query)
            .bind(pet_id)
            .fetch_all(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, pet_id: DbId, attribute_id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM pet_characteristics WHERE pet_id = $1 AND attribute_id = $2)",
        )
        .bind(pet_id)
        .bind(attribute_id)
        .fetch_one(pool)
        .await
    }

    /// Remove one characteristic. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, pet_id: DbId, attribute_id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM pet_characteristics WHERE pet_id = $1 AND attribute_id = $2")
                .bind(pet_id)
                .bind(attribute_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
