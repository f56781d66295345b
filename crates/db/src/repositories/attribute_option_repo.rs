//! Repository for the `attribute_options` table.

use pawmatch_core::attribute;
use pawmatch_core::types::DbId;
use sqlx::PgPool;

use crate::models::attribute_option::AttributeOption;

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, attribute_id, name, is_deleted, created_at, updated_at";

/// Provides CRUD operations for attribute options.
pub struct AttributeOptionRepo;

impl AttributeOptionRepo {
    /// Insert a new option for `attribute_id`.
    ///
    /// A duplicate active name on the same attribute fails with a unique
    /// violation on `uq_attribute_options_active_name`.
    pub async fn create(
        pool: &PgPool,
        attribute_id: DbId,
        name: &str,
    ) -> Result<AttributeOption, sqlx::Error> {
        let query = format!(
            "INSERT INTO attribute_options (attribute_id, name, name_key) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AttributeOption>(&query)
            .bind(attribute_id)
            .bind(name)
            .bind(attribute::name_key(name))
            .fetch_one(pool)
            .await
    }

    /// Find an active option by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AttributeOption>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM attribute_options WHERE id = $1 AND is_deleted = false");
        sqlx::query_as::<_, AttributeOption>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an option by ID, including soft-deleted rows.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AttributeOption>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM attribute_options WHERE id = $1");
        sqlx::query_as::<_, AttributeOption>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the active options of one attribute, ordered by id.
    pub async fn list_for_attribute(
        pool: &PgPool,
        attribute_id: DbId,
    ) -> Result<Vec<AttributeOption>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM attribute_options \
             WHERE attribute_id = $1 AND is_deleted = false \
             ORDER BY id"
        );
        sqlx::query_as::<_, AttributeOption>(&query)
            .bind(attribute_id)
            .fetch_all(pool)
            .await
    }

    /// Whether another active option of the same attribute uses `name`,
    /// compared by [`attribute::name_key`].
    pub async fn name_exists(
        pool: &PgPool,
        attribute_id: DbId,
        name: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS ( \
                 SELECT 1 FROM attribute_options \
                 WHERE attribute_id = $1 \
                   AND name_key = $2 \
                   AND is_deleted = false \
                   AND ($3::BIGINT IS NULL OR id <> $3) \
             )",
        )
        .bind(attribute_id)
        .bind(attribute::name_key(name))
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }

    /// Rename an active option. Returns `None` if no active row matches.
    pub async fn rename(
        pool: &PgPool,
        id: DbId,
        name: &str,
    ) -> Result<Option<AttributeOption>, sqlx::Error> {
        let query = format!(
            "UPDATE attribute_options SET name = $2, name_key = $3 \
             WHERE id = $1 AND is_deleted = false \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AttributeOption>(&query)
            .bind(id)
            .bind(name)
            .bind(attribute::name_key(name))
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete an option. Returns `true` if an active row was flagged.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE attribute_options SET is_deleted = true WHERE id = $1 AND is_deleted = false",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
