//! Repository for the `attributes` table.
//!
//! Name uniqueness among active rows is enforced by the partial unique index
//! `uq_attributes_active_name` over `name_key`; [`AttributeRepo::name_exists`]
//! is only the cheap pre-check callers run to fail fast. Every write that sets
//! `name` also sets `name_key` from [`attribute::name_key`].

use std::collections::HashMap;

use pawmatch_core::attribute;
use pawmatch_core::pagination::{Page, PageRequest};
use pawmatch_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::attribute::{Attribute, AttributeWithOptions, CreateAttribute, UpdateAttribute};
use crate::models::attribute_option::AttributeOption;
use crate::paging::PagedQuery;
use crate::repositories::attribute_option_repo::COLUMNS as OPTION_COLUMNS;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, type_value, unit, percent, is_deleted, created_at, updated_at";

/// Option columns qualified with the `o.` alias (used in JOIN queries).
const OPTION_JOIN_COLUMNS: &str =
    "o.id, o.attribute_id, o.name, o.is_deleted, o.created_at, o.updated_at";

/// Listing definition: search matches name, unit or type.
const PAGED: PagedQuery<'static> = PagedQuery {
    table: "attributes",
    columns: COLUMNS,
    search_columns: &["name", "unit", "type_value"],
    soft_delete_column: Some("is_deleted"),
};

/// Open a read-only transaction whose statements all see one snapshot.
async fn begin_snapshot(pool: &PgPool) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
        .execute(&mut *tx)
        .await?;
    Ok(tx)
}

/// Provides CRUD operations for attributes.
pub struct AttributeRepo;

impl AttributeRepo {
    /// Insert a new attribute, returning the created row.
    ///
    /// Expects a normalised input (trimmed name, validated type and percent).
    /// A duplicate active name fails with a unique violation on
    /// `uq_attributes_active_name`.
    pub async fn create(pool: &PgPool, input: &CreateAttribute) -> Result<Attribute, sqlx::Error> {
        let query = format!(
            "INSERT INTO attributes (name, name_key, type_value, unit, percent) \
             VALUES ($1, $2, $3, $4, COALESCE($5, 0)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Attribute>(&query)
            .bind(&input.name)
            .bind(attribute::name_key(&input.name))
            .bind(&input.type_value)
            .bind(&input.unit)
            .bind(input.percent)
            .fetch_one(pool)
            .await
    }

    /// Find an active attribute by ID. Soft-deleted rows are not returned.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Attribute>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM attributes WHERE id = $1 AND is_deleted = false");
        sqlx::query_as::<_, Attribute>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an attribute by ID, including soft-deleted rows.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Attribute>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM attributes WHERE id = $1");
        sqlx::query_as::<_, Attribute>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active attribute by ID together with its active options.
    ///
    /// Both reads share one snapshot.
    pub async fn find_with_options(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AttributeWithOptions>, sqlx::Error> {
        let mut tx = begin_snapshot(pool).await?;

        let query = format!("SELECT {COLUMNS} FROM attributes WHERE id = $1 AND is_deleted = false");
        let Some(attribute) = sqlx::query_as::<_, Attribute>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            tx.commit().await?;
            return Ok(None);
        };

        let option_query = format!(
            "SELECT {OPTION_COLUMNS} FROM attribute_options \
             WHERE attribute_id = $1 AND is_deleted = false \
             ORDER BY id"
        );
        let options = sqlx::query_as::<_, AttributeOption>(&option_query)
            .bind(id)
            .fetch_all(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(Some(AttributeWithOptions { attribute, options }))
    }

    /// Whether an active attribute already uses `name`, compared by
    /// [`attribute::name_key`].
    ///
    /// `exclude_id` skips the attribute being renamed.
    pub async fn name_exists(
        pool: &PgPool,
        name: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS ( \
                 SELECT 1 FROM attributes \
                 WHERE name_key = $1 \
                   AND is_deleted = false \
                   AND ($2::BIGINT IS NULL OR id <> $2) \
             )",
        )
        .bind(attribute::name_key(name))
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }

    /// Paged listing with optional search over name, unit and type.
    pub async fn list(
        pool: &PgPool,
        request: PageRequest,
        search: Option<&str>,
        include_deleted: bool,
    ) -> Result<Page<Attribute>, sqlx::Error> {
        PAGED.fetch(pool, request, search, include_deleted).await
    }

    /// All active attributes with their active options, ordered by id.
    ///
    /// Both reads share one snapshot, so a concurrent write is either fully
    /// visible or not at all.
    pub async fn list_active_with_options(
        pool: &PgPool,
    ) -> Result<Vec<AttributeWithOptions>, sqlx::Error> {
        let mut tx = begin_snapshot(pool).await?;

        let query = format!("SELECT {COLUMNS} FROM attributes WHERE is_deleted = false ORDER BY id");
        let attributes = sqlx::query_as::<_, Attribute>(&query)
            .fetch_all(&mut *tx)
            .await?;

        let option_query = format!(
            "SELECT {OPTION_JOIN_COLUMNS} FROM attribute_options o \
             JOIN attributes a ON a.id = o.attribute_id \
             WHERE o.is_deleted = false AND a.is_deleted = false \
             ORDER BY o.attribute_id, o.id"
        );
        let options = sqlx::query_as::<_, AttributeOption>(&option_query)
            .fetch_all(&mut *tx)
            .await?;
        tx.commit().await?;

        let mut by_attribute: HashMap<DbId, Vec<AttributeOption>> = HashMap::new();
        for option in options {
            by_attribute.entry(option.attribute_id).or_default().push(option);
        }

        Ok(attributes
            .into_iter()
            .map(|attribute| {
                let options = by_attribute.remove(&attribute.id).unwrap_or_default();
                AttributeWithOptions { attribute, options }
            })
            .collect())
    }

    /// Update an active attribute. Only non-`None` fields are applied;
    /// `unit = Some("")` clears the unit.
    ///
    /// Returns `None` if no active row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAttribute,
    ) -> Result<Option<Attribute>, sqlx::Error> {
        let query = format!(
            "UPDATE attributes SET \
                name = COALESCE($2, name), \
                name_key = COALESCE($3, name_key), \
                type_value = COALESCE($4, type_value), \
                unit = CASE WHEN $5::TEXT IS NULL THEN unit ELSE NULLIF($5, '') END, \
                percent = COALESCE($6, percent) \
             WHERE id = $1 AND is_deleted = false \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Attribute>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.name.as_deref().map(attribute::name_key))
            .bind(&input.type_value)
            .bind(&input.unit)
            .bind(input.percent)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete an attribute. Returns `true` if an active row was flagged.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE attributes SET is_deleted = true WHERE id = $1 AND is_deleted = false",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Restore a soft-deleted attribute. Returns `true` if a row was restored.
    ///
    /// Fails with a unique violation if an active attribute took the name in
    /// the meantime.
    pub async fn restore(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE attributes SET is_deleted = false WHERE id = $1 AND is_deleted = true",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete an attribute, active or not.
    ///
    /// Options, preferences and characteristics referencing it are removed by
    /// `ON DELETE CASCADE`.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM attributes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
