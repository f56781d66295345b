//! Repository for the `user_preferences` table.
//!
//! Pure storage: one row per (user, attribute), enforced by
//! `uq_user_preferences_user_attribute`. Shape checks against the attribute
//! type happen in the caller.

use pawmatch_core::types::DbId;
use sqlx::PgPool;

use crate::models::user_preference::{UpsertUserPreference, UserPreference};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, user_id, attribute_id, option_id, min_value, max_value, created_at, updated_at";

/// Provides storage operations for user preferences.
pub struct UserPreferenceRepo;

impl UserPreferenceRepo {
    /// Create or replace the preference for `(user_id, attribute_id)`.
    ///
    /// All value fields are overwritten, so switching from an option to a
    /// range clears the option.
    pub async fn upsert(
        pool: &PgPool,
        user_id: DbId,
        attribute_id: DbId,
        input: &UpsertUserPreference,
    ) -> Result<UserPreference, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_preferences (user_id, attribute_id, option_id, min_value, max_value) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT ON CONSTRAINT uq_user_preferences_user_attribute DO UPDATE SET \
                option_id = EXCLUDED.option_id, \
                min_value = EXCLUDED.min_value, \
                max_value = EXCLUDED.max_value \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserPreference>(&query)
            .bind(user_id)
            .bind(attribute_id)
            .bind(input.option_id)
            .bind(input.min_value)
            .bind(input.max_value)
            .fetch_one(pool)
            .await
    }

    /// Get the preference for one (user, attribute) pair.
    pub async fn find(
        pool: &PgPool,
        user_id: DbId,
        attribute_id: DbId,
    ) -> Result<Option<UserPreference>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_preferences WHERE user_id = $1 AND attribute_id = $2"
        );
        sqlx::query_as::<_, UserPreference>(&query)
            .bind(user_id)
            .bind(attribute_id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's preferences ordered by `attribute_id`.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<UserPreference>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_preferences WHERE user_id = $1 ORDER BY attribute_id"
        );
        sqlx::query_as::<_, UserPreference>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Whether the user has configured a preference for the attribute.
    pub async fn exists(
        pool: &PgPool,
        user_id: DbId,
        attribute_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM user_preferences WHERE user_id = $1 AND attribute_id = $2)",
        )
        .bind(user_id)
        .bind(attribute_id)
        .fetch_one(pool)
        .await
    }

    /// Clear one filter. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, user_id: DbId, attribute_id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM user_preferences WHERE user_id = $1 AND attribute_id = $2")
                .bind(user_id)
                .bind(attribute_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
