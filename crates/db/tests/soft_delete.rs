//! Integration tests for soft-delete, restore, and hard-delete behaviour.
//!
//! Exercises the repository layer against a real database to verify that:
//! - Soft-deleted attributes are hidden from `find_by_id` and listings
//! - A second soft delete affects no rows
//! - Restoring makes the attribute visible again
//! - Hard delete removes the row together with its options, preferences and
//!   characteristics, whether or not it was soft-deleted first

use pawmatch_db::models::attribute::CreateAttribute;
use pawmatch_db::models::pet_characteristic::UpsertPetCharacteristic;
use pawmatch_db::models::user_preference::UpsertUserPreference;
use pawmatch_db::repositories::{
    AttributeOptionRepo, AttributeRepo, PetCharacteristicRepo, UserPreferenceRepo,
};
use sqlx::PgPool;

fn new_attribute(name: &str) -> CreateAttribute {
    CreateAttribute {
        name: name.to_string(),
        type_value: "string".to_string(),
        unit: None,
        percent: Some(25.0),
    }
}

// ---------------------------------------------------------------------------
// Test: soft_delete hides attribute from reads
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_delete_hides_from_find_by_id(pool: PgPool) {
    let attr = AttributeRepo::create(&pool, &new_attribute("Hidden")).await.unwrap();

    let deleted = AttributeRepo::soft_delete(&pool, attr.id).await.unwrap();
    assert!(deleted, "soft_delete should return true on first call");

    let found = AttributeRepo::find_by_id(&pool, attr.id).await.unwrap();
    assert!(found.is_none(), "find_by_id should return None for soft-deleted attribute");

    let raw = AttributeRepo::find_by_id_include_deleted(&pool, attr.id)
        .await
        .unwrap()
        .expect("row is still physically present");
    assert!(raw.is_deleted);
    assert!(raw.updated_at >= attr.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_delete_hides_from_catalog(pool: PgPool) {
    let attr = AttributeRepo::create(&pool, &new_attribute("Listed")).await.unwrap();

    let before = AttributeRepo::list_active_with_options(&pool).await.unwrap();
    assert!(before.iter().any(|a| a.attribute.id == attr.id));

    AttributeRepo::soft_delete(&pool, attr.id).await.unwrap();

    let after = AttributeRepo::list_active_with_options(&pool).await.unwrap();
    assert!(!after.iter().any(|a| a.attribute.id == attr.id));
}

// ---------------------------------------------------------------------------
// Test: soft delete is not repeatable
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_second_soft_delete_returns_false(pool: PgPool) {
    let attr = AttributeRepo::create(&pool, &new_attribute("Twice")).await.unwrap();

    assert!(AttributeRepo::soft_delete(&pool, attr.id).await.unwrap());
    assert!(
        !AttributeRepo::soft_delete(&pool, attr.id).await.unwrap(),
        "second soft_delete should affect no rows"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_delete_missing_returns_false(pool: PgPool) {
    assert!(!AttributeRepo::soft_delete(&pool, 999_999).await.unwrap());
}

// ---------------------------------------------------------------------------
// Test: restore
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_restore_makes_visible_again(pool: PgPool) {
    let attr = AttributeRepo::create(&pool, &new_attribute("Restore Me")).await.unwrap();
    AttributeRepo::soft_delete(&pool, attr.id).await.unwrap();

    assert!(AttributeRepo::restore(&pool, attr.id).await.unwrap());
    assert!(AttributeRepo::find_by_id(&pool, attr.id).await.unwrap().is_some());
    assert!(
        !AttributeRepo::restore(&pool, attr.id).await.unwrap(),
        "restoring an active attribute is a no-op"
    );
}

// ---------------------------------------------------------------------------
// Test: hard delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_hard_delete_cascades_to_dependents(pool: PgPool) {
    let attr = AttributeRepo::create(&pool, &new_attribute("Purge")).await.unwrap();
    let option = AttributeOptionRepo::create(&pool, attr.id, "Any").await.unwrap();
    UserPreferenceRepo::upsert(
        &pool,
        1,
        attr.id,
        &UpsertUserPreference {
            option_id: Some(option.id),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    PetCharacteristicRepo::upsert(
        &pool,
        7,
        attr.id,
        &UpsertPetCharacteristic {
            option_id: Some(option.id),
            value: None,
        },
    )
    .await
    .unwrap();

    assert!(AttributeRepo::hard_delete(&pool, attr.id).await.unwrap());

    assert!(AttributeRepo::find_by_id_include_deleted(&pool, attr.id)
        .await
        .unwrap()
        .is_none());
    assert!(AttributeOptionRepo::find_by_id_include_deleted(&pool, option.id)
        .await
        .unwrap()
        .is_none());
    assert!(!UserPreferenceRepo::exists(&pool, 1, attr.id).await.unwrap());
    assert!(!PetCharacteristicRepo::exists(&pool, 7, attr.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_hard_delete_works_on_soft_deleted_rows(pool: PgPool) {
    let attr = AttributeRepo::create(&pool, &new_attribute("Soft Then Hard")).await.unwrap();
    AttributeRepo::soft_delete(&pool, attr.id).await.unwrap();

    assert!(AttributeRepo::hard_delete(&pool, attr.id).await.unwrap());
    assert!(
        !AttributeRepo::hard_delete(&pool, attr.id).await.unwrap(),
        "second hard delete finds nothing"
    );
}
