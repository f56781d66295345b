//! HTTP-level integration tests for `GET /api/v1/filter-suggestion`.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_attribute, create_option, delete, get};
use sqlx::PgPool;

const URI: &str = "/api/v1/filter-suggestion";

async fn fetch_suggestion(pool: &PgPool) -> serde_json::Value {
    let response = get(build_test_app(pool.clone()), URI).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

fn top_names(json: &serde_json::Value) -> Vec<String> {
    json["suggestion"]["top_attributes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap().to_string())
        .collect()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_top_three_of_weighted_catalog(pool: PgPool) {
    create_attribute(&pool, "Color", "string", 40.0).await;
    create_attribute(&pool, "Size", "float", 35.0).await;
    create_attribute(&pool, "Age", "float", 10.0).await;
    create_attribute(&pool, "Weight", "float", 0.0).await;

    let json = fetch_suggestion(&pool).await;

    assert_eq!(json["data"].as_array().unwrap().len(), 4);
    assert_eq!(top_names(&json), ["Color", "Size", "Age"]);
    assert_eq!(json["suggestion"]["total_percent"], 85.0);
    assert!(json["suggestion"]["message"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_catalog(pool: PgPool) {
    let json = fetch_suggestion(&pool).await;

    assert_eq!(json["data"], serde_json::json!([]));
    assert_eq!(json["suggestion"]["top_attributes"], serde_json::json!([]));
    assert_eq!(json["suggestion"]["total_percent"], 0.0);
    assert!(json["suggestion"]["message"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_zero_weights(pool: PgPool) {
    for name in ["A", "B", "C", "D"] {
        create_attribute(&pool, name, "string", 0.0).await;
    }

    let json = fetch_suggestion(&pool).await;

    assert_eq!(json["data"].as_array().unwrap().len(), 4);
    assert!(top_names(&json).is_empty());
    assert_eq!(json["suggestion"]["total_percent"], 0.0);
    assert!(json["suggestion"]["message"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_single_weighted_attribute(pool: PgPool) {
    create_attribute(&pool, "Color", "string", 100.0).await;
    create_attribute(&pool, "Size", "float", 0.0).await;

    let json = fetch_suggestion(&pool).await;

    assert_eq!(top_names(&json), ["Color"]);
    assert_eq!(json["suggestion"]["total_percent"], 100.0);
    assert_eq!(
        json["suggestion"]["message"],
        "Color is the most impactful filter, carrying 100.0% of the match weight."
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_ties_break_by_id_and_deleted_rows_are_ignored(pool: PgPool) {
    let first = create_attribute(&pool, "First", "float", 20.0).await;
    create_attribute(&pool, "Second", "float", 20.0).await;
    create_attribute(&pool, "Third", "float", 20.0).await;
    create_attribute(&pool, "Fourth", "float", 20.0).await;
    delete(build_test_app(pool.clone()), &format!("/api/v1/attributes/{first}")).await;

    let json = fetch_suggestion(&pool).await;

    assert_eq!(json["data"].as_array().unwrap().len(), 3);
    assert_eq!(top_names(&json), ["Second", "Third", "Fourth"]);
    assert_eq!(json["suggestion"]["total_percent"], 60.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_data_carries_active_options_and_total_is_rounded(pool: PgPool) {
    let color = create_attribute(&pool, "Color", "string", 33.33).await;
    create_attribute(&pool, "Size", "float", 33.33).await;
    create_attribute(&pool, "Age", "float", 33.33).await;
    create_option(&pool, color, "Black").await;

    let json = fetch_suggestion(&pool).await;

    let total = json["suggestion"]["total_percent"].as_f64().unwrap();
    assert_eq!(total, 100.0);
    assert_eq!(total, (total * 10.0).round() / 10.0);

    let data = json["data"].as_array().unwrap();
    assert_eq!(data[0]["options"][0]["name"], "Black");
    assert!(
        json["suggestion"]["top_attributes"][0]["options"].is_null(),
        "top attributes are plain attribute records"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_repeated_calls_are_identical(pool: PgPool) {
    create_attribute(&pool, "Color", "string", 40.0).await;
    create_attribute(&pool, "Size", "float", 35.0).await;

    let first = fetch_suggestion(&pool).await;
    let second = fetch_suggestion(&pool).await;
    assert_eq!(first, second);
}
