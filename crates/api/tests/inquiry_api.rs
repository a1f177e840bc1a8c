//! HTTP-level integration tests for inquiry submission, the moderation
//! filter, and triage status transitions.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, patch_json, post_json};
use sqlx::PgPool;

fn inquiry_body(name: &str, email: &str, subject: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "email": email,
        "subject": subject,
        "message": "Please send more information.",
    })
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn submit_inquiry_starts_pending(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/inquiries",
        inquiry_body("Jane Doe", "jane@example.com", "Opening hours"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "pending");
    assert_eq!(json["data"]["email"], "jane@example.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn submit_inquiry_with_invalid_email_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/inquiries",
        inquiry_body("Jane Doe", "not-an-email", "Opening hours"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn submit_inquiry_with_both_targets_returns_400(pool: PgPool) {
    let mut body = inquiry_body("Jane Doe", "jane@example.com", "Which one?");
    body["franchise_id"] = serde_json::json!(1);
    body["business_id"] = serde_json::json!(2);

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/inquiries", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn submit_inquiry_for_missing_franchise_returns_404(pool: PgPool) {
    let mut body = inquiry_body("Jane Doe", "jane@example.com", "Dangling");
    body["franchise_id"] = serde_json::json!(999999);

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/inquiries", body).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Moderation list and filters
// ---------------------------------------------------------------------------

/// Seed one franchise-attached, one business-attached, and one general
/// inquiry. Returns nothing; the tests read back through the API.
async fn seed_inquiries(pool: &PgPool) {
    let app = common::build_test_app(pool.clone());
    let franchise = body_json(
        post_json(
            app,
            "/api/v1/franchises",
            serde_json::json!({"name": "Acme Franchise"}),
        )
        .await,
    )
    .await;
    let franchise_id = franchise["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let business = body_json(
        post_json(
            app,
            "/api/v1/businesses",
            serde_json::json!({"name": "Corner Bakery"}),
        )
        .await,
    )
    .await;
    let business_id = business["data"]["id"].as_i64().unwrap();

    let mut body = inquiry_body("Acme Corp", "a@b.com", "Pricing");
    body["franchise_id"] = serde_json::json!(franchise_id);
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/inquiries", body).await;

    let mut body = inquiry_body("Bob Buyer", "bob@buyers.net", "Valuation");
    body["business_id"] = serde_json::json!(business_id);
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/inquiries", body).await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/inquiries",
        inquiry_body("Carol Curious", "carol@mail.org", "General question"),
    )
    .await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_inquiries_returns_full_list(pool: PgPool) {
    seed_inquiries(&pool).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/inquiries").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn type_filter_partitions_inquiries_exactly(pool: PgPool) {
    seed_inquiries(&pool).await;

    for (kind, expected_name) in [
        ("franchise", "Acme Corp"),
        ("business", "Bob Buyer"),
        ("general", "Carol Curious"),
    ] {
        let app = common::build_test_app(pool.clone());
        let json = body_json(get(app, &format!("/api/v1/inquiries?type={kind}")).await).await;
        let items = json["data"].as_array().unwrap();
        assert_eq!(items.len(), 1, "type={kind} must match exactly one");
        assert_eq!(items[0]["name"], expected_name);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_filter_is_case_insensitive(pool: PgPool) {
    seed_inquiries(&pool).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/inquiries?search=ACME").await).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Acme Corp");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/inquiries?search=zzz").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_matches_email_and_subject_fields(pool: PgPool) {
    seed_inquiries(&pool).await;

    // Email match.
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/inquiries?search=buyers.net").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    // Subject match.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/inquiries?search=pricing").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn status_filter_and_all_value(pool: PgPool) {
    seed_inquiries(&pool).await;

    // Move one inquiry to replied.
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/inquiries?search=acme").await).await;
    let id = json["data"][0]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    patch_json(
        app,
        &format!("/api/v1/inquiries/{id}/status"),
        serde_json::json!({"status": "replied"}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/inquiries?status=replied").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/inquiries?status=pending").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    // "all" disables the dimension.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/inquiries?status=all&type=all").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn filters_combine_as_conjunction(pool: PgPool) {
    seed_inquiries(&pool).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/inquiries?search=acme&type=franchise").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/inquiries?search=acme&type=business").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_filter_values_return_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/inquiries?status=bogus").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/inquiries?type=bogus").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Triage transitions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_inquiry_status_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/inquiries",
            inquiry_body("Jane Doe", "jane@example.com", "Hello"),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let json = body_json(
        patch_json(
            app,
            &format!("/api/v1/inquiries/{id}/status"),
            serde_json::json!({"status": "closed"}),
        )
        .await,
    )
    .await;
    assert_eq!(json["data"]["status"], "closed");

    // Re-opening a closed inquiry is allowed.
    let app = common::build_test_app(pool);
    let json = body_json(
        patch_json(
            app,
            &format!("/api/v1/inquiries/{id}/status"),
            serde_json::json!({"status": "pending"}),
        )
        .await,
    )
    .await;
    assert_eq!(json["data"]["status"], "pending");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_inquiry_status_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/inquiries",
            inquiry_body("Jane Doe", "jane@example.com", "Hello"),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/api/v1/inquiries/{id}/status"),
        serde_json::json!({"status": "archived"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn inquiry_status_patch_on_nonexistent_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        "/api/v1/inquiries/999999/status",
        serde_json::json!({"status": "closed"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
