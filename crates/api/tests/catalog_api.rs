//! Integration tests for the public catalog reads: titles, profile listing,
//! profile by username and the catalog page.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

#[tokio::test]
async fn titles_are_listed_in_store_order() {
    let seed = common::seed().await;
    let app = common::build_test_app(seed.store);

    let response = get(app, "/api/v1/titles").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Engineer", "Designer"]);
    assert_eq!(json["data"][0]["color"], "#2563eb");
}

#[tokio::test]
async fn profiles_are_enriched_with_their_title() {
    let seed = common::seed().await;
    let app = common::build_test_app(seed.store);

    let json = body_json(get(app, "/api/v1/profiles").await).await;
    let data = json["data"].as_array().unwrap();

    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["first_name"], "Ann");
    assert_eq!(data[0]["title"]["name"], "Engineer");
    assert!(data[0].get("title_id").is_none());
    assert_eq!(data[1]["title"]["name"], "Designer");
}

#[tokio::test]
async fn search_matches_name_case_insensitively() {
    let seed = common::seed().await;
    let app = common::build_test_app(seed.store);

    let json = body_json(get(app, "/api/v1/profiles?q=ann%20lee").await).await;
    let data = json["data"].as_array().unwrap();

    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["username"], "ann");
}

#[tokio::test]
async fn search_matches_email_substring() {
    let seed = common::seed().await;
    let app = common::build_test_app(seed.store);

    let json = body_json(get(app, "/api/v1/profiles?q=Y.COM").await).await;
    let data = json["data"].as_array().unwrap();

    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["first_name"], "Bob");
}

#[tokio::test]
async fn title_filter_restricts_listing() {
    let seed = common::seed().await;
    let uri = format!("/api/v1/profiles?title_id={}", seed.designer.id);
    let app = common::build_test_app(seed.store);

    let json = body_json(get(app, &uri).await).await;
    let data = json["data"].as_array().unwrap();

    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["first_name"], "Bob");
}

#[tokio::test]
async fn unknown_title_id_yields_empty_list() {
    let seed = common::seed().await;
    let app = common::build_test_app(seed.store);

    let response = get(app, "/api/v1/profiles?title_id=999").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"], serde_json::json!([]));
}

#[tokio::test]
async fn blank_query_params_list_everything() {
    let seed = common::seed().await;
    let app = common::build_test_app(seed.store);

    let response = get(app, "/api/v1/profiles?q=&title_id=").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["first_name"], "Ann");
    assert_eq!(data[1]["first_name"], "Bob");
}

#[tokio::test]
async fn malformed_title_id_is_rejected() {
    let seed = common::seed().await;
    let app = common::build_test_app(seed.store);

    let response = get(app, "/api/v1/profiles?title_id=abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn dangling_title_reference_renders_null_title() {
    let seed = common::seed().await;
    seed.store.remove_title(seed.engineer.id).await;
    let app = common::build_test_app(seed.store);

    let json = body_json(get(app, "/api/v1/profiles/ann").await).await;
    assert_eq!(json["data"]["first_name"], "Ann");
    assert!(json["data"]["title"].is_null());
}

#[tokio::test]
async fn profile_lookup_ignores_username_case() {
    let seed = common::seed().await;
    let app = common::build_test_app(seed.store);

    let response = get(app, "/api/v1/profiles/ANN").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["email"], "ann@x.com");
    assert_eq!(json["data"]["title"]["name"], "Engineer");
}

#[tokio::test]
async fn missing_profile_returns_404() {
    let seed = common::seed().await;
    let app = common::build_test_app(seed.store);

    let response = get(app, "/api/v1/profiles/ghost").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn catalog_page_resolves_role_by_name() {
    let seed = common::seed().await;
    let app = common::build_test_app(seed.store);

    let json = body_json(get(app, "/api/v1/catalog?role=designer").await).await;
    let page = &json["data"];

    assert_eq!(page["profiles"].as_array().unwrap().len(), 1);
    assert_eq!(page["profiles"][0]["first_name"], "Bob");
    assert_eq!(page["titles"].as_array().unwrap().len(), 2);
    assert!(page["empty_state"].is_null());
}

#[tokio::test]
async fn catalog_page_unknown_role_applies_no_filter() {
    let seed = common::seed().await;
    let app = common::build_test_app(seed.store);

    let json = body_json(get(app, "/api/v1/catalog?role=Astronaut").await).await;
    assert_eq!(json["data"]["profiles"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn catalog_page_reports_empty_search() {
    let seed = common::seed().await;
    let app = common::build_test_app(seed.store);

    let json = body_json(get(app, "/api/v1/catalog?q=zzz").await).await;
    let page = &json["data"];

    assert_eq!(page["profiles"], serde_json::json!([]));
    assert_eq!(page["empty_state"]["headline"], "No profiles found.");
    assert_eq!(page["empty_state"]["detail"], "No results found for \"zzz\"");
}
