//! Integration tests for the REST API feature.

#![cfg(feature = "api")]

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::util::ServiceExt;

use energy_calc::api::router;

async fn send(req: Request<Body>) -> (StatusCode, serde_json::Value) {
    let resp = router().oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn post_estimate(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/estimate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn full_household_estimate() {
    let (status, json) = send(post_estimate(serde_json::json!({
        "name": "Arjun Mehta",
        "age": 52,
        "city": "Ahmedabad",
        "area": "Navrangpura",
        "housing_unit": "Tenement",
        "facility_type": "3BHK",
        "has_air_conditioner": true,
        "has_refrigerator": true,
        "has_washing_machine": true
    })))
    .await;

    assert_eq!(status, StatusCode::OK);

    let report = &json["report"];
    assert!((report["base_energy_kwh_per_day"].as_f64().unwrap() - 4.8).abs() < 1e-9);
    assert!((report["appliance_energy_kwh_per_day"].as_f64().unwrap() - 9.0).abs() < 1e-9);
    assert!((report["total_energy_kwh_per_day"].as_f64().unwrap() - 13.8).abs() < 1e-9);
    assert!((report["daily_cost"].as_f64().unwrap() - 69.0).abs() < 1e-9);
    assert!((report["monthly_cost"].as_f64().unwrap() - 2070.0).abs() < 1e-9);
    assert_eq!(
        report["active_appliances"],
        serde_json::json!(["AC", "Refrigerator", "Washing Machine"])
    );

    // Percentages cover the whole total
    let base_pct = json["breakdown"]["base_pct"].as_f64().unwrap();
    let appliance_pct = json["breakdown"]["appliance_pct"].as_f64().unwrap();
    assert!((base_pct + appliance_pct - 100.0).abs() < 1e-9);

    assert_eq!(json["profile"]["housing_unit"], "Tenement");
    assert_eq!(json["profile"]["identity"]["name"], "Arjun Mehta");
}

#[tokio::test]
async fn unknown_housing_unit_is_bad_request() {
    let (status, json) = send(post_estimate(serde_json::json!({
        "name": "Asha",
        "city": "Mumbai",
        "area": "Bandra West",
        "housing_unit": "Bungalow"
    })))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "InvalidHousingUnit");
    assert!(json.get("missing").is_none());
}

#[tokio::test]
async fn invalid_facility_wins_over_blank_fields() {
    let (status, json) = send(post_estimate(serde_json::json!({
        "facility_type": "4BHK"
    })))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "InvalidFacilityType");
}

#[tokio::test]
async fn whitespace_only_name_is_incomplete() {
    let (status, json) = send(post_estimate(serde_json::json!({
        "name": "   ",
        "city": "Mumbai",
        "area": "Bandra West"
    })))
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["missing"], serde_json::json!(["name"]));
}

#[tokio::test]
async fn age_outside_accepted_range_is_rejected() {
    for age in [0, 121] {
        let (status, json) = send(post_estimate(serde_json::json!({
            "name": "Asha",
            "age": age,
            "city": "Mumbai",
            "area": "Bandra West",
            "facility_type": "1BHK"
        })))
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "age={age}");
        assert_eq!(json["error"], "AgeOutOfRange", "age={age}");
        assert!(json.get("report").is_none());
    }
}

#[tokio::test]
async fn boundary_ages_are_accepted() {
    for age in [1, 120] {
        let (status, json) = send(post_estimate(serde_json::json!({
            "name": "Asha",
            "age": age,
            "city": "Mumbai",
            "area": "Bandra West"
        })))
        .await;

        assert_eq!(status, StatusCode::OK, "age={age}");
        assert_eq!(json["profile"]["identity"]["age"], age);
    }
}

#[tokio::test]
async fn unknown_request_field_is_rejected() {
    let (status, _) = send(post_estimate(serde_json::json!({
        "name": "Asha",
        "city": "Mumbai",
        "area": "Bandra West",
        "has_dishwasher": true
    })))
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn appliances_endpoint_lists_comparison() {
    let (status, json) = send(get("/appliances")).await;

    assert_eq!(status, StatusCode::OK);
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["appliance"], "AC");
    assert!((rows[0]["energy_kwh_per_day"].as_f64().unwrap() - 12.0).abs() < 1e-9);
}

#[tokio::test]
async fn about_endpoint_carries_emission_factor() {
    let (status, json) = send(get("/about")).await;

    assert_eq!(status, StatusCode::OK);
    assert!((json["co2_kg_per_kwh"].as_f64().unwrap() - 0.82).abs() < 1e-9);
    assert_eq!(json["sections"].as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, _) = send(get("/history")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
