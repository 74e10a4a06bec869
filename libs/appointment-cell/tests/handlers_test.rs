use std::sync::Arc;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;
use wiremock::{MockServer, Mock, ResponseTemplate};
use wiremock::matchers::{method, path, query_param};

use appointment_cell::handlers::*;
use appointment_cell::models::BookAppointmentRequest;
use shared_config::AppConfig;
use shared_models::error::AppError;
use shared_utils::test_utils::{TestConfig, MockPostgrestResponses};

const CONFLICT_MESSAGE: &str = "Dentist is not available at this time.";

fn test_state(mock_server: &MockServer) -> Arc<AppConfig> {
    TestConfig::with_base_url(&mock_server.uri()).to_arc()
}

fn booking_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 10, 0, 0).unwrap()
}

fn booking_request(dentist_id: Option<i64>, patient_id: Option<i64>) -> BookAppointmentRequest {
    BookAppointmentRequest {
        appointment_date: booking_time(),
        dentist_id,
        patient_id,
        notes: None,
    }
}

/// Mounts the conflict-check query for dentist 1 at the fixed booking time.
async fn mount_conflict_check(mock_server: &MockServer, existing: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/rest/v1/appointments"))
        .and(query_param("dentist_id", "eq.1"))
        .and(query_param("appointment_date", format!("eq.{}", booking_time().to_rfc3339())))
        .respond_with(ResponseTemplate::new(200).set_body_json(existing))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn booking_a_free_slot_creates_the_appointment() {
    let mock_server = MockServer::start().await;

    mount_conflict_check(&mock_server, json!([])).await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/appointments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            MockPostgrestResponses::appointment_response(
                11, Some(1), Some(1), &booking_time().to_rfc3339(),
            ),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = book_appointment(
        State(test_state(&mock_server)),
        Json(booking_request(Some(1), Some(1))),
    ).await;

    let (status, body) = result.expect("booking a free slot should succeed");
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.0["id"], 11);
    assert_eq!(body.0["dentist_id"], 1);
}

#[tokio::test]
async fn booking_a_taken_slot_is_rejected_without_insert() {
    let mock_server = MockServer::start().await;

    mount_conflict_check(&mock_server, json!([{ "id": 4 }])).await;

    // The availability check must refuse before any mutation happens.
    Mock::given(method("POST"))
        .and(path("/rest/v1/appointments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = book_appointment(
        State(test_state(&mock_server)),
        Json(booking_request(Some(1), Some(2))),
    ).await;

    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, CONFLICT_MESSAGE),
        Err(other) => panic!("expected a bad-request rejection, got {:?}", other),
        Ok(_) => panic!("conflicting booking must not succeed"),
    }
}

#[tokio::test]
async fn booking_without_a_dentist_skips_the_conflict_check() {
    let mock_server = MockServer::start().await;

    // No dentist reference means no conflict query at all.
    Mock::given(method("GET"))
        .and(path("/rest/v1/appointments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/appointments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            MockPostgrestResponses::appointment_response(
                12, None, Some(1), &booking_time().to_rfc3339(),
            ),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = book_appointment(
        State(test_state(&mock_server)),
        Json(booking_request(None, Some(1))),
    ).await;

    let (status, body) = result.expect("a dentist-less booking never conflicts");
    assert_eq!(status, StatusCode::CREATED);
    assert!(body.0["dentist_id"].is_null());
}

#[tokio::test]
async fn listing_appointments_resolves_dentist_and_patient() {
    let mock_server = MockServer::start().await;

    let dentist = MockPostgrestResponses::dentist_response(1, "Dr. John Doe", None);
    let patient = MockPostgrestResponses::patient_response(1, "Patient A", None);

    Mock::given(method("GET"))
        .and(path("/rest/v1/appointments"))
        .and(query_param("select", "*,dentist:dentists(*),patient:patients(*)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockPostgrestResponses::appointment_with_relations_response(
                11, Some(dentist), Some(patient), &booking_time().to_rfc3339(),
            ),
        ])))
        .mount(&mock_server)
        .await;

    let result = list_appointments(State(test_state(&mock_server))).await;

    let body = result.expect("listing should succeed").0;
    let appointments = body.as_array().expect("response should be an array");
    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0]["dentist"]["name"], "Dr. John Doe");
    assert_eq!(appointments[0]["patient"]["name"], "Patient A");
}

#[tokio::test]
async fn storage_failure_during_booking_maps_to_database_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/appointments"))
        .respond_with(ResponseTemplate::new(500).set_body_string("connection refused"))
        .mount(&mock_server)
        .await;

    let result = book_appointment(
        State(test_state(&mock_server)),
        Json(booking_request(Some(1), Some(1))),
    ).await;

    assert!(matches!(result, Err(AppError::Database(_))));
}
