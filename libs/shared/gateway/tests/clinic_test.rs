use std::time::{Duration, Instant};

use assert_matches::assert_matches;
use chrono::NaiveDate;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shared_config::AppConfig;
use shared_gateway::{ClinicApi, ClinicApiClient};
use shared_models::{AppError, AppointmentStatus, FilterCriteria};

fn client_for(base_url: &str) -> ClinicApiClient {
    ClinicApiClient::new(&AppConfig {
        clinic_api_url: base_url.to_string(),
        clinic_api_key: "test-api-key".to_string(),
        request_timeout_secs: 5,
    })
}

#[tokio::test]
async fn sends_api_key_and_parses_doctor_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/doctors"))
        .and(header("x-api-key", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": Uuid::new_v4(),
                "first_name": "Asha",
                "last_name": "Rao",
                "specialty": null,
                "is_available": false
            }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let doctors = client_for(&mock_server.uri()).list_doctors().await.unwrap();
    assert_eq!(doctors.len(), 1);
    assert!(!doctors[0].is_available);
}

#[tokio::test]
async fn maps_not_found_and_bad_request_statuses() {
    let mock_server = MockServer::start().await;
    let missing = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/v1/appointments/{}", missing)))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such appointment"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    assert_matches!(
        client.get_appointment(missing).await,
        Err(AppError::NotFound(_))
    );

    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad status"))
        .mount(&mock_server)
        .await;

    assert_matches!(
        client
            .update_appointment_status(missing, AppointmentStatus::Confirmed)
            .await,
        Err(AppError::Validation(_))
    );
}

#[tokio::test]
async fn slow_collaborator_fails_fast_as_network_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/doctors"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let client = ClinicApiClient::new(&AppConfig {
        clinic_api_url: mock_server.uri(),
        clinic_api_key: "test-api-key".to_string(),
        request_timeout_secs: 1,
    });

    let started = Instant::now();
    let result = client.list_doctors().await;

    assert_matches!(result, Err(AppError::Network(_)));
    // Cut off by the configured timeout, not by the mock's full delay
    assert!(started.elapsed() < Duration::from_secs(4));
}

#[tokio::test]
async fn unreachable_collaborator_is_a_network_error() {
    // Nothing listens on this port
    let client = client_for("http://127.0.0.1:1");

    assert_matches!(
        client.list_doctors().await,
        Err(AppError::Network(_))
    );
}

#[tokio::test]
async fn list_appointments_serializes_criteria_as_query_params() {
    let mock_server = MockServer::start().await;
    let doctor_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/v1/appointments"))
        .and(query_param("status", "no-show"))
        .and(query_param("doctor_id", doctor_id.to_string()))
        .and(query_param("date_from", "2026-03-01"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [],
            "pagination": { "total": 0, "total_pages": 0, "current_page": 2 }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let criteria = FilterCriteria {
        status: Some(AppointmentStatus::NoShow),
        doctor_id: Some(doctor_id),
        date_from: NaiveDate::from_ymd_opt(2026, 3, 1),
        page: Some(2),
        ..Default::default()
    };

    let page = client_for(&mock_server.uri())
        .list_appointments(criteria)
        .await
        .unwrap();
    assert_eq!(page.pagination.current_page, 2);
}
