use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use person_api::{create_router, ApiState};
use person_core::{
    CsvPersonDataProvider, Error, Person, PersonDataProvider, PersonService, ProviderType,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn csv_app() -> Router {
    let provider: Arc<dyn PersonDataProvider> = Arc::new(CsvPersonDataProvider::bundled());
    create_router(ApiState::new(PersonService::with_provider(provider)))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(csv_app(), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "person-api");
}

#[tokio::test]
async fn test_list_persons() {
    let (status, body) = send(csv_app(), get("/persons")).await;

    assert_eq!(status, StatusCode::OK);
    let persons = body.as_array().unwrap();
    assert_eq!(persons.len(), 10);
    assert_eq!(persons[0]["id"], 1);
    assert_eq!(persons[0]["firstname"], "Hans");
    assert_eq!(persons[0]["lastname"], "Müller");
    assert_eq!(persons[1]["id"], 2);
    assert_eq!(persons[1]["firstname"], "Peter");
}

#[tokio::test]
async fn test_get_person() {
    let (status, body) = send(csv_app(), get("/persons/1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["firstname"], "Hans");
    assert_eq!(body["lastname"], "Müller");
    assert_eq!(body["zipcode"], "67742");
    assert_eq!(body["city"], "Lauterecken");
    assert_eq!(body["color"], "blau");
}

#[tokio::test]
async fn test_get_person_not_found() {
    let (status, body) = send(csv_app(), get("/persons/999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Could not find person 999");
}

#[tokio::test]
async fn test_get_person_invalid_id() {
    let (status, _) = send(csv_app(), get("/persons/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_persons_by_color() {
    let (status, body) = send(csv_app(), get("/persons/color/blau")).await;

    assert_eq!(status, StatusCode::OK);
    let persons = body.as_array().unwrap();
    assert_eq!(persons.len(), 2);
    assert!(persons.iter().all(|p| p["color"] == "blau"));
    assert_eq!(persons[0]["firstname"], "Hans");
}

#[tokio::test]
async fn test_list_persons_by_encoded_color() {
    let (status, body) = send(csv_app(), get("/persons/color/gr%C3%BCn")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_list_persons_by_color_no_match() {
    let (status, body) = send(csv_app(), get("/persons/color/schwarz")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_person() {
    let app = csv_app();
    let request = Request::builder()
        .method("POST")
        .uri("/persons")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            r#"{"firstname":"Alice","lastname":"Johnson","zipcode":"11111","city":"Hamburg","color":"gelb"}"#,
        ))
        .unwrap();

    let (status, body) = send(app.clone(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 11);
    assert_eq!(body["firstname"], "Alice");
    assert_eq!(body["lastname"], "Johnson");
    assert_eq!(body["zipcode"], "11111");
    assert_eq!(body["city"], "Hamburg");
    assert_eq!(body["color"], "gelb");

    let (status, body) = send(app, get("/persons/11")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["firstname"], "Alice");
}

/// Provider whose backing store is always unreachable
struct UnavailableProvider;

#[async_trait]
impl PersonDataProvider for UnavailableProvider {
    fn provider_type(&self) -> ProviderType {
        ProviderType::Db
    }

    async fn all(&self) -> person_core::Result<Vec<Person>> {
        Err(Error::Storage("connection refused".to_string()))
    }

    async fn save(&self, _person: Person) -> person_core::Result<Person> {
        Err(Error::Storage("connection refused".to_string()))
    }

    async fn find_by_id(&self, _id: i64) -> person_core::Result<Person> {
        Err(Error::Storage("connection refused".to_string()))
    }

    async fn find_by_color(&self, _color: &str) -> person_core::Result<Vec<Person>> {
        Err(Error::Storage("connection refused".to_string()))
    }
}

#[tokio::test]
async fn test_storage_error_is_internal_error() {
    let provider: Arc<dyn PersonDataProvider> = Arc::new(UnavailableProvider);
    let app = create_router(ApiState::new(PersonService::with_provider(provider)));

    let (status, body) = send(app, get("/persons/1")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Storage error: connection refused");
}

#[tokio::test]
async fn test_build_service_with_csv_settings() {
    let settings = person_api::Settings::default();
    let service = person_api::build_service(&settings).await.unwrap();

    assert_eq!(service.provider_type(), ProviderType::Csv);
    assert_eq!(service.all().await.unwrap().len(), 10);
}

#[tokio::test]
async fn test_build_service_without_database_fails_for_db() {
    let settings = person_api::Settings {
        provider: ProviderType::Db,
        ..Default::default()
    };

    let err = person_api::build_service(&settings).await.err().unwrap();
    assert_eq!(err.to_string(), "No provider found for type: db");
}
