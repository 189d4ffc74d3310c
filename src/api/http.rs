//! HTTP Survey Client
//!
//! `reqwest` implementation of [`SurveyApi`]. On wasm32 reqwest issues
//! browser `fetch` calls.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{ApiError, ApiResult, SurveyApi};
use crate::models::{ApproveRequest, HealthStatus, NewSurvey, Survey};

/// Survey API over HTTP. Cheap to clone.
#[derive(Debug, Clone)]
pub struct HttpSurveyApi {
    client: Client,
    base_url: Arc<str>,
}

impl HttpSurveyApi {
    /// `base_url` is the backend origin without a trailing slash, e.g. `http://localhost:8000`.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: Arc::from(base_url.trim_end_matches('/')),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send the request and turn non-2xx into `ApiError::Status`.
    async fn dispatch(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_response(status.as_u16(), &body))
    }

    async fn fetch_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = self.dispatch(request).await?;
        response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl SurveyApi for HttpSurveyApi {
    async fn create_survey(&self, data: &NewSurvey) -> ApiResult<Survey> {
        debug!("POST /surveys/");
        self.fetch_json(self.client.post(self.url("/surveys/")).json(data)).await
    }

    async fn get_surveys(&self) -> ApiResult<Vec<Survey>> {
        debug!("GET /surveys/");
        self.fetch_json(self.client.get(self.url("/surveys/"))).await
    }

    async fn get_survey_by_id(&self, id: u32) -> ApiResult<Survey> {
        debug!(id, "GET /surveys/{{id}}/");
        self.fetch_json(self.client.get(self.url(&format!("/surveys/{id}/")))).await
    }

    async fn approve_survey(&self, id: u32, recipient_email: &str) -> ApiResult<Survey> {
        debug!(id, "POST /surveys/{{id}}/approve");
        let body = ApproveRequest { recipient_email };
        self.fetch_json(self.client.post(self.url(&format!("/surveys/{id}/approve"))).json(&body))
            .await
    }

    async fn delete_survey(&self, id: u32) -> ApiResult<()> {
        debug!(id, "DELETE /surveys/{{id}}/");
        self.dispatch(self.client.delete(self.url(&format!("/surveys/{id}/")))).await?;
        Ok(())
    }

    async fn health(&self) -> ApiResult<HealthStatus> {
        self.fetch_json(self.client.get(self.url("/health"))).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::{Path, State};
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};

    use super::*;
    use crate::models::SurveyStatus;

    /// Requests seen by the fake backend: (method + path, content-type, body)
    type Seen = Arc<Mutex<Vec<(String, Option<String>, Value)>>>;

    fn record(seen: &Seen, route: &str, headers: &HeaderMap, body: Value) {
        let content_type = headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        seen.lock().unwrap().push((route.to_string(), content_type, body));
    }

    fn draft(id: u32, title: Option<&str>) -> Value {
        json!({
            "id": id,
            "title": title,
            "google_form_id": format!("form-{id}"),
            "form_url": format!("https://forms.example/{id}"),
            "status": "draft",
            "questions_text": "Q1\nQ2",
            "recipient_email": null,
            "created_at": "2024-05-01T09:30:00",
            "updated_at": "2024-05-01T09:30:00"
        })
    }

    async fn create(State(seen): State<Seen>, headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        record(&seen, "POST /surveys/", &headers, body.clone());
        let mut created = draft(10, body["title"].as_str());
        created["questions_text"] = body["questions_text"].clone();
        (StatusCode::CREATED, Json(created))
    }

    async fn list(State(seen): State<Seen>, headers: HeaderMap) -> Json<Value> {
        record(&seen, "GET /surveys/", &headers, Value::Null);
        Json(json!([draft(1, Some("first")), draft(3, None)]))
    }

    async fn read(State(seen): State<Seen>, headers: HeaderMap, Path(id): Path<u32>) -> (StatusCode, Json<Value>) {
        record(&seen, &format!("GET /surveys/{id}/"), &headers, Value::Null);
        if id == 99 {
            return (StatusCode::NOT_FOUND, Json(json!({ "detail": "Survey not found" })));
        }
        (StatusCode::OK, Json(draft(id, Some("read"))))
    }

    async fn approve(
        State(seen): State<Seen>,
        headers: HeaderMap,
        Path(id): Path<u32>,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        record(&seen, &format!("POST /surveys/{id}/approve"), &headers, body.clone());
        if id == 7 {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "detail": "Survey cannot be approved. Current status: approved" })),
            );
        }
        let mut approved = draft(id, None);
        approved["status"] = json!("approved");
        approved["recipient_email"] = body["recipient_email"].clone();
        (StatusCode::OK, Json(approved))
    }

    async fn remove(State(seen): State<Seen>, headers: HeaderMap, Path(id): Path<u32>) -> StatusCode {
        record(&seen, &format!("DELETE /surveys/{id}/"), &headers, Value::Null);
        StatusCode::NO_CONTENT
    }

    async fn health() -> Json<Value> {
        Json(json!({ "status": "healthy" }))
    }

    async fn spawn_backend() -> (HttpSurveyApi, Seen) {
        let seen: Seen = Arc::default();
        let app = Router::new()
            .route("/surveys/", post(create).get(list))
            .route("/surveys/{id}/", get(read).delete(remove))
            .route("/surveys/{id}/approve", post(approve))
            .route("/health", get(health))
            .with_state(seen.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // trailing slash on the configured URL must not double up
        (HttpSurveyApi::new(&format!("http://{addr}/")), seen)
    }

    #[tokio::test]
    async fn test_create_posts_questions_and_omits_blank_title() {
        let (api, seen) = spawn_backend().await;
        let data = NewSurvey::from_form("Q1\nQ2", "").unwrap();

        let survey = api.create_survey(&data).await.unwrap();
        assert_eq!(survey.id, 10);
        assert_eq!(survey.status, SurveyStatus::Draft);
        assert_eq!(survey.title, None);
        assert_eq!(survey.questions_text, "Q1\nQ2");

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "POST /surveys/");
        assert_eq!(seen[0].1.as_deref(), Some("application/json"));
        assert_eq!(seen[0].2, json!({ "questions_text": "Q1\nQ2" }));
    }

    #[tokio::test]
    async fn test_list_and_read() {
        let (api, seen) = spawn_backend().await;

        let all = api.get_surveys().await.unwrap();
        assert_eq!(all.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 3]);

        let one = api.get_survey_by_id(3).await.unwrap();
        assert_eq!(one.id, 3);
        assert_eq!(one.form_url.as_deref(), Some("https://forms.example/3"));

        let routes: Vec<String> = seen.lock().unwrap().iter().map(|r| r.0.clone()).collect();
        assert_eq!(routes, vec!["GET /surveys/", "GET /surveys/3/"]);
    }

    #[tokio::test]
    async fn test_not_found_carries_detail() {
        let (api, _seen) = spawn_backend().await;
        let err = api.get_survey_by_id(99).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Status { status: 404, detail: Some("Survey not found".into()) }
        );
    }

    #[tokio::test]
    async fn test_approve_sends_recipient() {
        let (api, seen) = spawn_backend().await;

        let survey = api.approve_survey(10, "a@b.com").await.unwrap();
        assert_eq!(survey.status, SurveyStatus::Approved);
        assert_eq!(survey.recipient_email.as_deref(), Some("a@b.com"));

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].0, "POST /surveys/10/approve");
        assert_eq!(seen[0].2, json!({ "recipient_email": "a@b.com" }));
    }

    #[tokio::test]
    async fn test_approve_rejection_is_passed_through() {
        let (api, _seen) = spawn_backend().await;
        let err = api.approve_survey(7, "a@b.com").await.unwrap_err();
        assert_eq!(err.detail(), Some("Survey cannot be approved. Current status: approved"));
    }

    #[tokio::test]
    async fn test_delete_ignores_empty_body() {
        let (api, seen) = spawn_backend().await;
        api.delete_survey(3).await.unwrap();
        assert_eq!(seen.lock().unwrap()[0].0, "DELETE /surveys/3/");
    }

    #[tokio::test]
    async fn test_health() {
        let (api, _seen) = spawn_backend().await;
        assert!(api.health().await.unwrap().is_healthy());
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        // bind then drop to get a port nobody listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = HttpSurveyApi::new(&format!("http://{addr}"));
        let err = api.get_surveys().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)), "{err:?}");
    }
}
