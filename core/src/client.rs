//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each CRUD operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`;
//! the round-trip between the two belongs to a [`Transport`](crate::Transport)
//! owned by the caller, keeping this module deterministic and free of I/O.
//!
//! Create and update bodies are wrapped in the `{ "todo": { ... } }`
//! envelope the API requires.

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Todo, TodoEnvelope, TodoInput};

/// Builds requests and parses responses for the todo API without touching
/// the network.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/todos", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/todos/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create(&self, input: &TodoInput) -> Result<HttpRequest, TransportError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/todos", self.base_url),
            headers: json_headers(),
            body: Some(envelope_body(input)?),
        })
    }

    pub fn build_update(&self, id: u64, input: &TodoInput) -> Result<HttpRequest, TransportError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: format!("{}/todos/{id}", self.base_url),
            headers: json_headers(),
            body: Some(envelope_body(input)?),
        })
    }

    pub fn build_delete(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/todos/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Todo>, TransportError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_get(&self, response: HttpResponse) -> Result<Todo, TransportError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<Todo, TransportError> {
        check_status(&response, 201)?;
        decode(&response.body)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<Todo, TransportError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), TransportError> {
        check_status(&response, 204)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn envelope_body(input: &TodoInput) -> Result<String, TransportError> {
    let envelope = TodoEnvelope {
        todo: input.clone(),
    };
    serde_json::to_string(&envelope).map_err(|e| TransportError::Serialization(e.to_string()))
}

fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, TransportError> {
    serde_json::from_str(body).map_err(|e| TransportError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `TransportError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), TransportError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(TransportError::NotFound);
    }
    Err(TransportError::UnexpectedStatus {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:3000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_produces_correct_request() {
        let req = client().build_list();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/todos");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_addresses_id_in_path() {
        let req = client().build_get(12);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/todos/12");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_wraps_body_in_envelope() {
        let req = client().build_create(&TodoInput::new("Buy milk")).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3000/todos");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["todo"]["title"], "Buy milk");
        assert!(body.get("title").is_none());
    }

    #[test]
    fn build_update_wraps_body_in_envelope() {
        let req = client()
            .build_update(3, &TodoInput::new("Updated"))
            .unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, "http://localhost:3000/todos/3");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["todo"]["title"], "Updated");
    }

    #[test]
    fn build_delete_produces_correct_request() {
        let req = client().build_delete(9);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "http://localhost:3000/todos/9");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_success() {
        let todos = client()
            .parse_list(response(200, r#"[{"id":1,"title":"Test"}]"#))
            .unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, 1);
        assert_eq!(todos[0].title, "Test");
    }

    #[test]
    fn parse_get_not_found() {
        let err = client().parse_get(response(404, "")).unwrap_err();
        assert!(matches!(err, TransportError::NotFound));
    }

    #[test]
    fn parse_create_success() {
        let todo = client()
            .parse_create(response(201, r#"{"id":2,"title":"New"}"#))
            .unwrap();
        assert_eq!(todo.id, 2);
        assert_eq!(todo.title, "New");
    }

    #[test]
    fn parse_create_wrong_status() {
        let err = client()
            .parse_create(response(500, "internal error"))
            .unwrap_err();
        assert!(matches!(
            err,
            TransportError::UnexpectedStatus { status: 500, .. }
        ));
    }

    #[test]
    fn parse_update_success() {
        let todo = client()
            .parse_update(response(200, r#"{"id":2,"title":"Updated"}"#))
            .unwrap();
        assert_eq!(todo.title, "Updated");
    }

    #[test]
    fn parse_delete_success() {
        assert!(client().parse_delete(response(204, "")).is_ok());
    }

    #[test]
    fn parse_delete_not_found() {
        let err = client().parse_delete(response(404, "")).unwrap_err();
        assert!(matches!(err, TransportError::NotFound));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:3000/");
        let req = client.build_list();
        assert_eq!(req.url, "http://localhost:3000/todos");
    }

    #[test]
    fn parse_list_bad_json() {
        let err = client().parse_list(response(200, "not json")).unwrap_err();
        assert!(matches!(err, TransportError::Deserialization(_)));
    }
}
