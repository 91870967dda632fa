//! The todo service: domain operations over one HTTP round-trip each.
//!
//! # Design
//! `TodoService` pairs a [`TodoClient`] with a [`Transport`] and exposes the
//! five domain operations. Each call maps 1:1 to one request — no retries,
//! no timeouts, no caching. Failures come back as [`TransportError`] exactly
//! as the lower layers produced them; translation into user-facing text is
//! the state container's job.

use tracing::{debug, warn};

use crate::client::TodoClient;
use crate::error::TransportError;
use crate::http::Transport;
use crate::types::{Todo, TodoInput};

pub struct TodoService<T> {
    client: TodoClient,
    transport: T,
}

impl<T: Transport> TodoService<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: TodoClient::new(base_url),
            transport,
        }
    }

    pub fn get_all(&self) -> Result<Vec<Todo>, TransportError> {
        debug!("listing todos");
        self.transport
            .execute(self.client.build_list())
            .and_then(|response| self.client.parse_list(response))
            .inspect_err(|e| warn!(error = %e, "list todos failed"))
    }

    pub fn get(&self, id: u64) -> Result<Todo, TransportError> {
        debug!(id, "fetching todo");
        self.transport
            .execute(self.client.build_get(id))
            .and_then(|response| self.client.parse_get(response))
            .inspect_err(|e| warn!(id, error = %e, "fetch todo failed"))
    }

    pub fn create(&self, input: &TodoInput) -> Result<Todo, TransportError> {
        debug!(title = %input.title, "creating todo");
        self.client
            .build_create(input)
            .and_then(|request| self.transport.execute(request))
            .and_then(|response| self.client.parse_create(response))
            .inspect_err(|e| warn!(error = %e, "create todo failed"))
    }

    pub fn update(&self, id: u64, input: &TodoInput) -> Result<Todo, TransportError> {
        debug!(id, title = %input.title, "updating todo");
        self.client
            .build_update(id, input)
            .and_then(|request| self.transport.execute(request))
            .and_then(|response| self.client.parse_update(response))
            .inspect_err(|e| warn!(id, error = %e, "update todo failed"))
    }

    pub fn delete(&self, id: u64) -> Result<(), TransportError> {
        debug!(id, "deleting todo");
        self.transport
            .execute(self.client.build_delete(id))
            .and_then(|response| self.client.parse_delete(response))
            .inspect_err(|e| warn!(id, error = %e, "delete todo failed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::testing::FakeTransport;

    #[test]
    fn get_all_hits_collection_url() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"[{"id":1,"title":"One"}]"#);
        let service = TodoService::new("http://test", &transport);

        let todos = service.get_all().unwrap();

        assert_eq!(todos, vec![Todo { id: 1, title: "One".to_string() }]);
        let seen = transport.requests();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].method, HttpMethod::Get);
        assert_eq!(seen[0].url, "http://test/todos");
    }

    #[test]
    fn create_sends_enveloped_body_and_returns_server_todo() {
        let transport = FakeTransport::new();
        transport.respond(201, r#"{"id":5,"title":"Walk dog"}"#);
        let service = TodoService::new("http://test", &transport);

        let todo = service.create(&TodoInput::new("Walk dog")).unwrap();

        assert_eq!(todo.id, 5);
        let seen = transport.requests();
        let body: serde_json::Value =
            serde_json::from_str(seen[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["todo"]["title"], "Walk dog");
    }

    #[test]
    fn update_addresses_id_and_parses_echo() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"id":5,"title":"Walk the dog"}"#);
        let service = TodoService::new("http://test", &transport);

        let todo = service.update(5, &TodoInput::new("Walk the dog")).unwrap();

        assert_eq!(todo.title, "Walk the dog");
        assert_eq!(transport.requests()[0].url, "http://test/todos/5");
        assert_eq!(transport.requests()[0].method, HttpMethod::Put);
    }

    #[test]
    fn delete_succeeds_on_no_content() {
        let transport = FakeTransport::new();
        transport.respond(204, "");
        let service = TodoService::new("http://test", &transport);

        assert!(service.delete(5).is_ok());
        assert_eq!(transport.requests()[0].method, HttpMethod::Delete);
    }

    #[test]
    fn transport_failure_propagates_untranslated() {
        let transport = FakeTransport::new();
        transport.fail("connection refused");
        let service = TodoService::new("http://test", &transport);

        let err = service.get_all().unwrap_err();
        assert!(matches!(err, TransportError::Network(_)));
    }

    #[test]
    fn non_success_status_propagates_untranslated() {
        let transport = FakeTransport::new();
        transport.respond(500, "boom");
        let service = TodoService::new("http://test", &transport);

        let err = service.delete(1).unwrap_err();
        assert!(matches!(
            err,
            TransportError::UnexpectedStatus { status: 500, .. }
        ));
    }
}
