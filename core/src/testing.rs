//! Scripted transport for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse, Transport};

enum Scripted {
    Respond(HttpResponse),
    Fail(String),
}

/// A `Transport` that replays scripted outcomes in order and records every
/// request it sees. Running out of script is a test bug, and panics.
#[derive(Default)]
pub(crate) struct FakeTransport {
    script: RefCell<VecDeque<Scripted>>,
    seen: RefCell<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(&self, status: u16, body: &str) {
        self.script
            .borrow_mut()
            .push_back(Scripted::Respond(HttpResponse {
                status,
                headers: Vec::new(),
                body: body.to_string(),
            }));
    }

    pub(crate) fn fail(&self, reason: &str) {
        self.script
            .borrow_mut()
            .push_back(Scripted::Fail(reason.to_string()));
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.seen.borrow().clone()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.seen.borrow().len()
    }
}

impl Transport for FakeTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.seen.borrow_mut().push(request);
        match self
            .script
            .borrow_mut()
            .pop_front()
            .expect("FakeTransport script exhausted")
        {
            Scripted::Respond(response) => Ok(response),
            Scripted::Fail(reason) => Err(TransportError::Network(reason)),
        }
    }
}
