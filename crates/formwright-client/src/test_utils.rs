//! Scripted HTTP stub for tests
//!
//! Responses are pushed up front and consumed in order across both verbs;
//! an exhausted script answers `200 {}`. Every request is recorded for
//! assertion, and POSTs can be gated behind a [`Notify`] to hold a
//! submission in flight deliberately.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use futures_util::future::BoxFuture;
use tokio::sync::Notify;

use formwright_core::prelude::*;

use crate::http::{HttpClient, HttpResponse};

/// One request the stub has seen.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Scripted [`HttpClient`] double.
#[derive(Debug, Default)]
pub struct StubHttpClient {
    script: Mutex<VecDeque<Result<HttpResponse>>>,
    requests: Mutex<Vec<RecordedRequest>>,
    gate: Mutex<Option<Arc<Notify>>>,
}

impl StubHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next request.
    pub fn push_response(&self, status: u16, body: &str) {
        self.script
            .lock()
            .expect("stub script poisoned")
            .push_back(Ok(HttpResponse {
                status,
                body: body.to_string(),
            }));
    }

    /// Queue a transport failure for the next request.
    pub fn push_error(&self, message: &str) {
        self.script
            .lock()
            .expect("stub script poisoned")
            .push_back(Err(Error::transport(message)));
    }

    /// Make every subsequent POST record itself, then wait for one
    /// `notify_one` before answering.
    pub fn gate_posts(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.lock().expect("stub gate poisoned") = Some(Arc::clone(&gate));
        gate
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("stub requests poisoned").len()
    }

    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .expect("stub requests poisoned")
            .clone()
    }

    fn next_response(&self) -> Result<HttpResponse> {
        self.script
            .lock()
            .expect("stub script poisoned")
            .pop_front()
            .unwrap_or(Ok(HttpResponse {
                status: 200,
                body: "{}".to_string(),
            }))
    }

    fn record(&self, request: RecordedRequest) {
        self.requests
            .lock()
            .expect("stub requests poisoned")
            .push(request);
    }
}

impl HttpClient for StubHttpClient {
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<HttpResponse>> {
        self.record(RecordedRequest {
            method: "GET",
            url: url.to_string(),
            headers: Vec::new(),
            body: String::new(),
        });
        let response = self.next_response();
        Box::pin(std::future::ready(response))
    }

    fn post<'a>(
        &'a self,
        url: &'a str,
        headers: &'a [(String, String)],
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse>> {
        self.record(RecordedRequest {
            method: "POST",
            url: url.to_string(),
            headers: headers.to_vec(),
            body,
        });
        let gate = self.gate.lock().expect("stub gate poisoned").clone();
        Box::pin(async move {
            if let Some(gate) = gate {
                gate.notified().await;
            }
            self.next_response()
        })
    }
}
