//! HTTP abstraction for the two network touchpoints
//!
//! The pipeline talks HTTP through a small trait so tests can run against a
//! scripted stub instead of a network. The production implementation is a
//! thin wrapper over `reqwest`.

use futures_util::future::BoxFuture;

use formwright_core::prelude::*;

/// Status and body of an HTTP exchange, already read to completion.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Conventional success range.
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The two operations the form pipeline needs: fetch a definition document
/// and post a submission.
///
/// Transport failures surface as [`Error::Transport`]; non-success statuses
/// are returned as normal responses for the caller to interpret.
pub trait HttpClient: Send + Sync {
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<HttpResponse>>;

    fn post<'a>(
        &'a self,
        url: &'a str,
        headers: &'a [(String, String)],
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse>>;
}

/// Production client backed by `reqwest`.
///
/// No overall request timeout is configured: a hung submission leaves the
/// form in the submitting state. Known gap, kept to match the observed
/// behavior.
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HttpClient for ReqwestClient {
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<HttpResponse>> {
        Box::pin(async move {
            let response = self
                .inner
                .get(url)
                .send()
                .await
                .map_err(|e| Error::transport(e.to_string()))?;
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| Error::transport(e.to_string()))?;
            Ok(HttpResponse { status, body })
        })
    }

    fn post<'a>(
        &'a self,
        url: &'a str,
        headers: &'a [(String, String)],
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse>> {
        Box::pin(async move {
            let mut request = self.inner.post(url);
            for (name, value) in headers {
                request = request.header(name, value);
            }
            let response = request
                .body(body)
                .send()
                .await
                .map_err(|e| Error::transport(e.to_string()))?;
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| Error::transport(e.to_string()))?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ok_range() {
        assert!(HttpResponse {
            status: 200,
            body: String::new()
        }
        .is_ok());
        assert!(HttpResponse {
            status: 204,
            body: String::new()
        }
        .is_ok());
        assert!(!HttpResponse {
            status: 302,
            body: String::new()
        }
        .is_ok());
        assert!(!HttpResponse {
            status: 500,
            body: String::new()
        }
        .is_ok());
    }
}
