//! Submission pipeline
//!
//! A form submits at most once at a time. The first call wins the
//! `submitting` flag, serializes the payload, runs the transformer chain,
//! and posts. On success the form is done (the flag stays set and the
//! caller is handed the redirect target); on any failure the flag is
//! cleared and the submit button re-enabled so the user can retry.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use serde_json::json;

use formwright_core::prelude::*;
use formwright_core::{Element, FieldDefinition};
use formwright_render::build_payload;

use crate::http::HttpClient;
use crate::transform::{SubmissionRequest, TransformerChain};

/// Redirect target when no submit button carries a `data-redirect`.
pub const DEFAULT_REDIRECT: &str = "thankyou";

/// Where one submission attempt ended up.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The endpoint accepted the payload; navigate to the given target.
    Redirected(String),
    /// The attempt failed and the form is ready to retry.
    Failed { message: String },
    /// Another submission holds the flag; this call did nothing.
    InFlight,
}

/// A rendered form plus its submission state.
///
/// The element tree is behind a mutex because submission mutates it (the
/// submitting marker, the disabled button) while other callers may be
/// serializing it. The lock is never held across an await.
#[derive(Debug)]
pub struct FormInstance {
    element: Mutex<Element>,
    definitions: Vec<FieldDefinition>,
    submitting: AtomicBool,
}

impl FormInstance {
    pub fn new(element: Element, definitions: Vec<FieldDefinition>) -> Self {
        Self {
            element: Mutex::new(element),
            definitions,
            submitting: AtomicBool::new(false),
        }
    }

    pub fn definitions(&self) -> &[FieldDefinition] {
        &self.definitions
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    /// Serialize the current form tree.
    pub fn html(&self) -> String {
        self.element.lock().expect("form lock poisoned").to_html()
    }

    /// Run a closure against the live element tree.
    pub fn with_element<T>(&self, f: impl FnOnce(&mut Element) -> T) -> T {
        let mut element = self.element.lock().expect("form lock poisoned");
        f(&mut element)
    }

    /// Submit the form once.
    ///
    /// Returns [`SubmitOutcome::InFlight`] without touching the network if a
    /// submission is already running. Recoverable failures (transport, HTTP
    /// error status, a failing transformer stage) come back as
    /// [`SubmitOutcome::Failed`] with the form reset for retry; `Err` is
    /// reserved for a form with no submission endpoint at all.
    pub async fn submit(
        &self,
        http: &dyn HttpClient,
        transformers: &TransformerChain,
    ) -> Result<SubmitOutcome> {
        if self
            .submitting
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("submission already in flight, ignoring");
            return Ok(SubmitOutcome::InFlight);
        }

        // Mark the tree, freeze the payload, and read the routing attributes
        // in one critical section; the network work happens lock-free.
        let (payload, url, redirect) = {
            let mut element = self.element.lock().expect("form lock poisoned");
            element.set_attr("data-submitting", "true");
            set_submit_disabled(&mut element, true);

            let url = match element
                .attr("data-submit")
                .or_else(|| element.attr("data-action"))
            {
                Some(url) if !url.is_empty() => url.to_string(),
                _ => {
                    element.remove_attr("data-submitting");
                    set_submit_disabled(&mut element, false);
                    drop(element);
                    self.submitting.store(false, Ordering::SeqCst);
                    return Err(Error::submission("form has no submission endpoint"));
                }
            };
            let redirect = redirect_target(&element);
            (build_payload(&element), url, redirect)
        };

        let request = SubmissionRequest {
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: json!({ "data": payload.into_value() }).to_string(),
            url,
        };

        let request = match transformers.apply(request, &self.definitions).await {
            Ok(request) => request,
            Err(e) => return Ok(self.fail(format!("transformer failed: {e}"))),
        };

        let SubmissionRequest { headers, body, url } = request;
        info!(url = %url, "submitting form");
        let response = match http.post(&url, &headers, body).await {
            Ok(response) => response,
            Err(e) => return Ok(self.fail(e.to_string())),
        };
        if !response.is_ok() {
            // The server's error body is surfaced verbatim to the caller
            let rejection = Error::http(response.status, response.body);
            return Ok(self.fail(rejection.to_string()));
        }

        // Success navigates away: the flag intentionally stays set.
        info!(redirect = %redirect, "submission accepted");
        Ok(SubmitOutcome::Redirected(redirect))
    }

    /// Reset the form for retry and report the failure.
    fn fail(&self, message: String) -> SubmitOutcome {
        error!(message = %message, "submission failed");
        {
            let mut element = self.element.lock().expect("form lock poisoned");
            element.remove_attr("data-submitting");
            set_submit_disabled(&mut element, false);
        }
        self.submitting.store(false, Ordering::SeqCst);
        SubmitOutcome::Failed { message }
    }
}

/// Redirect target: the form's `data-redirect` wins over the submit
/// button's, which wins over the default.
fn redirect_target(form: &Element) -> String {
    form.attr("data-redirect")
        .or_else(|| {
            form.find_descendant(&|el| el.tag() == "button" && el.attr("type") == Some("submit"))
                .and_then(|button| button.attr("data-redirect"))
        })
        .filter(|target| !target.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_REDIRECT.to_string())
}

fn set_submit_disabled(form: &mut Element, disabled: bool) {
    if let Some(button) =
        form.find_descendant_mut(&|el| el.tag() == "button" && el.attr("type") == Some("submit"))
    {
        if disabled {
            button.set_attr("disabled", "");
        } else {
            button.remove_attr("disabled");
        }
    }
}
