//! # formwright-client - Fetch, Construct, Submit
//!
//! The network half of the pipeline: fetch a field-definition document,
//! assemble the form tree, and drive the guarded submission flow.
//!
//! ## Public API
//!
//! ### Construction
//! - [`create_form()`] - One-shot: fetch, normalize, render, configure
//! - [`Extensions`] - Formatters and request transformers, resolved once
//!
//! ### Submission (`submit`, `transform`)
//! - [`FormInstance`] - Live form tree plus submission state
//! - [`SubmitOutcome`] - Redirected, failed-and-reset, or already in flight
//! - [`TransformerChain`] / [`RequestTransformer`] - Outgoing-request rewrite
//!
//! ### Transport (`http`)
//! - [`HttpClient`] - The two operations the pipeline needs
//! - [`ReqwestClient`] - Production implementation

pub mod http;
pub mod source;
pub mod submit;
pub mod transform;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use source::fetch_definitions;
pub use submit::{FormInstance, SubmitOutcome, DEFAULT_REDIRECT};
pub use transform::{RequestTransformer, SubmissionRequest, TransformerChain};

use url::Url;

use formwright_core::prelude::*;
use formwright_render::{assemble_form, derive_action, BlockConfig, FormatterRegistry, RenderContext};

/// Extension points for one form, resolved before construction.
///
/// Both default to explicit no-ops; absence is a supported state, not a
/// failure.
#[derive(Debug, Default)]
pub struct Extensions {
    pub formatters: FormatterRegistry,
    pub transformers: TransformerChain,
}

impl Extensions {
    pub fn none() -> Self {
        Self::default()
    }
}

/// Build a [`FormInstance`] from a definition endpoint.
///
/// Fetches and normalizes the definitions, renders the form tree, derives
/// the default submission endpoint from the source path, and applies the
/// block configuration last so it can override any derived attribute.
pub async fn create_form(
    http: &dyn HttpClient,
    source_url: &str,
    extensions: &Extensions,
    config: &BlockConfig,
) -> Result<FormInstance> {
    let url = Url::parse(source_url)?;
    let definitions = fetch_definitions(http, &url).await?;

    let ctx = RenderContext {
        form_path: url.path(),
        formatters: &extensions.formatters,
    };
    let mut form = assemble_form(&definitions, &ctx);
    form.set_attr("data-action", derive_action(url.path()));
    config.apply(&mut form);

    Ok(FormInstance::new(form, definitions))
}
