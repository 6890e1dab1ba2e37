//! Request-transformation extension point
//!
//! An optional ordered list of transformer stages applied to the outgoing
//! submission request. Each stage receives the current `{headers, body,
//! url}` triple and the field-definition list, and is awaited before the
//! next stage runs. The chain is resolved once at startup; "no transformers"
//! is an explicit empty chain, not a load failure.

use futures_util::future::BoxFuture;

use formwright_core::prelude::*;
use formwright_core::FieldDefinition;

/// The outgoing submission request, as seen (and possibly rewritten) by the
/// transformer chain.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRequest {
    pub headers: Vec<(String, String)>,
    pub body: String,
    pub url: String,
}

impl SubmissionRequest {
    /// Set a header, replacing an existing one with the same name.
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self.headers.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = value;
        } else {
            self.headers.push((name, value));
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// One stage of the request-transformation chain.
pub trait RequestTransformer: Send + Sync {
    fn transform<'a>(
        &'a self,
        request: SubmissionRequest,
        definitions: &'a [FieldDefinition],
    ) -> BoxFuture<'a, Result<SubmissionRequest>>;
}

/// Synchronous closures are transformers too.
impl<F> RequestTransformer for F
where
    F: Fn(SubmissionRequest, &[FieldDefinition]) -> Result<SubmissionRequest> + Send + Sync,
{
    fn transform<'a>(
        &'a self,
        request: SubmissionRequest,
        definitions: &'a [FieldDefinition],
    ) -> BoxFuture<'a, Result<SubmissionRequest>> {
        let result = self(request, definitions);
        Box::pin(std::future::ready(result))
    }
}

/// Ordered transformer stages applied before dispatch.
#[derive(Default)]
pub struct TransformerChain {
    stages: Vec<Box<dyn RequestTransformer>>,
}

impl TransformerChain {
    /// The explicit "no transformers" chain.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn push(&mut self, stage: impl RequestTransformer + 'static) {
        self.stages.push(Box::new(stage));
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run the request through every stage in order, awaiting each.
    pub async fn apply(
        &self,
        mut request: SubmissionRequest,
        definitions: &[FieldDefinition],
    ) -> Result<SubmissionRequest> {
        for stage in &self.stages {
            request = stage.transform(request, definitions).await?;
        }
        Ok(request)
    }
}

impl std::fmt::Debug for TransformerChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformerChain")
            .field("stages", &self.stages.len())
            .finish()
    }
}
