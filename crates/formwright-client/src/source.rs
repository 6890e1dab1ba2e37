//! Field-definition source
//!
//! One GET per form construction against a JSON endpoint returning
//! `{ "data": [FieldDefinition, ...] }`. The definitions are normalized
//! (ids assigned, values defaulted) before rendering. A failed or malformed
//! fetch is fatal to the render: no partial form is ever shown.

use serde::Deserialize;
use url::Url;

use formwright_core::prelude::*;
use formwright_core::{normalize_definitions, FieldDefinition, IdAllocator};

use crate::http::HttpClient;

/// Envelope of the definition endpoint.
#[derive(Debug, Deserialize)]
struct DefinitionDocument {
    data: Vec<FieldDefinition>,
}

/// Fetch and normalize the field definitions for one form.
pub async fn fetch_definitions(
    http: &dyn HttpClient,
    url: &Url,
) -> Result<Vec<FieldDefinition>> {
    debug!(url = %url, "fetching field definitions");
    let response = http.get(url.as_str()).await?;
    if !response.is_ok() {
        return Err(Error::fetch(format!(
            "status {} from {url}",
            response.status
        )));
    }

    let document: DefinitionDocument =
        serde_json::from_str(&response.body).map_err(|e| Error::definition(e.to_string()))?;

    let mut definitions = document.data;
    let mut ids = IdAllocator::new();
    normalize_definitions(&mut definitions, &mut ids);
    info!(count = definitions.len(), "field definitions loaded");
    Ok(definitions)
}
