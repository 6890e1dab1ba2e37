//! Formwright Library
//!
//! Declarative forms: fetch spreadsheet-style field definitions, render an
//! HTML form, and drive the guarded submission flow.

// Re-export the workspace crates' entry points
pub use formwright_client::{
    create_form, Extensions, FormInstance, HttpClient, ReqwestClient, SubmitOutcome,
    TransformerChain,
};
pub use formwright_core::{logging, Element, Error, FieldDefinition, Result};
pub use formwright_render::{BlockConfig, FormatterRegistry};
