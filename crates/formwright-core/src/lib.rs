//! # formwright-core - Core Domain Types
//!
//! Foundation crate for Formwright. Provides the field-definition model, the
//! HTML element tree the renderers produce, constraint resolution, id
//! allocation, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing, url).
//!
//! ## Public API
//!
//! ### Field Definitions (`definition`)
//! - [`FieldDefinition`] - Declarative description of one form control
//! - [`FieldKind`] - Closed discriminator enum with a generic-input fallback
//! - [`ConstraintClass`] - Which HTML constraint set a kind accepts
//! - [`normalize_definitions()`] - Default-id and default-value assignment
//!
//! ### Element Tree (`html`)
//! - [`Element`], [`Node`] - Owned HTML tree with ordered attributes,
//!   traversal helpers, and an escaping serializer
//!
//! ### Constraints (`constraints`)
//! - [`constraint_attrs()`], [`apply_constraints()`] - Pure lookup from
//!   field kind to the constraint attributes the definition supplies
//!
//! ### Ids (`ids`)
//! - [`IdAllocator`] - Per-render-pass deterministic id counter
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use formwright_core::prelude::*;
//! ```

pub mod constraints;
pub mod definition;
pub mod error;
pub mod html;
pub mod ids;
pub mod logging;

/// Prelude for common imports used throughout all Formwright crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use constraints::{apply_constraints, constraint_attrs};
pub use definition::{normalize_definitions, ConstraintClass, FieldDefinition, FieldKind};
pub use error::{Error, Result, ResultExt};
pub use html::{Element, Node};
pub use ids::IdAllocator;
