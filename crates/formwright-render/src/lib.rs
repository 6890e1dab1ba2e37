//! # formwright-render - Form Rendering
//!
//! Turns normalized field definitions into an HTML element tree and walks
//! that tree back into a submission payload.
//!
//! ## Public API
//!
//! ### Rendering (`fields`, `wrapper`, `assembler`)
//! - [`render_field()`] - One definition → one field subtree
//! - [`assemble_form()`] - Full render pass: render, wire, group
//! - [`RenderContext`] - Per-pass state (form path, formatter capability)
//! - [`derive_action()`] - Default endpoint from the source path
//!
//! ### Payload (`payload`)
//! - [`build_payload()`] - Live form tree → flat key/value payload
//! - [`Payload`], [`UNIQUE_KEY`]
//!
//! ### Extension points (`format`)
//! - [`FormatterRegistry`] - Display-format functions for output fields
//!
//! ### Host configuration (`config`)
//! - [`BlockConfig`] - Block key/values copied onto the form as data
//!   attributes

pub mod assembler;
pub mod config;
pub mod fields;
pub mod format;
pub mod payload;
pub mod wrapper;

pub use assembler::{assemble_form, derive_action, group_fieldsets};
pub use config::BlockConfig;
pub use fields::render_field;
pub use format::FormatterRegistry;
pub use payload::{build_payload, Payload, UNIQUE_KEY};
pub use wrapper::{item_id, RenderContext};
