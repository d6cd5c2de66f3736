//! Students Service Module
//!
//! The domain layer: record schema, validation rules, and the HTTP handlers
//! implementing CRUD over the student collection.
//!
//! ## Workflow
//! Every handler follows the same load-mutate-save path:
//! 1. **Load**: read the full collection from the JSON store.
//! 2. **Validate**: check payload constraints (grade range, id consistency).
//! 3. **Mutate**: append, overwrite, merge, or remove in the in-memory `Vec`.
//! 4. **Persist**: write the full collection back, overwriting the file.
//!
//! Read-modify-write is not atomic across the load/save pair, so concurrent
//! writers can lose updates (last write wins).
//!
//! ## Submodules
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: The `Student` record, the partial-update payload, and the
//!   per-field validation rules.

pub mod handlers;
pub mod types;
