//! School Students API Library
//!
//! This library crate defines the core modules that make up the service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of three small subsystems:
//!
//! - **`api`**: The HTTP error surface. Maps service failures (missing file,
//!   duplicate id, not found, validation) to status codes and structured
//!   JSON error bodies.
//! - **`storage`**: The persistence layer. A whole-file JSON store that reads
//!   the full student collection into memory and writes it back on every
//!   mutation. Last writer wins; there is no locking or caching.
//! - **`students`**: The domain layer. Record schema, per-field validation,
//!   and the HTTP request handlers implementing the CRUD operations.

pub mod api;
pub mod storage;
pub mod students;
