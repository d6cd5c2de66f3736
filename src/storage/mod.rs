//! JSON File Storage Module
//!
//! Persists the full record collection as a single JSON document on disk.
//!
//! ## Core Concepts
//! - **Whole-file access**: `load` parses the entire backing file into a
//!   `Vec`; `save` serializes the entire collection back, overwriting it.
//! - **No durability guarantees**: there is no atomic rename or backup. A
//!   crash mid-write can corrupt the file, and concurrent writers race
//!   (last write wins).
//! - **Missing file is an error**: an absent backing file surfaces as
//!   `StoreError::Missing` rather than an empty collection, and callers
//!   report it to clients as an internal error.

pub mod json_store;
