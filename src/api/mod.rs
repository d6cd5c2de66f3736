//! HTTP API Surface Module
//!
//! Defines the error model shared by all request handlers.
//!
//! ## Overview
//! Every failed request produces a structured JSON body of the form
//! `{"detail": "<human-readable string>"}` together with a status code
//! determined by the error kind. Errors are surfaced directly to the caller;
//! nothing is retried or recovered internally.

pub mod error;

#[cfg(test)]
mod tests;
