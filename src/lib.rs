//! `ApexPlanner` - A retail planning backend for footwear open-to-buy budgets
//!
//! This crate serves store and product master data, sales transactions and
//! department OTB budgets over a JSON HTTP API, accepts planned buy quantities,
//! and ships an offline tool that reshapes flat JSON exports into loadable fixtures.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,
    clippy::nursery,

    // Correctness
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Style consistency
    clippy::enum_glob_use,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
)]

/// HTTP layer - axum router, request handlers, and error responses
pub mod api;
/// Configuration management for database, server and planning settings
pub mod config;
/// Core business logic - framework-agnostic OTB, product, store, sales and planning operations
pub mod core;
/// `SeaORM` entity definitions for database tables
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Offline reshaping of flat JSON exports into `{model, pk, fields}` fixtures
pub mod fixtures;

#[cfg(test)]
pub mod test_utils;
