//! Terminal dashboard client for a chat-analysis service.
//!
//! The crate uploads a chat export to the analyzer's `/upload`
//! endpoint, classifies the response into a closed set of failure
//! modes, aggregates the returned per-conversation metrics with
//! outlier filtering, and fans the results out to pluggable rendering
//! collaborators. All mutable state lives in a single owned
//! [`dashboard::ViewState`].

// No unsafe, no undocumented public items, no silent leftovers.
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_imports)]
#![deny(unused_variables)]
#![deny(unused_must_use)]
#![deny(non_snake_case)]
#![deny(non_upper_case_globals)]
#![deny(nonstandard_style)]
#![deny(overflowing_literals)]
#![forbid(unsafe_op_in_unsafe_fn)]

// Failure handling stays explicit: no unwrap, no panic, no stubs.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::print_stdout)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// Test harness macros expand to their own runtime setup.
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Analyzer-service client: configuration, upload flow, response
/// classification, and aggregate statistics.
pub mod analysis;
/// CLI surface and application bootstrap.
pub mod app;
/// Dashboard composition: owned view state, collaborator seams, and
/// the dispatcher.
pub mod dashboard;
/// Terminal implementations of the collaborator seams.
#[allow(clippy::print_stdout)]
pub mod render;
