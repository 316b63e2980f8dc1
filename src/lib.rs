//! Back-office service for the goCode Softwares site.
//!
//! This crate provides the financial ledger for project records (budget
//! allocations, external fundings, and expenditure transactions with a
//! derived remaining balance), the admin CRUD surface for projects, team
//! members, staff, and service bookings, the vote-once-per-session guard,
//! and the chat assistant with its canned keyword fallback.

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

    // Performance
    clippy::inefficient_to_string,
    clippy::large_types_passed_by_value,
    clippy::needless_pass_by_value,
    clippy::unnecessary_wraps,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Complexity and readability
    clippy::cognitive_complexity,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::too_many_lines,

    // Style consistency
    clippy::enum_glob_use,
    clippy::inconsistent_struct_constructor,
    clippy::redundant_closure_for_method_calls,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// Chat assistant - external API seam and canned keyword fallback
pub mod chat;
/// Configuration management for database, company profile, and settings
pub mod config;
/// Core business logic - ledger aggregation, record mutations, vote guard
pub mod core;
/// SeaORM entity definitions for the store collections
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Acting-user identity and authorship stamping
pub mod identity;
/// Live change feed and per-project ledger subscriptions
pub mod live;

#[cfg(test)]
pub mod test_utils;
