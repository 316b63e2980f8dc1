//! Core business logic - framework-agnostic ledger, CRUD, and vote operations.
//!
//! Every mutation validates its input before touching the store, stamps
//! authorship from the acting [`Identity`](crate::identity::Identity), and
//! publishes to the [`ChangeFeed`](crate::live::ChangeFeed) after the write
//! commits so live views resync. All functions are async and return Result
//! types for error handling.

/// Budget allocation operations (create, edit, delete, list)
pub mod allocation;
/// Service booking submission and triage listing
pub mod booking;
/// External funding operations (create, delete, list)
pub mod funding;
/// Financial ledger aggregation - budget, spent, remaining
pub mod ledger;
/// Project CRUD and the atomic vote increment
pub mod project;
/// Staff lookups and bulk-salary prefill
pub mod staff;
/// Team member CRUD
pub mod team;
/// Expenditure transaction operations, including bulk salaries
pub mod transaction;
/// Boundary validation for amounts and required fields
pub mod validate;
/// Vote-once-per-session guard
pub mod vote;
