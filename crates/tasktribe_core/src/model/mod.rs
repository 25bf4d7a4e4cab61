//! Domain model for the ambassador roster.
//!
//! # Responsibility
//! - Define the four record types tracked by the roster.
//! - Keep record-local invariants (status set, participant uniqueness) next
//!   to the data they guard.
//!
//! # Invariants
//! - Every record is identified by a positive sequential id that is never
//!   reused inside its own namespace.
//! - Cross-record links are stored as ids, never as owned copies.

pub mod ambassador;
pub mod project;
pub mod training;
