//! Read-side use-case services.
//!
//! # Responsibility
//! - Fold roster collections into report-level answers.
//! - Keep menu code free of cross-collection scans.

pub mod report_service;
