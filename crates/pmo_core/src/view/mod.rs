//! Dashboard view transforms.
//!
//! # Responsibility
//! - Derive render-ready data (load summaries, risk heat map, calendar
//!   events) from an application-state snapshot.
//!
//! # Invariants
//! - Every transform is a pure function of its borrowed inputs.
//! - Transforms never fail; malformed input degrades to zero/absent values.

pub mod allocation;
pub mod calendar;
pub mod risk_matrix;
