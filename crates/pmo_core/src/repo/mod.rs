//! Repository layer over the SQLite state store.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for dashboard state.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes must validate records before persistence.
//! - Read paths reject invalid persisted state instead of masking it.

pub mod state_repo;
