//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository loads into dashboard view computations.
//! - Keep CLI/render layers decoupled from storage details.

pub mod dashboard_service;
