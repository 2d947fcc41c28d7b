//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository
//! calls. Services consume repository traits and provide a clean API for
//! HTTP handlers.

pub mod services;
