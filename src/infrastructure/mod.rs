//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! the concrete PostgreSQL data access.

pub mod persistence;
