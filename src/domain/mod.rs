//! Domain layer containing the core request-normalization logic.
//!
//! This module implements the core domain logic following Clean Architecture
//! principles. It defines the date range normalization state machine, the
//! cache directive selection, and the repository trait implemented by the
//! infrastructure layer.
//!
//! # Architecture
//!
//! - [`date_range`] - Query parameter normalization and redirect decisions
//! - [`cache_policy`] - Cache directive selection for data responses
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Normalization and cache selection are pure functions of their inputs and
//!   an explicitly injected clock value
//! - Repository traits define contracts implemented by the infrastructure layer

pub mod cache_policy;
pub mod date_range;
pub mod repositories;
