//! Business logic services for the application layer.

pub mod stats_service;

pub use stats_service::StatsService;
