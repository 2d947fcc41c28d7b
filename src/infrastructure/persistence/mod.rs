//! PostgreSQL repository implementations.

pub mod pg_stats_repository;

pub use pg_stats_repository::PgStatsRepository;
