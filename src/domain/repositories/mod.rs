//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data access; concrete implementations live
//! in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.

pub mod stats_repository;

pub use stats_repository::{
    DailyParticipants, DailySuccessRate, FormSuccessRate, MonthlyParticipants, StatsRepository,
};

#[cfg(test)]
pub use stats_repository::MockStatsRepository;
