//! HTTP request handlers for API endpoints.

pub mod health;
pub mod stats;

pub use health::health_handler;
pub use stats::{
    participants_daily_handler, participants_monthly_handler, success_rate_daily_handler,
    success_rate_summary_handler,
};
