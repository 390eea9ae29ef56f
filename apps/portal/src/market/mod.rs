pub mod analytics;
pub mod dashboard;
pub mod handlers;
pub mod stats;
