pub mod content;
pub mod handlers;
pub mod views;
