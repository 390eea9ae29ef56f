pub mod cards;
pub mod filters;
pub mod handlers;
pub mod listings;
pub mod query;
pub mod skill_match;
