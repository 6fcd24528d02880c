//! The seven resume section kinds and their creation routes.

pub mod handlers;
pub mod models;
