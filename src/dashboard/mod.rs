//! Dashboard sync
//!
//! Owns the signed-in user's message list and acceptance preference and keeps
//! them in step with the feedback service.

pub mod controller;
pub mod state;
pub mod tracker;

pub use controller::DashboardController;
pub use state::DashboardState;
