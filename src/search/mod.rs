//! Search orchestration module
//!
//! Runs the user and repository searches side by side, merges their results,
//! and keeps the observable state a front-end renders.

mod aggregator;
mod session;
mod state;

pub use aggregator::Aggregator;
pub use session::SearchSession;
pub use state::{Generation, SearchState};
