//! Genesis Regulator Core
//!
//! Platform-agnostic logic for the Genesis Economy Regulator console.
//! This crate holds the quest record, the board state the console renders from,
//! and the fetch/trigger flow, without any UI or transport dependencies.

pub mod api;
pub mod board;
pub mod controller;
pub mod endpoints;
pub mod error;
pub mod messages;
pub mod quest;

// Re-export commonly used types
pub use api::QuestApi;
pub use board::{BoardAction, BoardState, BoardView};
pub use controller::{advance, refresh};
pub use endpoints::{DEFAULT_API_BASE, Endpoints};
pub use error::ApiError;
pub use quest::{Quest, parse_current_quest};
