//! Grid Game Session
//!
//! This crate provides:
//! - A game session pairing a human with the computer opponent
//! - Per-move search statistics with text and JSON export
//! - TOML configuration for board size, difficulty and seeding
//!
//! # Usage
//!
//! ```bash
//! # Play on the default 4x4 board at medium difficulty
//! cargo run -p grid_game
//!
//! # Hard 5x5 game, logging every deepening pass
//! RUST_LOG=debug cargo run -p grid_game -- --size 5 --difficulty hard
//! ```

mod config;
mod error;
mod session;
mod stats;

pub use config::*;
pub use error::*;
pub use session::*;
pub use stats::*;
