//! Xiangqi game service
//!
//! This crate wraps the rule engine for play against the heuristic opponent:
//! - [`GameService`], the handle that owns the current game
//! - [`SnapshotStore`], whole-snapshot JSON persistence
//! - [`ServiceConfig`], TOML configuration
//! - the line protocol spoken by the `xiangqi` binary
//!
//! # Usage
//!
//! ```bash
//! cargo run -p xiangqi_service -- --snapshot game.json --seed 7
//! ```

mod config;
mod protocol;
mod service;
mod store;

pub use config::*;
pub use protocol::*;
pub use service::*;
pub use store::*;
