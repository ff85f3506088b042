//! # Melder Engine
//!
//! Planner session, persistence and configuration for Melder.
//!
//! This crate provides:
//! - Key-value store backends (in-memory, one JSON file per key)
//! - Fail-soft JSON snapshots of the per-character stores
//! - Debounced write scheduling
//! - TOML engine configuration
//! - Tracing setup
//! - `PlannerSession`, the surface a front end drives

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod debounce;
pub mod persistence;
pub mod session;
pub mod store;
pub mod telemetry;


pub use config::{ConfigError, ConfigResult, EngineConfig};
pub use debounce::WriteScheduler;
pub use persistence::{load_snapshot, save_snapshot, Snapshots, StoreKey};
pub use session::PlannerSession;
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use telemetry::{init_tracing, init_tracing_from};
