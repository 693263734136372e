//! # hearthd: hearth daemon
//!
//! Composition root that wires the storage adapter into the application
//! services and reports on what is stored.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Initialize the `SQLite` connection pool and run migrations
//! - Build the sensor and actuator registries once and share them
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Run the requested [`Command`]
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

pub mod command;
pub mod config;
pub mod hearth;

pub use command::Command;
pub use hearth::Hearth;
