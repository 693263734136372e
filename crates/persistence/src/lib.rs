//! # hearth-persistence
//!
//! Bridges domain aggregates and the flat records a store keeps.
//!
//! ## Responsibilities
//! - Define the record shapes ([`data_model`]) shared by every storage adapter
//! - Project sensors and actuators into records through the domain visitor
//!   traits ([`visitor`])
//! - Rebuild aggregates from records through the kind registries ([`assembler`])
//!
//! ## Dependency rule
//! Depends on `hearth-domain` only. Storage adapters depend on this crate, never
//! the other way around.

pub mod assembler;
pub mod data_model;
pub mod visitor;
