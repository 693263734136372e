//! # hearth-domain
//!
//! Pure domain model for the hearth smart-home system.
//!
//! ## Responsibilities
//! - Typed identifiers, self-validating value objects and error conventions
//! - **Devices** that carry sensors and actuators
//! - **Sensor** and **actuator** kinds, each checking its own category
//! - The kind **registry** that builds a kind from a type identifier and a
//!   positional argument list
//! - The **visitor** traits through which persistence flattens a kind
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod registry;
pub mod value;

pub mod actuator;
pub mod device;
pub mod sensor;
