//! # hearth-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DeviceRepository`: create, look up, list and update devices
//!   - `SensorRepository` / `ActuatorRepository`: store and load kinds
//! - Define **driving/inbound ports** as use-case structs:
//!   - `DeviceService`: create, get, list, deactivate
//!   - `SensorService` / `ActuatorService`: build a kind through the registry,
//!     attach it to an active device, query what is stored
//!
//! ## Dependency rule
//! Depends on `hearth-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
