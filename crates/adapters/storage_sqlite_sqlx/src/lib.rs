//! # hearth-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `hearth-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Store sensors and actuators as flat records: projected through the
//!   `hearth-persistence` visitors on save, rebuilt through its assemblers on load
//!
//! ## Dependency rule
//! Depends on `hearth-app` (for port traits), `hearth-persistence` (for
//! records) and `hearth-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod actuator_repo;
pub mod device_repo;
pub mod error;
pub mod pool;
pub mod sensor_repo;
