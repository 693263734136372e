//! The wired application: services over the `SQLite` adapter.

use std::fmt::Write as _;
use std::sync::Arc;

use hearth_adapter_storage_sqlite_sqlx::actuator_repo::SqliteActuatorRepository;
use hearth_adapter_storage_sqlite_sqlx::device_repo::SqliteDeviceRepository;
use hearth_adapter_storage_sqlite_sqlx::pool;
use hearth_adapter_storage_sqlite_sqlx::sensor_repo::SqliteSensorRepository;
use hearth_app::services::actuator_service::ActuatorService;
use hearth_app::services::device_service::DeviceService;
use hearth_app::services::sensor_service::SensorService;
use hearth_domain::actuator::ActuatorRegistry;
use hearth_domain::actuator::catalogue::actuator_registry;
use hearth_domain::error::HearthError;
use hearth_domain::registry::Registry;
use hearth_domain::sensor::SensorRegistry;
use hearth_domain::sensor::catalogue::sensor_registry;

use crate::config::DatabaseConfig;

/// Every service, backed by one shared connection pool and one registry per
/// aggregate.
pub struct Hearth {
    pub devices: DeviceService<SqliteDeviceRepository>,
    pub sensors: SensorService<SqliteSensorRepository, SqliteDeviceRepository>,
    pub actuators: ActuatorService<SqliteActuatorRepository, SqliteDeviceRepository>,
    sensor_registry: Arc<SensorRegistry>,
    actuator_registry: Arc<ActuatorRegistry>,
}

impl Hearth {
    /// Open the database described by `config` and wire the services.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::Storage`] if the database cannot be opened or
    /// migrated, and [`HearthError::DuplicateBuilder`] if the built-in
    /// catalogues collide.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, HearthError> {
        let db = pool::Config {
            database_url: config.url.clone(),
            max_connections: config.max_connections,
        }
        .build()
        .await?;
        let pool = db.pool().clone();

        let sensor_registry = Arc::new(sensor_registry()?);
        let actuator_registry = Arc::new(actuator_registry()?);
        tracing::debug!(
            sensor_kinds = sensor_registry.len(),
            actuator_kinds = actuator_registry.len(),
            "registries built"
        );

        Ok(Self {
            devices: DeviceService::new(SqliteDeviceRepository::new(pool.clone())),
            sensors: SensorService::new(
                SqliteSensorRepository::new(pool.clone(), Arc::clone(&sensor_registry)),
                SqliteDeviceRepository::new(pool.clone()),
                Arc::clone(&sensor_registry),
            ),
            actuators: ActuatorService::new(
                SqliteActuatorRepository::new(pool.clone(), Arc::clone(&actuator_registry)),
                SqliteDeviceRepository::new(pool),
                Arc::clone(&actuator_registry),
            ),
            sensor_registry,
            actuator_registry,
        })
    }

    /// The registered kinds and the argument counts each accepts.
    #[must_use]
    pub fn kinds_report(&self) -> String {
        let mut out = String::new();
        write_kinds(&mut out, "sensor kinds", &self.sensor_registry);
        write_kinds(&mut out, "actuator kinds", &self.actuator_registry);
        out
    }

    /// Counts of stored aggregates, then one line per device.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError`] if a stored row cannot be loaded.
    pub async fn status_report(&self) -> Result<String, HearthError> {
        let devices = self.devices.list_devices().await?;
        let sensors = self.sensors.list_sensors().await?;
        let actuators = self.actuators.list_actuators().await?;
        let active = devices.iter().filter(|d| d.active).count();

        let mut out = String::new();
        let _ = writeln!(out, "devices: {} ({active} active)", devices.len());
        let _ = writeln!(out, "sensors: {}", sensors.len());
        let _ = writeln!(out, "actuators: {}", actuators.len());
        for device in &devices {
            let sensor_count = sensors.iter().filter(|s| s.device_id() == &device.id).count();
            let actuator_count = actuators
                .iter()
                .filter(|a| a.device_id() == &device.id)
                .count();
            let _ = writeln!(
                out,
                "  {} {} [{}] in {}: {sensor_count} sensors, {actuator_count} actuators",
                device.id,
                device.name,
                if device.active { "active" } else { "inactive" },
                device.room_id,
            );
        }
        Ok(out)
    }
}

fn write_kinds<T, A>(out: &mut String, title: &str, registry: &Registry<T, A>) {
    let _ = writeln!(out, "{title}:");
    for type_id in registry.type_ids() {
        let arities: Vec<String> = registry
            .arities(type_id)
            .iter()
            .map(ToString::to_string)
            .collect();
        let _ = writeln!(out, "  {type_id} (arguments: {})", arities.join(" or "));
    }
}
