//! Sensor service: use-cases for attaching sensors to devices.

use std::sync::Arc;

use hearth_domain::error::{HearthError, NotFoundError, ValidationError};
use hearth_domain::id::{DeviceId, SensorId};
use hearth_domain::sensor::{Sensor, SensorArg, SensorRegistry};

use crate::ports::{DeviceRepository, SensorRepository};
use crate::services::device_service::active_device;

/// Application service building sensors through the kind registry.
pub struct SensorService<S, D> {
    sensors: S,
    devices: D,
    registry: Arc<SensorRegistry>,
}

impl<S: SensorRepository, D: DeviceRepository> SensorService<S, D> {
    pub fn new(sensors: S, devices: D, registry: Arc<SensorRegistry>) -> Self {
        Self {
            sensors,
            devices,
            registry,
        }
    }

    /// Build a sensor of kind `type_id` from `args` and attach it to its device.
    ///
    /// The model path argument must name the kind itself, so the stored
    /// record can be rebuilt through the same registry entry.
    ///
    /// # Errors
    ///
    /// - [`HearthError::InvalidArgumentCount`] for fewer than four arguments
    /// - [`HearthError::UnsupportedKind`] when no builder accepts `type_id` and `args`
    /// - [`HearthError::Validation`] when the kind rejects its arguments
    /// - [`HearthError::NotFound`] / [`HearthError::DeviceInactive`] when the
    ///   device cannot receive sensors
    #[tracing::instrument(skip(self, args), fields(arg_count = args.len()))]
    pub async fn add_sensor(
        &self,
        type_id: &str,
        args: &[SensorArg],
    ) -> Result<Sensor, HearthError> {
        let Some(sensor) = self.registry.build(type_id, args)? else {
            if self.registry.contains(type_id) {
                tracing::warn!(type_id, "arguments do not match any builder of this kind");
            } else {
                tracing::warn!(type_id, "unknown sensor kind");
            }
            return Err(HearthError::UnsupportedKind {
                type_id: type_id.to_string(),
            });
        };
        if sensor.model_path().as_str() != sensor.type_id() {
            return Err(ValidationError::WrongCategory {
                field: "model path",
                expected: sensor.type_id(),
                actual: sensor.model_path().to_string(),
            }
            .into());
        }
        active_device(&self.devices, sensor.device_id()).await?;
        let sensor = self.sensors.create(sensor).await?;
        tracing::info!(sensor_id = %sensor.id(), "sensor added");
        Ok(sensor)
    }

    /// Look up a sensor by id.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no sensor with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_sensor(&self, id: SensorId) -> Result<Sensor, HearthError> {
        let found = self.sensors.get_by_id(id.clone()).await?;
        found.ok_or_else(|| {
            NotFoundError {
                entity: "Sensor",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all sensors.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_sensors(&self) -> Result<Vec<Sensor>, HearthError> {
        self.sensors.get_all().await
    }

    /// List the sensors attached to `device_id`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_sensors_by_device(
        &self,
        device_id: DeviceId,
    ) -> Result<Vec<Sensor>, HearthError> {
        self.sensors.find_by_device(device_id).await
    }

    /// Identifiers of every sensor kind the registry can build, sorted.
    #[must_use]
    pub fn supported_kinds(&self) -> Vec<&str> {
        self.registry.type_ids()
    }
}
