//! Storage port: repository traits for persistence.

use std::future::Future;

use hearth_domain::actuator::Actuator;
use hearth_domain::device::Device;
use hearth_domain::error::HearthError;
use hearth_domain::id::{ActuatorId, DeviceId, SensorId};
use hearth_domain::sensor::Sensor;

/// Repository for [`Device`]s.
pub trait DeviceRepository {
    /// Persist a new device.
    fn create(&self, device: Device) -> impl Future<Output = Result<Device, HearthError>> + Send;

    /// Get a device by its identifier.
    fn get_by_id(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, HearthError>> + Send;

    /// Get every stored device.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, HearthError>> + Send;

    /// Overwrite a stored device.
    fn update(&self, device: Device) -> impl Future<Output = Result<Device, HearthError>> + Send;
}

/// Repository for [`Sensor`]s of any kind.
pub trait SensorRepository {
    /// Persist a new sensor.
    fn create(&self, sensor: Sensor) -> impl Future<Output = Result<Sensor, HearthError>> + Send;

    /// Get a sensor by its identifier.
    fn get_by_id(
        &self,
        id: SensorId,
    ) -> impl Future<Output = Result<Option<Sensor>, HearthError>> + Send;

    /// Get every stored sensor.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Sensor>, HearthError>> + Send;

    /// Get the sensors attached to `device_id`.
    fn find_by_device(
        &self,
        device_id: DeviceId,
    ) -> impl Future<Output = Result<Vec<Sensor>, HearthError>> + Send;
}

/// Repository for [`Actuator`]s of any kind.
pub trait ActuatorRepository {
    /// Persist a new actuator.
    fn create(
        &self,
        actuator: Actuator,
    ) -> impl Future<Output = Result<Actuator, HearthError>> + Send;

    /// Get an actuator by its identifier.
    fn get_by_id(
        &self,
        id: ActuatorId,
    ) -> impl Future<Output = Result<Option<Actuator>, HearthError>> + Send;

    /// Get every stored actuator.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Actuator>, HearthError>> + Send;

    /// Get the actuators attached to `device_id`.
    fn find_by_device(
        &self,
        device_id: DeviceId,
    ) -> impl Future<Output = Result<Vec<Actuator>, HearthError>> + Send;
}
