//! In-memory repositories shared by the service tests.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Mutex;

use hearth_domain::actuator::Actuator;
use hearth_domain::device::Device;
use hearth_domain::error::HearthError;
use hearth_domain::id::{ActuatorId, DeviceId, RoomId, SensorId};
use hearth_domain::sensor::Sensor;
use hearth_domain::value::{DeviceName, DeviceTypeId};

use crate::ports::{ActuatorRepository, DeviceRepository, SensorRepository};

pub fn device(id: &str) -> Device {
    Device::builder()
        .id(DeviceId::new(id).unwrap())
        .room_id(RoomId::new("garden").unwrap())
        .name(DeviceName::new("Weather station").unwrap())
        .device_type_id(DeviceTypeId::new("WeatherStation").unwrap())
        .build()
        .unwrap()
}

#[derive(Default)]
pub struct InMemoryDeviceRepo {
    store: Mutex<BTreeMap<String, Device>>,
}

impl DeviceRepository for InMemoryDeviceRepo {
    fn create(&self, device: Device) -> impl Future<Output = Result<Device, HearthError>> + Send {
        let mut store = self.store.lock().unwrap();
        store.insert(device.id.to_string(), device.clone());
        async { Ok(device) }
    }

    fn get_by_id(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, HearthError>> + Send {
        let store = self.store.lock().unwrap();
        let result = store.get(id.as_str()).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, HearthError>> + Send {
        let store = self.store.lock().unwrap();
        let result: Vec<Device> = store.values().cloned().collect();
        async { Ok(result) }
    }

    fn update(&self, device: Device) -> impl Future<Output = Result<Device, HearthError>> + Send {
        let mut store = self.store.lock().unwrap();
        store.insert(device.id.to_string(), device.clone());
        async { Ok(device) }
    }
}

#[derive(Default)]
pub struct InMemorySensorRepo {
    store: Mutex<Vec<Sensor>>,
}

impl SensorRepository for InMemorySensorRepo {
    fn create(&self, sensor: Sensor) -> impl Future<Output = Result<Sensor, HearthError>> + Send {
        self.store.lock().unwrap().push(sensor.clone());
        async { Ok(sensor) }
    }

    fn get_by_id(
        &self,
        id: SensorId,
    ) -> impl Future<Output = Result<Option<Sensor>, HearthError>> + Send {
        let store = self.store.lock().unwrap();
        let result = store.iter().find(|s| s.id() == &id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Sensor>, HearthError>> + Send {
        let result = self.store.lock().unwrap().clone();
        async { Ok(result) }
    }

    fn find_by_device(
        &self,
        device_id: DeviceId,
    ) -> impl Future<Output = Result<Vec<Sensor>, HearthError>> + Send {
        let store = self.store.lock().unwrap();
        let result: Vec<Sensor> = store
            .iter()
            .filter(|s| s.device_id() == &device_id)
            .cloned()
            .collect();
        async { Ok(result) }
    }
}

#[derive(Default)]
pub struct InMemoryActuatorRepo {
    store: Mutex<Vec<Actuator>>,
}

impl ActuatorRepository for InMemoryActuatorRepo {
    fn create(
        &self,
        actuator: Actuator,
    ) -> impl Future<Output = Result<Actuator, HearthError>> + Send {
        self.store.lock().unwrap().push(actuator.clone());
        async { Ok(actuator) }
    }

    fn get_by_id(
        &self,
        id: ActuatorId,
    ) -> impl Future<Output = Result<Option<Actuator>, HearthError>> + Send {
        let store = self.store.lock().unwrap();
        let result = store.iter().find(|a| a.id() == &id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Actuator>, HearthError>> + Send {
        let result = self.store.lock().unwrap().clone();
        async { Ok(result) }
    }

    fn find_by_device(
        &self,
        device_id: DeviceId,
    ) -> impl Future<Output = Result<Vec<Actuator>, HearthError>> + Send {
        let store = self.store.lock().unwrap();
        let result: Vec<Actuator> = store
            .iter()
            .filter(|a| a.device_id() == &device_id)
            .cloned()
            .collect();
        async { Ok(result) }
    }
}
