//! Device: a physical unit installed in a room that carries sensors and actuators.

use serde::{Deserialize, Serialize};

use crate::error::{HearthError, ValidationError};
use crate::id::{DeviceId, RoomId};
use crate::value::{DeviceName, DeviceTypeId};

/// A device installed in a room.
///
/// Only active devices accept new sensors and actuators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub room_id: RoomId,
    pub name: DeviceName,
    pub device_type_id: DeviceTypeId,
    pub active: bool,
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Mark the device as no longer in service.
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

/// Step-by-step builder for [`Device`].
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    id: Option<DeviceId>,
    room_id: Option<RoomId>,
    name: Option<DeviceName>,
    device_type_id: Option<DeviceTypeId>,
    active: Option<bool>,
}

impl DeviceBuilder {
    #[must_use]
    pub fn id(mut self, id: DeviceId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn room_id(mut self, room_id: RoomId) -> Self {
        self.room_id = Some(room_id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: DeviceName) -> Self {
        self.name = Some(name);
        self
    }

    #[must_use]
    pub fn device_type_id(mut self, device_type_id: DeviceTypeId) -> Self {
        self.device_type_id = Some(device_type_id);
        self
    }

    #[must_use]
    pub fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    /// Consume the builder and return a [`Device`].
    ///
    /// A missing id is generated; a missing `active` flag defaults to `true`.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::Validation`] if the room, name or type is missing.
    pub fn build(self) -> Result<Device, HearthError> {
        Ok(Device {
            id: self.id.unwrap_or_else(DeviceId::generate),
            room_id: self
                .room_id
                .ok_or(ValidationError::Blank { field: "room id" })?,
            name: self
                .name
                .ok_or(ValidationError::Blank { field: "device name" })?,
            device_type_id: self
                .device_type_id
                .ok_or(ValidationError::Blank { field: "device type" })?,
            active: self.active.unwrap_or(true),
        })
    }
}
