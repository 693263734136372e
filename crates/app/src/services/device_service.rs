//! Device service: use-cases for managing devices.

use hearth_domain::device::Device;
use hearth_domain::error::{HearthError, NotFoundError};
use hearth_domain::id::DeviceId;

use crate::ports::DeviceRepository;

/// Application service for device operations.
pub struct DeviceService<R> {
    repo: R,
}

impl<R: DeviceRepository> DeviceService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Store a new device.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, device), fields(device_name = %device.name))]
    pub async fn create_device(&self, device: Device) -> Result<Device, HearthError> {
        self.repo.create(device).await
    }

    /// Look up a device by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no device with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_device(&self, id: DeviceId) -> Result<Device, HearthError> {
        find_device(&self.repo, &id).await
    }

    /// List all devices.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_devices(&self) -> Result<Vec<Device>, HearthError> {
        self.repo.get_all().await
    }

    /// Take a device out of service. Its sensors and actuators stay stored,
    /// but no new ones can be attached.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no device with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn deactivate_device(&self, id: DeviceId) -> Result<Device, HearthError> {
        let mut device = find_device(&self.repo, &id).await?;
        device.deactivate();
        tracing::info!(device_id = %id, "device deactivated");
        self.repo.update(device).await
    }
}

async fn find_device<R: DeviceRepository>(repo: &R, id: &DeviceId) -> Result<Device, HearthError> {
    repo.get_by_id(id.clone()).await?.ok_or_else(|| {
        NotFoundError {
            entity: "Device",
            id: id.to_string(),
        }
        .into()
    })
}

/// Look up the device a new sensor or actuator is attached to.
///
/// # Errors
///
/// Returns [`HearthError::NotFound`] for an unknown device and
/// [`HearthError::DeviceInactive`] for a deactivated one.
pub(crate) async fn active_device<R: DeviceRepository>(
    repo: &R,
    id: &DeviceId,
) -> Result<Device, HearthError> {
    let device = find_device(repo, id).await?;
    if !device.active {
        return Err(HearthError::DeviceInactive { id: id.to_string() });
    }
    Ok(device)
}
