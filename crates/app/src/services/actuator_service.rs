//! Actuator service: use-cases for attaching actuators to devices.

use std::sync::Arc;

use hearth_domain::actuator::{Actuator, ActuatorArg, ActuatorRegistry};
use hearth_domain::error::{HearthError, NotFoundError, ValidationError};
use hearth_domain::id::{ActuatorId, DeviceId};

use crate::ports::{ActuatorRepository, DeviceRepository};
use crate::services::device_service::active_device;

/// Application service building actuators through the kind registry.
pub struct ActuatorService<A, D> {
    actuators: A,
    devices: D,
    registry: Arc<ActuatorRegistry>,
}

impl<A: ActuatorRepository, D: DeviceRepository> ActuatorService<A, D> {
    pub fn new(actuators: A, devices: D, registry: Arc<ActuatorRegistry>) -> Self {
        Self {
            actuators,
            devices,
            registry,
        }
    }

    /// Build an actuator of kind `type_id` from `args` and attach it to its device.
    ///
    /// # Errors
    ///
    /// Same failure modes as
    /// [`SensorService::add_sensor`](crate::services::sensor_service::SensorService::add_sensor).
    #[tracing::instrument(skip(self, args), fields(arg_count = args.len()))]
    pub async fn add_actuator(
        &self,
        type_id: &str,
        args: &[ActuatorArg],
    ) -> Result<Actuator, HearthError> {
        let Some(actuator) = self.registry.build(type_id, args)? else {
            if self.registry.contains(type_id) {
                tracing::warn!(type_id, "arguments do not match any builder of this kind");
            } else {
                tracing::warn!(type_id, "unknown actuator kind");
            }
            return Err(HearthError::UnsupportedKind {
                type_id: type_id.to_string(),
            });
        };
        if actuator.model_path().as_str() != actuator.type_id() {
            return Err(ValidationError::WrongCategory {
                field: "model path",
                expected: actuator.type_id(),
                actual: actuator.model_path().to_string(),
            }
            .into());
        }
        active_device(&self.devices, actuator.device_id()).await?;
        let actuator = self.actuators.create(actuator).await?;
        tracing::info!(actuator_id = %actuator.id(), "actuator added");
        Ok(actuator)
    }

    /// Look up an actuator by id.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no actuator with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_actuator(&self, id: ActuatorId) -> Result<Actuator, HearthError> {
        let found = self.actuators.get_by_id(id.clone()).await?;
        found.ok_or_else(|| {
            NotFoundError {
                entity: "Actuator",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all actuators.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_actuators(&self) -> Result<Vec<Actuator>, HearthError> {
        self.actuators.get_all().await
    }

    /// List the actuators attached to `device_id`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_actuators_by_device(
        &self,
        device_id: DeviceId,
    ) -> Result<Vec<Actuator>, HearthError> {
        self.actuators.find_by_device(device_id).await
    }

    #[must_use]
    pub fn supported_kinds(&self) -> Vec<&str> {
        self.registry.type_ids()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::in_memory::{InMemoryActuatorRepo, InMemoryDeviceRepo, device};
    use hearth_domain::actuator::catalogue::actuator_registry;
    use hearth_domain::value::{ActuatorName, ActuatorTypeId, IntegerLimits, ModelPath};

    async fn make_service() -> ActuatorService<InMemoryActuatorRepo, InMemoryDeviceRepo> {
        let devices = InMemoryDeviceRepo::default();
        devices.create(device("device-1")).await.unwrap();
        ActuatorService::new(
            InMemoryActuatorRepo::default(),
            devices,
            Arc::new(actuator_registry().unwrap()),
        )
    }

    fn args(model_path: &str, category: &str) -> Vec<ActuatorArg> {
        vec![
            DeviceId::new("device-1").unwrap().into(),
            ModelPath::new(model_path).unwrap().into(),
            ActuatorTypeId::new(category).unwrap().into(),
            ActuatorName::new("Thermostat").unwrap().into(),
        ]
    }

    #[tokio::test]
    async fn should_add_set_integer_actuator_with_limits() {
        let svc = make_service().await;
        let mut args = args("SetIntegerActuator", "SetInteger");
        args.push(IntegerLimits::new(16, 28).unwrap().into());

        let actuator = svc.add_actuator("SetIntegerActuator", &args).await.unwrap();
        let Actuator::SetInteger(set_integer) = &actuator else {
            panic!("expected a set-integer actuator");
        };
        assert_eq!(set_integer.limits().upper(), 28);

        let fetched = svc.get_actuator(actuator.id().clone()).await.unwrap();
        assert_eq!(fetched, actuator);
    }

    #[tokio::test]
    async fn should_fail_with_unsupported_kind_when_limits_missing() {
        let svc = make_service().await;
        let result = svc
            .add_actuator("SetIntegerActuator", &args("SetIntegerActuator", "SetInteger"))
            .await;
        assert!(matches!(result, Err(HearthError::UnsupportedKind { .. })));
    }

    #[tokio::test]
    async fn should_surface_category_mismatch() {
        let svc = make_service().await;
        let result = svc
            .add_actuator("SwitchActuator", &args("SwitchActuator", "BlindRoller"))
            .await;
        assert!(matches!(
            result,
            Err(HearthError::Validation(ValidationError::WrongCategory { .. }))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_actuator() {
        let svc = make_service().await;
        let result = svc.get_actuator(ActuatorId::new("missing").unwrap()).await;
        assert!(matches!(result, Err(HearthError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_actuators_by_device() {
        let svc = make_service().await;
        svc.add_actuator("SwitchActuator", &args("SwitchActuator", "Switch"))
            .await
            .unwrap();
        svc.add_actuator("BlindRollerActuator", &args("BlindRollerActuator", "BlindRoller"))
            .await
            .unwrap();
        let listed = svc
            .list_actuators_by_device(DeviceId::new("device-1").unwrap())
            .await
            .unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(svc.list_actuators().await.unwrap().len(), 2);
        assert_eq!(svc.supported_kinds().len(), 4);
    }
}
