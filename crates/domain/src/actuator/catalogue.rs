//! The set of actuator kinds hearth knows how to build.

use super::{
    Actuator, ActuatorArg, ActuatorKind, ActuatorRegistry, BlindRollerActuator,
    SetDecimalActuator, SetIntegerActuator, SwitchActuator,
};
use crate::error::HearthError;
use crate::registry::{BuildFn, MIN_ARGS};

fn register<K: ActuatorKind>(
    registry: &mut ActuatorRegistry,
    extras: usize,
    build: BuildFn<Actuator, ActuatorArg>,
) -> Result<(), HearthError> {
    registry.register(K::TYPE_ID, MIN_ARGS + extras, build)?;
    registry.register(K::TYPE_ID, MIN_ARGS + extras + 1, build)
}

/// Register every built-in actuator kind into `registry`.
///
/// # Errors
///
/// Returns [`HearthError::DuplicateBuilder`] if `registry` already holds one
/// of the built-in identifiers.
pub fn register_builtin(registry: &mut ActuatorRegistry) -> Result<(), HearthError> {
    register::<SwitchActuator>(registry, 0, SwitchActuator::build)?;
    register::<BlindRollerActuator>(registry, 0, BlindRollerActuator::build)?;
    register::<SetIntegerActuator>(registry, 1, SetIntegerActuator::build)?;
    register::<SetDecimalActuator>(registry, 1, SetDecimalActuator::build)
}

/// A registry holding every built-in actuator kind.
///
/// # Errors
///
/// Returns [`HearthError::DuplicateBuilder`] if two built-in kinds share an identifier.
pub fn actuator_registry() -> Result<ActuatorRegistry, HearthError> {
    let mut registry = ActuatorRegistry::new();
    register_builtin(&mut registry)?;
    Ok(registry)
}
