//! Built-in actuator kinds.

use super::{Actuator, ActuatorArg, ActuatorCore, ActuatorKind, ActuatorValue, split_common};
use crate::error::{HearthError, ValidationError};
use crate::id::{ActuatorId, DeviceId};
use crate::value::{ActuatorName, ActuatorTypeId, DecimalLimits, IntegerLimits, ModelPath};

macro_rules! impl_actuator_kind {
    ($name:ident, $type_id:literal, $category:literal) => {
        impl ActuatorKind for $name {
            const TYPE_ID: &'static str = $type_id;
            const CATEGORY: &'static str = $category;

            fn id(&self) -> &ActuatorId {
                self.core.id()
            }

            fn device_id(&self) -> &DeviceId {
                self.core.device_id()
            }

            fn model_path(&self) -> &ModelPath {
                self.core.model_path()
            }

            fn actuator_type_id(&self) -> &ActuatorTypeId {
                self.core.actuator_type_id()
            }

            fn name(&self) -> &ActuatorName {
                self.core.name()
            }
        }
    };
}

/// Resolve the trailing optional id of a kind without extras.
fn plain_id(rest: &[ActuatorArg]) -> Option<ActuatorId> {
    match rest {
        [] => Some(ActuatorId::generate()),
        [ActuatorArg::ActuatorId(id)] => Some(id.clone()),
        _ => None,
    }
}

/// On/off relay.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchActuator {
    core: ActuatorCore,
}

impl SwitchActuator {
    /// Create an actuator with a freshly generated id.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::WrongCategory`] unless `actuator_type_id` is `Switch`.
    pub fn new(
        device_id: DeviceId,
        model_path: ModelPath,
        actuator_type_id: ActuatorTypeId,
        name: ActuatorName,
    ) -> Result<Self, ValidationError> {
        Self::with_id(
            ActuatorId::generate(),
            device_id,
            model_path,
            actuator_type_id,
            name,
        )
    }

    /// Rebuild an actuator with a known id.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::WrongCategory`] unless `actuator_type_id` is `Switch`.
    pub fn with_id(
        id: ActuatorId,
        device_id: DeviceId,
        model_path: ModelPath,
        actuator_type_id: ActuatorTypeId,
        name: ActuatorName,
    ) -> Result<Self, ValidationError> {
        let core = ActuatorCore::new(
            Self::CATEGORY,
            id,
            device_id,
            model_path,
            actuator_type_id,
            name,
        )?;
        Ok(Self { core })
    }

    pub(crate) fn build(args: &[ActuatorArg]) -> Option<Result<Actuator, HearthError>> {
        let (common, rest) = split_common(args)?;
        let id = plain_id(rest)?;
        Some(
            common
                .into_core(Self::CATEGORY, id)
                .map(|core| Actuator::from(Self { core })),
        )
    }

    /// Command the relay to `on`.
    #[must_use]
    pub fn switch(&self, on: bool) -> ActuatorValue {
        ActuatorValue::Switch(on)
    }
}

impl_actuator_kind!(SwitchActuator, "SwitchActuator", "Switch");

/// Motorised blind driven to a percentage of opening.
#[derive(Debug, Clone, PartialEq)]
pub struct BlindRollerActuator {
    core: ActuatorCore,
}

impl BlindRollerActuator {
    /// Create an actuator with a freshly generated id.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::WrongCategory`] unless `actuator_type_id` is `BlindRoller`.
    pub fn new(
        device_id: DeviceId,
        model_path: ModelPath,
        actuator_type_id: ActuatorTypeId,
        name: ActuatorName,
    ) -> Result<Self, ValidationError> {
        Self::with_id(
            ActuatorId::generate(),
            device_id,
            model_path,
            actuator_type_id,
            name,
        )
    }

    /// Rebuild an actuator with a known id.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::WrongCategory`] unless `actuator_type_id` is `BlindRoller`.
    pub fn with_id(
        id: ActuatorId,
        device_id: DeviceId,
        model_path: ModelPath,
        actuator_type_id: ActuatorTypeId,
        name: ActuatorName,
    ) -> Result<Self, ValidationError> {
        let core = ActuatorCore::new(
            Self::CATEGORY,
            id,
            device_id,
            model_path,
            actuator_type_id,
            name,
        )?;
        Ok(Self { core })
    }

    pub(crate) fn build(args: &[ActuatorArg]) -> Option<Result<Actuator, HearthError>> {
        let (common, rest) = split_common(args)?;
        let id = plain_id(rest)?;
        Some(
            common
                .into_core(Self::CATEGORY, id)
                .map(|core| Actuator::from(Self { core })),
        )
    }

    /// Command the blind to `position` percent open.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] when `position` exceeds 100.
    pub fn set_position(&self, position: u8) -> Result<ActuatorValue, ValidationError> {
        if position > 100 {
            return Err(ValidationError::OutOfRange {
                field: "blind position",
                value: position.to_string(),
                lower: "0".to_string(),
                upper: "100".to_string(),
            });
        }
        Ok(ActuatorValue::Position(position))
    }
}

impl_actuator_kind!(BlindRollerActuator, "BlindRollerActuator", "BlindRoller");

/// Output accepting an integer set-point within fixed limits.
#[derive(Debug, Clone, PartialEq)]
pub struct SetIntegerActuator {
    core: ActuatorCore,
    limits: IntegerLimits,
}

impl SetIntegerActuator {
    /// # Errors
    ///
    /// Returns [`ValidationError::WrongCategory`] unless `actuator_type_id` is `SetInteger`.
    pub fn new(
        device_id: DeviceId,
        model_path: ModelPath,
        actuator_type_id: ActuatorTypeId,
        name: ActuatorName,
        limits: IntegerLimits,
    ) -> Result<Self, ValidationError> {
        Self::with_id(
            ActuatorId::generate(),
            device_id,
            model_path,
            actuator_type_id,
            name,
            limits,
        )
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::WrongCategory`] unless `actuator_type_id` is `SetInteger`.
    pub fn with_id(
        id: ActuatorId,
        device_id: DeviceId,
        model_path: ModelPath,
        actuator_type_id: ActuatorTypeId,
        name: ActuatorName,
        limits: IntegerLimits,
    ) -> Result<Self, ValidationError> {
        let core = ActuatorCore::new(
            Self::CATEGORY,
            id,
            device_id,
            model_path,
            actuator_type_id,
            name,
        )?;
        Ok(Self { core, limits })
    }

    pub(crate) fn build(args: &[ActuatorArg]) -> Option<Result<Actuator, HearthError>> {
        let (common, rest) = split_common(args)?;
        let (limits, id) = match rest {
            [ActuatorArg::IntegerLimits(limits)] => (*limits, ActuatorId::generate()),
            [ActuatorArg::IntegerLimits(limits), ActuatorArg::ActuatorId(id)] => {
                (*limits, id.clone())
            }
            _ => return None,
        };
        Some(
            common
                .into_core(Self::CATEGORY, id)
                .map(|core| Actuator::from(Self { core, limits })),
        )
    }

    #[must_use]
    pub fn limits(&self) -> &IntegerLimits {
        &self.limits
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] when `value` is outside the limits.
    pub fn set_value(&self, value: i64) -> Result<ActuatorValue, ValidationError> {
        if !self.limits.contains(value) {
            return Err(ValidationError::OutOfRange {
                field: "set-point",
                value: value.to_string(),
                lower: self.limits.lower().to_string(),
                upper: self.limits.upper().to_string(),
            });
        }
        Ok(ActuatorValue::Integer(value))
    }
}

impl_actuator_kind!(SetIntegerActuator, "SetIntegerActuator", "SetInteger");

/// Output accepting a decimal set-point within fixed limits.
#[derive(Debug, Clone, PartialEq)]
pub struct SetDecimalActuator {
    core: ActuatorCore,
    limits: DecimalLimits,
}

impl SetDecimalActuator {
    /// # Errors
    ///
    /// Returns [`ValidationError::WrongCategory`] unless `actuator_type_id` is `SetDecimal`.
    pub fn new(
        device_id: DeviceId,
        model_path: ModelPath,
        actuator_type_id: ActuatorTypeId,
        name: ActuatorName,
        limits: DecimalLimits,
    ) -> Result<Self, ValidationError> {
        Self::with_id(
            ActuatorId::generate(),
            device_id,
            model_path,
            actuator_type_id,
            name,
            limits,
        )
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::WrongCategory`] unless `actuator_type_id` is `SetDecimal`.
    pub fn with_id(
        id: ActuatorId,
        device_id: DeviceId,
        model_path: ModelPath,
        actuator_type_id: ActuatorTypeId,
        name: ActuatorName,
        limits: DecimalLimits,
    ) -> Result<Self, ValidationError> {
        let core = ActuatorCore::new(
            Self::CATEGORY,
            id,
            device_id,
            model_path,
            actuator_type_id,
            name,
        )?;
        Ok(Self { core, limits })
    }

    pub(crate) fn build(args: &[ActuatorArg]) -> Option<Result<Actuator, HearthError>> {
        let (common, rest) = split_common(args)?;
        let (limits, id) = match rest {
            [ActuatorArg::DecimalLimits(limits)] => (*limits, ActuatorId::generate()),
            [ActuatorArg::DecimalLimits(limits), ActuatorArg::ActuatorId(id)] => {
                (*limits, id.clone())
            }
            _ => return None,
        };
        Some(
            common
                .into_core(Self::CATEGORY, id)
                .map(|core| Actuator::from(Self { core, limits })),
        )
    }

    #[must_use]
    pub fn limits(&self) -> &DecimalLimits {
        &self.limits
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] when `value` is outside the limits.
    pub fn set_value(&self, value: f64) -> Result<ActuatorValue, ValidationError> {
        if !self.limits.contains(value) {
            return Err(ValidationError::OutOfRange {
                field: "set-point",
                value: value.to_string(),
                lower: self.limits.lower().to_string(),
                upper: self.limits.upper().to_string(),
            });
        }
        Ok(ActuatorValue::Decimal(value))
    }
}

impl_actuator_kind!(SetDecimalActuator, "SetDecimalActuator", "SetDecimal");

#[cfg(test)]
mod tests {
    use super::*;

    fn common(category: &str) -> Vec<ActuatorArg> {
        vec![
            DeviceId::new("device-1").unwrap().into(),
            ModelPath::new("model").unwrap().into(),
            ActuatorTypeId::new(category).unwrap().into(),
            ActuatorName::new("actuator").unwrap().into(),
        ]
    }

    #[test]
    fn should_command_switch_freely() {
        let Actuator::Switch(switch) = SwitchActuator::build(&common("Switch")).unwrap().unwrap()
        else {
            panic!("expected a switch");
        };
        assert_eq!(switch.switch(true), ActuatorValue::Switch(true));
    }

    #[test]
    fn should_reject_blind_position_above_hundred() {
        let blind = BlindRollerActuator::new(
            DeviceId::new("device-1").unwrap(),
            ModelPath::new("model").unwrap(),
            ActuatorTypeId::new("BlindRoller").unwrap(),
            ActuatorName::new("Blind").unwrap(),
        )
        .unwrap();
        assert_eq!(blind.set_position(100).unwrap(), ActuatorValue::Position(100));
        assert!(matches!(
            blind.set_position(101),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn should_keep_integer_set_point_within_limits() {
        let mut args = common("SetInteger");
        args.push(IntegerLimits::new(16, 28).unwrap().into());
        let Actuator::SetInteger(actuator) = SetIntegerActuator::build(&args).unwrap().unwrap()
        else {
            panic!("expected a set-integer actuator");
        };
        assert_eq!(actuator.set_value(20).unwrap(), ActuatorValue::Integer(20));
        assert!(actuator.set_value(29).is_err());
    }

    #[test]
    fn should_keep_decimal_set_point_within_limits() {
        let actuator = SetDecimalActuator::new(
            DeviceId::new("device-1").unwrap(),
            ModelPath::new("model").unwrap(),
            ActuatorTypeId::new("SetDecimal").unwrap(),
            ActuatorName::new("Dimmer").unwrap(),
            DecimalLimits::new(0.0, 1.0).unwrap(),
        )
        .unwrap();
        assert_eq!(actuator.set_value(0.5).unwrap(), ActuatorValue::Decimal(0.5));
        assert!(actuator.set_value(1.5).is_err());
    }

    #[test]
    fn should_not_match_integer_actuator_with_decimal_limits() {
        let mut args = common("SetInteger");
        args.push(DecimalLimits::new(0.0, 1.0).unwrap().into());
        assert!(SetIntegerActuator::build(&args).is_none());
    }

    #[test]
    fn should_reject_wrong_category() {
        let result = SwitchActuator::build(&common("BlindRoller")).unwrap();
        assert!(matches!(
            result,
            Err(HearthError::Validation(ValidationError::WrongCategory {
                expected: "Switch",
                ..
            }))
        ));
    }

    #[test]
    fn should_keep_known_id_and_match_registry_build() {
        let id = ActuatorId::new("blind-1").unwrap();
        let direct = BlindRollerActuator::with_id(
            id.clone(),
            DeviceId::new("device-1").unwrap(),
            ModelPath::new("model").unwrap(),
            ActuatorTypeId::new("BlindRoller").unwrap(),
            ActuatorName::new("actuator").unwrap(),
        )
        .unwrap();
        assert_eq!(direct.id(), &id);

        let mut args = common("BlindRoller");
        args.push(id.into());
        let built = BlindRollerActuator::build(&args).unwrap().unwrap();
        assert_eq!(built, Actuator::from(direct));
    }

    #[test]
    fn should_reject_wrong_category_with_known_id() {
        let result = SetDecimalActuator::with_id(
            ActuatorId::new("valve-1").unwrap(),
            DeviceId::new("device-1").unwrap(),
            ModelPath::new("model").unwrap(),
            ActuatorTypeId::new("SetInteger").unwrap(),
            ActuatorName::new("actuator").unwrap(),
            DecimalLimits::new(0.0, 1.0).unwrap(),
        );
        assert!(matches!(
            result,
            Err(ValidationError::WrongCategory {
                expected: "SetDecimal",
                ..
            })
        ));
    }
}
