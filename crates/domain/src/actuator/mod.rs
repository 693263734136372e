//! Actuators: controllable outputs attached to a device.
//!
//! Mirrors the sensor model: each kind implements [`ActuatorKind`], the
//! [`Actuator`] enum closes over them and [`Actuator::accept`] dispatches to
//! the matching [`ActuatorVisitor`] method.

pub mod catalogue;
mod kinds;

use std::fmt;

pub use kinds::{BlindRollerActuator, SetDecimalActuator, SetIntegerActuator, SwitchActuator};

use crate::error::{HearthError, ValidationError};
use crate::id::{ActuatorId, DeviceId};
use crate::registry::Registry;
use crate::value::{ActuatorName, ActuatorTypeId, DecimalLimits, IntegerLimits, ModelPath};

/// Registry producing [`Actuator`]s from [`ActuatorArg`] lists.
pub type ActuatorRegistry = Registry<Actuator, ActuatorArg>;

/// Capabilities every actuator kind exposes.
pub trait ActuatorKind {
    /// Registry key of the kind.
    const TYPE_ID: &'static str;
    /// Category the kind's `actuator_type_id` must equal.
    const CATEGORY: &'static str;

    fn id(&self) -> &ActuatorId;
    fn device_id(&self) -> &DeviceId;
    fn model_path(&self) -> &ModelPath;
    fn actuator_type_id(&self) -> &ActuatorTypeId;
    fn name(&self) -> &ActuatorName;
}

/// Attributes shared by every actuator kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActuatorCore {
    id: ActuatorId,
    device_id: DeviceId,
    model_path: ModelPath,
    actuator_type_id: ActuatorTypeId,
    name: ActuatorName,
}

impl ActuatorCore {
    /// # Errors
    ///
    /// Returns [`ValidationError::WrongCategory`] when `actuator_type_id` is not `category`.
    pub fn new(
        category: &'static str,
        id: ActuatorId,
        device_id: DeviceId,
        model_path: ModelPath,
        actuator_type_id: ActuatorTypeId,
        name: ActuatorName,
    ) -> Result<Self, ValidationError> {
        if actuator_type_id.as_str() != category {
            return Err(ValidationError::WrongCategory {
                field: "actuator type",
                expected: category,
                actual: actuator_type_id.into(),
            });
        }
        Ok(Self {
            id,
            device_id,
            model_path,
            actuator_type_id,
            name,
        })
    }

    #[must_use]
    pub fn id(&self) -> &ActuatorId {
        &self.id
    }

    #[must_use]
    pub fn device_id(&self) -> &DeviceId {
        &self.device_id
    }

    #[must_use]
    pub fn model_path(&self) -> &ModelPath {
        &self.model_path
    }

    #[must_use]
    pub fn actuator_type_id(&self) -> &ActuatorTypeId {
        &self.actuator_type_id
    }

    #[must_use]
    pub fn name(&self) -> &ActuatorName {
        &self.name
    }
}

/// One positional argument handed to an actuator builder.
///
/// Builders expect `device_id, model_path, actuator_type_id, name`, then the
/// kind's limits (if any), then optionally the `actuator_id` of a stored actuator.
#[derive(Debug, Clone, PartialEq)]
pub enum ActuatorArg {
    DeviceId(DeviceId),
    ModelPath(ModelPath),
    ActuatorTypeId(ActuatorTypeId),
    ActuatorName(ActuatorName),
    IntegerLimits(IntegerLimits),
    DecimalLimits(DecimalLimits),
    ActuatorId(ActuatorId),
}

macro_rules! impl_from_for_arg {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for ActuatorArg {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_for_arg!(
    DeviceId,
    ModelPath,
    ActuatorTypeId,
    ActuatorName,
    IntegerLimits,
    DecimalLimits,
    ActuatorId
);

struct Common {
    device_id: DeviceId,
    model_path: ModelPath,
    actuator_type_id: ActuatorTypeId,
    name: ActuatorName,
}

impl Common {
    fn into_core(
        self,
        category: &'static str,
        id: ActuatorId,
    ) -> Result<ActuatorCore, HearthError> {
        Ok(ActuatorCore::new(
            category,
            id,
            self.device_id,
            self.model_path,
            self.actuator_type_id,
            self.name,
        )?)
    }
}

fn split_common(args: &[ActuatorArg]) -> Option<(Common, &[ActuatorArg])> {
    let [
        ActuatorArg::DeviceId(device_id),
        ActuatorArg::ModelPath(model_path),
        ActuatorArg::ActuatorTypeId(actuator_type_id),
        ActuatorArg::ActuatorName(name),
        rest @ ..,
    ] = args
    else {
        return None;
    };
    Some((
        Common {
            device_id: device_id.clone(),
            model_path: model_path.clone(),
            actuator_type_id: actuator_type_id.clone(),
            name: name.clone(),
        },
        rest,
    ))
}

/// Value accepted by an actuator command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActuatorValue {
    Switch(bool),
    /// Percent open.
    Position(u8),
    Integer(i64),
    Decimal(f64),
}

impl fmt::Display for ActuatorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Switch(true) => f.write_str("on"),
            Self::Switch(false) => f.write_str("off"),
            Self::Position(v) => write!(f, "{v} %"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Decimal(v) => write!(f, "{v}"),
        }
    }
}

/// Per-kind callback invoked by [`Actuator::accept`].
pub trait ActuatorVisitor {
    type Output;

    fn visit_switch(&mut self, actuator: &SwitchActuator) -> Self::Output;
    fn visit_blind_roller(&mut self, actuator: &BlindRollerActuator) -> Self::Output;
    fn visit_set_integer(&mut self, actuator: &SetIntegerActuator) -> Self::Output;
    fn visit_set_decimal(&mut self, actuator: &SetDecimalActuator) -> Self::Output;
}

/// Any actuator kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Actuator {
    Switch(SwitchActuator),
    BlindRoller(BlindRollerActuator),
    SetInteger(SetIntegerActuator),
    SetDecimal(SetDecimalActuator),
}

macro_rules! for_each_kind {
    ($self:ident, $actuator:ident => $body:expr) => {
        match $self {
            Actuator::Switch($actuator) => $body,
            Actuator::BlindRoller($actuator) => $body,
            Actuator::SetInteger($actuator) => $body,
            Actuator::SetDecimal($actuator) => $body,
        }
    };
}

impl Actuator {
    /// Call the `visitor` method matching this actuator's kind.
    pub fn accept<V: ActuatorVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::Switch(a) => visitor.visit_switch(a),
            Self::BlindRoller(a) => visitor.visit_blind_roller(a),
            Self::SetInteger(a) => visitor.visit_set_integer(a),
            Self::SetDecimal(a) => visitor.visit_set_decimal(a),
        }
    }

    /// Registry key of the concrete kind.
    #[must_use]
    pub fn type_id(&self) -> &'static str {
        fn key<K: ActuatorKind>(_: &K) -> &'static str {
            K::TYPE_ID
        }
        for_each_kind!(self, a => key(a))
    }

    #[must_use]
    pub fn id(&self) -> &ActuatorId {
        for_each_kind!(self, a => a.id())
    }

    #[must_use]
    pub fn device_id(&self) -> &DeviceId {
        for_each_kind!(self, a => a.device_id())
    }

    #[must_use]
    pub fn model_path(&self) -> &ModelPath {
        for_each_kind!(self, a => a.model_path())
    }

    #[must_use]
    pub fn actuator_type_id(&self) -> &ActuatorTypeId {
        for_each_kind!(self, a => a.actuator_type_id())
    }

    #[must_use]
    pub fn name(&self) -> &ActuatorName {
        for_each_kind!(self, a => a.name())
    }
}

impl From<SwitchActuator> for Actuator {
    fn from(actuator: SwitchActuator) -> Self {
        Self::Switch(actuator)
    }
}

impl From<BlindRollerActuator> for Actuator {
    fn from(actuator: BlindRollerActuator) -> Self {
        Self::BlindRoller(actuator)
    }
}

impl From<SetIntegerActuator> for Actuator {
    fn from(actuator: SetIntegerActuator) -> Self {
        Self::SetInteger(actuator)
    }
}

impl From<SetDecimalActuator> for Actuator {
    fn from(actuator: SetDecimalActuator) -> Self {
        Self::SetDecimal(actuator)
    }
}
