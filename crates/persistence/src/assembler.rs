//! Reconstruction of aggregates from stored records.
//!
//! Each attribute is rebuilt as its value object, re-running validation, and
//! the aggregate itself is produced by its factory: the kind registry for
//! sensors and actuators, the builder for devices. The record's model path is
//! the registry key.

use std::str::FromStr;
use std::sync::Arc;

use chrono::NaiveDateTime;

use hearth_domain::actuator::{Actuator, ActuatorArg, ActuatorRegistry};
use hearth_domain::device::Device;
use hearth_domain::error::{HearthError, ValidationError};
use hearth_domain::id::{ActuatorId, DeviceId, RoomId, SensorId};
use hearth_domain::sensor::{Sensor, SensorArg, SensorRegistry};
use hearth_domain::value::{
    ActuatorName, ActuatorTypeId, DatePeriod, DecimalLimits, DeviceName, DeviceTypeId, Gps,
    IntegerLimits, ModelPath, SensorName, SensorTypeId,
};

use crate::data_model::{ActuatorDataModel, DeviceDataModel, SensorDataModel};

/// Turns records of one aggregate type back into aggregates.
pub trait DataModelAssembler {
    type DataModel;
    type Aggregate;

    /// Rebuild one aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError`] when the record fails validation or names a
    /// kind the factory cannot build.
    fn to_domain(&self, data_model: &Self::DataModel) -> Result<Self::Aggregate, HearthError>;

    /// Rebuild every record, keeping their order. Stops at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`DataModelAssembler::to_domain`].
    fn to_domain_all(
        &self,
        data_models: &[Self::DataModel],
    ) -> Result<Vec<Self::Aggregate>, HearthError> {
        data_models.iter().map(|m| self.to_domain(m)).collect()
    }
}

fn both<'a>(
    field: &'static str,
    first: Option<&'a str>,
    second: Option<&'a str>,
) -> Result<Option<(&'a str, &'a str)>, ValidationError> {
    match (first, second) {
        (None, None) => Ok(None),
        (Some(a), Some(b)) => Ok(Some((a, b))),
        (a, b) => Err(ValidationError::Malformed {
            field,
            value: format!("{}/{}", a.unwrap_or("null"), b.unwrap_or("null")),
        }),
    }
}

fn parse<T: FromStr>(field: &'static str, value: &str) -> Result<T, ValidationError> {
    value.parse().map_err(|_| ValidationError::Malformed {
        field,
        value: value.to_string(),
    })
}

fn gps(data_model: &SensorDataModel) -> Result<Option<Gps>, ValidationError> {
    let Some((latitude, longitude)) = both(
        "gps",
        data_model.latitude.as_deref(),
        data_model.longitude.as_deref(),
    )?
    else {
        return Ok(None);
    };
    Gps::new(parse("latitude", latitude)?, parse("longitude", longitude)?).map(Some)
}

fn date_period(data_model: &SensorDataModel) -> Result<Option<DatePeriod>, ValidationError> {
    let Some((start, end)) = both(
        "date period",
        data_model.start_date.as_deref(),
        data_model.end_date.as_deref(),
    )?
    else {
        return Ok(None);
    };
    let start: NaiveDateTime = parse("start date", start)?;
    let end: NaiveDateTime = parse("end date", end)?;
    DatePeriod::new(start, end).map(Some)
}

/// Rebuilds sensors through a shared [`SensorRegistry`].
#[derive(Debug, Clone)]
pub struct SensorDataModelAssembler {
    registry: Arc<SensorRegistry>,
}

impl SensorDataModelAssembler {
    #[must_use]
    pub fn new(registry: Arc<SensorRegistry>) -> Self {
        Self { registry }
    }
}

impl DataModelAssembler for SensorDataModelAssembler {
    type DataModel = SensorDataModel;
    type Aggregate = Sensor;

    fn to_domain(&self, data_model: &SensorDataModel) -> Result<Sensor, HearthError> {
        let model_path = ModelPath::new(data_model.model_path.as_str())?;
        let mut args: Vec<SensorArg> = vec![
            DeviceId::new(data_model.device_id.as_str())?.into(),
            model_path.clone().into(),
            SensorTypeId::new(data_model.sensor_type_id.as_str())?.into(),
            SensorName::new(data_model.sensor_name.as_str())?.into(),
        ];
        args.extend(gps(data_model)?.map(SensorArg::from));
        args.extend(date_period(data_model)?.map(SensorArg::from));
        args.push(SensorId::new(data_model.sensor_id.as_str())?.into());

        self.registry
            .build(model_path.as_str(), &args)?
            .ok_or_else(|| HearthError::UnsupportedKind {
                type_id: model_path.into(),
            })
    }
}

/// Rebuilds actuators through a shared [`ActuatorRegistry`].
#[derive(Debug, Clone)]
pub struct ActuatorDataModelAssembler {
    registry: Arc<ActuatorRegistry>,
}

impl ActuatorDataModelAssembler {
    #[must_use]
    pub fn new(registry: Arc<ActuatorRegistry>) -> Self {
        Self { registry }
    }
}

fn integer_limits(
    data_model: &ActuatorDataModel,
) -> Result<Option<IntegerLimits>, ValidationError> {
    match (data_model.integer_lower_limit, data_model.integer_upper_limit) {
        (None, None) => Ok(None),
        (Some(lower), Some(upper)) => IntegerLimits::new(lower, upper).map(Some),
        (lower, upper) => Err(ValidationError::Malformed {
            field: "integer limits",
            value: format!("{lower:?}/{upper:?}"),
        }),
    }
}

fn decimal_limits(
    data_model: &ActuatorDataModel,
) -> Result<Option<DecimalLimits>, ValidationError> {
    match (data_model.decimal_lower_limit, data_model.decimal_upper_limit) {
        (None, None) => Ok(None),
        (Some(lower), Some(upper)) => DecimalLimits::new(lower, upper).map(Some),
        (lower, upper) => Err(ValidationError::Malformed {
            field: "decimal limits",
            value: format!("{lower:?}/{upper:?}"),
        }),
    }
}

impl DataModelAssembler for ActuatorDataModelAssembler {
    type DataModel = ActuatorDataModel;
    type Aggregate = Actuator;

    fn to_domain(&self, data_model: &ActuatorDataModel) -> Result<Actuator, HearthError> {
        let model_path = ModelPath::new(data_model.model_path.as_str())?;
        let mut args: Vec<ActuatorArg> = vec![
            DeviceId::new(data_model.device_id.as_str())?.into(),
            model_path.clone().into(),
            ActuatorTypeId::new(data_model.actuator_type_id.as_str())?.into(),
            ActuatorName::new(data_model.actuator_name.as_str())?.into(),
        ];
        args.extend(integer_limits(data_model)?.map(ActuatorArg::from));
        args.extend(decimal_limits(data_model)?.map(ActuatorArg::from));
        args.push(ActuatorId::new(data_model.actuator_id.as_str())?.into());

        self.registry
            .build(model_path.as_str(), &args)?
            .ok_or_else(|| HearthError::UnsupportedKind {
                type_id: model_path.into(),
            })
    }
}

/// Rebuilds devices through [`Device::builder`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceDataModelAssembler;

impl DataModelAssembler for DeviceDataModelAssembler {
    type DataModel = DeviceDataModel;
    type Aggregate = Device;

    fn to_domain(&self, data_model: &DeviceDataModel) -> Result<Device, HearthError> {
        Device::builder()
            .id(DeviceId::new(data_model.device_id.as_str())?)
            .room_id(RoomId::new(data_model.room_id.as_str())?)
            .name(DeviceName::new(data_model.device_name.as_str())?)
            .device_type_id(DeviceTypeId::new(data_model.device_type_id.as_str())?)
            .active(data_model.active)
            .build()
    }
}

impl From<&Device> for DeviceDataModel {
    fn from(device: &Device) -> Self {
        Self {
            device_id: device.id.to_string(),
            room_id: device.room_id.to_string(),
            device_name: device.name.to_string(),
            device_type_id: device.device_type_id.to_string(),
            active: device.active,
        }
    }
}
