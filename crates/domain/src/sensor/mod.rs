//! Sensors: read-only measuring points attached to a device.
//!
//! Each kind is its own struct implementing [`SensorKind`]. [`Sensor`] is the
//! closed set of kinds; [`Sensor::accept`] dispatches to the single
//! [`SensorVisitor`] method matching the concrete kind, which is how
//! persistence flattens a sensor without knowing its shape up front.
//!
//! New kinds are built through the [`SensorRegistry`] rather than by naming
//! their constructors: see [`catalogue::sensor_registry`].

pub mod catalogue;
mod consumption;
mod kinds;
pub mod solar;
mod sun_time;

use std::fmt;

use chrono::NaiveTime;

pub use consumption::ElectricConsumptionWhSensor;
pub use kinds::{
    AveragePowerConsumptionSensor, DewPointSensor, HumiditySensor, InstantPowerConsumptionSensor,
    PercentagePositionSensor, SolarIrradianceSensor, SwitchSensor, TemperatureSensor, WindSensor,
};
pub use sun_time::{SunriseTimeSensor, SunsetTimeSensor};

use crate::error::{HearthError, ValidationError};
use crate::id::{DeviceId, SensorId};
use crate::registry::Registry;
use crate::value::{DatePeriod, Gps, ModelPath, SensorName, SensorTypeId};

/// Registry producing [`Sensor`]s from [`SensorArg`] lists.
pub type SensorRegistry = Registry<Sensor, SensorArg>;

/// Capabilities every sensor kind exposes.
pub trait SensorKind {
    /// Registry key of the kind.
    const TYPE_ID: &'static str;
    /// Category the kind's `sensor_type_id` must equal.
    const CATEGORY: &'static str;

    fn id(&self) -> &SensorId;
    fn device_id(&self) -> &DeviceId;
    fn model_path(&self) -> &ModelPath;
    fn sensor_type_id(&self) -> &SensorTypeId;
    fn name(&self) -> &SensorName;

    /// Current reading.
    fn value(&self) -> SensorValue;
}

/// Attributes shared by every sensor kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorCore {
    id: SensorId,
    device_id: DeviceId,
    model_path: ModelPath,
    sensor_type_id: SensorTypeId,
    name: SensorName,
}

impl SensorCore {
    /// # Errors
    ///
    /// Returns [`ValidationError::WrongCategory`] when `sensor_type_id` is not `category`.
    pub fn new(
        category: &'static str,
        id: SensorId,
        device_id: DeviceId,
        model_path: ModelPath,
        sensor_type_id: SensorTypeId,
        name: SensorName,
    ) -> Result<Self, ValidationError> {
        if sensor_type_id.as_str() != category {
            return Err(ValidationError::WrongCategory {
                field: "sensor type",
                expected: category,
                actual: sensor_type_id.into(),
            });
        }
        Ok(Self {
            id,
            device_id,
            model_path,
            sensor_type_id,
            name,
        })
    }

    #[must_use]
    pub fn id(&self) -> &SensorId {
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
    pub fn sensor_type_id(&self) -> &SensorTypeId {
        &self.sensor_type_id
    }

    #[must_use]
    pub fn name(&self) -> &SensorName {
        &self.name
    }
}

/// One positional argument handed to a sensor builder.
///
/// Builders expect `device_id, model_path, sensor_type_id, name`, then the
/// kind's extra (if any), then optionally the `sensor_id` of a stored sensor.
#[derive(Debug, Clone, PartialEq)]
pub enum SensorArg {
    DeviceId(DeviceId),
    ModelPath(ModelPath),
    SensorTypeId(SensorTypeId),
    SensorName(SensorName),
    Gps(Gps),
    DatePeriod(DatePeriod),
    SensorId(SensorId),
}

macro_rules! impl_from_for_arg {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for SensorArg {
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
    SensorTypeId,
    SensorName,
    Gps,
    DatePeriod,
    SensorId
);

/// Split the four leading common arguments from the kind-specific tail.
fn split_common(args: &[SensorArg]) -> Option<(Common, &[SensorArg])> {
    let [
        SensorArg::DeviceId(device_id),
        SensorArg::ModelPath(model_path),
        SensorArg::SensorTypeId(sensor_type_id),
        SensorArg::SensorName(name),
        rest @ ..,
    ] = args
    else {
        return None;
    };
    Some((
        Common {
            device_id: device_id.clone(),
            model_path: model_path.clone(),
            sensor_type_id: sensor_type_id.clone(),
            name: name.clone(),
        },
        rest,
    ))
}

struct Common {
    device_id: DeviceId,
    model_path: ModelPath,
    sensor_type_id: SensorTypeId,
    name: SensorName,
}

impl Common {
    fn into_core(self, category: &'static str, id: SensorId) -> Result<SensorCore, HearthError> {
        Ok(SensorCore::new(
            category,
            id,
            self.device_id,
            self.model_path,
            self.sensor_type_id,
            self.name,
        )?)
    }
}

/// A reading produced by a sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SensorValue {
    /// Degrees Celsius.
    Temperature(f64),
    /// Relative humidity, percent.
    Humidity(f64),
    /// Degrees Celsius.
    DewPoint(f64),
    /// Speed in km/h, direction in degrees from north.
    Wind { speed: f64, direction: f64 },
    Switch(bool),
    /// Watts per square metre.
    SolarIrradiance(f64),
    /// Percent open.
    PercentagePosition(u8),
    /// Watts.
    InstantPower(f64),
    /// Watts.
    AveragePower(f64),
    /// Watt-hours.
    ElectricConsumption(f64),
    /// UTC time of day; `None` when the sun does not cross the horizon that day.
    SunTime(Option<NaiveTime>),
}

impl fmt::Display for SensorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature(v) | Self::DewPoint(v) => write!(f, "{v} °C"),
            Self::Humidity(v) => write!(f, "{v} %"),
            Self::Wind { speed, direction } => write!(f, "{speed} km/h at {direction}°"),
            Self::Switch(true) => f.write_str("on"),
            Self::Switch(false) => f.write_str("off"),
            Self::SolarIrradiance(v) => write!(f, "{v} W/m²"),
            Self::PercentagePosition(v) => write!(f, "{v} %"),
            Self::InstantPower(v) | Self::AveragePower(v) => write!(f, "{v} W"),
            Self::ElectricConsumption(v) => write!(f, "{v} Wh"),
            Self::SunTime(Some(time)) => write!(f, "{}", time.format("%H:%M")),
            Self::SunTime(None) => f.write_str("none"),
        }
    }
}

/// Per-kind callback invoked by [`Sensor::accept`].
pub trait SensorVisitor {
    type Output;

    fn visit_temperature(&mut self, sensor: &TemperatureSensor) -> Self::Output;
    fn visit_humidity(&mut self, sensor: &HumiditySensor) -> Self::Output;
    fn visit_dew_point(&mut self, sensor: &DewPointSensor) -> Self::Output;
    fn visit_wind(&mut self, sensor: &WindSensor) -> Self::Output;
    fn visit_switch(&mut self, sensor: &SwitchSensor) -> Self::Output;
    fn visit_solar_irradiance(&mut self, sensor: &SolarIrradianceSensor) -> Self::Output;
    fn visit_percentage_position(&mut self, sensor: &PercentagePositionSensor) -> Self::Output;
    fn visit_instant_power_consumption(
        &mut self,
        sensor: &InstantPowerConsumptionSensor,
    ) -> Self::Output;
    fn visit_average_power_consumption(
        &mut self,
        sensor: &AveragePowerConsumptionSensor,
    ) -> Self::Output;
    fn visit_electric_consumption_wh(&mut self, sensor: &ElectricConsumptionWhSensor)
    -> Self::Output;
    fn visit_sunrise_time(&mut self, sensor: &SunriseTimeSensor) -> Self::Output;
    fn visit_sunset_time(&mut self, sensor: &SunsetTimeSensor) -> Self::Output;
}

/// Any sensor kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Sensor {
    Temperature(TemperatureSensor),
    Humidity(HumiditySensor),
    DewPoint(DewPointSensor),
    Wind(WindSensor),
    Switch(SwitchSensor),
    SolarIrradiance(SolarIrradianceSensor),
    PercentagePosition(PercentagePositionSensor),
    InstantPowerConsumption(InstantPowerConsumptionSensor),
    AveragePowerConsumption(AveragePowerConsumptionSensor),
    ElectricConsumptionWh(ElectricConsumptionWhSensor),
    SunriseTime(SunriseTimeSensor),
    SunsetTime(SunsetTimeSensor),
}

macro_rules! for_each_kind {
    ($self:ident, $sensor:ident => $body:expr) => {
        match $self {
            Sensor::Temperature($sensor) => $body,
            Sensor::Humidity($sensor) => $body,
            Sensor::DewPoint($sensor) => $body,
            Sensor::Wind($sensor) => $body,
            Sensor::Switch($sensor) => $body,
            Sensor::SolarIrradiance($sensor) => $body,
            Sensor::PercentagePosition($sensor) => $body,
            Sensor::InstantPowerConsumption($sensor) => $body,
            Sensor::AveragePowerConsumption($sensor) => $body,
            Sensor::ElectricConsumptionWh($sensor) => $body,
            Sensor::SunriseTime($sensor) => $body,
            Sensor::SunsetTime($sensor) => $body,
        }
    };
}

impl Sensor {
    /// Call the `visitor` method matching this sensor's kind.
    pub fn accept<V: SensorVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::Temperature(s) => visitor.visit_temperature(s),
            Self::Humidity(s) => visitor.visit_humidity(s),
            Self::DewPoint(s) => visitor.visit_dew_point(s),
            Self::Wind(s) => visitor.visit_wind(s),
            Self::Switch(s) => visitor.visit_switch(s),
            Self::SolarIrradiance(s) => visitor.visit_solar_irradiance(s),
            Self::PercentagePosition(s) => visitor.visit_percentage_position(s),
            Self::InstantPowerConsumption(s) => visitor.visit_instant_power_consumption(s),
            Self::AveragePowerConsumption(s) => visitor.visit_average_power_consumption(s),
            Self::ElectricConsumptionWh(s) => visitor.visit_electric_consumption_wh(s),
            Self::SunriseTime(s) => visitor.visit_sunrise_time(s),
            Self::SunsetTime(s) => visitor.visit_sunset_time(s),
        }
    }

    /// Registry key of the concrete kind.
    #[must_use]
    pub fn type_id(&self) -> &'static str {
        fn key<K: SensorKind>(_: &K) -> &'static str {
            K::TYPE_ID
        }
        for_each_kind!(self, s => key(s))
    }

    #[must_use]
    pub fn id(&self) -> &SensorId {
        for_each_kind!(self, s => s.id())
    }

    #[must_use]
    pub fn device_id(&self) -> &DeviceId {
        for_each_kind!(self, s => s.device_id())
    }

    #[must_use]
    pub fn model_path(&self) -> &ModelPath {
        for_each_kind!(self, s => s.model_path())
    }

    #[must_use]
    pub fn sensor_type_id(&self) -> &SensorTypeId {
        for_each_kind!(self, s => s.sensor_type_id())
    }

    #[must_use]
    pub fn name(&self) -> &SensorName {
        for_each_kind!(self, s => s.name())
    }

    #[must_use]
    pub fn value(&self) -> SensorValue {
        for_each_kind!(self, s => s.value())
    }
}

macro_rules! impl_from_for_sensor {
    ($($variant:ident($kind:ident)),* $(,)?) => {
        $(
            impl From<$kind> for Sensor {
                fn from(sensor: $kind) -> Self {
                    Self::$variant(sensor)
                }
            }
        )*
    };
}

impl_from_for_sensor!(
    Temperature(TemperatureSensor),
    Humidity(HumiditySensor),
    DewPoint(DewPointSensor),
    Wind(WindSensor),
    Switch(SwitchSensor),
    SolarIrradiance(SolarIrradianceSensor),
    PercentagePosition(PercentagePositionSensor),
    InstantPowerConsumption(InstantPowerConsumptionSensor),
    AveragePowerConsumption(AveragePowerConsumptionSensor),
    ElectricConsumptionWh(ElectricConsumptionWhSensor),
    SunriseTime(SunriseTimeSensor),
    SunsetTime(SunsetTimeSensor),
);
