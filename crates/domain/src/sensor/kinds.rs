//! Sensor kinds without kind-specific attributes.
//!
//! These kinds have no hardware driver behind them yet and report fixed
//! simulated readings.

use super::{Sensor, SensorArg, SensorCore, SensorKind, SensorValue, split_common};
use crate::error::{HearthError, ValidationError};
use crate::id::{DeviceId, SensorId};
use crate::value::{ModelPath, SensorName, SensorTypeId};

macro_rules! plain_sensor {
    (
        $(#[doc = $doc:expr])*
        $name:ident, $type_id:literal, $category:literal, $value:expr
    ) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            core: SensorCore,
        }

        impl $name {
            /// Create a sensor with a freshly generated id.
            ///
            /// # Errors
            ///
            #[doc = concat!("Returns [`ValidationError::WrongCategory`] unless `sensor_type_id` is `", $category, "`.")]
            pub fn new(
                device_id: DeviceId,
                model_path: ModelPath,
                sensor_type_id: SensorTypeId,
                name: SensorName,
            ) -> Result<Self, ValidationError> {
                Self::with_id(SensorId::generate(), device_id, model_path, sensor_type_id, name)
            }

            /// Rebuild a sensor with a known id.
            ///
            /// # Errors
            ///
            #[doc = concat!("Returns [`ValidationError::WrongCategory`] unless `sensor_type_id` is `", $category, "`.")]
            pub fn with_id(
                id: SensorId,
                device_id: DeviceId,
                model_path: ModelPath,
                sensor_type_id: SensorTypeId,
                name: SensorName,
            ) -> Result<Self, ValidationError> {
                let core =
                    SensorCore::new($category, id, device_id, model_path, sensor_type_id, name)?;
                Ok(Self { core })
            }

            /// Registry builder: `[common; 4]` or `[common; 4], sensor_id`.
            pub(crate) fn build(args: &[SensorArg]) -> Option<Result<Sensor, HearthError>> {
                let (common, rest) = split_common(args)?;
                let id = match rest {
                    [] => SensorId::generate(),
                    [SensorArg::SensorId(id)] => id.clone(),
                    _ => return None,
                };
                Some(
                    common
                        .into_core($category, id)
                        .map(|core| Sensor::from(Self { core })),
                )
            }
        }

        impl SensorKind for $name {
            const TYPE_ID: &'static str = $type_id;
            const CATEGORY: &'static str = $category;

            fn id(&self) -> &SensorId {
                self.core.id()
            }

            fn device_id(&self) -> &DeviceId {
                self.core.device_id()
            }

            fn model_path(&self) -> &ModelPath {
                self.core.model_path()
            }

            fn sensor_type_id(&self) -> &SensorTypeId {
                self.core.sensor_type_id()
            }

            fn name(&self) -> &SensorName {
                self.core.name()
            }

            fn value(&self) -> SensorValue {
                $value
            }
        }
    };
}

plain_sensor!(
    /// Ambient air temperature.
    TemperatureSensor,
    "TemperatureSensor",
    "Temperature",
    SensorValue::Temperature(21.5)
);

plain_sensor!(
    /// Relative humidity.
    HumiditySensor,
    "HumiditySensor",
    "Humidity",
    SensorValue::Humidity(45.0)
);

plain_sensor!(
    DewPointSensor,
    "DewPointSensor",
    "DewPoint",
    SensorValue::DewPoint(9.3)
);

plain_sensor!(
    /// Outdoor anemometer with wind vane.
    WindSensor,
    "WindSensor",
    "Wind",
    SensorValue::Wind {
        speed: 12.0,
        direction: 270.0,
    }
);

plain_sensor!(
    /// Binary contact (door, window, wall switch).
    SwitchSensor,
    "SwitchSensor",
    "Switch",
    SensorValue::Switch(false)
);

plain_sensor!(
    SolarIrradianceSensor,
    "SolarIrradianceSensor",
    "SolarIrradiance",
    SensorValue::SolarIrradiance(4500.0)
);

plain_sensor!(
    /// Position of a blind or valve, 0 (closed) to 100 (open).
    PercentagePositionSensor,
    "PercentagePositionSensor",
    "PercentagePosition",
    SensorValue::PercentagePosition(50)
);

plain_sensor!(
    InstantPowerConsumptionSensor,
    "InstantPowerConsumptionSensor",
    "InstantPowerConsumption",
    SensorValue::InstantPower(230.0)
);

plain_sensor!(
    AveragePowerConsumptionSensor,
    "AveragePowerConsumptionSensor",
    "AveragePowerConsumption",
    SensorValue::AveragePower(180.0)
);
