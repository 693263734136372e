//! Astronomical sensors computing sun times from their GPS position.

use chrono::{NaiveDate, NaiveTime, Utc};

use super::{Sensor, SensorArg, SensorCore, SensorKind, SensorValue, solar, split_common};
use crate::error::{HearthError, ValidationError};
use crate::id::{DeviceId, SensorId};
use crate::value::{Gps, ModelPath, SensorName, SensorTypeId};

macro_rules! sun_time_sensor {
    ($(#[doc = $doc:expr])* $name:ident, $type_id:literal, $category:literal, $compute:path) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            core: SensorCore,
            gps: Gps,
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
                gps: Gps,
            ) -> Result<Self, ValidationError> {
                Self::with_id(
                    SensorId::generate(),
                    device_id,
                    model_path,
                    sensor_type_id,
                    name,
                    gps,
                )
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
                gps: Gps,
            ) -> Result<Self, ValidationError> {
                let core =
                    SensorCore::new($category, id, device_id, model_path, sensor_type_id, name)?;
                Ok(Self { core, gps })
            }

            /// Registry builder: `[common; 4], gps` or `[common; 4], gps, sensor_id`.
            pub(crate) fn build(args: &[SensorArg]) -> Option<Result<Sensor, HearthError>> {
                let (common, rest) = split_common(args)?;
                let (gps, id) = match rest {
                    [SensorArg::Gps(gps)] => (*gps, SensorId::generate()),
                    [SensorArg::Gps(gps), SensorArg::SensorId(id)] => (*gps, id.clone()),
                    _ => return None,
                };
                Some(
                    common
                        .into_core($category, id)
                        .map(|core| Sensor::from(Self { core, gps })),
                )
            }

            #[must_use]
            pub fn gps(&self) -> &Gps {
                &self.gps
            }

            /// Time of the event on `date`, in UTC.
            #[must_use]
            pub fn time_on(&self, date: NaiveDate) -> Option<NaiveTime> {
                $compute(date, &self.gps)
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
                SensorValue::SunTime(self.time_on(Utc::now().date_naive()))
            }
        }
    };
}

sun_time_sensor!(
    /// Reports today's sunrise at the sensor's location.
    SunriseTimeSensor,
    "SunriseTimeSensor",
    "SunriseTime",
    solar::sunrise
);

sun_time_sensor!(
    /// Reports today's sunset at the sensor's location.
    SunsetTimeSensor,
    "SunsetTimeSensor",
    "SunsetTime",
    solar::sunset
);
