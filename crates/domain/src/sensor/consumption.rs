//! Energy meter accumulating consumption over a date period.

use super::{Sensor, SensorArg, SensorCore, SensorKind, SensorValue, split_common};
use crate::error::{HearthError, ValidationError};
use crate::id::{DeviceId, SensorId};
use crate::value::{DatePeriod, ModelPath, SensorName, SensorTypeId};

/// Constant load assumed by the simulated meter, in watts.
const SIMULATED_LOAD_W: f64 = 100.0;

/// Electric consumption in watt-hours over a [`DatePeriod`].
#[derive(Debug, Clone, PartialEq)]
pub struct ElectricConsumptionWhSensor {
    core: SensorCore,
    period: DatePeriod,
}

impl ElectricConsumptionWhSensor {
    /// Create a sensor with a freshly generated id.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::WrongCategory`] unless `sensor_type_id` is `ElectricConsumptionWh`.
    pub fn new(
        device_id: DeviceId,
        model_path: ModelPath,
        sensor_type_id: SensorTypeId,
        name: SensorName,
        period: DatePeriod,
    ) -> Result<Self, ValidationError> {
        Self::with_id(
            SensorId::generate(),
            device_id,
            model_path,
            sensor_type_id,
            name,
            period,
        )
    }

    /// Rebuild a sensor with a known id.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::WrongCategory`] unless `sensor_type_id` is `ElectricConsumptionWh`.
    pub fn with_id(
        id: SensorId,
        device_id: DeviceId,
        model_path: ModelPath,
        sensor_type_id: SensorTypeId,
        name: SensorName,
        period: DatePeriod,
    ) -> Result<Self, ValidationError> {
        let core = SensorCore::new(
            Self::CATEGORY,
            id,
            device_id,
            model_path,
            sensor_type_id,
            name,
        )?;
        Ok(Self { core, period })
    }

    /// Registry builder: `[common; 4], period` or `[common; 4], period, sensor_id`.
    pub(crate) fn build(args: &[SensorArg]) -> Option<Result<Sensor, HearthError>> {
        let (common, rest) = split_common(args)?;
        let (period, id) = match rest {
            [SensorArg::DatePeriod(period)] => (*period, SensorId::generate()),
            [SensorArg::DatePeriod(period), SensorArg::SensorId(id)] => (*period, id.clone()),
            _ => return None,
        };
        Some(
            common
                .into_core(Self::CATEGORY, id)
                .map(|core| Sensor::from(Self { core, period })),
        )
    }

    #[must_use]
    pub fn period(&self) -> &DatePeriod {
        &self.period
    }
}

impl SensorKind for ElectricConsumptionWhSensor {
    const TYPE_ID: &'static str = "ElectricConsumptionWhSensor";
    const CATEGORY: &'static str = "ElectricConsumptionWh";

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

    #[allow(clippy::cast_precision_loss)]
    fn value(&self) -> SensorValue {
        let seconds = (self.period.end() - self.period.start()).num_seconds();
        SensorValue::ElectricConsumption(SIMULATED_LOAD_W * seconds as f64 / 3600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn period(hours: u32) -> DatePeriod {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let end = start + chrono::Duration::hours(i64::from(hours));
        DatePeriod::new(start, end).unwrap()
    }

    fn args() -> Vec<SensorArg> {
        vec![
            DeviceId::new("1").unwrap().into(),
            ModelPath::new("ElectricConsumptionWhSensor").unwrap().into(),
            SensorTypeId::new("ElectricConsumptionWh").unwrap().into(),
            SensorName::new("Main meter").unwrap().into(),
            period(2).into(),
        ]
    }

    #[test]
    fn should_accumulate_simulated_load_over_period() {
        let Sensor::ElectricConsumptionWh(sensor) =
            ElectricConsumptionWhSensor::build(&args()).unwrap().unwrap()
        else {
            panic!("expected an electric consumption sensor");
        };
        assert_eq!(sensor.value(), SensorValue::ElectricConsumption(200.0));
        assert_eq!(sensor.period(), &period(2));
    }

    #[test]
    fn should_keep_stored_id_when_rebuilt() {
        let mut args = args();
        args.push(SensorId::new("meter-1").unwrap().into());
        let sensor = ElectricConsumptionWhSensor::build(&args).unwrap().unwrap();
        assert_eq!(sensor.id().as_str(), "meter-1");
    }

    #[test]
    fn should_not_match_when_extra_is_gps() {
        let mut args = args();
        args[4] = crate::value::Gps::new(0.0, 0.0).unwrap().into();
        assert!(ElectricConsumptionWhSensor::build(&args).is_none());
    }
}
