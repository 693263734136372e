//! The set of sensor kinds hearth knows how to build.

use super::{
    AveragePowerConsumptionSensor, DewPointSensor, ElectricConsumptionWhSensor, HumiditySensor,
    InstantPowerConsumptionSensor, PercentagePositionSensor, SensorKind, SensorRegistry,
    SolarIrradianceSensor, SunriseTimeSensor, SunsetTimeSensor, SwitchSensor, TemperatureSensor,
    WindSensor,
};
use crate::error::HearthError;
use crate::registry::{BuildFn, MIN_ARGS};

/// Register `build` for a kind with `extras` kind-specific arguments, both
/// with and without a trailing stored id.
fn register<K: SensorKind>(
    registry: &mut SensorRegistry,
    extras: usize,
    build: BuildFn<super::Sensor, super::SensorArg>,
) -> Result<(), HearthError> {
    registry.register(K::TYPE_ID, MIN_ARGS + extras, build)?;
    registry.register(K::TYPE_ID, MIN_ARGS + extras + 1, build)
}

/// Register every built-in sensor kind into `registry`.
///
/// # Errors
///
/// Returns [`HearthError::DuplicateBuilder`] if `registry` already holds one
/// of the built-in identifiers.
pub fn register_builtin(registry: &mut SensorRegistry) -> Result<(), HearthError> {
    register::<TemperatureSensor>(registry, 0, TemperatureSensor::build)?;
    register::<HumiditySensor>(registry, 0, HumiditySensor::build)?;
    register::<DewPointSensor>(registry, 0, DewPointSensor::build)?;
    register::<WindSensor>(registry, 0, WindSensor::build)?;
    register::<SwitchSensor>(registry, 0, SwitchSensor::build)?;
    register::<SolarIrradianceSensor>(registry, 0, SolarIrradianceSensor::build)?;
    register::<PercentagePositionSensor>(registry, 0, PercentagePositionSensor::build)?;
    register::<InstantPowerConsumptionSensor>(registry, 0, InstantPowerConsumptionSensor::build)?;
    register::<AveragePowerConsumptionSensor>(registry, 0, AveragePowerConsumptionSensor::build)?;
    register::<ElectricConsumptionWhSensor>(registry, 1, ElectricConsumptionWhSensor::build)?;
    register::<SunriseTimeSensor>(registry, 1, SunriseTimeSensor::build)?;
    register::<SunsetTimeSensor>(registry, 1, SunsetTimeSensor::build)
}

/// A registry holding every built-in sensor kind.
///
/// # Errors
///
/// Returns [`HearthError::DuplicateBuilder`] if two built-in kinds share an identifier.
pub fn sensor_registry() -> Result<SensorRegistry, HearthError> {
    let mut registry = SensorRegistry::new();
    register_builtin(&mut registry)?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::error::ValidationError;
    use crate::id::{DeviceId, SensorId};
    use crate::sensor::{Sensor, SensorArg};
    use crate::value::{DatePeriod, Gps, ModelPath, SensorName, SensorTypeId};

    /// `(identifier, category, extra argument)` for every built-in kind.
    fn kinds() -> Vec<(&'static str, &'static str, Option<SensorArg>)> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let period = DatePeriod::new(start, start + chrono::Duration::days(1)).unwrap();
        let gps = Gps::new(41.15, -8.61).unwrap();
        vec![
            ("TemperatureSensor", "Temperature", None),
            ("HumiditySensor", "Humidity", None),
            ("DewPointSensor", "DewPoint", None),
            ("WindSensor", "Wind", None),
            ("SwitchSensor", "Switch", None),
            ("SolarIrradianceSensor", "SolarIrradiance", None),
            ("PercentagePositionSensor", "PercentagePosition", None),
            (
                "InstantPowerConsumptionSensor",
                "InstantPowerConsumption",
                None,
            ),
            (
                "AveragePowerConsumptionSensor",
                "AveragePowerConsumption",
                None,
            ),
            (
                "ElectricConsumptionWhSensor",
                "ElectricConsumptionWh",
                Some(period.into()),
            ),
            ("SunriseTimeSensor", "SunriseTime", Some(gps.into())),
            ("SunsetTimeSensor", "SunsetTime", Some(gps.into())),
        ]
    }

    fn args(
        type_id: &str,
        category: &str,
        extra: Option<SensorArg>,
        id: Option<&str>,
    ) -> Vec<SensorArg> {
        let mut args: Vec<SensorArg> = vec![
            DeviceId::new("device-1").unwrap().into(),
            ModelPath::new(type_id).unwrap().into(),
            SensorTypeId::new(category).unwrap().into(),
            SensorName::new("sensor").unwrap().into(),
        ];
        args.extend(extra);
        if let Some(id) = id {
            args.push(SensorId::new(id).unwrap().into());
        }
        args
    }

    #[test]
    fn should_register_twelve_kinds() {
        let registry = sensor_registry().unwrap();
        assert_eq!(registry.len(), 12);
        assert_eq!(registry.arities("TemperatureSensor"), vec![4, 5]);
        assert_eq!(registry.arities("SunriseTimeSensor"), vec![5, 6]);
        assert_eq!(registry.arities("ElectricConsumptionWhSensor"), vec![5, 6]);
    }

    #[test]
    fn should_build_every_kind_with_matching_accessors() {
        let registry = sensor_registry().unwrap();
        for (type_id, category, extra) in kinds() {
            let sensor = registry
                .build(type_id, &args(type_id, category, extra, None))
                .unwrap()
                .unwrap_or_else(|| panic!("{type_id} should resolve"));
            assert_eq!(sensor.type_id(), type_id);
            assert_eq!(sensor.device_id().as_str(), "device-1");
            assert_eq!(sensor.model_path().as_str(), type_id);
            assert_eq!(sensor.sensor_type_id().as_str(), category);
            assert_eq!(sensor.name().as_str(), "sensor");
        }
    }

    #[test]
    fn should_build_every_kind_with_stored_id() {
        let registry = sensor_registry().unwrap();
        for (type_id, category, extra) in kinds() {
            let sensor = registry
                .build(type_id, &args(type_id, category, extra, Some("stored-1")))
                .unwrap()
                .unwrap_or_else(|| panic!("{type_id} should resolve"));
            assert_eq!(sensor.id().as_str(), "stored-1");
        }
    }

    #[test]
    fn should_return_none_for_wrong_arity_of_every_kind() {
        let registry = sensor_registry().unwrap();
        for (type_id, category, extra) in kinds() {
            let mut args = args(type_id, category, extra, Some("stored-1"));
            args.push(SensorName::new("surplus").unwrap().into());
            assert!(registry.build(type_id, &args).unwrap().is_none(), "{type_id}");
        }
    }

    #[test]
    fn should_return_none_for_unknown_identifier() {
        let registry = sensor_registry().unwrap();
        let args = args("WrongSensor", "Temperature", None, None);
        assert!(registry.build("WrongSensor", &args).unwrap().is_none());
    }

    #[test]
    fn should_return_none_when_extra_has_wrong_type() {
        let registry = sensor_registry().unwrap();
        let args = args(
            "SunriseTimeSensor",
            "SunriseTime",
            Some(SensorName::new("not gps").unwrap().into()),
            None,
        );
        assert!(registry.build("SunriseTimeSensor", &args).unwrap().is_none());
    }

    #[test]
    fn should_fail_with_fewer_than_four_arguments() {
        let registry = sensor_registry().unwrap();
        let mut args = args("TemperatureSensor", "Temperature", None, None);
        args.remove(2);
        let err = registry.build("TemperatureSensor", &args).unwrap_err();
        assert_eq!(err.to_string(), "At least 4 parameters are required.");
    }

    #[test]
    fn should_build_temperature_sensor_for_temperature_category() {
        let registry = sensor_registry().unwrap();
        let sensor = registry
            .build(
                "TemperatureSensor",
                &args("TemperatureSensor", "Temperature", None, None),
            )
            .unwrap()
            .unwrap();
        assert!(matches!(sensor, Sensor::Temperature(_)));
        assert_eq!(sensor.sensor_type_id().as_str(), "Temperature");
    }

    #[test]
    fn should_refuse_temperature_sensor_for_humidity_category() {
        let registry = sensor_registry().unwrap();
        let err = registry
            .build(
                "TemperatureSensor",
                &args("TemperatureSensor", "Humidity", None, None),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            HearthError::Validation(ValidationError::WrongCategory {
                expected: "Temperature",
                ..
            })
        ));
        assert!(err.to_string().contains(r#"must be "Temperature""#));
    }

    #[test]
    fn should_refuse_to_register_builtins_twice() {
        let mut registry = sensor_registry().unwrap();
        assert!(matches!(
            register_builtin(&mut registry),
            Err(HearthError::DuplicateBuilder { .. })
        ));
    }
}
