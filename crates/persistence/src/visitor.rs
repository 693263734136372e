//! Projection of sensors and actuators into their flat records.
//!
//! The visitors implement the domain visitor traits. Each visit rebuilds the
//! whole record from the visited kind, so a visitor reused across kinds never
//! carries extras over from an earlier visit.

use hearth_domain::actuator::{
    Actuator, ActuatorKind, ActuatorVisitor, BlindRollerActuator, SetDecimalActuator,
    SetIntegerActuator, SwitchActuator,
};
use hearth_domain::sensor::{
    AveragePowerConsumptionSensor, DewPointSensor, ElectricConsumptionWhSensor, HumiditySensor,
    InstantPowerConsumptionSensor, PercentagePositionSensor, Sensor, SensorKind, SensorVisitor,
    SolarIrradianceSensor, SunriseTimeSensor, SunsetTimeSensor, SwitchSensor, TemperatureSensor,
    WindSensor,
};
use hearth_domain::value::{DatePeriod, Gps};

use crate::data_model::{ActuatorDataModel, DATE_FORMAT, SensorDataModel};

/// Flattens any [`Sensor`] into a [`SensorDataModel`].
///
/// Every visit returns the canonical string form of the record it built.
#[derive(Debug, Default)]
pub struct SensorDataModelVisitor {
    data_model: SensorDataModel,
}

impl SensorDataModelVisitor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The record built by the last visit.
    #[must_use]
    pub fn data_model(&self) -> &SensorDataModel {
        &self.data_model
    }

    #[must_use]
    pub fn into_data_model(self) -> SensorDataModel {
        self.data_model
    }

    fn project<K: SensorKind>(
        &mut self,
        sensor: &K,
        extras: impl FnOnce(&mut SensorDataModel),
    ) -> String {
        let mut data_model = SensorDataModel {
            sensor_id: sensor.id().to_string(),
            device_id: sensor.device_id().to_string(),
            model_path: sensor.model_path().to_string(),
            sensor_type_id: sensor.sensor_type_id().to_string(),
            sensor_name: sensor.name().to_string(),
            ..SensorDataModel::default()
        };
        extras(&mut data_model);
        let text = data_model.to_string();
        self.data_model = data_model;
        text
    }
}

fn set_gps(data_model: &mut SensorDataModel, gps: &Gps) {
    data_model.latitude = Some(gps.latitude().to_string());
    data_model.longitude = Some(gps.longitude().to_string());
}

fn set_period(data_model: &mut SensorDataModel, period: &DatePeriod) {
    data_model.start_date = Some(period.start().format(DATE_FORMAT).to_string());
    data_model.end_date = Some(period.end().format(DATE_FORMAT).to_string());
}

impl SensorVisitor for SensorDataModelVisitor {
    type Output = String;

    fn visit_temperature(&mut self, sensor: &TemperatureSensor) -> String {
        self.project(sensor, |_| {})
    }

    fn visit_humidity(&mut self, sensor: &HumiditySensor) -> String {
        self.project(sensor, |_| {})
    }

    fn visit_dew_point(&mut self, sensor: &DewPointSensor) -> String {
        self.project(sensor, |_| {})
    }

    fn visit_wind(&mut self, sensor: &WindSensor) -> String {
        self.project(sensor, |_| {})
    }

    fn visit_switch(&mut self, sensor: &SwitchSensor) -> String {
        self.project(sensor, |_| {})
    }

    fn visit_solar_irradiance(&mut self, sensor: &SolarIrradianceSensor) -> String {
        self.project(sensor, |_| {})
    }

    fn visit_percentage_position(&mut self, sensor: &PercentagePositionSensor) -> String {
        self.project(sensor, |_| {})
    }

    fn visit_instant_power_consumption(
        &mut self,
        sensor: &InstantPowerConsumptionSensor,
    ) -> String {
        self.project(sensor, |_| {})
    }

    fn visit_average_power_consumption(
        &mut self,
        sensor: &AveragePowerConsumptionSensor,
    ) -> String {
        self.project(sensor, |_| {})
    }

    fn visit_electric_consumption_wh(&mut self, sensor: &ElectricConsumptionWhSensor) -> String {
        self.project(sensor, |m| set_period(m, sensor.period()))
    }

    fn visit_sunrise_time(&mut self, sensor: &SunriseTimeSensor) -> String {
        self.project(sensor, |m| set_gps(m, sensor.gps()))
    }

    fn visit_sunset_time(&mut self, sensor: &SunsetTimeSensor) -> String {
        self.project(sensor, |m| set_gps(m, sensor.gps()))
    }
}

/// Flatten `sensor` into its record.
#[must_use]
pub fn project_sensor(sensor: &Sensor) -> SensorDataModel {
    let mut visitor = SensorDataModelVisitor::new();
    sensor.accept(&mut visitor);
    visitor.into_data_model()
}

/// Flattens any [`Actuator`] into an [`ActuatorDataModel`].
#[derive(Debug, Default)]
pub struct ActuatorDataModelVisitor {
    data_model: ActuatorDataModel,
}

impl ActuatorDataModelVisitor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn data_model(&self) -> &ActuatorDataModel {
        &self.data_model
    }

    #[must_use]
    pub fn into_data_model(self) -> ActuatorDataModel {
        self.data_model
    }

    fn project<K: ActuatorKind>(
        &mut self,
        actuator: &K,
        extras: impl FnOnce(&mut ActuatorDataModel),
    ) -> String {
        let mut data_model = ActuatorDataModel {
            actuator_id: actuator.id().to_string(),
            device_id: actuator.device_id().to_string(),
            model_path: actuator.model_path().to_string(),
            actuator_type_id: actuator.actuator_type_id().to_string(),
            actuator_name: actuator.name().to_string(),
            ..ActuatorDataModel::default()
        };
        extras(&mut data_model);
        let text = data_model.to_string();
        self.data_model = data_model;
        text
    }
}

impl ActuatorVisitor for ActuatorDataModelVisitor {
    type Output = String;

    fn visit_switch(&mut self, actuator: &SwitchActuator) -> String {
        self.project(actuator, |_| {})
    }

    fn visit_blind_roller(&mut self, actuator: &BlindRollerActuator) -> String {
        self.project(actuator, |_| {})
    }

    fn visit_set_integer(&mut self, actuator: &SetIntegerActuator) -> String {
        let limits = actuator.limits();
        self.project(actuator, |m| {
            m.integer_lower_limit = Some(limits.lower());
            m.integer_upper_limit = Some(limits.upper());
        })
    }

    fn visit_set_decimal(&mut self, actuator: &SetDecimalActuator) -> String {
        let limits = actuator.limits();
        self.project(actuator, |m| {
            m.decimal_lower_limit = Some(limits.lower());
            m.decimal_upper_limit = Some(limits.upper());
        })
    }
}

/// Flatten `actuator` into its record.
#[must_use]
pub fn project_actuator(actuator: &Actuator) -> ActuatorDataModel {
    let mut visitor = ActuatorDataModelVisitor::new();
    actuator.accept(&mut visitor);
    visitor.into_data_model()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use hearth_domain::id::{DeviceId, SensorId};
    use hearth_domain::value::{ModelPath, SensorName, SensorTypeId};

    use super::*;

    fn wind() -> Sensor {
        WindSensor::with_id(
            SensorId::new("1").unwrap(),
            DeviceId::new("1").unwrap(),
            ModelPath::new("modelPath").unwrap(),
            SensorTypeId::new("Wind").unwrap(),
            SensorName::new("sensorName").unwrap(),
        )
        .unwrap()
        .into()
    }

    fn sunrise() -> Sensor {
        SunriseTimeSensor::with_id(
            SensorId::new("2").unwrap(),
            DeviceId::new("1").unwrap(),
            ModelPath::new("SunriseTimeSensor").unwrap(),
            SensorTypeId::new("SunriseTime").unwrap(),
            SensorName::new("Garden").unwrap(),
            Gps::new(41.15, -8.61).unwrap(),
        )
        .unwrap()
        .into()
    }

    #[test]
    fn should_render_wind_sensor_record() {
        let mut visitor = SensorDataModelVisitor::new();
        assert_eq!(
            wind().accept(&mut visitor),
            "SensorDataModel{sensorID='1', deviceID='1', modelPath='modelPath', \
             sensorTypeID='Wind', sensorName='sensorName', latitude='null', \
             longitude='null', startDate='null', endDate='null'}"
        );
    }

    #[test]
    fn should_fill_gps_for_sun_time_sensor() {
        let record = project_sensor(&sunrise());
        assert_eq!(record.latitude.as_deref(), Some("41.15"));
        assert_eq!(record.longitude.as_deref(), Some("-8.61"));
        assert!(record.start_date.is_none());
        assert!(record.end_date.is_none());
    }

    #[test]
    fn should_fill_period_for_consumption_sensor() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(6, 30, 0)
            .unwrap();
        let period = DatePeriod::new(start, start + chrono::Duration::days(7)).unwrap();
        let sensor: Sensor = ElectricConsumptionWhSensor::new(
            DeviceId::new("1").unwrap(),
            ModelPath::new("ElectricConsumptionWhSensor").unwrap(),
            SensorTypeId::new("ElectricConsumptionWh").unwrap(),
            SensorName::new("Main meter").unwrap(),
            period,
        )
        .unwrap()
        .into();
        let record = project_sensor(&sensor);
        assert_eq!(record.start_date.as_deref(), Some("2024-03-01T06:30:00"));
        assert_eq!(record.end_date.as_deref(), Some("2024-03-08T06:30:00"));
        assert!(record.latitude.is_none());
    }

    #[test]
    fn should_not_carry_extras_between_visits() {
        let mut visitor = SensorDataModelVisitor::new();
        sunrise().accept(&mut visitor);
        assert!(visitor.data_model().latitude.is_some());

        wind().accept(&mut visitor);
        assert!(visitor.data_model().latitude.is_none());
        assert_eq!(visitor.data_model().sensor_id, "1");
    }

    fn actuator_record(actuator: &Actuator) -> ActuatorDataModel {
        let mut visitor = ActuatorDataModelVisitor::new();
        actuator.accept(&mut visitor);
        visitor.into_data_model()
    }

    #[test]
    fn should_leave_every_limit_null_for_switch_and_blind_roller() {
        use hearth_domain::id::ActuatorId;
        use hearth_domain::value::{ActuatorName, ActuatorTypeId};

        let switch: Actuator = SwitchActuator::with_id(
            ActuatorId::new("a-1").unwrap(),
            DeviceId::new("1").unwrap(),
            ModelPath::new("SwitchActuator").unwrap(),
            ActuatorTypeId::new("Switch").unwrap(),
            ActuatorName::new("Relay").unwrap(),
        )
        .unwrap()
        .into();
        let blind: Actuator = BlindRollerActuator::with_id(
            ActuatorId::new("a-2").unwrap(),
            DeviceId::new("1").unwrap(),
            ModelPath::new("BlindRollerActuator").unwrap(),
            ActuatorTypeId::new("BlindRoller").unwrap(),
            ActuatorName::new("Shutter").unwrap(),
        )
        .unwrap()
        .into();

        let cases = [(switch, "a-1", "Switch"), (blind, "a-2", "BlindRoller")];
        for (actuator, id, type_id) in cases {
            let record = actuator_record(&actuator);
            assert_eq!(
                record,
                ActuatorDataModel {
                    actuator_id: id.to_string(),
                    device_id: "1".to_string(),
                    model_path: actuator.type_id().to_string(),
                    actuator_type_id: type_id.to_string(),
                    actuator_name: actuator.name().to_string(),
                    ..ActuatorDataModel::default()
                }
            );
        }
    }

    #[test]
    fn should_fill_only_integer_limits_for_set_integer_actuator() {
        use hearth_domain::value::{ActuatorName, ActuatorTypeId, IntegerLimits};

        let actuator: Actuator = SetIntegerActuator::new(
            DeviceId::new("1").unwrap(),
            ModelPath::new("SetIntegerActuator").unwrap(),
            ActuatorTypeId::new("SetInteger").unwrap(),
            ActuatorName::new("Thermostat").unwrap(),
            IntegerLimits::new(16, 28).unwrap(),
        )
        .unwrap()
        .into();
        let record = actuator_record(&actuator);
        assert_eq!(record.integer_lower_limit, Some(16));
        assert_eq!(record.integer_upper_limit, Some(28));
        assert!(record.decimal_lower_limit.is_none());
        assert!(record.decimal_upper_limit.is_none());
        assert_eq!(record.actuator_type_id, "SetInteger");
    }

    #[test]
    fn should_fill_limits_for_set_decimal_actuator() {
        use hearth_domain::value::{ActuatorName, ActuatorTypeId, DecimalLimits};

        let actuator: Actuator = SetDecimalActuator::new(
            DeviceId::new("1").unwrap(),
            ModelPath::new("SetDecimalActuator").unwrap(),
            ActuatorTypeId::new("SetDecimal").unwrap(),
            ActuatorName::new("Dimmer").unwrap(),
            DecimalLimits::new(0.0, 1.5).unwrap(),
        )
        .unwrap()
        .into();
        let mut visitor = ActuatorDataModelVisitor::new();
        let text = actuator.accept(&mut visitor);
        assert!(text.contains("decimalLowerLimit='0', decimalUpperLimit='1.5'"));
        assert!(text.contains("integerLowerLimit='null'"));
        assert_eq!(visitor.data_model().decimal_upper_limit, Some(1.5));
        assert!(visitor.data_model().integer_upper_limit.is_none());
    }
}
