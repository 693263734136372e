//! Flat records as kept by a store.
//!
//! Every sensor kind shares [`SensorDataModel`] and every actuator kind shares
//! [`ActuatorDataModel`]: the common columns plus the union of all kinds'
//! extras, each left empty unless the originating kind fills it. The
//! [`Display`](fmt::Display) form is the canonical textual rendering of a
//! record, with empty extras rendered as `'null'`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Format used to store the bounds of a date period.
///
/// Fractional seconds are written only when present.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

struct OrNull<'a, T>(&'a Option<T>);

impl<T: fmt::Display> fmt::Display for OrNull<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("null"),
        }
    }
}

/// Stored form of any sensor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorDataModel {
    pub sensor_id: String,
    pub device_id: String,
    pub model_path: String,
    pub sensor_type_id: String,
    pub sensor_name: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl fmt::Display for SensorDataModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SensorDataModel{{sensorID='{}', deviceID='{}', modelPath='{}', sensorTypeID='{}', \
             sensorName='{}', latitude='{}', longitude='{}', startDate='{}', endDate='{}'}}",
            self.sensor_id,
            self.device_id,
            self.model_path,
            self.sensor_type_id,
            self.sensor_name,
            OrNull(&self.latitude),
            OrNull(&self.longitude),
            OrNull(&self.start_date),
            OrNull(&self.end_date),
        )
    }
}

/// Stored form of any actuator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActuatorDataModel {
    pub actuator_id: String,
    pub device_id: String,
    pub model_path: String,
    pub actuator_type_id: String,
    pub actuator_name: String,
    pub integer_lower_limit: Option<i64>,
    pub integer_upper_limit: Option<i64>,
    pub decimal_lower_limit: Option<f64>,
    pub decimal_upper_limit: Option<f64>,
}

impl fmt::Display for ActuatorDataModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ActuatorDataModel{{actuatorID='{}', deviceID='{}', modelPath='{}', \
             actuatorTypeID='{}', actuatorName='{}', integerLowerLimit='{}', \
             integerUpperLimit='{}', decimalLowerLimit='{}', decimalUpperLimit='{}'}}",
            self.actuator_id,
            self.device_id,
            self.model_path,
            self.actuator_type_id,
            self.actuator_name,
            OrNull(&self.integer_lower_limit),
            OrNull(&self.integer_upper_limit),
            OrNull(&self.decimal_lower_limit),
            OrNull(&self.decimal_upper_limit),
        )
    }
}

/// Stored form of a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceDataModel {
    pub device_id: String,
    pub room_id: String,
    pub device_name: String,
    pub device_type_id: String,
    pub active: bool,
}

impl fmt::Display for DeviceDataModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DeviceDataModel{{deviceID='{}', roomID='{}', deviceName='{}', deviceTypeID='{}', \
             active={}}}",
            self.device_id, self.room_id, self.device_name, self.device_type_id, self.active,
        )
    }
}
