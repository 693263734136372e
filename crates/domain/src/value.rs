//! Self-validating value objects shared by devices, sensors and actuators.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! define_text {
    ($(#[doc = $doc:expr])* $name:ident, $field:literal) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// # Errors
            ///
            /// Returns [`ValidationError::Blank`] when `value` is empty or whitespace.
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(ValidationError::Blank { field: $field });
                }
                Ok(Self(value))
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

define_text!(
    /// Identifier of the hardware model backing a sensor or actuator.
    ///
    /// Stored records use it to pick the kind builder when reconstructing.
    ModelPath,
    "model path"
);

define_text!(
    /// Category a sensor reports (e.g. `Temperature`).
    SensorTypeId,
    "sensor type"
);

define_text!(
    /// Category an actuator drives (e.g. `SetInteger`).
    ActuatorTypeId,
    "actuator type"
);

define_text!(
    /// Category of a device (e.g. `Thermostat`).
    DeviceTypeId,
    "device type"
);

define_text!(SensorName, "sensor name");
define_text!(ActuatorName, "actuator name");
define_text!(DeviceName, "device name");

/// Geographic coordinates in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGps")]
pub struct Gps {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawGps {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawGps> for Gps {
    type Error = ValidationError;

    fn try_from(raw: RawGps) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl Gps {
    /// # Errors
    ///
    /// Returns [`ValidationError::LatitudeOutOfRange`] or
    /// [`ValidationError::LongitudeOutOfRange`] for non-finite or out-of-range values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ValidationError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ValidationError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Closed interval of local date-times over which a reading accumulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDatePeriod")]
pub struct DatePeriod {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

#[derive(Deserialize)]
struct RawDatePeriod {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TryFrom<RawDatePeriod> for DatePeriod {
    type Error = ValidationError;

    fn try_from(raw: RawDatePeriod) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl DatePeriod {
    /// # Errors
    ///
    /// Returns [`ValidationError::InvertedDatePeriod`] when `start` is after `end`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::InvertedDatePeriod);
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }
}

/// Inclusive integer bounds accepted by a set-integer actuator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegerLimits {
    lower: i64,
    upper: i64,
}

impl IntegerLimits {
    /// # Errors
    ///
    /// Returns [`ValidationError::InvertedLimits`] when `lower > upper`.
    pub fn new(lower: i64, upper: i64) -> Result<Self, ValidationError> {
        if lower > upper {
            return Err(ValidationError::InvertedLimits {
                lower: lower.to_string(),
                upper: upper.to_string(),
            });
        }
        Ok(Self { lower, upper })
    }

    #[must_use]
    pub fn lower(&self) -> i64 {
        self.lower
    }

    #[must_use]
    pub fn upper(&self) -> i64 {
        self.upper
    }

    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        (self.lower..=self.upper).contains(&value)
    }
}

/// Inclusive decimal bounds accepted by a set-decimal actuator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecimalLimits {
    lower: f64,
    upper: f64,
}

impl DecimalLimits {
    /// # Errors
    ///
    /// Returns [`ValidationError::InvertedLimits`] when `lower > upper` or
    /// either bound is NaN.
    pub fn new(lower: f64, upper: f64) -> Result<Self, ValidationError> {
        if lower.is_nan() || upper.is_nan() || lower > upper {
            return Err(ValidationError::InvertedLimits {
                lower: lower.to_string(),
                upper: upper.to_string(),
            });
        }
        Ok(Self { lower, upper })
    }

    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.lower..=self.upper).contains(&value)
    }
}
