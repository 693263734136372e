//! Sunrise and sunset times from the NOAA general solar position equations.
//!
//! Accuracy is within a couple of minutes for latitudes below the polar
//! circles, which is plenty for scheduling blinds and lights.

use std::f64::consts::PI;

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::value::Gps;

/// Solar zenith at sunrise/sunset, accounting for refraction and the solar disc.
const HORIZON_ZENITH_DEG: f64 = 90.833;
const MINUTES_PER_DAY: f64 = 1440.0;

/// UTC sunrise at `gps` on `date`, or `None` during polar day or night.
#[must_use]
pub fn sunrise(date: NaiveDate, gps: &Gps) -> Option<NaiveTime> {
    let (eq_time, hour_angle) = solar_terms(date, gps)?;
    let minutes = 720.0 - 4.0 * (gps.longitude() + hour_angle) - eq_time;
    Some(to_time(minutes))
}

/// UTC sunset at `gps` on `date`, or `None` during polar day or night.
#[must_use]
pub fn sunset(date: NaiveDate, gps: &Gps) -> Option<NaiveTime> {
    let (eq_time, hour_angle) = solar_terms(date, gps)?;
    let minutes = 720.0 - 4.0 * (gps.longitude() - hour_angle) - eq_time;
    Some(to_time(minutes))
}

/// Equation of time (minutes) and sunrise hour angle (degrees).
fn solar_terms(date: NaiveDate, gps: &Gps) -> Option<(f64, f64)> {
    let days_in_year = if date.leap_year() { 366.0 } else { 365.0 };
    let gamma = 2.0 * PI / days_in_year * (f64::from(date.ordinal()) - 1.0);

    let eq_time = 229.18
        * (0.000_075 + 0.001_868 * gamma.cos()
            - 0.032_077 * gamma.sin()
            - 0.014_615 * (2.0 * gamma).cos()
            - 0.040_849 * (2.0 * gamma).sin());

    let declination = 0.006_918 - 0.399_912 * gamma.cos() + 0.070_257 * gamma.sin()
        - 0.006_758 * (2.0 * gamma).cos()
        + 0.000_907 * (2.0 * gamma).sin()
        - 0.002_697 * (3.0 * gamma).cos()
        + 0.001_48 * (3.0 * gamma).sin();

    let latitude = gps.latitude().to_radians();
    let cos_hour_angle = HORIZON_ZENITH_DEG.to_radians().cos()
        / (latitude.cos() * declination.cos())
        - latitude.tan() * declination.tan();
    if !(-1.0..=1.0).contains(&cos_hour_angle) {
        return None;
    }
    Some((eq_time, cos_hour_angle.acos().to_degrees()))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_time(minutes: f64) -> NaiveTime {
    let seconds = (minutes.rem_euclid(MINUTES_PER_DAY) * 60.0).round() as u32 % 86_400;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap_or(NaiveTime::MIN)
}
