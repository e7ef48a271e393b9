//! Randomized demo forecast, logged step by step.
//!
//! Each call logs at debug on entry, at info before drawing, once per record
//! (with the whole record attached as the `forecast` property) and once after.
//! A single warning carries the hottest temperature when any day exceeds
//! [`HEAT_WARNING_THRESHOLD`]. Faults are logged at error and returned as-is.

use actix_web::{http::StatusCode, ResponseError};
use chrono::{Days, NaiveDate, NaiveDateTime};
use common::model::weather_forecast::{WeatherForecast, SUMMARIES};
use log::{debug, error, info, warn};
use rand::Rng;
use thiserror::Error;

pub const HEAT_WARNING_THRESHOLD: i32 = 40;
pub const MIN_TEMPERATURE_C: i32 = -20;
pub const MAX_TEMPERATURE_C: i32 = 54;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ForecastError {
    #[error("forecast date {offset} day(s) after {today} is out of range")]
    DateOutOfRange { today: NaiveDate, offset: u64 },
}

impl ResponseError for ForecastError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Forecasts for the `count` days following `requested_at`.
pub fn generate<R: Rng + ?Sized>(
    count: usize,
    requested_at: NaiveDateTime,
    rng: &mut R,
) -> Result<Vec<WeatherForecast>, ForecastError> {
    debug!(request_time:% = requested_at; "Weather forecast request received at {requested_at}");
    info!(forecast_count = count; "Retrieving {count} weather forecasts");

    let forecasts = draw(count, requested_at.date(), rng).inspect_err(|err| {
        error!(error:% = err; "Error occurred while retrieving weather forecasts");
    })?;

    info!(count = forecasts.len(); "Successfully retrieved {} weather forecasts", forecasts.len());
    warn_on_heat(&forecasts);

    Ok(forecasts)
}

fn draw<R: Rng + ?Sized>(
    count: usize,
    today: NaiveDate,
    rng: &mut R,
) -> Result<Vec<WeatherForecast>, ForecastError> {
    (1..=count as u64)
        .map(|offset| {
            let date = today
                .checked_add_days(Days::new(offset))
                .ok_or(ForecastError::DateOutOfRange { today, offset })?;
            let temperature_c = rng.gen_range(MIN_TEMPERATURE_C..=MAX_TEMPERATURE_C);
            let summary = SUMMARIES[rng.gen_range(0..SUMMARIES.len())];

            let forecast = WeatherForecast::new(date, temperature_c, summary);
            info!(forecast:serde = forecast; "Generated forecast: {forecast:?}");
            Ok(forecast)
        })
        .collect()
}

fn warn_on_heat(forecasts: &[WeatherForecast]) {
    let hottest = forecasts.iter().map(WeatherForecast::temperature_c).max();
    if let Some(max_temp) = hottest.filter(|&t| t > HEAT_WARNING_THRESHOLD) {
        warn!(max_temp = max_temp; "High temperature detected in forecast: {max_temp}°C");
    }
}
