use super::generate::{generate, ForecastError};
use crate::config::Config;
use actix_web::{web, HttpResponse};
use chrono::Local;

/// Faults from the generator propagate to actix, which answers 500.
pub(crate) async fn process(config: web::Data<Config>) -> Result<HttpResponse, ForecastError> {
    let forecasts = generate(
        config.forecast_days,
        Local::now().naive_local(),
        &mut rand::thread_rng(),
    )?;
    Ok(HttpResponse::Ok().json(forecasts))
}
