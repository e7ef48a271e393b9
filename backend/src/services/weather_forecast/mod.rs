//! # Weather Forecast Demo
//!
//! Illustrates request handling with leveled, structured logging. The two
//! routes deliberately treat faults differently: the list route lets a
//! generation fault reach actix, the error route contains its own fault.
//!
//! ## Sub-modules:
//! - `generate`: draws the random forecast and logs every step.
//! - `list`: handler serving the generated forecast as JSON.
//! - `simulate_error`: handler that fails on purpose and logs the fault.

mod generate;
mod list;
mod simulate_error;

use actix_web::web::{get, scope};
use actix_web::Scope;

/// The base path for the forecast endpoints.
const API_PATH: &str = "/weatherforecast";

/// Configures and returns the Actix `Scope` for the forecast routes.
///
/// # Registered Routes:
///
/// *   **`GET /weatherforecast`**:
///     - **Handler**: `list::process`
///     - **Description**: Returns `Config::forecast_days` forecasts (5 by default)
///       as a JSON array of `{date, temperatureC, temperatureF, summary}`.
///       A generation fault is answered with `500`.
///
/// *   **`GET /weatherforecast/error`**:
///     - **Handler**: `simulate_error::process`
///     - **Description**: Raises and logs a simulated fault, then answers `500`
///       with a fixed plain-text body.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/error", get().to(simulate_error::process))
}
