//! HTTP services. Each sub-module owns its routes; `configure` mounts them all.

pub mod status;
pub mod weather_forecast;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(status::process))
        .service(weather_forecast::configure_routes());
}
