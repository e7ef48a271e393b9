use actix_web::HttpResponse;
use log::{error, info};
use std::convert::Infallible;
use thiserror::Error;

pub const SIMULATION_BODY: &str = "Error simulation successful! Check the logs for details.";

#[derive(Debug, Error)]
#[error("This is a test exception to demonstrate error logging")]
pub struct SimulatedFault;

fn trigger_fault() -> Result<Infallible, SimulatedFault> {
    Err(SimulatedFault)
}

/// Always fails, but contains the fault: it is logged and answered with a
/// fixed 500 instead of reaching actix's error handling.
pub(crate) async fn process() -> HttpResponse {
    info!("Simulating an error for testing");

    match trigger_fault() {
        Ok(never) => match never {},
        Err(fault) => {
            error!(error:% = fault; "Caught simulated exception: {fault}");
            HttpResponse::InternalServerError().body(SIMULATION_BODY)
        }
    }
}
