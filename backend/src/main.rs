use backend::config::{Config, DEFAULT_LOG_FILTER};
use backend::StartupError;
use env_logger::Env;
use log::error;
use std::process::ExitCode;

async fn start() -> Result<(), StartupError> {
    let config = Config::load()?;
    backend::run(config).await
}

#[actix_web::main]
async fn main() -> ExitCode {
    env_logger::init_from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER));

    match start().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(target: "fatal", error:% = err; "API terminated unexpectedly");
            log::logger().flush();
            ExitCode::FAILURE
        }
    }
}
