//! Ice Cream Recipes backend.
//!
//! An actix-web server exposing the weather forecast demo routes, a liveness
//! route and the embedded frontend, with the SQLite catalog store opened at
//! startup for recipe and source persistence.

pub mod config;
pub mod embedded;
pub mod services;
pub mod store;

#[cfg(test)]
mod test_support;

use crate::config::{Config, ConfigError};
use crate::store::{CatalogStore, StoreError};
use actix_web::{middleware, web, App, HttpServer};
use log::info;
use std::io;
use std::sync::Mutex;
use thiserror::Error;

/// Anything that keeps the server from starting or running.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("catalog store: {0}")]
    Store(#[from] StoreError),
    #[error("http server: {0}")]
    Io(#[from] io::Error),
}

/// Opens the catalog store and serves HTTP until the server is stopped.
pub async fn run(config: Config) -> Result<(), StartupError> {
    let store = CatalogStore::open(&config.database)?;
    info!(database = config.database.as_str(); "Catalog store ready");

    let address = (config.host.clone(), config.port);
    let json_limit = config.json_limit;
    let config = web::Data::new(config);
    let store = web::Data::new(Mutex::new(store));

    info!("Starting Ice Cream Recipes API on http://{}:{}", address.0, address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::JsonConfig::default().limit(json_limit))
            .app_data(config.clone())
            .app_data(store.clone())
            .configure(services::configure)
            .default_service(web::route().to(embedded::serve))
    })
    .bind(address)?
    .run()
    .await?;

    info!("Ice Cream Recipes API stopped");
    Ok(())
}
