#[macro_use]
extern crate failure;
extern crate futures;
extern crate futures_cpupool;
extern crate hyper;
extern crate serde;
extern crate serde_json;
extern crate serde_qs;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate log;
extern crate chrono;
extern crate config as config_crate;
extern crate env_logger;
#[macro_use]
extern crate http_router;
extern crate hyper_tls;
#[macro_use]
extern crate sentry;
extern crate tokio;
#[cfg(test)]
extern crate tokio_core;

#[macro_use]
mod macros;
pub mod api;
mod client;
mod config;
pub mod logger;
mod models;
mod prelude;
mod sentry_integration;
mod services;
mod utils;

use config::Config;

pub fn print_config() {
    println!("Parsed config: {:?}", get_config());
}

pub fn start_server() {
    let config = get_config();
    // Prepare sentry integration
    let _sentry = sentry_integration::init(config.sentry.as_ref());

    if config.test_mode.enabled {
        info!("Test mode is enabled, serving {}", config.test_mode.fixture_path);
    }
    info!("Monitoring account ids: {}", config.etherscan.accounts);

    api::start_server(config);
}

fn get_config() -> Config {
    config::Config::new().unwrap_or_else(|e| panic!("Error parsing config: {}", e))
}
