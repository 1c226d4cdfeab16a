use chrono::prelude::*;
use env_logger::Builder as EnvLogBuilder;
use log::LevelFilter as LogLevelFilter;
use std::env;
use std::io::Write;

/// Installs stdout logger: `<rfc3339> - <level> - <message>`, `Info` unless `RUST_LOG` says otherwise.
pub fn init() {
    let mut builder = EnvLogBuilder::new();
    builder
        .format(|formatter, record| {
            let now = Utc::now();
            writeln!(formatter, "{} - {:5} - {}", now.to_rfc3339(), record.level(), record.args())
        }).filter(None, LogLevelFilter::Info);

    if let Ok(v) = env::var("RUST_LOG") {
        builder.parse(&v);
    }

    builder.try_init().expect("Failed to install logger");
}
