use std::borrow::Cow;

use sentry;

#[derive(Debug, Deserialize, Clone)]
pub struct SentryConfig {
    pub dsn: String,
    /// Tag for events, e.g. `production` or `staging`
    pub environment: Option<String>,
}

pub fn init(sentry_config: Option<&SentryConfig>) -> Option<sentry::internals::ClientInitGuard> {
    sentry_config.map(|config_sentry| {
        info!(
            "Reporting errors to sentry, environment: {}",
            config_sentry.environment.as_ref().map(|s| s.as_str()).unwrap_or("unset")
        );
        let guard = sentry::init((
            config_sentry.dsn.clone(),
            sentry::ClientOptions {
                release: sentry_crate_release!(),
                environment: config_sentry.environment.clone().map(Cow::from),
                ..Default::default()
            },
        ));
        sentry::integrations::panic::register_panic_handler();
        guard
    })
}
