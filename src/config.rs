use std::env;
use std::fmt;

use sentry_integration::SentryConfig;

use config_crate::{Config as RawConfig, ConfigError, Environment, File};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: Server,
    pub client: Client,
    pub etherscan: Etherscan,
    pub test_mode: TestMode,
    pub cpu_pool: CpuPool,
    pub sentry: Option<SentryConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Server {
    pub host: String,
    pub port: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Client {
    pub dns_threads: usize,
    pub etherscan_url: String,
}

#[derive(Deserialize, Clone)]
pub struct Etherscan {
    /// Comma separated list of addresses, passed to etherscan as is
    pub accounts: String,
    pub api_key: String,
}

impl fmt::Debug for Etherscan {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Etherscan")
            .field("accounts", &self.accounts)
            .field("api_key", &"********")
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct TestMode {
    pub enabled: bool,
    pub fixture_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CpuPool {
    pub size: usize,
}

impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        let mut s = RawConfig::new();
        s.merge(File::with_name("config/base"))?;

        // Merge development.toml if RUN_MODE variable is not set
        let env = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        s.merge(File::with_name(&format!("config/{}", env)).required(false))?;
        s.merge(File::with_name("config/secret.toml").required(false))?;

        // e.g. ETHERSCAN_EXPORTER_SERVER__PORT overrides server.port
        s.merge(Environment::with_prefix("ETHERSCAN_EXPORTER").separator("__"))?;

        // Plain variables used by existing deployments
        if let Ok(accounts) = env::var("ACCOUNTS") {
            s.set("etherscan.accounts", accounts)?;
        }
        if let Ok(api_key) = env::var("API_KEY") {
            s.set("etherscan.api_key", api_key)?;
        }
        if let Ok(test_mode) = env::var("TEST_MODE") {
            s.set("test_mode.enabled", test_mode == "1")?;
        }
        s.try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_config_parses() {
        let config = Config::new().unwrap();
        assert!(!config.server.port.is_empty());
        assert!(config.client.etherscan_url.starts_with("https://"));
        assert!(!config.test_mode.fixture_path.is_empty());
    }

    #[test]
    fn test_debug_hides_api_key() {
        let etherscan = Etherscan {
            accounts: "0x1,0x2".to_string(),
            api_key: "SECRETKEY".to_string(),
        };
        let printed = format!("{:?}", etherscan);
        assert!(printed.contains("0x1,0x2"));
        assert!(!printed.contains("SECRETKEY"));
    }

    #[test]
    fn test_env_overrides() {
        env::set_var("ETHERSCAN_EXPORTER_SERVER__PORT", "9999");
        env::set_var("ETHERSCAN_EXPORTER_ETHERSCAN__ACCOUNTS", "0xprefixed");
        let config = Config::new().unwrap();
        assert_eq!(config.server.port, "9999");
        assert_eq!(config.etherscan.accounts, "0xprefixed");

        env::set_var("ACCOUNTS", "0x1,0x2");
        env::set_var("API_KEY", "KEY");
        env::set_var("TEST_MODE", "1");
        let config = Config::new().unwrap();
        assert_eq!(config.etherscan.accounts, "0x1,0x2");
        assert_eq!(config.etherscan.api_key, "KEY");
        assert!(config.test_mode.enabled);

        env::set_var("TEST_MODE", "0");
        assert!(!Config::new().unwrap().test_mode.enabled);
        env::set_var("TEST_MODE", "true");
        assert!(!Config::new().unwrap().test_mode.enabled);

        for var in &[
            "ETHERSCAN_EXPORTER_SERVER__PORT",
            "ETHERSCAN_EXPORTER_ETHERSCAN__ACCOUNTS",
            "ACCOUNTS",
            "API_KEY",
            "TEST_MODE",
        ] {
            env::remove_var(var);
        }
    }
}
