mod error;

use std::sync::Arc;

use failure::Fail;
use futures::prelude::*;
#[cfg(test)]
use futures::future;
use serde_qs;

pub use self::error::*;
use super::HttpClient;
use config::Config;
use utils::read_body;

/// Fetches the raw `balancemulti` response. Body is returned as is, interpreting it is up to the caller.
pub trait EtherscanClient: Send + Sync + 'static {
    fn get_balance_multi(&self) -> Box<Future<Item = Vec<u8>, Error = Error> + Send>;
}

#[derive(Debug, Serialize)]
struct BalanceMultiQuery<'a> {
    module: &'a str,
    action: &'a str,
    address: &'a str,
    tag: &'a str,
    apikey: &'a str,
}

#[derive(Clone)]
pub struct EtherscanClientImpl {
    cli: Arc<HttpClient>,
    etherscan_url: String,
    accounts: String,
    api_key: String,
}

impl EtherscanClientImpl {
    pub fn new<C: HttpClient>(config: &Config, cli: C) -> Self {
        Self {
            cli: Arc::new(cli),
            etherscan_url: config.client.etherscan_url.clone(),
            accounts: config.etherscan.accounts.clone(),
            api_key: config.etherscan.api_key.clone(),
        }
    }

    fn balance_multi_url(&self) -> Result<String, Error> {
        let query = BalanceMultiQuery {
            module: "account",
            action: "balancemulti",
            address: &self.accounts,
            tag: "latest",
            apikey: &self.api_key,
        };
        let query = serde_qs::to_string(&query).map_err(|e| ectx!(try err ErrorSource::SerdeQs, ErrorKind::Internal => e.to_string()))?;
        Ok(format!("{}?{}", self.etherscan_url, query))
    }
}

impl EtherscanClient for EtherscanClientImpl {
    fn get_balance_multi(&self) -> Box<Future<Item = Vec<u8>, Error = Error> + Send> {
        let cli = self.cli.clone();
        let accounts = self.accounts.clone();
        Box::new(
            self.balance_multi_url()
                .into_future()
                .and_then(move |url| cli.get(url).map_err(ectx!(convert => accounts)))
                .and_then(|resp| read_body(resp.into_body()).map_err(ectx!(ErrorSource::Hyper, ErrorKind::Unavailable))),
        )
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct EtherscanClientMock {
    pub body: Option<String>,
}

#[cfg(test)]
impl EtherscanClient for EtherscanClientMock {
    fn get_balance_multi(&self) -> Box<Future<Item = Vec<u8>, Error = Error> + Send> {
        match self.body {
            Some(ref body) => Box::new(future::ok::<_, Error>(body.clone().into_bytes())),
            None => Box::new(future::err::<Vec<u8>, _>(Error::from(ErrorKind::Unavailable))),
        }
    }
}
