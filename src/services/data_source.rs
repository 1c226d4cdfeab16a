use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use futures_cpupool::CpuPool;

use super::error::*;
use super::ServiceFuture;
use client::EtherscanClient;
use prelude::*;

/// Produces the raw upstream body for one scrape
pub trait DataSource: Send + Sync + 'static {
    fn fetch(&self) -> ServiceFuture<Vec<u8>>;
}

/// Asks etherscan on every call
#[derive(Clone)]
pub struct LiveDataSource {
    etherscan_client: Arc<EtherscanClient>,
}

impl LiveDataSource {
    pub fn new(etherscan_client: Arc<EtherscanClient>) -> Self {
        Self { etherscan_client }
    }
}

impl DataSource for LiveDataSource {
    fn fetch(&self) -> ServiceFuture<Vec<u8>> {
        Box::new(
            self.etherscan_client
                .get_balance_multi()
                .map_err(ectx!(convert ErrorContext::Upstream)),
        )
    }
}

/// Reads a local file on every call, used in test mode.
/// Failing to read it is `ErrorKind::Fatal`: the environment is broken, not the upstream.
#[derive(Clone)]
pub struct FixtureDataSource {
    path: PathBuf,
    cpu_pool: CpuPool,
}

impl FixtureDataSource {
    pub fn new<P: Into<PathBuf>>(path: P, cpu_pool: CpuPool) -> Self {
        Self {
            path: path.into(),
            cpu_pool,
        }
    }
}

impl DataSource for FixtureDataSource {
    fn fetch(&self) -> ServiceFuture<Vec<u8>> {
        let path = self.path.clone();
        Box::new(
            self.cpu_pool
                .spawn_fn(move || fs::read(&path).map_err(ectx!(ErrorContext::Fixture, ErrorKind::Fatal => path))),
        )
    }
}

#[cfg(test)]
pub struct DataSourceMock {
    result: Result<String, ErrorKind>,
}

#[cfg(test)]
impl DataSourceMock {
    pub fn with_body(body: &str) -> Self {
        Self {
            result: Ok(body.to_string()),
        }
    }

    pub fn with_error(kind: ErrorKind) -> Self {
        Self { result: Err(kind) }
    }
}

#[cfg(test)]
impl DataSource for DataSourceMock {
    fn fetch(&self) -> ServiceFuture<Vec<u8>> {
        let result = self.result.clone().map(|body| body.into_bytes()).map_err(Error::from);
        Box::new(result.into_future())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client::EtherscanClientMock;
    use tokio_core::reactor::Core;

    #[test]
    fn test_live_returns_upstream_body() {
        let mut core = Core::new().unwrap();
        let client = EtherscanClientMock {
            body: Some(r#"{"status":"1","message":"OK","result":[]}"#.to_string()),
        };
        let source = LiveDataSource::new(Arc::new(client));
        let body = core.run(source.fetch()).unwrap();
        assert_eq!(String::from_utf8(body).unwrap(), r#"{"status":"1","message":"OK","result":[]}"#);
    }

    #[test]
    fn test_live_transport_error_is_unavailable() {
        let mut core = Core::new().unwrap();
        let source = LiveDataSource::new(Arc::new(EtherscanClientMock::default()));
        let err = core.run(source.fetch()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unavailable);
    }

    #[test]
    fn test_fixture_is_read() {
        let mut core = Core::new().unwrap();
        let source = FixtureDataSource::new("test.json", CpuPool::new(1));
        let body = core.run(source.fetch()).unwrap();
        let body = String::from_utf8(body).unwrap();
        assert!(body.contains(r#""status":"1""#));
    }

    #[test]
    fn test_missing_fixture_is_fatal() {
        let mut core = Core::new().unwrap();
        let source = FixtureDataSource::new("does/not/exist.json", CpuPool::new(1));
        let err = core.run(source.fetch()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Fatal);
    }
}
