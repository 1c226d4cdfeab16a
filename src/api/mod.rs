use std::net::SocketAddr;
use std::process;
use std::sync::Arc;

use failure::{Compat, Fail};
use futures::future;
use futures::prelude::*;
use futures_cpupool::CpuPool;
use hyper;
use hyper::Server;
use hyper::StatusCode;
use hyper::{service::Service, Body, Request, Response};
use tokio;

use super::config::Config;
use super::utils::{log_and_capture_error, log_error};
use utils::read_body;

mod controllers;
mod error;
pub mod utils;

use self::controllers::*;
use self::error::*;
use self::utils::json_error_response;
use client::{EtherscanClientImpl, HttpClientImpl};
use services::{DataSource, ExportPipeline, FixtureDataSource, LiveDataSource, MetricsService, MetricsServiceImpl};

#[derive(Clone)]
pub struct ApiService {
    server_address: SocketAddr,
    metrics_service: Arc<MetricsService>,
}

impl ApiService {
    fn from_config(config: &Config) -> Result<Self, Error> {
        let server_address = format!("{}:{}", config.server.host, config.server.port)
            .parse::<SocketAddr>()
            .map_err(ectx!(try
                ErrorContext::Config,
                ErrorKind::Internal =>
                config.server.host,
                config.server.port
            ))?;
        let data_source: Arc<DataSource> = if config.test_mode.enabled {
            let cpu_pool = CpuPool::new(config.cpu_pool.size);
            Arc::new(FixtureDataSource::new(config.test_mode.fixture_path.clone(), cpu_pool))
        } else {
            let client = HttpClientImpl::new(config).map_err(ectx!(try ErrorContext::HttpClient, ErrorKind::Internal))?;
            let etherscan_client = EtherscanClientImpl::new(config, client);
            Arc::new(LiveDataSource::new(Arc::new(etherscan_client)))
        };
        let metrics_service = MetricsServiceImpl::new(data_source, ExportPipeline::default());

        Ok(ApiService {
            server_address,
            metrics_service: Arc::new(metrics_service),
        })
    }
}

impl Service for ApiService {
    type ReqBody = Body;
    type ResBody = Body;
    type Error = Compat<Error>;
    type Future = Box<Future<Item = Response<Body>, Error = Self::Error> + Send>;

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let (parts, http_body) = req.into_parts();
        let metrics_service = self.metrics_service.clone();
        Box::new(
            read_body(http_body)
                .map_err(ectx!(ErrorSource::Hyper, ErrorKind::Internal))
                .and_then(move |body| {
                    let router = router! {
                        GET / => index,
                        GET /metrics => get_metrics,
                        _ => not_found,
                    };

                    let ctx = Context {
                        body,
                        method: parts.method.clone(),
                        uri: parts.uri.clone(),
                        headers: parts.headers,
                        metrics_service,
                    };

                    debug!("Received request {}", ctx);

                    router(ctx, parts.method.into(), parts.uri.path())
                }).and_then(|resp| {
                    let (parts, body) = resp.into_parts();
                    read_body(body)
                        .map_err(ectx!(ErrorSource::Hyper, ErrorKind::Internal))
                        .map(|body| (parts, body))
                }).map(|(parts, body)| {
                    debug!(
                        "Sent response with status {}, headers: {:#?}, body: {:?}",
                        parts.status.as_u16(),
                        parts.headers,
                        String::from_utf8(body.clone()).ok()
                    );
                    Response::from_parts(parts, body.into())
                }).or_else(|e| -> Result<Response<Body>, Compat<Error>> {
                    match e.kind() {
                        ErrorKind::Internal => {
                            log_and_capture_error(e);
                            Ok(json_error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"))
                        }
                        // broken environment, e.g. missing test fixture
                        ErrorKind::Fatal => {
                            log_and_capture_error(e);
                            process::exit(1)
                        }
                    }
                }),
        )
    }
}

pub fn start_server(config: Config) {
    tokio::run(future::lazy(move || {
        ApiService::from_config(&config)
            .into_future()
            .and_then(move |api| {
                let api_clone = api.clone();
                let new_service = move || {
                    let res: Result<_, hyper::Error> = Ok(api_clone.clone());
                    res
                };
                let addr = api.server_address;
                let server = Server::bind(&api.server_address)
                    .serve(new_service)
                    .map_err(ectx!(ErrorSource::Hyper, ErrorKind::Internal => addr));
                info!("Etherscan exporter listening on http://{}", addr);
                server
            }).map_err(|e: Error| log_error(&e))
    }));
}
