pub mod error;

use config::Config;
use failure::Fail;
use futures::future::{self, Either};
use futures::prelude::*;
use hyper;
use hyper::{client::HttpConnector, Body, Response, Uri};
use hyper_tls::HttpsConnector;
use log::{self, Level};

pub use self::error::*;
use utils::read_body;

pub trait HttpClient: Send + Sync + 'static {
    fn get(&self, uri: String) -> Box<Future<Item = Response<Body>, Error = Error> + Send>;
}

#[derive(Clone)]
pub struct HttpClientImpl {
    cli: hyper::Client<HttpsConnector<HttpConnector>>,
}

impl HttpClientImpl {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let dns_threads = config.client.dns_threads;
        let connector = HttpsConnector::new(dns_threads).map_err(ectx!(try ErrorSource::Tls, ErrorKind::Internal => dns_threads))?;
        let cli = hyper::Client::builder().build(connector);
        Ok(Self { cli })
    }
}

impl HttpClient for HttpClientImpl {
    fn get(&self, uri: String) -> Box<Future<Item = Response<Body>, Error = Error> + Send> {
        let cli = self.cli.clone();
        let level = log::max_level();
        Box::new(
            uri.parse::<Uri>()
                .map_err(ectx!(ErrorSource::Hyper, ErrorKind::Internal))
                .into_future()
                .and_then(move |uri| {
                    // query carries the api key
                    debug!("HttpClient, sent request GET {}{}", uri.host().unwrap_or(""), uri.path());
                    cli.get(uri).map_err(ectx!(ErrorSource::Hyper, ErrorKind::Internal))
                }).and_then(move |resp| {
                    if level == Level::Debug || level == Level::Trace {
                        let (parts, body) = resp.into_parts();
                        Either::A(
                            read_body(body)
                                .map_err(ectx!(ErrorSource::Hyper, ErrorKind::Internal))
                                .map(|body| {
                                    debug!(
                                        "HttpClient, recieved response with status {} headers: {:#?} and body: {:?}",
                                        parts.status.as_u16(),
                                        parts.headers,
                                        String::from_utf8(body.clone()).ok()
                                    );
                                    Response::from_parts(parts, body.into())
                                }),
                        )
                    } else {
                        Either::B(future::ok(resp))
                    }
                }).and_then(check_status),
        )
    }
}

/// Anything but 2xx is an error
pub fn check_status(resp: Response<Body>) -> Result<Response<Body>, Error> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let kind = match status.as_u16() {
        400 => ErrorKind::BadRequest,
        401 => ErrorKind::Unauthorized,
        404 => ErrorKind::NotFound,
        429 => ErrorKind::TooManyRequests,
        500 => ErrorKind::InternalServer,
        502 => ErrorKind::BadGateway,
        503 => ErrorKind::ServiceUnavailable,
        504 => ErrorKind::GatewayTimeout,
        _ => ErrorKind::UnknownServerError,
    };
    Err(ectx!(err ErrorSource::Server, kind => status))
}

#[cfg(test)]
pub struct HttpClientMock {
    pub status: u16,
    pub body: String,
    pub requests: ::std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl HttpClientMock {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            requests: Default::default(),
        }
    }
}

#[cfg(test)]
impl HttpClient for HttpClientMock {
    fn get(&self, uri: String) -> Box<Future<Item = Response<Body>, Error = Error> + Send> {
        self.requests.lock().unwrap().push(uri);
        let resp = Response::builder().status(self.status).body(Body::from(self.body.clone())).unwrap();
        Box::new(check_status(resp).into_future())
    }
}
