use failure::Fail;
use futures::prelude::*;
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::{Body, Response, StatusCode};

use super::error::*;
use super::ControllerFuture;

pub const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4";
pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

pub fn response_with_text(content_type: &'static str, text: String) -> ControllerFuture {
    Box::new(
        Response::builder()
            .status(200)
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(text))
            .map_err(ectx!(ErrorSource::Hyper, ErrorKind::Internal))
            .into_future(),
    )
}

pub fn json_error_response(status: StatusCode, description: &str) -> Response<Body> {
    let mut resp = Response::new(Body::from(format!(r#"{{"description": "{}"}}"#, description)));
    *resp.status_mut() = status;
    resp.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    resp
}
