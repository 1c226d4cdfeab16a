use std::fmt;
use std::fmt::Display;

use failure::{Backtrace, Context, Fail};

use client::http_client::error::ErrorKind as HttpClientErrorKind;

#[derive(Debug)]
pub struct Error {
    inner: Context<ErrorKind>,
}

#[allow(dead_code)]
#[derive(Clone, Eq, PartialEq, Debug, Fail)]
pub enum ErrorKind {
    #[fail(display = "etherscan client error - etherscan is unavailable")]
    Unavailable,
    #[fail(display = "etherscan client error - internal error")]
    Internal,
}

#[allow(dead_code)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Fail)]
pub enum ErrorSource {
    #[fail(display = "etherscan client source - error inside of Hyper library")]
    Hyper,
    #[fail(display = "etherscan client source - error serializing query string")]
    SerdeQs,
}

derive_error_impls!();

impl From<HttpClientErrorKind> for ErrorKind {
    fn from(_err: HttpClientErrorKind) -> Self {
        ErrorKind::Unavailable
    }
}
