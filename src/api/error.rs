use failure::{Backtrace, Context, Fail};
use services::ErrorKind as ServiceErrorKind;
use std::fmt;
use std::fmt::Display;

#[derive(Debug)]
pub struct Error {
    inner: Context<ErrorKind>,
}

#[allow(dead_code)]
#[derive(Clone, Debug, Eq, PartialEq, Fail)]
pub enum ErrorKind {
    #[fail(display = "controller error - internal error")]
    Internal,
    #[fail(display = "controller error - fatal error, shutting down")]
    Fatal,
}

#[allow(dead_code)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Fail)]
pub enum ErrorSource {
    #[fail(display = "controller source - error inside of Hyper library")]
    Hyper,
}

#[allow(dead_code)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Fail)]
pub enum ErrorContext {
    #[fail(display = "controller context - error parsing config data")]
    Config,
    #[fail(display = "controller context - error creating http client")]
    HttpClient,
}

derive_error_impls!();

impl From<ServiceErrorKind> for ErrorKind {
    fn from(err: ServiceErrorKind) -> Self {
        match err {
            ServiceErrorKind::Fatal => ErrorKind::Fatal,
            ServiceErrorKind::Unavailable | ServiceErrorKind::Internal => ErrorKind::Internal,
        }
    }
}
