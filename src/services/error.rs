use client::etherscan::ErrorKind as EtherscanErrorKind;
use failure::{Backtrace, Context, Fail};
use std::fmt;
use std::fmt::Display;

#[derive(Debug)]
pub struct Error {
    inner: Context<ErrorKind>,
}

#[allow(dead_code)]
#[derive(Clone, Debug, PartialEq, Eq, Fail)]
pub enum ErrorKind {
    #[fail(display = "service error - upstream unavailable")]
    Unavailable,
    #[fail(display = "service error - fatal error, cannot continue")]
    Fatal,
    #[fail(display = "service error - internal error")]
    Internal,
}

#[allow(dead_code)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Fail)]
pub enum ErrorContext {
    #[fail(display = "service error context - upstream request")]
    Upstream,
    #[fail(display = "service error context - reading test fixture")]
    Fixture,
}

derive_error_impls!();

impl From<EtherscanErrorKind> for ErrorKind {
    fn from(err: EtherscanErrorKind) -> Self {
        match err {
            EtherscanErrorKind::Unavailable => ErrorKind::Unavailable,
            EtherscanErrorKind::Internal => ErrorKind::Internal,
        }
    }
}
