macro_rules! ectx {
    (err_contexts $e:expr $(,$context:expr)* $(=> $($arg:expr),*)*) => {{
        let mut msg = "at ".to_string();
        msg.push_str(&format!("{}:{}", file!(), line!()));
        $(
            $(
                let arg = format!("\nwith args - {}: {:#?}", stringify!($arg), $arg);
                msg.push_str(&arg);
            )*
        )*
        let err = $e.context(msg);
        $(
            let err = err.context($context);
        )*
        err
    }};

    (err $e:expr $(,$context:expr)* $(=> $($arg:expr),*)*) => {{
        let err = ectx!(err_contexts $e $(,$context)* $(=> $($arg),*)*);
        err.into()
    }};

    (try err $e:expr $(,$context:expr)* $(=> $($arg:expr),*)*) => {{
        let err: Error = ectx!(err $e $(,$context)* $(=> $($arg),*)*);
        err
    }};

    (try $($context:expr),* $(=> $($arg:expr),*)*) => {{
        move |e| {
            ectx!(try err e $(,$context)* $(=> $($arg),*)*)
        }
    }};

    (convert $($context:expr),* $(=> $($arg:expr),*)*) => {{
        move |e| {
            let kind: ErrorKind = e.kind().into();
            ectx!(err e $(,$context)*, kind $(=> $($arg),*)*)
        }
    }};

    ($($context:expr),* $(=> $($arg:expr),*)*) => {{
        move |e| {
            ectx!(err e $(,$context)* $(=> $($arg),*)*)
        }
    }};
}

/// Boilerplate for module level `Error { inner: Context<ErrorKind> }` wrappers.
/// Expects `Backtrace`, `Context`, `Fail`, `fmt` and `Display` to be in scope.
macro_rules! derive_error_impls {
    () => {
        #[allow(dead_code)]
        impl Error {
            pub fn kind(&self) -> ErrorKind {
                self.inner.get_context().clone()
            }
        }

        impl Fail for Error {
            fn cause(&self) -> Option<&Fail> {
                self.inner.cause()
            }

            fn backtrace(&self) -> Option<&Backtrace> {
                self.inner.backtrace()
            }
        }

        impl Display for Error {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                Display::fmt(&self.inner, f)
            }
        }

        impl From<ErrorKind> for Error {
            fn from(kind: ErrorKind) -> Error {
                Error { inner: Context::new(kind) }
            }
        }

        impl From<Context<ErrorKind>> for Error {
            fn from(inner: Context<ErrorKind>) -> Error {
                Error { inner: inner }
            }
        }
    };
}
