mod data_source;
mod error;
mod metrics;
mod pipeline;

pub use self::data_source::*;
pub use self::error::*;
pub use self::metrics::*;
pub use self::pipeline::*;

use futures::Future;

pub type ServiceFuture<T> = Box<Future<Item = T, Error = Error> + Send>;
