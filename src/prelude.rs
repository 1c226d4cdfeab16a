pub use failure::Fail;
pub use futures::prelude::*;
