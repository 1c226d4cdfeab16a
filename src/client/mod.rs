pub mod etherscan;
pub mod http_client;

pub use self::etherscan::*;
pub use self::http_client::*;
