mod account_address;
mod balance_report;
mod decimal_value;
mod exposition;

pub use self::account_address::*;
pub use self::balance_report::*;
pub use self::decimal_value::*;
pub use self::exposition::*;
