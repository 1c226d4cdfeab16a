use std::fmt::{self, Display};

/// Account identifier exactly as upstream reported it.
/// Nothing about its content is guaranteed, so it must be escaped before it ends up in a label.
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct AccountAddress(String);

impl AccountAddress {
    pub fn new(address: String) -> Self {
        AccountAddress(address)
    }

    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
