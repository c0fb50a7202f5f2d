use std::ffi::OsString;

use super::definitions::DEFAULT_HASHER_CMD;

/// Which external command is invoked to obtain raw hash values.
#[derive(Debug, Clone)]
pub struct HasherCfg {
    pub command: OsString,
}

impl Default for HasherCfg {
    fn default() -> Self {
        Self {
            command: OsString::from(DEFAULT_HASHER_CMD),
        }
    }
}
