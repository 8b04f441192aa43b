pub mod flags;

use serde::Deserialize;

use self::flags::FlagConfig;

/// The contents of a cpustat config file.
#[derive(Debug, Default, Deserialize)]
#[cfg_attr(test, serde(deny_unknown_fields))]
pub struct Config {
    pub(crate) flags: Option<FlagConfig>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub(crate) enum StringOrNum {
    String(String),
    Num(u64),
}
