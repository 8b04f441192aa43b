use std::borrow::Cow;

use thiserror::Error;

/// An error around some option-setting, and the reason.
///
/// These are meant to be user-facing (e.g. explain why it's broken and what to
/// fix), and as so treat it as such! Use _single quotes_ (e.g. `'bad'`) for
/// highlighting option names and values.
#[derive(Debug, Error, PartialEq)]
pub enum OptionError {
    #[error("Configuration file error: {0}")]
    Config(Cow<'static, str>),
    #[error("Argument error: {0}")]
    Argument(Cow<'static, str>),
    #[error("Error with the config file or the arguments: {0}")]
    Other(Cow<'static, str>),
}

/// Where an option's value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OptionSource {
    Argument,
    Config,
}

impl OptionError {
    /// An option was set to something that could not be understood.
    pub(crate) fn invalid_value(source: OptionSource, name: &str) -> Self {
        match source {
            OptionSource::Argument => OptionError::Argument(Cow::Owned(format!(
                "'--{name}' was set with an invalid value, please update your arguments."
            ))),
            OptionSource::Config => OptionError::Config(Cow::Owned(format!(
                "'{name}' was set with an invalid value, please update it in your config file."
            ))),
        }
    }

    /// An option was set to a value below what is allowed.
    pub(crate) fn below_minimum(source: OptionSource, name: &str, minimum: &str) -> Self {
        match source {
            OptionSource::Argument => {
                OptionError::Argument(Cow::Owned(format!("'--{name}' must be at least {minimum}.")))
            }
            OptionSource::Config => {
                OptionError::Config(Cow::Owned(format!("'{name}' must be at least {minimum}.")))
            }
        }
    }
}

pub type OptionResult<T> = Result<T, OptionError>;

impl From<toml_edit::de::Error> for OptionError {
    fn from(err: toml_edit::de::Error) -> Self {
        OptionError::Config(err.to_string().into())
    }
}

impl From<std::io::Error> for OptionError {
    fn from(err: std::io::Error) -> Self {
        OptionError::Other(err.to_string().into())
    }
}
