//! How to handle config files and arguments.

pub mod args;
pub mod config;
mod error;

use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
    time::Duration,
};

use log::debug;

pub use self::{
    args::Args,
    config::Config,
    error::{OptionError, OptionResult},
};
use self::{config::StringOrNum, error::OptionSource};
use crate::{collection::CpuCollector, constants::*, sampler::SamplerConfig};

/// Returns the config path to use. If `override_config_path` is specified,
/// then we will use that. If not, then we use the default config location.
pub fn get_config_path(override_config_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(conf_loc) = override_config_path {
        return Some(conf_loc.to_path_buf());
    }

    dirs::config_dir().map(|config_dir| config_dir.join(DEFAULT_CONFIG_FILE_LOCATION))
}

fn create_config_at_path(path: &Path) -> OptionResult<Config> {
    if let Some(parent_path) = path.parent() {
        fs::create_dir_all(parent_path)?;
    }

    let mut file = fs::File::create(path)?;
    file.write_all(CONFIG_TEXT.as_bytes())?;

    Ok(Config::default())
}

/// Get the config at `config_path`. If there is no config file at the
/// specified path, it will try to create a new file with the default settings,
/// and return the default config, unless `no_write` is set.
pub fn get_or_create_config(config_path: Option<&Path>, no_write: bool) -> OptionResult<Config> {
    let Some(path) = get_config_path(config_path) else {
        return Ok(Config::default());
    };

    match fs::read_to_string(&path) {
        Ok(config_string) => Ok(toml_edit::de::from_str(&config_string)?),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            if no_write {
                debug!("no config at {}, using defaults", path.display());
                Ok(Config::default())
            } else {
                debug!("creating a default config at {}", path.display());
                create_config_at_path(&path)
            }
        }
        Err(err) => Err(err.into()),
    }
}

/// Builds the [`SamplerConfig`] from the arguments and config file. Arguments
/// take precedence over the config file.
pub fn init_sampler(args: &Args, config: &Config) -> OptionResult<SamplerConfig> {
    let rate = get_rate(args, config)?;
    let source = get_source(args, config);
    let count = get_count(args, config);

    Ok(SamplerConfig {
        rate,
        collector: CpuCollector::new(source),
        count,
    })
}

/// Try and parse a value as milliseconds, or a human-readable duration.
fn try_parse_ms(s: &str) -> Option<u64> {
    if let Ok(ms) = s.parse::<u64>() {
        Some(ms)
    } else {
        humantime::parse_duration(s)
            .ok()
            .and_then(|duration| duration.as_millis().try_into().ok())
    }
}

fn get_rate(args: &Args, config: &Config) -> OptionResult<Duration> {
    let (ms, source) = if let Some(rate) = &args.general_args.rate {
        let ms = try_parse_ms(rate)
            .ok_or_else(|| OptionError::invalid_value(OptionSource::Argument, "rate"))?;

        (ms, OptionSource::Argument)
    } else if let Some(rate) = config.flags.as_ref().and_then(|flags| flags.rate.as_ref()) {
        let ms = match rate {
            StringOrNum::String(s) => try_parse_ms(s)
                .ok_or_else(|| OptionError::invalid_value(OptionSource::Config, "rate"))?,
            StringOrNum::Num(n) => *n,
        };

        (ms, OptionSource::Config)
    } else {
        return Ok(Duration::from_millis(DEFAULT_RATE_IN_MILLISECONDS));
    };

    if ms < MINIMUM_RATE_IN_MILLISECONDS {
        return Err(OptionError::below_minimum(
            source,
            "rate",
            &format!("{MINIMUM_RATE_IN_MILLISECONDS}ms"),
        ));
    }

    Ok(Duration::from_millis(ms))
}

fn get_source(args: &Args, config: &Config) -> PathBuf {
    args.general_args
        .source
        .as_deref()
        .or_else(|| config.flags.as_ref().and_then(|flags| flags.source.as_deref()))
        .unwrap_or(DEFAULT_SOURCE_PATH)
        .into()
}

fn get_count(args: &Args, config: &Config) -> Option<u64> {
    args.general_args
        .count
        .or_else(|| config.flags.as_ref().and_then(|flags| flags.count))
        .filter(|&count| count > 0)
}
