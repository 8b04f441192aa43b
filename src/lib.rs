//! A small sampler for aggregate CPU usage.
//!
//! The core of this crate is [`collection::cpu`], which turns a stream in the
//! `/proc/stat` format into a [`collection::cpu::Snapshot`] of cumulative
//! counters and user/nice/system/idle percentages. The rest is the loop that
//! samples it on an interval until interrupted.

pub mod collection;
pub mod constants;
pub mod display;
pub mod options;
pub mod sampler;

pub mod utils {
    pub mod cancellation_token;
    pub mod logging;
}

use std::{io, path::Path, sync::Arc};

use anyhow::Context;
use log::debug;

use crate::{options::args, sampler::Sampler, utils::cancellation_token::CancellationToken};

/// Parses the arguments and config, then samples until interrupted or until
/// enough samples were taken.
pub fn start_cpustat() -> anyhow::Result<()> {
    let args = args::get_args();

    #[cfg(feature = "logging")]
    {
        if let Some(log_file) = &args.other_args.log_file {
            utils::logging::init_logger(log::LevelFilter::Debug, std::ffi::OsStr::new(log_file))
                .context("Unable to initialize the logger.")?;
        }
    }

    let config = options::get_or_create_config(
        args.general_args.config_location.as_deref().map(Path::new),
        args.general_args.no_write,
    )
    .context("Unable to properly parse or create the config file.")?;

    let sampler = Sampler::new(options::init_sampler(&args, &config)?);
    debug!("starting with {:?}", sampler.config());

    // Set termination hook
    let cancellation_token = Arc::new(CancellationToken::default());
    {
        let cancellation_token = cancellation_token.clone();
        ctrlc::set_handler(move || cancellation_token.cancel())
            .context("Unable to set the termination handler.")?;
    }

    let mut stdout = io::stdout().lock();
    let ticks = sampler
        .run(&mut stdout, &cancellation_token)
        .context("Unable to write samples.")?;
    debug!("stopped after {ticks} samples");

    Ok(())
}
