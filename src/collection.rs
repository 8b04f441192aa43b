//! This is the main file to house data collection functions.

pub mod cpu;
pub mod error;

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use log::trace;

use self::{
    cpu::Snapshot,
    error::{CollectionError, CollectionResult},
};
use crate::constants::DEFAULT_SOURCE_PATH;

/// Samples the CPU counters from a file in the `/proc/stat` format.
///
/// The file is opened fresh for every sample, since procfs files only reflect
/// the current state at the time they are opened.
#[derive(Debug, Clone)]
pub struct CpuCollector {
    source: PathBuf,
}

impl Default for CpuCollector {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_PATH)
    }
}

impl CpuCollector {
    pub fn new<P: Into<PathBuf>>(source: P) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// The path that samples are read from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Takes a new [`Snapshot`] from the source.
    pub fn collect(&self) -> CollectionResult<Snapshot> {
        trace!("reading counters from {}", self.source.display());
        let file = File::open(&self.source).map_err(CollectionError::InvalidIo)?;

        cpu::read_snapshot(BufReader::new(file))
    }
}
