//! Data collection for aggregate CPU usage.
//!
//! Percentages here are shares of the cumulative tick counters since boot, not
//! the load over the last sampling interval.

pub mod proc_stat;

use std::io::BufRead;

pub use self::proc_stat::{parse, ProcStat};
use crate::collection::error::CollectionResult;

/// The cumulative tick counters from the aggregate `cpu` line, in the order the
/// kernel reports them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawCounters {
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
    pub iowait: u64,
    pub irq: u64,
    pub softirq: u64,
    pub steal: u64,
    /// Already accounted for in `user`.
    pub guest: u64,
    /// Already accounted for in `nice`.
    pub guest_nice: u64,
}

impl RawCounters {
    /// The total tick count, without double counting guest time.
    ///
    /// `guest` is included in `user` and `guest_nice` in `nice`, so this is
    /// the sum of the eight remaining counters. See
    /// <https://github.com/torvalds/linux/blob/4ec9f7a18/kernel/sched/cputime.c#L151-L158>.
    pub fn total(&self) -> u64 {
        [
            self.user,
            self.nice,
            self.system,
            self.idle,
            self.iowait,
            self.irq,
            self.softirq,
            self.steal,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

/// A single sample of the CPU counters along with the derived percentages.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub counters: RawCounters,
    pub total: u64,
    /// How many per-core `cpuN` lines followed the aggregate line.
    pub cpu_count: usize,
    /// How many fields followed the label on the aggregate line.
    pub stat_count: usize,
    pub user_percent: f64,
    pub nice_percent: f64,
    pub system_percent: f64,
    pub idle_percent: f64,
}

impl Snapshot {
    /// Returns `value` as a percentage of this snapshot's total.
    ///
    /// This is `NaN` (or infinite) if the total is zero.
    pub fn percent_of(&self, value: u64) -> f64 {
        percent(value, self.total)
    }
}

impl From<ProcStat> for Snapshot {
    fn from(stat: ProcStat) -> Self {
        let ProcStat {
            counters,
            cpu_count,
            stat_count,
        } = stat;
        let total = counters.total();

        Snapshot {
            counters,
            total,
            cpu_count,
            stat_count,
            user_percent: percent(counters.user, total),
            nice_percent: percent(counters.nice, total),
            system_percent: percent(counters.system, total),
            idle_percent: percent(counters.idle, total),
        }
    }
}

#[inline]
fn percent(value: u64, total: u64) -> f64 {
    100.0 * value as f64 / total as f64
}

/// Parses a `/proc/stat`-formatted stream and derives a [`Snapshot`] from it.
pub fn read_snapshot<R: BufRead>(reader: R) -> CollectionResult<Snapshot> {
    parse(reader).map(Snapshot::from)
}
