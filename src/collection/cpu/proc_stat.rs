//! Parsing for the `/proc/stat` counter format.
//!
//! Only the first line (the aggregate `cpu` line) is decoded. The per-core
//! `cpuN` lines after it are just counted. See `man 5 proc` for the format.

use std::io::BufRead;

use super::RawCounters;
use crate::collection::error::{CollectionError, CollectionResult};

type CounterSetter = fn(&mut RawCounters, u64);

/// The counters on the aggregate line, in positional order.
const COUNTERS: [(&str, CounterSetter); 10] = [
    ("user", |c, v| c.user = v),
    ("nice", |c, v| c.nice = v),
    ("system", |c, v| c.system = v),
    ("idle", |c, v| c.idle = v),
    ("iowait", |c, v| c.iowait = v),
    ("irq", |c, v| c.irq = v),
    ("softirq", |c, v| c.softirq = v),
    ("steal", |c, v| c.steal = v),
    ("guest", |c, v| c.guest = v),
    ("guest_nice", |c, v| c.guest_nice = v),
];

/// The raw result of parsing a counter stream, before any percentages are
/// derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcStat {
    pub counters: RawCounters,
    pub cpu_count: usize,
    pub stat_count: usize,
}

/// Parses the counters out of a `/proc/stat`-formatted stream, consuming it to
/// the end.
pub fn parse<R: BufRead>(mut reader: R) -> CollectionResult<ProcStat> {
    let mut buffer = Vec::new();

    if !next_line(&mut reader, &mut buffer)? {
        return Err(CollectionError::EmptyInput);
    }

    let (counters, stat_count) = {
        let first_line = String::from_utf8_lossy(&buffer);
        let fields = first_line.split_whitespace().skip(1).collect::<Vec<_>>();

        let mut counters = RawCounters::default();
        for (index, &(name, set)) in COUNTERS.iter().enumerate() {
            let value = fields
                .get(index)
                .and_then(|field| parse_counter(field))
                .ok_or(CollectionError::FieldParse(name))?;

            set(&mut counters, value);
        }

        (counters, fields.len())
    };

    let mut cpu_count = 0;
    while next_line(&mut reader, &mut buffer)? {
        if is_core_line(&buffer) {
            cpu_count += 1;
        }
    }

    Ok(ProcStat {
        counters,
        cpu_count,
        stat_count,
    })
}

/// Reads the next line into `buffer` without its line ending. Returns `false`
/// once the stream is exhausted.
fn next_line<R: BufRead>(reader: &mut R, buffer: &mut Vec<u8>) -> CollectionResult<bool> {
    buffer.clear();

    let read = reader
        .read_until(b'\n', buffer)
        .map_err(CollectionError::StreamRead)?;

    if buffer.last() == Some(&b'\n') {
        buffer.pop();
        if buffer.last() == Some(&b'\r') {
            buffer.pop();
        }
    }

    Ok(read > 0)
}

/// Counters are plain decimal digits; `str::parse` alone would also take a
/// leading `+`.
fn parse_counter(field: &str) -> Option<u64> {
    if field.bytes().all(|b| b.is_ascii_digit()) {
        field.parse().ok()
    } else {
        None
    }
}

/// Whether a line is a per-core line, i.e. `cpu` followed by a digit.
#[inline]
fn is_core_line(line: &[u8]) -> bool {
    line.starts_with(b"cpu") && line.get(3).is_some_and(u8::is_ascii_digit)
}
