//! Writing samples out for the user.

use std::io::{self, Write};

use crate::{collection::cpu::Snapshot, constants::SAMPLE_HEADER};

/// Writes a header line followed by the user, nice, system, and idle
/// percentages of `snapshot`, tab-separated.
///
/// Values use the shortest representation that round-trips, so a zero total
/// shows up as `NaN`. Tiny shares are written out in full rather than in
/// exponent form, e.g. `0.00001` and not `1e-5`.
pub fn write_snapshot<W: Write>(out: &mut W, snapshot: &Snapshot) -> io::Result<()> {
    writeln!(out, "{SAMPLE_HEADER}")?;
    writeln!(
        out,
        "{}\t{}\t{}\t{}",
        snapshot.user_percent, snapshot.nice_percent, snapshot.system_percent, snapshot.idle_percent
    )
}
