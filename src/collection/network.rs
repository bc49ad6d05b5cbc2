//! Reading cumulative network counters.

pub mod sysinfo;
pub use self::sysinfo::*;

use super::error::CollectionResult;

/// Something that can report the host's cumulative outbound byte counter.
///
/// The counter is expected to only grow, but resets and wraparounds happen
/// and are reported as-is.
pub trait CounterSource {
    /// Returns the total number of bytes sent so far.
    fn bytes_sent(&mut self) -> CollectionResult<u64>;
}

impl<C: CounterSource + ?Sized> CounterSource for Box<C> {
    fn bytes_sent(&mut self) -> CollectionResult<u64> {
        (**self).bytes_sent()
    }
}
