//! Gets network counters via sysinfo.

use sysinfo::Networks;

use super::CounterSource;
use crate::collection::error::{CollectionError, CollectionResult};

/// Sums the transmitted byte counters of every interface sysinfo knows about.
pub struct SysinfoCounter {
    networks: Networks,
}

impl SysinfoCounter {
    pub fn new() -> CollectionResult<Self> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(CollectionError::Unsupported);
        }

        Ok(Self {
            networks: Networks::new_with_refreshed_list(),
        })
    }
}

impl CounterSource for SysinfoCounter {
    fn bytes_sent(&mut self) -> CollectionResult<u64> {
        // Interfaces that went away are dropped, so the total can go down.
        self.networks.refresh(true);

        total_transmitted(
            self.networks
                .list()
                .values()
                .map(|network| network.total_transmitted()),
        )
    }
}

/// Adds up per-interface totals, saturating instead of overflowing. Having no
/// interfaces at all is an error rather than a zero.
fn total_transmitted(per_interface: impl IntoIterator<Item = u64>) -> CollectionResult<u64> {
    let mut per_interface = per_interface.into_iter().peekable();

    if per_interface.peek().is_none() {
        return Err(CollectionError::from_str(
            "no network interfaces were found to read counters from",
        ));
    }

    Ok(per_interface.fold(0u64, u64::saturating_add))
}
