//! Lease time encoding for options 51, 58 and 59.
//!
//! Durations are truncated to whole seconds and written as 4-byte big-endian
//! values. A duration that does not fit saturates to `0xFFFF_FFFF`, which
//! RFC 2132 reserves for an infinite lease.

use crate::error::{Dhcp4KitError, Result};
use std::time::Duration;

pub const INFINITE_LEASE: [u8; 4] = u32::MAX.to_be_bytes();

/// Encodes `duration` as whole seconds, saturating at `u32::MAX`.
pub fn encode_lease_seconds(duration: Duration) -> [u8; 4] {
    let secs = u32::try_from(duration.as_secs()).unwrap_or_else(|_| {
        tracing::warn!(
            "Lease time {:?} exceeds 32 bits, encoding as infinite",
            duration
        );
        u32::MAX
    });
    secs.to_be_bytes()
}

/// Encodes `duration` as whole seconds, failing if it does not fit 32 bits.
pub fn try_encode_lease_seconds(duration: Duration) -> Result<[u8; 4]> {
    u32::try_from(duration.as_secs())
        .map(u32::to_be_bytes)
        .map_err(|_| Dhcp4KitError::LeaseOverflow(duration))
}

/// T1: half of the lease (RFC 2131 §4.4.5).
pub fn renewal_time(lease: Duration) -> Duration {
    lease / 2
}

/// T2: seven eighths of the lease (RFC 2131 §4.4.5).
pub fn rebinding_time(lease: Duration) -> Duration {
    lease / 8 * 7
}
