//! IPv4 address arithmetic for pool bookkeeping.
//!
//! Addresses are treated as unsigned 32-bit big-endian integers. The free
//! functions are total: [`range_size`] does not check bound order and [`add`]
//! wraps modulo 2^32. Use [`checked_add`] or [`AddressRange::new`] when the
//! input still needs validating.

use crate::error::{Dhcp4KitError, Result};
use std::{net::Ipv4Addr, ops::RangeInclusive};

/// Builds an address from a raw buffer, rejecting anything but 4 bytes.
pub fn from_octets(bytes: &[u8]) -> Result<Ipv4Addr> {
    <[u8; 4]>::try_from(bytes)
        .map(Ipv4Addr::from)
        .map_err(|_| Dhcp4KitError::AddressLength(bytes.len()))
}

/// Number of addresses in `[start, stop]`, both ends included.
///
/// If `stop < start` the result is zero or negative.
pub fn range_size(start: Ipv4Addr, stop: Ipv4Addr) -> i64 {
    i64::from(u32::from(stop)) - i64::from(u32::from(start)) + 1
}

/// Returns `start + offset`, wrapping modulo 2^32.
///
/// `add(192.168.1.1, 30)` is `192.168.1.31`.
pub fn add(start: Ipv4Addr, offset: i64) -> Ipv4Addr {
    // Truncating the offset to u32 is the same as reducing it modulo 2^32.
    Ipv4Addr::from(u32::from(start).wrapping_add(offset as u32))
}

/// Returns `start + offset`, or an error if the sum is outside the address space.
pub fn checked_add(start: Ipv4Addr, offset: i64) -> Result<Ipv4Addr> {
    i64::from(u32::from(start))
        .checked_add(offset)
        .and_then(|sum| u32::try_from(sum).ok())
        .map(Ipv4Addr::from)
        .ok_or(Dhcp4KitError::AddressOverflow { start, offset })
}

/// Octet-wise comparison; `false` when the addresses are equal.
pub fn less_than(a: Ipv4Addr, b: Ipv4Addr) -> bool {
    a.octets() < b.octets()
}

/// True if `start <= candidate <= stop`.
pub fn in_range(start: Ipv4Addr, stop: Ipv4Addr, candidate: Ipv4Addr) -> bool {
    !less_than(candidate, start) && !less_than(stop, candidate)
}

/// An inclusive address pool whose bounds are known to be ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressRange {
    start: Ipv4Addr,
    stop: Ipv4Addr,
}

impl AddressRange {
    pub fn new(start: Ipv4Addr, stop: Ipv4Addr) -> Result<Self> {
        if less_than(stop, start) {
            return Err(Dhcp4KitError::InvalidRange { start, stop });
        }
        Ok(Self { start, stop })
    }

    pub fn start(&self) -> Ipv4Addr {
        self.start
    }

    pub fn stop(&self) -> Ipv4Addr {
        self.stop
    }

    /// Number of addresses in the pool, never zero.
    pub fn size(&self) -> u64 {
        // Bounds are ordered, so the count is at least 1.
        range_size(self.start, self.stop) as u64
    }

    pub fn contains(&self, candidate: Ipv4Addr) -> bool {
        in_range(self.start, self.stop, candidate)
    }

    /// The address `offset` positions after `start`, if it is still in the pool.
    pub fn nth(&self, offset: u64) -> Option<Ipv4Addr> {
        if offset >= self.size() {
            return None;
        }
        Some(add(self.start, offset as i64))
    }

    /// Position of `candidate` relative to `start`.
    pub fn offset_of(&self, candidate: Ipv4Addr) -> Option<u64> {
        self.contains(candidate)
            .then(|| (range_size(self.start, candidate) - 1) as u64)
    }

    pub fn iter(&self) -> impl Iterator<Item = Ipv4Addr> {
        self.as_u32_range().map(Ipv4Addr::from)
    }

    fn as_u32_range(&self) -> RangeInclusive<u32> {
        u32::from(self.start)..=u32::from(self.stop)
    }
}
