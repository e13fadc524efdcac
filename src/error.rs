use std::{io, net::Ipv4Addr, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Dhcp4KitError {
    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("Failed to parse profile")]
    Json(#[from] serde_json::Error),

    #[error("IPv4 address must be exactly 4 bytes, got {0}")]
    AddressLength(usize),

    #[error("Adding {offset} to {start} leaves the IPv4 address space")]
    AddressOverflow { start: Ipv4Addr, offset: i64 },

    #[error("Invalid address range: {start} is greater than {stop}")]
    InvalidRange { start: Ipv4Addr, stop: Ipv4Addr },

    #[error("Lease time of {0:?} does not fit in 32 bits of seconds")]
    LeaseOverflow(Duration),

    #[error("Invalid profile: {0}")]
    InvalidProfile(String),
}

pub type Result<T> = std::result::Result<T, Dhcp4KitError>;
