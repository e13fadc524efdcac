//! DHCPv4 reply-building primitives
//!
//! This module contains the stateless helpers a DHCPv4 server calls while
//! assembling replies:
//! - Option code registry and option selection
//! - IPv4 address arithmetic for pools
//! - Lease time and address list encoding

pub mod address;
pub mod code;
pub mod join;
pub mod lease;
pub mod options;
pub mod request;


pub use address::{add, checked_add, from_octets, in_range, less_than, range_size, AddressRange};
pub use code::OptionCode;
pub use join::concat_addresses;
pub use lease::{encode_lease_seconds, rebinding_time, renewal_time, try_encode_lease_seconds};
pub use options::{OptionSet, ReplyOption};
pub use request::requested_codes;
