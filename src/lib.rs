//! # dhcp4kit - DHCPv4 Reply Building Blocks
//!
//! dhcp4kit provides the stateless pieces a DHCPv4 server needs while putting
//! together a reply: choosing options in the order a client asked for them,
//! walking and checking address pools, and encoding lease times and address
//! lists in network byte order (RFC 2131/2132).
//!
//! ## Features
//!
//! - Option selection driven by the parameter request list (option 55)
//! - IPv4 pool arithmetic with explicit wrap and checked variants
//! - Lease, renewal and rebinding time encoding
//! - JSON reply profiles and a small CLI
//!
//! ## Example
//!
//! ```rust
//! use dhcp4kit::v4::{concat_addresses, encode_lease_seconds, OptionCode, OptionSet};
//! use std::{net::Ipv4Addr, time::Duration};
//!
//! let mut options = OptionSet::new();
//! options.insert(OptionCode::Router, concat_addresses(&[Ipv4Addr::new(10, 0, 0, 1)]));
//! options.insert(
//!     OptionCode::AddressLeaseTime,
//!     encode_lease_seconds(Duration::from_secs(3600)).to_vec(),
//! );
//!
//! let reply = options.select_order(&[OptionCode::AddressLeaseTime, OptionCode::DomainName]);
//! assert_eq!(reply.len(), 1);
//! assert_eq!(&reply[0].value[..], &[0x00, 0x00, 0x0e, 0x10]);
//! ```

pub mod config;
pub mod error;
pub mod v4;

pub use config::{Args, Profile};
pub use error::{Dhcp4KitError, Result};
pub use v4::{OptionCode, OptionSet, ReplyOption};
