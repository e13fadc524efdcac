use bytes::{BufMut as _, Bytes, BytesMut};
use std::net::Ipv4Addr;

/// Concatenates addresses into one buffer of `4 * addrs.len()` bytes, in input
/// order and without separators. Used for multi-address options such as
/// Router (3) and Domain Name Server (6).
pub fn concat_addresses(addrs: &[Ipv4Addr]) -> Bytes {
    let mut buf = BytesMut::with_capacity(addrs.len() * 4);
    for addr in addrs {
        buf.put_slice(&addr.octets());
    }
    buf.freeze()
}
