//! Glue between decoded client messages and option selection.

use super::{
    code::OptionCode,
    options::{OptionSet, ReplyOption},
};
use dhcproto::v4;

/// The client's parameter request list (option 55), in the order it was sent.
///
/// Returns `None` when the message carries no option 55.
pub fn requested_codes(msg: &v4::Message) -> Option<Vec<OptionCode>> {
    match msg.opts().get(v4::OptionCode::ParameterRequestList) {
        Some(v4::DhcpOption::ParameterRequestList(codes)) => {
            Some(codes.iter().copied().map(OptionCode::from).collect())
        }
        _ => None,
    }
}

impl OptionSet {
    /// Selects reply options for `msg`. A message without a parameter request
    /// list gets every stored option.
    pub fn select_for(&self, msg: &v4::Message) -> Vec<ReplyOption> {
        let requested = requested_codes(msg);
        if requested.is_none() {
            tracing::debug!(
                "XID={:x} has no parameter request list, selecting all options",
                msg.xid()
            );
        }
        self.select_order_or_all(requested.as_deref())
    }
}
