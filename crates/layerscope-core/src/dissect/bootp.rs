use tracing::{debug, trace};

use crate::protocols::bootp::parse_bootp;
use crate::protocols::dhcp::decode_options;
use crate::record::{FrameDissection, Layer};

use super::describe;

/// BOOTP header, then the DHCP option stream when the magic cookie is present.
pub(super) fn dissect(payload: &[u8], out: &mut FrameDissection) {
    let message = match parse_bootp(payload) {
        Ok(message) => message,
        Err(err) => {
            debug!(%err, "BOOTP header rejected");
            out.push(Layer::failed("BOOTP", &err));
            return;
        }
    };
    out.push(describe::bootp(&message));

    if let Some(options) = message.options() {
        let scan = decode_options(options);
        trace!(
            entries = scan.entries.len(),
            skipped = scan.skipped.len(),
            "DHCP options decoded"
        );
        out.push(describe::dhcp(&scan));
    }
}
