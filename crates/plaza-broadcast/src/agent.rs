//! Flush requests on behalf of timing code.

use plaza_board::{BoardProxy, FlushReport};

/// Requests broadcasts from a board it cannot otherwise touch.
#[derive(Clone, Debug)]
pub struct BroadcastAgent {
    proxy: BoardProxy,
}

impl BroadcastAgent {
    /// Wrap a proxy.
    pub fn new(proxy: BoardProxy) -> Self {
        Self { proxy }
    }

    /// Flush the board's pending changes to its listeners.
    pub fn request_broadcast(&self) -> FlushReport {
        self.proxy.send_changes()
    }
}
