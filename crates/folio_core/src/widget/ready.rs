//! One-shot readiness notification.

use crate::catalog::Catalog;

type ReadyCallback = Box<dyn FnOnce(&Catalog)>;

/// Fires queued callbacks exactly once, after the catalog load settles.
#[derive(Default)]
pub struct ReadySignal {
    settled: bool,
    pending: Vec<ReadyCallback>,
}

impl ReadySignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Queues `callback`, or runs it now when already settled.
    pub fn subscribe(&mut self, catalog: &Catalog, callback: impl FnOnce(&Catalog) + 'static) {
        if self.settled {
            callback(catalog);
        } else {
            self.pending.push(Box::new(callback));
        }
    }

    /// Settles the signal and drains queued callbacks in subscription order.
    ///
    /// Later calls are no-ops.
    pub fn settle(&mut self, catalog: &Catalog) {
        if self.settled {
            return;
        }
        self.settled = true;
        for callback in self.pending.drain(..) {
            callback(catalog);
        }
    }
}

impl std::fmt::Debug for ReadySignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadySignal")
            .field("settled", &self.settled)
            .field("pending", &self.pending.len())
            .finish()
    }
}
