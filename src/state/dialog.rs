#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

/// Token tying an in-flight fetch chain to the dialog open that started
/// it. Stale tokens are ignored, so a dialog closed mid-chain never has
/// its view mutated by late responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Epoch(u64);

/// A modal dialog bound to one resource's detail or an editable form.
///
/// Exactly two phases: hidden, or shown with data. Opening captures an
/// epoch token, fetches, then presents; closing hides and bumps the
/// epoch so in-flight presents become no-ops. Data is never kept across
/// opens — every open re-fetches.
#[derive(Clone, Debug)]
pub struct Dialog<T> {
    data: Option<T>,
    epoch: u64,
}

impl<T> Default for Dialog<T> {
    fn default() -> Self {
        Self { data: None, epoch: 0 }
    }
}

impl<T> Dialog<T> {
    /// Begin an open: invalidates earlier tokens and returns the token
    /// the eventual `present` must carry.
    pub fn begin_open(&mut self) -> Epoch {
        self.epoch += 1;
        Epoch(self.epoch)
    }

    /// Show the dialog with freshly fetched data. Returns `false` (and
    /// changes nothing) if the token is stale.
    pub fn present(&mut self, token: Epoch, data: T) -> bool {
        if token.0 != self.epoch {
            return false;
        }
        self.data = Some(data);
        true
    }

    /// Hide the dialog and discard its data. Any fetch still in flight
    /// for this dialog is orphaned.
    pub fn close(&mut self) {
        self.epoch += 1;
        self.data = None;
    }

    /// Whether `token` still belongs to the current open.
    pub fn is_current(&self, token: Epoch) -> bool {
        token.0 == self.epoch
    }

    pub fn is_shown(&self) -> bool {
        self.data.is_some()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        self.data.as_mut()
    }
}
