/// Collapses a burst of scroll notifications into one frame pass.
///
/// The web layer calls [`ScrollDispatcher::notify`] from the scroll listener
/// and requests an animation frame only when it returns `true`. The frame
/// callback then calls [`ScrollDispatcher::take_frame`] to read the newest
/// offset and clear the pending flag.
#[derive(Clone, Debug, Default)]
pub struct ScrollDispatcher {
    last_offset: f64,
    pending: bool,
}

impl ScrollDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `offset`. Returns `true` when the caller must schedule a frame.
    pub fn notify(&mut self, offset: f64) -> bool {
        self.last_offset = offset;
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Clear the pending flag and return the offset to render, or `None`
    /// when no frame was requested.
    pub fn take_frame(&mut self) -> Option<f64> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        Some(self.last_offset)
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    #[inline]
    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }
}
