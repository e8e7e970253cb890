/// Carousel navigation over the pair store
///
/// A single cursor wraps modulo the pair count in both directions. Every
/// cursor change clears the ready flag, which forces the scene composer to
/// wait for the new pair's load confirmation before showing geometry — this
/// prevents a flash of the previous texture on a freshly composed plane.

/// Cursor plus readiness gate for the pair currently in view
#[derive(Debug, Clone, Copy, Default)]
pub struct Navigator {
    current: usize,
    ready: bool,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// True once the pair at the cursor has finished decoding
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Advance circularly. No-op on an empty store.
    pub fn next(&mut self, len: usize) {
        if len > 0 {
            self.current = (self.current + 1) % len;
            self.ready = false;
        }
    }

    /// Retreat circularly. No-op on an empty store.
    pub fn prev(&mut self, len: usize) {
        if len > 0 {
            self.current = (self.current + len - 1) % len;
            self.ready = false;
        }
    }

    /// Jump straight to an index (thumbnail strip). Out-of-range requests
    /// are ignored; landing on the same index keeps the current readiness.
    pub fn select(&mut self, index: usize, len: usize) {
        if index < len && index != self.current {
            self.current = index;
            self.ready = false;
        }
    }

    /// Re-establish the cursor invariant after the store length changed.
    ///
    /// Policy: pin to the last valid pair when the store shrank below the
    /// cursor, and to 0 when it emptied. Readiness resets only if the
    /// cursor actually moved.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.current = 0;
            self.ready = false;
        } else if self.current >= len {
            self.current = len - 1;
            self.ready = false;
        }
    }

    /// Record that a texture for `index` finished loading. Stale results
    /// (the cursor moved on while the decode ran) are discarded.
    pub fn mark_ready(&mut self, index: usize) {
        if index == self.current {
            self.ready = true;
        }
    }
}
