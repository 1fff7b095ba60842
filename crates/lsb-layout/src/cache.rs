//! Measurement cache.
//!
//! Measuring text is the only expensive step of a layout pass. The cache
//! remembers the size of every run keyed by the ordinal of its token, so a
//! relayout after scrolling or resizing only repositions boxes. Entries are
//! only trusted after a complete pass has filled the cache; any change to
//! the document or the fonts must call [`MeasureCache::invalidate`].

use std::collections::HashMap;

/// The measured size of one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Advance width.
    pub width: f32,
    /// Line height of the run's font.
    pub height: f32,
}

/// Per-token measurement cache.
#[derive(Debug, Default)]
pub struct MeasureCache {
    entries: HashMap<usize, Measurement>,
    valid: bool,
}

impl MeasureCache {
    /// A cached measurement for `ordinal`, only once the cache is valid.
    #[must_use]
    pub fn get(&self, ordinal: usize) -> Option<Measurement> {
        if self.valid {
            self.entries.get(&ordinal).copied()
        } else {
            None
        }
    }

    /// Record a fresh measurement.
    pub fn insert(&mut self, ordinal: usize, measurement: Measurement) {
        let _ = self.entries.insert(ordinal, measurement);
    }

    /// Mark the cache as filled by a complete pass.
    pub const fn mark_valid(&mut self) {
        self.valid = true;
    }

    /// Drop every entry; the next pass measures everything again.
    pub fn invalidate(&mut self) {
        self.entries.clear();
        self.valid = false;
    }

    /// Returns true once a complete pass has filled the cache.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Number of cached runs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
