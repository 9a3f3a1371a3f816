//! Cursor samples taken when a proxy window is activated.
//!
//! The OS reports activation before the restore that triggers the popup, so
//! the hook sample is the most faithful record of where the user clicked.
//! By the time the restore is handled the cursor may have moved on.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use taskdock_common::types::Point;
use taskdock_platform::NativeHandle;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleSource {
    Hook,
    Immediate,
}

/// Pointer position in physical pixels with its capture instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorSample {
    pub position: Point,
    pub captured_at: Instant,
    pub source: SampleSource,
}

impl CursorSample {
    pub fn hook(position: Point, captured_at: Instant) -> Self {
        Self {
            position,
            captured_at,
            source: SampleSource::Hook,
        }
    }

    pub fn immediate(position: Point, captured_at: Instant) -> Self {
        Self {
            position,
            captured_at,
            source: SampleSource::Immediate,
        }
    }

    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.captured_at)
    }

    pub fn is_fresh(&self, now: Instant, threshold: Duration) -> bool {
        self.age(now) < threshold
    }
}

/// Prefer a fresh hook sample, else the immediate one.
///
/// Returns `None` only when there is no immediate sample and the hook
/// sample is missing or stale.
pub fn choose_sample(
    hook: Option<CursorSample>,
    immediate: Option<CursorSample>,
    now: Instant,
    freshness: Duration,
) -> Option<CursorSample> {
    match hook {
        Some(sample) if sample.is_fresh(now, freshness) => Some(sample),
        _ => immediate,
    }
}

/// Latest hook sample per proxy window.
#[derive(Debug)]
pub struct ActivationTracker {
    samples: HashMap<NativeHandle, CursorSample>,
    freshness: Duration,
}

impl ActivationTracker {
    pub fn new(freshness: Duration) -> Self {
        Self {
            samples: HashMap::new(),
            freshness,
        }
    }

    pub fn freshness(&self) -> Duration {
        self.freshness
    }

    /// Store the sample a window's activation hook captured, replacing any older one.
    pub fn record(&mut self, window: NativeHandle, position: Point, at: Instant) {
        debug!(window = ?window, x = position.x, y = position.y, "activation sample");
        self.samples.insert(window, CursorSample::hook(position, at));
    }

    pub fn most_recent_sample(&self, window: NativeHandle) -> Option<CursorSample> {
        self.samples.get(&window).copied()
    }

    /// Pick between this window's hook sample and `immediate` at `now`.
    pub fn resolve(
        &self,
        window: NativeHandle,
        immediate: Option<CursorSample>,
        now: Instant,
    ) -> Option<CursorSample> {
        choose_sample(
            self.most_recent_sample(window),
            immediate,
            now,
            self.freshness,
        )
    }

    pub fn forget(&mut self, window: NativeHandle) {
        self.samples.remove(&window);
    }

    /// Drop samples of windows that no longer exist.
    pub fn retain(&mut self, mut keep: impl FnMut(NativeHandle) -> bool) {
        self.samples.retain(|window, _| keep(*window));
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
