//! Pagination bridge.
//!
//! [`PageBridge`] sits between the navigator's load-more edge and whatever
//! actually fetches data. It enforces the one property the navigator relies
//! on: requesting while a load is already in flight is a no-op, so hammering
//! Down at the bottom edge issues exactly one fetch. It also latches
//! end-of-data so an exhausted source stops advertising more.
//!
//! The bridge never awaits anything. The loader's completion path calls
//! [`notify_loaded`](PageBridge::notify_loaded) once new items have landed;
//! for loaders that complete off the key-handling thread, [`shared`] wraps
//! the bridge in an `Arc<Mutex<_>>` handle both sides can hold.

use parking_lot::Mutex;
use std::sync::Arc;

/// Data source that can fetch additional pages.
pub trait PageLoader {
    /// Whether more data may exist past what has been loaded.
    fn has_more(&self) -> bool;
    /// Kick off a fetch of the next page. Fire-and-forget.
    fn load_more(&mut self);
}

/// In-flight latch around a [`PageLoader`].
#[derive(Debug)]
pub struct PageBridge<L> {
    loader: L,
    in_flight: bool,
    exhausted: bool,
}

impl<L: PageLoader> PageBridge<L> {
    /// Wrap a loader.
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            in_flight: false,
            exhausted: false,
        }
    }

    /// Whether a request is currently outstanding.
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Whether more data may be available.
    #[must_use]
    pub fn can_load_more(&self) -> bool {
        !self.exhausted && self.loader.has_more()
    }

    /// Request the next page. No-op while a request is outstanding or after
    /// the source reported end-of-data.
    pub fn request(&mut self) {
        if self.in_flight || !self.can_load_more() {
            return;
        }
        self.in_flight = true;
        self.loader.load_more();
    }

    /// Completion: `appended` items landed. Zero appended marks the source
    /// exhausted.
    pub fn notify_loaded(&mut self, appended: usize) {
        self.in_flight = false;
        if appended == 0 {
            self.exhausted = true;
        }
    }

    /// Explicitly mark the source exhausted.
    pub fn end_of_data(&mut self) {
        self.exhausted = true;
    }

    /// Clear the in-flight and exhausted latches, e.g. after the backing
    /// list is refreshed from scratch.
    pub fn reset(&mut self) {
        self.in_flight = false;
        self.exhausted = false;
    }

    /// Access the wrapped loader.
    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Mutable access to the wrapped loader.
    pub fn loader_mut(&mut self) -> &mut L {
        &mut self.loader
    }
}

/// Bridge shared between the key-handling path and a loader completion path.
pub type SharedPageBridge<L> = Arc<Mutex<PageBridge<L>>>;

/// Wrap a loader in a [`SharedPageBridge`].
pub fn shared<L: PageLoader>(loader: L) -> SharedPageBridge<L> {
    Arc::new(Mutex::new(PageBridge::new(loader)))
}
