//! Theme store
//!
//! The store owns the one current [`Theme`] and swaps it atomically:
//! - Readers take an `Arc<Theme>` snapshot and never see a half-updated theme
//! - Writers replace the whole theme; there is no per-token mutation
//! - Subscribers are notified after every swap, outside the theme lock
//! - Swaps and their notifications are serialized, so subscribers see
//!   generations in order and the last notification matches the store

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use slotmap::{new_key_type, SlotMap};
use tracing::debug;

use crate::theme::Theme;

new_key_type! {
    /// Handle returned by [`ThemeStore::subscribe`]
    pub struct SubscriptionId;
}

/// Notification delivered to subscribers after a swap
#[derive(Clone, Debug)]
pub struct ThemeChange {
    pub previous: Arc<Theme>,
    pub current: Arc<Theme>,
    /// Generation of `current`; strictly increasing per store
    pub generation: u64,
}

type Subscriber = Arc<dyn Fn(&ThemeChange) + Send + Sync>;

/// Shared holder of the current theme
pub struct ThemeStore {
    current: RwLock<Arc<Theme>>,
    generation: AtomicU64,
    /// Held across a swap and its notification
    writer: Mutex<()>,
    subscribers: RwLock<SlotMap<SubscriptionId, Subscriber>>,
}

impl ThemeStore {
    pub fn new(theme: Theme) -> Self {
        Self {
            current: RwLock::new(Arc::new(theme)),
            generation: AtomicU64::new(0),
            writer: Mutex::new(()),
            subscribers: RwLock::new(SlotMap::with_key()),
        }
    }

    /// Snapshot of the current theme
    pub fn current(&self) -> Arc<Theme> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of swaps performed so far
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Swap in a new theme and notify subscribers.
    ///
    /// Returns the generation assigned to `theme`. Subscribers must not call
    /// [`replace`](Self::replace) or [`update`](Self::update) on the same
    /// store from inside their callback.
    pub fn replace(&self, theme: Theme) -> u64 {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        self.swap_and_notify(Arc::new(theme))
    }

    /// Build a new theme from a copy of the current one and swap it in.
    ///
    /// The copy is taken under the writer lock, so concurrent updates are
    /// applied one after another and none is lost.
    pub fn update(&self, f: impl FnOnce(&mut Theme)) -> u64 {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let next = self.current().with(f);
        self.swap_and_notify(Arc::new(next))
    }

    // Caller holds `writer`.
    fn swap_and_notify(&self, next: Arc<Theme>) -> u64 {
        let (previous, generation) = {
            let mut guard = self
                .current
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            let previous = std::mem::replace(&mut *guard, Arc::clone(&next));
            let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
            (previous, generation)
        };

        debug!(generation, "theme replaced");

        let change = ThemeChange {
            previous,
            current: next,
            generation,
        };
        for subscriber in self.subscriber_snapshot() {
            subscriber(&change);
        }

        generation
    }

    /// Register a callback invoked after every swap
    pub fn subscribe(
        &self,
        callback: impl Fn(&ThemeChange) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = self
            .subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(Arc::new(callback));
        debug!(?id, "theme subscriber added");
        id
    }

    /// Remove a subscriber; returns `false` if it was already gone
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = self
            .subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
            .is_some();
        if removed {
            debug!(?id, "theme subscriber removed");
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    // Callbacks run without holding the lock so they may (un)subscribe.
    fn subscriber_snapshot(&self) -> Vec<Subscriber> {
        self.subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect()
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("generation", &self.generation())
            .field("subscribers", &self.subscriber_count())
            .finish_non_exhaustive()
    }
}
