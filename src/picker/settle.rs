//! Change detection for the centered row.
//!
//! The picker samples its centered index once per frame. `ObservedIndex`
//! remembers the last sample and reports only real transitions, so a wheel
//! resting on a row never re-fires, while every row crossed during a fast
//! fling is reported once per frame it was observed on.

/// Last observed centered index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservedIndex {
    previous: usize,
}

impl ObservedIndex {
    pub fn new(initial: usize) -> Self {
        Self { previous: initial }
    }

    pub fn get(&self) -> usize {
        self.previous
    }

    /// Record `current`; returns it when it differs from the previous sample.
    pub fn observe(&mut self, current: usize) -> Option<usize> {
        if current == self.previous {
            None
        } else {
            self.previous = current;
            Some(current)
        }
    }

    /// Forget history, e.g. when the item list is replaced.
    pub fn reset(&mut self, initial: usize) {
        self.previous = initial;
    }
}

/// Handle returned by `Listeners::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Ordered list of selection listeners.
pub struct Listeners<T> {
    next_id: u64,
    entries: Vec<(ListenerId, Box<dyn FnMut(&T)>)>,
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<T> Listeners<T> {
    pub fn subscribe(&mut self, listener: impl FnMut(&T) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    /// Call every listener, in subscription order.
    pub fn notify(&mut self, value: &T) {
        for (_, listener) in self.entries.iter_mut() {
            listener(value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> std::fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.entries.len())
            .finish()
    }
}
