//! Property change events and listener registration
//!
//! Models report structural changes as a single property change carrying the
//! full current state rather than a diff.

use std::fmt;

/// Property name reported by list models
pub const CHILDREN_PROPERTY: &str = "children";

/// A property change notification
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropertyChangeEvent<'a, T> {
    /// Name of the changed property
    pub property: &'static str,
    /// Previous value; list models never report one
    pub old_value: Option<&'a [T]>,
    /// Current value of the property
    pub new_value: &'a [T],
}

/// Handle returned by [`ChangeSupport::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

type Listener<T> = Box<dyn FnMut(&PropertyChangeEvent<'_, T>)>;

/// Registry of property change listeners
///
/// Listeners run synchronously, in registration order, on the caller's stack.
pub struct ChangeSupport<T> {
    listeners: Vec<(ListenerId, Listener<T>)>,
    next_id: u64,
}

impl<T> ChangeSupport<T> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Add a listener
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&PropertyChangeEvent<'_, T>) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        crate::log!("ChangeSupport: subscribed listener {}", id.0);
        id
    }

    /// Remove a listener, returning whether it was registered
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        let removed = self.listeners.len() != before;
        if removed {
            crate::log!("ChangeSupport: unsubscribed listener {}", id.0);
        }
        removed
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Notify every listener of a property change
    pub fn fire(&mut self, property: &'static str, old_value: Option<&[T]>, new_value: &[T]) {
        let event = PropertyChangeEvent {
            property,
            old_value,
            new_value,
        };
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}

impl<T> Default for ChangeSupport<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ChangeSupport<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeSupport")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
