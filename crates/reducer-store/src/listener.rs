//! Ordered listener registry and subscription handles

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

pub(crate) type Listener = Rc<dyn Fn()>;

/// Identifies one registration; never reused within a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

#[derive(Default)]
pub(crate) struct ListenerRegistry {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

impl ListenerRegistry {
    pub(crate) fn add(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Remove one registration, returning whether it was still present
    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        match self.entries.iter().position(|(entry, _)| *entry == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|(entry, _)| *entry == id)
    }

    /// Listeners in registration order, detached from the registry
    pub(crate) fn snapshot(&self) -> Vec<Listener> {
        self.entries
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Handle returned by `Store::subscribe`
///
/// Dropping the handle keeps the listener registered; call
/// [`Subscription::unsubscribe`] to remove it. The handle only holds a weak
/// reference, so it never keeps a store's listeners alive.
pub struct Subscription {
    id: ListenerId,
    registry: Weak<RefCell<ListenerRegistry>>,
}

impl Subscription {
    pub(crate) fn new(id: ListenerId, registry: &Rc<RefCell<ListenerRegistry>>) -> Self {
        Self {
            id,
            registry: Rc::downgrade(registry),
        }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Remove exactly this registration
    ///
    /// Calling it again, or after the store is gone, does nothing. A
    /// notification pass already in progress is not affected.
    pub fn unsubscribe(&self) {
        if let Some(registry) = self.registry.upgrade() {
            if registry.borrow_mut().remove(self.id) {
                log::trace!("Listener {:?} unsubscribed", self.id);
            }
        }
    }

    /// Whether the registration is still in place
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.borrow().contains(self.id))
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_not_reused() {
        let mut registry = ListenerRegistry::default();
        let first = registry.add(Rc::new(|| {}));
        assert!(registry.remove(first));
        let second = registry.add(Rc::new(|| {}));
        assert_ne!(first, second);
    }

    #[test]
    fn test_remove_only_matching_registration() {
        let mut registry = ListenerRegistry::default();
        let listener: Listener = Rc::new(|| {});
        let first = registry.add(Rc::clone(&listener));
        let second = registry.add(listener);

        assert!(registry.remove(first));
        assert!(!registry.remove(first));
        assert!(registry.contains(second));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_snapshot_preserves_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ListenerRegistry::default();
        for n in 0..3 {
            let order = Rc::clone(&order);
            registry.add(Rc::new(move || order.borrow_mut().push(n)));
        }

        for listener in registry.snapshot() {
            listener();
        }
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_subscription_outlives_registry() {
        let registry = Rc::new(RefCell::new(ListenerRegistry::default()));
        let id = registry.borrow_mut().add(Rc::new(|| {}));
        let subscription = Subscription::new(id, &registry);

        assert!(subscription.is_active());
        drop(registry);
        assert!(!subscription.is_active());
        subscription.unsubscribe();
    }
}
