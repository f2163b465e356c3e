//! Change-notification contract for store observers.

use std::rc::Rc;

/// Receives a payload-free signal after every successful store mutation.
///
/// Observers re-read the store or service to obtain current state.
pub trait StudentObserver {
    fn on_data_changed(&self);
}

impl<F: Fn()> StudentObserver for F {
    fn on_data_changed(&self) {
        self()
    }
}

/// Shared handle registered with a store. Identity is the allocation.
pub type ObserverHandle = Rc<dyn StudentObserver>;

/// Registration-ordered set of observer handles.
#[derive(Default)]
pub(crate) struct ObserverList {
    handles: Vec<ObserverHandle>,
}

impl ObserverList {
    /// Adds a handle unless the same allocation is already registered.
    pub(crate) fn add(&mut self, observer: ObserverHandle) -> bool {
        if self.contains(&observer) {
            return false;
        }
        self.handles.push(observer);
        true
    }

    pub(crate) fn remove(&mut self, observer: &ObserverHandle) -> bool {
        let before = self.handles.len();
        self.handles
            .retain(|registered| !Rc::ptr_eq(registered, observer));
        self.handles.len() != before
    }

    pub(crate) fn contains(&self, observer: &ObserverHandle) -> bool {
        self.handles
            .iter()
            .any(|registered| Rc::ptr_eq(registered, observer))
    }

    pub(crate) fn len(&self) -> usize {
        self.handles.len()
    }

    /// Clones handles so callbacks can run without holding the list borrow.
    pub(crate) fn snapshot(&self) -> Vec<ObserverHandle> {
        self.handles.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::{ObserverHandle, ObserverList};
    use std::rc::Rc;

    #[test]
    fn add_is_idempotent_per_handle() {
        let mut list = ObserverList::default();
        let observer: ObserverHandle = Rc::new(|| {});
        assert!(list.add(Rc::clone(&observer)));
        assert!(!list.add(Rc::clone(&observer)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn distinct_allocations_are_distinct_observers() {
        let mut list = ObserverList::default();
        let first: ObserverHandle = Rc::new(|| {});
        let second: ObserverHandle = Rc::new(|| {});
        assert!(list.add(first));
        assert!(list.add(Rc::clone(&second)));
        assert_eq!(list.len(), 2);

        assert!(list.remove(&second));
        assert!(!list.remove(&second));
        assert_eq!(list.len(), 1);
    }
}
