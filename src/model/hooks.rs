//! Per-element lifecycle hooks
//!
//! Hooks see each element entering or leaving a list, before the aggregate
//! change notification fires.

/// Capability for observing individual elements of a list
pub trait ElementHooks<T> {
    /// Called after `item` has been added
    fn on_add(&mut self, _item: &T) {}

    /// Called after `item` has been removed
    fn on_remove(&mut self, _item: &T) {}
}

/// Hooks that do nothing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoHooks;

impl<T> ElementHooks<T> for NoHooks {}

/// Hooks built from a pair of closures
pub struct FnHooks<A, R> {
    on_add: A,
    on_remove: R,
}

impl<A, R> FnHooks<A, R> {
    pub fn new(on_add: A, on_remove: R) -> Self {
        Self { on_add, on_remove }
    }
}

impl<T, A, R> ElementHooks<T> for FnHooks<A, R>
where
    A: FnMut(&T),
    R: FnMut(&T),
{
    fn on_add(&mut self, item: &T) {
        (self.on_add)(item);
    }

    fn on_remove(&mut self, item: &T) {
        (self.on_remove)(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_hooks() {
        let mut added = Vec::new();
        let mut removed = Vec::new();
        {
            let mut hooks = FnHooks::new(|i: &i32| added.push(*i), |i: &i32| removed.push(*i));
            hooks.on_add(&1);
            hooks.on_add(&2);
            hooks.on_remove(&1);
        }
        assert_eq!(added, vec![1, 2]);
        assert_eq!(removed, vec![1]);
    }

    #[test]
    fn test_no_hooks() {
        let mut hooks = NoHooks;
        ElementHooks::<i32>::on_add(&mut hooks, &1);
        ElementHooks::<i32>::on_remove(&mut hooks, &1);
    }
}
