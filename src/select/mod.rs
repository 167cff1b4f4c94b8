//! Selector / comparator subscription framework.
//!
//! A selector is a pure projection from the full session state to a narrow
//! derived view; a comparator decides whether two derived views differ
//! meaningfully. A [`Binding`] couples one of each with the last accepted
//! value, so an owning component re-invokes its side effect only when a
//! semantically meaningful change occurs, not on every state transition.
//!
//! Selectors and comparators are plain `fn` pointers: purity is structural
//! (no captured environment), not a convention to be policed.

pub mod comparators;
pub mod selectors;

use crate::state::SessionState;

fn structural_eq<T: PartialEq>(previous: &T, next: &T) -> bool {
    previous == next
}

/// A subscription: one selector, one comparator, the last accepted value.
///
/// Bindings are ephemeral, owned by the component whose effect they gate,
/// and dropped with it. [`Binding::poll`] is cheap enough to run on every
/// store notification; the comparator suppresses spurious re-evaluation
/// caused by unrelated state churn.
pub struct Binding<T> {
    selector: fn(&SessionState) -> T,
    unchanged: fn(&T, &T) -> bool,
    last: Option<T>,
}

impl<T: PartialEq> Binding<T> {
    /// Creates a binding with the default structural-equality comparator.
    pub fn new(selector: fn(&SessionState) -> T) -> Self {
        Self::with_comparator(selector, structural_eq::<T>)
    }
}

impl<T> Binding<T> {
    /// Creates a binding with a custom comparator.
    ///
    /// The comparator returns true when the two derived views should be
    /// treated as unchanged.
    pub fn with_comparator(
        selector: fn(&SessionState) -> T,
        unchanged: fn(&T, &T) -> bool,
    ) -> Self {
        Self { selector, unchanged, last: None }
    }

    /// Re-evaluates the selector against a state snapshot.
    ///
    /// Returns the new derived view only if it differs meaningfully from the
    /// last accepted one (the first poll always fires). Returns `None` when
    /// the comparator reports no change.
    pub fn poll(&mut self, state: &SessionState) -> Option<&T> {
        let next = (self.selector)(state);
        let changed = match &self.last {
            None => true,
            Some(previous) => !(self.unchanged)(previous, &next),
        };
        if changed {
            self.last = Some(next);
            self.last.as_ref()
        } else {
            None
        }
    }

    /// Returns the last accepted derived view, if any.
    ///
    /// Used to re-apply state to a widget that was constructed after the
    /// view was produced.
    pub fn latest(&self) -> Option<&T> {
        self.last.as_ref()
    }

    /// Forgets the last accepted view so the next poll always fires.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
