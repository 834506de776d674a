//! [`ActionSequence`] – the ordered list handed to the external runner.
//!
//! The sequencing core only *produces* these lists; the scheduler that polls
//! them lives outside the library.  A sequence therefore carries no polling
//! logic of its own: it preserves insertion order and yields its boxed
//! actions to whoever runs them.
//!
//! # Example
//!
//! ```rust
//! use autoseq_actions::{ActionSequence, CountdownAction};
//!
//! let sequence = ActionSequence::new()
//!     .then(CountdownAction::new("deliver", 10))
//!     .then(CountdownAction::new("park", 5));
//! assert_eq!(sequence.len(), 2);
//! ```

use crate::action::Action;

/// Ordered, append-only collection of boxed actions.
#[derive(Default)]
pub struct ActionSequence {
    actions: Vec<Box<dyn Action>>,
}

impl ActionSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action.
    pub fn then(self, action: impl Action + 'static) -> Self {
        self.then_boxed(Box::new(action))
    }

    /// Append an already-boxed action.  Used to splice in opaque actions
    /// from external producers such as the trajectory planner.
    pub fn then_boxed(mut self, action: Box<dyn Action>) -> Self {
        self.actions.push(action);
        self
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl IntoIterator for ActionSequence {
    type Item = Box<dyn Action>;
    type IntoIter = std::vec::IntoIter<Box<dyn Action>>;

    /// Yield the actions in insertion order.
    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}
