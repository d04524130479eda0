//! LIFO containers used by the iterative strategy in place of the call stack.
//!
//! A stack lives for a single call. Traversals keep non-owning `&Node`s in it, and the postorder
//! traversal keeps a parallel stack of "first visit" flags. Disposal is the one user that holds
//! owned boxes, each only until it is released.

use crate::error::TreeError;
use crate::node::Node;

/// A LIFO whose growth is checked instead of aborting the process.
#[derive(Debug)]
pub(crate) struct Stack<T> {
    entries: Vec<T>,
}

/// Nodes whose right subtree has not been visited yet.
pub(crate) type NodeStack<'a> = Stack<&'a Node>;

/// `true` while the matching [`NodeStack`] entry is seen for the first time.
pub(crate) type BoolStack = Stack<bool>;

impl<T> Stack<T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Pushes `entry`, reporting [`TreeError::StackExhausted`] if the stack can't grow.
    pub(crate) fn try_push(&mut self, entry: T) -> Result<(), TreeError> {
        if let Err(source) = self.entries.try_reserve(1) {
            log::debug!("stack exhausted at depth {}", self.entries.len());
            return Err(TreeError::StackExhausted {
                depth: self.entries.len(),
                source,
            });
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Pushes `entry` like any std collection would.
    pub(crate) fn push(&mut self, entry: T) {
        self.entries.push(entry);
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        self.entries.pop()
    }
}

impl<T: Copy> Stack<T> {
    /// The most recently pushed entry, left in place.
    pub(crate) fn top(&self) -> Option<T> {
        self.entries.last().copied()
    }
}
