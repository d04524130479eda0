//! The elemental unit of the tree.
//!
//! Every [`Node`] is owned by exactly one [`Link`]: either the tree's root or one of its
//! parent's child slots. Moving a subtree is therefore a single move of a `Box`, and removing a
//! node is taking it out of its slot.

use std::alloc::{self, Layout};
use std::cmp::Ordering;
use std::ptr::NonNull;

use crate::content::Content;
use crate::error::TreeError;

/// An owning slot for a subtree. `None` is an empty subtree.
///
/// Dropping a `Link` recurses once per level of the subtree. See [`TreeOps`][crate::TreeOps] for
/// releasing tall subtrees.
pub type Link = Option<Box<Node>>;

/// Which child slot to follow when descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Left,
    Right,
}

/// A `Node` has a key that is used for searching/sorting and the [`Content`] associated with
/// that key. Either child may be empty.
#[derive(Debug)]
pub struct Node {
    pub(crate) key: char,
    pub(crate) content: Content,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    /// Allocates a new leaf node.
    ///
    /// Unlike `Box::new` this reports allocator failure instead of aborting. On failure `content`
    /// is dropped here, so nothing the caller handed over leaks.
    pub(crate) fn try_new_boxed(key: char, content: Content) -> Result<Box<Self>, TreeError> {
        let layout = Layout::new::<Self>();
        // SAFETY: `Node` is never zero sized, so `layout` has a non-zero size.
        let ptr = unsafe { alloc::alloc(layout) }.cast::<Self>();
        let Some(ptr) = NonNull::new(ptr) else {
            log::warn!("memory allocation failed for key {:?}", key);
            return Err(TreeError::NodeAllocation { key });
        };
        // SAFETY: `ptr` is non-null, aligned, and sized for a `Node` because it came from the
        // global allocator with `Layout::new::<Node>()`. That is exactly the allocation `Box`
        // would have made, so handing it to `Box::from_raw` after initializing it is sound.
        unsafe {
            ptr.as_ptr().write(Self {
                key,
                content,
                left: None,
                right: None,
            });
            Ok(Box::from_raw(ptr.as_ptr()))
        }
    }

    /// The key this node is ordered by.
    pub fn key(&self) -> char {
        self.key
    }

    /// The content stored under this node's key.
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// The root of the left subtree, if any. All its keys are smaller than [`Node::key`].
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any. All its keys are larger than [`Node::key`].
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Which subtree `key` lives in, or `None` if this node holds `key`.
    pub(crate) fn direction_to(&self, key: char) -> Option<Direction> {
        match key.cmp(&self.key) {
            Ordering::Less => Some(Direction::Left),
            Ordering::Equal => None,
            Ordering::Greater => Some(Direction::Right),
        }
    }

    pub(crate) fn child(&self, direction: Direction) -> &Link {
        match direction {
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, direction: Direction) -> &mut Link {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    pub(crate) fn has_two_children(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    /// Overwrites the content, dropping the previous payload.
    pub(crate) fn replace_content(&mut self, content: Content) {
        self.content = content;
    }

    /// Takes over the key and content of `donor`, which must already be detached from the tree.
    ///
    /// This node's previous content is dropped before the donor's is moved in. Callers unbox the
    /// donor, so its allocation is already released by the time it gets here.
    pub(crate) fn absorb(&mut self, donor: Node) {
        debug_assert!(donor.left.is_none() && donor.right.is_none());
        let Node { key, content, .. } = donor;
        self.replace_content(content);
        self.key = key;
    }
}

/// Removes the node in `slot`, which must have at most one child, and splices that child (if
/// any) into `slot`. Returns the removed node with both child slots empty.
pub(crate) fn unlink(slot: &mut Link) -> Option<Box<Node>> {
    let mut removed = slot.take()?;
    debug_assert!(!removed.has_two_children());
    *slot = removed.left.take().or_else(|| removed.right.take());
    Some(removed)
}
