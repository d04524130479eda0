//! The caller-facing tree handle.
//!
//! # Examples
//!
//! ```
//! use keyed_bst::{Content, Recursive, Tree};
//!
//! let mut tree: Tree<Recursive> = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search('a'), None);
//!
//! tree.insert('a', Content::Integer(1)).unwrap();
//! assert_eq!(tree.search('a'), Some(&Content::Integer(1)));
//!
//! // Inserting a new value for the same key overwrites the value.
//! tree.insert('a', Content::Integer(2)).unwrap();
//! assert_eq!(tree.search('a'), Some(&Content::Integer(2)));
//!
//! tree.delete('a');
//! assert_eq!(tree.search('a'), None);
//! assert!(tree.is_empty());
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::content::Content;
use crate::error::TreeError;
use crate::items::Items;
use crate::iterative::Iterative;
use crate::node::{Link, Node};
use crate::ops::TreeOps;

/// A binary search tree from `char` keys to [`Content`].
///
/// `S` picks how the operations run: [`Iterative`] (the default) or
/// [`Recursive`][crate::Recursive]. Both behave identically.
pub struct Tree<S = Iterative> {
    root: Link,
    strategy: PhantomData<S>,
}

impl<S> Default for Tree<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Drop for Tree<S> {
    fn drop(&mut self) {
        // Never recursive, whatever `S` is, so list-shaped trees can't overflow the stack here.
        Iterative::dispose(&mut self.root);
    }
}

impl<S> fmt::Debug for Tree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root).finish()
    }
}

impl<S> Tree<S> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            strategy: PhantomData,
        }
    }

    /// Whether the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if any, for inspecting the tree's shape.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }
}

impl<S: TreeOps> Tree<S> {
    /// Potentially finds the content associated with the given key in this tree. If no node has
    /// the corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_bst::{Content, Tree};
    ///
    /// let mut tree: Tree = Tree::new();
    /// tree.insert('a', Content::Integer(2)).unwrap();
    ///
    /// assert_eq!(tree.search('a'), Some(&Content::Integer(2)));
    /// assert_eq!(tree.search('z'), None);
    /// ```
    pub fn search(&self, key: char) -> Option<&Content> {
        S::search(&self.root, key)
    }

    /// Inserts the given content into the tree stored at the given key. Inserting new content
    /// for an existing key overwrites its content.
    ///
    /// # Errors
    ///
    /// [`TreeError::NodeAllocation`] if a new node is needed and can't be allocated. The tree is
    /// unchanged in that case.
    pub fn insert(&mut self, key: char, content: Content) -> Result<(), TreeError> {
        S::insert(&mut self.root, key, content)
    }

    /// Deletes the node containing the given key from the tree. If the tree does not contain a
    /// node with the key, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_bst::{Content, Tree};
    ///
    /// let mut tree: Tree = Tree::new();
    /// for key in "bac".chars() {
    ///     tree.insert(key, Content::Char(key)).unwrap();
    /// }
    ///
    /// // 'b' has two children, so 'a' (the largest key left of it) moves up.
    /// tree.delete('b');
    /// assert_eq!(tree.root().map(|root| root.key()), Some('a'));
    /// assert_eq!(tree.inorder().unwrap().keys().collect::<String>(), "ac");
    /// ```
    pub fn delete(&mut self, key: char) {
        S::delete(&mut self.root, key)
    }

    /// Drops every node, leaving the tree as empty as a new one.
    pub fn dispose(&mut self) {
        S::dispose(&mut self.root)
    }

    /// Collects the nodes in preorder: each node, then its left subtree, then its right subtree.
    pub fn preorder(&self) -> Result<Items<'_>, TreeError> {
        let mut items = Items::new();
        S::preorder(&self.root, &mut items)?;
        Ok(items)
    }

    /// Collects the nodes in inorder, i.e. by ascending key.
    pub fn inorder(&self) -> Result<Items<'_>, TreeError> {
        let mut items = Items::new();
        S::inorder(&self.root, &mut items)?;
        Ok(items)
    }

    /// Collects the nodes in postorder: each node's left subtree, then its right subtree, then
    /// the node.
    pub fn postorder(&self) -> Result<Items<'_>, TreeError> {
        let mut items = Items::new();
        S::postorder(&self.root, &mut items)?;
        Ok(items)
    }
}
