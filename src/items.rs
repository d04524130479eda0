//! The output of a traversal.

use std::slice;

use crate::content::Content;
use crate::error::TreeError;
use crate::node::Node;

/// One visited node: its key and a borrow of its content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item<'a> {
    /// The node's key.
    pub key: char,
    /// The node's content, still owned by the tree.
    pub content: &'a Content,
}

/// An append-only, ordered record of visited nodes.
///
/// `Items` borrows the tree it was filled from, so the tree can't change while the items are
/// alive.
///
/// # Examples
///
/// ```
/// use keyed_bst::{Content, Tree};
///
/// let mut tree: Tree = Tree::new();
/// tree.insert('b', Content::Integer(2)).unwrap();
/// tree.insert('a', Content::Integer(1)).unwrap();
///
/// let items = tree.inorder().unwrap();
/// assert_eq!(items.keys().collect::<String>(), "ab");
/// assert_eq!(items.get(0).map(|item| item.content), Some(&Content::Integer(1)));
///
/// let [first, second] = items.as_slice() else { panic!("two nodes were inserted") };
/// assert_eq!((first.key, second.key), ('a', 'b'));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Items<'a> {
    items: Vec<Item<'a>>,
}

impl<'a> Items<'a> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends `node`, reporting [`TreeError::ItemsExhausted`] if the collection can't grow.
    pub fn push(&mut self, node: &'a Node) -> Result<(), TreeError> {
        if let Err(source) = self.items.try_reserve(1) {
            log::debug!("items collection exhausted at {} entries", self.items.len());
            return Err(TreeError::ItemsExhausted {
                len: self.items.len(),
                source,
            });
        }
        self.items.push(Item {
            key: node.key(),
            content: node.content(),
        });
        Ok(())
    }

    /// How many nodes were visited.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing was visited.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The `index`th visited item.
    pub fn get(&self, index: usize) -> Option<&Item<'a>> {
        self.items.get(index)
    }

    /// Iterates over the items in visiting order.
    pub fn iter(&self) -> slice::Iter<'_, Item<'a>> {
        self.items.iter()
    }

    /// Iterates over the visited keys in visiting order.
    pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
        self.items.iter().map(|item| item.key)
    }

    /// The items as a slice.
    pub fn as_slice(&self) -> &[Item<'a>] {
        &self.items
    }
}

impl<'i, 'a> IntoIterator for &'i Items<'a> {
    type Item = &'i Item<'a>;
    type IntoIter = slice::Iter<'i, Item<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
