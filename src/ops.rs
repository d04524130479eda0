use crate::content::Content;
use crate::error::TreeError;
use crate::items::Items;
use crate::node::Link;

/// The operations of a binary search tree, expressed over the slot holding its root.
///
/// [`Recursive`][crate::Recursive] and [`Iterative`][crate::Iterative] implement this contract
/// two ways. For the same sequence of calls they leave trees of identical shape behind and fill
/// [`Items`] identically, so either can back a [`Tree`][crate::Tree].
///
/// After every mutating call, each node's left subtree holds only smaller keys and its right
/// subtree only larger ones. Keys are unique.
///
/// These functions work on a bare [`Link`], which has no teardown of its own: dropping it drops
/// the nodes recursively, one call per level, so a tall tree held this way can overflow the
/// stack. Release such a tree with [`Iterative::dispose`][crate::Iterative] before dropping it,
/// or keep it in a [`Tree`][crate::Tree], whose `Drop` never recurses.
///
/// # Examples
///
/// ```
/// use keyed_bst::{Content, Iterative, Link, Recursive, TreeOps};
///
/// let mut root: Link = None;
/// for key in "abcdef".chars() {
///     Recursive::insert(&mut root, key, Content::Char(key)).unwrap();
/// }
/// assert_eq!(Iterative::search(&root, 'c'), Some(&Content::Char('c')));
///
/// // Ascending inserts built a list; release it without recursing.
/// Iterative::dispose(&mut root);
/// assert!(root.is_none());
/// ```
pub trait TreeOps {
    /// Finds the content stored under `key`, or `None` if no node holds it.
    fn search(root: &Link, key: char) -> Option<&Content>;

    /// Stores `content` under `key`. An existing node for `key` has its content replaced (the old
    /// content is dropped); otherwise a new leaf is attached where the search for `key` ended.
    ///
    /// If the new leaf can't be allocated the tree is left untouched and
    /// [`TreeError::NodeAllocation`] is returned.
    fn insert(root: &mut Link, key: char, content: Content) -> Result<(), TreeError>;

    /// Removes the node holding `key`, if any.
    ///
    /// A node with at most one child is replaced by that child. A node with two children takes
    /// over the key and content of the rightmost node of its left subtree, which is removed in
    /// its place. Nothing is rebalanced.
    fn delete(root: &mut Link, key: char);

    /// Drops every node, leaving `root` empty.
    fn dispose(root: &mut Link);

    /// Appends each node before its left subtree, then its right subtree.
    fn preorder<'a>(root: &'a Link, items: &mut Items<'a>) -> Result<(), TreeError>;

    /// Appends the left subtree, then each node, then its right subtree. Keys come out ascending.
    fn inorder<'a>(root: &'a Link, items: &mut Items<'a>) -> Result<(), TreeError>;

    /// Appends both subtrees, left then right, before each node.
    fn postorder<'a>(root: &'a Link, items: &mut Items<'a>) -> Result<(), TreeError>;
}
