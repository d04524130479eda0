//! This crate exposes a `char`-keyed Binary Search Tree (BST) whose operations come in two
//! interchangeable flavors: top-down recursion and loops over an explicit stack.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! its [`Content`] and will sometimes have child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`. This tree never rebalances, so inserting keys in sorted order
//! builds a tree as tall as it is large. The iterative flavor ([`Iterative`]) handles such trees
//! without deep call stacks; the recursive one ([`Recursive`]) follows the textbook definitions.
//!
//! Visiting the left subtree, then the subtree root, then the right subtree yields the keys in
//! ascending order. [`Tree::preorder`], [`Tree::inorder`] and [`Tree::postorder`] collect the
//! three classic orders into [`Items`].
//!
//! # Examples
//!
//! ```
//! use keyed_bst::{Content, Iterative, Recursive, Tree};
//!
//! let mut recursive: Tree<Recursive> = Tree::new();
//! let mut iterative: Tree<Iterative> = Tree::new();
//! for (count, key) in "bac".chars().enumerate() {
//!     recursive.insert(key, Content::Integer(count as i32)).unwrap();
//!     iterative.insert(key, Content::Integer(count as i32)).unwrap();
//! }
//!
//! assert_eq!(recursive.preorder().unwrap(), iterative.preorder().unwrap());
//! assert_eq!(iterative.inorder().unwrap().keys().collect::<String>(), "abc");
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Content`] and [`ContentKind`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod content;
mod error;
pub mod frequency;
mod items;
mod iterative;
mod node;
mod ops;
mod recursive;
mod stack;
mod tree;

pub use content::{Content, ContentKind};
pub use error::TreeError;
pub use items::{Item, Items};
pub use iterative::Iterative;
pub use node::{Link, Node};
pub use ops::TreeOps;
pub use recursive::Recursive;
pub use tree::Tree;
