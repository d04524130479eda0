//! Tree operations written as top-down recursion. Each call handles one node and hands the
//! matching child slot to the next call, so the call stack is as deep as the tree is tall.

use std::cmp;

use crate::content::Content;
use crate::error::TreeError;
use crate::items::Items;
use crate::node::{self, Link, Node};
use crate::ops::TreeOps;

/// The recursive strategy. See [`TreeOps`] for the contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct Recursive;

impl Recursive {
    /// Detaches the rightmost node of the subtree in `slot`, splicing its left child into its
    /// place.
    fn detach_rightmost(slot: &mut Link) -> Option<Box<Node>> {
        match slot.as_deref_mut() {
            Some(n) if n.right.is_some() => Self::detach_rightmost(&mut n.right),
            _ => node::unlink(slot),
        }
    }
}

impl TreeOps for Recursive {
    fn search(root: &Link, key: char) -> Option<&Content> {
        let n = root.as_deref()?;
        match key.cmp(&n.key) {
            cmp::Ordering::Less => Self::search(&n.left, key),
            cmp::Ordering::Equal => Some(&n.content),
            cmp::Ordering::Greater => Self::search(&n.right, key),
        }
    }

    fn insert(root: &mut Link, key: char, content: Content) -> Result<(), TreeError> {
        match root.as_deref_mut() {
            None => {
                *root = Some(Node::try_new_boxed(key, content)?);
                Ok(())
            }
            Some(n) => match key.cmp(&n.key) {
                cmp::Ordering::Less => Self::insert(&mut n.left, key, content),
                cmp::Ordering::Equal => {
                    n.replace_content(content);
                    Ok(())
                }
                cmp::Ordering::Greater => Self::insert(&mut n.right, key, content),
            },
        }
    }

    fn delete(root: &mut Link, key: char) {
        let Some(n) = root.as_deref_mut() else {
            return;
        };
        match key.cmp(&n.key) {
            cmp::Ordering::Less => Self::delete(&mut n.left, key),
            cmp::Ordering::Greater => Self::delete(&mut n.right, key),
            cmp::Ordering::Equal if n.has_two_children() => {
                let predecessor = Self::detach_rightmost(&mut n.left);
                n.absorb(*predecessor.expect("Two children => left subtree"));
            }
            cmp::Ordering::Equal => {
                node::unlink(root);
            }
        }
    }

    fn dispose(root: &mut Link) {
        if let Some(mut n) = root.take() {
            Self::dispose(&mut n.left);
            Self::dispose(&mut n.right);
        }
    }

    fn preorder<'a>(root: &'a Link, items: &mut Items<'a>) -> Result<(), TreeError> {
        if let Some(n) = root.as_deref() {
            items.push(n)?;
            Self::preorder(&n.left, items)?;
            Self::preorder(&n.right, items)?;
        }
        Ok(())
    }

    fn inorder<'a>(root: &'a Link, items: &mut Items<'a>) -> Result<(), TreeError> {
        if let Some(n) = root.as_deref() {
            Self::inorder(&n.left, items)?;
            items.push(n)?;
            Self::inorder(&n.right, items)?;
        }
        Ok(())
    }

    fn postorder<'a>(root: &'a Link, items: &mut Items<'a>) -> Result<(), TreeError> {
        if let Some(n) = root.as_deref() {
            Self::postorder(&n.left, items)?;
            Self::postorder(&n.right, items)?;
            items.push(n)?;
        }
        Ok(())
    }
}
