//! Tree operations written as loops. Descents move a cursor from slot to slot, and traversals
//! replace the call stack with an explicit [`Stack`], so no operation's call depth depends on
//! the shape of the tree.

use crate::content::Content;
use crate::error::TreeError;
use crate::items::Items;
use crate::node::{self, Link, Node};
use crate::ops::TreeOps;
use crate::stack::{BoolStack, NodeStack, Stack};

/// The iterative strategy. See [`TreeOps`] for the contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iterative;

impl Iterative {
    /// Walks down from `slot` towards `key`. The returned slot either holds the node with `key`
    /// or is the empty slot where that node would be attached.
    fn locate(mut slot: &mut Link, key: char) -> &mut Link {
        while let Some(direction) = slot.as_deref().and_then(|n| n.direction_to(key)) {
            slot = slot
                .as_deref_mut()
                .expect("A direction implies a node")
                .child_mut(direction);
        }
        slot
    }

    /// Walks down right children from `slot` to the slot holding the rightmost node.
    fn locate_rightmost(mut slot: &mut Link) -> &mut Link {
        while slot.as_deref().is_some_and(|n| n.right.is_some()) {
            slot = &mut slot.as_deref_mut().expect("Right child => node").right;
        }
        slot
    }

    /// Pushes `link` and its chain of left descendants, visiting each one as it is pushed.
    fn push_leftmost_preorder<'a>(
        mut link: &'a Link,
        stack: &mut NodeStack<'a>,
        items: &mut Items<'a>,
    ) -> Result<(), TreeError> {
        while let Some(n) = link.as_deref() {
            stack.try_push(n)?;
            items.push(n)?;
            link = &n.left;
        }
        Ok(())
    }

    /// Pushes `link` and its chain of left descendants.
    fn push_leftmost_inorder<'a>(
        mut link: &'a Link,
        stack: &mut NodeStack<'a>,
    ) -> Result<(), TreeError> {
        while let Some(n) = link.as_deref() {
            stack.try_push(n)?;
            link = &n.left;
        }
        Ok(())
    }

    /// Pushes `link` and its chain of left descendants, each marked as seen for the first time.
    fn push_leftmost_postorder<'a>(
        mut link: &'a Link,
        stack: &mut NodeStack<'a>,
        first_visit: &mut BoolStack,
    ) -> Result<(), TreeError> {
        while let Some(n) = link.as_deref() {
            stack.try_push(n)?;
            first_visit.try_push(true)?;
            link = &n.left;
        }
        Ok(())
    }
}

impl TreeOps for Iterative {
    fn search(root: &Link, key: char) -> Option<&Content> {
        let mut link = root;
        while let Some(n) = link.as_deref() {
            match n.direction_to(key) {
                Some(direction) => link = n.child(direction),
                None => return Some(&n.content),
            }
        }
        None
    }

    fn insert(root: &mut Link, key: char, content: Content) -> Result<(), TreeError> {
        let slot = Self::locate(root, key);
        match slot.as_deref_mut() {
            Some(n) => n.replace_content(content),
            None => *slot = Some(Node::try_new_boxed(key, content)?),
        }
        Ok(())
    }

    fn delete(root: &mut Link, key: char) {
        let slot = Self::locate(root, key);
        let Some(n) = slot.as_deref_mut() else {
            return;
        };
        if n.has_two_children() {
            let rightmost = Self::locate_rightmost(&mut n.left);
            let predecessor = node::unlink(rightmost).expect("Two children => left subtree");
            n.absorb(*predecessor);
        } else {
            node::unlink(slot);
        }
    }

    fn dispose(root: &mut Link) {
        let Some(root) = root.take() else {
            return;
        };
        let mut stack = Stack::new();
        stack.push(root);

        let mut released = 0_usize;
        while let Some(mut n) = stack.pop() {
            if let Some(right) = n.right.take() {
                stack.push(right);
            }
            if let Some(left) = n.left.take() {
                stack.push(left);
            }
            // Both children were moved out, so this drops one node and its content only.
            drop(n);
            released += 1;
        }
        log::trace!("disposed {} nodes", released);
    }

    fn preorder<'a>(root: &'a Link, items: &mut Items<'a>) -> Result<(), TreeError> {
        let mut stack = NodeStack::new();
        Self::push_leftmost_preorder(root, &mut stack, items)?;

        while let Some(n) = stack.pop() {
            Self::push_leftmost_preorder(&n.right, &mut stack, items)?;
        }
        Ok(())
    }

    fn inorder<'a>(root: &'a Link, items: &mut Items<'a>) -> Result<(), TreeError> {
        let mut stack = NodeStack::new();
        Self::push_leftmost_inorder(root, &mut stack)?;

        while let Some(n) = stack.pop() {
            items.push(n)?;
            Self::push_leftmost_inorder(&n.right, &mut stack)?;
        }
        Ok(())
    }

    fn postorder<'a>(root: &'a Link, items: &mut Items<'a>) -> Result<(), TreeError> {
        let mut stack = NodeStack::new();
        let mut first_visit = BoolStack::new();
        Self::push_leftmost_postorder(root, &mut stack, &mut first_visit)?;

        while let Some(n) = stack.top() {
            if first_visit.pop().expect("One flag per stacked node") {
                // Back from the left subtree: revisit after the right subtree is done.
                first_visit.try_push(false)?;
                Self::push_leftmost_postorder(&n.right, &mut stack, &mut first_visit)?;
            } else {
                stack.pop();
                items.push(n)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(keys: &str) -> Link {
        let mut root = None;
        for key in keys.chars() {
            Iterative::insert(&mut root, key, Content::Char(key)).unwrap();
        }
        root
    }

    #[test]
    fn test_locate_existing_and_missing() {
        let mut root = tree_of("dbf");

        let found = Iterative::locate(&mut root, 'f');
        assert_eq!(found.as_deref().map(Node::key), Some('f'));
        assert!(Iterative::locate(&mut root, 'e').is_none());
        assert!(Iterative::locate(&mut root, 'a').is_none());
    }

    #[test]
    fn test_locate_rightmost() {
        let mut root = tree_of("dbfac");
        let left = &mut root.as_deref_mut().unwrap().left;

        let rightmost = Iterative::locate_rightmost(left);
        assert_eq!(rightmost.as_deref().map(Node::key), Some('c'));
    }

    #[test]
    fn test_dispose_deep_tree() {
        // A right spine as deep as the tree is large, as ascending inserts would build.
        let mut root: Link = None;
        for i in (0..200_000_u32).rev() {
            let key = std::char::from_u32(0x1_0000 + i).unwrap();
            let mut n = Node::try_new_boxed(key, Content::Integer(0)).unwrap();
            n.right = root.take();
            root = Some(n);
        }
        Iterative::dispose(&mut root);

        assert!(root.is_none());
    }
}
