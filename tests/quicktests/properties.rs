use keyed_bst::{Content, Items, Iterative, Node, Recursive, Tree};
use quickcheck_macros::quickcheck;

use std::collections::BTreeMap;

use crate::{Key, Op};

/// Owned `(key, content)` pairs so traversals of different trees can be compared.
fn pairs(items: Items<'_>) -> Vec<(char, Content)> {
    items
        .iter()
        .map(|item| (item.key, item.content.clone()))
        .collect()
}

/// Checks the ordering invariant on every node, not just through the inorder sequence.
fn is_search_tree(node: Option<&Node>, lower: Option<char>, upper: Option<char>) -> bool {
    match node {
        None => true,
        Some(n) => {
            lower.is_none_or(|lower| lower < n.key())
                && upper.is_none_or(|upper| n.key() < upper)
                && is_search_tree(n.left(), lower, Some(n.key()))
                && is_search_tree(n.right(), Some(n.key()), upper)
        }
    }
}

/// Applies a set of operations to both tree strategies and a map.
/// This way we can ensure that after a random smattering of inserts
/// and deletes every structure holds the same entries, and both trees
/// have the same shape.
fn do_ops(
    ops: &[Op<Key, i32>],
    recursive: &mut Tree<Recursive>,
    iterative: &mut Tree<Iterative>,
    map: &mut BTreeMap<char, i32>,
) -> bool {
    for op in ops {
        match *op {
            Op::Insert(Key(k), v) => {
                recursive.insert(k, Content::Integer(v)).unwrap();
                iterative.insert(k, Content::Integer(v)).unwrap();
                map.insert(k, v);
            }
            Op::Remove(Key(k)) => {
                recursive.delete(k);
                iterative.delete(k);
                map.remove(&k);
            }
            Op::Iter => {
                if pairs(recursive.preorder().unwrap()) != pairs(iterative.preorder().unwrap()) {
                    return false;
                }
            }
        }
    }
    true
}

#[quickcheck]
fn fuzz_multiple_operations(ops: Vec<Op<Key, i32>>) -> bool {
    let mut recursive = Tree::new();
    let mut iterative = Tree::new();
    let mut map = BTreeMap::new();

    let agreed = do_ops(&ops, &mut recursive, &mut iterative, &mut map);
    let expected: Vec<_> = map
        .iter()
        .map(|(k, v)| (*k, Content::Integer(*v)))
        .collect();

    agreed
        && pairs(recursive.inorder().unwrap()) == expected
        && pairs(iterative.inorder().unwrap()) == expected
        && is_search_tree(recursive.root(), None, None)
        && is_search_tree(iterative.root(), None, None)
}

#[quickcheck]
fn traversals_agree(ops: Vec<Op<Key, i32>>) -> bool {
    let mut recursive = Tree::new();
    let mut iterative = Tree::new();
    do_ops(&ops, &mut recursive, &mut iterative, &mut BTreeMap::new());

    pairs(recursive.preorder().unwrap()) == pairs(iterative.preorder().unwrap())
        && pairs(recursive.inorder().unwrap()) == pairs(iterative.inorder().unwrap())
        && pairs(recursive.postorder().unwrap()) == pairs(iterative.postorder().unwrap())
}

#[quickcheck]
fn inorder_is_strictly_ascending(keys: Vec<Key>, deletes: Vec<Key>) -> bool {
    let mut tree: Tree = Tree::new();
    for Key(k) in &keys {
        tree.insert(*k, Content::Char(*k)).unwrap();
    }
    for Key(k) in &deletes {
        tree.delete(*k);
    }

    let inorder: Vec<char> = tree.inorder().unwrap().keys().collect();
    inorder.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn upsert_keeps_one_node(k: Key, first: i32, second: i32) -> bool {
    let mut tree: Tree<Recursive> = Tree::new();
    tree.insert(k.0, Content::Integer(first)).unwrap();
    tree.insert(k.0, Content::Integer(second)).unwrap();

    let items = tree.inorder().unwrap();
    items.len() == 1 && items.get(0).map(|item| item.content) == Some(&Content::Integer(second))
}

#[quickcheck]
fn delete_everything_empties_tree(keys: Vec<Key>, order: Vec<Key>) -> bool {
    let mut recursive: Tree<Recursive> = Tree::new();
    let mut iterative: Tree<Iterative> = Tree::new();
    for Key(k) in &keys {
        recursive.insert(*k, Content::Char(*k)).unwrap();
        iterative.insert(*k, Content::Char(*k)).unwrap();
    }
    // Delete in a random order first, then sweep up whatever is left.
    for Key(k) in order.iter().chain(&keys) {
        recursive.delete(*k);
        iterative.delete(*k);
    }

    recursive.is_empty() && iterative.is_empty()
}

#[quickcheck]
fn delete_leaves_other_content_alone(keys: Vec<Key>, victim: Key) -> bool {
    let mut tree: Tree = Tree::new();
    for (i, Key(k)) in keys.iter().enumerate() {
        tree.insert(*k, Content::Integer(i as i32)).unwrap();
    }
    let before: Vec<_> = pairs(tree.inorder().unwrap())
        .into_iter()
        .filter(|(k, _)| *k != victim.0)
        .collect();

    tree.delete(victim.0);

    tree.search(victim.0).is_none()
        && pairs(tree.inorder().unwrap()) == before
        && is_search_tree(tree.root(), None, None)
}

#[quickcheck]
fn dispose_forgets_everything(keys: Vec<Key>) -> bool {
    let mut recursive: Tree<Recursive> = Tree::new();
    let mut iterative: Tree<Iterative> = Tree::new();
    for Key(k) in &keys {
        recursive.insert(*k, Content::Char(*k)).unwrap();
        iterative.insert(*k, Content::Char(*k)).unwrap();
    }
    recursive.dispose();
    iterative.dispose();

    recursive.is_empty()
        && iterative.is_empty()
        && keys
            .iter()
            .all(|Key(k)| recursive.search(*k).is_none() && iterative.search(*k).is_none())
}
