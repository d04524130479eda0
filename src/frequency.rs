//! Character frequency counting, the typical client of the tree.
//!
//! # Examples
//!
//! ```
//! use keyed_bst::frequency::letter_count;
//! use keyed_bst::{Content, Tree};
//!
//! let tree: Tree = letter_count("Hello, World").unwrap();
//!
//! assert_eq!(tree.search('l'), Some(&Content::Integer(3)));
//! assert_eq!(tree.search('_'), Some(&Content::Integer(1)));
//! assert_eq!(tree.search('H'), None);
//! ```

use std::collections::BTreeMap;
use std::convert::TryFrom;

use crate::content::Content;
use crate::error::TreeError;
use crate::ops::TreeOps;
use crate::tree::Tree;

/// The key every character other than a letter or a space is counted under.
pub const SENTINEL: char = '_';

/// Folds `c` onto the keys used for counting: ASCII uppercase letters become lowercase, ASCII
/// lowercase letters and the space stay as they are, everything else becomes [`SENTINEL`].
pub fn normalize(c: char) -> char {
    match c {
        'A'..='Z' => c.to_ascii_lowercase(),
        'a'..='z' | ' ' => c,
        _ => SENTINEL,
    }
}

/// Counts every [normalized][normalize] character of `input` into a new tree, storing each count
/// as [`Content::Integer`].
///
/// Keys are inserted in ascending order, so the tree degenerates into a list hanging off right
/// children. Counts that don't fit an `i32` saturate.
pub fn letter_count<S: TreeOps>(input: &str) -> Result<Tree<S>, TreeError> {
    let mut counts = BTreeMap::new();
    for c in input.chars() {
        *counts.entry(normalize(c)).or_insert(0_usize) += 1;
    }

    let mut tree = Tree::new();
    for (key, count) in counts {
        let count = i32::try_from(count).unwrap_or(i32::MAX);
        tree.insert(key, Content::Integer(count))?;
    }
    Ok(tree)
}
