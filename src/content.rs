//! The payload stored next to every key.
//!
//! [`Content`] is a tagged union. Each variant owns its payload, so the payload lives exactly as
//! long as the [`Node`][crate::Node] that holds it. New variants may be added without
//! touching the tree operations, which never look inside.

use std::fmt;

/// An owned, typed value attached to a key in the tree.
///
/// # Examples
///
/// ```
/// use keyed_bst::{Content, ContentKind};
///
/// let content = Content::Integer(3);
/// assert_eq!(content.kind(), ContentKind::Integer);
/// assert_eq!(content.as_integer(), Some(3));
/// assert_eq!(content.to_string(), "3");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Content {
    /// A signed integer, e.g. a character count.
    Integer(i32),
    /// A floating point number.
    Float(f32),
    /// A single character.
    Char(char),
    /// An owned string.
    String(String),
}

/// The discriminant of a [`Content`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum ContentKind {
    /// See [`Content::Integer`].
    Integer,
    /// See [`Content::Float`].
    Float,
    /// See [`Content::Char`].
    Char,
    /// See [`Content::String`].
    String,
}

impl Content {
    /// Returns which variant this is.
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Integer(_) => ContentKind::Integer,
            Self::Float(_) => ContentKind::Float,
            Self::Char(_) => ContentKind::Char,
            Self::String(_) => ContentKind::String,
        }
    }

    /// Returns the integer payload, or `None` for any other variant.
    pub fn as_integer(&self) -> Option<i32> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<i32> for Content {
    fn from(n: i32) -> Self {
        Self::Integer(n)
    }
}

impl From<f32> for Content {
    fn from(x: f32) -> Self {
        Self::Float(x)
    }
}

impl From<char> for Content {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Float(x) => write!(f, "{}", x),
            Self::Char(c) => write!(f, "{:?}", c),
            Self::String(s) => write!(f, "{:?}", s),
        }
    }
}
