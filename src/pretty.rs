//! Text rendering of trees as indented branch diagrams.
//!
//! The right subtree is printed above its parent and the left subtree below,
//! so the diagram reads left-to-right as a tree lying on its side:
//!
//! ```text
//! │       ┌── 9
//! │   ┌── 7
//! └── 5
//!     │   ┌── 3
//!     └── 1
//! ```
//!
//! Rendering writes into any [`std::fmt::Write`] sink; [`render`] is a
//! `String` convenience and `Tree` implements [`Display`][std::fmt::Display]
//! with the same output, so `format!("{}", tree)` works too.

use std::fmt::{self, Write};

use crate::tree::{Node, Tree};

/// Writes the tree diagram into `out`. An empty tree writes nothing.
///
/// # Examples
///
/// ```
/// use balanced_bst::pretty;
/// use balanced_bst::tree::Tree;
///
/// let tree = Tree::build(vec![1, 2, 3]);
/// let mut out = String::new();
/// pretty::write_tree(&mut out, &tree).unwrap();
/// assert_eq!(out, "│   ┌── 3\n└── 2\n    └── 1\n");
/// ```
pub fn write_tree<T, W>(out: &mut W, tree: &Tree<T>) -> fmt::Result
where
    T: fmt::Display,
    W: Write,
{
    match tree.root() {
        Some(root) => write_subtree(out, root),
        None => Ok(()),
    }
}

/// Writes the diagram of the subtree rooted at `node` into `out`.
pub fn write_subtree<T, W>(out: &mut W, node: &Node<T>) -> fmt::Result
where
    T: fmt::Display,
    W: Write,
{
    write_node(out, node, "", true)
}

/// Renders the tree diagram to a fresh `String`.
pub fn render<T: fmt::Display>(tree: &Tree<T>) -> String {
    let mut out = String::new();
    write_tree(&mut out, tree).expect("writing to a String cannot fail");
    out
}

/// One node plus its connector. `is_left` is the branch side this node hangs
/// off its parent, which decides the connector glyph and how the indentation
/// prefix extends for the children: the side facing the parent's row stays
/// open, the other side carries the `│` rail.
fn write_node<T, W>(out: &mut W, node: &Node<T>, prefix: &str, is_left: bool) -> fmt::Result
where
    T: fmt::Display,
    W: Write,
{
    if let Some(right) = node.right() {
        let extended = format!("{}{}", prefix, if is_left { "│   " } else { "    " });
        write_node(out, right, &extended, false)?;
    }
    writeln!(
        out,
        "{}{}{}",
        prefix,
        if is_left { "└── " } else { "┌── " },
        node.value()
    )?;
    if let Some(left) = node.left() {
        let extended = format!("{}{}", prefix, if is_left { "    " } else { "│   " });
        write_node(out, left, &extended, true)?;
    }
    Ok(())
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tree(f, self)
    }
}
