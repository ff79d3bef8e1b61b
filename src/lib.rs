//! This crate exposes a Binary Search Tree (BST) built from arrays of
//! values, along with a text renderer for inspecting tree shapes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! ## This crate's tree
//!
//! [`tree::Tree`] is built from a sequence of values which is sorted and
//! deduplicated up front; the initial shape is height-balanced because each
//! subtree root is the midpoint of its sorted sub-range. The shape is *not*
//! maintained afterwards: [`insert`][tree::Tree::insert] and
//! [`delete`][tree::Tree::delete] are plain BST mutations, and a run of
//! one-sided inserts will skew the tree. Balance is restored only on an
//! explicit [`rebalance`][tree::Tree::rebalance], which flattens the tree
//! into its sorted values and rebuilds it.
//!
//! All walks are recursive, so the stack bounds how deep a skewed tree can
//! get before traversal becomes a problem. Callers working near that regime
//! should rebalance often.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod pretty;
pub mod tree;

#[cfg(test)]
mod test;
