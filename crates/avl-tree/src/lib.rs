//! Height-balanced (AVL) binary search tree over totally-ordered scalar keys.
//!
//! Nodes own their children through `Option<Box<_>>`. Insert and delete are
//! recursive: they descend to the mutation point, edit locally, and on the
//! way back up recompute each ancestor's cached height and rotate wherever
//! the balance factor leaves `{-1, 0, 1}`.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`scalar`] | [`Scalar`] key trait, validation, JSON key conversion |
//! [`types`] | [`AvlNode`] and the owning [`Link`] |
//! [`util`] | height/balance helpers, rotations, invariant audit |
//! [`insert`] | insert engine (key-vs-child rebalancing) |
//! [`remove`] | delete engine (child-balance rebalancing) |
//! [`tree`] | [`AvlTree`] façade, traversals, diagnostics |
//! [`print`] | box-drawing tree dump |
//! [`config`] | [`DuplicatePolicy`], [`TreeConfig`] |
//! [`cli`] | report builder behind the `avl-tree` binary |

pub mod cli;
pub mod config;
pub mod error;
pub mod insert;
pub mod print;
pub mod remove;
pub mod scalar;
pub mod tree;
pub mod types;
pub mod util;

pub use config::{DuplicatePolicy, TreeConfig};
pub use error::{AvlError, Result};
pub use scalar::Scalar;
pub use tree::AvlTree;
pub use types::{AvlNode, Link};
pub use util::height_bound;
