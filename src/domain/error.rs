//! Domain errors for inventory tree operations.
//!
//! Every condition here is recoverable: the failing call leaves the tree
//! untouched and the caller decides whether to report or swallow it.

use std::fmt;

use generational_arena::Index;
use thiserror::Error;

/// Child-management operation named in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildOp {
    Add,
    Remove,
}

impl fmt::Display for ChildOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildOp::Add => f.write_str("add child to"),
            ChildOp::Remove => f.write_str("remove child from"),
        }
    }
}

#[derive(Error, Debug)]
pub enum InventoryError {
    /// `add`/`remove` invoked on an item kind without child management.
    #[error("cannot {op} leaf item '{name}'")]
    UnsupportedOperation { op: ChildOp, name: String },

    /// `remove` with a handle that is not among the current children.
    #[error("item '{child}' is not a child of '{parent}'")]
    ChildNotFound { parent: String, child: String },

    /// A handle that does not resolve to a live item in this inventory.
    #[error("no item behind handle {0:?}")]
    ItemNotFound(Index),

    /// Linking would make the subtree contain itself.
    #[error("adding '{child}' under '{parent}' would create a cycle")]
    CycleDetected { parent: String, child: String },
}

/// Result type for inventory operations.
pub type InventoryResult<T> = Result<T, InventoryError>;
