//! Composite inventory trees.
//!
//! An [`Inventory`](domain::Inventory) stores named, priced items in an
//! arena. Leaf items and composite items share one interface: child
//! management calls succeed on composites and return a recoverable error on
//! leaves, so callers can treat any handle uniformly. Rendering walks a
//! subtree depth-first and indents each level with a fixed run of `-`
//! characters.
//!
//! ```
//! use rsinv::domain::Inventory;
//!
//! let mut inv = Inventory::new();
//! let building = inv.composite("Building", 0);
//! let room = inv.composite("Room", 0);
//! let chair = inv.leaf("Chair", 50);
//! inv.add(building, room)?;
//! inv.add(room, chair)?;
//!
//! assert_eq!(inv.render(building), "Building\n--Room\n----Chair Price: 50\n");
//! # Ok::<(), rsinv::domain::InventoryError>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod domain;
pub mod util;

pub use domain::{
    ChildOp, Index, Inventory, InventoryError, InventoryResult, Item, ItemKind, Iter, DEPTH_STEP,
    INDENT_FILLER,
};
