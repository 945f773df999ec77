//! Domain layer: inventory items, arena storage, rendering, errors.
//!
//! This layer is independent of external concerns (no I/O, no CLI).

pub mod arena;
pub mod display;
pub mod error;
pub mod item;

pub use arena::{Inventory, Iter};
pub use generational_arena::Index;
pub use display::{DEPTH_STEP, INDENT_FILLER};
pub use error::{ChildOp, InventoryError, InventoryResult};
pub use item::{Item, ItemKind};
