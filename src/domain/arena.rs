//! Arena-based inventory trees.
//!
//! [`Inventory`] owns every item in a generational arena and hands out stable
//! [`Index`] handles. Composites reference their children by handle, so
//! subtrees can be linked, unlinked, and rendered without moving item
//! storage, and dropping the inventory releases all items at once. A child
//! carries no back-reference to its parent; the same handle may be linked
//! under more than one composite.

use std::collections::HashSet;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::error::{ChildOp, InventoryError, InventoryResult};
use crate::domain::item::{Item, ItemKind};

/// Arena of inventory items with uniform child management over both kinds.
///
/// The handle does not reveal whether it points at a leaf or a composite;
/// [`add`](Inventory::add) and [`remove`](Inventory::remove) accept any
/// handle and report `UnsupportedOperation` when the target is a leaf.
#[derive(Debug)]
pub struct Inventory {
    /// Arena storage for all items, linked or not
    arena: Arena<Item>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    /// Create a leaf item. The returned handle is not linked anywhere yet.
    #[instrument(level = "trace", skip(self, name))]
    pub fn leaf(&mut self, name: impl Into<String>, price: u32) -> Index {
        self.arena.insert(Item::leaf(name, price))
    }

    /// Create a composite item with an empty child sequence.
    #[instrument(level = "trace", skip(self, name))]
    pub fn composite(&mut self, name: impl Into<String>, price: u32) -> Index {
        self.arena.insert(Item::composite(name, price))
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get(&self, idx: Index) -> Option<&Item> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_mut(&mut self, idx: Index) -> Option<&mut Item> {
        self.arena.get_mut(idx)
    }

    /// Number of items stored, linked or not.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Child handles of `idx` in insertion order; empty for leaves and for
    /// stale handles.
    pub fn children(&self, idx: Index) -> &[Index] {
        self.get(idx).map(Item::children).unwrap_or(&[])
    }

    /// Attach `child` as the last element of `parent`'s child sequence.
    ///
    /// The sequence keeps insertion order and allows duplicate handles.
    /// Linking is refused when `parent` is a leaf (`UnsupportedOperation`)
    /// and when `parent` already lies inside `child`'s subtree
    /// (`CycleDetected`; the resulting loop would make rendering recurse
    /// forever). On any error the tree is left unchanged.
    #[instrument(level = "debug", skip(self))]
    pub fn add(&mut self, parent: Index, child: Index) -> InventoryResult<()> {
        let parent_item = self
            .get(parent)
            .ok_or(InventoryError::ItemNotFound(parent))?;
        if parent_item.is_leaf() {
            return Err(InventoryError::UnsupportedOperation {
                op: ChildOp::Add,
                name: parent_item.name.clone(),
            });
        }
        let child_item = self.get(child).ok_or(InventoryError::ItemNotFound(child))?;
        if self.reaches(child, parent) {
            return Err(InventoryError::CycleDetected {
                parent: parent_item.name.clone(),
                child: child_item.name.clone(),
            });
        }

        if let Some(item) = self.arena.get_mut(parent) {
            if let ItemKind::Composite { children } = &mut item.kind {
                children.push(child);
            }
        }
        Ok(())
    }

    /// Detach the first child of `parent` whose handle equals `child`.
    ///
    /// Matching is by handle identity, not by name; the remaining children
    /// keep their relative order. The detached item stays in the arena and
    /// can be linked again. `ChildNotFound` leaves the sequence unchanged.
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, parent: Index, child: Index) -> InventoryResult<()> {
        let parent_item = self
            .get(parent)
            .ok_or(InventoryError::ItemNotFound(parent))?;
        if parent_item.is_leaf() {
            return Err(InventoryError::UnsupportedOperation {
                op: ChildOp::Remove,
                name: parent_item.name.clone(),
            });
        }
        let child_item = self.get(child).ok_or(InventoryError::ItemNotFound(child))?;
        let position = parent_item
            .children()
            .iter()
            .position(|&c| c == child)
            .ok_or_else(|| InventoryError::ChildNotFound {
                parent: parent_item.name.clone(),
                child: child_item.name.clone(),
            })?;

        if let Some(item) = self.arena.get_mut(parent) {
            if let ItemKind::Composite { children } = &mut item.kind {
                children.remove(position);
            }
        }
        Ok(())
    }

    /// Depth-first pre-order traversal starting at `start`.
    #[instrument(level = "trace", skip(self))]
    pub fn iter_from(&self, start: Index) -> Iter<'_> {
        Iter::new(self, start)
    }

    /// Number of levels below and including `root`; 0 for a stale handle.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self, root: Index) -> usize {
        if let Some(item) = self.get(root) {
            1 + item
                .children()
                .iter()
                .map(|&child| self.depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Names of all leaf items under `root`, in display order.
    ///
    /// Filters by kind: a composite whose children were all removed is not a
    /// leaf item.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_items(&self, root: Index) -> Vec<String> {
        self.iter_from(root)
            .filter(|(_, item)| item.is_leaf())
            .map(|(_, item)| item.name.clone())
            .collect()
    }

    /// Root-to-bottom paths, one string per path, names joined by `" / "`.
    ///
    /// A path ends at any item with no children, leaf or emptied composite.
    #[instrument(level = "debug", skip(self))]
    pub fn branches(&self, root: Index) -> Vec<String> {
        let mut branches = Vec::new();
        let mut path = Vec::new();
        self.collect_branches(root, &mut path, &mut branches);
        branches
    }

    fn collect_branches(&self, idx: Index, path: &mut Vec<String>, out: &mut Vec<String>) {
        if let Some(item) = self.get(idx) {
            path.push(item.name.clone());
            if item.children().is_empty() {
                out.push(path.join(" / "));
            } else {
                for &child in item.children() {
                    self.collect_branches(child, path, out);
                }
            }
            path.pop();
        }
    }

    /// True when `target` is reachable from `from` through child links,
    /// including `from == target`.
    fn reaches(&self, from: Index, target: Index) -> bool {
        let mut visited = HashSet::new();
        let mut stack = vec![from];
        while let Some(idx) = stack.pop() {
            if idx == target {
                return true;
            }
            // Duplicate links queue a node more than once; walk each node once
            if !visited.insert(idx) {
                continue;
            }
            if let Some(item) = self.get(idx) {
                stack.extend_from_slice(item.children());
            }
        }
        false
    }
}

/// Depth-first pre-order iterator over an item subtree.
pub struct Iter<'a> {
    inventory: &'a Inventory,
    stack: Vec<Index>,
}

impl<'a> Iter<'a> {
    fn new(inventory: &'a Inventory, start: Index) -> Self {
        let mut stack = Vec::new();
        if inventory.get(start).is_some() {
            stack.push(start);
        }
        Self { inventory, stack }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (Index, &'a Item);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(idx) = self.stack.pop() {
            if let Some(item) = self.inventory.get(idx) {
                // Reverse push keeps children in left-to-right order
                for &child in item.children().iter().rev() {
                    self.stack.push(child);
                }
                return Some((idx, item));
            }
        }
        None
    }
}
