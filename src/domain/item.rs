//! Item entities: the leaf and composite node variants.

use std::fmt;

use generational_arena::Index;

/// Kind of an inventory item, the closed set of node variants.
///
/// A `Leaf` has no child storage at all, so its child list can never be
/// mutated. A `Composite` owns an ordered sequence of child handles;
/// insertion order is the display order and is preserved exactly until a
/// child is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    Leaf,
    Composite { children: Vec<Index> },
}

/// A named, priced inventory item.
///
/// `price == 0` is a sentinel meaning "no price annotation": rendering omits
/// the `Price:` suffix for such items. Names are expected non-empty but not
/// validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub price: u32,
    pub kind: ItemKind,
}

impl Item {
    pub fn leaf(name: impl Into<String>, price: u32) -> Self {
        Self {
            name: name.into(),
            price,
            kind: ItemKind::Leaf,
        }
    }

    pub fn composite(name: impl Into<String>, price: u32) -> Self {
        Self {
            name: name.into(),
            price,
            kind: ItemKind::Composite {
                children: Vec::new(),
            },
        }
    }

    /// Child handles in insertion order; always empty for a leaf.
    pub fn children(&self) -> &[Index] {
        match &self.kind {
            ItemKind::Leaf => &[],
            ItemKind::Composite { children } => children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, ItemKind::Leaf)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.price > 0 {
            write!(f, "{} Price: {}", self.name, self.price)
        } else {
            f.write_str(&self.name)
        }
    }
}
