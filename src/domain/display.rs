//! Depth-indented rendering of inventory subtrees.
//!
//! The flat format is part of the output contract: each item on its own
//! line, prefixed by [`INDENT_FILLER`] repeated `depth` times, where depth
//! advances by [`DEPTH_STEP`] per level; children come directly below their
//! parent in insertion order. A termtree view is available as an alternative
//! for interactive use.

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::arena::Inventory;

/// Filler character prefixed to each rendered line.
pub const INDENT_FILLER: char = '-';

/// Number of filler characters added per tree level.
pub const DEPTH_STEP: usize = 2;

impl Inventory {
    /// Render the subtree under `root` with `root` at depth 0.
    ///
    /// Every line ends with `\n`; a stale handle renders as the empty
    /// string. Rendering never mutates the tree, so repeated calls return
    /// identical output.
    #[instrument(level = "debug", skip(self))]
    pub fn render(&self, root: Index) -> String {
        self.render_from(root, 0)
    }

    /// Render the subtree under `item` starting at an arbitrary depth.
    ///
    /// Lets a caller display a mid-tree item with the indentation it would
    /// have in the full tree.
    #[instrument(level = "debug", skip(self))]
    pub fn render_from(&self, item: Index, depth: usize) -> String {
        let mut out = String::new();
        self.render_item(item, depth, &mut out);
        out
    }

    fn render_item(&self, idx: Index, depth: usize, out: &mut String) {
        if let Some(item) = self.get(idx) {
            for _ in 0..depth {
                out.push(INDENT_FILLER);
            }
            out.push_str(&item.to_string());
            out.push('\n');
            for &child in item.children() {
                self.render_item(child, depth + DEPTH_STEP, out);
            }
        }
    }

    /// Build a termtree view of the subtree under `root`.
    #[instrument(level = "debug", skip(self))]
    pub fn to_tree_string(&self, root: Index) -> Tree<String> {
        fn build(inv: &Inventory, idx: Index, parent: &mut Tree<String>) {
            for &child in inv.children(idx) {
                if let Some(item) = inv.get(child) {
                    let mut subtree = Tree::new(item.to_string());
                    build(inv, child, &mut subtree);
                    parent.push(subtree);
                }
            }
        }

        let label = match self.get(root) {
            Some(item) => item.to_string(),
            None => "Empty inventory".to_string(),
        };
        let mut tree = Tree::new(label);
        build(self, root, &mut tree);
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_nested_items_when_rendering_then_indent_grows_by_step() {
        let mut inv = Inventory::new();
        let root = inv.composite("root", 0);
        let mid = inv.composite("mid", 0);
        let deep = inv.leaf("deep", 0);
        inv.add(root, mid).unwrap();
        inv.add(mid, deep).unwrap();

        assert_eq!(inv.render(root), "root\n--mid\n----deep\n");
    }

    #[test]
    fn given_stale_handle_when_rendering_then_empty_string() {
        let mut other = Inventory::new();
        let foreign = other.leaf("gone", 0);

        let inv = Inventory::new();
        assert_eq!(inv.render(foreign), "");
    }
}
