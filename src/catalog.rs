//! Ready-made demo inventory: a small office building.
//!
//! Rooms hold furniture, furniture holds parts, and most items carry a
//! price. The tree exercises every rendering rule: unpriced items, priced
//! composites, and leaves five levels down.

use generational_arena::Index;
use tracing::instrument;

use crate::domain::{Inventory, InventoryResult};

fn add_leaf(inv: &mut Inventory, parent: Index, name: &str, price: u32) -> InventoryResult<()> {
    let leaf = inv.leaf(name, price);
    inv.add(parent, leaf)
}

fn add_composite(
    inv: &mut Inventory,
    parent: Index,
    name: &str,
    price: u32,
) -> InventoryResult<Index> {
    let composite = inv.composite(name, price);
    inv.add(parent, composite)?;
    Ok(composite)
}

/// Populate `inv` with the demo building and return the root handle.
#[instrument(level = "debug", skip(inv))]
pub fn sample_building(inv: &mut Inventory) -> InventoryResult<Index> {
    let building = inv.composite("Building", 0);

    // Reception
    let reception = add_composite(inv, building, "Reception", 0)?;
    add_leaf(inv, reception, "Warm tones", 0)?;
    let coffee_table = add_composite(inv, reception, "Coffee Table", 100)?;
    add_leaf(inv, coffee_table, "Magazines", 50)?;
    add_leaf(inv, reception, "Sofa", 400)?;
    let desk = add_composite(inv, reception, "Secretary Desk", 600)?;
    let computer = add_composite(inv, desk, "Computer", 900)?;
    add_leaf(inv, computer, "2TB Hard Drive", 200)?;
    add_leaf(inv, desk, "Office Supplies", 150)?;
    add_leaf(inv, reception, "Water Cooler", 100)?;

    // Lecture room 1
    let lecture_1 = add_composite(inv, building, "Lecture Room 1", 0)?;
    add_leaf(inv, lecture_1, "10 Tables", 400)?;
    add_leaf(inv, lecture_1, "Whiteboard", 70)?;
    let lecturer_desk = add_composite(inv, lecture_1, "Teacher's Desk", 0)?;
    add_leaf(inv, lecturer_desk, "Computer", 900)?;
    add_leaf(inv, lecture_1, "Posters", 140)?;

    // Lecture room 2
    let lecture_2 = add_composite(inv, building, "Lecture Room 2", 0)?;
    let tables = add_composite(inv, lecture_2, "20 Tables", 300)?;
    add_leaf(inv, tables, "Black Tables", 300)?;
    add_leaf(inv, tables, "Round Tables", 150)?;
    add_leaf(inv, lecture_2, "Whiteboard", 70)?;
    add_leaf(inv, lecture_2, "Sofa", 300)?;

    // Computer lab
    let lab = add_composite(inv, building, "Computer Lab", 0)?;
    let desks = add_composite(inv, lab, "Computer Desks", 600)?;
    let workstations = add_composite(inv, desks, "Workstations", 6000)?;
    add_leaf(inv, workstations, "Processor 2.2 GHz", 200)?;
    add_leaf(inv, workstations, "Hard Drive 80GB", 50)?;
    add_leaf(inv, workstations, "RAM 1GB", 10)?;
    add_leaf(inv, desks, "Socket", 20)?;
    let whiteboard = add_composite(inv, lab, "Whiteboard", 100)?;
    add_leaf(inv, whiteboard, "Markers", 30)?;

    // Dining room
    let dining = add_composite(inv, building, "Dining Room", 0)?;
    add_leaf(inv, dining, "Coffee Machine", 300)?;
    let table = add_composite(inv, dining, "Table", 50)?;
    add_leaf(inv, table, "4 Chairs", 100)?;
    add_leaf(inv, dining, "Refrigerator", 600)?;
    add_leaf(inv, dining, "Sink", 200)?;

    Ok(building)
}
