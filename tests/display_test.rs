//! Tests for depth-indented rendering

use rstest::rstest;

use rsinv::domain::{Index, Inventory, DEPTH_STEP, INDENT_FILLER};

fn building_room_chair(inv: &mut Inventory) -> (Index, Index, Index) {
    let building = inv.composite("Building", 0);
    let room = inv.composite("Room", 0);
    let chair = inv.leaf("Chair", 50);
    inv.add(building, room).unwrap();
    inv.add(room, chair).unwrap();
    (building, room, chair)
}

#[test]
fn given_three_level_tree_when_rendering_then_exact_listing() {
    // Arrange
    let mut inv = Inventory::new();
    let (building, _, _) = building_room_chair(&mut inv);

    // Act
    let rendered = inv.render(building);

    // Assert
    assert_eq!(rendered, "Building\n--Room\n----Chair Price: 50\n");
}

#[rstest]
#[case(0, "Sofa\n")]
#[case(400, "Sofa Price: 400\n")]
fn given_leaf_price_when_rendering_then_suffix_only_when_positive(
    #[case] price: u32,
    #[case] expected: &str,
) {
    // Arrange
    let mut inv = Inventory::new();
    let sofa = inv.leaf("Sofa", price);

    // Act / Assert
    assert_eq!(inv.render(sofa), expected);
}

#[test]
fn given_mid_tree_item_when_rendering_from_depth_then_indent_matches_position() {
    // Arrange
    let mut inv = Inventory::new();
    let sofa = inv.leaf("Sofa", 400);

    // Act
    let rendered = inv.render_from(sofa, 2);

    // Assert
    assert_eq!(rendered, "--Sofa Price: 400\n");
}

#[test]
fn given_tree_when_rendering_then_indent_grows_by_fixed_step() {
    // Arrange
    let mut inv = Inventory::new();
    let (building, _, _) = building_room_chair(&mut inv);

    // Act
    let rendered = inv.render(building);

    // Assert: depth n lines start with exactly n * DEPTH_STEP fillers
    for (level, line) in rendered.lines().enumerate() {
        let fillers = line.chars().take_while(|&c| c == INDENT_FILLER).count();
        assert_eq!(fillers, level * DEPTH_STEP, "line: {line}");
    }
}

#[test]
fn given_tree_when_rendering_twice_then_output_identical() {
    // Arrange
    let mut inv = Inventory::new();
    let (building, _, _) = building_room_chair(&mut inv);

    // Act / Assert
    assert_eq!(inv.render(building), inv.render(building));
}

#[test]
fn given_child_sequence_edits_when_rendering_then_order_follows_sequence() {
    // Arrange
    let mut inv = Inventory::new();
    let room = inv.composite("Room", 0);
    let sofa = inv.leaf("Sofa", 400);
    let table = inv.leaf("Table", 50);
    inv.add(room, sofa).unwrap();
    inv.add(room, table).unwrap();

    // Act: detach the first child and append it again
    inv.remove(room, sofa).unwrap();
    inv.add(room, sofa).unwrap();

    // Assert
    assert_eq!(inv.render(room), "Room\n--Table Price: 50\n--Sofa Price: 400\n");
}

#[test]
fn given_price_update_when_rendering_then_new_price_shown() {
    // Arrange
    let mut inv = Inventory::new();
    let sofa = inv.leaf("Sofa", 400);

    // Act
    inv.get_mut(sofa).unwrap().price = 250;

    // Assert
    assert_eq!(inv.render(sofa), "Sofa Price: 250\n");
}

#[test]
fn given_shared_subtree_when_rendering_then_appears_under_each_parent() {
    // Arrange: the same whiteboard linked into two rooms
    let mut inv = Inventory::new();
    let building = inv.composite("Building", 0);
    let room_a = inv.composite("Room A", 0);
    let room_b = inv.composite("Room B", 0);
    let whiteboard = inv.leaf("Whiteboard", 70);
    inv.add(building, room_a).unwrap();
    inv.add(building, room_b).unwrap();
    inv.add(room_a, whiteboard).unwrap();
    inv.add(room_b, whiteboard).unwrap();

    // Act
    let rendered = inv.render(building);

    // Assert
    assert_eq!(
        rendered,
        "Building\n--Room A\n----Whiteboard Price: 70\n--Room B\n----Whiteboard Price: 70\n"
    );
}

#[test]
fn given_stale_root_when_rendering_then_empty_string() {
    // Arrange
    let mut other = Inventory::new();
    let foreign = other.leaf("gone", 0);

    // Act / Assert
    let inv = Inventory::new();
    assert_eq!(inv.render(foreign), "");
}

#[test]
fn given_tree_when_building_termtree_then_all_items_present() {
    // Arrange
    let mut inv = Inventory::new();
    let (building, _, _) = building_room_chair(&mut inv);

    // Act
    let tree = inv.to_tree_string(building).to_string();

    // Assert
    assert!(tree.contains("Building"));
    assert!(tree.contains("Room"));
    assert!(tree.contains("Chair Price: 50"));
}

#[test]
fn given_stale_root_when_building_termtree_then_placeholder_label() {
    // Arrange
    let mut other = Inventory::new();
    let foreign = other.leaf("gone", 0);

    // Act
    let inv = Inventory::new();
    let tree = inv.to_tree_string(foreign).to_string();

    // Assert
    assert!(tree.contains("Empty inventory"));
}
