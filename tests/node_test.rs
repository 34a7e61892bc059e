use lumbung::{
    storage::node::{
        self, COMMON_NODE_HEADER_SIZE, LEAF_NODE_CELL_SIZE, LEAF_NODE_HEADER_SIZE,
        LEAF_NODE_MAX_CELLS, LEAF_NODE_SPACE_FOR_CELLS, LeafInsert, NodeType,
    },
    types::{page::Page, row::Row},
};

fn test_row(id: u32) -> Row {
    Row::new(id, &format!("user{}", id), &format!("user{}@example.com", id))
}

fn empty_leaf() -> Page {
    let mut page = Page::zeroed();
    node::initialize_leaf_node(&mut page);
    page
}

#[test]
fn test_layout_constants() {
    assert_eq!(COMMON_NODE_HEADER_SIZE, 6);
    assert_eq!(LEAF_NODE_HEADER_SIZE, 10);
    assert_eq!(LEAF_NODE_CELL_SIZE, 297);
    assert_eq!(LEAF_NODE_SPACE_FOR_CELLS, 4086);
    assert_eq!(LEAF_NODE_MAX_CELLS, 13);
}

#[test]
fn test_initialize_leaf_node() {
    let page = empty_leaf();
    assert_eq!(node::node_type(&page), NodeType::Leaf);
    assert!(!node::is_root(&page));
    assert_eq!(node::parent(&page), 0);
    assert_eq!(node::leaf_num_cells(&page), 0);
}

#[test]
fn test_header_accessors_round_trip() {
    let mut page = empty_leaf();
    node::set_is_root(&mut page, true);
    node::set_parent(&mut page, 7);
    node::set_leaf_num_cells(&mut page, 3);
    assert!(node::is_root(&page));
    assert_eq!(node::parent(&page), 7);
    assert_eq!(node::leaf_num_cells(&page), 3);
}

#[test]
fn test_insert_at_end() {
    let mut page = empty_leaf();
    for key in [1, 2, 3] {
        let cell_num = node::leaf_find_cell(&page, key);
        assert_eq!(
            node::leaf_insert(&mut page, cell_num, key, &test_row(key)),
            LeafInsert::Inserted
        );
    }
    assert_eq!(node::leaf_num_cells(&page), 3);
    for (i, key) in [1, 2, 3].into_iter().enumerate() {
        assert_eq!(node::leaf_key(&page, i as u32), key);
    }
}

#[test]
fn test_insert_shifts_cells_right() {
    let mut page = empty_leaf();
    for key in [10, 30] {
        let cell_num = node::leaf_find_cell(&page, key);
        node::leaf_insert(&mut page, cell_num, key, &test_row(key));
    }
    let cell_num = node::leaf_find_cell(&page, 20);
    assert_eq!(cell_num, 1);
    node::leaf_insert(&mut page, cell_num, 20, &test_row(20));

    assert_eq!(node::leaf_num_cells(&page), 3);
    assert_eq!(node::leaf_key(&page, 0), 10);
    assert_eq!(node::leaf_key(&page, 1), 20);
    assert_eq!(node::leaf_key(&page, 2), 30);
    // Shifted cell still decodes to its original row.
    assert_eq!(Row::deserialize(node::leaf_value(&page, 2)), test_row(30));
}

#[test]
fn test_keys_strictly_increasing_after_random_inserts() {
    let mut page = empty_leaf();
    for key in [5, 1, 9, 3, 7, 2, 8, 4, 6] {
        let cell_num = node::leaf_find_cell(&page, key);
        assert_eq!(
            node::leaf_insert(&mut page, cell_num, key, &test_row(key)),
            LeafInsert::Inserted
        );
    }
    let num_cells = node::leaf_num_cells(&page);
    for i in 1..num_cells {
        assert!(node::leaf_key(&page, i - 1) < node::leaf_key(&page, i));
    }
}

#[test]
fn test_find_cell_positions() {
    let mut page = empty_leaf();
    for key in [10, 20, 30] {
        let cell_num = node::leaf_find_cell(&page, key);
        node::leaf_insert(&mut page, cell_num, key, &test_row(key));
    }
    assert_eq!(node::leaf_find_cell(&page, 5), 0);
    assert_eq!(node::leaf_find_cell(&page, 10), 0);
    assert_eq!(node::leaf_find_cell(&page, 15), 1);
    assert_eq!(node::leaf_find_cell(&page, 30), 2);
    assert_eq!(node::leaf_find_cell(&page, 35), 3);
}

#[test]
fn test_duplicate_key_rejected_without_mutation() {
    let mut page = empty_leaf();
    let cell_num = node::leaf_find_cell(&page, 1);
    node::leaf_insert(&mut page, cell_num, 1, &test_row(1));

    let cell_num = node::leaf_find_cell(&page, 1);
    assert_eq!(
        node::leaf_insert(&mut page, cell_num, 1, &Row::new(1, "other", "other@x.com")),
        LeafInsert::Duplicate
    );
    assert_eq!(node::leaf_num_cells(&page), 1);
    assert_eq!(Row::deserialize(node::leaf_value(&page, 0)), test_row(1));
}

#[test]
fn test_full_leaf_rejects_insert() {
    let mut page = empty_leaf();
    for key in 0..LEAF_NODE_MAX_CELLS as u32 {
        let cell_num = node::leaf_find_cell(&page, key);
        assert_eq!(
            node::leaf_insert(&mut page, cell_num, key, &test_row(key)),
            LeafInsert::Inserted
        );
    }
    let overflow_key = LEAF_NODE_MAX_CELLS as u32;
    let cell_num = node::leaf_find_cell(&page, overflow_key);
    assert_eq!(
        node::leaf_insert(&mut page, cell_num, overflow_key, &test_row(overflow_key)),
        LeafInsert::Full
    );
    assert_eq!(node::leaf_num_cells(&page), LEAF_NODE_MAX_CELLS as u32);
    for key in 0..LEAF_NODE_MAX_CELLS as u32 {
        assert_eq!(node::leaf_key(&page, key), key);
    }
}

#[test]
fn test_format_leaf_node() {
    let mut page = empty_leaf();
    for key in [3, 1] {
        let cell_num = node::leaf_find_cell(&page, key);
        node::leaf_insert(&mut page, cell_num, key, &test_row(key));
    }
    assert_eq!(node::format_leaf_node(&page), "leaf (size 2)\n  - 0 : 1\n  - 1 : 3\n");
}
