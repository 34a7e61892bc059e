use crate::types::{PAGE_SIZE, page::Page, row::{ROW_SIZE, Row}};

/*
 * Common Node Header Layout
 * ┌──────────────┬─────────┬────────────────┬────────────┐
 * │ node type(1) │ root(1) │ parent page(4) │ cells(4)   │ ← leaf header
 * ├──────────────┴─────────┴────────────────┴────────────┤
 * │ cell 0: key(4) + row(ROW_SIZE)                       │
 * │ cell 1: ...                                          │
 * └──────────────────────────────────────────────────────┘
 * Cells are contiguous from the end of the header and kept sorted by key.
 */
pub const NODE_TYPE_SIZE: usize = size_of::<u8>();
pub const NODE_TYPE_OFFSET: usize = 0;
pub const IS_ROOT_SIZE: usize = size_of::<u8>();
pub const IS_ROOT_OFFSET: usize = NODE_TYPE_OFFSET + NODE_TYPE_SIZE;
pub const PARENT_POINTER_SIZE: usize = size_of::<u32>();
pub const PARENT_POINTER_OFFSET: usize = IS_ROOT_OFFSET + IS_ROOT_SIZE;
pub const COMMON_NODE_HEADER_SIZE: usize = NODE_TYPE_SIZE + IS_ROOT_SIZE + PARENT_POINTER_SIZE;

/*
 * Leaf Node Header Layout
 */
pub const LEAF_NODE_NUM_CELLS_SIZE: usize = size_of::<u32>();
pub const LEAF_NODE_NUM_CELLS_OFFSET: usize = COMMON_NODE_HEADER_SIZE;
pub const LEAF_NODE_HEADER_SIZE: usize = COMMON_NODE_HEADER_SIZE + LEAF_NODE_NUM_CELLS_SIZE;

/*
 * Leaf Node Body Layout
 */
pub const LEAF_NODE_KEY_SIZE: usize = size_of::<u32>();
pub const LEAF_NODE_KEY_OFFSET: usize = 0;
pub const LEAF_NODE_VALUE_SIZE: usize = ROW_SIZE;
pub const LEAF_NODE_VALUE_OFFSET: usize = LEAF_NODE_KEY_OFFSET + LEAF_NODE_KEY_SIZE;
pub const LEAF_NODE_CELL_SIZE: usize = LEAF_NODE_KEY_SIZE + LEAF_NODE_VALUE_SIZE;
pub const LEAF_NODE_SPACE_FOR_CELLS: usize = PAGE_SIZE - LEAF_NODE_HEADER_SIZE;
pub const LEAF_NODE_MAX_CELLS: usize = LEAF_NODE_SPACE_FOR_CELLS / LEAF_NODE_CELL_SIZE;

/// Node kind tag. Only `Leaf` is produced today; `Internal` is reserved
/// so split/rebalancing can land without reshaping the data model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Internal = 0,
    Leaf = 1,
}

impl NodeType {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => NodeType::Internal,
            _ => NodeType::Leaf,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

pub fn node_type(page: &Page) -> NodeType {
    NodeType::from_u8(page.read_u8(NODE_TYPE_OFFSET))
}

pub fn set_node_type(page: &mut Page, node_type: NodeType) {
    page.write_u8(NODE_TYPE_OFFSET, node_type.as_u8());
}

pub fn is_root(page: &Page) -> bool {
    page.read_u8(IS_ROOT_OFFSET) != 0
}

pub fn set_is_root(page: &mut Page, is_root: bool) {
    page.write_u8(IS_ROOT_OFFSET, is_root as u8);
}

pub fn parent(page: &Page) -> u32 {
    page.read_u32(PARENT_POINTER_OFFSET)
}

pub fn set_parent(page: &mut Page, parent: u32) {
    page.write_u32(PARENT_POINTER_OFFSET, parent);
}

pub fn leaf_num_cells(page: &Page) -> u32 {
    page.read_u32(LEAF_NODE_NUM_CELLS_OFFSET)
}

pub fn set_leaf_num_cells(page: &mut Page, num_cells: u32) {
    page.write_u32(LEAF_NODE_NUM_CELLS_OFFSET, num_cells);
}

fn leaf_cell_offset(cell_num: u32) -> usize {
    LEAF_NODE_HEADER_SIZE + cell_num as usize * LEAF_NODE_CELL_SIZE
}

pub fn leaf_key(page: &Page, cell_num: u32) -> u32 {
    page.read_u32(leaf_cell_offset(cell_num) + LEAF_NODE_KEY_OFFSET)
}

pub fn set_leaf_key(page: &mut Page, cell_num: u32, key: u32) {
    page.write_u32(leaf_cell_offset(cell_num) + LEAF_NODE_KEY_OFFSET, key);
}

pub fn leaf_value(page: &Page, cell_num: u32) -> &[u8] {
    page.slice(
        leaf_cell_offset(cell_num) + LEAF_NODE_VALUE_OFFSET,
        LEAF_NODE_VALUE_SIZE,
    )
}

pub fn leaf_value_mut(page: &mut Page, cell_num: u32) -> &mut [u8] {
    page.slice_mut(
        leaf_cell_offset(cell_num) + LEAF_NODE_VALUE_OFFSET,
        LEAF_NODE_VALUE_SIZE,
    )
}

/// Reset a brand-new page into an empty leaf. Idempotent.
pub fn initialize_leaf_node(page: &mut Page) {
    set_node_type(page, NodeType::Leaf);
    set_is_root(page, false);
    set_parent(page, 0);
    set_leaf_num_cells(page, 0);
}

/// Binary search over the sorted cell array. Returns the index of the
/// first cell whose key is >= `key`, which is both the duplicate-check
/// position and the in-order insertion point.
pub fn leaf_find_cell(page: &Page, key: u32) -> u32 {
    let mut lo = 0u32;
    let mut hi = leaf_num_cells(page);
    while lo != hi {
        let mid = lo + (hi - lo) / 2;
        let key_at_mid = leaf_key(page, mid);
        if key == key_at_mid {
            return mid;
        }
        if key < key_at_mid {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

/// Outcome of a leaf insertion attempt. `Full` and `Duplicate` leave the
/// page untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafInsert {
    Inserted,
    Duplicate,
    Full,
}

/// Insert `(key, row)` at `cell_num`, which must be the position returned
/// by `leaf_find_cell`. Checks capacity, then the duplicate invariant,
/// then shifts cells at or after `cell_num` one slot right and writes the
/// new cell into the gap.
pub fn leaf_insert(page: &mut Page, cell_num: u32, key: u32, row: &Row) -> LeafInsert {
    let num_cells = leaf_num_cells(page);

    if num_cells as usize >= LEAF_NODE_MAX_CELLS {
        // Node splitting is not implemented; the capacity boundary is
        // surfaced as a table-full condition.
        return LeafInsert::Full;
    }

    if cell_num < num_cells && leaf_key(page, cell_num) == key {
        return LeafInsert::Duplicate;
    }

    if cell_num < num_cells {
        let src = leaf_cell_offset(cell_num);
        let dst = leaf_cell_offset(cell_num + 1);
        let len = (num_cells - cell_num) as usize * LEAF_NODE_CELL_SIZE;
        page.copy_within(src, dst, len);
    }

    set_leaf_key(page, cell_num, key);
    row.serialize(leaf_value_mut(page, cell_num));
    set_leaf_num_cells(page, num_cells + 1);
    LeafInsert::Inserted
}

/// One line per cell, used by the shell's `.btree` command.
pub fn format_leaf_node(page: &Page) -> String {
    let num_cells = leaf_num_cells(page);
    let mut out = format!("leaf (size {})\n", num_cells);
    for i in 0..num_cells {
        out.push_str(&format!("  - {} : {}\n", i, leaf_key(page, i)));
    }
    out
}
