use crate::{
    storage::{
        node::{self, LeafInsert},
        table::Table,
    },
    types::{PageId, error::DatabaseError, row::Row},
};

/// A transient position within the tree: page number plus cell index.
/// Holds no page data itself, only coordinates into the pager's cache.
pub struct Cursor<'a> {
    table: &'a mut Table,
    page_num: PageId,
    cell_num: u32,
    end_of_table: bool,
}

impl Table {
    /// Position at the first cell of the root leaf.
    pub fn start(&mut self) -> Result<Cursor<'_>, DatabaseError> {
        let root_page_num = self.root_page_num();
        let root = self.pager().get_page(root_page_num)?;
        let num_cells = node::leaf_num_cells(root);
        Ok(Cursor {
            table: self,
            page_num: root_page_num,
            cell_num: 0,
            end_of_table: num_cells == 0,
        })
    }

    /// Position one past the last cell, the append point.
    pub fn end(&mut self) -> Result<Cursor<'_>, DatabaseError> {
        let root_page_num = self.root_page_num();
        let root = self.pager().get_page(root_page_num)?;
        let num_cells = node::leaf_num_cells(root);
        Ok(Cursor {
            table: self,
            page_num: root_page_num,
            cell_num: num_cells,
            end_of_table: true,
        })
    }

    /// Position at the first cell whose key is >= `key`.
    pub fn find(&mut self, key: u32) -> Result<Cursor<'_>, DatabaseError> {
        let root_page_num = self.root_page_num();
        let root = self.pager().get_page(root_page_num)?;
        let num_cells = node::leaf_num_cells(root);
        let cell_num = node::leaf_find_cell(root, key);
        Ok(Cursor {
            table: self,
            page_num: root_page_num,
            cell_num,
            end_of_table: cell_num >= num_cells,
        })
    }
}

impl Cursor<'_> {
    pub fn cell_num(&self) -> u32 {
        self.cell_num
    }

    pub fn end_of_table(&self) -> bool {
        self.end_of_table
    }

    /// The row bytes at the current cell. Undefined past end-of-table;
    /// callers check `end_of_table` first.
    pub fn value(&mut self) -> Result<&[u8], DatabaseError> {
        let cell_num = self.cell_num;
        let page = self.table.pager().get_page(self.page_num)?;
        Ok(node::leaf_value(page, cell_num))
    }

    /// Decode the row at the current cell.
    pub fn row(&mut self) -> Result<Row, DatabaseError> {
        Ok(Row::deserialize(self.value()?))
    }

    /// Step to the next cell, marking end-of-table at the node boundary.
    /// The whole table is one leaf, so advance never crosses a page.
    pub fn advance(&mut self) -> Result<(), DatabaseError> {
        let page = self.table.pager().get_page(self.page_num)?;
        let num_cells = node::leaf_num_cells(page);
        self.cell_num += 1;
        if self.cell_num >= num_cells {
            self.end_of_table = true;
        }
        Ok(())
    }

    /// Insert `(key, row)` at this cursor's position, which must come
    /// from `Table::find`.
    pub fn insert(&mut self, key: u32, row: &Row) -> Result<LeafInsert, DatabaseError> {
        let cell_num = self.cell_num;
        let page = self.table.pager().get_page(self.page_num)?;
        Ok(node::leaf_insert(page, cell_num, key, row))
    }
}
