use std::path::Path;

use crate::{
    storage::{node, pager::Pager},
    types::{PAGE_SIZE, PageId, error::DatabaseError},
};

/// Binds a pager to the root page of the tree. All row data lives inside
/// leaf pages owned by the pager; the table only owns the lifecycle.
pub struct Table {
    pager: Pager,
    root_page_num: PageId,
}

impl Table {
    /// Open the database file, initializing page 0 as an empty root leaf
    /// when the file is new.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DatabaseError> {
        let mut pager = Pager::open(path)?;

        if pager.num_pages() == 0 {
            let root = pager.get_page(0)?;
            node::initialize_leaf_node(root);
            node::set_is_root(root, true);
        }

        Ok(Self {
            pager,
            root_page_num: 0,
        })
    }

    pub fn root_page_num(&self) -> PageId {
        self.root_page_num
    }

    pub fn pager(&mut self) -> &mut Pager {
        &mut self.pager
    }

    /// Flush every populated page and release the cache. This is the
    /// single point where durability is guaranteed.
    pub fn close(mut self) -> Result<(), DatabaseError> {
        for page_num in 0..self.pager.num_pages() {
            if self.pager.is_loaded(page_num) {
                self.pager.flush(page_num, PAGE_SIZE)?;
            }
        }
        self.pager.release();
        Ok(())
    }
}
