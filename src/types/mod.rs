pub mod error;
pub mod page;
pub mod row;

// Common type aliases
pub type PageId = u32;

// Constants defining the on-disk contract
pub const PAGE_SIZE: usize = 4096;
pub const TABLE_MAX_PAGES: PageId = 100;
