pub mod cursor;
pub mod node;
pub mod pager;
pub mod table;
