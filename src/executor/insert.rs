use crate::{
    executor::ExecuteResult,
    storage::{node::LeafInsert, table::Table},
    types::{error::DatabaseError, row::Row},
};

/// Locate the insertion point by key and delegate to the leaf insertion
/// routine. Duplicate-key and capacity conditions come back as typed
/// results with no page mutation.
pub fn execute_insert(table: &mut Table, row: &Row) -> Result<ExecuteResult, DatabaseError> {
    let key = row.id;
    let mut cursor = table.find(key)?;

    match cursor.insert(key, row)? {
        LeafInsert::Inserted => Ok(ExecuteResult::Success(Vec::new())),
        LeafInsert::Duplicate => Ok(ExecuteResult::DuplicateKey),
        LeafInsert::Full => Ok(ExecuteResult::TableFull),
    }
}
