use crate::{
    executor::ExecuteResult,
    storage::table::Table,
    types::error::DatabaseError,
};

/// Full in-order scan: start at the first cell and advance to
/// end-of-table, decoding each row. The tree is one sorted node, so this
/// yields ascending key order.
pub fn execute_select(table: &mut Table) -> Result<ExecuteResult, DatabaseError> {
    let mut rows = Vec::new();
    let mut cursor = table.start()?;
    while !cursor.end_of_table() {
        rows.push(cursor.row()?);
        cursor.advance()?;
    }
    Ok(ExecuteResult::Success(rows))
}
