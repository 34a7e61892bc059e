pub mod insert;
pub mod select;
pub mod statement;

use crate::{
    storage::table::Table,
    types::{error::DatabaseError, row::Row},
};

/// Typed outcome of executing a statement. The recoverable conditions
/// (`DuplicateKey`, `TableFull`) leave the page untouched; the session
/// continues.
#[derive(Debug, PartialEq)]
pub enum ExecuteResult {
    /// Statement ran to completion. Carries the selected rows, in
    /// ascending key order; empty for inserts.
    Success(Vec<Row>),
    DuplicateKey,
    TableFull,
}

pub fn execute_statement(
    statement: &statement::Statement,
    table: &mut Table,
) -> Result<ExecuteResult, DatabaseError> {
    match statement {
        statement::Statement::Insert(row) => insert::execute_insert(table, row),
        statement::Statement::Select => select::execute_select(table),
    }
}
