use thiserror::Error;

use crate::types::row::{COLUMN_EMAIL_SIZE, COLUMN_USERNAME_SIZE, Row};

/// A parsed request, the seam between the shell and the executor.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Insert(Row),
    Select,
}

/// Recoverable parse-layer failures. Each is reported to the user and
/// the input loop continues; nothing reaches the tree.
#[derive(Error, Debug, PartialEq)]
pub enum PrepareError {
    #[error("syntax error, could not parse statement")]
    Syntax,

    #[error("id must be positive")]
    NegativeId,

    #[error("string is too long")]
    StringTooLong,

    #[error("unrecognized keyword at start of '{0}'")]
    Unrecognized(String),
}

/// Turn one line of input into a structured statement.
/// `insert <id> <username> <email>` with all fields mandatory, or a bare
/// `select`.
pub fn prepare_statement(input: &str) -> Result<Statement, PrepareError> {
    let input = input.trim();
    let mut tokens = input.split_whitespace();

    match tokens.next() {
        Some("insert") => prepare_insert(tokens),
        Some("select") => Ok(Statement::Select),
        _ => Err(PrepareError::Unrecognized(input.to_string())),
    }
}

fn prepare_insert<'a, I>(mut tokens: I) -> Result<Statement, PrepareError>
where
    I: Iterator<Item = &'a str>,
{
    let (Some(id_token), Some(username), Some(email)) =
        (tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(PrepareError::Syntax);
    };

    let id: i64 = id_token.parse().map_err(|_| PrepareError::Syntax)?;
    if id < 0 {
        return Err(PrepareError::NegativeId);
    }
    let id = u32::try_from(id).map_err(|_| PrepareError::Syntax)?;

    if username.len() > COLUMN_USERNAME_SIZE || email.len() > COLUMN_EMAIL_SIZE {
        return Err(PrepareError::StringTooLong);
    }

    Ok(Statement::Insert(Row::new(id, username, email)))
}
