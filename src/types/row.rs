use std::fmt;

// Row layout: fixed offsets, fixed total width. Strings occupy their
// whole field regardless of actual length; one byte of each field is
// reserved for a NUL terminator.
pub const COLUMN_USERNAME_SIZE: usize = 32;
pub const COLUMN_EMAIL_SIZE: usize = 255;

pub const ID_SIZE: usize = size_of::<u32>();
pub const USERNAME_SIZE: usize = COLUMN_USERNAME_SIZE + 1;
pub const EMAIL_SIZE: usize = COLUMN_EMAIL_SIZE + 1;
pub const ID_OFFSET: usize = 0;
pub const USERNAME_OFFSET: usize = ID_OFFSET + ID_SIZE;
pub const EMAIL_OFFSET: usize = USERNAME_OFFSET + USERNAME_SIZE;
pub const ROW_SIZE: usize = ID_SIZE + USERNAME_SIZE + EMAIL_SIZE;

/// One record of the single table: `(id, username, email)`.
/// `id` is the index key; uniqueness is enforced by the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: u32,
    pub username: String,
    pub email: String,
}

impl Row {
    pub fn new(id: u32, username: &str, email: &str) -> Self {
        Self {
            id,
            username: username.to_string(),
            email: email.to_string(),
        }
    }

    /// Write the row into `destination`, which must be at least
    /// `ROW_SIZE` bytes. Every invocation fills exactly `ROW_SIZE` bytes;
    /// unused string bytes are zeroed.
    pub fn serialize(&self, destination: &mut [u8]) {
        destination[ID_OFFSET..ID_OFFSET + ID_SIZE].copy_from_slice(&self.id.to_le_bytes());

        let username_field = &mut destination[USERNAME_OFFSET..USERNAME_OFFSET + USERNAME_SIZE];
        username_field.fill(0);
        username_field[..self.username.len()].copy_from_slice(self.username.as_bytes());

        let email_field = &mut destination[EMAIL_OFFSET..EMAIL_OFFSET + EMAIL_SIZE];
        email_field.fill(0);
        email_field[..self.email.len()].copy_from_slice(self.email.as_bytes());
    }

    /// Inverse of `serialize`. Caller contract: `source` holds at least
    /// `ROW_SIZE` bytes produced by `serialize`.
    pub fn deserialize(source: &[u8]) -> Self {
        let id = u32::from_le_bytes([
            source[ID_OFFSET],
            source[ID_OFFSET + 1],
            source[ID_OFFSET + 2],
            source[ID_OFFSET + 3],
        ]);
        let username = read_fixed_string(&source[USERNAME_OFFSET..USERNAME_OFFSET + USERNAME_SIZE]);
        let email = read_fixed_string(&source[EMAIL_OFFSET..EMAIL_OFFSET + EMAIL_SIZE]);
        Self {
            id,
            username,
            email,
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.id, self.username, self.email)
    }
}

fn read_fixed_string(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}
