use lumbung::types::row::{
    COLUMN_EMAIL_SIZE, COLUMN_USERNAME_SIZE, EMAIL_OFFSET, ID_SIZE, ROW_SIZE, Row,
    USERNAME_OFFSET, USERNAME_SIZE,
};

#[test]
fn test_row_layout_constants() {
    assert_eq!(ID_SIZE, 4);
    assert_eq!(USERNAME_SIZE, COLUMN_USERNAME_SIZE + 1);
    assert_eq!(USERNAME_OFFSET, 4);
    assert_eq!(EMAIL_OFFSET, 37);
    assert_eq!(ROW_SIZE, 293);
}

#[test]
fn test_round_trip() {
    let row = Row::new(42, "alice", "alice@example.com");
    let mut buffer = vec![0u8; ROW_SIZE];
    row.serialize(&mut buffer);
    let decoded = Row::deserialize(&buffer);
    assert_eq!(decoded, row);
}

#[test]
fn test_round_trip_max_length_strings() {
    let username = "u".repeat(COLUMN_USERNAME_SIZE);
    let email = "e".repeat(COLUMN_EMAIL_SIZE);
    let row = Row::new(u32::MAX, &username, &email);
    let mut buffer = vec![0u8; ROW_SIZE];
    row.serialize(&mut buffer);
    let decoded = Row::deserialize(&buffer);
    assert_eq!(decoded.id, u32::MAX);
    assert_eq!(decoded.username, username);
    assert_eq!(decoded.email, email);
}

#[test]
fn test_round_trip_empty_strings() {
    let row = Row::new(0, "", "");
    let mut buffer = vec![0xffu8; ROW_SIZE];
    row.serialize(&mut buffer);
    let decoded = Row::deserialize(&buffer);
    assert_eq!(decoded, row);
}

#[test]
fn test_serialize_fills_entire_width() {
    // Stale bytes from a previous occupant of the buffer must not leak
    // into the decoded strings.
    let long = Row::new(1, "a".repeat(COLUMN_USERNAME_SIZE).as_str(), "long@example.com");
    let mut buffer = vec![0u8; ROW_SIZE];
    long.serialize(&mut buffer);

    let short = Row::new(1, "b", "s@x.com");
    short.serialize(&mut buffer);
    let decoded = Row::deserialize(&buffer);
    assert_eq!(decoded.username, "b");
    assert_eq!(decoded.email, "s@x.com");
}

#[test]
fn test_display_format() {
    let row = Row::new(7, "carl", "carl@x.com");
    assert_eq!(format!("{}", row), "(7, carl, carl@x.com)");
}
