use datefield::{to_display, to_storage};

#[test]
fn test_to_storage_convenience() {
    assert_eq!(to_storage("15/06/2023", false).as_deref(), Some("2023-06-15"));
    assert_eq!(
        to_storage("15/06/2023 08:00:00", true).as_deref(),
        Some("2023-06-15 08:00:00")
    );
}

#[test]
fn test_to_display_convenience() {
    assert_eq!(to_display("2023-06-15", false).as_deref(), Some("15/06/2023"));
    assert_eq!(
        to_display("2023-06-15 08:00:00", true).as_deref(),
        Some("15/06/2023 08:00:00")
    );
}

#[test]
fn test_convenience_invalid_input() {
    assert_eq!(to_storage("", false), None);
    assert_eq!(to_display("15/06/2023", false), None);
}
