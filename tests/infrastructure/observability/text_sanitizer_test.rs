use babelvox::infrastructure::observability::sanitize_text;

#[test]
fn given_short_text_when_sanitizing_then_returns_trimmed_text() {
    assert_eq!(sanitize_text("  hola mundo \n"), "hola mundo");
}

#[test]
fn given_blank_text_when_sanitizing_then_marks_empty() {
    assert_eq!(sanitize_text(" \t "), "[EMPTY]");
}

#[test]
fn given_long_text_when_sanitizing_then_truncates_with_total_length() {
    let text = "é".repeat(150);
    let result = sanitize_text(&text);

    assert!(result.starts_with(&"é".repeat(100)));
    assert!(result.ends_with("... (150 chars total)"));
}
