use babelvox::domain::TranscriptionResult;

#[test]
fn given_whitespace_transcript_when_checked_then_is_empty() {
    assert!(TranscriptionResult::new(" \n\t ").is_empty());
    assert!(TranscriptionResult::new("").is_empty());
}

#[test]
fn given_spoken_text_when_checked_then_is_not_empty() {
    assert!(!TranscriptionResult::new("  hola ").is_empty());
}
