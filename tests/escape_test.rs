use feijoa::escape::escape_compiled_string;

#[test]
fn test_escapes_quotes_backslashes_and_newlines() {
    assert_eq!(escape_compiled_string("a\"b\\c\nd"), "a\\\"b\\\\c\\nd");
}

#[test]
fn test_escapes_carriage_return_and_tab() {
    assert_eq!(escape_compiled_string("a\rb\tc"), "a\\rb\\tc");
}

#[test]
fn test_leaves_other_characters_untouched() {
    assert_eq!(escape_compiled_string("plain text 123 {}%"), "plain text 123 {}%");
    assert_eq!(escape_compiled_string(""), "");
}

#[test]
fn test_introduced_backslashes_not_reescaped() {
    // A lone newline becomes exactly backslash-n, not backslash-backslash-n.
    assert_eq!(escape_compiled_string("\n"), "\\n");
    assert_eq!(escape_compiled_string("\\n"), "\\\\n");
}

#[test]
fn test_not_idempotent() {
    let once = escape_compiled_string("say \"hi\"\n");
    assert_eq!(once, "say \\\"hi\\\"\\n");
    // Single application is the contract; a second pass escapes the escapes.
    assert_ne!(escape_compiled_string(&once), once);
}
