pub(crate) use super::*;

#[test]
fn test_whitespace_tokenizer_basic() {
    let tokenizer = WhitespaceTokenizer::new();
    let tokens = tokenizer
        .tokenize("line1\nline2\ttab")
        .expect("tokenize should succeed");
    assert_eq!(tokens, vec!["line1", "line2", "tab"]);
}

#[test]
fn test_whitespace_tokenizer_empty() {
    let tokenizer = WhitespaceTokenizer::new();
    let tokens = tokenizer.tokenize("   ").expect("tokenize should succeed");
    assert!(tokens.is_empty());
}

#[test]
fn test_term_tokenizer_drops_single_chars() {
    let tokenizer = TermTokenizer::new();
    let tokens = tokenizer
        .tokenize("I read a book")
        .expect("tokenize should succeed");
    assert_eq!(tokens, vec!["read", "book"]);
}

#[test]
fn test_term_tokenizer_splits_punctuation() {
    let tokenizer = TermTokenizer::new();
    let tokens = tokenizer
        .tokenize("don't stop-believing; (really)!")
        .expect("tokenize should succeed");
    assert_eq!(tokens, vec!["don", "stop", "believing", "really"]);
}

#[test]
fn test_term_tokenizer_keeps_underscore_and_digits() {
    let tokenizer = TermTokenizer::new();
    let tokens = tokenizer
        .tokenize("snake_case 1984 x2")
        .expect("tokenize should succeed");
    assert_eq!(tokens, vec!["snake_case", "1984", "x2"]);
}

#[test]
fn test_term_tokenizer_unicode() {
    let tokenizer = TermTokenizer::new();
    let tokens = tokenizer
        .tokenize("café Ñandú über")
        .expect("tokenize should succeed");
    assert_eq!(tokens, vec!["café", "Ñandú", "über"]);
}

#[test]
fn test_term_tokenizer_min_len() {
    let tokenizer = TermTokenizer::new().with_min_len(1);
    let tokens = tokenizer.tokenize("a b cd").expect("tokenize should succeed");
    assert_eq!(tokens, vec!["a", "b", "cd"]);

    let clamped = TermTokenizer::new().with_min_len(0);
    let tokens = clamped.tokenize("a").expect("tokenize should succeed");
    assert_eq!(tokens, vec!["a"]);
}

#[test]
fn test_term_tokenizer_empty_input() {
    let tokenizer = TermTokenizer::new();
    assert!(tokenizer.tokenize("").expect("tokenize should succeed").is_empty());
    assert!(tokenizer
        .tokenize("?! -- ...")
        .expect("tokenize should succeed")
        .is_empty());
}
