//! Tokenizer round-trip property (spec.md §8): re-concatenating a token
//! stream's own text with single-space separators must lex back to the same
//! sequence of token kinds.

use proptest::prelude::*;

use crate::{Keyword, Lexer, TokenKind};

fn arb_atom() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("class".to_string()),
        Just("static".to_string()),
        Just("field".to_string()),
        Just("let".to_string()),
        Just("if".to_string()),
        Just("while".to_string()),
        Just("return".to_string()),
        Just("true".to_string()),
        Just("false".to_string()),
        "[a-zA-Z_][a-zA-Z0-9_]{0,8}".prop_filter("not a keyword", |s| Keyword::from_str(s).is_none()),
        (0u16..=32767u16).prop_map(|n| n.to_string()),
        Just("{".to_string()),
        Just("}".to_string()),
        Just("(".to_string()),
        Just(")".to_string()),
        Just(";".to_string()),
        Just("+".to_string()),
        Just("=".to_string()),
    ]
}

fn tokenize_kinds(src: &str) -> Vec<TokenKind> {
    Lexer::new(src)
        .map(|t| t.expect("fixture tokens are always well-formed").kind)
        .collect()
}

proptest! {
    #[test]
    fn re_joined_token_text_lexes_to_the_same_kinds(atoms in prop::collection::vec(arb_atom(), 1..12)) {
        let source = atoms.join(" ");
        let kinds = tokenize_kinds(&source);

        let rejoined = kinds
            .iter()
            .map(|k| render(k))
            .collect::<Vec<_>>()
            .join(" ");

        prop_assert_eq!(tokenize_kinds(&rejoined), kinds);
    }
}

fn render(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Keyword(k) => k.as_str().to_string(),
        TokenKind::Symbol(c) => c.to_string(),
        TokenKind::Identifier(s) => s.clone(),
        TokenKind::IntConst(n) => n.to_string(),
        TokenKind::StringConst(s) => format!("\"{s}\""),
    }
}
