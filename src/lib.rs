extern crate wasm_bindgen;

use wasm_bindgen::prelude::*;

pub mod grammar;
pub mod scanner;
pub use grammar::{Grammar, GrammarAnalysis};
pub use scanner::{tokenize, tokenize_lossy, ScanError, Scanner, Token, TokenKind};

fn error_json(e: impl std::fmt::Display) -> String {
    serde_json::json!({ "error": e.to_string() }).to_string()
}

#[wasm_bindgen]
pub fn tokenize_to_json(src: &str) -> String {
    match tokenize(src) {
        Ok(tokens) => serde_json::to_string(&tokens).unwrap_or_else(error_json),
        Err(e) => error_json(e),
    }
}

#[wasm_bindgen]
pub fn nullable_first_to_json(grammar: &str) -> String {
    match crate::Grammar::parse(grammar) {
        Ok(g) => GrammarAnalysis::new(&g)
            .to_non_terminal_output_vec()
            .to_json()
            .unwrap_or_else(error_json),
        Err(e) => error_json(e),
    }
}

#[cfg(test)]
mod json_tests {
    #[test]
    fn tokens() {
        assert_eq!(
            crate::tokenize_to_json("READ(a);"),
            concat!(
                r#"[{"kind":"ReadKeyword","lexeme":"READ"},"#,
                r#"{"kind":"LeftParen","lexeme":"("},"#,
                r#"{"kind":"Identifier","lexeme":"a"},"#,
                r#"{"kind":"RightParen","lexeme":")"},"#,
                r#"{"kind":"Semicolon","lexeme":";"},"#,
                r#"{"kind":"EndOfFile","lexeme":""}]"#
            )
        );
    }

    #[test]
    fn token_error() {
        assert_eq!(
            crate::tokenize_to_json("a := 1"),
            r#"{"error":"unexpected ':' at offset 2 (state InWhitespace)"}"#
        );
    }

    #[test]
    fn nullable_first() {
        assert_eq!(
            crate::nullable_first_to_json("S -> A b\nA -> ε"),
            r#"{"data":[{"name":"S","nullable":false,"first":["b"]},{"name":"A","nullable":true,"first":["ε"]}]}"#
        );
    }

    #[test]
    fn grammar_error() {
        assert_eq!(
            crate::nullable_first_to_json("S -> a -> b"),
            r#"{"error":"Line 1: too many \"->\""}"#
        );
    }
}
