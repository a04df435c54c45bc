use super::{grammar::GrammarError, Grammar};

pub const TERMINALS: [&str; 14] = [
    "BeginSym",
    "EndSym",
    "ReadSym",
    "WriteSym",
    "Id",
    "IntLiteral",
    "LParen",
    "RParen",
    "SemiColon",
    "Comma",
    "AssignOp",
    "PlusOp",
    "MinusOp",
    "EofSym",
];

pub const NON_TERMINALS: [&str; 13] = [
    "<system goal>",
    "<program>",
    "<statement list>",
    "<statement>",
    "<statement tail>",
    "<id list>",
    "<id tail>",
    "<expr list>",
    "<expr tail>",
    "<expression>",
    "<primary tail>",
    "<primary>",
    "<add op>",
];

const PRODUCTIONS: [(&str, &[&str]); 22] = [
    ("<system goal>", &["<program>", "EofSym"]),
    ("<program>", &["BeginSym", "<statement list>", "EndSym"]),
    ("<statement list>", &["<statement>", "<statement tail>"]),
    ("<statement tail>", &["<statement>", "<statement tail>"]),
    ("<statement tail>", &[]),
    ("<statement>", &["Id", "AssignOp", "<expression>", "SemiColon"]),
    (
        "<statement>",
        &["ReadSym", "LParen", "<id list>", "RParen", "SemiColon"],
    ),
    (
        "<statement>",
        &["WriteSym", "LParen", "<expr list>", "RParen", "SemiColon"],
    ),
    ("<id list>", &["Id", "<id tail>"]),
    ("<id tail>", &["Comma", "Id", "<id tail>"]),
    ("<id tail>", &[]),
    ("<expr list>", &["<expression>", "<expr tail>"]),
    ("<expr tail>", &["Comma", "<expression>", "<expr tail>"]),
    ("<expr tail>", &[]),
    ("<expression>", &["<primary>", "<primary tail>"]),
    ("<primary tail>", &["<add op>", "<primary>", "<primary tail>"]),
    ("<primary tail>", &[]),
    ("<primary>", &["LParen", "<expression>", "RParen"]),
    ("<primary>", &["Id"]),
    ("<primary>", &["IntLiteral"]),
    ("<add op>", &["PlusOp"]),
    ("<add op>", &["MinusOp"]),
];

/// The LL(1) grammar of the Micro language. Terminal names match
/// [`crate::scanner::TokenKind::name`].
pub fn micro_grammar() -> Result<Grammar, GrammarError> {
    let productions: Vec<(&str, Vec<&str>)> = PRODUCTIONS
        .iter()
        .map(|(left, right)| (*left, right.to_vec()))
        .collect();
    Grammar::from_parts(&TERMINALS, &NON_TERMINALS, &productions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::GrammarAnalysis;
    use crate::scanner::TokenKind;

    #[test]
    fn builds() {
        let g = micro_grammar().unwrap();
        assert_eq!(g.productions.len(), 22);
        assert_eq!(g.start_symbol, g.get_symbol_index("<system goal>"));
    }

    #[test]
    fn token_kinds_are_terminals() {
        let g = micro_grammar().unwrap();
        for kind in [
            TokenKind::Identifier,
            TokenKind::IntegerLiteral,
            TokenKind::PlusOperator,
            TokenKind::Semicolon,
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::Comma,
            TokenKind::BeginKeyword,
            TokenKind::EndKeyword,
            TokenKind::ReadKeyword,
            TokenKind::WriteKeyword,
            TokenKind::EndOfFile,
        ] {
            let idx = g.get_symbol_index(kind.name()).unwrap();
            assert!(g.is_terminal(idx), "{}", kind);
        }
    }

    #[test]
    fn nullable_and_first() {
        let g = micro_grammar().unwrap();
        let a = GrammarAnalysis::new(&g);
        let first = |name: &str| a.first_names(name).unwrap();

        assert_eq!(
            a.nullable_names(),
            vec!["<statement tail>", "<id tail>", "<expr tail>", "<primary tail>"]
        );
        assert_eq!(first("<system goal>"), vec!["BeginSym"]);
        assert_eq!(first("<statement list>"), vec!["Id", "ReadSym", "WriteSym"]);
        assert_eq!(
            first("<statement tail>"),
            vec!["Id", "ReadSym", "WriteSym", "ε"]
        );
        assert_eq!(first("<expression>"), vec!["Id", "IntLiteral", "LParen"]);
        assert_eq!(first("<expr list>"), vec!["Id", "IntLiteral", "LParen"]);
        assert_eq!(first("<primary tail>"), vec!["MinusOp", "PlusOp", "ε"]);
        assert_eq!(first("<id tail>"), vec!["Comma", "ε"]);
    }
}
