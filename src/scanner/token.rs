use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    Identifier,
    IntegerLiteral,
    PlusOperator,
    Semicolon,
    LeftParen,
    RightParen,
    Comma,
    BeginKeyword,
    EndKeyword,
    ReadKeyword,
    WriteKeyword,
    EndOfFile,
    Error,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "Id",
            TokenKind::IntegerLiteral => "IntLiteral",
            TokenKind::PlusOperator => "PlusOp",
            TokenKind::Semicolon => "SemiColon",
            TokenKind::LeftParen => "LParen",
            TokenKind::RightParen => "RParen",
            TokenKind::Comma => "Comma",
            TokenKind::BeginKeyword => "BeginSym",
            TokenKind::EndKeyword => "EndSym",
            TokenKind::ReadKeyword => "ReadSym",
            TokenKind::WriteKeyword => "WriteSym",
            TokenKind::EndOfFile => "EofSym",
            TokenKind::Error => "Error",
        }
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::BeginKeyword
                | TokenKind::EndKeyword
                | TokenKind::ReadKeyword
                | TokenKind::WriteKeyword
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }

    pub fn end_of_file() -> Self {
        Self::new(TokenKind::EndOfFile, String::new())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lexeme.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}({})", self.kind, self.lexeme)
        }
    }
}

const KEYWORDS: [(&str, TokenKind); 4] = [
    ("BEGIN", TokenKind::BeginKeyword),
    ("END", TokenKind::EndKeyword),
    ("READ", TokenKind::ReadKeyword),
    ("WRITE", TokenKind::WriteKeyword),
];

/// Reclassifies an identifier as a reserved word. Case-sensitive; any kind
/// other than `Identifier` passes through untouched.
pub fn resolve_keyword(kind: TokenKind, lexeme: &str) -> TokenKind {
    if kind != TokenKind::Identifier {
        return kind;
    }
    KEYWORDS
        .iter()
        .find(|(word, _)| *word == lexeme)
        .map(|(_, keyword)| *keyword)
        .unwrap_or(kind)
}
