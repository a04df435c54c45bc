//! Transition table of the scanner automaton.
//!
//! The automaton is driven one lookahead class at a time. Each step yields an
//! [`Action`] telling the driver what to do with the lookahead byte and the
//! state to continue in. Every `(state, class)` pair is mapped; pairs with no
//! meaningful transition route to [`ScannerState::Errored`].
//!
//! Punctuation seen directly from `Start` halts in one step with the byte
//! appended. Punctuation seen after a whitespace run first moves into the
//! matching `Commit*` state, which then halts on the next step without
//! touching its lookahead.

use serde::Serialize;

use super::{char_class::CharClass, token::TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScannerState {
    Start,
    InIdentifier,
    InWhitespace,
    InNumber,
    CommitPlus,
    CommitSemicolon,
    CommitLParen,
    CommitRParen,
    CommitComma,
    Halted,
    Errored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Consume the lookahead and append it to the lexeme.
    MoveAppend,
    /// Consume the lookahead and drop it.
    MoveNoAppend,
    /// Consume the lookahead, append it, and emit a token.
    HaltAppend,
    /// Emit a token, leaving the lookahead for the next scan.
    HaltReuse,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub action: Action,
    pub next: ScannerState,
}

impl Transition {
    const fn new(action: Action, next: ScannerState) -> Self {
        Self { action, next }
    }

    const fn halt_append() -> Self {
        Self::new(Action::HaltAppend, ScannerState::Halted)
    }

    const fn halt_reuse() -> Self {
        Self::new(Action::HaltReuse, ScannerState::Halted)
    }

    const fn error() -> Self {
        Self::new(Action::Error, ScannerState::Errored)
    }
}

fn commit_state(class: CharClass) -> Option<ScannerState> {
    match class {
        CharClass::Plus => Some(ScannerState::CommitPlus),
        CharClass::Semicolon => Some(ScannerState::CommitSemicolon),
        CharClass::LParen => Some(ScannerState::CommitLParen),
        CharClass::RParen => Some(ScannerState::CommitRParen),
        CharClass::Comma => Some(ScannerState::CommitComma),
        _ => None,
    }
}

fn punctuation_kind(class: CharClass) -> Option<TokenKind> {
    match class {
        CharClass::Plus => Some(TokenKind::PlusOperator),
        CharClass::Semicolon => Some(TokenKind::Semicolon),
        CharClass::LParen => Some(TokenKind::LeftParen),
        CharClass::RParen => Some(TokenKind::RightParen),
        CharClass::Comma => Some(TokenKind::Comma),
        _ => None,
    }
}

pub fn transition(state: ScannerState, class: CharClass) -> Transition {
    use Action::*;
    use ScannerState::*;

    match state {
        Start => match class {
            CharClass::Letter => Transition::new(MoveAppend, InIdentifier),
            CharClass::Digit => Transition::new(MoveAppend, InNumber),
            CharClass::Whitespace => Transition::new(MoveNoAppend, InWhitespace),
            c if c.is_punctuation() => Transition::halt_append(),
            CharClass::Eof => Transition::halt_reuse(),
            _ => Transition::error(),
        },
        InIdentifier => match class {
            CharClass::Letter | CharClass::Digit | CharClass::Underscore => {
                Transition::new(MoveAppend, InIdentifier)
            }
            _ => Transition::halt_reuse(),
        },
        InNumber => match class {
            CharClass::Digit => Transition::new(MoveAppend, InNumber),
            _ => Transition::halt_reuse(),
        },
        InWhitespace => match class {
            CharClass::Whitespace => Transition::new(MoveNoAppend, InWhitespace),
            CharClass::Letter => Transition::new(MoveAppend, InIdentifier),
            CharClass::Digit => Transition::new(MoveAppend, InNumber),
            CharClass::Eof => Transition::halt_reuse(),
            c => match commit_state(c) {
                Some(commit) => Transition::new(MoveAppend, commit),
                None => Transition::error(),
            },
        },
        CommitPlus | CommitSemicolon | CommitLParen | CommitRParen | CommitComma => {
            Transition::halt_reuse()
        }
        Halted | Errored => Transition::error(),
    }
}

/// Token kind assigned when `state` halts on a lookahead of `class`.
///
/// `None` means the pair never halts; the driver reports it as a
/// classification gap.
pub fn halt_kind(state: ScannerState, class: CharClass) -> Option<TokenKind> {
    use ScannerState::*;

    match state {
        Start => match class {
            CharClass::Eof => Some(TokenKind::EndOfFile),
            c => punctuation_kind(c),
        },
        InWhitespace => match class {
            CharClass::Eof => Some(TokenKind::EndOfFile),
            _ => None,
        },
        InIdentifier => Some(TokenKind::Identifier),
        InNumber => Some(TokenKind::IntegerLiteral),
        CommitPlus => Some(TokenKind::PlusOperator),
        CommitSemicolon => Some(TokenKind::Semicolon),
        CommitLParen => Some(TokenKind::LeftParen),
        CommitRParen => Some(TokenKind::RightParen),
        CommitComma => Some(TokenKind::Comma),
        Halted | Errored => None,
    }
}
