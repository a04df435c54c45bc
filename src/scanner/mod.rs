pub mod char_class;
pub mod dfa;
pub mod token;

use log::{debug, trace, warn};
use thiserror::Error;

use char_class::classify_lookahead;
use dfa::{halt_kind, transition, Action, ScannerState};
pub use token::{resolve_keyword, Token, TokenKind};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("unexpected {} at offset {offset} (state {state:?})", describe(.found))]
    Lexical {
        state: ScannerState,
        found: Option<u8>,
        offset: usize,
    },
    #[error("state {state:?} halted at offset {offset} without a token kind")]
    ClassificationGap { state: ScannerState, offset: usize },
}

impl ScanError {
    pub fn offset(&self) -> usize {
        match self {
            ScanError::Lexical { offset, .. } => *offset,
            ScanError::ClassificationGap { offset, .. } => *offset,
        }
    }
}

fn describe(found: &Option<u8>) -> String {
    match found {
        Some(b) if b.is_ascii_graphic() => format!("'{}'", *b as char),
        Some(b) => format!("byte 0x{:02x}", b),
        None => "end of input".to_string(),
    }
}

/// Cursor over an immutable source buffer.
///
/// Each call to [`Scanner::scan`] runs the automaton from `Start` until it
/// halts or errors. Consumed bytes are always a prefix of what remained.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    src: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a [u8]) -> Self {
        Self { src, pos: 0 }
    }

    pub fn offset(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    fn consume(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    /// Steps past one byte without scanning it. Used by callers that resume
    /// after a [`ScanError`].
    pub fn skip_byte(&mut self) -> Option<u8> {
        self.consume()
    }

    pub fn scan(&mut self) -> Result<Token, ScanError> {
        let mut state = ScannerState::Start;
        let mut lexeme = String::new();

        loop {
            let lookahead = self.peek();
            let class = classify_lookahead(lookahead);
            let step = transition(state, class);
            trace!(
                "{:?} --{:?}/{:?}--> {:?} at {} '{}'",
                state,
                class,
                step.action,
                step.next,
                self.pos,
                lexeme
            );

            match step.action {
                Action::MoveAppend => {
                    if let Some(b) = self.consume() {
                        lexeme.push(char::from(b));
                    }
                }
                Action::MoveNoAppend => {
                    self.consume();
                }
                Action::HaltAppend => {
                    if let Some(b) = self.consume() {
                        lexeme.push(char::from(b));
                    }
                    return self.finish(state, class, lexeme);
                }
                Action::HaltReuse => return self.finish(state, class, lexeme),
                Action::Error => {
                    return Err(ScanError::Lexical {
                        state,
                        found: lookahead,
                        offset: self.pos,
                    })
                }
            }

            state = step.next;
        }
    }

    fn finish(
        &self,
        state: ScannerState,
        class: char_class::CharClass,
        lexeme: String,
    ) -> Result<Token, ScanError> {
        let kind = halt_kind(state, class).ok_or(ScanError::ClassificationGap {
            state,
            offset: self.pos,
        })?;
        let kind = resolve_keyword(kind, &lexeme);
        debug!("token {} '{}' ending at {}", kind, lexeme, self.pos);
        Ok(Token::new(kind, lexeme))
    }

    /// Iterates scan results up to and including the first `EndOfFile` token
    /// or the first error.
    pub fn tokens(&mut self) -> Tokens<'_, 'a> {
        Tokens {
            scanner: self,
            done: false,
        }
    }
}

pub struct Tokens<'s, 'a> {
    scanner: &'s mut Scanner<'a>,
    done: bool,
}

impl Iterator for Tokens<'_, '_> {
    type Item = Result<Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.scanner.scan();
        self.done = match &result {
            Ok(token) => token.kind == TokenKind::EndOfFile,
            Err(_) => true,
        };
        Some(result)
    }
}

/// Scans the whole input, stopping at the first error. The final token is
/// always `EndOfFile`.
pub fn tokenize(src: &str) -> Result<Vec<Token>, ScanError> {
    Scanner::new(src.as_bytes()).tokens().collect()
}

/// Scans the whole input, skipping the character at every error and
/// recording it as an `Error` token.
pub fn tokenize_lossy(src: &str) -> (Vec<Token>, Vec<ScanError>) {
    let mut scanner = Scanner::new(src.as_bytes());
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    loop {
        match scanner.scan() {
            Ok(token) => {
                let eof = token.kind == TokenKind::EndOfFile;
                tokens.push(token);
                if eof {
                    break;
                }
            }
            Err(e) => {
                warn!("{}, skipping", e);
                errors.push(e);
                let start = scanner.offset();
                let Some(ch) = src.get(start..).and_then(|rest| rest.chars().next()) else {
                    break;
                };
                let end = start + ch.len_utf8();
                while scanner.offset() < end {
                    scanner.skip_byte();
                }
                tokens.push(Token::new(TokenKind::Error, &src[start..end]));
            }
        }
    }

    (tokens, errors)
}
