use std::collections::HashMap;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    #[error("symbol \"{0}\" is declared more than once")]
    DuplicateSymbol(String),
    #[error("production {production}: symbol \"{name}\" is not declared")]
    UndeclaredSymbol { production: usize, name: String },
    #[error("production {production}: terminal \"{name}\" on the left side")]
    TerminalOnLeft { production: usize, name: String },
    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
    NonTerminal(String),
    Terminal(String),
}

impl Symbol {
    pub fn name(&self) -> &str {
        match self {
            Symbol::NonTerminal(name) | Symbol::Terminal(name) => name.as_str(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    pub left: usize,
    pub right: Vec<usize>,
}

/// A validated grammar. Symbols are addressed by their index in `symbols`.
#[derive(Debug, Clone)]
pub struct Grammar {
    pub symbols: Vec<Symbol>,
    pub symbol_table: HashMap<String, usize>,
    pub productions: Vec<Production>,
    pub start_symbol: Option<usize>,
}

impl Grammar {
    /// Builds a grammar from declared terminals, nonterminals and
    /// `(left, right)` productions, rejecting any reference outside the
    /// declared vocabulary.
    pub fn from_parts<S: AsRef<str>>(
        terminals: &[S],
        non_terminals: &[S],
        productions: &[(S, Vec<S>)],
    ) -> Result<Self, GrammarError> {
        let mut g = Self {
            symbols: Vec::new(),
            symbol_table: HashMap::new(),
            productions: Vec::new(),
            start_symbol: None,
        };

        for name in non_terminals {
            g.declare(Symbol::NonTerminal(name.as_ref().to_string()))?;
        }
        for name in terminals {
            g.declare(Symbol::Terminal(name.as_ref().to_string()))?;
        }

        for (i, (left, right)) in productions.iter().enumerate() {
            let lookup = |name: &str| {
                g.get_symbol_index(name)
                    .ok_or_else(|| GrammarError::UndeclaredSymbol {
                        production: i + 1,
                        name: name.to_string(),
                    })
            };

            let left_idx = lookup(left.as_ref())?;
            if g.symbols[left_idx].is_terminal() {
                return Err(GrammarError::TerminalOnLeft {
                    production: i + 1,
                    name: left.as_ref().to_string(),
                });
            }
            let right = right
                .iter()
                .map(|s| lookup(s.as_ref()))
                .collect::<Result<Vec<_>, _>>()?;

            g.productions.push(Production {
                left: left_idx,
                right,
            });
        }

        g.start_symbol = g.productions.first().map(|p| p.left);
        Ok(g)
    }

    fn declare(&mut self, symbol: Symbol) -> Result<usize, GrammarError> {
        if self.symbol_table.contains_key(symbol.name()) {
            return Err(GrammarError::DuplicateSymbol(symbol.name().to_string()));
        }
        let idx = self.symbols.len();
        self.symbol_table.insert(symbol.name().to_string(), idx);
        self.symbols.push(symbol);
        Ok(idx)
    }

    pub fn terminal_iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.symbols.len()).filter(|&i| self.symbols[i].is_terminal())
    }

    pub fn non_terminal_iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.symbols.len()).filter(|&i| !self.symbols[i].is_terminal())
    }

    pub fn productions_of(&self, left: usize) -> impl Iterator<Item = &Production> {
        self.productions.iter().filter(move |p| p.left == left)
    }

    pub fn get_symbol_index(&self, name: &str) -> Option<usize> {
        self.symbol_table.get(name).cloned()
    }

    pub fn get_symbol_name(&self, index: usize) -> &str {
        self.symbols[index].name()
    }

    pub fn is_terminal(&self, index: usize) -> bool {
        self.symbols[index].is_terminal()
    }

    /// Resolves a whitespace-separated list of symbol names.
    pub fn symbol_indices(&self, names: &str) -> Option<Vec<usize>> {
        names
            .split_whitespace()
            .map(|name| self.get_symbol_index(name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_vocabulary() {
        let g = Grammar::from_parts(
            &["a", "b"],
            &["S", "A"],
            &[("S", vec!["A", "b"]), ("A", vec!["a"]), ("A", vec![])],
        )
        .unwrap();

        let s = g.get_symbol_index("S").unwrap();
        let a = g.get_symbol_index("A").unwrap();
        let b = g.get_symbol_index("b").unwrap();
        assert_eq!(g.start_symbol, Some(s));
        assert_eq!(g.terminal_iter().count(), 2);
        assert_eq!(g.non_terminal_iter().count(), 2);
        assert_eq!(g.productions[0].right, vec![a, b]);
        assert_eq!(g.productions_of(a).count(), 2);
        assert!(g.productions[2].right.is_empty());
        assert_eq!(g.symbol_indices("A b"), Some(vec![a, b]));
        assert_eq!(g.symbol_indices("A c"), None);
    }

    #[test]
    fn rejects_undeclared_right() {
        let err = Grammar::from_parts(&["a"], &["S"], &[("S", vec!["a", "T"])]).unwrap_err();
        assert_eq!(
            err,
            GrammarError::UndeclaredSymbol {
                production: 1,
                name: "T".to_string()
            }
        );
    }

    #[test]
    fn rejects_undeclared_left() {
        let err = Grammar::from_parts(&["a"], &["S"], &[("S", vec![]), ("T", vec!["a"])])
            .unwrap_err();
        assert!(matches!(err, GrammarError::UndeclaredSymbol { production: 2, .. }));
    }

    #[test]
    fn rejects_terminal_on_left() {
        let err = Grammar::from_parts(&["a"], &["S"], &[("a", vec!["S"])]).unwrap_err();
        assert!(matches!(err, GrammarError::TerminalOnLeft { .. }));
    }

    #[test]
    fn rejects_duplicate_declaration() {
        let err = Grammar::from_parts(&["x"], &["x"], &[("x", vec![])]).unwrap_err();
        assert_eq!(err, GrammarError::DuplicateSymbol("x".to_string()));
    }

    #[test]
    fn membership_not_spelling() {
        // lowercase nonterminal, uppercase terminal
        let g = Grammar::from_parts(&["ID"], &["expr"], &[("expr", vec!["ID"])]).unwrap();
        assert!(g.is_terminal(g.get_symbol_index("ID").unwrap()));
        assert!(!g.is_terminal(g.get_symbol_index("expr").unwrap()));
    }
}
