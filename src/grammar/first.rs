use std::collections::HashSet;

use log::debug;

use super::{nullable::NullableTable, Grammar};

/// Terminals that can begin a derivation, plus the derives-empty marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FirstSet {
    pub terminals: HashSet<usize>,
    pub epsilon: bool,
}

impl FirstSet {
    pub fn epsilon_only() -> Self {
        Self {
            terminals: HashSet::new(),
            epsilon: true,
        }
    }

    pub fn contains(&self, terminal: usize) -> bool {
        self.terminals.contains(&terminal)
    }

    pub fn has_epsilon(&self) -> bool {
        self.epsilon
    }

    pub fn len(&self) -> usize {
        self.terminals.len() + usize::from(self.epsilon)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sorted terminal names, with `marker` appended when the set holds the
    /// empty marker.
    pub fn names<'g>(&self, g: &'g Grammar, marker: &'g str) -> Vec<&'g str> {
        let mut names: Vec<&str> = self
            .terminals
            .iter()
            .map(|&t| g.get_symbol_name(t))
            .collect();
        names.sort();
        if self.epsilon {
            names.push(marker);
        }
        names
    }
}

/// FIRST terminals of every symbol, indexed like `Grammar::symbols`. The
/// empty marker is not stored; it comes from the nullable table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstTable {
    first: Vec<HashSet<usize>>,
}

impl FirstTable {
    pub fn build(g: &Grammar, nullable: &NullableTable) -> Self {
        let mut first: Vec<HashSet<usize>> = vec![HashSet::new(); g.symbols.len()];
        for t in g.terminal_iter() {
            first[t].insert(t);
        }

        let mut passes = 0;
        let mut changed = true;
        while changed {
            changed = false;
            passes += 1;
            for production in &g.productions {
                let added = sequence_terminals(&first, nullable, &production.right);
                let target = &mut first[production.left];
                let before = target.len();
                target.extend(added);
                if target.len() != before {
                    changed = true;
                }
            }
        }
        debug!("FIRST closure reached after {} passes", passes);

        Self { first }
    }

    /// FIRST of a single symbol. Carries the empty marker iff the symbol is
    /// nullable.
    pub fn first(&self, nullable: &NullableTable, symbol: usize) -> FirstSet {
        FirstSet {
            terminals: self.first[symbol].clone(),
            epsilon: nullable.is_nullable(symbol),
        }
    }

    /// FIRST of a symbol string. The empty sequence yields only the empty
    /// marker.
    pub fn first_of_sequence(&self, nullable: &NullableTable, sequence: &[usize]) -> FirstSet {
        FirstSet {
            terminals: sequence_terminals(&self.first, nullable, sequence),
            epsilon: nullable.is_sequence_nullable(sequence),
        }
    }
}

fn sequence_terminals(
    first: &[HashSet<usize>],
    nullable: &NullableTable,
    sequence: &[usize],
) -> HashSet<usize> {
    let mut result = HashSet::new();
    for &symbol in sequence {
        result.extend(first[symbol].iter().cloned());
        if !nullable.is_nullable(symbol) {
            break;
        }
    }
    result
}
