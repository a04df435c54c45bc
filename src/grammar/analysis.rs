use super::{
    first::{FirstSet, FirstTable},
    nullable::NullableTable,
    Grammar, EPSILON,
};

/// Nullable flags and FIRST sets of one grammar, computed in full on
/// construction and read-only afterwards.
#[derive(Debug, Clone)]
pub struct GrammarAnalysis<'g> {
    grammar: &'g Grammar,
    nullable: NullableTable,
    first: FirstTable,
}

impl<'g> GrammarAnalysis<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        let nullable = NullableTable::derive(grammar);
        let first = FirstTable::build(grammar, &nullable);
        Self {
            grammar,
            nullable,
            first,
        }
    }

    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    pub fn nullable_table(&self) -> &NullableTable {
        &self.nullable
    }

    pub fn first_table(&self) -> &FirstTable {
        &self.first
    }

    pub fn is_nullable(&self, symbol: usize) -> bool {
        self.nullable.is_nullable(symbol)
    }

    pub fn first(&self, symbol: usize) -> FirstSet {
        self.first.first(&self.nullable, symbol)
    }

    pub fn first_of_sequence(&self, sequence: &[usize]) -> FirstSet {
        self.first.first_of_sequence(&self.nullable, sequence)
    }

    pub fn is_nullable_by_name(&self, name: &str) -> Option<bool> {
        self.grammar
            .get_symbol_index(name)
            .map(|idx| self.is_nullable(idx))
    }

    pub fn first_by_name(&self, name: &str) -> Option<FirstSet> {
        self.grammar.get_symbol_index(name).map(|idx| self.first(idx))
    }

    /// FIRST of a whitespace-separated symbol string. `None` if any name is
    /// not in the vocabulary.
    pub fn first_of_names(&self, names: &str) -> Option<FirstSet> {
        self.grammar
            .symbol_indices(names)
            .map(|seq| self.first_of_sequence(&seq))
    }

    /// Sorted terminal names of FIRST(`name`), with `ε` last when nullable.
    pub fn first_names(&self, name: &str) -> Option<Vec<&'g str>> {
        self.first_by_name(name)
            .map(|set| set.names(self.grammar, EPSILON))
    }

    /// Nullable nonterminals in declaration order.
    pub fn nullable_names(&self) -> Vec<&'g str> {
        self.grammar
            .non_terminal_iter()
            .filter(|&i| self.is_nullable(i))
            .map(|i| self.grammar.get_symbol_name(i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queries_by_name() {
        let g = Grammar::parse("S -> a S | ε").unwrap();
        let a = GrammarAnalysis::new(&g);

        assert_eq!(a.is_nullable_by_name("S"), Some(true));
        assert_eq!(a.is_nullable_by_name("a"), Some(false));
        assert_eq!(a.is_nullable_by_name("T"), None);
        assert_eq!(a.first_names("S"), Some(vec!["a", EPSILON]));
        assert!(a.first_by_name("S").unwrap().has_epsilon());
        assert_eq!(a.first_of_names("a S").unwrap().len(), 1);
        assert!(a.first_of_names("S x").is_none());
        assert_eq!(a.first_of_names(""), Some(FirstSet::epsilon_only()));
    }

    #[test]
    fn empty_marker_only() {
        let g = Grammar::parse("S -> A b\nA -> ε").unwrap();
        let a = GrammarAnalysis::new(&g);
        assert_eq!(a.first_names("S"), Some(vec!["b"]));
        assert_eq!(a.first_names("A"), Some(vec![EPSILON]));
    }

    #[test]
    fn rebuilding_is_idempotent() {
        let g = Grammar::parse("E -> T E'\nE' -> + T E' | ε\nT -> ( E ) | id").unwrap();
        let first = GrammarAnalysis::new(&g);
        let second = GrammarAnalysis::new(&g);
        assert_eq!(first.nullable_table(), second.nullable_table());
        assert_eq!(first.first_table(), second.first_table());
    }
}
