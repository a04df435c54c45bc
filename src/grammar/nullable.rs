use log::debug;

use super::Grammar;

/// Which symbols derive the empty string, indexed like `Grammar::symbols`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullableTable {
    nullable: Vec<bool>,
}

impl NullableTable {
    pub fn derive(g: &Grammar) -> Self {
        let mut nullable = vec![false; g.symbols.len()];
        for production in &g.productions {
            if production.right.is_empty() {
                nullable[production.left] = true;
            }
        }

        let mut passes = 0;
        let mut changed = true;
        while changed {
            changed = false;
            passes += 1;
            for production in &g.productions {
                if nullable[production.left] {
                    continue;
                }
                if production.right.iter().all(|&s| nullable[s]) {
                    nullable[production.left] = true;
                    changed = true;
                }
            }
        }
        debug!("nullable closure reached after {} passes", passes);

        Self { nullable }
    }

    pub fn is_nullable(&self, symbol: usize) -> bool {
        self.nullable[symbol]
    }

    /// True when every symbol of `sequence` is nullable; vacuously true for
    /// the empty sequence.
    pub fn is_sequence_nullable(&self, sequence: &[usize]) -> bool {
        sequence.iter().all(|&s| self.nullable[s])
    }

    pub fn len(&self) -> usize {
        self.nullable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nullable.is_empty()
    }
}
