pub mod analysis;
pub mod first;
pub mod grammar;
pub mod micro;
pub mod nullable;
pub mod parse;
pub mod pretty_print;
pub use analysis::GrammarAnalysis;
pub use grammar::{Grammar, GrammarError};

pub const EPSILON: &str = "ε";
pub const EPSILON_ALIASES: [&str; 2] = ["λ", "ϵ"];
