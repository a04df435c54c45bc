use crowbook_text_processing::escape;
use serde::Serialize;

use super::{Grammar, GrammarAnalysis, EPSILON};

#[derive(Debug, Clone, Serialize)]
pub struct ProductionOutput<'a> {
    pub left: &'a str,
    pub rights: Vec<Vec<&'a str>>,
}

impl ProductionOutput<'_> {
    pub fn to_plaintext(&self, left_width: usize) -> String {
        self.rights
            .iter()
            .map(|right| {
                if right.is_empty() {
                    EPSILON.to_string()
                } else {
                    right.join(" ")
                }
            })
            .enumerate()
            .map(|(i, right)| {
                if i == 0 {
                    format!("{:>width$} -> {}", self.left, right, width = left_width)
                } else {
                    format!("{:>width$}  | {}", "", right, width = left_width)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn to_latex(&self) -> String {
        if self.rights.is_empty() {
            return String::new();
        }

        let left = format!("{} & \\rightarrow &", escape::tex(self.left));
        let right = self
            .rights
            .iter()
            .map(|right| {
                if right.is_empty() {
                    "\\epsilon".to_string()
                } else {
                    right
                        .iter()
                        .map(|s| escape::tex(*s))
                        .collect::<Vec<_>>()
                        .join(" \\ ")
                }
            })
            .collect::<Vec<_>>()
            .join(" \\mid ");

        left + &right
    }
}

#[derive(Serialize)]
pub struct ProductionOutputVec<'a> {
    productions: Vec<ProductionOutput<'a>>,
}

impl ProductionOutputVec<'_> {
    pub fn to_plaintext(&self) -> String {
        let left_max_len = self
            .productions
            .iter()
            .map(|p| p.left.chars().count())
            .max()
            .unwrap_or(0);
        self.productions
            .iter()
            .map(|s| s.to_plaintext(left_max_len))
            .collect::<Vec<String>>()
            .join("\n")
    }

    pub fn to_latex(&self) -> String {
        std::iter::once("\\[\\begin{array}{cll}".to_string())
            .chain(self.productions.iter().map(|s| s.to_latex()))
            .chain(std::iter::once("\\end{array}\\]".to_string()))
            .collect::<Vec<String>>()
            .join("\\\\\n")
    }
}

impl Grammar {
    /// Productions grouped by left side, in declaration order of the
    /// nonterminals.
    pub fn to_production_output_vec(&self) -> ProductionOutputVec<'_> {
        let productions = self
            .non_terminal_iter()
            .map(|left| ProductionOutput {
                left: self.get_symbol_name(left),
                rights: self
                    .productions_of(left)
                    .map(|p| {
                        p.right
                            .iter()
                            .map(|&s| self.get_symbol_name(s))
                            .collect()
                    })
                    .collect(),
            })
            .filter(|p| !p.rights.is_empty())
            .collect();
        ProductionOutputVec { productions }
    }
}

#[derive(Serialize)]
struct NonTerminalOutput<'a> {
    name: &'a str,
    nullable: bool,
    first: Vec<&'a str>,
}

impl NonTerminalOutput<'_> {
    fn to_plaintext(&self) -> String {
        format!("{} | {} | {}", self.name, self.nullable, self.first.join(", "))
    }

    fn to_latex(&self) -> String {
        let first = self
            .first
            .iter()
            .map(|s| {
                if *s == EPSILON {
                    r"$\epsilon$".to_string()
                } else {
                    escape::tex(*s).to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(r"\ ");

        format!("{} & {} & {}", escape::tex(self.name), self.nullable, first)
    }
}

#[derive(Serialize)]
pub struct NonTerminalOutputVec<'a> {
    data: Vec<NonTerminalOutput<'a>>,
}

impl NonTerminalOutputVec<'_> {
    pub fn to_plaintext(&self) -> String {
        self.data
            .iter()
            .map(|s| s.to_plaintext())
            .collect::<Vec<String>>()
            .join("\n")
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_latex(&self) -> String {
        let content = self
            .data
            .iter()
            .map(|e| e.to_latex())
            .collect::<Vec<_>>()
            .join("\\\\\n ");

        "\\begin{tabular}{c|c|c}\n".to_string()
            + "Symbol & Nullable & First\\\\\\hline\n"
            + &content
            + "\\\\\n\\end{tabular}"
    }
}

impl<'g> GrammarAnalysis<'g> {
    pub fn to_non_terminal_output_vec(&self) -> NonTerminalOutputVec<'g> {
        let g = self.grammar();
        let data = g
            .non_terminal_iter()
            .map(|nt| NonTerminalOutput {
                name: g.get_symbol_name(nt),
                nullable: self.is_nullable(nt),
                first: self.first(nt).names(g, EPSILON),
            })
            .collect();
        NonTerminalOutputVec { data }
    }
}
