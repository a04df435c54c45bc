use crate::Grammar;

use super::grammar::GrammarError;

fn is_epsilon(s: &str) -> bool {
    s == super::EPSILON || super::EPSILON_ALIASES.contains(&s)
}

impl Grammar {
    /// Parses productions written one left side per line:
    ///
    /// ```text
    /// S -> a S | ε
    ///   | b
    /// ```
    ///
    /// Every name that appears on a left side is a nonterminal; every other
    /// name is a terminal. `#` starts a comment.
    pub fn parse(grammar: &str) -> Result<Self, GrammarError> {
        let mut non_terminals: Vec<&str> = Vec::new();
        let mut raw_productions: Vec<(&str, &str)> = Vec::new();

        let mut previous_left: Option<&str> = None;
        for (i, line) in grammar.lines().enumerate() {
            let err = |message: &str| GrammarError::Parse {
                line: i + 1,
                message: message.to_string(),
            };

            let line = line.split('#').next().unwrap_or("");
            if line.chars().all(|c| c.is_whitespace()) {
                continue;
            }
            let parts: Vec<&str> = line.split("->").collect();
            if parts.len() > 2 {
                return Err(err("too many \"->\""));
            }
            let (left, rights): (&str, &str) = if parts.len() == 2 {
                let left_str = parts[0].trim();
                if left_str.is_empty() {
                    return Err(err("empty left side"));
                } else if left_str.split_whitespace().count() != 1 {
                    return Err(err("left side contains whitespace"));
                } else if is_epsilon(left_str) {
                    return Err(err("epsilon on the left side"));
                }
                if !non_terminals.contains(&left_str) {
                    non_terminals.push(left_str);
                }
                (left_str, parts[1].trim())
            } else {
                let rest = parts[0].trim();
                match (previous_left, rest.strip_prefix('|')) {
                    (Some(left), Some(rights)) => (left, rights.trim()),
                    (None, _) => return Err(err("cannot find left side")),
                    (Some(_), None) => return Err(err("expected \"->\" or \"|\"")),
                }
            };

            previous_left = Some(left);
            raw_productions.push((left, rights));
        }

        let mut terminals: Vec<&str> = Vec::new();
        let mut productions: Vec<(&str, Vec<&str>)> = Vec::new();
        for (left, rights) in raw_productions {
            for right in rights.split('|') {
                let symbols: Vec<&str> = right
                    .split_whitespace()
                    .filter(|s| !is_epsilon(s))
                    .collect();
                for s in &symbols {
                    if !non_terminals.contains(s) && !terminals.contains(s) {
                        terminals.push(*s);
                    }
                }
                productions.push((left, symbols));
            }
        }

        Self::from_parts(&terminals, &non_terminals, &productions)
    }
}

#[cfg(test)]
mod tests {
    use crate::grammar::GrammarError;
    use crate::Grammar;

    #[test]
    fn simple_parse() {
        let g = Grammar::parse("S -> a").unwrap();

        let s = g.get_symbol_index("S").unwrap();
        let a = g.get_symbol_index("a").unwrap();

        assert_eq!(g.get_symbol_name(s), "S");
        assert_eq!(g.get_symbol_name(a), "a");
        assert!(g.is_terminal(a));
        assert_eq!(g.productions[0].right, vec![a]);
    }

    #[test]
    fn simple_parse_with_space_and_newline() {
        let g = Grammar::parse("  S -> a \n | b c").unwrap();

        let s = g.get_symbol_index("S").unwrap();
        let a = g.get_symbol_index("a").unwrap();
        let b = g.get_symbol_index("b").unwrap();
        let c = g.get_symbol_index("c").unwrap();

        assert_eq!(g.productions[0].left, s);
        assert_eq!(g.productions[0].right, vec![a]);
        assert_eq!(g.productions[1].left, s);
        assert_eq!(g.productions[1].right, vec![b, c]);
    }

    #[test]
    fn epsilon_alternatives() {
        let g = Grammar::parse("S -> a S | ε\nA -> λ |").unwrap();
        assert_eq!(g.productions.len(), 4);
        assert!(g.productions[1].right.is_empty());
        assert!(g.productions[2].right.is_empty());
        assert!(g.productions[3].right.is_empty());
        assert!(g.get_symbol_index("ε").is_none());
    }

    #[test]
    fn left_side_declared_later_is_non_terminal() {
        let g = Grammar::parse("S -> A b\nA -> a").unwrap();
        assert!(!g.is_terminal(g.get_symbol_index("A").unwrap()));
        assert_eq!(g.start_symbol, g.get_symbol_index("S"));
    }

    #[test]
    fn comments_and_blank_lines() {
        let g = Grammar::parse("# micro\n\n  S -> a # trailing\n").unwrap();
        assert_eq!(g.productions.len(), 1);
        assert_eq!(g.terminal_iter().count(), 1);
    }

    #[test]
    fn empty_parse() {
        let g = Grammar::parse("  \n  ").unwrap();
        assert!(g.productions.is_empty());
        assert_eq!(g.start_symbol, None);
    }

    #[test]
    fn two_rightarrows_parse() {
        let err = Grammar::parse("S -> a -> b").unwrap_err();
        assert_eq!(
            err,
            GrammarError::Parse {
                line: 1,
                message: "too many \"->\"".to_string()
            }
        );
    }

    #[test]
    fn no_left_parse() {
        assert!(Grammar::parse("-> a").is_err());
    }

    #[test]
    fn no_previous_left_parse() {
        let err = Grammar::parse("| a b\n S -> a").unwrap_err();
        assert!(matches!(err, GrammarError::Parse { line: 1, .. }));
    }

    #[test]
    fn left_contain_space() {
        assert!(Grammar::parse("S a S -> x").is_err());
    }

    #[test]
    fn stray_line() {
        let err = Grammar::parse("S -> a\nb c").unwrap_err();
        assert!(matches!(err, GrammarError::Parse { line: 2, .. }));
    }
}
