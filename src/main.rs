use anyhow::{bail, Context, Result};
use std::{fs, io::Read};

use micro_compiler_helper::{
    grammar::micro::micro_grammar, tokenize_lossy, Grammar, GrammarAnalysis, Scanner, Token,
};

fn print_help() {
    println!("Usage: micro-compiler-helper outputs [options] [file]");
    println!("outputs:");
    println!("  tokens: Tokens of a Micro source file");
    println!("  prod: Productions");
    println!("  nf: Nullable and first");
    println!("options:");
    println!("  -h: Print this help");
    println!("  -l: Print in LaTeX format");
    println!("  -j: Print in JSON format");
    println!("  -k: Keep scanning after a lexical error");
    println!("  -g: Read a grammar from the input instead of using the Micro grammar");
}

enum OutputFormat {
    Plain,
    LaTeX,
    JSON,
}

fn scan_tokens(input: &str, keep_going: bool) -> Result<Vec<Token>> {
    if keep_going {
        let (tokens, errors) = tokenize_lossy(input);
        for e in &errors {
            eprintln!("error: {}", e);
        }
        return Ok(tokens);
    }

    let mut scanner = Scanner::new(input.as_bytes());
    let tokens = scanner.tokens().collect::<Result<Vec<_>, _>>()?;
    Ok(tokens)
}

fn print_tokens(tokens: &[Token], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::JSON => println!("{}", serde_json::to_string(tokens)?),
        OutputFormat::LaTeX => {
            println!("\\begin{{tabular}}{{l|l}}");
            println!("Kind & Lexeme\\\\\\hline");
            for t in tokens {
                println!(
                    "{} & \\texttt{{{}}}\\\\",
                    t.kind,
                    crowbook_text_processing::escape::tex(t.lexeme.as_str())
                );
            }
            println!("\\end{{tabular}}");
        }
        OutputFormat::Plain => {
            for t in tokens {
                println!("{}", t);
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut outputs: Vec<&str> = Vec::new();
    let args = std::env::args().skip(1).collect::<Vec<String>>();
    let mut i: usize = 0;
    while i < args.len() && ["tokens", "prod", "nf"].contains(&args[i].as_str()) {
        outputs.push(args[i].as_str());
        i += 1;
    }

    let mut output_format = OutputFormat::Plain;
    let mut keep_going = false;
    let mut grammar_input = false;

    while i < args.len() && ["-h", "--help", "-l", "-j", "-k", "-g"].contains(&args[i].as_str()) {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return Ok(());
            }
            "-l" => output_format = OutputFormat::LaTeX,
            "-j" => output_format = OutputFormat::JSON,
            "-k" => keep_going = true,
            "-g" => grammar_input = true,
            _ => {}
        }
        i += 1;
    }

    if i + 1 < args.len() || outputs.is_empty() {
        print_help();
        return Ok(());
    }

    if grammar_input && outputs.contains(&"tokens") {
        bail!("tokens cannot be combined with -g");
    }

    let needs_input = outputs.contains(&"tokens") || grammar_input;
    let input: String = if !needs_input {
        String::new()
    } else if i == args.len() {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        fs::read_to_string(args[i].as_str())
            .with_context(|| format!("'{}' is not a valid file name", args[i]))?
    };

    let g = if grammar_input {
        Grammar::parse(&input)?
    } else {
        micro_grammar()?
    };

    for output in outputs {
        match output {
            "tokens" => {
                let tokens = scan_tokens(&input, keep_going)?;
                print_tokens(&tokens, &output_format)?;
            }
            "prod" => {
                let t = g.to_production_output_vec();
                println!(
                    "{}",
                    match output_format {
                        OutputFormat::Plain => t.to_plaintext(),
                        OutputFormat::LaTeX => t.to_latex(),
                        OutputFormat::JSON => serde_json::to_string(&t)?,
                    }
                );
            }
            "nf" => {
                let t = GrammarAnalysis::new(&g).to_non_terminal_output_vec();
                println!(
                    "{}",
                    match output_format {
                        OutputFormat::Plain => t.to_plaintext(),
                        OutputFormat::LaTeX => t.to_latex(),
                        OutputFormat::JSON => t.to_json()?,
                    }
                );
            }
            _ => {}
        }
    }

    Ok(())
}
