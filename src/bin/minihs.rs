//! Interactive REPL for minihs
//!
//! Usage: minihs [program-file]
//!
//! Set `MINIHS_CONFIG` to a JSON file to override the interpreter
//! configuration, and `RUST_LOG=minihs=debug` to see load diagnostics.

use anyhow::{Context, Result};
use minihs::{InterpreterConfig, LoadOutcome, Session, ToolRegistry};
use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let config = load_config()?;
    let mut session = Session::with_config(config);

    if let Some(path) = env::args().nth(1) {
        load_file(&mut session, &path)?;
    }

    println!("minihs {} - type :help for commands", minihs::VERSION);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("minihs> ");
        io::stdout().flush()?;

        let input = match lines.next() {
            Some(line) => line.context("failed to read input")?,
            None => break,
        };
        let input = input.trim();

        if let Some(path) = input.strip_prefix(":load ") {
            if let Err(err) = load_file(&mut session, path.trim()) {
                eprintln!("error: {:#}", err);
            }
            continue;
        }

        match input {
            ":quit" | ":q" => break,
            ":help" | ":h" => print_help(),
            ":clear" => {
                session = Session::with_config(load_config()?);
                println!("Definitions cleared");
            }
            _ => {
                let outcome = session.eval_repl_line(input);
                match (outcome.result_text, outcome.error_message) {
                    (_, Some(message)) => eprintln!("error: {}", message),
                    (Some(text), None) if !text.is_empty() => println!("{}", text),
                    _ => {}
                }
            }
        }
    }

    Ok(())
}

fn load_config() -> Result<InterpreterConfig> {
    match env::var("MINIHS_CONFIG") {
        Ok(path) => {
            let json = fs::read_to_string(&path)
                .with_context(|| format!("failed to read config {}", path))?;
            InterpreterConfig::from_json(&json)
                .with_context(|| format!("invalid config {}", path))
        }
        Err(_) => Ok(InterpreterConfig::default()),
    }
}

fn load_file(session: &mut Session, path: &str) -> Result<()> {
    let source =
        fs::read_to_string(path).with_context(|| format!("failed to read program {}", path))?;
    report(path, &session.load(&source));
    Ok(())
}

fn report(path: &str, outcome: &LoadOutcome) {
    match (&outcome.report, &outcome.error_message) {
        (Some(report), _) => println!(
            "Loaded {}: {} function(s), {} clause(s), {} variable(s)",
            path,
            report.loaded_function_count,
            report.loaded_clause_count,
            report.loaded_variable_count
        ),
        (None, Some(message)) => eprintln!("error loading {}: {}", path, message),
        (None, None) => {}
    }
}

fn print_help() {
    println!("Commands:");
    println!("  :load <file>   replace all definitions with those in <file>");
    println!("  :clear         drop every definition and variable");
    println!("  :help          show this help");
    println!("  :quit          leave the REPL");
    println!();
    println!("Anything else is evaluated:");
    println!("  factorial 5");
    println!("  map (*2) [1, 2, 3]");
    println!("  x = fold (+) 0 [1, 2, 3]");
    println!();
    println!("Builtins:");
    println!("  {:<8} apply a function to every element", "map");
    println!("  {:<8} keep elements the predicate accepts", "filter");
    println!("  {:<8} combine elements left to right from a start value", "fold");
    let registry = ToolRegistry::new();
    for name in registry.list_tools() {
        if let Some(tool) = registry.get(&name) {
            println!("  {:<8} {}", name, tool.description());
        }
    }
}
