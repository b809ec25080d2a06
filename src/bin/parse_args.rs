//! Decode syscall tracer argument lists, one per line.
//!
//! Usage:
//!   parse_args [OPTIONS] [FILE ...]
//!   parse_args < args.txt
//!
//! Each non-empty line is the text between a call's parentheses, e.g.
//! `3, "hello\n", 6`. Decoded values are printed one line per input line.
//!
//! Options:
//!   --human, -H        Tree view: one line per value with its kind
//!   --max-depth N      Deepest bracket/brace nesting accepted (default 128)
//!
//! Exit code 1 if any line failed to parse. Set RUST_LOG=debug for parse traces.

use strace_args::{format_tree, ArgumentsParser, ParseError, DEFAULT_MAX_DEPTH};
use std::io::{self, Read};
use std::path::Path;

#[derive(Clone, Copy)]
enum OutputStyle {
    Compact,
    Human,
}

fn print_error(source: &str, line_no: usize, e: &ParseError) {
    eprintln!("{}:{}: error: {}", source, line_no, e);
    if let ParseError::GrammarParse { rendered, .. } = e {
        for line in rendered.lines() {
            eprintln!("    {}", line);
        }
    }
}

/// Decode every non-empty line of `src`. Returns the number of failed lines.
fn process(parser: &ArgumentsParser, source: &str, src: &str, style: OutputStyle) -> usize {
    let mut failed = 0;
    for (i, line) in src.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parser.parse(line) {
            Ok(args) => match style {
                OutputStyle::Compact => println!("{}", args),
                OutputStyle::Human => {
                    println!("{}:{}:", source, i + 1);
                    print!("{}", format_tree(&args));
                }
            },
            Err(e) => {
                print_error(source, i + 1, &e);
                failed += 1;
            }
        }
    }
    failed
}

fn main() -> anyhow::Result<()> {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(log::LevelFilter::Warn);
    simple_logger::SimpleLogger::new().with_level(level).init()?;

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let style = if let Some(pos) = args.iter().position(|a| a == "--human" || a == "-H") {
        args.remove(pos);
        OutputStyle::Human
    } else {
        OutputStyle::Compact
    };
    let max_depth = if let Some(pos) = args.iter().position(|a| a == "--max-depth") {
        args.remove(pos);
        if pos >= args.len() {
            anyhow::bail!("--max-depth needs a value");
        }
        let n = args.remove(pos);
        n.parse::<usize>()
            .map_err(|e| anyhow::anyhow!("--max-depth {}: {}", n, e))?
    } else {
        DEFAULT_MAX_DEPTH
    };
    let parser = ArgumentsParser::new().with_max_depth(max_depth);

    let mut failed = 0usize;
    if args.is_empty() {
        let mut src = String::new();
        io::stdin().read_to_string(&mut src)?;
        failed += process(&parser, "<stdin>", &src, style);
    } else {
        for path in &args {
            let path = Path::new(path);
            let src = match std::fs::read_to_string(path) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("{}: {}", path.display(), e);
                    failed += 1;
                    continue;
                }
            };
            failed += process(&parser, &path.display().to_string(), &src, style);
        }
    }

    if failed > 0 {
        log::warn!("{} line(s) failed to parse", failed);
        std::process::exit(1);
    }
    Ok(())
}
