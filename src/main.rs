use std::fs;

use clap::Parser;
use pyrite::interpreter::{
    evaluator::core::Context,
    folder::fold,
    grouper::group_lines,
    lexer::tokenize_source,
    parser::core::parse_program,
};

/// pyrite is a rudimentary, indentation-structured scripting language in the
/// spirit of Python, with four-space blocks, `while`/`if`, and a handful of
/// built-in functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the token stream of every source line before running.
    #[arg(short, long)]
    tokens: bool,

    /// Print the parsed and folded syntax tree before running.
    #[arg(short = 'r', long)]
    tree: bool,

    /// Path of the script file to run.
    file: String,
}

fn main() {
    let args = Args::parse();

    let script = fs::read_to_string(&args.file).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  &args.file);
        std::process::exit(1);
    });

    if let Err(e) = run(&args, &script) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args, script: &str) -> Result<(), Box<dyn std::error::Error>> {
    let lines = tokenize_source(script)?;
    if args.tokens {
        for line in &lines {
            println!("{:?}", line.tokens);
        }
    }

    let grouped = group_lines(&lines);
    let mut program = Vec::new();
    for statement in parse_program(&grouped)? {
        program.push(fold(statement)?);
    }

    if args.tree {
        for statement in &program {
            println!("{statement}");
        }
    }

    Context::new().run(&program)?;
    Ok(())
}
