use std::io::{self, Write};

use clap::Parser;
use lineval::interpreter::{
    evaluator::evaluate,
    lexer::{Token, TokenStream},
    parser::parse,
};

/// Largest accepted input line, in bytes.
const MAX_LINE_LENGTH: usize = 1024;

/// lineval evaluates a single line of arithmetic over `+`, `-`, `*`, `/`
/// and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the token stream and the parsed expression tree before
    /// evaluating.
    #[arg(short, long)]
    trace: bool,

    /// The expression to evaluate. Reads one line from standard input when
    /// omitted.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    let line = args.expression.unwrap_or_else(read_line);

    if line.len() > MAX_LINE_LENGTH {
        eprintln!("Input is longer than {MAX_LINE_LENGTH} bytes.");
        std::process::exit(1);
    }

    if args.trace {
        trace_tokens(&line);
    }

    let expr = parse(&line).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });

    if args.trace {
        println!("parsed: {expr}");
    }

    match evaluate(&expr) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn read_line() -> String {
    print!("Enter an expression and press enter: ");
    // Make sure the prompt is visible before blocking on input.
    let _ = io::stdout().flush();

    let mut buffer = String::new();
    io::stdin().read_line(&mut buffer).unwrap_or_else(|e| {
        eprintln!("Failed to read a line from standard input: {e}");
        std::process::exit(1);
    });
    buffer
}

fn trace_tokens(line: &str) {
    let mut tokens = TokenStream::new(line);
    loop {
        match tokens.next_token() {
            Ok((Token::EndOfInput, _)) => break,
            Ok((token, span)) => println!("token: {token} at {}", span.start),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}
