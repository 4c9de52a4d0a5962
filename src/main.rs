use std::fs;

use clap::Parser;
use shunt::{
    error::Error,
    interpreter::{converter::to_postfix, evaluator::evaluate, lexer::tokenize},
};

/// shunt is an easy to use command-line evaluator for infix arithmetic
/// expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells shunt to look at a file instead of a command-line expression.
    #[arg(short, long)]
    file: bool,

    /// Print the lexed token sequence before evaluating.
    #[arg(short, long)]
    tokens: bool,

    /// Print the postfix (reverse Polish) form before evaluating.
    #[arg(short, long)]
    postfix: bool,

    contents: String,
}

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let args = Args::parse();

    let expression = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if let Err(e) = run(&expression, args.tokens, args.postfix) {
        eprintln!("{e}");
    }
}

fn run(expression: &str, dump_tokens: bool, dump_postfix: bool) -> Result<(), Error> {
    let tokens = tokenize(expression);

    if dump_tokens {
        for token in &tokens {
            println!("{token}");
        }
    }

    let postfix = to_postfix(tokens)?;

    if dump_postfix {
        for token in &postfix {
            println!("{token}");
        }
    }

    println!("{}", evaluate(&postfix)?);

    Ok(())
}
