use std::{fs, process::ExitCode};

use clap::Parser;
use quill::{
    ast::Node, execute_partial, interpreter::parser::core::Parser as ProgramParser,
    is_structurally_changed,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// quill runs programs in a small integer statement language.
///
/// A program is a sequence of statements: `@name = expression;`,
/// `if (expression) statement`, `{ statements }` and `expression;`. Every
/// expression statement prints its value.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells quill to read the program (and `--previous`) from files.
    #[arg(short, long)]
    file: bool,

    /// Prints the parsed tree before running.
    #[arg(short, long)]
    ast: bool,

    /// On failure, still prints the values produced before it.
    #[arg(short, long)]
    keep_partial: bool,

    /// Limits how deeply statements and expressions may nest.
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// An earlier version of the program. quill reports whether an `if`
    /// with a braced body was added since.
    #[arg(long, value_name = "PREVIOUS")]
    previous: Option<String>,

    /// Raises log verbosity; repeat for more. `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let script = match load(&args.contents, args.file) {
        Ok(script) => script,
        Err(code) => return code,
    };
    info!(file = args.file, length = script.len(), "loaded program");

    let program = parse_with(&script, args.max_depth);

    if args.ast {
        print!("{}", program.tree());
    }

    if let Some(previous) = &args.previous {
        let previous = match load(previous, args.file) {
            Ok(previous) => previous,
            Err(code) => return code,
        };
        if is_structurally_changed(&parse_with(&previous, args.max_depth), &program) {
            println!("Added block statement");
        }
    }

    let execution = execute_partial(&program);
    if execution.is_success() || args.keep_partial {
        print_output(&execution.output);
    }

    match execution.error {
        Some(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        },
        None => ExitCode::SUCCESS,
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_target(false)
                             .with_writer(std::io::stderr)
                             .init();
}

fn load(contents: &str, is_file: bool) -> Result<String, ExitCode> {
    if !is_file {
        return Ok(contents.to_owned());
    }

    fs::read_to_string(contents).map_err(|e| {
                                    eprintln!("Failed to read the input file '{contents}': {e}");
                                    ExitCode::FAILURE
                                })
}

fn parse_with(source: &str, max_depth: Option<usize>) -> Node {
    let parser = ProgramParser::new(source);
    let parser = match max_depth {
        Some(limit) => parser.with_max_depth(limit),
        None => parser,
    };
    parser.parse()
}

fn print_output(output: &[i64]) {
    let line = output.iter()
                     .map(ToString::to_string)
                     .collect::<Vec<_>>()
                     .join(", ");
    println!("{line}");
}
