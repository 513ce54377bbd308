//! # Keypad CLI Application
//!
//! Terminal host for the keypad calculator. Keys are typed as text and
//! translated with [`calc_core::parse_keys`]; the display is printed after
//! each line.
//!
//! ## Usage
//!
//! ```bash
//! # Batch: evaluate keys given on the command line
//! calc "5 + 3 =" "× 2 ="
//!
//! # Interactive: one line of keys at a time, `quit` to leave
//! calc
//!
//! # JSON snapshot instead of the plain display
//! calc --json "9 / 0 ="
//!
//! # Custom precision / history separator
//! calc --config keypad.json
//! ```
//!
//! Set `RUST_LOG=debug` to trace every state transition on stderr.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use calc_core::{parse_keys, CalcResult, Calculator, Settings};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Keypad calculator
///
/// Digits, `.`, `+ - × * / %`, `=` to compute, `<` to delete the last
/// character, `c` to clear.
#[derive(Parser, Debug)]
#[command(name = "calc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Key sequences to evaluate in order (interactive mode when omitted)
    #[arg(value_name = "KEYS")]
    keys: Vec<String>,

    /// Print the calculator state as JSON
    #[arg(long)]
    json: bool,

    /// Settings file (JSON)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let settings = match cli.config.as_deref() {
        Some(path) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                report_error(&e);
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };
    let mut calc = Calculator::with_settings(settings);
    tracing::debug!(precision = calc.settings().precision, "session started");

    if cli.keys.is_empty() {
        run_interactive(&mut calc, cli.json)
    } else {
        run_batch(&mut calc, &cli.keys, cli.json)
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_batch(calc: &mut Calculator, lines: &[String], json: bool) -> ExitCode {
    for line in lines {
        if let Err(e) = apply_line(calc, line) {
            report_error(&e);
            return ExitCode::FAILURE;
        }
    }

    print_state(calc, json);
    if !json {
        let history = calc.history();
        if !history.is_empty() {
            println!();
            println!("History:");
            println!("{}", history);
        }
    }
    ExitCode::SUCCESS
}

fn run_interactive(calc: &mut Calculator, json: bool) -> ExitCode {
    println!("Keypad Calculator");
    println!("=================");
    println!("Keys: 0-9 . + - × * / % = < (backspace) c (clear). Type `quit` to exit.");
    println!();
    print_state(calc, json);

    let stdin = io::stdin();
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }

        let line = line.trim();
        match line {
            "" => continue,
            "quit" | "exit" => break,
            "history" => {
                println!("{}", calc.history());
                continue;
            }
            _ => {}
        }

        match apply_line(calc, line) {
            Ok(()) => print_state(calc, json),
            Err(e) => report_error(&e),
        }
    }
    ExitCode::SUCCESS
}

/// Parse a whole line first so a typo does not leave half the keys applied.
fn apply_line(calc: &mut Calculator, line: &str) -> CalcResult<()> {
    for key in parse_keys(line)? {
        calc.press(key)?;
    }
    Ok(())
}

fn print_state(calc: &Calculator, json: bool) {
    if json {
        match serde_json::to_string_pretty(calc) {
            Ok(snapshot) => println!("{}", snapshot),
            Err(e) => eprintln!("Error: {}", e),
        }
        return;
    }

    match (calc.first_operand(), calc.operator()) {
        (Some(first), Some(op)) => println!(
            "  {} {}  [{}]",
            calc_core::format_result_with_precision(first, calc.settings().precision),
            op,
            calc.current_value()
        ),
        _ => println!("  [{}]", calc.current_value()),
    }
}

fn report_error(e: &calc_core::CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}
