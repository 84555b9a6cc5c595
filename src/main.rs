use std::io::{IsTerminal, Read};

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use fdcheck::logging::{LogConfig, init_logging};

#[derive(Parser)]
#[command(
    name = "fdcheck",
    about = "Build a set of functional dependencies, rejecting malformed, trivial, duplicate or overlapping ones"
)]
struct Cli {
    /// Session script (reads from stdin if not provided)
    file: Option<std::path::PathBuf>,

    /// Exit with status 1 if any dependency was rejected
    #[arg(long)]
    strict: bool,

    /// Do not print the final table
    #[arg(long)]
    no_table: bool,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        with_ansi: std::io::stderr().is_terminal(),
    };
    if let Err(e) = init_logging(&log_config) {
        eprintln!("ERROR: failed to initialize logging: {e}");
        std::process::exit(1);
    }

    let input = match cli.file {
        Some(path) => std::fs::read_to_string(&path).unwrap_or_else(|e| {
            eprintln!("ERROR: failed to read {}: {e}", path.display());
            std::process::exit(1);
        }),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).unwrap_or_else(|e| {
                eprintln!("ERROR: failed to read stdin: {e}");
                std::process::exit(1);
            });
            buf
        }
    };

    match fdcheck::check(&input) {
        Ok(report) => {
            print!("{}", report.to_text(!cli.no_table));
            std::process::exit(report.exit_code(cli.strict));
        }
        Err(e) => {
            eprintln!("ERROR: {e}");
            std::process::exit(1);
        }
    }
}
