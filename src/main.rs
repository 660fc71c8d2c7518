use clap::{ArgAction, Parser};
use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::exit,
};
use tinyemu::{memory::RegisterFile, run, Execution, DEFAULT_DUMP};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "tinyemu",
    version,
    about = "Runs a toy .data/.code assembly program and dumps the registers"
)]
struct Cli {
    /// Program file. Reads stdin when omitted or `-`.
    file: Option<PathBuf>,

    /// Also print the registers as `al=.., bl=..` in decimal.
    #[arg(long)]
    summary: bool,

    /// Print the dump of an untouched machine and exit.
    #[arg(long = "default", conflicts_with = "file")]
    print_default: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_source(file: Option<&PathBuf>) -> Result<String, io::Error> {
    match file {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path),
        _ => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.print_default {
        print!("{}", DEFAULT_DUMP);
        return;
    }

    let source = match read_source(cli.file.as_ref()) {
        Ok(s) => s,
        Err(error) => {
            eprintln!("error: failed to read program: {}", error);
            exit(1);
        }
    };

    let outcome = match run(&source) {
        Ok(outcome) => outcome,
        Err(error) => {
            eprintln!("error: {}", error);
            exit(1);
        }
    };

    print!("{}", outcome.register_dump);
    if let Some(message) = outcome.missing_elements_message() {
        println!("{}", message);
    }
    if cli.summary {
        let registers = match outcome.execution {
            Execution::Completed(registers) => registers,
            Execution::Skipped => RegisterFile::new(),
        };
        println!("{}", registers);
    }
}
