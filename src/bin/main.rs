use anyhow::{anyhow, Context};
use clap::{error::ErrorKind, Parser};
use omix::Scanner;
use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const EX_USAGE: i32 = 64;
const EX_DATAERR: i32 = 65;
const EX_IOERR: i32 = 70;

/// Scans Omix source code and prints the resulting tokens.
#[derive(Parser, Debug)]
#[command(name = "omix", version)]
struct Cli {
    /// Script to scan; starts an interactive prompt when omitted
    script: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, env = "OMIX_VERBOSE")]
    verbose: bool,

    /// Disable color in log output
    #[arg(long, env = "OMIX_NO_COLOR")]
    no_color: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        },
        Err(_) => {
            println!("Usage: omix [script]");
            process::exit(EX_USAGE);
        },
    };

    if let Err(e) = init_logging(cli.verbose, cli.no_color) {
        eprintln!("{:#}", e);
    }

    let result = match cli.script.as_deref() {
        Some(path) => run_file(path),
        None => run_prompt(),
    };

    match result {
        Ok(true) => {},
        Ok(false) => process::exit(EX_DATAERR),
        Err(e) => {
            eprintln!("{:#}", e);
            process::exit(EX_IOERR);
        },
    }
}

fn init_logging(verbose: bool, no_color: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {}", e))
}

/// Returns `Ok(false)` when the script contained lexical errors.
fn run_file(path: &Path) -> anyhow::Result<bool> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))?;
    info!(path = %path.display(), bytes = contents.len(), "scanning file");

    let clean = Omix::new(io::stdout(), io::stderr()).run(&contents)?;
    Ok(clean)
}

fn run_prompt() -> anyhow::Result<bool> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut omix = Omix::new(io::stdout(), io::stderr());

    writeln!(stdout, "Omix Interpreter")?;
    writeln!(stdout, "Type 'exit' to quit")?;

    let mut buffer = String::new();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        buffer.clear();

        let num_bytes = stdin.lock().read_line(&mut buffer)?;
        if num_bytes == 0 { break };

        let line = buffer.trim_end_matches(&['\n', '\r'][..]);
        if line == "exit" { break };

        omix.run(line)?;
    }

    Ok(true)
}

struct Omix<Out, ErrOut> {
    out: Out,
    err_out: ErrOut,
}

impl <Out: Write, ErrOut: Write> Omix<Out, ErrOut> {
    fn new(out: Out, err_out: ErrOut) -> Self {
        Self { out, err_out }
    }

    /// Prints every token, or every error if there were any. Returns whether
    /// the source scanned cleanly.
    fn run(&mut self, source: &str) -> io::Result<bool> {
        let scanned = Scanner::new(source).scan_tokens();

        if scanned.has_errors() {
            for e in scanned.errors() {
                writeln!(self.err_out, "{}", e)?;
            }
            return Ok(false);
        }

        for token in scanned.tokens() {
            writeln!(self.out, "{}", token)?;
        }
        Ok(true)
    }
}
