//! Waymark CLI entry point.

use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use waymark_parser::AliasLoader;
use waymark_runtime::{OutputFormat, Repl, Session, SessionConfig, run_batch};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    alias_file: Option<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    show_tokens: bool,
    json: bool,
    verbose: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "-v" | "--verbose" => config.verbose = true,
            "--tokens" => config.show_tokens = true,
            "--json" => config.json = true,
            "-a" | "--aliases" => {
                i += 1;
                if i >= args.len() {
                    return Err("--aliases requires a file".into());
                }
                config.alias_file = Some(PathBuf::from(&args[i]));
            }
            arg => {
                return Err(format!("unknown option: {arg}").into());
            }
        }
        i += 1;
    }

    Ok(config)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = if verbose {
        EnvFilter::new(default)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("waymark {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_tracing(cli.verbose);

    let mut config = SessionConfig::default()
        .with_tokens(cli.show_tokens)
        .with_banner(!cli.batch_mode);
    if cli.json {
        config = config.with_format(OutputFormat::Json);
    }

    // An explicitly named alias file must exist and parse
    let session = match &cli.alias_file {
        Some(path) => {
            let overlay = AliasLoader::try_load(path)?;
            Session::with_overlay(config.with_alias_file(path), overlay)
        }
        None => Session::from_config(config),
    };

    if cli.batch_mode {
        run_batch(&session, io::stdin().lock(), io::stdout().lock())?;
        return Ok(());
    }

    Repl::new(session)?.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mWaymark\x1b[0m - Command parser for text adventures

\x1b[1mUSAGE:\x1b[0m
    waymark [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    -a, --aliases FILE   Load keyword aliases from a YAML file
    -b, --batch          Parse stdin line by line and exit (no REPL)
    --tokens             Print the token stream for each line
    --json               Print each command as JSON
    -v, --verbose        Debug logging on stderr (otherwise RUST_LOG, default warn)

\x1b[1mEXAMPLES:\x1b[0m
    waymark                          Start interactive REPL
    waymark -a aliases.yaml          Start REPL with extra aliases
    echo 'use key on door' | waymark -b --json

\x1b[1mREPL COMMANDS:\x1b[0m
    :help                Meta commands and verb aliases
    :aliases             List loaded aliases
    :tokens              Toggle the token display
    :json                Toggle JSON output
    :quit                Exit REPL
    Ctrl+D               Exit REPL"
    );
}
